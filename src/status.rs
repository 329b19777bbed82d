//! Colored status line output for robot stations
//!
//! Every station reports progress as `[Actor] message` lines. Color encodes
//! severity only; nothing downstream parses these lines.

use crossterm::style::Stylize;

/// Severity of a status line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Danger,
}

/// Plain `[Actor] message` form, without color codes
pub fn format_line(actor: &str, message: &str) -> String {
    format!("[{}] {}", actor, message)
}

/// Print a status line with the actor tag in yellow and the message colored
/// by severity.
pub fn report(actor: &str, level: StatusLevel, message: &str) {
    let tag = format!("[{}]", actor);
    match level {
        StatusLevel::Info => println!("{} {}", tag.yellow(), message),
        StatusLevel::Success => println!("{} {}", tag.yellow(), message.green()),
        StatusLevel::Warning => println!("{} {}", tag.yellow(), message.dark_yellow()),
        StatusLevel::Danger => println!("{} {}", tag.yellow(), message.red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line("PickerBot", "Picked a 4.3 lb Honeydew"),
            "[PickerBot] Picked a 4.3 lb Honeydew"
        );
    }
}
