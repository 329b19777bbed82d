//! Quality gate
//!
//! The only branching decision in the line: four short-circuiting checks,
//! reported as the first failing reason. A rejection is a normal outcome,
//! not an error.

use crate::melon::{Melon, MelonColor};
use crate::status::{self, StatusLevel};

/// Minimum shippable weight in pounds
pub const MIN_WEIGHT: f32 = 3.0;
/// Heavier than this costs too much to ship
pub const MAX_WEIGHT: f32 = 8.0;
/// Stickers a correctly labeled melon carries
pub const REQUIRED_LABELS: usize = 2;

const ACTOR: &str = "InspectorBot 2000";

/// Why a melon failed inspection, in check order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    TooLight = 0,
    TooHeavy = 1,
    Mislabeled = 2,
    WrongColor = 3,
}

impl RejectReason {
    /// Get all reasons in check order
    pub fn all() -> &'static [RejectReason] {
        &[
            RejectReason::TooLight,
            RejectReason::TooHeavy,
            RejectReason::Mislabeled,
            RejectReason::WrongColor,
        ]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            RejectReason::TooLight => "too light",
            RejectReason::TooHeavy => "too heavy",
            RejectReason::Mislabeled => "mislabeled",
            RejectReason::WrongColor => "wrong color",
        }
    }
}

/// Outcome of inspecting one melon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Reject(RejectReason),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Evaluate a melon against the quality gate.
///
/// Checks run in order and stop at the first failure, so a melon violating
/// several rules is reported for the first one only. Order affects which
/// reason is emitted, never the overall pass/fail outcome.
pub fn inspect(melon: &Melon) -> Verdict {
    status::report(ACTOR, StatusLevel::Info, &format!("Evaluating a {}", melon));

    let verdict = evaluate(melon);
    match verdict {
        Verdict::Pass => {
            status::report(ACTOR, StatusLevel::Success, &format!("{} passes", melon));
        }
        Verdict::Reject(reason) => {
            status::report(
                ACTOR,
                StatusLevel::Danger,
                &format!("{} is {}! REJECTED!", melon, reason.name()),
            );
        }
    }
    verdict
}

fn evaluate(melon: &Melon) -> Verdict {
    // Under 3 lb misses the quality floor
    if melon.weight < MIN_WEIGHT {
        return Verdict::Reject(RejectReason::TooLight);
    }
    // Over 8 lb costs too much to ship
    if melon.weight > MAX_WEIGHT {
        return Verdict::Reject(RejectReason::TooHeavy);
    }
    // Every shipped melon carries both stickers
    if melon.labels.len() < REQUIRED_LABELS {
        return Verdict::Reject(RejectReason::Mislabeled);
    }
    // Customers expect green melons
    if melon.color != Some(MelonColor::Green) {
        return Verdict::Reject(RejectReason::WrongColor);
    }
    Verdict::Pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::melon::{Label, Species};

    fn melon(weight: f32, labels: usize, color: Option<MelonColor>) -> Melon {
        let mut m = Melon::new(Species::Cantaloupe);
        m.weight = weight;
        m.color = color;
        for i in 0..labels {
            m.labels.push(if i == 0 { Label::Logo } else { Label::Guarantee });
        }
        m
    }

    #[test]
    fn test_good_melon_passes() {
        let v = inspect(&melon(5.0, 2, Some(MelonColor::Green)));
        assert_eq!(v, Verdict::Pass);
        assert!(v.is_pass());
    }

    #[test]
    fn test_weight_bounds_are_inclusive() {
        assert!(inspect(&melon(3.0, 2, Some(MelonColor::Green))).is_pass());
        assert!(inspect(&melon(8.0, 2, Some(MelonColor::Green))).is_pass());
    }

    #[test]
    fn test_too_light() {
        assert_eq!(
            inspect(&melon(2.9, 2, Some(MelonColor::Green))),
            Verdict::Reject(RejectReason::TooLight)
        );
    }

    #[test]
    fn test_too_heavy() {
        assert_eq!(
            inspect(&melon(8.1, 2, Some(MelonColor::Green))),
            Verdict::Reject(RejectReason::TooHeavy)
        );
    }

    #[test]
    fn test_mislabeled() {
        assert_eq!(
            inspect(&melon(5.0, 1, Some(MelonColor::Green))),
            Verdict::Reject(RejectReason::Mislabeled)
        );
    }

    #[test]
    fn test_wrong_color() {
        assert_eq!(
            inspect(&melon(5.0, 2, Some(MelonColor::Yellow))),
            Verdict::Reject(RejectReason::WrongColor)
        );
        // An unpicked color also fails the color rule, not an earlier one
        assert_eq!(
            inspect(&melon(5.0, 2, None)),
            Verdict::Reject(RejectReason::WrongColor)
        );
    }

    #[test]
    fn test_first_failing_check_wins() {
        // Too light beats every later violation
        assert_eq!(
            inspect(&melon(2.9, 0, Some(MelonColor::Yellow))),
            Verdict::Reject(RejectReason::TooLight)
        );
        // Too heavy beats labeling and color
        assert_eq!(
            inspect(&melon(9.5, 0, Some(MelonColor::Yellow))),
            Verdict::Reject(RejectReason::TooHeavy)
        );
        // Labeling beats color
        assert_eq!(
            inspect(&melon(5.0, 1, Some(MelonColor::Yellow))),
            Verdict::Reject(RejectReason::Mislabeled)
        );
    }
}
