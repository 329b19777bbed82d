//! Single-melon robot stations
//!
//! Each station is a stateless free function reporting under its own actor
//! name. The two random stations (picking, labeling) take the line's RNG
//! explicitly so runs are reproducible from a seed. Inspection and packing
//! have their own modules.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::melon::{Label, Melon, MelonColor, Species};
use crate::status::{self, StatusLevel};

/// Chance that each individual sticker lands during labeling
const LABEL_CHANCE: f64 = 0.9;

/// Assign a picked weight and rind color.
///
/// Weight is uniform in [0, 10). Winter Squash comes off the vine yellow;
/// every other species is green.
pub fn pick(melon: &mut Melon, rng: &mut ChaCha8Rng) {
    melon.weight = rng.gen_range(0.0..10.0);
    melon.color = if melon.species == Species::WinterSquash {
        Some(MelonColor::Yellow)
    } else {
        Some(MelonColor::Green)
    };

    status::report(
        "PickerBot",
        StatusLevel::Info,
        &format!("Picked a {}", melon),
    );
}

/// Clean a melon. Reporting only; a placeholder station.
pub fn clean(melon: &Melon) {
    status::report(
        "CleanerBot",
        StatusLevel::Info,
        &format!("Cleaned a {}", melon),
    );
}

/// Apply stickers with two independent draws, logo first.
///
/// Both draws always happen, so a given RNG state yields the same label
/// outcome regardless of whether the first sticker landed.
pub fn apply_labels(melon: &mut Melon, rng: &mut ChaCha8Rng) {
    if rng.gen_bool(LABEL_CHANCE) {
        melon.labels.push(Label::Logo);
    }
    if rng.gen_bool(LABEL_CHANCE) {
        melon.labels.push(Label::Guarantee);
    }

    status::report(
        "StickerBot",
        StatusLevel::Info,
        &format!("Applied stickers to a {}", melon),
    );
}

/// Paint a melon green. Idempotent; usable to salvage a wrong-color reject
/// before re-inspection.
pub fn repaint(melon: &mut Melon) {
    status::report(
        "PainterBot",
        StatusLevel::Info,
        &format!("Painting {} Green", melon),
    );
    melon.color = Some(MelonColor::Green);
}

/// Dispose of a rejected melon. Consumes it.
pub fn trash(melon: Melon) {
    status::report(
        "TrashBot",
        StatusLevel::Warning,
        &format!("Sending {} to the compost", melon),
    );
}
