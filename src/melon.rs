//! Melon data model
//!
//! Melons enter the line unpicked (no weight, no color), are mutated by the
//! robot stations, and leave either boxed for shipping or composted.

use serde::{Deserialize, Serialize};

/// Melon species handled by the line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Cantaloupe,
    Watermelon,
    Honeydew,
    Muskmelon,
    WinterSquash,
}

impl Species {
    /// Get all species in order
    pub fn all() -> &'static [Species] {
        &[
            Species::Cantaloupe,
            Species::Watermelon,
            Species::Honeydew,
            Species::Muskmelon,
            Species::WinterSquash,
        ]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            Species::Cantaloupe => "Cantaloupe",
            Species::Watermelon => "Watermelon",
            Species::Honeydew => "Honeydew",
            Species::Muskmelon => "Muskmelon",
            Species::WinterSquash => "Winter Squash",
        }
    }
}

/// Rind color assigned at picking
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MelonColor {
    Green,
    Yellow,
}

impl MelonColor {
    pub fn name(&self) -> &'static str {
        match self {
            MelonColor::Green => "Green",
            MelonColor::Yellow => "Yellow",
        }
    }
}

/// Sticker applied by the labeling station.
///
/// The quality gate counts labels rather than reading them; the variants
/// exist so a melon's sticker history is self-describing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Logo,
    Guarantee,
}

impl Label {
    /// Printed sticker text
    pub fn name(&self) -> &'static str {
        match self {
            Label::Logo => "UberMelon Logo",
            Label::Guarantee => "Satisfaction Guaranteed",
        }
    }
}

/// A single melon moving through the line
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Melon {
    pub species: Species,
    /// Pounds; 0.0 until assigned once by picking
    pub weight: f32,
    /// None until picking assigns one
    pub color: Option<MelonColor>,
    /// Stickers in application order
    pub labels: Vec<Label>,
}

impl Melon {
    /// Create an unpicked melon
    pub fn new(species: Species) -> Self {
        Self {
            species,
            weight: 0.0,
            color: None,
            labels: Vec::new(),
        }
    }
}

impl std::fmt::Display for Melon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} lb {}", self.weight, self.species.name())
    }
}
