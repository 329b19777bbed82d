//! Box container and greedy packing
//!
//! Boxes fill in melon arrival order; a new box opens only when the current
//! one is full, so every shipped box holds between 1 and `BOX_CAPACITY`
//! melons and only the last box may be partial.

use std::error::Error;
use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::melon::Melon;
use crate::status::{self, StatusLevel};

/// Melons per box
pub const BOX_CAPACITY: usize = 5;

/// Ordered, bounded box of melons.
///
/// Contents are private; `add` is the only mutator and enforces the
/// capacity invariant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MelonBox {
    melons: Vec<Melon>,
}

impl MelonBox {
    /// Create an empty box
    pub fn new() -> Self {
        Self { melons: Vec::new() }
    }

    pub fn is_full(&self) -> bool {
        self.melons.len() >= BOX_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.melons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.melons.is_empty()
    }

    /// Melons in packing order
    pub fn melons(&self) -> &[Melon] {
        &self.melons
    }

    /// Add a melon. A full box hands the melon back inside the error
    /// instead of dropping it.
    pub fn add(&mut self, melon: Melon) -> Result<(), BoxFull> {
        if self.is_full() {
            return Err(BoxFull(melon));
        }
        self.melons.push(melon);
        Ok(())
    }

    /// Total weight of contained melons in pounds
    pub fn weight(&self) -> f32 {
        self.melons.iter().map(|m| m.weight).sum()
    }

    /// Pipe-delimited listing of contents for display
    pub fn contents_line(&self) -> String {
        let mut line = String::from("|");
        for melon in &self.melons {
            line.push_str(&format!(" {} |", melon));
        }
        line
    }
}

/// An add was attempted on a box already at capacity. Carries the melon
/// back so the caller decides what happens to it.
#[derive(Clone, Debug)]
pub struct BoxFull(pub Melon);

impl fmt::Display for BoxFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "box already holds {} melons; {} was not added",
            BOX_CAPACITY, self.0
        )
    }
}

impl Error for BoxFull {}

/// Pack melons into boxes in arrival order.
///
/// Boxes open lazily: zero melons yields zero boxes, N melons yields
/// ceil(N / BOX_CAPACITY) boxes with all but the last exactly full.
/// The `BoxFull` arm is unreachable once the full box has been rotated
/// out; it propagates rather than dropping the melon.
pub fn pack_melons(melons: Vec<Melon>) -> Result<Vec<MelonBox>, BoxFull> {
    let mut boxes = Vec::new();
    let mut open = MelonBox::new();

    for melon in melons {
        status::report("PackerBot", StatusLevel::Info, &format!("Packing {}", melon));

        if open.is_full() {
            boxes.push(mem::take(&mut open));
        }
        open.add(melon)?;
    }

    if !open.is_empty() {
        boxes.push(open);
    }
    Ok(boxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::melon::Species;

    fn melon(weight: f32) -> Melon {
        let mut m = Melon::new(Species::Cantaloupe);
        m.weight = weight;
        m
    }

    #[test]
    fn test_add_respects_capacity() {
        let mut mbox = MelonBox::new();
        for _ in 0..BOX_CAPACITY {
            mbox.add(melon(4.0)).unwrap();
        }
        assert!(mbox.is_full());

        let rejected = mbox.add(melon(9.9)).unwrap_err();
        assert_eq!(rejected.0.weight, 9.9);
        assert_eq!(mbox.len(), BOX_CAPACITY);
    }

    #[test]
    fn test_box_weight_sums_melons() {
        let mut mbox = MelonBox::new();
        mbox.add(melon(4.0)).unwrap();
        mbox.add(melon(5.5)).unwrap();
        mbox.add(melon(2.0)).unwrap();
        assert_eq!(mbox.weight(), 11.5);
    }

    #[test]
    fn test_pack_twelve_melons_into_three_boxes() {
        let melons = (0..12).map(|_| melon(5.0)).collect();
        let boxes = pack_melons(melons).unwrap();
        assert_eq!(boxes.len(), 3);
        assert_eq!(boxes[0].len(), 5);
        assert_eq!(boxes[1].len(), 5);
        assert_eq!(boxes[2].len(), 2);
    }

    #[test]
    fn test_pack_exact_multiple_has_no_partial_box() {
        let melons = (0..10).map(|_| melon(5.0)).collect();
        let boxes = pack_melons(melons).unwrap();
        assert_eq!(boxes.len(), 2);
        assert!(boxes.iter().all(|b| b.len() == BOX_CAPACITY));
    }

    #[test]
    fn test_pack_nothing_yields_no_boxes() {
        let boxes = pack_melons(Vec::new()).unwrap();
        assert!(boxes.is_empty());
    }

    #[test]
    fn test_pack_preserves_arrival_order() {
        let melons: Vec<Melon> = (0..7).map(|i| melon(i as f32)).collect();
        let boxes = pack_melons(melons).unwrap();

        let weights: Vec<f32> = boxes
            .iter()
            .flat_map(|b| b.melons().iter().map(|m| m.weight))
            .collect();
        assert_eq!(weights, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_contents_line() {
        let mut mbox = MelonBox::new();
        mbox.add(melon(4.0)).unwrap();
        mbox.add(melon(5.5)).unwrap();
        assert_eq!(mbox.contents_line(), "| 4.0 lb Cantaloupe | 5.5 lb Cantaloupe |");
    }
}
