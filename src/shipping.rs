//! Shipping reports and manifest export
//!
//! Shipping is pure reporting: it never mutates a box. The manifest is an
//! optional JSON snapshot of a shipped load for the driver's
//! `--export-manifest` flag.

use std::io;

use serde::{Deserialize, Serialize};

use crate::melon::Melon;
use crate::packing::MelonBox;
use crate::status::{self, StatusLevel};

const ACTOR: &str = "ShipperBot";

/// Summary produced by shipping a load of boxes
#[derive(Clone, Debug, PartialEq)]
pub struct ShippingReport {
    pub box_count: usize,
    /// Per-box melon weight totals, in box order
    pub box_weights: Vec<f32>,
}

/// Ship boxes: report the box count and each box's weight.
pub fn ship(boxes: &[MelonBox]) -> ShippingReport {
    status::report(
        ACTOR,
        StatusLevel::Info,
        &format!("Shipping {} boxes of melons.", boxes.len()),
    );

    let mut box_weights = Vec::with_capacity(boxes.len());
    for (i, mbox) in boxes.iter().enumerate() {
        let weight = mbox.weight();
        status::report(
            ACTOR,
            StatusLevel::Info,
            &format!("Box {} Weight: {:.2} lbs", i + 1, weight),
        );
        box_weights.push(weight);
    }

    ShippingReport {
        box_count: boxes.len(),
        box_weights,
    }
}

/// One box as recorded in the shipping manifest
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ManifestBox {
    pub weight: f32,
    pub melons: Vec<Melon>,
}

/// Snapshot of a shipped load, exportable as JSON
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// Master seed the run was driven by
    pub seed: u64,
    pub box_count: usize,
    pub boxes: Vec<ManifestBox>,
}

impl Manifest {
    pub fn from_boxes(seed: u64, boxes: &[MelonBox]) -> Self {
        Self {
            seed,
            box_count: boxes.len(),
            boxes: boxes
                .iter()
                .map(|b| ManifestBox {
                    weight: b.weight(),
                    melons: b.melons().to_vec(),
                })
                .collect(),
        }
    }
}

/// Write a manifest as pretty-printed JSON.
pub fn export_manifest(manifest: &Manifest, path: &str) -> io::Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, json)
}
