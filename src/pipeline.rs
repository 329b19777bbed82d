//! Line driver: runs a batch of melons through every station in order
//!
//! pick → clean → label → inspect, then accepted melons are packed and
//! shipped while rejects are composted. Salvage, when enabled, repaints a
//! wrong-color reject and gives it one more inspection.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::inspection::{self, RejectReason, Verdict};
use crate::melon::{Melon, Species};
use crate::packing::{self, BoxFull, MelonBox};
use crate::robots;
use crate::shipping::{self, ShippingReport};

/// Pipeline behavior knobs
#[derive(Clone, Copy, Debug, Default)]
pub struct LineConfig {
    /// Repaint wrong-color rejects and inspect them once more
    pub salvage: bool,
}

/// Everything a line run produced
#[derive(Clone, Debug, PartialEq)]
pub struct LineReport {
    pub processed: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Melons that passed only after a repaint
    pub salvaged: usize,
    /// Final rejection tally per reason, in check order
    pub rejections: Vec<(RejectReason, usize)>,
    pub boxes: Vec<MelonBox>,
    pub shipping: ShippingReport,
}

/// Create a batch of unpicked melons with species drawn uniformly.
pub fn harvest(count: usize, rng: &mut ChaCha8Rng) -> Vec<Melon> {
    let species = Species::all();
    (0..count)
        .map(|_| Melon::new(species[rng.gen_range(0..species.len())]))
        .collect()
}

/// Run melons through the whole line.
///
/// Melons are accepted in arrival order, so packing and shipping are
/// deterministic once the inspection outcomes are fixed. `BoxFull` cannot
/// occur with correct packing; it is surfaced to the caller if it ever does.
pub fn run_line(
    melons: Vec<Melon>,
    config: &LineConfig,
    rng: &mut ChaCha8Rng,
) -> Result<LineReport, BoxFull> {
    let processed = melons.len();
    let mut accepted_melons = Vec::new();
    let mut salvaged = 0usize;
    let mut tallies = [0usize; 4];

    for mut melon in melons {
        robots::pick(&mut melon, rng);
        robots::clean(&melon);
        robots::apply_labels(&mut melon, rng);

        match inspection::inspect(&melon) {
            Verdict::Pass => accepted_melons.push(melon),
            Verdict::Reject(RejectReason::WrongColor) if config.salvage => {
                // Color is the one defect paint can fix; one retry only
                robots::repaint(&mut melon);
                match inspection::inspect(&melon) {
                    Verdict::Pass => {
                        salvaged += 1;
                        accepted_melons.push(melon);
                    }
                    Verdict::Reject(reason) => {
                        tallies[reason as usize] += 1;
                        robots::trash(melon);
                    }
                }
            }
            Verdict::Reject(reason) => {
                tallies[reason as usize] += 1;
                robots::trash(melon);
            }
        }
    }

    let accepted = accepted_melons.len();
    let boxes = packing::pack_melons(accepted_melons)?;
    let shipping = shipping::ship(&boxes);

    let rejections = RejectReason::all()
        .iter()
        .map(|&reason| (reason, tallies[reason as usize]))
        .collect();

    Ok(LineReport {
        processed,
        accepted,
        rejected: processed - accepted,
        salvaged,
        rejections,
        boxes,
        shipping,
    })
}
