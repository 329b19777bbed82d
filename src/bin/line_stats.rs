//! Debug tool for measuring line acceptance across many seeds
//! Runs fixed-size batches and prints an aggregate rejection histogram

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use melon_factory::inspection::RejectReason;
use melon_factory::pipeline::{self, LineConfig};

const BATCH_SIZE: usize = 100;
const RUNS: u64 = 50;

fn main() {
    println!(
        "Measuring acceptance over {} runs of {} melons...",
        RUNS, BATCH_SIZE
    );

    let config = LineConfig::default();
    let mut processed_total = 0usize;
    let mut accepted_total = 0usize;
    let mut reason_totals = vec![0usize; RejectReason::all().len()];

    for seed in 0..RUNS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let batch = pipeline::harvest(BATCH_SIZE, &mut rng);
        let report = match pipeline::run_line(batch, &config, &mut rng) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Line error on seed {}: {}", seed, e);
                continue;
            }
        };

        processed_total += report.processed;
        accepted_total += report.accepted;
        for (i, (_, count)) in report.rejections.iter().enumerate() {
            reason_totals[i] += count;
        }
    }

    println!();
    println!(
        "Acceptance: {}/{} ({:.1}%)",
        accepted_total,
        processed_total,
        100.0 * accepted_total as f64 / processed_total as f64
    );
    println!("Rejections by reason:");
    for (reason, total) in RejectReason::all().iter().zip(&reason_totals) {
        println!("  {:<12} {}", reason.name(), total);
    }
}
