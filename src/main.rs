use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use melon_factory::pipeline::{self, LineConfig};
use melon_factory::shipping::{self, Manifest};

#[derive(Parser, Debug)]
#[command(name = "melon_factory")]
#[command(about = "Run a batch of melons through the robot assembly line")]
struct Args {
    /// Number of melons to harvest
    #[arg(short, long, default_value = "12")]
    melons: usize,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Repaint wrong-color rejects and inspect them once more
    #[arg(long)]
    salvage: bool,

    /// Export a JSON shipping manifest (e.g. "manifest.json")
    #[arg(long)]
    export_manifest: Option<String>,
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("Running the line with seed: {}", seed);
    println!("Harvesting {} melons...", args.melons);

    let batch = pipeline::harvest(args.melons, &mut rng);
    let config = LineConfig {
        salvage: args.salvage,
    };

    let report = match pipeline::run_line(batch, &config, &mut rng) {
        Ok(report) => report,
        Err(e) => {
            // Only reachable through a packing bug
            eprintln!("Line error: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!("Line complete:");
    println!("  Processed: {}", report.processed);
    println!("  Accepted:  {}", report.accepted);
    println!("  Rejected:  {}", report.rejected);
    if config.salvage {
        println!("  Salvaged:  {}", report.salvaged);
    }
    for (reason, count) in &report.rejections {
        if *count > 0 {
            println!("    {}: {}", reason.name(), count);
        }
    }
    println!("  Boxes shipped: {}", report.shipping.box_count);
    for (i, mbox) in report.boxes.iter().enumerate() {
        println!("    Box {}: {}", i + 1, mbox.contents_line());
    }

    if let Some(ref path) = args.export_manifest {
        let manifest = Manifest::from_boxes(seed, &report.boxes);
        match shipping::export_manifest(&manifest, path) {
            Ok(()) => println!("Exported manifest to: {}", path),
            Err(e) => eprintln!("Failed to export manifest: {}", e),
        }
    }
}
