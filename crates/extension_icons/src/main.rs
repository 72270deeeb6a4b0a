//! One-shot generator for the extension's toolbar icons.
//!
//! Writes `icons/icon16.png`, `icons/icon48.png` and `icons/icon128.png`
//! into the current working directory and exits.

use std::fs;
use std::path::Path;

use clap::Parser;
use extension_icons::{IconGenerator, SIZES};
use flexi_logger::Logger;

/// Generates the placeholder toolbar icons (16, 48 and 128 px).
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    println!("Creating extension icons...");
    println!("{}", "-".repeat(50));

    let out_dir = Path::new("icons");
    if !out_dir.exists() {
        fs::create_dir_all(out_dir)?;
        println!("✓ Created icons/ directory");
    }

    let generator = IconGenerator::default();
    for size in SIZES {
        let path = generator.generate(size)?;
        println!("✓ Created {}", path.display());
    }

    println!("{}", "-".repeat(50));
    println!("✓ All icons created successfully!");
    Ok(())
}
