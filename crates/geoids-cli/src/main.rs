//! geoids — Command-line interface for geoids-core
//!
//! Reads the two fixed-name GeoNames datasets from the current working
//! directory and regenerates `geoids.txt` there:
//!
//! - `cities15000.txt` (tab-separated gazetteer)
//! - `countryInfo.json` (single-document country file)
//!
//! Usage examples
//! --------------
//!
//! - Default run (GeoNames URI format, empty-name rows dropped)
//!   $ geoids
//!
//! - Raw numeric IDs, space-delimited, every row kept
//!   $ geoids --format raw
//!
//! - Tolerate short gazetteer rows instead of aborting
//!   $ geoids --skip-short-rows
//!
//! Log verbosity follows the standard RUST_LOG environment variable.
//! Exit status is 0 on success and 1 on any input or I/O failure; on
//! failure, partial output may remain on disk.
mod args;

use crate::args::CliArgs;
use clap::Parser;
use geoids_core::DatasetTransformer;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = CliArgs::parse();
    let transformer = DatasetTransformer::new(args.to_options());

    let cwd = std::env::current_dir()?;
    let stats = transformer.run_in_dir(&cwd)?;

    println!("Wrote {}:", DatasetTransformer::OUTPUT_FILENAME);
    println!("  City lines: {}", stats.city_lines);
    println!("  Country lines: {}", stats.country_lines);
    println!("  Skipped city rows: {}", stats.skipped_rows);

    Ok(())
}
