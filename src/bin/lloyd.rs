//! Lloyd Binary
//!
//! Clusters the points in a text file and writes them back labelled.
//!
//! Usage: lloyd <K> <INPUT> [--output PATH] [--seed N] [--rounds N] [--retain-empty]

use anyhow::Context;
use clap::Parser;
use lloyd::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level())?;
    let outcome = args
        .run()
        .with_context(|| format!("clustering {}", args.input.display()))?;
    outcome
        .centroids
        .iter()
        .zip(outcome.assignment.sizes())
        .enumerate()
        .for_each(|(j, (c, n))| log::info!("cluster {:>3} {:>8} points at {}", j + 1, n, c));
    println!("\nOutput written to {}", args.output.display());
    Ok(())
}
