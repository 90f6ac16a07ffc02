use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Maximum absolute difference for two float tokens to count as equal.
pub const DEFAULT_EPSILON: f64 = 1.0e-5;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// First file to compare (A)
    pub first: PathBuf,

    /// Second file to compare (B)
    pub second: PathBuf,

    /// Report every mismatching line instead of stopping at the first
    #[arg(short = 'a', long)]
    pub all_lines: bool,
}

#[derive(Debug)]
pub struct Options {
    pub all_lines: bool,
    pub epsilon: f64,
}

pub fn build_options(args: &Args) -> Result<Options> {
    Ok(Options {
        all_lines: args.all_lines,
        epsilon: DEFAULT_EPSILON,
    })
}
