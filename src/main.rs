use std::process;

use anyhow::Result;
use clap::Parser;

use floatdiff::{build_options, run_compare, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    let opts = build_options(&args)?;

    let code = run_compare(&args.first, &args.second, &opts)?;
    process::exit(code)
}
