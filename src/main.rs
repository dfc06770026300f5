// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use axmul::lut_export::{export_lut_csv, MAX_LUT_WIDTH};
use axmul::ppu::PpuVariant;

/// Generates exhaustive product LUTs for the PPU-based array multiplier.
#[derive(Parser, Debug)]
struct Args {
    /// Operand bit width.
    #[arg(long, default_value_t = 8)]
    width: usize,

    /// PPU variant to export; all five variants when omitted.
    #[arg(long, value_enum)]
    variant: Option<PpuVariant>,

    /// Directory the LUT_<variant>.csv files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    if args.width < 1 || args.width > MAX_LUT_WIDTH {
        bail!("--width must be in 1..={}", MAX_LUT_WIDTH);
    }

    let variants: Vec<PpuVariant> = match args.variant {
        Some(v) => vec![v],
        None => PpuVariant::all().to_vec(),
    };
    for variant in variants {
        let path = export_lut_csv(&args.out_dir, variant, args.width)?;
        println!("{}", path.display());
    }
    Ok(())
}
