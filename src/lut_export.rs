// SPDX-License-Identifier: Apache-2.0

//! Exhaustive product-table (LUT) generation and CSV export.
//!
//! For a chosen width W and PPU variant, enumerates the full Cartesian
//! product of operand pairs and collects `multiply(a, b)` for each. Rows
//! are independent (the engine is pure), so generation fans out one rayon
//! worker per `a` row.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;

use crate::array_mul::multiply;
use crate::ppu::PpuVariant;

/// Widths above this make the table itself intractable (4^W cells), even
/// though the engine supports wider operands.
pub const MAX_LUT_WIDTH: usize = 16;

/// The full product table for one (variant, width) pair:
/// `rows[a][b] == multiply(a, b, variant, width)`.
pub struct LutTable {
    pub variant: PpuVariant,
    pub width: usize,
    pub rows: Vec<Vec<u64>>,
}

/// Builds the complete 2^width x 2^width product table.
pub fn build_lut(variant: PpuVariant, width: usize) -> LutTable {
    assert!(
        width >= 1 && width <= MAX_LUT_WIDTH,
        "LUT width {} out of range 1..={}",
        width,
        MAX_LUT_WIDTH
    );
    let n = 1u64 << width;
    let rows: Vec<Vec<u64>> = (0..n)
        .into_par_iter()
        .map(|a| (0..n).map(|b| multiply(a, b, variant, width)).collect())
        .collect();
    LutTable {
        variant,
        width,
        rows,
    }
}

impl LutTable {
    /// Writes the table as CSV: a header row with an empty leading cell
    /// followed by the column operand values, then one row per `a` value
    /// beginning with `a` itself.
    pub fn write_csv<W: Write>(&self, mut w: W) -> io::Result<()> {
        let n = 1u64 << self.width;
        for b in 0..n {
            write!(w, ",{}", b)?;
        }
        writeln!(w)?;
        for (a, row) in self.rows.iter().enumerate() {
            write!(w, "{}", a)?;
            for product in row {
                write!(w, ",{}", product)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

/// Builds the LUT for `variant` at `width` and writes it to
/// `<dir>/LUT_<variant>.csv`, returning the written path.
pub fn export_lut_csv(dir: &Path, variant: PpuVariant, width: usize) -> anyhow::Result<PathBuf> {
    let table = build_lut(variant, width);
    let path = dir.join(format!("LUT_{}.csv", variant.name()));
    log::info!(
        "writing {} ({} x {} products)",
        path.display(),
        table.rows.len(),
        table.rows.len()
    );
    let file = File::create(&path)
        .with_context(|| format!("export failure: creating {}", path.display()))?;
    let mut w = BufWriter::new(file);
    table
        .write_csv(&mut w)
        .with_context(|| format!("export failure: writing {}", path.display()))?;
    w.flush()
        .with_context(|| format!("export failure: flushing {}", path.display()))?;
    Ok(path)
}
