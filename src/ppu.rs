// SPDX-License-Identifier: Apache-2.0

//! The cell library: one exact full adder and five Partial Product Unit
//! (PPU) cells — one exact, four approximate.
//!
//! A PPU merges a partial-product bit (the AND of the two current operand
//! bits), an incoming carry, and an incoming partial sum into a sum/carry
//! pair. The exact cell behaves like `full_adder(a & b, c_in, s_in)`; each
//! approximate cell implements a reduced-gate-count cascade that is wrong
//! for some input combinations.
//!
//! Every cascade below is a literal transcription of the published gate
//! network. Do not simplify them: the variants are characterized by their
//! exact per-input error patterns, and "equivalent looking" boolean cleanup
//! changes those patterns (approx2 and approx3 in particular share their
//! t1..t6 prefix on paper but are not algebraically equal overall).

use clap::ValueEnum;

/// Sum/carry output pair of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOutput {
    pub sum: bool,
    pub carry: bool,
}

/// The textbook exact 3-input full adder. Used for the multiplier's final
/// carry-propagate row regardless of which PPU variant is selected.
pub fn full_adder(a: bool, b: bool, c_in: bool) -> CellOutput {
    CellOutput {
        sum: a ^ b ^ c_in,
        carry: (a && b) || (c_in && (a ^ b)),
    }
}

/// Exact PPU: the reference 7-signal cascade, bit-identical to
/// `full_adder(a & b, c_in, s_in)`.
pub fn exact_ppu(a: bool, b: bool, c_in: bool, s_in: bool) -> CellOutput {
    let t1 = !(a && b);
    let t2 = !(c_in && s_in);
    let t3 = !(c_in || s_in);
    let t4 = !t1;
    let t5 = !(t2 || t4);
    let t6 = !(t1 || t3);
    let t7 = !(t5 || t6);
    let c_out = !t7;

    let t8 = s_in ^ c_in;
    let s_out = t8 ^ t4;
    CellOutput {
        sum: s_out,
        carry: c_out,
    }
}

/// Approximate PPU 1: drops the partial-product term entirely (a and b are
/// ignored); the cell degenerates to a half adder over s_in and c_in.
pub fn approx1_ppu(_a: bool, _b: bool, c_in: bool, s_in: bool) -> CellOutput {
    let t1 = !(s_in && c_in);
    let c_out = !t1;

    let s_out = c_in ^ s_in;
    CellOutput {
        sum: s_out,
        carry: c_out,
    }
}

/// Approximate PPU 2: keeps the exact carry cascade (t1..t7) but derives
/// the sum from two NAND stages instead of the XOR pair.
pub fn approx2_ppu(a: bool, b: bool, c_in: bool, s_in: bool) -> CellOutput {
    let t1 = !(a && b);
    let t2 = !(c_in && s_in);
    let t3 = !(c_in || s_in);
    let t4 = !t1;
    let t5 = !(t2 || t4);
    let t6 = !(t1 || t3);
    let t7 = !(t5 || t6);
    let c_out = !t7;

    let t8 = !(t4 && s_in);
    let s_out = !(t8 && c_in);
    CellOutput {
        sum: s_out,
        carry: c_out,
    }
}

/// Approximate PPU 3: the t1..t6 prefix of the exact cascade, with the sum
/// taken directly off the carry network and the carry as its complement.
pub fn approx3_ppu(a: bool, b: bool, c_in: bool, s_in: bool) -> CellOutput {
    let t1 = !(a && b);
    let t2 = !(c_in && s_in);
    let t3 = !(c_in || s_in);
    let t4 = !t1;
    let t5 = !(t2 || t4);
    let t6 = !(t1 || t3);
    let s_out = !(t5 || t6);
    let c_out = !s_out;
    CellOutput {
        sum: s_out,
        carry: c_out,
    }
}

/// Approximate PPU 4: treats the a operand bit as the partial product
/// itself (b is unused); six-signal carry cascade plus an XOR-pair sum.
pub fn approx4_ppu(a: bool, _b: bool, c_in: bool, s_in: bool) -> CellOutput {
    let t1 = !a;
    let t2 = !(s_in && c_in);
    let t3 = !(s_in || c_in);
    let t4 = !(t2 || a);
    let t5 = !(t1 || t3);
    let t6 = !(t4 || t5);
    let c_out = !t6;

    let t7 = s_in ^ c_in;
    let s_out = t7 ^ a;
    CellOutput {
        sum: s_out,
        carry: c_out,
    }
}

/// The closed set of interior-cell implementations the array multiplier can
/// be built from. The final carry-propagate row always uses [`full_adder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PpuVariant {
    Exact,
    Approx1,
    Approx2,
    Approx3,
    Approx4,
}

impl PpuVariant {
    /// All variants, exact first.
    pub fn all() -> [PpuVariant; 5] {
        [
            PpuVariant::Exact,
            PpuVariant::Approx1,
            PpuVariant::Approx2,
            PpuVariant::Approx3,
            PpuVariant::Approx4,
        ]
    }

    /// Stable lowercase name, used in LUT file names.
    pub fn name(&self) -> &'static str {
        match self {
            PpuVariant::Exact => "exact",
            PpuVariant::Approx1 => "approx1",
            PpuVariant::Approx2 => "approx2",
            PpuVariant::Approx3 => "approx3",
            PpuVariant::Approx4 => "approx4",
        }
    }

    /// Evaluates this variant's cell on one grid position's inputs.
    pub fn eval(&self, a: bool, b: bool, c_in: bool, s_in: bool) -> CellOutput {
        match self {
            PpuVariant::Exact => exact_ppu(a, b, c_in, s_in),
            PpuVariant::Approx1 => approx1_ppu(a, b, c_in, s_in),
            PpuVariant::Approx2 => approx2_ppu(a, b, c_in, s_in),
            PpuVariant::Approx3 => approx3_ppu(a, b, c_in, s_in),
            PpuVariant::Approx4 => approx4_ppu(a, b, c_in, s_in),
        }
    }
}

impl std::fmt::Display for PpuVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
