// SPDX-License-Identifier: Apache-2.0

//! axmul — bit-accurate behavioral model of an unsigned array multiplier
//! built from a configurable Partial Product Unit (PPU) cell.
//!
//! The multiplier is the classic carry-save array: partial products enter a
//! 2-D grid of compressor cells and a final exact ripple row completes carry
//! propagation. The interior cell can be swapped for one of four approximate
//! variants ([`ppu::PpuVariant`]) that trade gate count for occasional wrong
//! sum/carry bits; the point of the model is to reproduce each variant's
//! error pattern bit-for-bit.
//!
//! - [`bit_codec`] — u64 <-> LSb-first bit sequence conversion
//! - [`ppu`] — the exact full adder and the five PPU cell cascades
//! - [`array_mul`] — the array construction and evaluation engine
//! - [`lut_export`] — exhaustive product-table (LUT) generation and CSV output

pub mod array_mul;
pub mod bit_codec;
pub mod lut_export;
pub mod ppu;
