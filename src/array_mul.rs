// SPDX-License-Identifier: Apache-2.0

//! The array multiplier engine.
//!
//! Assembles PPU cells and exact full adders into the classic carry-save
//! array: row 0 holds the first partial-product row, each later row merges
//! one more partial-product row diagonally into the running sum/carry
//! planes, and an exact ripple row completes carry propagation across the
//! upper half of the product.
//!
//! The sum/carry planes are two flat write-once `BitVec` arenas of shape
//! (width+1) x 2*width. Every entry is written at most once and only read
//! afterward, so the grid is a valid combinational circuit with no
//! feedback; getting the (row, column) bookkeeping right is the whole job
//! here.

use bitvec::vec::BitVec;

use crate::bit_codec::{decode_lsb0, encode_lsb0};
use crate::ppu::{full_adder, PpuVariant};

/// Multiplies two `width`-bit unsigned operands through the cell array,
/// returning the 2*width-bit product.
///
/// Operand bits at or above `width` are masked off (the same truncation
/// the bit-shift encoding performs); there is no error path for
/// out-of-range operands. With `PpuVariant::Exact` the result equals
/// `a * b` for every operand pair; approximate variants deviate according
/// to their cell's error pattern.
///
/// Supports any `width` in [1, 32] (the product must fit in a u64).
pub fn multiply(a: u64, b: u64, variant: PpuVariant, width: usize) -> u64 {
    assert!(width >= 1, "width must be at least 1");
    assert!(width <= 32, "width {} overflows the u64 product", width);

    let a_bits = encode_lsb0(a, width);
    let b_bits = encode_lsb0(b, width);

    let cols = 2 * width;
    let at = |row: usize, col: usize| row * cols + col;
    let mut sum: BitVec = BitVec::repeat(false, (width + 1) * cols);
    let mut carry: BitVec = BitVec::repeat(false, (width + 1) * cols);

    // Row 0: the b[0] partial-product row at its natural bit positions.
    for j in 0..width {
        sum.set(at(0, j), a_bits[j] && b_bits[0]);
    }

    // Each later row's most significant partial-product term enters the
    // grid along the first diagonal, at column width-1+i.
    for i in 1..width {
        sum.set(at(i, width - 1 + i), a_bits[width - 1] && b_bits[i]);
    }

    // Interior cells: row i merges partial-product bit a[j-i] & b[i] with
    // the carry/sum produced by row i-1, one column step to the left for
    // the carry.
    for i in 1..width {
        for j in i..(i + width - 1) {
            let out = variant.eval(
                a_bits[j - i],
                b_bits[i],
                carry[at(i - 1, j - 1)],
                sum[at(i - 1, j)],
            );
            sum.set(at(i, j), out.sum);
            carry.set(at(i, j), out.carry);
        }
    }

    // Final ripple-carry row across the upper product half. Always the
    // exact full adder: this is the carry-propagate completion stage, not
    // partial-product compression.
    for j in width..(cols - 1) {
        let out = full_adder(
            sum[at(width - 1, j)],
            carry[at(width - 1, j - 1)],
            carry[at(width, j - 1)],
        );
        sum.set(at(width, j), out.sum);
        carry.set(at(width, j), out.carry);
    }

    // The low product half falls out along the diagonal, the high half off
    // the ripple row, and the final carry-out becomes the top bit.
    let mut result: BitVec = BitVec::repeat(false, cols);
    for i in 0..width {
        result.set(i, sum[at(i, i)]);
    }
    for i in width..(cols - 1) {
        result.set(i, sum[at(width, i)]);
    }
    result.set(cols - 1, carry[at(width, cols - 2)]);

    decode_lsb0(&result)
}
