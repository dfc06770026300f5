// SPDX-License-Identifier: Apache-2.0

//! Conversions between `u64` values and LSb-first bit sequences.

use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;

/// Encodes `value` as a `width`-bit sequence where index 0 is the least
/// significant bit.
///
/// Bits of `value` at or above `width` are discarded, i.e. the value is
/// masked to `width` bits. Callers that care about out-of-range operands
/// must mask or reject before encoding.
///
/// ```
/// use axmul::bit_codec::encode_lsb0;
///
/// let bits = encode_lsb0(0b1010, 4);
/// assert_eq!(bits.len(), 4);
/// assert!(!bits[0]); // LSb
/// assert!(bits[1]);
/// assert!(!bits[2]);
/// assert!(bits[3]); // MSb
/// ```
pub fn encode_lsb0(value: u64, width: usize) -> BitVec {
    assert!(width <= 64, "width {} exceeds u64", width);
    let mut bits: BitVec = BitVec::repeat(false, width);
    for i in 0..width {
        bits.set(i, (value >> i) & 1 == 1);
    }
    bits
}

/// Decodes an LSb-first bit sequence back into a `u64`:
/// value = Σ bits[i] · 2^i.
pub fn decode_lsb0(bits: &BitSlice) -> u64 {
    assert!(bits.len() <= 64, "bit sequence {} exceeds u64", bits.len());
    let mut value = 0u64;
    for i in 0..bits.len() {
        if bits[i] {
            value |= 1u64 << i;
        }
    }
    value
}
