// SPDX-License-Identifier: Apache-2.0

//! Exhaustively checks the exact-variant array against integer
//! multiplication, plus the engine-level contracts every variant shares.

use test_case::test_case;

use axmul::array_mul::multiply;
use axmul::ppu::PpuVariant;

#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(4)]
#[test_case(5)]
#[test_case(6)]
#[test_case(7)]
#[test_case(8)]
fn test_exact_variant_exhaustive(width: usize) {
    let _ = env_logger::try_init();
    let n = 1u64 << width;
    for a in 0..n {
        for b in 0..n {
            assert_eq!(
                multiply(a, b, PpuVariant::Exact, width),
                a * b,
                "width={} a={} b={}",
                width,
                a,
                b
            );
        }
    }
}

#[test]
fn test_result_bounded_by_double_width_all_variants() {
    let width = 8;
    let bound = 1u64 << (2 * width);
    for variant in PpuVariant::all() {
        for a in 0..256u64 {
            for b in 0..256u64 {
                assert!(
                    multiply(a, b, variant, width) < bound,
                    "{} {}x{}",
                    variant,
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn test_deterministic() {
    for variant in PpuVariant::all() {
        let first = multiply(37, 91, variant, 8);
        for _ in 0..10 {
            assert_eq!(multiply(37, 91, variant, 8), first, "{}", variant);
        }
    }
}

#[test]
fn test_exact_width16_spot_checks() {
    for &(a, b) in &[(0u64, 0u64), (65535, 65535), (40000, 50000), (12345, 6789)] {
        assert_eq!(multiply(a, b, PpuVariant::Exact, 16), a * b);
    }
}
