// SPDX-License-Identifier: Apache-2.0

//! End-to-end LUT export: write a table to disk and read it back.

use std::fs;

use axmul::array_mul::multiply;
use axmul::lut_export::export_lut_csv;
use axmul::ppu::PpuVariant;

fn parse_csv(text: &str) -> Vec<Vec<u64>> {
    text.lines()
        .skip(1)
        .map(|line| {
            line.split(',')
                .skip(1)
                .map(|cell| cell.parse().unwrap())
                .collect()
        })
        .collect()
}

#[test]
fn test_export_exact_width4_round_trip() {
    let _ = env_logger::try_init();
    let dir = tempfile::tempdir().unwrap();
    let path = export_lut_csv(dir.path(), PpuVariant::Exact, 4).unwrap();
    assert_eq!(path.file_name().unwrap(), "LUT_exact.csv");

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // Header plus one row per operand value.
    assert_eq!(lines.len(), 17);
    assert!(lines[0].starts_with(",0,1,2,"));
    assert!(lines[1].starts_with("0,"));

    let rows = parse_csv(&text);
    for (a, row) in rows.iter().enumerate() {
        for (b, &product) in row.iter().enumerate() {
            assert_eq!(product, (a * b) as u64, "{}x{}", a, b);
        }
    }
}

#[test]
fn test_export_approx_width4_matches_engine() {
    let dir = tempfile::tempdir().unwrap();
    for variant in [PpuVariant::Approx1, PpuVariant::Approx3] {
        let path = export_lut_csv(dir.path(), variant, 4).unwrap();
        let rows = parse_csv(&fs::read_to_string(&path).unwrap());
        assert_eq!(rows.len(), 16);
        for (a, row) in rows.iter().enumerate() {
            for (b, &product) in row.iter().enumerate() {
                assert_eq!(product, multiply(a as u64, b as u64, variant, 4));
            }
        }
    }
    // Spot value from the approx1 table: 3 x 5 collapses to 3.
    let rows = parse_csv(
        &fs::read_to_string(dir.path().join("LUT_approx1.csv")).unwrap(),
    );
    assert_eq!(rows[3][5], 3);
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such_subdir");
    let err = export_lut_csv(&missing, PpuVariant::Exact, 2).unwrap_err();
    assert!(err.to_string().contains("export failure"));
}
