//! Tests for the online adapter.
//!
//! These tests verify per-sample RSX updates:
//! - Sample-by-sample output equals the batch output
//! - Non-finite samples pass through without touching state
//! - Naming, priming and reset
//!
//! ## Test Organization
//!
//! 1. **Equivalence** - Online vs. batch
//! 2. **Missing Data** - NaN and infinity handling
//! 3. **Metadata** - Name, description, priming, reset

mod common;

use rsx::prelude::*;

use common::{EXPECTED_LENGTH_2, GOLDEN_TOLERANCE, SERIES};

// ============================================================================
// Helper Functions
// ============================================================================

fn online(length: f64) -> OnlineRsx<f64> {
    Rsx::new().length(length).adapter(Online).build().unwrap()
}

// ============================================================================
// Equivalence Tests
// ============================================================================

/// Test that per-sample updates reproduce the batch output.
#[test]
fn test_online_matches_batch() {
    for length in [2.0, 5.0, 14.0] {
        let expected = compute_rsx(&SERIES, length).unwrap();
        let mut processor = online(length);
        let values: Vec<f64> = SERIES.iter().map(|&s| processor.update(s)).collect();
        assert_eq!(values, expected, "length {length} diverged");
    }
}

/// Test that online updates match the golden values.
#[test]
fn test_online_golden_length_2() {
    let mut processor = online(2.0);
    for (i, &s) in SERIES.iter().enumerate() {
        let v = processor.update(s);
        assert!((v - EXPECTED_LENGTH_2[i]).abs() <= GOLDEN_TOLERANCE);
    }
}

/// Test the slice convenience method.
#[test]
fn test_update_all() {
    let mut processor = online(3.0);
    let values = processor.update_all(&SERIES);
    assert_eq!(values, compute_rsx(&SERIES, 3.0).unwrap());
    assert_eq!(processor.samples_seen(), SERIES.len());
}

// ============================================================================
// Missing Data Tests
// ============================================================================

/// Test that NaN is returned unchanged and skipped.
#[test]
fn test_nan_passthrough() {
    let mut processor = online(4.0);
    let mut values = Vec::new();
    for (i, &s) in SERIES[..60].iter().enumerate() {
        if i % 10 == 3 {
            assert!(processor.update(f64::NAN).is_nan());
        }
        values.push(processor.update(s));
    }

    assert_eq!(processor.samples_seen(), 60);
    assert_eq!(values, compute_rsx(&SERIES[..60], 4.0).unwrap());
}

/// Test that infinities are returned unchanged and skipped.
#[test]
fn test_infinite_passthrough() {
    let mut processor = online(4.0);
    processor.update_all(&SERIES[..10]);
    assert_eq!(processor.update(f64::INFINITY), f64::INFINITY);
    assert_eq!(processor.update(f64::NEG_INFINITY), f64::NEG_INFINITY);
    assert_eq!(processor.samples_seen(), 10);
}

// ============================================================================
// Metadata Tests
// ============================================================================

/// Test mnemonic and description.
#[test]
fn test_name_and_description() {
    let processor = online(14.0);
    assert_eq!(processor.name(), "rsx(14)");
    assert_eq!(processor.description(), "Relative Strength Xtra rsx(14)");
    assert_eq!(processor.length(), 14.0);

    assert_eq!(online(2.5).name(), "rsx(2.5)");
}

/// Test priming after the warm-up period.
#[test]
fn test_is_primed() {
    let mut processor = online(7.0);
    for &s in &SERIES[..6] {
        processor.update(s);
        assert!(!processor.is_primed());
    }
    processor.update(SERIES[6]);
    assert!(processor.is_primed());
}

/// Test reset returns the processor to its built state.
#[test]
fn test_reset() {
    let mut processor = online(5.0);
    let first = processor.update_all(&SERIES[..80]);
    processor.reset();
    assert_eq!(processor.samples_seen(), 0);
    assert!(!processor.is_primed());
    assert_eq!(processor.update_all(&SERIES[..80]), first);
}

/// Test that invalid lengths are rejected at build time.
#[test]
fn test_invalid_length() {
    let res = Rsx::new().length(0.0).adapter(Online).build();
    assert!(matches!(res, Err(RsxError::InvalidParameter { .. })));
}
