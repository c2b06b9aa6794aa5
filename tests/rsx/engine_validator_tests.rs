#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the validation functions used by every adapter:
//! - Series validation (emptiness, numeric validity)
//! - Length validation (positivity, finiteness)
//! - Sweep length lists and duplicate builder parameters
//!
//! ## Test Organization
//!
//! 1. **Series Validation** - Empty input, non-finite samples
//! 2. **Parameter Validation** - Length and length lists
//! 3. **Error Messages** - Proper error reporting

use rsx::internals::engine::validator::Validator;
use rsx::internals::primitives::errors::RsxError;

// ============================================================================
// Series Validation Tests
// ============================================================================

/// Test validation rejects an empty series.
#[test]
fn test_validate_empty_series() {
    let series: Vec<f64> = vec![];
    let res = Validator::validate_series(&series);

    assert!(
        matches!(res, Err(RsxError::InvalidInput(_))),
        "Empty series should error"
    );
}

/// Test validation rejects NaN and reports its index.
#[test]
fn test_validate_nan_sample() {
    let series = vec![1.0, f64::NAN, 3.0];

    if let Err(RsxError::InvalidInput(msg)) = Validator::validate_series(&series) {
        assert!(msg.contains("series[1]"), "Error should mention the index");
    } else {
        panic!("Expected InvalidInput for NaN sample");
    }
}

/// Test validation rejects infinities.
#[test]
fn test_validate_infinite_sample() {
    let series = vec![1.0, 2.0, f64::NEG_INFINITY];
    let res = Validator::validate_series(&series);

    assert!(matches!(res, Err(RsxError::InvalidInput(ref m)) if m.contains("series[2]")));
}

/// Test validation accepts a single finite sample.
#[test]
fn test_validate_single_sample() {
    assert!(Validator::validate_series(&[42.0_f64]).is_ok());
}

/// Test single-sample validation uses the supplied stream position.
#[test]
fn test_validate_sample_position() {
    let res = Validator::validate_sample(f64::NAN, 1234);
    assert!(matches!(res, Err(RsxError::InvalidInput(ref m)) if m.contains("series[1234]")));
    assert!(Validator::validate_sample(0.0_f64, 0).is_ok());
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test length validation boundaries.
#[test]
fn test_validate_length() {
    assert!(Validator::validate_length(0.001_f64).is_ok());
    assert!(Validator::validate_length(14.0_f64).is_ok());

    for bad in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(
            matches!(
                Validator::validate_length(bad),
                Err(RsxError::InvalidParameter {
                    parameter: "length",
                    ..
                })
            ),
            "length {bad} should be rejected"
        );
    }
}

/// Test that the rejected value is carried in the error.
#[test]
fn test_validate_length_reports_value() {
    assert_eq!(
        Validator::validate_length(-3.0_f64),
        Err(RsxError::InvalidParameter {
            parameter: "length",
            value: -3.0
        })
    );
}

/// Test sweep length list validation.
#[test]
fn test_validate_lengths() {
    assert!(Validator::validate_lengths(&[2.0_f64, 3.0, 15.0]).is_ok());

    let empty: [f64; 0] = [];
    assert!(matches!(
        Validator::validate_lengths(&empty),
        Err(RsxError::InvalidParameter {
            parameter: "lengths",
            ..
        })
    ));

    assert!(matches!(
        Validator::validate_lengths(&[2.0_f64, 0.0, 4.0]),
        Err(RsxError::InvalidParameter {
            parameter: "length",
            ..
        })
    ));
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("length")),
        Err(RsxError::DuplicateParameter {
            parameter: "length"
        })
    );
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test error display formatting.
#[test]
fn test_error_messages() {
    let e = RsxError::InvalidParameter {
        parameter: "length",
        value: 0.0,
    };
    assert_eq!(
        e.to_string(),
        "Invalid parameter: length=0 (must be > 0 and finite)"
    );

    let e = Validator::validate_lengths::<f64>(&[]).unwrap_err();
    assert_eq!(
        e.to_string(),
        "Invalid parameter: lengths is empty (at least one length is required)"
    );

    let e = RsxError::InvalidInput("series is empty".into());
    assert_eq!(e.to_string(), "Invalid input: series is empty");

    let e = RsxError::DuplicateParameter {
        parameter: "parallel",
    };
    assert!(e.to_string().contains("'parallel'"));
}
