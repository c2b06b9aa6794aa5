//! Tests for the RSX result type.
//!
//! These tests verify:
//! - Query helpers (`len`, `is_primed`, `primed_values`)
//! - Human-readable `Display` output
//!
//! ## Test Organization
//!
//! 1. **Query Methods** - Priming and slicing helpers
//! 2. **Display** - Summary block, row elision, restart reporting

use rsx::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn make_result(n: usize, primed_at: Option<usize>, restarts: usize) -> RsxResult<f64> {
    RsxResult {
        values: (0..n).map(|i| if i < 5 { 50.0 } else { i as f64 }).collect(),
        length: 2.0,
        warmup: 5,
        primed_at,
        restarts,
    }
}

// ============================================================================
// Query Method Tests
// ============================================================================

/// Test the query helpers on a primed result.
#[test]
fn test_primed_result_queries() {
    let result = make_result(8, Some(5), 0);
    assert_eq!(result.len(), 8);
    assert!(!result.is_empty());
    assert!(result.is_primed());
    assert_eq!(result.primed_values(), &[5.0, 6.0, 7.0]);
}

/// Test the query helpers on a result that never primed.
#[test]
fn test_unprimed_result_queries() {
    let result = make_result(4, None, 0);
    assert!(!result.is_primed());
    assert!(result.primed_values().is_empty());
}

/// Test the query helpers on a result produced by the batch adapter.
#[test]
fn test_batch_result_metadata() {
    let series: Vec<f64> = (0..30).map(|i| (i as f64 * 0.5).sin() + 10.0).collect();
    let result = Rsx::new()
        .length(9.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .compute(&series)
        .unwrap();

    assert_eq!(result.length, 9.0);
    assert_eq!(result.warmup, 8);
    assert_eq!(result.primed_at, Some(8));
    assert_eq!(result.primed_values().len(), 22);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test that a short result prints every row.
#[test]
fn test_display_short_result() {
    let text = make_result(6, Some(5), 0).to_string();

    assert!(text.contains("Summary:"));
    assert!(text.contains("Data points: 6"));
    assert!(text.contains("Length:      2"));
    assert!(text.contains("Warm-up:     5"));
    assert!(text.contains("Primed at:   5"));
    assert!(!text.contains("Restarts"));
    assert!(!text.contains("..."));
    assert!(text.contains("50.000000"));
}

/// Test that a long result elides the middle rows.
#[test]
fn test_display_long_result_elides_rows() {
    let text = make_result(50, Some(5), 0).to_string();

    assert!(text.contains("..."));
    assert!(text.contains("49.000000"));
    assert!(!text.contains("25.000000"));
}

/// Test that restarts and unprimed runs are reported.
#[test]
fn test_display_restarts_and_never_primed() {
    let text = make_result(4, None, 2).to_string();

    assert!(text.contains("Primed at:   never"));
    assert!(text.contains("Restarts:    2"));
}
