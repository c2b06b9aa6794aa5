//! Output types and result structures for RSX operations.
//!
//! ## Purpose
//!
//! This module defines the `RsxResult` struct which carries the oscillator
//! values of one run together with the metadata needed to interpret them
//! (length, warm-up, first primed index, flat restarts).
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `values` has exactly one entry per input sample.
//! * Every value lies in `[0, 100]`.
//! * `primed_at`, when present, is at least `warmup`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::ExecutorOutput;

// ============================================================================
// Result Structure
// ============================================================================

/// RSX output containing oscillator values and run metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RsxResult<T> {
    /// Oscillator values, one per input sample.
    pub values: Vec<T>,

    /// Smoothing length used.
    pub length: T,

    /// Warm-up length in samples.
    pub warmup: usize,

    /// Index of the first primed value (`None` if the run never primed).
    pub primed_at: Option<usize>,

    /// Number of times a flat warm-up forced the filter to re-seed.
    pub restarts: usize,
}

impl<T: Float> RsxResult<T> {
    pub(crate) fn from_output(output: ExecutorOutput<T>, length: T) -> Self {
        Self {
            values: output.values,
            length,
            warmup: output.warmup,
            primed_at: output.primed_at,
            restarts: output.restarts,
        }
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the result holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if the filter left its warm-up period during the run.
    pub fn is_primed(&self) -> bool {
        self.primed_at.is_some()
    }

    /// Values from the first primed index onward (empty if never primed).
    pub fn primed_values(&self) -> &[T] {
        match self.primed_at {
            Some(start) => &self.values[start..],
            None => &[],
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for RsxResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.values.len())?;
        writeln!(f, "  Length:      {}", self.length)?;
        writeln!(f, "  Warm-up:     {}", self.warmup)?;
        match self.primed_at {
            Some(idx) => writeln!(f, "  Primed at:   {}", idx)?,
            None => writeln!(f, "  Primed at:   never")?,
        }
        if self.restarts > 0 {
            writeln!(f, "  Restarts:    {}", self.restarts)?;
        }
        writeln!(f)?;

        writeln!(f, "RSX Values:")?;
        writeln!(f, "{:>8} {:>12}", "Index", "RSX")?;
        writeln!(f, "{:-<21}", "")?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.values.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(f, "{:>8} {:>12.6}", idx, self.values[idx])?;
        }

        Ok(())
    }
}
