//! Batch adapter for RSX filtering.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: a complete series held
//! in memory is filtered in a single pass from fresh state.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, then delegates to the execution engine.
//! * **Reentrancy**: `compute` borrows the processor immutably; every call
//!   starts from new state, so one processor can serve many series.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The series must be non-empty and contain only finite samples.
//! * Output length equals input length and output order matches input order.
//!
//! ## Non-goals
//!
//! * This adapter does not handle chunked data (use the streaming adapter).
//! * This adapter does not handle per-sample updates (use the online adapter).

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{RsxConfig, RsxExecutor};
use crate::engine::output::RsxResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::RsxError;

/// Length used when none is configured.
pub const DEFAULT_LENGTH: f64 = 14.0;

// ============================================================================
// Batch RSX Builder
// ============================================================================

/// Builder for the batch RSX processor.
#[derive(Debug, Clone)]
pub struct BatchRsxBuilder<T: Float> {
    /// Smoothing length
    pub length: T,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchRsxBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchRsxBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            length: T::from(DEFAULT_LENGTH).unwrap(),
            duplicate_param: None,
        }
    }

    /// Set the smoothing length.
    pub fn length(mut self, length: T) -> Self {
        self.length = length;
        self
    }

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchRsx<T>, RsxError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_length(self.length)?;

        debug!(
            "built batch rsx processor (length={:?})",
            self.length.to_f64()
        );
        Ok(BatchRsx {
            length: self.length,
        })
    }
}

// ============================================================================
// Batch RSX Processor
// ============================================================================

/// Batch RSX processor.
#[derive(Debug, Clone, Copy)]
pub struct BatchRsx<T: Float> {
    length: T,
}

impl<T: Float> BatchRsx<T> {
    /// Filter a complete series.
    pub fn compute(&self, series: &[T]) -> Result<RsxResult<T>, RsxError> {
        Validator::validate_series(series)?;

        let output = RsxExecutor::run_with_config(
            series,
            RsxConfig {
                length: self.length,
            },
        );
        debug!(
            "rsx batch run: {} samples, warm-up {}, primed at {:?}",
            series.len(),
            output.warmup,
            output.primed_at
        );

        Ok(RsxResult::from_output(output, self.length))
    }

    /// Smoothing length of this processor.
    pub fn length(&self) -> T {
        self.length
    }
}
