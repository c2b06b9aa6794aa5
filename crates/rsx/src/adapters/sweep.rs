//! Sweep adapter for running RSX across several lengths.
//!
//! ## Purpose
//!
//! This module runs the filter over one series once per smoothing length,
//! each run starting from its own fresh state. It replaces hand-written
//! repetitions of "filter with length N, then N+1, ..." with a single call.
//!
//! ## Design notes
//!
//! * **Independence**: Runs share only the read-only input series.
//! * **Parallelism**: With the `cpu` feature, `parallel(true)` distributes
//!   the runs over the `rayon` thread pool. Results are identical to the
//!   sequential path and come back in the order the lengths were given.
//! * **Defaults**: Without explicit lengths the sweep covers 2 through 15.
//!
//! ## Invariants
//!
//! * One entry per requested length, in request order.
//! * Every entry equals the batch result for that length.
//!
//! ## Non-goals
//!
//! * This adapter does not rank or select lengths.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{RsxConfig, RsxExecutor};
use crate::engine::output::RsxResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::RsxError;

/// Lengths covered when none are configured.
pub const DEFAULT_SWEEP: core::ops::RangeInclusive<u32> = 2..=15;

// ============================================================================
// Sweep Entry
// ============================================================================

/// Result of one run within a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepEntry<T> {
    /// Smoothing length of this run.
    pub length: T,

    /// Output of this run.
    pub result: RsxResult<T>,
}

// ============================================================================
// Sweep RSX Builder
// ============================================================================

/// Builder for the sweep RSX processor.
#[derive(Debug, Clone)]
pub struct SweepRsxBuilder<T: Float> {
    /// Smoothing lengths to run, in output order
    pub lengths: Vec<T>,

    /// Parallel execution hint
    pub parallel: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SweepRsxBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SweepRsxBuilder<T> {
    /// Create a new sweep builder covering the default lengths.
    fn new() -> Self {
        Self {
            lengths: DEFAULT_SWEEP.map(|l| T::from(l).unwrap()).collect(),
            parallel: false,
            duplicate_param: None,
        }
    }

    /// Set the smoothing lengths to run.
    pub fn lengths(mut self, lengths: &[T]) -> Self {
        self.lengths = lengths.to_vec();
        self
    }

    /// Request parallel execution (effective with the `cpu` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the sweep processor.
    pub fn build(self) -> Result<SweepRsx<T>, RsxError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_lengths(&self.lengths)?;

        Ok(SweepRsx {
            lengths: self.lengths,
            parallel: self.parallel,
        })
    }
}

// ============================================================================
// Sweep RSX Processor
// ============================================================================

/// Sweep RSX processor.
#[derive(Debug, Clone)]
pub struct SweepRsx<T: Float> {
    lengths: Vec<T>,
    parallel: bool,
}

impl<T: Float + Send + Sync> SweepRsx<T> {
    /// Run the filter over `series` once per configured length.
    pub fn compute(&self, series: &[T]) -> Result<Vec<SweepEntry<T>>, RsxError> {
        Validator::validate_series(series)?;

        if self.parallel {
            #[cfg(feature = "cpu")]
            {
                debug!(
                    "rsx sweep: {} lengths over {} samples on {} threads",
                    self.lengths.len(),
                    series.len(),
                    rayon::current_num_threads()
                );
                return Ok(self
                    .lengths
                    .par_iter()
                    .map(|&length| run_one(series, length))
                    .collect());
            }
            #[cfg(not(feature = "cpu"))]
            debug!("rsx sweep: parallel requested without the `cpu` feature, running sequentially");
        }

        debug!(
            "rsx sweep: {} lengths over {} samples, sequential",
            self.lengths.len(),
            series.len()
        );
        Ok(self
            .lengths
            .iter()
            .map(|&length| run_one(series, length))
            .collect())
    }

    /// Configured lengths, in output order.
    pub fn lengths(&self) -> &[T] {
        &self.lengths
    }
}

fn run_one<T: Float>(series: &[T], length: T) -> SweepEntry<T> {
    let output = RsxExecutor::run_with_config(series, RsxConfig { length });
    SweepEntry {
        length,
        result: RsxResult::from_output(output, length),
    }
}
