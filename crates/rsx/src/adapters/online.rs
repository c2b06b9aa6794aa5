//! Online adapter for incremental RSX updates.
//!
//! ## Purpose
//!
//! This module provides the online (per-sample) execution adapter. It behaves
//! like a live indicator: each new sample advances the filter and yields the
//! current oscillator value.
//!
//! ## Design notes
//!
//! * **Missing data**: Non-finite samples (NaN, infinities) are returned
//!   unchanged and do not touch the filter state.
//! * **Identity**: Each processor carries a short name (`rsx(<length>)`) and a
//!   longer description for display purposes.
//!
//! ## Key concepts
//!
//! * **Priming**: `is_primed` reports whether the warm-up period is over.
//! * **Reset**: Returns the processor to its freshly built state.
//!
//! ## Invariants
//!
//! * Feeding the finite samples of a series one by one yields exactly the
//!   batch output for that series.
//!
//! ## Non-goals
//!
//! * This adapter does not buffer history.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::DEFAULT_LENGTH;
use crate::engine::executor::{RsxConfig, RsxExecutor};
use crate::engine::validator::Validator;
use crate::primitives::errors::RsxError;

// ============================================================================
// Online RSX Builder
// ============================================================================

/// Builder for the online RSX processor.
#[derive(Debug, Clone)]
pub struct OnlineRsxBuilder<T: Float> {
    /// Smoothing length
    pub length: T,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for OnlineRsxBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> OnlineRsxBuilder<T> {
    /// Create a new online builder with default parameters.
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

    /// Build the online processor.
    pub fn build(self) -> Result<OnlineRsx<T>, RsxError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_length(self.length)?;

        let name = format!("rsx({})", self.length.to_f64().unwrap_or(f64::NAN));
        let description = format!("Relative Strength Xtra {}", name);

        Ok(OnlineRsx {
            length: self.length,
            executor: RsxExecutor::from_config(&RsxConfig {
                length: self.length,
            }),
            name,
            description,
        })
    }
}

// ============================================================================
// Online RSX Processor
// ============================================================================

/// Online RSX processor.
#[derive(Debug, Clone)]
pub struct OnlineRsx<T: Float> {
    length: T,
    executor: RsxExecutor<T>,
    name: String,
    description: String,
}

impl<T: Float> OnlineRsx<T> {
    /// Advance the filter with the next sample and return the current value.
    pub fn update(&mut self, sample: T) -> T {
        if !sample.is_finite() {
            trace!("{}: skipping non-finite sample", self.name);
            return sample;
        }
        self.executor.step(sample)
    }

    /// Feed several samples in order.
    pub fn update_all(&mut self, samples: &[T]) -> Vec<T> {
        samples.iter().map(|&s| self.update(s)).collect()
    }

    /// Whether the warm-up period is over.
    pub fn is_primed(&self) -> bool {
        self.executor.state().is_primed()
    }

    /// Number of finite samples consumed.
    pub fn samples_seen(&self) -> usize {
        self.executor.consumed()
    }

    /// Smoothing length.
    pub fn length(&self) -> T {
        self.length
    }

    /// Short mnemonic, e.g. `rsx(14)`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Return to the freshly built state.
    pub fn reset(&mut self) {
        self.executor.reset();
    }
}
