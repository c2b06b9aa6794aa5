//! Streaming adapter for chunked RSX filtering.
//!
//! ## Purpose
//!
//! This module provides the streaming execution adapter. A long series is
//! delivered as consecutive chunks and the filter state is carried from one
//! chunk to the next, so the concatenated outputs are identical to a single
//! batch pass over the whole series.
//!
//! ## Design notes
//!
//! * **Continuity**: No overlap or merging is needed; the recursion simply
//!   resumes where the previous chunk stopped.
//! * **Atomic chunks**: A chunk is validated in full before any sample is
//!   consumed, so a rejected chunk leaves the state untouched.
//! * **Retention**: Outputs can optionally be retained for the final summary.
//!
//! ## Invariants
//!
//! * Each call returns exactly one value per sample of the chunk.
//! * Chunks must be supplied in stream order.
//!
//! ## Non-goals
//!
//! * This adapter does not reorder or deduplicate samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem::{replace, take};
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::DEFAULT_LENGTH;
use crate::engine::executor::{RsxConfig, RsxExecutor};
use crate::engine::output::RsxResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::RsxError;

// ============================================================================
// Streaming RSX Builder
// ============================================================================

/// Builder for the streaming RSX processor.
#[derive(Debug, Clone)]
pub struct StreamingRsxBuilder<T: Float> {
    /// Smoothing length
    pub length: T,

    /// Whether to keep every output for the final summary
    pub retain_values: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for StreamingRsxBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> StreamingRsxBuilder<T> {
    /// Create a new streaming builder with default parameters.
    fn new() -> Self {
        Self {
            length: T::from(DEFAULT_LENGTH).unwrap(),
            retain_values: false,
            duplicate_param: None,
        }
    }

    /// Set the smoothing length.
    pub fn length(mut self, length: T) -> Self {
        self.length = length;
        self
    }

    /// Keep all outputs so that `finalize` can return them.
    pub fn retain_values(mut self, enabled: bool) -> Self {
        self.retain_values = enabled;
        self
    }

    /// Build the streaming processor.
    pub fn build(self) -> Result<StreamingRsx<T>, RsxError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_length(self.length)?;

        let config = RsxConfig {
            length: self.length,
        };
        Ok(StreamingRsx {
            length: self.length,
            retain_values: self.retain_values,
            executor: RsxExecutor::from_config(&config),
            retained: Vec::new(),
        })
    }
}

// ============================================================================
// Streaming RSX Processor
// ============================================================================

/// Streaming RSX processor.
#[derive(Debug, Clone)]
pub struct StreamingRsx<T: Float> {
    length: T,
    retain_values: bool,
    executor: RsxExecutor<T>,
    retained: Vec<T>,
}

impl<T: Float> StreamingRsx<T> {
    /// Filter the next chunk of the stream.
    pub fn process_chunk(&mut self, chunk: &[T]) -> Result<Vec<T>, RsxError> {
        let offset = self.executor.consumed();
        for (i, &sample) in chunk.iter().enumerate() {
            Validator::validate_sample(sample, offset + i)?;
        }

        let mut out = Vec::with_capacity(chunk.len());
        self.executor.process(chunk, &mut out);

        if self.retain_values {
            self.retained.extend_from_slice(&out);
        }
        Ok(out)
    }

    /// Total samples consumed since construction or the last `finalize`.
    pub fn samples_processed(&self) -> usize {
        self.executor.consumed()
    }

    /// Whether the filter has left its warm-up period.
    pub fn is_primed(&self) -> bool {
        self.executor.state().is_primed()
    }

    /// Close the stream, returning its summary and resetting the processor.
    ///
    /// `values` holds every output only when `retain_values(true)` was set.
    pub fn finalize(&mut self) -> RsxResult<T> {
        let values = take(&mut self.retained);
        debug!(
            "rsx stream finalized after {} samples",
            self.executor.consumed()
        );

        let executor = RsxExecutor::from_config(&RsxConfig {
            length: self.length,
        });
        let finished = replace(&mut self.executor, executor);
        RsxResult::from_output(finished.into_output(values), self.length)
    }
}
