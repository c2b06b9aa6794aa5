//! High-level API for RSX filtering.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the one-shot
//! [`compute_rsx`] function and a fluent builder for configuring the filter
//! and choosing an execution adapter (Batch, Streaming, Online, or Sweep).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RsxBuilder`] via `Rsx::new()`.
//! 2. Chain configuration methods (`.length()`, `.lengths()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.
//! 4. Call `.build()` and run the processor.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchRsxBuilder;
use crate::adapters::online::OnlineRsxBuilder;
use crate::adapters::streaming::StreamingRsxBuilder;
use crate::adapters::sweep::SweepRsxBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::BatchRsx;
pub use crate::adapters::online::OnlineRsx;
pub use crate::adapters::streaming::StreamingRsx;
pub use crate::adapters::sweep::{SweepEntry, SweepRsx};
pub use crate::engine::output::RsxResult;
pub use crate::primitives::errors::RsxError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online, Streaming, Sweep};
}

// ============================================================================
// One-shot Entry Point
// ============================================================================

/// Filter `series` with the given smoothing length.
///
/// Returns one oscillator value in `[0, 100]` per input sample.
///
/// # Errors
///
/// * [`RsxError::InvalidParameter`] if `length` is not finite and positive.
/// * [`RsxError::InvalidInput`] if `series` is empty or holds a non-finite sample.
///
/// ```rust
/// use rsx::prelude::*;
///
/// let closes = [44.3, 44.1, 44.2, 43.6, 44.3, 44.8, 45.1, 45.4, 45.8, 46.1];
/// let values = compute_rsx(&closes, 2.0)?;
/// assert_eq!(values.len(), closes.len());
/// # Result::<(), RsxError>::Ok(())
/// ```
pub fn compute_rsx<T: Float>(series: &[T], length: T) -> Result<Vec<T>, RsxError> {
    let model = RsxBuilder::new().length(length).adapter(Batch).build()?;
    Ok(model.compute(series)?.values)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring RSX parameters and execution modes.
#[derive(Debug, Clone)]
pub struct RsxBuilder<T> {
    /// Smoothing length.
    pub length: Option<T>,

    /// Smoothing lengths for a sweep (Sweep only).
    pub lengths: Option<Vec<T>>,

    /// Keep streamed outputs for the final summary (Streaming only).
    pub retain_values: Option<bool>,

    /// Parallel execution hint (Sweep only).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RsxBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RsxBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: RsxAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            length: None,
            lengths: None,
            retain_values: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing length (larger is smoother and slower to react).
    pub fn length(mut self, length: T) -> Self {
        if self.length.is_some() {
            self.duplicate_param = Some("length");
        }
        self.length = Some(length);
        self
    }

    /// Set the smoothing lengths to run (Sweep only).
    pub fn lengths(mut self, lengths: &[T]) -> Self {
        if self.lengths.is_some() {
            self.duplicate_param = Some("lengths");
        }
        self.lengths = Some(lengths.to_vec());
        self
    }

    /// Keep streamed outputs so `finalize` can return them (Streaming only).
    pub fn retain_values(mut self, enabled: bool) -> Self {
        if self.retain_values.is_some() {
            self.duplicate_param = Some("retain_values");
        }
        self.retain_values = Some(enabled);
        self
    }

    /// Set the parallel execution hint (Sweep only).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }
}

// ============================================================================
// Adapter Conversion
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait RsxAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`RsxBuilder`] into a specialized execution builder.
    fn convert(builder: RsxBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> RsxAdapter<T> for Batch {
    type Output = BatchRsxBuilder<T>;

    fn convert(builder: RsxBuilder<T>) -> Self::Output {
        let mut result = BatchRsxBuilder::default();

        if let Some(length) = builder.length {
            result.length = length;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for chunked streaming processing.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl<T: Float> RsxAdapter<T> for Streaming {
    type Output = StreamingRsxBuilder<T>;

    fn convert(builder: RsxBuilder<T>) -> Self::Output {
        let mut result = StreamingRsxBuilder::default();

        if let Some(length) = builder.length {
            result.length = length;
        }
        if let Some(rv) = builder.retain_values {
            result.retain_values = rv;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float> RsxAdapter<T> for Online {
    type Output = OnlineRsxBuilder<T>;

    fn convert(builder: RsxBuilder<T>) -> Self::Output {
        let mut result = OnlineRsxBuilder::default();

        if let Some(length) = builder.length {
            result.length = length;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for multi-length parameter sweeps.
#[derive(Debug, Clone, Copy)]
pub struct Sweep;

impl<T: Float> RsxAdapter<T> for Sweep {
    type Output = SweepRsxBuilder<T>;

    fn convert(builder: RsxBuilder<T>) -> Self::Output {
        let mut result = SweepRsxBuilder::default();

        // Explicit lengths win; a single length becomes a one-entry sweep.
        match (builder.lengths, builder.length) {
            (Some(lengths), _) => result.lengths = lengths,
            (None, Some(length)) => result.lengths = vec![length],
            (None, None) => {}
        }
        if let Some(p) = builder.parallel {
            result.parallel = p;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
