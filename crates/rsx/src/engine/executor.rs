//! Execution engine for RSX filtering.
//!
//! ## Purpose
//!
//! This module drives an [`RsxState`] over slices of samples. It is the
//! single place where the adapters turn samples into oscillator values, so
//! batch, streaming, online, and sweep execution all share one code path.
//!
//! ## Design notes
//!
//! * **Append-only**: Output is written into a caller-supplied vector so
//!   streaming callers can reuse allocations.
//! * **Priming**: The executor records the global index of the first primed
//!   output across successive calls.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Exactly one output is appended per input sample.
//! * Samples are consumed strictly in order.
//!
//! ## Non-goals
//!
//! * This module does not validate input (adapters do that first).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::state::RsxState;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one RSX run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RsxConfig<T> {
    /// Smoothing length (already validated).
    pub length: T,
}

// ============================================================================
// Executor Output
// ============================================================================

/// Raw output of a complete run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// One oscillator value per input sample.
    pub values: Vec<T>,

    /// Index of the first primed output, if any.
    pub primed_at: Option<usize>,

    /// Warm-up length used.
    pub warmup: usize,

    /// Number of flat warm-up restarts.
    pub restarts: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Sequential RSX executor.
#[derive(Debug, Clone)]
pub struct RsxExecutor<T> {
    state: RsxState<T>,
    consumed: usize,
    primed_at: Option<usize>,
}

impl<T: Float> RsxExecutor<T> {
    /// Create an executor with fresh state.
    pub fn from_config(config: &RsxConfig<T>) -> Self {
        Self {
            state: RsxState::new(config.length),
            consumed: 0,
            primed_at: None,
        }
    }

    /// Run a complete series from fresh state.
    pub fn run_with_config(series: &[T], config: RsxConfig<T>) -> ExecutorOutput<T> {
        let mut executor = Self::from_config(&config);
        let mut values = Vec::with_capacity(series.len());
        executor.process(series, &mut values);
        executor.into_output(values)
    }

    /// Feed samples in order, appending one output per sample to `out`.
    pub fn process(&mut self, samples: &[T], out: &mut Vec<T>) {
        out.reserve(samples.len());
        for &sample in samples {
            out.push(self.step(sample));
        }
    }

    /// Feed a single sample.
    #[inline]
    pub fn step(&mut self, sample: T) -> T {
        let value = self.state.next(sample);
        if self.primed_at.is_none() && self.state.is_primed() {
            self.primed_at = Some(self.consumed);
        }
        self.consumed += 1;
        value
    }

    /// Package accumulated values with the run metadata.
    pub fn into_output(self, values: Vec<T>) -> ExecutorOutput<T> {
        ExecutorOutput {
            values,
            primed_at: self.primed_at,
            warmup: self.state.warmup(),
            restarts: self.state.restarts(),
        }
    }

    /// Underlying filter state.
    pub fn state(&self) -> &RsxState<T> {
        &self.state
    }

    /// Number of samples consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Index of the first primed output so far.
    #[allow(dead_code)]
    pub fn primed_at(&self) -> Option<usize> {
        self.primed_at
    }

    /// Discard all progress.
    pub fn reset(&mut self) {
        self.state.reset();
        self.consumed = 0;
        self.primed_at = None;
    }
}
