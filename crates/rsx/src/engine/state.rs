//! Recursive RSX filter state.
//!
//! ## Purpose
//!
//! This module holds the per-run state machine of the RSX filter: the
//! warm-up counter, the previous scaled sample, and the two smoothing
//! cascades (signed momentum and absolute momentum) whose ratio forms the
//! oscillator.
//!
//! ## Design notes
//!
//! * **Ownership**: All mutable state lives in one value; independent runs
//!   never share anything, so separate states may be driven from separate threads.
//! * **Warm-up**: The first sample only seeds the state. Outputs stay at the
//!   neutral value until `warmup` samples have been absorbed.
//! * **Flat restart**: If the series has not moved at all by the end of the
//!   warm-up, the counter is cleared and the next sample seeds again.
//!
//! ## Key concepts
//!
//! * **Momentum**: Difference between consecutive samples scaled by 100.
//! * **Ratio**: `(signed / absolute + 1) * 50`, clamped to `[0, 100]`.
//!
//! ## Invariants
//!
//! * `warmup >= 5`.
//! * Every output lies in `[0, 100]`.
//! * The output at step `i` depends only on samples `0..=i`.
//!
//! ## Non-goals
//!
//! * This module does not validate lengths or samples (see the validator).

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::math::stage::{Cascade, Coefficients};

/// Output emitted while the filter is not primed.
pub const NEUTRAL: f64 = 50.0;

/// Shortest warm-up, regardless of length.
pub const MIN_WARMUP: usize = 5;

/// Absolute-momentum level below which the ratio is not computed.
pub const DENOMINATOR_EPSILON: f64 = 1.0e-10;

const SCALE: f64 = 100.0;

// ============================================================================
// RSX State
// ============================================================================

/// State of one RSX run.
#[derive(Debug, Clone, PartialEq)]
pub struct RsxState<T> {
    coeffs: Coefficients<T>,
    warmup: usize,
    counter: usize,
    moved: bool,
    prev: T,
    momentum: Cascade<T>,
    magnitude: Cascade<T>,
    signed: T,
    absolute: T,
    restarts: usize,
}

impl<T: Float> RsxState<T> {
    /// Create a fresh state for an already validated length.
    pub fn new(length: T) -> Self {
        Self {
            coeffs: Coefficients::from_length(length),
            warmup: Self::warmup_for(length),
            counter: 0,
            moved: false,
            prev: T::zero(),
            momentum: Cascade::new(),
            magnitude: Cascade::new(),
            signed: T::zero(),
            absolute: T::zero(),
            restarts: 0,
        }
    }

    /// Number of warm-up samples for a length: `max(floor(length) - 1, 5)`.
    pub fn warmup_for(length: T) -> usize {
        length
            .floor()
            .to_usize()
            .unwrap_or(usize::MAX)
            .saturating_sub(1)
            .max(MIN_WARMUP)
    }

    /// Advance the filter by one sample and return the oscillator value.
    pub fn next(&mut self, sample: T) -> T {
        let scaled = sample * T::from(SCALE).unwrap();

        if self.counter == 0 {
            self.counter = 1;
            self.moved = false;
            self.prev = scaled;
        } else {
            self.counter = if self.warmup <= self.counter {
                self.warmup.saturating_add(1)
            } else {
                self.counter + 1
            };

            let previous = self.prev;
            self.prev = scaled;

            let momentum = scaled - previous;
            self.signed = self.momentum.next(momentum, &self.coeffs);
            self.absolute = self.magnitude.next(momentum.abs(), &self.coeffs);

            if self.warmup >= self.counter && scaled != previous {
                self.moved = true;
            }
            if self.warmup == self.counter && !self.moved {
                trace!("rsx warm-up saw a flat series, restarting");
                self.counter = 0;
                self.restarts += 1;
            }
        }

        self.value()
    }

    /// Current oscillator value without advancing the state.
    pub fn value(&self) -> T {
        let neutral = T::from(NEUTRAL).unwrap();
        // A NaN magnitude (overflowed scaling) reads as no movement.
        let eps = T::from(DENOMINATOR_EPSILON).unwrap();
        if !self.is_primed() || self.absolute.is_nan() || self.absolute <= eps {
            return neutral;
        }

        let raw = (self.signed / self.absolute + T::one()) * neutral;
        raw.max(T::zero()).min(T::from(SCALE).unwrap())
    }

    /// Whether the warm-up period is over.
    pub fn is_primed(&self) -> bool {
        self.counter > self.warmup
    }

    /// Warm-up length in samples.
    pub fn warmup(&self) -> usize {
        self.warmup
    }

    /// Smoothing coefficients in use.
    #[allow(dead_code)]
    pub fn coefficients(&self) -> Coefficients<T> {
        self.coeffs
    }

    /// How many times a flat warm-up forced the filter to re-seed.
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Return to the freshly constructed state, keeping the coefficients.
    pub fn reset(&mut self) {
        *self = Self {
            coeffs: self.coeffs,
            warmup: self.warmup,
            counter: 0,
            moved: false,
            prev: T::zero(),
            momentum: Cascade::new(),
            magnitude: Cascade::new(),
            signed: T::zero(),
            absolute: T::zero(),
            restarts: 0,
        };
    }
}
