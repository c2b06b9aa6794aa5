//! Lag-reduced exponential smoothing stages.
//!
//! ## Purpose
//!
//! This module provides the recursive building blocks of the RSX filter: a
//! single lag-reduced stage (two chained exponential smoothers blended to
//! cancel most of their lag) and a fixed-depth cascade of such stages.
//!
//! ## Design notes
//!
//! * **Recursion**: Each stage is a first-order IIR pair; a cascade is three
//!   stages in series, forming a six-pole smoother.
//! * **Coefficients**: Derived once from the smoothing length and shared by
//!   every stage of every cascade.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Fast/slow pair**: `fast` tracks the input; `slow` smooths `fast`.
//! * **Lag cancellation**: The stage output is `1.5 * fast - 0.5 * slow`.
//!
//! ## Invariants
//!
//! * `alpha + decay == 1`.
//! * A freshly created stage or cascade has all accumulators at zero.
//!
//! ## Non-goals
//!
//! * This module does not implement warm-up or normalization.

// External dependencies
use num_traits::Float;

/// Number of lag-reduced stages chained in a cascade.
pub const CASCADE_DEPTH: usize = 3;

// ============================================================================
// Coefficients
// ============================================================================

/// Smoothing coefficients derived from the RSX length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<T> {
    /// Weight of the new value, `3 / (length + 2)`.
    pub alpha: T,

    /// Weight of the previous value, `1 - alpha`.
    pub decay: T,
}

impl<T: Float> Coefficients<T> {
    /// Derive the coefficients for the given smoothing length.
    pub fn from_length(length: T) -> Self {
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let alpha = three / (length + two);
        Self {
            alpha,
            decay: T::one() - alpha,
        }
    }
}

// ============================================================================
// Single Stage
// ============================================================================

/// A pair of chained exponential smoothers with lag compensation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagReducedStage<T> {
    fast: T,
    slow: T,
}

impl<T: Float> Default for LagReducedStage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LagReducedStage<T> {
    /// Create a stage with zeroed accumulators.
    pub fn new() -> Self {
        Self {
            fast: T::zero(),
            slow: T::zero(),
        }
    }

    /// Feed one value through the stage and return the lag-reduced output.
    #[inline]
    pub fn next(&mut self, x: T, coeffs: &Coefficients<T>) -> T {
        self.fast = coeffs.decay * self.fast + coeffs.alpha * x;
        self.slow = coeffs.alpha * self.fast + coeffs.decay * self.slow;
        self.fast * T::from(1.5).unwrap() - self.slow * T::from(0.5).unwrap()
    }

    /// Current value of the fast smoother.
    #[allow(dead_code)]
    pub fn fast(&self) -> T {
        self.fast
    }

    /// Current value of the slow smoother.
    #[allow(dead_code)]
    pub fn slow(&self) -> T {
        self.slow
    }
}

// ============================================================================
// Cascade
// ============================================================================

/// Three lag-reduced stages in series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cascade<T> {
    stages: [LagReducedStage<T>; CASCADE_DEPTH],
}

impl<T: Float> Default for Cascade<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Cascade<T> {
    /// Create a cascade with every stage zeroed.
    pub fn new() -> Self {
        Self {
            stages: [LagReducedStage::new(); CASCADE_DEPTH],
        }
    }

    /// Feed one value through all stages, returning the last stage's output.
    #[inline]
    pub fn next(&mut self, x: T, coeffs: &Coefficients<T>) -> T {
        self.stages
            .iter_mut()
            .fold(x, |value, stage| stage.next(value, coeffs))
    }

    /// Read-only view of the stages, first to last.
    #[allow(dead_code)]
    pub fn stages(&self) -> &[LagReducedStage<T>; CASCADE_DEPTH] {
        &self.stages
    }
}
