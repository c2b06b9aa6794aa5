//! Input validation for RSX configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions used before any filtering
//! takes place: smoothing lengths, input series, single samples, and builder
//! misuse.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A validated length is finite and strictly positive.
//! * A validated series is non-empty and contains only finite samples.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair input data.
//! * This module does not perform the filtering itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RsxError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for RSX configuration and input data.
///
/// Provides static methods that return `Result<(), RsxError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate a complete input series.
    pub fn validate_series<T: Float>(series: &[T]) -> Result<(), RsxError> {
        // Check 1: Non-empty
        if series.is_empty() {
            return Err(RsxError::empty_series());
        }

        // Check 2: All samples finite
        for (i, &sample) in series.iter().enumerate() {
            Self::validate_sample(sample, i)?;
        }

        Ok(())
    }

    /// Validate a single sample at the given stream position.
    pub fn validate_sample<T: Float>(sample: T, index: usize) -> Result<(), RsxError> {
        if !sample.is_finite() {
            return Err(RsxError::InvalidInput(format!(
                "series[{}]={}",
                index,
                sample.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing length.
    pub fn validate_length<T: Float>(length: T) -> Result<(), RsxError> {
        if !length.is_finite() || length <= T::zero() {
            return Err(RsxError::InvalidParameter {
                parameter: "length",
                value: length.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate a list of smoothing lengths for a parameter sweep.
    pub fn validate_lengths<T: Float>(lengths: &[T]) -> Result<(), RsxError> {
        if lengths.is_empty() {
            return Err(RsxError::empty_lengths());
        }

        for &length in lengths {
            Self::validate_length(length)?;
        }

        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), RsxError> {
        if let Some(param) = duplicate_param {
            return Err(RsxError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
