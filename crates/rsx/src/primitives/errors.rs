//! Error types for RSX operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or running the RSX filter: rejected parameters, unusable input series, and
//! builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending parameter name and value.
//! * **Deferred**: Builder misuse is recorded during configuration and
//!   reported when `build()` is called.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * Every failed call returns exactly one error and no partial output.
//! * Numeric values in errors are reported as `f64` regardless of the float type in use.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for RSX operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RsxError {
    /// A configuration parameter is outside its valid domain
    /// (e.g., a non-positive smoothing length).
    InvalidParameter {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// The value that was supplied.
        value: f64,
    },

    /// The input series cannot be filtered (empty, or containing NaN/infinite samples).
    InvalidInput(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

/// Parameter name reported when a sweep has no lengths.
pub const EMPTY_LENGTHS: &str = "lengths";

impl RsxError {
    /// Shorthand for the empty sweep list error.
    pub(crate) fn empty_lengths() -> Self {
        Self::InvalidParameter {
            parameter: EMPTY_LENGTHS,
            value: 0.0,
        }
    }

    /// Shorthand for the empty-series error.
    pub(crate) fn empty_series() -> Self {
        Self::InvalidInput(String::from("series is empty"))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RsxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidParameter {
                parameter: EMPTY_LENGTHS,
                ..
            } => {
                write!(f, "Invalid parameter: lengths is empty (at least one length is required)")
            }
            Self::InvalidParameter { parameter, value } => {
                write!(f, "Invalid parameter: {parameter}={value} (must be > 0 and finite)")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RsxError {}
