//! # RSX: Relative Strength Xtra for Rust
//!
//! A native, dependency-light implementation of the RSX oscillator: a
//! low-lag, heavily smoothed relative-strength measure bounded to `[0, 100]`.
//!
//! ## What is RSX?
//!
//! RSX compares smoothed price momentum with smoothed absolute momentum.
//! Both are passed through a cascade of three lag-reduced exponential stages
//! whose time constant is set by a single `length` parameter. The ratio is
//! mapped to `[0, 100]`: values above 50 indicate rising momentum, values
//! below 50 falling momentum. Compared to a classic RSI of the same length
//! the curve is far smoother without adding lag.
//!
//! ## Quick Start
//!
//! ### One-shot
//!
//! ```rust
//! use rsx::prelude::*;
//!
//! let closes = vec![91.5, 94.815, 94.375, 95.095, 93.78, 94.625, 92.53, 92.75, 90.315, 92.47];
//! let values = compute_rsx(&closes, 2.0)?;
//!
//! assert_eq!(values.len(), closes.len());
//! assert!(values.iter().all(|v| (0.0..=100.0).contains(v)));
//! # Result::<(), RsxError>::Ok(())
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use rsx::prelude::*;
//!
//! let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.4).sin()).collect();
//!
//! let model = Rsx::new()
//!     .length(8.0)        // Smoothing length
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.compute(&closes)?;
//! println!("{}", result);
//! # Result::<(), RsxError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 40
//!   Length:      8
//!   Warm-up:     7
//!   Primed at:   7
//!
//! RSX Values:
//!    Index          RSX
//! ---------------------
//!        0    50.000000
//! ...
//! ```
//!
//! ### Other adapters
//!
//! * [`Streaming`](prelude::Streaming): feed one long series in chunks.
//! * [`Online`](prelude::Online): feed one sample at a time, like a live indicator.
//! * [`Sweep`](prelude::Sweep): run several lengths over the same series
//!   (in parallel with the `cpu` feature).
//!
//! ## Warm-up
//!
//! The first `max(floor(length) - 1, 5)` outputs are the neutral value 50.
//! If the series has not moved at all by the end of that period, the
//! warm-up starts over.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! rsx = { version = "0.1", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Math - lag-reduced smoothing stages.
mod math;

// Layer 3: Engine - filter state, execution and validation.
mod engine;

// Layer 4: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for RSX filtering.
mod api;

// Standard RSX prelude.
pub mod prelude {
    pub use crate::api::{
        compute_rsx,
        Adapter::{Batch, Online, Streaming, Sweep},
        BatchRsx, OnlineRsx, RsxBuilder as Rsx, RsxError, RsxResult, StreamingRsx, SweepEntry,
        SweepRsx,
    };
}

pub use api::compute_rsx;

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
