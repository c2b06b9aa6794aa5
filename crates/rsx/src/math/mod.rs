//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure recursive smoothing primitives the RSX
//! engine is assembled from. It holds no warm-up or validation logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Lag-reduced smoothing stages and cascades.
pub mod stage;
