//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing processors that adapt the engine layer for
//! different execution modes:
//!
//! - **Batch**: One complete series in memory
//! - **Streaming**: Consecutive chunks of one long series
//! - **Online**: One sample at a time
//! - **Sweep**: One series, many lengths
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch RSX over a complete series.
pub mod batch;

/// Streaming RSX over chunked series.
pub mod streaming;

/// Online RSX for live samples.
pub mod online;

/// Parameter sweeps over several lengths.
pub mod sweep;
