//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer owns the RSX state machine and everything needed to run it:
//! input validation, sequential execution, and the result type.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Recursive filter state.
pub mod state;

/// Sequential execution.
pub mod executor;

/// Result types.
pub mod output;

/// Input and parameter validation.
pub mod validator;
