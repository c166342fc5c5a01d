//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared error type and the pixel buffer used by the
//! convolution widget. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// RGBA pixel buffer.
pub mod buffer;
