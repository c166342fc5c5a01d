//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the widgets that go beyond a single formula:
//! - Image convolution with fixed kernels
//! - PID control-loop simulation
//! - Logic gates and truth tables
//! - Base-N integer conversion
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Image convolution.
pub mod convolution;

/// PID simulation.
pub mod pid;

/// Logic gates.
pub mod logic;

/// Radix conversion.
pub mod radix;
