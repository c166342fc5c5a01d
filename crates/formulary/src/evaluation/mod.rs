//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer scores predictions against ground truth. It currently provides
//! binary classification metrics from confusion-matrix counts.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Classification metrics.
pub mod metrics;
