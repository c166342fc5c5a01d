//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the closed-form formulas behind the widgets:
//! - Temperature scale conversion
//! - Moments of inertia for fixed shapes
//! - Normal distribution density and cumulative probability
//! - 2D stress transformation (Mohr's circle)
//! - Planar two-link forward kinematics
//!
//! These are pure functions; input validation happens in the engine layer.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use num_traits::Float;

/// Temperature unit conversion.
pub mod temperature;

/// Moment of inertia formulas.
pub mod inertia;

/// Normal distribution PDF and CDF.
pub mod normal;

/// Mohr's circle stress transformation.
pub mod stress;

/// Two-link forward kinematics.
pub mod kinematics;

/// Lift an `f64` literal into `T`.
///
/// Every `Float` implementation can represent the literals used by this
/// crate; NaN is returned if one ever cannot.
#[inline]
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
