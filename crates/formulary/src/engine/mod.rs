//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer sits between raw widget inputs and the formulas: it parses form
//! text, validates parameters, and defines the report types rendered back to
//! the page.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Form-field and tag parsing.
pub mod input;

/// Output and report types.
pub mod output;
