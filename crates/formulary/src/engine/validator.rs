//! Input validation for widget parameters.
//!
//! ## Purpose
//!
//! This module checks widget inputs before any formula runs: finiteness,
//! strictly positive physical quantities, presence of the dimensions a shape
//! needs, gate operands and non-empty confusion matrices.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not parse text (see the `input` module).
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::logic::Gate;
use crate::evaluation::metrics::ConfusionMatrix;
use crate::math::inertia::{Dimensions, Shape};
use crate::primitives::errors::FormularyError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for widget inputs.
///
/// All methods return `Result<_, FormularyError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Scalars
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), FormularyError> {
        if !val.is_finite() {
            return Err(FormularyError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate several named values for finiteness, in order.
    pub fn validate_scalars<T: Float>(vals: &[(T, &str)]) -> Result<(), FormularyError> {
        for &(val, name) in vals {
            Self::validate_scalar(val, name)?;
        }
        Ok(())
    }

    /// Validate a finite, strictly positive quantity (mass, standard deviation, length).
    pub fn validate_positive<T: Float>(val: T, name: &'static str) -> Result<(), FormularyError> {
        Self::validate_scalar(val, name)?;
        if val <= T::zero() {
            return Err(FormularyError::NonPositive {
                field: name,
                value: val.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Widget-specific
    // ========================================================================

    /// Validate that every dimension `shape` reads is present, finite and positive.
    pub fn validate_dimensions<T: Float>(
        shape: Shape,
        dims: &Dimensions<T>,
    ) -> Result<(), FormularyError> {
        for &dim in shape.required_dimensions() {
            let value = dims
                .get(dim)
                .ok_or(FormularyError::MissingField { field: dim.name() })?;
            Self::validate_positive(value, dim.name())?;
        }
        Ok(())
    }

    /// Validate that a binary gate received its second operand.
    pub fn validate_operand(gate: Gate, b: Option<bool>) -> Result<(), FormularyError> {
        if gate.arity() == 2 && b.is_none() {
            return Err(FormularyError::MissingOperand { gate: gate.name() });
        }
        Ok(())
    }

    /// Validate that the confusion matrix holds at least one observation.
    pub fn validate_confusion_matrix(matrix: &ConfusionMatrix) -> Result<(), FormularyError> {
        if matrix.total() == 0 {
            return Err(FormularyError::EmptyConfusionMatrix);
        }
        Ok(())
    }

    /// Validate that a simulation horizon does not exceed `max` steps.
    pub fn validate_steps(steps: usize, max: usize) -> Result<(), FormularyError> {
        if steps > max {
            return Err(FormularyError::TooManySteps { steps, max });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), FormularyError> {
        if let Some(param) = duplicate_param {
            return Err(FormularyError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
