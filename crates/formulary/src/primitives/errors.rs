//! Error types for widget computations.
//!
//! ## Purpose
//!
//! This module defines every condition under which a widget refuses to
//! compute: unparsable or missing form input, out-of-domain parameters,
//! digits that do not belong to a base, and a convolution requested before any
//! image was loaded.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the field or value that failed.
//! * **Local**: No error is fatal; each is surfaced as a user-facing message.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Zero-denominator metric cases are not errors; they resolve to zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for widget computations.
#[derive(Debug, Clone, PartialEq)]
pub enum FormularyError {
    /// A form field was left blank.
    MissingField {
        /// Name of the blank field.
        field: &'static str,
    },

    /// A value could not be parsed or is NaN / infinite.
    InvalidNumericValue(String),

    /// A parameter that must be strictly positive was not.
    NonPositive {
        /// Name of the offending parameter.
        field: &'static str,
        /// The value provided.
        value: f64,
    },

    /// A tag did not name any known variant (unit pair, shape, gate, kernel).
    UnknownVariant {
        /// Kind of enumeration being parsed.
        kind: &'static str,
        /// The unrecognised tag.
        name: String,
    },

    /// A binary gate was evaluated without its second operand.
    MissingOperand {
        /// Name of the gate.
        gate: &'static str,
    },

    /// Base conversion was asked to parse an empty digit string.
    EmptyDigits,

    /// A digit is not valid in the source base.
    InvalidDigit {
        /// The rejected character.
        digit: char,
        /// The source base.
        base: u32,
    },

    /// Only bases 2, 8, 10 and 16 are supported.
    UnsupportedBase(u32),

    /// The digit string does not fit in an unsigned 64-bit integer.
    Overflow {
        /// The digit string that overflowed.
        digits: String,
        /// The source base.
        base: u32,
    },

    /// The confusion matrix has no observations.
    EmptyConfusionMatrix,

    /// The pixel buffer length does not match `width * height * 4`.
    InvalidImageDimensions {
        /// Image width in pixels.
        width: usize,
        /// Image height in pixels.
        height: usize,
        /// Length of the byte buffer supplied.
        len: usize,
    },

    /// A filter was applied before any source image was loaded.
    NoSourceImage,

    /// The simulation horizon is longer than the supported maximum.
    TooManySteps {
        /// Requested number of steps.
        steps: usize,
        /// Largest accepted number of steps.
        max: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FormularyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing value for '{field}'"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::NonPositive { field, value } => {
                write!(f, "Invalid {field}: {value} (must be > 0)")
            }
            Self::UnknownVariant { kind, name } => write!(f, "Unknown {kind}: '{name}'"),
            Self::MissingOperand { gate } => {
                write!(f, "Gate {gate} requires a second input")
            }
            Self::EmptyDigits => write!(f, "Input number is empty"),
            Self::InvalidDigit { digit, base } => {
                write!(f, "Invalid digit '{digit}' for base {base}")
            }
            Self::UnsupportedBase(base) => {
                write!(f, "Unsupported base: {base} (must be 2, 8, 10 or 16)")
            }
            Self::Overflow { digits, base } => {
                write!(f, "Number '{digits}' in base {base} exceeds 64 bits")
            }
            Self::EmptyConfusionMatrix => {
                write!(f, "Confusion matrix is empty (TP + FP + TN + FN = 0)")
            }
            Self::InvalidImageDimensions { width, height, len } => {
                write!(
                    f,
                    "Image buffer of {len} bytes does not match {width}x{height} RGBA pixels"
                )
            }
            Self::NoSourceImage => write!(f, "No image loaded"),
            Self::TooManySteps { steps, max } => {
                write!(f, "Invalid steps: {steps} (must be at most {max})")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FormularyError {}
