//! Text input parsing.
//!
//! ## Purpose
//!
//! Widgets receive their inputs as form-field text and option tags. This
//! module turns those strings into typed values, reporting which field failed.
//!
//! ## Design notes
//!
//! * **Strict**: A field must be a complete number after trimming; trailing
//!   garbage such as `"12abc"` is rejected rather than read as `12`.
//! * **Finite**: `"NaN"` and `"inf"` parse as floats but are rejected.
//! * **Tags**: Enumerations implement `FromStr` for the tags used by the pages
//!   (`CtoF`, `solidSphere`, `XNOR`, `blur`, ...).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{borrow::ToOwned, format};

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::convolution::Kernel;
use crate::algorithms::logic::Gate;
use crate::algorithms::radix::Radix;
use crate::algorithms::pid::MAX_STEPS;
use crate::math::inertia::{Dimension, Dimensions, Shape};
use crate::math::temperature::TemperatureUnit;
use crate::primitives::errors::FormularyError;

// ============================================================================
// Numeric fields
// ============================================================================

/// Parse a required floating-point field.
pub fn parse_field<T: Float + FromStr>(text: &str, field: &'static str) -> Result<T, FormularyError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FormularyError::MissingField { field });
    }
    match trimmed.parse::<T>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FormularyError::InvalidNumericValue(format!(
            "{field}='{trimmed}'"
        ))),
    }
}

/// Parse an optional floating-point field; blank text yields `None`.
pub fn parse_optional_field<T: Float + FromStr>(
    text: &str,
    field: &'static str,
) -> Result<Option<T>, FormularyError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_field(text, field).map(Some)
}

/// Parse the dimension fields `shape` reads, leaving the rest untouched.
///
/// `fields` holds the radius, length, width and height text in that order.
/// Stale text in a hidden field is never inspected; a blank required field
/// comes back as `None` and is reported when the shape is evaluated.
pub fn parse_dimensions<T: Float + FromStr>(
    shape: Shape,
    fields: [&str; 4],
) -> Result<Dimensions<T>, FormularyError> {
    let [radius, length, width, height] = fields;
    let mut dims = Dimensions {
        radius: None,
        length: None,
        width: None,
        height: None,
    };
    for &dim in shape.required_dimensions() {
        let text = match dim {
            Dimension::Radius => radius,
            Dimension::Length => length,
            Dimension::Width => width,
            Dimension::Height => height,
        };
        dims.set(dim, parse_optional_field(text, dim.name())?);
    }
    Ok(dims)
}

/// Convert a numeric step count, as received from a script, to `usize`.
///
/// Non-finite, negative and fractional values are rejected, as is anything
/// above [`MAX_STEPS`].
pub fn parse_steps(value: f64) -> Result<usize, FormularyError> {
    if !value.is_finite() || value < 0.0 || Float::fract(value) != 0.0 {
        return Err(FormularyError::InvalidNumericValue(format!(
            "steps={value}"
        )));
    }
    if value > MAX_STEPS as f64 {
        return Err(FormularyError::TooManySteps {
            steps: value as usize,
            max: MAX_STEPS,
        });
    }
    Ok(value as usize)
}

/// Parse a required non-negative integer count.
pub fn parse_count(text: &str, field: &'static str) -> Result<u64, FormularyError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FormularyError::MissingField { field });
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| FormularyError::InvalidNumericValue(format!("{field}='{trimmed}'")))
}

fn unknown(kind: &'static str, name: &str) -> FormularyError {
    FormularyError::UnknownVariant {
        kind,
        name: name.to_owned(),
    }
}

// ============================================================================
// Tags
// ============================================================================

impl FromStr for TemperatureUnit {
    type Err = FormularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" | "°c" => Ok(Self::Celsius),
            "f" | "fahrenheit" | "°f" => Ok(Self::Fahrenheit),
            "k" | "kelvin" => Ok(Self::Kelvin),
            _ => Err(unknown("temperature unit", s)),
        }
    }
}

/// Parse a conversion code of the form `<from>to<to>`, e.g. `CtoF` or `KtoF`.
pub fn parse_conversion(code: &str) -> Result<(TemperatureUnit, TemperatureUnit), FormularyError> {
    let trimmed = code.trim();
    let lower = trimmed.to_ascii_lowercase();
    let (from, to) = lower
        .split_once("to")
        .ok_or_else(|| unknown("temperature conversion", trimmed))?;
    match (
        from.parse::<TemperatureUnit>(),
        to.parse::<TemperatureUnit>(),
    ) {
        (Ok(from), Ok(to)) => Ok((from, to)),
        _ => Err(unknown("temperature conversion", trimmed)),
    }
}

impl FromStr for Shape {
    type Err = FormularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', '-', ' '], "");
        match key.as_str() {
            "solidsphere" => Ok(Self::SolidSphere),
            "hollowsphere" => Ok(Self::HollowSphere),
            "solidcylinder" | "cylinder" => Ok(Self::SolidCylinder),
            "rodcenter" | "rod" => Ok(Self::RodCenter),
            "rectplate" | "plate" | "rectangularplate" => Ok(Self::RectPlate),
            _ => Err(unknown("shape", s)),
        }
    }
}

impl FromStr for Gate {
    type Err = FormularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Self::AND),
            "OR" => Ok(Self::OR),
            "XOR" => Ok(Self::XOR),
            "NAND" => Ok(Self::NAND),
            "NOR" => Ok(Self::NOR),
            "XNOR" => Ok(Self::XNOR),
            "NOT" => Ok(Self::NOT),
            _ => Err(unknown("gate", s)),
        }
    }
}

impl FromStr for Kernel {
    type Err = FormularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" | "none" | "original" => Ok(Self::Identity),
            "edge" | "edgedetect" | "edge_detect" => Ok(Self::EdgeDetect),
            "sharpen" => Ok(Self::Sharpen),
            "blur" | "boxblur" | "box_blur" => Ok(Self::BoxBlur),
            "emboss" => Ok(Self::Emboss),
            _ => Err(unknown("kernel", s)),
        }
    }
}

impl FromStr for Radix {
    type Err = FormularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let base = trimmed
            .parse::<u32>()
            .map_err(|_| unknown("base", trimmed))?;
        Radix::from_base(base)
    }
}
