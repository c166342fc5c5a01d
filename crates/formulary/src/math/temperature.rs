//! Temperature unit conversion.
//!
//! ## Purpose
//!
//! Converts between Celsius, Fahrenheit and Kelvin with the six fixed linear
//! formulas. Every conversion pivots through Celsius, which reproduces the
//! direct formulas term for term (e.g. F→K is `(f - 32) * 5 / 9 + 273.15`).
//!
//! ## Invariants
//!
//! * Converting a unit to itself returns the input unchanged.
//! * `F→C(C→F(x)) ≈ x` for all finite `x`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constant;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit value of 0 °C.
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    Celsius,

    /// Degrees Fahrenheit.
    Fahrenheit,

    /// Kelvin.
    Kelvin,
}

impl TemperatureUnit {
    /// All supported units.
    pub const ALL: [TemperatureUnit; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    /// Unit symbol as printed in reports.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    /// Single-letter tag used in conversion codes such as `CtoF`.
    #[inline]
    pub const fn letter(&self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
            Self::Kelvin => 'K',
        }
    }

    #[inline]
    fn to_celsius<T: Float>(self, value: T) -> T {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => {
                (value - constant(FAHRENHEIT_OFFSET)) * constant(5.0) / constant(9.0)
            }
            Self::Kelvin => value - constant(KELVIN_OFFSET),
        }
    }

    #[inline]
    fn from_celsius<T: Float>(self, celsius: T) -> T {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => {
                celsius * constant(9.0) / constant(5.0) + constant(FAHRENHEIT_OFFSET)
            }
            Self::Kelvin => celsius + constant(KELVIN_OFFSET),
        }
    }
}

/// Convert `value` from one scale to another.
pub fn convert<T: Float>(value: T, from: TemperatureUnit, to: TemperatureUnit) -> T {
    if from == to {
        return value;
    }
    to.from_celsius(from.to_celsius(value))
}
