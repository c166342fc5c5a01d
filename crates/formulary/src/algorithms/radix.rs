//! Base-N integer conversion.
//!
//! ## Purpose
//!
//! Parses an unsigned digit string in base 2, 8, 10 or 16 and re-renders it in
//! another of those bases. Hexadecimal input is case-insensitive; output is
//! always uppercase.
//!
//! ## Invariants
//!
//! * Every character of the (trimmed) input belongs to the source base's digit set.
//! * Values are limited to `u64`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, string::ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

// Internal dependencies
use crate::primitives::errors::FormularyError;

/// Supported numeral base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 2.
    Binary,

    /// Base 8.
    Octal,

    /// Base 10.
    Decimal,

    /// Base 16.
    Hexadecimal,
}

impl Radix {
    /// All supported bases.
    pub const ALL: [Radix; 4] = [Self::Binary, Self::Octal, Self::Decimal, Self::Hexadecimal];

    /// Look up a base by its numeric value.
    pub fn from_base(base: u32) -> Result<Self, FormularyError> {
        match base {
            2 => Ok(Self::Binary),
            8 => Ok(Self::Octal),
            10 => Ok(Self::Decimal),
            16 => Ok(Self::Hexadecimal),
            other => Err(FormularyError::UnsupportedBase(other)),
        }
    }

    /// Numeric value of the base.
    #[inline]
    pub const fn base(&self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Parse a digit string. Surrounding whitespace is ignored.
    pub fn parse(&self, digits: &str) -> Result<u64, FormularyError> {
        let digits = digits.trim();
        if digits.is_empty() {
            return Err(FormularyError::EmptyDigits);
        }

        let base = self.base();
        if let Some(bad) = digits.chars().find(|c| !c.is_digit(base)) {
            return Err(FormularyError::InvalidDigit { digit: bad, base });
        }

        // Only overflow can fail once the digit set has been checked.
        u64::from_str_radix(digits, base).map_err(|_| FormularyError::Overflow {
            digits: digits.to_string(),
            base,
        })
    }

    /// Render `value` in this base, uppercase, without prefix.
    pub fn format(&self, value: u64) -> String {
        match self {
            Self::Binary => format!("{value:b}"),
            Self::Octal => format!("{value:o}"),
            Self::Decimal => format!("{value}"),
            Self::Hexadecimal => format!("{value:X}"),
        }
    }
}

/// Convert a digit string between bases.
pub fn convert(digits: &str, from: Radix, to: Radix) -> Result<String, FormularyError> {
    from.parse(digits).map(|value| to.format(value))
}
