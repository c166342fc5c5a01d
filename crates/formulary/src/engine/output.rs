//! Output types and human-readable reports.
//!
//! ## Purpose
//!
//! This module defines the result structures returned by the widgets and the
//! `Display` implementations that render them the way the widget pages do.
//!
//! ## Design notes
//!
//! * **Formatting**: Temperatures use 2 decimals; moments of inertia use 4
//!   decimals, switching to exponential notation outside `[0.01, 1000]`.
//! * **Exponents**: Exponential output carries an explicit sign (`1.2346e+3`).
//! * **Generics**: Results are generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores and renders results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, LowerExp, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::logic::TruthTable;
use crate::algorithms::pid::{PidGains, PidSample};
use crate::algorithms::radix::Radix;
use crate::evaluation::metrics::ClassificationMetrics;
use crate::math::constant;
use crate::math::inertia::Shape;
use crate::math::kinematics::ArmPose;
use crate::math::stress::PrincipalStresses;
use crate::math::temperature::TemperatureUnit;

// ============================================================================
// Formatting helpers
// ============================================================================

/// Write `value` in exponential notation with `digits` fraction digits and a
/// signed exponent, e.g. `1.2346e+3` or `5.0000e-3`.
fn write_exponential<T: LowerExp>(f: &mut Formatter<'_>, value: T, digits: usize) -> Result {
    let rendered = format!("{value:.digits$e}");
    match rendered.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
        _ => f.write_str(&rendered),
    }
}

// ============================================================================
// Temperature
// ============================================================================

/// A converted temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureConversion<T> {
    /// Value as entered.
    pub input: T,

    /// Source scale.
    pub from: TemperatureUnit,

    /// Target scale.
    pub to: TemperatureUnit,

    /// Converted value.
    pub output: T,
}

impl<T: Float + Display> Display for TemperatureConversion<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} {} = {:.2} {}",
            self.input,
            self.from.symbol(),
            self.output,
            self.to.symbol()
        )
    }
}

// ============================================================================
// Moment of inertia
// ============================================================================

/// A computed moment of inertia.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaReport<T> {
    /// Shape the moment refers to.
    pub shape: Shape,

    /// Mass in kg.
    pub mass: T,

    /// Moment of inertia in kg·m².
    pub value: T,
}

impl<T: Float> InertiaReport<T> {
    /// Upper bound of the fixed-point display range.
    pub const FIXED_MAX: f64 = 1000.0;

    /// Lower bound of the fixed-point display range.
    pub const FIXED_MIN: f64 = 0.01;

    /// Whether the value is rendered in exponential notation.
    pub fn uses_exponential(&self) -> bool {
        self.value > constant(Self::FIXED_MAX) || self.value < constant(Self::FIXED_MIN)
    }
}

impl<T: Float + Display + LowerExp> Display for InertiaReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("I = ")?;
        if self.uses_exponential() {
            write_exponential(f, self.value, 4)?;
        } else {
            write!(f, "{:.4}", self.value)?;
        }
        f.write_str(" kg·m²")
    }
}

// ============================================================================
// Normal distribution
// ============================================================================

/// Density and cumulative probability at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalEvaluation<T> {
    /// Evaluation point.
    pub x: T,

    /// Standardised score `(x - mean) / std`, before clamping.
    pub z: T,

    /// Probability density at `x`.
    pub pdf: T,

    /// `P(X ≤ x)`.
    pub cdf: T,
}

impl<T: Float + Display> Display for NormalEvaluation<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "z = {:.4}", self.z)?;
        writeln!(f, "PDF f(x) = {:.6}", self.pdf)?;
        write!(f, "CDF P(X ≤ {}) = {:.6}", self.x, self.cdf)
    }
}

// ============================================================================
// Stress, kinematics, metrics
// ============================================================================

impl<T: Float + Display> Display for PrincipalStresses<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "σ1 = {:.2}", self.sigma_1)?;
        writeln!(f, "σ2 = {:.2}", self.sigma_2)?;
        write!(f, "τmax = {:.2}", self.tau_max)
    }
}

impl<T: Float + Display> Display for ArmPose<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Elbow: ({:.2}, {:.2})", self.elbow.0, self.elbow.1)?;
        write!(
            f,
            "End effector: ({:.2}, {:.2})",
            self.end_effector.0, self.end_effector.1
        )
    }
}

impl<T: Float + Display> Display for ClassificationMetrics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Accuracy:  {:.4}", self.accuracy)?;
        writeln!(f, "Precision: {:.4}", self.precision)?;
        writeln!(f, "Recall:    {:.4}", self.recall)?;
        write!(f, "F1 score:  {:.4}", self.f1)
    }
}

// ============================================================================
// Logic
// ============================================================================

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let bit = |v: bool| if v { '1' } else { '0' };
        writeln!(f, "{}", self.gate.name())?;
        if self.gate.arity() == 1 {
            write!(f, "A | OUT")?;
        } else {
            write!(f, "A B | OUT")?;
        }
        for row in &self.rows {
            match row.b {
                Some(b) => write!(f, "\n{} {} |  {}", bit(row.a), bit(b), bit(row.output))?,
                None => write!(f, "\n{} |  {}", bit(row.a), bit(row.output))?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// Radix
// ============================================================================

/// A number re-rendered in another base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseConversion {
    /// Digits as entered (trimmed).
    pub input: String,

    /// Source base.
    pub from: Radix,

    /// Target base.
    pub to: Radix,

    /// Converted digits, uppercase.
    pub output: String,
}

impl Display for BaseConversion {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} (base {}) = {} (base {})",
            self.input,
            self.from.base(),
            self.output,
            self.to.base()
        )
    }
}

// ============================================================================
// PID
// ============================================================================

/// Output trajectory of a PID simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct PidTrace<T> {
    /// Gains used.
    pub gains: PidGains<T>,

    /// Target value.
    pub setpoint: T,

    /// One sample per step.
    pub samples: Vec<PidSample<T>>,
}

impl<T: Float> PidTrace<T> {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the trace has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Output values in step order.
    pub fn outputs(&self) -> impl Iterator<Item = T> + '_ {
        self.samples.iter().map(|s| s.output)
    }

    /// Output after the last step.
    pub fn final_output(&self) -> Option<T> {
        self.samples.last().map(|s| s.output)
    }

    /// Smallest finite output, for chart scaling.
    pub fn min_output(&self) -> Option<T> {
        self.outputs().filter(|v| v.is_finite()).reduce(T::min)
    }

    /// Largest finite output, for chart scaling.
    pub fn max_output(&self) -> Option<T> {
        self.outputs().filter(|v| v.is_finite()).reduce(T::max)
    }

    /// Whether any output is NaN or infinite.
    pub fn diverged(&self) -> bool {
        self.outputs().any(|v| !v.is_finite())
    }
}

impl<T: Float + Display> Display for PidTrace<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(
            f,
            "Gains: kp={} ki={} kd={}",
            self.gains.kp, self.gains.ki, self.gains.kd
        )?;
        writeln!(f, "Setpoint: {}", self.setpoint)?;
        write!(f, "Steps: {}", self.samples.len())?;
        if let Some(last) = self.final_output() {
            write!(f, "\nFinal output: {:.4}", last)?;
        }
        if let (Some(lo), Some(hi)) = (self.min_output(), self.max_output()) {
            write!(f, "\nRange: [{:.4}, {:.4}]", lo, hi)?;
        }
        if self.diverged() {
            write!(f, "\nDiverged")?;
        }
        Ok(())
    }
}
