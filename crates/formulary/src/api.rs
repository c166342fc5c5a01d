//! High-level API for the widgets.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: one validated function
//! per widget, report constructors for the pages, and a fluent builder for the
//! PID simulation.
//!
//! ## Design notes
//!
//! * **Validated**: Every function validates its inputs before computing and
//!   returns `Err(FormularyError)` instead of a meaningless number.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Closed sets**: Units, shapes, gates, kernels and bases are enums, so
//!   every dispatch is checked for exhaustiveness.
//!
//! ### PID configuration flow
//!
//! 1. Create a [`PidBuilder`] via `Pid::new()`.
//! 2. Chain configuration methods (`.kp()`, `.ki()`, `.kd()`, `.setpoint()`, `.steps()`).
//! 3. Call `.build()` to validate, then `.run()` on the simulation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::convolution::convolve;
use crate::algorithms::pid::simulate;
use crate::algorithms::radix::convert;
use crate::engine::validator::Validator;
use crate::math::inertia::moment_of_inertia;
use crate::math::{kinematics, normal, stress, temperature};

// Publicly re-exported types
pub use crate::algorithms::convolution::{ChannelRounding, ConvolutionSession, Kernel};
pub use crate::algorithms::logic::{Gate, TruthRow, TruthTable};
pub use crate::algorithms::pid::{DAMPING, DT, MAX_STEPS, PidGains, PidSample};
pub use crate::algorithms::radix::Radix;
pub use crate::engine::input::{
    parse_conversion, parse_count, parse_dimensions, parse_field, parse_optional_field, parse_steps,
};
pub use crate::engine::output::{
    BaseConversion, InertiaReport, NormalEvaluation, PidTrace, TemperatureConversion,
};
pub use crate::evaluation::metrics::{ClassificationMetrics, ConfusionMatrix};
pub use crate::math::inertia::{Dimension, Dimensions, Shape};
pub use crate::math::kinematics::ArmPose;
pub use crate::math::stress::PrincipalStresses;
pub use crate::math::temperature::TemperatureUnit;
pub use crate::primitives::buffer::PixelBuffer;
pub use crate::primitives::errors::FormularyError;

// ============================================================================
// Temperature
// ============================================================================

/// Convert a temperature between scales. Fails on NaN or infinite input.
pub fn convert_temperature<T: Float>(
    value: T,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Result<T, FormularyError> {
    Validator::validate_scalar(value, "temperature")?;
    Ok(temperature::convert(value, from, to))
}

/// Convert a temperature and keep the inputs for display.
pub fn temperature_report<T: Float>(
    value: T,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Result<TemperatureConversion<T>, FormularyError> {
    let output = convert_temperature(value, from, to)?;
    Ok(TemperatureConversion {
        input: value,
        from,
        to,
        output,
    })
}

// ============================================================================
// Moment of inertia
// ============================================================================

/// Moment of inertia of `shape` in kg·m².
///
/// Mass and every dimension the shape reads must be finite and positive.
pub fn compute_inertia<T: Float>(
    shape: Shape,
    mass: T,
    dims: &Dimensions<T>,
) -> Result<T, FormularyError> {
    Validator::validate_positive(mass, "mass")?;
    Validator::validate_dimensions(shape, dims)?;
    moment_of_inertia(shape, mass, dims).ok_or(FormularyError::MissingField {
        field: "dimensions",
    })
}

/// Compute a moment of inertia and keep the inputs for display.
pub fn inertia_report<T: Float>(
    shape: Shape,
    mass: T,
    dims: &Dimensions<T>,
) -> Result<InertiaReport<T>, FormularyError> {
    let value = compute_inertia(shape, mass, dims)?;
    Ok(InertiaReport { shape, mass, value })
}

// ============================================================================
// Normal distribution
// ============================================================================

/// PDF and CDF of N(mean, std²) at `x`. Fails if `std <= 0` or any input is non-finite.
pub fn normal_pdf_cdf<T: Float>(mean: T, std: T, x: T) -> Result<NormalEvaluation<T>, FormularyError> {
    Validator::validate_scalars(&[(mean, "mean"), (x, "x")])?;
    Validator::validate_positive(std, "standard deviation")?;

    Ok(NormalEvaluation {
        x,
        z: (x - mean) / std,
        pdf: normal::pdf(mean, std, x),
        cdf: normal::cdf(mean, std, x),
    })
}

// ============================================================================
// Mohr's circle
// ============================================================================

/// Principal stresses and maximum shear of a plane stress state.
pub fn mohrs_circle<T: Float>(
    sigma_x: T,
    sigma_y: T,
    tau_xy: T,
) -> Result<PrincipalStresses<T>, FormularyError> {
    Validator::validate_scalars(&[(sigma_x, "sigma_x"), (sigma_y, "sigma_y"), (tau_xy, "tau_xy")])?;
    Ok(stress::principal_stresses(sigma_x, sigma_y, tau_xy))
}

// ============================================================================
// Logic
// ============================================================================

/// Evaluate a gate. Binary gates require `b`; `NOT` ignores it.
pub fn evaluate_gate(gate: Gate, a: bool, b: Option<bool>) -> Result<bool, FormularyError> {
    Validator::validate_operand(gate, b)?;
    Ok(gate.apply(a, b.unwrap_or(false)))
}

/// Truth table of a gate, rows ordered by input.
pub fn truth_table(gate: Gate) -> TruthTable {
    TruthTable::new(gate)
}

// ============================================================================
// Radix
// ============================================================================

/// Convert a digit string from one base to another (bases 2, 8, 10, 16).
pub fn convert_base(digits: &str, from_base: u32, to_base: u32) -> Result<String, FormularyError> {
    let from = Radix::from_base(from_base)?;
    let to = Radix::from_base(to_base)?;
    convert(digits, from, to)
}

/// Convert a digit string and keep the inputs for display.
pub fn base_conversion_report(
    digits: &str,
    from: Radix,
    to: Radix,
) -> Result<BaseConversion, FormularyError> {
    let output = convert(digits, from, to)?;
    Ok(BaseConversion {
        input: digits.trim().to_string(),
        from,
        to,
        output,
    })
}

// ============================================================================
// Convolution
// ============================================================================

/// Filter an image with round-to-nearest narrowing.
///
/// Use a [`ConvolutionSession`] to keep a loaded image across applications or
/// to select another [`ChannelRounding`].
pub fn apply_convolution(image: &PixelBuffer, kernel: Kernel) -> PixelBuffer {
    convolve(image, kernel, ChannelRounding::default())
}

// ============================================================================
// Classification metrics
// ============================================================================

/// Accuracy, precision, recall and F1. Fails when all four counts are zero.
pub fn classification_metrics<T: Float>(
    tp: u64,
    fp: u64,
    tn: u64,
    fn_: u64,
) -> Result<ClassificationMetrics<T>, FormularyError> {
    let matrix = ConfusionMatrix::new(tp, fp, tn, fn_);
    Validator::validate_confusion_matrix(&matrix)?;
    Ok(ClassificationMetrics::from_counts(&matrix))
}

// ============================================================================
// Forward kinematics
// ============================================================================

/// Elbow and end-effector positions of a two-link arm; angles in radians.
pub fn forward_kinematics<T: Float>(
    l1: T,
    l2: T,
    theta1: T,
    theta2: T,
) -> Result<ArmPose<T>, FormularyError> {
    Validator::validate_scalars(&[(l1, "l1"), (l2, "l2"), (theta1, "theta1"), (theta2, "theta2")])?;
    Ok(kinematics::forward(l1, l2, theta1, theta2))
}

/// [`forward_kinematics`] with joint angles in degrees.
pub fn forward_kinematics_degrees<T: Float>(
    l1: T,
    l2: T,
    theta1_deg: T,
    theta2_deg: T,
) -> Result<ArmPose<T>, FormularyError> {
    forward_kinematics(l1, l2, theta1_deg.to_radians(), theta2_deg.to_radians())
}

// ============================================================================
// PID simulation
// ============================================================================

/// Simulate a PID loop for `steps` samples with the fixed time step and damping.
pub fn simulate_pid<T: Float>(
    kp: T,
    ki: T,
    kd: T,
    setpoint: T,
    steps: usize,
) -> Result<PidTrace<T>, FormularyError> {
    Ok(PidBuilder::new()
        .kp(kp)
        .ki(ki)
        .kd(kd)
        .setpoint(setpoint)
        .steps(steps)
        .build()?
        .run())
}

/// Fluent builder for a PID simulation.
#[derive(Debug, Clone)]
pub struct PidBuilder<T> {
    /// Proportional gain (default 0).
    pub kp: Option<T>,

    /// Integral gain (default 0).
    pub ki: Option<T>,

    /// Derivative gain (default 0).
    pub kd: Option<T>,

    /// Target value (default 1).
    pub setpoint: Option<T>,

    /// Number of samples (default 600, one per chart pixel).
    pub steps: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for PidBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PidBuilder<T> {
    /// Default simulation horizon.
    pub const DEFAULT_STEPS: usize = 600;

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            kp: None,
            ki: None,
            kd: None,
            setpoint: None,
            steps: None,
            duplicate_param: None,
        }
    }

    /// Set the proportional gain.
    pub fn kp(mut self, kp: T) -> Self {
        if self.kp.is_some() {
            self.duplicate_param = Some("kp");
        }
        self.kp = Some(kp);
        self
    }

    /// Set the integral gain.
    pub fn ki(mut self, ki: T) -> Self {
        if self.ki.is_some() {
            self.duplicate_param = Some("ki");
        }
        self.ki = Some(ki);
        self
    }

    /// Set the derivative gain.
    pub fn kd(mut self, kd: T) -> Self {
        if self.kd.is_some() {
            self.duplicate_param = Some("kd");
        }
        self.kd = Some(kd);
        self
    }

    /// Set the target value.
    pub fn setpoint(mut self, setpoint: T) -> Self {
        if self.setpoint.is_some() {
            self.duplicate_param = Some("setpoint");
        }
        self.setpoint = Some(setpoint);
        self
    }

    /// Set the number of simulated steps (at most [`MAX_STEPS`]).
    pub fn steps(mut self, steps: usize) -> Self {
        if self.steps.is_some() {
            self.duplicate_param = Some("steps");
        }
        self.steps = Some(steps);
        self
    }

    /// Validate the configuration.
    pub fn build(self) -> Result<PidSimulation<T>, FormularyError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let gains = PidGains {
            kp: self.kp.unwrap_or_else(T::zero),
            ki: self.ki.unwrap_or_else(T::zero),
            kd: self.kd.unwrap_or_else(T::zero),
        };
        let setpoint = self.setpoint.unwrap_or_else(T::one);
        Validator::validate_scalars(&[
            (gains.kp, "kp"),
            (gains.ki, "ki"),
            (gains.kd, "kd"),
            (setpoint, "setpoint"),
        ])?;

        let steps = self.steps.unwrap_or(Self::DEFAULT_STEPS);
        Validator::validate_steps(steps, MAX_STEPS)?;

        Ok(PidSimulation {
            gains,
            setpoint,
            steps,
        })
    }
}

/// A validated PID simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidSimulation<T> {
    gains: PidGains<T>,
    setpoint: T,
    steps: usize,
}

impl<T: Float> PidSimulation<T> {
    /// Controller gains.
    pub fn gains(&self) -> PidGains<T> {
        self.gains
    }

    /// Target value.
    pub fn setpoint(&self) -> T {
        self.setpoint
    }

    /// Number of steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Run the simulation.
    pub fn run(&self) -> PidTrace<T> {
        PidTrace {
            gains: self.gains,
            setpoint: self.setpoint,
            samples: simulate(&self.gains, self.setpoint, self.steps),
        }
    }
}
