//! Discrete PID control of a damped unit mass.
//!
//! ## Purpose
//!
//! Simulates a PID controller driving a unit mass with viscous damping towards
//! a setpoint, using explicit Euler integration with a fixed time step.
//!
//! ## Key concepts
//!
//! Per step, starting from rest at zero:
//!
//! ```text
//! error        = setpoint − output
//! integral    += error · dt
//! derivative   = (error − prev_error) / dt
//! control      = kp·error + ki·integral + kd·derivative
//! acceleration = control − damping · velocity
//! velocity    += acceleration · dt
//! output      += velocity · dt
//! prev_error   = error
//! ```
//!
//! ## Invariants
//!
//! * The trace has exactly `steps` samples, indexed from 0.
//! * The simulation is deterministic in its inputs.
//!
//! ## Non-goals
//!
//! * Gains are not bounded. Unstable gains diverge to infinity or NaN and the
//!   values are reported as computed; only a warning is logged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::math::constant;

/// Integration time step in seconds.
pub const DT: f64 = 0.1;

/// Viscous damping coefficient.
pub const DAMPING: f64 = 0.5;

/// Longest accepted simulation horizon.
pub const MAX_STEPS: usize = 1_000_000;

/// Controller gains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidGains<T> {
    /// Proportional gain.
    pub kp: T,

    /// Integral gain.
    pub ki: T,

    /// Derivative gain.
    pub kd: T,
}

/// One simulation sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidSample<T> {
    /// Step index.
    pub step: usize,

    /// Process output after the step.
    pub output: T,
}

/// Controller and plant state carried between steps.
#[derive(Debug, Clone, Copy)]
struct LoopState<T> {
    output: T,
    velocity: T,
    integral: T,
    prev_error: T,
}

impl<T: Float> LoopState<T> {
    fn at_rest() -> Self {
        Self {
            output: T::zero(),
            velocity: T::zero(),
            integral: T::zero(),
            prev_error: T::zero(),
        }
    }

    #[inline]
    fn advance(&mut self, gains: &PidGains<T>, setpoint: T, dt: T, damping: T) {
        let error = setpoint - self.output;
        self.integral = self.integral + error * dt;
        let derivative = (error - self.prev_error) / dt;

        let control = gains.kp * error + gains.ki * self.integral + gains.kd * derivative;
        let acceleration = control - damping * self.velocity;

        self.velocity = self.velocity + acceleration * dt;
        self.output = self.output + self.velocity * dt;
        self.prev_error = error;
    }
}

/// Run the loop for `steps` iterations.
pub fn simulate<T: Float>(gains: &PidGains<T>, setpoint: T, steps: usize) -> Vec<PidSample<T>> {
    let dt = constant::<T>(DT);
    let damping = constant::<T>(DAMPING);

    let mut state = LoopState::at_rest();
    let mut samples = Vec::with_capacity(steps);
    let mut diverged = false;

    for step in 0..steps {
        state.advance(gains, setpoint, dt, damping);
        if !diverged && !state.output.is_finite() {
            diverged = true;
            warn!(step, "PID output became non-finite");
        }
        samples.push(PidSample {
            step,
            output: state.output,
        });
    }

    debug!(steps, diverged, "PID simulation finished");
    samples
}
