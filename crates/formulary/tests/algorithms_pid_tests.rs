//! Tests for the PID simulation.
//!
//! ## Test Organization
//!
//! 1. **Dynamics** - Hand-computed steps, rest state, convergence
//! 2. **Divergence** - Unstable gains
//! 3. **Builder** - Defaults, duplicates, validation
//! 4. **Reports** - Trace summary

use approx::assert_relative_eq;

use formulary::prelude::*;

// ============================================================================
// Dynamics Tests
// ============================================================================

/// Test zero gains leave the mass at rest.
#[test]
fn test_zero_gains_stay_at_rest() {
    let trace = simulate_pid(0.0, 0.0, 0.0, 1.0, 50).unwrap();
    assert_eq!(trace.len(), 50);
    assert!(trace.outputs().all(|v| v == 0.0));
}

/// Test the first step by hand.
///
/// Verifies kp=1: control 1, velocity 0.1, output 0.01; adding kd=1 adds the
/// derivative kick 1/dt = 10, giving output 0.11.
#[test]
fn test_first_step() {
    let p = simulate_pid(1.0, 0.0, 0.0, 1.0, 1).unwrap();
    assert_relative_eq!(p.samples[0].output, 0.01, epsilon = 1e-12);

    let pd = simulate_pid(1.0, 0.0, 1.0, 1.0, 1).unwrap();
    assert_relative_eq!(pd.samples[0].output, 0.11, epsilon = 1e-12);

    let pi = simulate_pid(1.0, 1.0, 0.0, 1.0, 1).unwrap();
    assert_relative_eq!(pi.samples[0].output, 0.011, epsilon = 1e-12);
}

/// Test the second proportional step.
///
/// Verifies error 0.99, acceleration 0.99 − 0.5·0.1, velocity 0.194, output 0.0294.
#[test]
fn test_second_step() {
    let trace = simulate_pid(1.0, 0.0, 0.0, 1.0, 2).unwrap();
    assert_relative_eq!(trace.samples[1].output, 0.0294, epsilon = 1e-12);
}

/// Test samples are indexed from zero in order.
#[test]
fn test_sample_indices() {
    let trace = simulate_pid(2.0, 0.5, 1.0, 1.0, 25).unwrap();
    for (i, s) in trace.samples.iter().enumerate() {
        assert_eq!(s.step, i);
    }
}

/// Test the simulation is deterministic.
#[test]
fn test_deterministic() {
    let a = simulate_pid(2.0, 0.5, 1.0, 3.0, 300).unwrap();
    let b = simulate_pid(2.0, 0.5, 1.0, 3.0, 300).unwrap();
    assert_eq!(a, b);
}

/// Test stable gains with integral action settle on the setpoint.
#[test]
fn test_converges_to_setpoint() {
    let trace = simulate_pid(2.0, 0.5, 1.0, 1.0, 600).unwrap();
    assert!(!trace.diverged());
    assert_relative_eq!(trace.final_output().unwrap(), 1.0, epsilon = 1e-2);
}

/// Test the setpoint scales the response linearly.
#[test]
fn test_linear_in_setpoint() {
    let one = simulate_pid(1.5, 0.2, 0.4, 1.0, 100).unwrap();
    let four = simulate_pid(1.5, 0.2, 0.4, 4.0, 100).unwrap();
    for (a, b) in one.outputs().zip(four.outputs()) {
        assert_relative_eq!(b, 4.0 * a, epsilon = 1e-9, max_relative = 1e-9);
    }
}

/// Test single precision runs the same loop.
#[test]
fn test_f32() {
    let trace = simulate_pid(1.0_f32, 0.0, 0.0, 1.0, 1).unwrap();
    assert_relative_eq!(trace.samples[0].output, 0.01_f32, epsilon = 1e-6);
}

// ============================================================================
// Divergence Tests
// ============================================================================

/// Test unstable gains run to completion and are reported as diverged.
#[test]
fn test_unstable_gains_diverge() {
    let trace = simulate_pid(1.0e6_f64, 0.0, 0.0, 1.0, 600).unwrap();
    assert_eq!(trace.len(), 600);
    assert!(trace.diverged());
    assert!(trace.min_output().unwrap().is_finite());
    assert!(trace.max_output().unwrap().is_finite());
    assert!(trace.to_string().ends_with("Diverged"));
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
///
/// Verifies zero gains, setpoint 1 and 600 steps.
#[test]
fn test_builder_defaults() {
    let sim = Pid::<f64>::new().build().unwrap();
    assert_eq!(
        sim.gains(),
        PidGains {
            kp: 0.0,
            ki: 0.0,
            kd: 0.0
        }
    );
    assert_eq!(sim.setpoint(), 1.0);
    assert_eq!(sim.steps(), 600);
    assert_eq!(sim.run().len(), 600);
}

/// Test the builder matches the function form.
#[test]
fn test_builder_matches_function() {
    let built = Pid::new()
        .kp(2.0)
        .ki(0.5)
        .kd(1.0)
        .setpoint(2.0)
        .steps(120)
        .build()
        .unwrap()
        .run();
    assert_eq!(built, simulate_pid(2.0, 0.5, 1.0, 2.0, 120).unwrap());
}

/// Test setting a parameter twice is rejected.
#[test]
fn test_duplicate_parameter() {
    let result = Pid::new().kp(1.0).ki(0.1).kp(2.0).build();
    assert_eq!(
        result,
        Err(FormularyError::DuplicateParameter { parameter: "kp" })
    );

    let result = Pid::<f64>::new().steps(10).steps(20).build();
    assert_eq!(
        result,
        Err(FormularyError::DuplicateParameter { parameter: "steps" })
    );
}

/// Test non-finite gains and setpoints are rejected.
#[test]
fn test_rejects_non_finite() {
    assert!(matches!(
        simulate_pid(f64::NAN, 0.0, 0.0, 1.0, 10),
        Err(FormularyError::InvalidNumericValue(_))
    ));
    let err = simulate_pid(1.0, 0.0, 0.0, f64::INFINITY, 10).unwrap_err();
    assert!(err.to_string().contains("setpoint"));
}

/// Test the simulation horizon is capped.
///
/// Verifies an oversized horizon is an error rather than an allocation failure.
#[test]
fn test_rejects_oversized_horizon() {
    let result = Pid::<f64>::new().steps(usize::MAX).build();
    assert_eq!(
        result,
        Err(FormularyError::TooManySteps {
            steps: usize::MAX,
            max: MAX_STEPS
        })
    );

    let err = simulate_pid(1.0f64, 0.0, 0.0, 1.0, MAX_STEPS + 1).unwrap_err();
    assert_eq!(err.to_string(), "Invalid steps: 1000001 (must be at most 1000000)");

    assert_eq!(Pid::<f64>::new().steps(MAX_STEPS).build().unwrap().steps(), MAX_STEPS);
}

// ============================================================================
// Report Tests
// ============================================================================

/// Test the trace summary.
#[test]
fn test_trace_display() {
    let trace = simulate_pid(1.0, 0.0, 0.0, 1.0, 1).unwrap();
    assert_eq!(
        trace.to_string(),
        "Gains: kp=1 ki=0 kd=0\nSetpoint: 1\nSteps: 1\nFinal output: 0.0100\nRange: [0.0100, 0.0100]"
    );
}

/// Test an empty trace.
#[test]
fn test_empty_trace() {
    let trace = simulate_pid(1.0, 0.0, 0.0, 1.0, 0).unwrap();
    assert!(trace.is_empty());
    assert_eq!(trace.final_output(), None);
    assert_eq!(trace.min_output(), None);
    assert_eq!(
        trace.to_string(),
        "Gains: kp=1 ki=0 kd=0\nSetpoint: 1\nSteps: 0"
    );
}
