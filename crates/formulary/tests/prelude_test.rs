//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything a widget page needs,
//! so that `use formulary::prelude::*` is the only import required.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - Enum variants and types are usable unqualified
//! 2. **Workflows** - Complete widget flows from text input to report

use formulary::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test enum variants are exported.
#[test]
fn test_prelude_variants() {
    let _ = [Celsius, Fahrenheit, Kelvin];
    let _ = [SolidSphere, HollowSphere, SolidCylinder, RodCenter, RectPlate];
    let _ = [Identity, EdgeDetect, Sharpen, BoxBlur, Emboss];
    assert_eq!(TemperatureUnit::ALL.len(), 3);
    assert_eq!(Shape::ALL.len(), 5);
    assert_eq!(Gate::ALL.len(), 7);
    assert_eq!(Radix::ALL.len(), 4);
}

/// Test the PID builder alias and constants are exported.
#[test]
fn test_prelude_pid() {
    let sim: PidSimulation<f64> = Pid::new().kp(1.0).steps(3).build().unwrap();
    let trace: PidTrace<f64> = sim.run();
    let first: PidSample<f64> = trace.samples[0];
    assert_eq!(first.step, 0);
    assert_eq!(DT, 0.1);
    assert_eq!(DAMPING, 0.5);
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test the temperature page flow: code and field text to report.
#[test]
fn test_temperature_flow() {
    let (from, to) = parse_conversion("FtoC").unwrap();
    let value = parse_field::<f64>("212", "temperature").unwrap();
    let report: TemperatureConversion<f64> = temperature_report(value, from, to).unwrap();
    assert_eq!(report.to_string(), "212 °F = 100.00 °C");
}

/// Test the classification page flow: four count fields to report.
#[test]
fn test_metrics_flow() {
    let counts: Vec<u64> = ["6", "2", "10", "2"]
        .iter()
        .zip(["TP", "FP", "TN", "FN"])
        .map(|(text, field)| parse_count(text, field).unwrap())
        .collect();
    let m: ClassificationMetrics<f64> =
        classification_metrics(counts[0], counts[1], counts[2], counts[3]).unwrap();
    assert!(m.to_string().starts_with("Accuracy:  0.8000"));
}

/// Test the filter page flow: load once, switch kernels.
#[test]
fn test_filter_flow() {
    let mut session = ConvolutionSession::new();
    session.load(PixelBuffer::filled(4, 4, [10, 20, 30, 255]).unwrap());
    for tag in ["original", "blur", "sharpen", "edge", "emboss"] {
        let kernel: Kernel = tag.parse().unwrap();
        let out = session.apply(kernel).unwrap();
        assert_eq!((out.width(), out.height()), (4, 4));
    }
}

/// Test the Mohr and kinematics reports render through the prelude.
#[test]
fn test_reports_flow() {
    let stresses: PrincipalStresses<f64> = mohrs_circle(100.0, 20.0, 0.0).unwrap();
    assert!(stresses.to_string().contains("τmax = 40.00"));

    let pose: ArmPose<f64> = forward_kinematics_degrees(1.0, 1.0, 90.0, 0.0).unwrap();
    assert_eq!(pose.to_string(), "Elbow: (0.00, 1.00)\nEnd effector: (0.00, 2.00)");

    let base: BaseConversion = base_conversion_report("255", Radix::Decimal, Radix::Hexadecimal).unwrap();
    assert_eq!(base.to_string(), "255 (base 10) = FF (base 16)");
}
