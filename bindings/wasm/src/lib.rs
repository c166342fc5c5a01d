//! WebAssembly bindings for the formulary widgets.
//!
//! Each widget page passes the raw text of its form fields and gets back the
//! rendered report, or a thrown error string naming the field that failed.

use js_sys::{Array, Float64Array, Object, Reflect, Uint8ClampedArray};
use wasm_bindgen::prelude::*;

use ::formulary::prelude::{
    ConvolutionSession, FormularyError, Gate, Kernel, Pid, PixelBuffer, Radix, Shape,
    base_conversion_report, classification_metrics, evaluate_gate, forward_kinematics_degrees,
    inertia_report, mohrs_circle, normal_pdf_cdf, parse_conversion, parse_count, parse_dimensions,
    parse_field, parse_steps, temperature_report, truth_table,
};

fn to_js(e: FormularyError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_gate(name: &str) -> Result<Gate, JsValue> {
    name.parse().map_err(to_js)
}

fn parse_kernel(name: &str) -> Result<Kernel, JsValue> {
    name.parse().map_err(to_js)
}

fn parse_radix(base: u32) -> Result<Radix, JsValue> {
    Radix::from_base(base).map_err(to_js)
}

// ============================================================================
// Closed-form widgets
// ============================================================================

/// Convert a temperature. `conversion` is a code such as `"CtoF"`.
#[wasm_bindgen(js_name = convertTemperature)]
pub fn convert_temperature(value: &str, conversion: &str) -> Result<String, JsValue> {
    let (from, to) = parse_conversion(conversion).map_err(to_js)?;
    let value = parse_field::<f64>(value, "temperature").map_err(to_js)?;
    let report = temperature_report(value, from, to).map_err(to_js)?;
    Ok(report.to_string())
}

/// Moment of inertia. Dimension fields the shape does not use are not read.
#[wasm_bindgen(js_name = momentOfInertia)]
pub fn moment_of_inertia(
    shape: &str,
    mass: &str,
    radius: &str,
    length: &str,
    width: &str,
    height: &str,
) -> Result<String, JsValue> {
    let shape: Shape = shape.parse().map_err(to_js)?;
    let mass = parse_field::<f64>(mass, "mass").map_err(to_js)?;
    let dims = parse_dimensions(shape, [radius, length, width, height]).map_err(to_js)?;
    let report = inertia_report(shape, mass, &dims).map_err(to_js)?;
    Ok(report.to_string())
}

/// Names of the dimension fields a shape reads, for showing and hiding inputs.
#[wasm_bindgen(js_name = requiredDimensions)]
pub fn required_dimensions(shape: &str) -> Result<Array, JsValue> {
    let shape: Shape = shape.parse().map_err(to_js)?;
    Ok(shape
        .required_dimensions()
        .iter()
        .map(|d| JsValue::from_str(d.name()))
        .collect())
}

#[wasm_bindgen(js_name = normalDistribution)]
pub fn normal_distribution(mean: &str, std: &str, x: &str) -> Result<String, JsValue> {
    let mean = parse_field::<f64>(mean, "mean").map_err(to_js)?;
    let std = parse_field::<f64>(std, "standard deviation").map_err(to_js)?;
    let x = parse_field::<f64>(x, "x").map_err(to_js)?;
    Ok(normal_pdf_cdf(mean, std, x).map_err(to_js)?.to_string())
}

#[wasm_bindgen(js_name = mohrsCircle)]
pub fn mohrs_circle_report(sigma_x: &str, sigma_y: &str, tau_xy: &str) -> Result<String, JsValue> {
    let sx = parse_field::<f64>(sigma_x, "sigma_x").map_err(to_js)?;
    let sy = parse_field::<f64>(sigma_y, "sigma_y").map_err(to_js)?;
    let txy = parse_field::<f64>(tau_xy, "tau_xy").map_err(to_js)?;
    Ok(mohrs_circle(sx, sy, txy).map_err(to_js)?.to_string())
}

/// Classification metrics from the four confusion-matrix counts.
#[wasm_bindgen(js_name = classificationMetrics)]
pub fn classification_metrics_report(
    tp: &str,
    fp: &str,
    tn: &str,
    fn_: &str,
) -> Result<String, JsValue> {
    let tp = parse_count(tp, "TP").map_err(to_js)?;
    let fp = parse_count(fp, "FP").map_err(to_js)?;
    let tn = parse_count(tn, "TN").map_err(to_js)?;
    let fn_ = parse_count(fn_, "FN").map_err(to_js)?;
    let metrics = classification_metrics::<f64>(tp, fp, tn, fn_).map_err(to_js)?;
    Ok(metrics.to_string())
}

/// Two-link arm pose; joint angles in degrees.
#[wasm_bindgen(js_name = forwardKinematics)]
pub fn forward_kinematics(
    l1: &str,
    l2: &str,
    theta1_deg: &str,
    theta2_deg: &str,
) -> Result<String, JsValue> {
    let l1 = parse_field::<f64>(l1, "l1").map_err(to_js)?;
    let l2 = parse_field::<f64>(l2, "l2").map_err(to_js)?;
    let t1 = parse_field::<f64>(theta1_deg, "theta1").map_err(to_js)?;
    let t2 = parse_field::<f64>(theta2_deg, "theta2").map_err(to_js)?;
    let pose = forward_kinematics_degrees(l1, l2, t1, t2).map_err(to_js)?;
    Ok(pose.to_string())
}

/// Joint coordinates `[elbow_x, elbow_y, tip_x, tip_y]` for drawing the arm.
#[wasm_bindgen(js_name = armPoints)]
pub fn arm_points(l1: f64, l2: f64, theta1_deg: f64, theta2_deg: f64) -> Result<Float64Array, JsValue> {
    let pose = forward_kinematics_degrees(l1, l2, theta1_deg, theta2_deg).map_err(to_js)?;
    let points = [
        pose.elbow.0,
        pose.elbow.1,
        pose.end_effector.0,
        pose.end_effector.1,
    ];
    Ok(Float64Array::from(&points[..]))
}

// ============================================================================
// Logic and radix
// ============================================================================

/// Evaluate a gate. `b` is ignored for `NOT`.
#[wasm_bindgen(js_name = evaluateGate)]
pub fn evaluate_gate_js(gate: &str, a: bool, b: bool) -> Result<bool, JsValue> {
    evaluate_gate(parse_gate(gate)?, a, Some(b)).map_err(to_js)
}

#[wasm_bindgen(js_name = truthTable)]
pub fn truth_table_js(gate: &str) -> Result<String, JsValue> {
    Ok(truth_table(parse_gate(gate)?).to_string())
}

/// Index of the truth-table row matching the current inputs.
#[wasm_bindgen(js_name = highlightedRow)]
pub fn highlighted_row(gate: &str, a: bool, b: bool) -> Result<Option<u32>, JsValue> {
    let table = truth_table(parse_gate(gate)?);
    Ok(table.highlighted(a, Some(b)).map(|i| i as u32))
}

#[wasm_bindgen(js_name = convertBase)]
pub fn convert_base(digits: &str, from_base: u32, to_base: u32) -> Result<String, JsValue> {
    let report = base_conversion_report(digits, parse_radix(from_base)?, parse_radix(to_base)?)
        .map_err(to_js)?;
    Ok(report.to_string())
}

// ============================================================================
// PID
// ============================================================================

/// Simulate the PID loop and return the output trajectory for charting.
///
/// `options` may carry `setpoint` and `steps`; missing keys use the defaults.
/// `steps` must be a whole number between 0 and `MAX_STEPS`.
#[wasm_bindgen(js_name = simulatePid)]
pub fn simulate_pid(kp: &str, ki: &str, kd: &str, options: &JsValue) -> Result<Float64Array, JsValue> {
    let mut builder = Pid::new()
        .kp(parse_field::<f64>(kp, "kp").map_err(to_js)?)
        .ki(parse_field::<f64>(ki, "ki").map_err(to_js)?)
        .kd(parse_field::<f64>(kd, "kd").map_err(to_js)?);

    if !options.is_undefined() && !options.is_null() {
        let options = Object::from(options.clone());

        if let Ok(sp) = Reflect::get(&options, &JsValue::from_str("setpoint"))
            && let Some(val) = sp.as_f64()
        {
            builder = builder.setpoint(val);
        }
        if let Ok(steps) = Reflect::get(&options, &JsValue::from_str("steps"))
            && let Some(val) = steps.as_f64()
        {
            builder = builder.steps(parse_steps(val).map_err(to_js)?);
        }
    }

    let trace = builder.build().map_err(to_js)?.run();
    let outputs: Vec<f64> = trace.outputs().collect();
    Ok(Float64Array::from(&outputs[..]))
}

// ============================================================================
// Convolution
// ============================================================================

/// Filter widget state: the most recently loaded image.
#[wasm_bindgen]
pub struct ConvolutionSessionWasm {
    inner: ConvolutionSession,
}

impl Default for ConvolutionSessionWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ConvolutionSessionWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ConvolutionSessionWasm {
        ConvolutionSessionWasm {
            inner: ConvolutionSession::new(),
        }
    }

    /// Load RGBA bytes as from `ImageData.data`, replacing any previous image.
    pub fn load(&mut self, width: u32, height: u32, data: &[u8]) -> Result<(), JsValue> {
        let image =
            PixelBuffer::new(width as usize, height as usize, data.to_vec()).map_err(to_js)?;
        self.inner.load(image);
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = hasImage)]
    pub fn has_image(&self) -> bool {
        self.inner.source().is_some()
    }

    /// Filter the loaded image; throws if nothing is loaded.
    pub fn apply(&self, kernel: &str) -> Result<Uint8ClampedArray, JsValue> {
        let out = self.inner.apply(parse_kernel(kernel)?).map_err(to_js)?;
        Ok(Uint8ClampedArray::from(out.as_bytes()))
    }
}
