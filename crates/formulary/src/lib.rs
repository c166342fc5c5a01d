//! # formulary: Closed-form engineering and statistics widgets
//!
//! A collection of small, independent calculators: each takes a few numeric
//! inputs, applies a closed-form formula or a short fixed-iteration
//! simulation, and returns a typed result that renders as the text a widget
//! page would show.
//!
//! | Widget | Entry point |
//! |---|---|
//! | Temperature conversion | [`convert_temperature`](prelude::convert_temperature) |
//! | Moment of inertia | [`compute_inertia`](prelude::compute_inertia) |
//! | Normal distribution | [`normal_pdf_cdf`](prelude::normal_pdf_cdf) |
//! | Mohr's circle | [`mohrs_circle`](prelude::mohrs_circle) |
//! | Logic gates | [`evaluate_gate`](prelude::evaluate_gate), [`truth_table`](prelude::truth_table) |
//! | Base-N conversion | [`convert_base`](prelude::convert_base) |
//! | Image convolution | [`apply_convolution`](prelude::apply_convolution), [`ConvolutionSession`](prelude::ConvolutionSession) |
//! | Classification metrics | [`classification_metrics`](prelude::classification_metrics) |
//! | PID simulation | [`simulate_pid`](prelude::simulate_pid), [`Pid`](prelude::Pid) |
//! | Forward kinematics | [`forward_kinematics`](prelude::forward_kinematics) |
//!
//! ## Quick Start
//!
//! ```rust
//! use formulary::prelude::*;
//!
//! let report = temperature_report(100.0, Celsius, Fahrenheit)?;
//! assert_eq!(report.to_string(), "100 °C = 212.00 °F");
//!
//! let inertia: f64 = compute_inertia(SolidSphere, 5.0, &Dimensions::radius(2.0))?;
//! assert!((inertia - 8.0).abs() < 1e-12);
//!
//! assert_eq!(convert_base("FF", 16, 2)?, "11111111");
//! # Result::<(), FormularyError>::Ok(())
//! ```
//!
//! ### PID simulation
//!
//! ```rust
//! use formulary::prelude::*;
//!
//! let trace = Pid::new()
//!     .kp(2.0)
//!     .ki(0.5)
//!     .kd(1.0)
//!     .setpoint(1.0)
//!     .steps(400)
//!     .build()?
//!     .run();
//!
//! assert_eq!(trace.len(), 400);
//! println!("{}", trace);
//! # Result::<(), FormularyError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every widget returns `Result<_, FormularyError>`. Errors name the field that
//! failed, so they can be shown to the user directly:
//!
//! ```rust
//! use formulary::prelude::*;
//!
//! match normal_pdf_cdf(0.0, -1.0, 0.5) {
//!     Ok(eval) => println!("{}", eval),
//!     Err(e) => assert_eq!(e.to_string(), "Invalid standard deviation: -1 (must be > 0)"),
//! }
//! ```
//!
//! ## Features
//!
//! * `std` (default): standard library support. Without it the crate is
//!   `no_std` + `alloc`.
//! * `parallel`: row-parallel convolution with rayon.
//! * `image`: conversions between [`PixelBuffer`](prelude::PixelBuffer) and `image::RgbaImage`.
//! * `dev`: exposes `formulary::internals` for white-box tests.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error type and pixel buffer.
mod primitives;

// Layer 2: Math - pure closed-form formulas.
mod math;

// Layer 3: Algorithms - convolution, PID, logic, radix.
mod algorithms;

// Layer 4: Evaluation - classification metrics.
mod evaluation;

// Layer 5: Engine - parsing, validation and reports.
mod engine;

// High-level widget API.
mod api;

// Standard formulary prelude.
pub mod prelude {
    pub use crate::api::{
        ArmPose, BaseConversion, ChannelRounding, ClassificationMetrics, ConfusionMatrix,
        ConvolutionSession, DAMPING, DT, Dimension, Dimensions, FormularyError, Gate,
        InertiaReport, Kernel, MAX_STEPS, NormalEvaluation, PidBuilder as Pid, PidGains, PidSample,
        PidSimulation, PidTrace, PixelBuffer, PrincipalStresses, Radix, Shape,
        TemperatureConversion, TemperatureUnit, TruthRow, TruthTable, apply_convolution,
        base_conversion_report, classification_metrics, compute_inertia, convert_base,
        convert_temperature, evaluate_gate, forward_kinematics, forward_kinematics_degrees,
        inertia_report, mohrs_circle, normal_pdf_cdf, parse_conversion, parse_count,
        parse_dimensions, parse_field, parse_optional_field, parse_steps, simulate_pid,
        temperature_report, truth_table,
    };
    pub use crate::api::{
        Kernel::{BoxBlur, EdgeDetect, Emboss, Identity, Sharpen},
        Shape::{HollowSphere, RectPlate, RodCenter, SolidCylinder, SolidSphere},
        TemperatureUnit::{Celsius, Fahrenheit, Kelvin},
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
