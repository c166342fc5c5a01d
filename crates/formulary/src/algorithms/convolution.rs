//! Image convolution with fixed kernels.
//!
//! ## Purpose
//!
//! This module applies one of five fixed kernels to an RGBA image. Each output
//! colour channel is the weighted sum of the kernel-sized neighbourhood of the
//! same channel, divided by the kernel divisor.
//!
//! ## Design notes
//!
//! * **Borders**: Taps that fall outside the image contribute nothing. They are
//!   neither clamped to the edge nor wrapped.
//! * **Narrowing**: The quotient is converted to a byte by [`ChannelRounding`]
//!   using exact integer arithmetic, then saturated to `[0, 255]`.
//! * **Alpha**: Output alpha is always 255.
//! * **Session**: [`ConvolutionSession`] owns the loaded source image so that
//!   repeated filter applications read the same pixels.
//! * **Parallel**: With the `parallel` feature rows are processed with rayon;
//!   results are identical to the sequential path.
//!
//! ## Invariants
//!
//! * Output dimensions equal input dimensions.
//! * The source buffer is never modified.

// Feature-gated imports
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use tracing::{debug, warn};

// Internal dependencies
use crate::primitives::buffer::{CHANNELS, PixelBuffer};
use crate::primitives::errors::FormularyError;

// ============================================================================
// Kernels
// ============================================================================

const IDENTITY: [i32; 1] = [1];

const EDGE_DETECT: [i32; 9] = [-1, -1, -1, -1, 8, -1, -1, -1, -1];

const SHARPEN: [i32; 9] = [0, -1, 0, -1, 5, -1, 0, -1, 0];

const BOX_BLUR: [i32; 9] = [1, 1, 1, 1, 1, 1, 1, 1, 1];

const EMBOSS: [i32; 9] = [-2, -1, 0, -1, 1, 1, 0, 1, 2];

/// Fixed convolution kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kernel {
    /// 1x1 pass-through.
    #[default]
    Identity,

    /// Laplacian-style edge detector.
    EdgeDetect,

    /// Centre-weighted sharpen.
    Sharpen,

    /// 3x3 box blur (divisor 9).
    BoxBlur,

    /// Diagonal emboss.
    Emboss,
}

impl Kernel {
    /// All supported kernels.
    pub const ALL: [Kernel; 5] = [
        Self::Identity,
        Self::EdgeDetect,
        Self::Sharpen,
        Self::BoxBlur,
        Self::Emboss,
    ];

    /// Get the name of the kernel.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::EdgeDetect => "Edge detect",
            Self::Sharpen => "Sharpen",
            Self::BoxBlur => "Box blur",
            Self::Emboss => "Emboss",
        }
    }

    /// Row-major weights; length is `size() * size()`.
    #[inline]
    pub const fn weights(&self) -> &'static [i32] {
        match self {
            Self::Identity => &IDENTITY,
            Self::EdgeDetect => &EDGE_DETECT,
            Self::Sharpen => &SHARPEN,
            Self::BoxBlur => &BOX_BLUR,
            Self::Emboss => &EMBOSS,
        }
    }

    /// Side length of the (square, odd) kernel.
    #[inline]
    pub const fn size(&self) -> usize {
        match self {
            Self::Identity => 1,
            _ => 3,
        }
    }

    /// Normalisation divisor.
    #[inline]
    pub const fn divisor(&self) -> i32 {
        match self {
            Self::BoxBlur => 9,
            _ => 1,
        }
    }
}

// ============================================================================
// Channel narrowing
// ============================================================================

/// Rule for narrowing `weighted_sum / divisor` into a byte.
///
/// Both rules saturate to `[0, 255]` after rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelRounding {
    /// Round to nearest, ties away from zero.
    #[default]
    Nearest,

    /// Truncate toward zero.
    Truncate,
}

impl ChannelRounding {
    /// Divide and narrow to a channel value. `divisor` must be positive.
    #[inline]
    pub fn narrow(self, sum: i32, divisor: i32) -> u8 {
        let quotient = match self {
            Self::Truncate => sum / divisor,
            Self::Nearest => {
                let magnitude = (2 * sum.abs() + divisor) / (2 * divisor);
                if sum < 0 { -magnitude } else { magnitude }
            }
        };
        quotient.clamp(0, 255) as u8
    }
}

// ============================================================================
// Convolution
// ============================================================================

/// Convolve one output row.
fn convolve_row(
    src: &[u8],
    width: usize,
    height: usize,
    y: usize,
    kernel: Kernel,
    rounding: ChannelRounding,
    out: &mut [u8],
) {
    let size = kernel.size();
    let half = (size / 2) as isize;
    let weights = kernel.weights();
    let divisor = kernel.divisor();

    for x in 0..width {
        let mut sums = [0i32; 3];

        for ky in 0..size {
            let sy = y as isize + ky as isize - half;
            if sy < 0 || sy >= height as isize {
                continue;
            }
            for kx in 0..size {
                let sx = x as isize + kx as isize - half;
                if sx < 0 || sx >= width as isize {
                    continue;
                }
                let w = weights[ky * size + kx];
                if w == 0 {
                    continue;
                }
                let i = (sy as usize * width + sx as usize) * CHANNELS;
                for (c, sum) in sums.iter_mut().enumerate() {
                    *sum += w * i32::from(src[i + c]);
                }
            }
        }

        let o = x * CHANNELS;
        for (c, &sum) in sums.iter().enumerate() {
            out[o + c] = rounding.narrow(sum, divisor);
        }
        out[o + 3] = 255;
    }
}

/// Apply `kernel` to `src`, producing a new image of the same size.
pub fn convolve(src: &PixelBuffer, kernel: Kernel, rounding: ChannelRounding) -> PixelBuffer {
    let (width, height) = (src.width(), src.height());
    debug!(width, height, kernel = kernel.name(), "applying convolution");

    // Every byte is overwritten below.
    let mut dst = src.clone();
    if width == 0 || height == 0 {
        return dst;
    }

    let pixels = src.as_bytes();
    let (_, _, out) = dst.parts_mut();
    let stride = width * CHANNELS;

    #[cfg(feature = "parallel")]
    out.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| convolve_row(pixels, width, height, y, kernel, rounding, row));

    #[cfg(not(feature = "parallel"))]
    for (y, row) in out.chunks_mut(stride).enumerate() {
        convolve_row(pixels, width, height, y, kernel, rounding, row);
    }

    dst
}

// ============================================================================
// Session
// ============================================================================

/// Owns the most recently loaded source image of the filter widget.
///
/// Loading replaces the previous image wholesale; every `apply` reads the
/// loaded image and leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct ConvolutionSession {
    source: Option<PixelBuffer>,
    rounding: ChannelRounding,
}

impl ConvolutionSession {
    /// Create an empty session with round-to-nearest narrowing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with the given narrowing rule.
    pub fn with_rounding(rounding: ChannelRounding) -> Self {
        Self {
            source: None,
            rounding,
        }
    }

    /// Replace the source image, returning the previous one.
    pub fn load(&mut self, image: PixelBuffer) -> Option<PixelBuffer> {
        debug!(
            width = image.width(),
            height = image.height(),
            "source image loaded"
        );
        self.source.replace(image)
    }

    /// Drop the source image.
    pub fn clear(&mut self) -> Option<PixelBuffer> {
        self.source.take()
    }

    /// The loaded source image, if any.
    pub fn source(&self) -> Option<&PixelBuffer> {
        self.source.as_ref()
    }

    /// Narrowing rule used by `apply`.
    pub fn rounding(&self) -> ChannelRounding {
        self.rounding
    }

    /// Filter the loaded image.
    pub fn apply(&self, kernel: Kernel) -> Result<PixelBuffer, FormularyError> {
        match &self.source {
            Some(src) => Ok(convolve(src, kernel, self.rounding)),
            None => {
                warn!(kernel = kernel.name(), "filter requested with no image loaded");
                Err(FormularyError::NoSourceImage)
            }
        }
    }
}
