//! Tests for image convolution.
//!
//! ## Test Organization
//!
//! 1. **Kernels** - Weights, sizes, tags
//! 2. **Uniform Images** - Border handling per kernel
//! 3. **Narrowing** - Nearest vs truncate, saturation
//! 4. **Reference** - Agreement with a direct per-pixel implementation
//! 5. **Session** - Load, reload, apply without an image
//! 6. **Pixel Buffer** - Construction and access

use formulary::prelude::*;

/// Uniform 3x3 image with the given grey level and a non-opaque alpha.
fn uniform(level: u8) -> PixelBuffer {
    PixelBuffer::filled(3, 3, [level, level, level, 7]).unwrap()
}

/// Red channel of every pixel, row-major.
fn reds(img: &PixelBuffer) -> Vec<u8> {
    img.as_bytes().chunks(4).map(|p| p[0]).collect()
}

/// Deterministic pseudo-random RGBA image.
fn noise(width: usize, height: usize, seed: u32) -> PixelBuffer {
    let mut state = seed;
    let data = (0..width * height * 4)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect();
    PixelBuffer::new(width, height, data).unwrap()
}

/// Direct per-pixel convolution used as the reference.
fn reference(src: &PixelBuffer, kernel: Kernel, rounding: ChannelRounding) -> PixelBuffer {
    let (w, h) = (src.width() as isize, src.height() as isize);
    let size = kernel.size() as isize;
    let half = size / 2;
    let mut out = PixelBuffer::filled(src.width(), src.height(), [0, 0, 0, 255]).unwrap();

    for y in 0..h {
        for x in 0..w {
            let mut px = [0u8, 0, 0, 255];
            for (c, channel) in px.iter_mut().take(3).enumerate() {
                let mut sum = 0.0_f64;
                for ky in 0..size {
                    for kx in 0..size {
                        let (sx, sy) = (x + kx - half, y + ky - half);
                        if sx < 0 || sy < 0 || sx >= w || sy >= h {
                            continue;
                        }
                        let weight = kernel.weights()[(ky * size + kx) as usize];
                        let value = src.pixel(sx as usize, sy as usize).unwrap()[c];
                        sum += f64::from(weight) * f64::from(value);
                    }
                }
                let q = sum / f64::from(kernel.divisor());
                let q = match rounding {
                    ChannelRounding::Nearest => q.round(),
                    ChannelRounding::Truncate => q.trunc(),
                };
                *channel = q.clamp(0.0, 255.0) as u8;
            }
            out.set_pixel(x as usize, y as usize, px);
        }
    }
    out
}

// ============================================================================
// Kernel Tests
// ============================================================================

/// Test kernel shapes and divisors.
#[test]
fn test_kernel_definitions() {
    for kernel in Kernel::ALL {
        assert_eq!(kernel.weights().len(), kernel.size() * kernel.size());
        assert_eq!(kernel.size() % 2, 1);
    }
    assert_eq!(Identity.size(), 1);
    assert_eq!(BoxBlur.divisor(), 9);
    assert_eq!(EdgeDetect.weights().iter().sum::<i32>(), 0);
    assert_eq!(Sharpen.weights().iter().sum::<i32>(), 1);
    assert_eq!(Emboss.weights().iter().sum::<i32>(), 1);
    assert_eq!(Kernel::default(), Identity);
}

/// Test kernel tags from the page parse.
#[test]
fn test_kernel_tags() {
    assert_eq!("blur".parse::<Kernel>().unwrap(), BoxBlur);
    assert_eq!("edge".parse::<Kernel>().unwrap(), EdgeDetect);
    assert_eq!("Sharpen".parse::<Kernel>().unwrap(), Sharpen);
    assert_eq!("emboss".parse::<Kernel>().unwrap(), Emboss);
    assert_eq!("none".parse::<Kernel>().unwrap(), Identity);
    assert!(matches!(
        "gaussian".parse::<Kernel>(),
        Err(FormularyError::UnknownVariant { kind: "kernel", .. })
    ));
}

// ============================================================================
// Uniform Image Tests
// ============================================================================

/// Test the identity kernel copies colour and forces alpha opaque.
#[test]
fn test_identity() {
    let src = noise(5, 4, 1);
    let out = apply_convolution(&src, Identity);
    assert_eq!(out.width(), 5);
    assert_eq!(out.height(), 4);
    for (a, b) in src.as_bytes().chunks(4).zip(out.as_bytes().chunks(4)) {
        assert_eq!(&a[..3], &b[..3]);
        assert_eq!(b[3], 255);
    }
}

/// Test box blur on a uniform image.
///
/// Verifies the interior keeps its value while borders lose the missing taps:
/// corner 400/9 → 44, edge 600/9 → 67.
#[test]
fn test_box_blur_borders() {
    let out = apply_convolution(&uniform(100), BoxBlur);
    assert_eq!(reds(&out), vec![44, 67, 44, 67, 100, 67, 44, 67, 44]);
    assert_eq!(out.pixel(1, 1), Some([100, 100, 100, 255]));
}

/// Test edge detection on a uniform image.
///
/// Verifies the interior is 0 and borders respond to the missing neighbours.
#[test]
fn test_edge_detect_borders() {
    let out = apply_convolution(&uniform(20), EdgeDetect);
    assert_eq!(reds(&out), vec![100, 60, 100, 60, 0, 60, 100, 60, 100]);
}

/// Test sharpen on a uniform image.
#[test]
fn test_sharpen_borders() {
    let out = apply_convolution(&uniform(20), Sharpen);
    assert_eq!(reds(&out), vec![60, 40, 60, 40, 20, 40, 60, 40, 60]);
}

/// Test emboss on a uniform image.
///
/// Verifies the top-left corner sees only positive weights and the
/// bottom-right corner only negative ones.
#[test]
fn test_emboss_corners() {
    let out = apply_convolution(&uniform(20), Emboss);
    assert_eq!(out.pixel(1, 1), Some([20, 20, 20, 255]));
    assert_eq!(out.pixel(0, 0), Some([100, 100, 100, 255]));
    assert_eq!(out.pixel(2, 2), Some([0, 0, 0, 255]));
}

/// Test output values saturate at 255.
#[test]
fn test_saturation() {
    let out = apply_convolution(&uniform(200), EdgeDetect);
    assert_eq!(out.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(out.pixel(1, 1), Some([0, 0, 0, 255]));
}

/// Test the source buffer is not modified.
#[test]
fn test_source_untouched() {
    let src = noise(6, 6, 9);
    let copy = src.clone();
    let _ = apply_convolution(&src, Sharpen);
    assert_eq!(src, copy);
}

// ============================================================================
// Narrowing Tests
// ============================================================================

/// Test nearest and truncate narrowing differ only where the fraction is ≥ 0.5.
///
/// Verifies a box-blur edge pixel of 600/9 = 66.67 becomes 67 or 66.
#[test]
fn test_rounding_modes() {
    let nearest = ConvolutionSession::new();
    let mut truncate = ConvolutionSession::with_rounding(ChannelRounding::Truncate);
    assert_eq!(nearest.rounding(), ChannelRounding::Nearest);

    truncate.load(uniform(100));
    let t = truncate.apply(BoxBlur).unwrap();
    assert_eq!(reds(&t), vec![44, 66, 44, 66, 100, 66, 44, 66, 44]);
}

/// Test channel narrowing directly.
#[test]
fn test_narrow() {
    assert_eq!(ChannelRounding::Nearest.narrow(13, 2), 7);
    assert_eq!(ChannelRounding::Truncate.narrow(13, 2), 6);
    assert_eq!(ChannelRounding::Nearest.narrow(-13, 2), 0);
    assert_eq!(ChannelRounding::Nearest.narrow(2000, 1), 255);
    assert_eq!(ChannelRounding::Truncate.narrow(404, 9), 44);
    assert_eq!(ChannelRounding::Nearest.narrow(410, 9), 46);
}

// ============================================================================
// Reference Tests
// ============================================================================

/// Test every kernel and rounding mode against the direct implementation.
///
/// Runs on odd-sized noise so row splitting in the parallel build is covered.
#[test]
fn test_matches_reference() {
    let images = [noise(17, 11, 3), noise(1, 1, 5), noise(2, 9, 8), noise(31, 2, 13)];
    for src in &images {
        for kernel in Kernel::ALL {
            for rounding in [ChannelRounding::Nearest, ChannelRounding::Truncate] {
                let mut session = ConvolutionSession::with_rounding(rounding);
                session.load(src.clone());
                let got = session.apply(kernel).unwrap();
                assert_eq!(
                    got,
                    reference(src, kernel, rounding),
                    "{} {:?} on {}x{}",
                    kernel.name(),
                    rounding,
                    src.width(),
                    src.height()
                );
            }
        }
    }
}

/// Test an empty image stays empty.
#[test]
fn test_empty_image() {
    let src = PixelBuffer::new(0, 0, Vec::new()).unwrap();
    let out = apply_convolution(&src, BoxBlur);
    assert_eq!(out.as_bytes().len(), 0);
}

// ============================================================================
// Session Tests
// ============================================================================

/// Test applying a filter before loading an image fails.
#[test]
fn test_apply_without_image() {
    let session = ConvolutionSession::new();
    assert!(session.source().is_none());
    assert_eq!(session.apply(Sharpen), Err(FormularyError::NoSourceImage));
}

/// Test repeated applications read the loaded image, not the previous output.
#[test]
fn test_apply_is_repeatable() {
    let mut session = ConvolutionSession::new();
    session.load(noise(8, 5, 21));
    let first = session.apply(BoxBlur).unwrap();
    let _ = session.apply(EdgeDetect).unwrap();
    let again = session.apply(BoxBlur).unwrap();
    assert_eq!(first, again);
}

/// Test loading replaces the image and clearing drops it.
#[test]
fn test_reload_and_clear() {
    let mut session = ConvolutionSession::new();
    assert!(session.load(uniform(10)).is_none());

    let previous = session.load(uniform(50)).unwrap();
    assert_eq!(previous, uniform(10));
    assert_eq!(
        session.apply(Identity).unwrap().pixel(0, 0),
        Some([50, 50, 50, 255])
    );

    assert_eq!(session.clear(), Some(uniform(50)));
    assert_eq!(session.apply(Identity), Err(FormularyError::NoSourceImage));
}

// ============================================================================
// Pixel Buffer Tests
// ============================================================================

/// Test the buffer length must match the dimensions.
#[test]
fn test_buffer_dimensions() {
    assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());
    assert_eq!(
        PixelBuffer::new(2, 2, vec![0; 15]),
        Err(FormularyError::InvalidImageDimensions {
            width: 2,
            height: 2,
            len: 15
        })
    );
    assert!(PixelBuffer::new(usize::MAX, 2, Vec::new()).is_err());
}

/// Test a filled buffer rejects dimensions whose byte count overflows.
#[test]
fn test_filled_overflow() {
    assert!(PixelBuffer::filled(usize::MAX, 2, [0, 0, 0, 255]).is_err());
    assert!(PixelBuffer::filled(usize::MAX / 2, 1, [0, 0, 0, 255]).is_err());

    let empty = PixelBuffer::filled(0, 5, [1, 2, 3, 4]).unwrap();
    assert!(empty.as_bytes().is_empty());
}

/// Test pixel access and bounds.
#[test]
fn test_pixel_access() {
    let mut img = PixelBuffer::filled(2, 3, [1, 2, 3, 4]).unwrap();
    assert_eq!(img.pixel(1, 2), Some([1, 2, 3, 4]));
    assert_eq!(img.pixel(2, 0), None);
    assert_eq!(img.pixel(0, 3), None);

    img.set_pixel(1, 0, [9, 8, 7, 6]);
    img.set_pixel(5, 5, [0, 0, 0, 0]);
    assert_eq!(img.pixel(1, 0), Some([9, 8, 7, 6]));
    assert_eq!(&img.clone().into_bytes()[4..8], &[9, 8, 7, 6]);
}
