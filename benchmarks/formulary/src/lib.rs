//! Reproducible fixtures for the formulary benchmarks.

use formulary::prelude::PixelBuffer;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};

/// Image of independent uniformly random channels.
pub fn noise_image(width: usize, height: usize, seed: u64) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; width * height * 4];
    rng.fill(&mut data[..]);
    PixelBuffer::new(width, height, data).unwrap()
}

/// Smooth colour field with Gaussian sensor noise, closer to a photograph.
pub fn photo_image(width: usize, height: usize, seed: u64) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 8.0).unwrap();

    let mut img = PixelBuffer::filled(width, height, [0, 0, 0, 255]).unwrap();
    for y in 0..height {
        for x in 0..width {
            let base = 128.0 + 100.0 * (x as f64 / 20.0).sin() * (y as f64 / 30.0).cos();
            let mut px = [0u8, 0, 0, 255];
            for (c, channel) in px.iter_mut().take(3).enumerate() {
                let v = base + c as f64 * 10.0 + noise.sample(&mut rng);
                *channel = v.clamp(0.0, 255.0) as u8;
            }
            img.set_pixel(x, y, px);
        }
    }
    img
}

/// Random `(kp, ki, kd)` triples in the range a user would drag the sliders.
pub fn gain_sweep(count: usize, seed: u64) -> Vec<(f64, f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let kp = Uniform::new(0.0, 10.0).unwrap();
    let ki = Uniform::new(0.0, 2.0).unwrap();
    let kd = Uniform::new(0.0, 5.0).unwrap();
    (0..count)
        .map(|_| (kp.sample(&mut rng), ki.sample(&mut rng), kd.sample(&mut rng)))
        .collect()
}
