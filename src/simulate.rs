//! Synthetic impulse/streak noise injection.
//!
//! Models high-energy particle strikes on a CCD sensor: bright single-pixel
//! impulses and short streaks of 2–4 pixels. Streaks advance through
//! flattened buffer index order rather than a 2-D line direction, so a streak
//! started near the right edge wraps onto the next row; runs clip at the end
//! of the buffer. The wrap is intentional.
use crate::image::RawImage;
use log::{debug, warn};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

/// Probability that an injection event is a single-pixel impulse; the rest
/// become streaks.
const IMPULSE_PROBABILITY: f32 = 0.3;
const STREAK_MIN: usize = 2;
const STREAK_MAX: usize = 4;

/// Injected sample ceiling (exclusive).
const VALUE_CEIL: f32 = 255.0;
/// Scale applied to `intensity` to obtain the injected sample floor.
const VALUE_FLOOR_SCALE: f32 = 200.0;

/// Parameters for the noise injector.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SimulateParams {
    /// Scales the brightness floor of injected artifacts; domain [0, 1].
    pub intensity: f32,
    /// Fraction of pixels seeded with an injection event; domain [0, 1],
    /// recommended range (0.001, 0.05).
    pub density: f32,
    /// Seed for reproducible runs. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulateParams {
    fn default() -> Self {
        Self {
            intensity: 0.8,
            density: 0.005,
            seed: None,
        }
    }
}

impl SimulateParams {
    /// Clamp parameters into their documented domains, warning on each
    /// adjustment. Out-of-range values are never fatal.
    pub fn sanitized(&self) -> Self {
        let mut p = self.clone();
        if !(0.0..=1.0).contains(&p.intensity) {
            let clamped = p.intensity.clamp(0.0, 1.0);
            warn!(
                "intensity {} outside [0, 1], clamping to {}",
                p.intensity, clamped
            );
            p.intensity = clamped;
        }
        if !(0.0..=1.0).contains(&p.density) {
            let clamped = p.density.clamp(0.0, 1.0);
            warn!(
                "density {} outside [0, 1], clamping to {}",
                p.density, clamped
            );
            p.density = clamped;
        }
        p
    }

    /// Number of injection events scheduled for a `w × h` image:
    /// `floor(w*h*density)`. Streaks may touch fewer distinct pixels than
    /// events × length due to overlap and end-of-buffer clipping.
    pub fn event_count(&self, w: usize, h: usize) -> usize {
        ((w * h) as f64 * self.density as f64).floor() as usize
    }
}

/// Return a copy of `image` with synthetic artifacts injected; the input is
/// never mutated. Each injected pixel's RGB channels are set to a uniformly
/// random value in `[200·intensity, 255)`; alpha is untouched.
pub fn inject_noise(image: &RawImage, params: &SimulateParams) -> RawImage {
    let params = params.sanitized();
    let mut out = image.clone();
    let num_pixels = image.num_pixels();
    if num_pixels == 0 {
        return out;
    }

    let mut rng: ChaCha8Rng = match params.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let events = params.event_count(image.w, image.h);
    let floor = VALUE_FLOOR_SCALE * params.intensity;
    for _ in 0..events {
        let start = rng.random_range(0..num_pixels);
        let len = if rng.random::<f32>() < IMPULSE_PROBABILITY {
            1
        } else {
            rng.random_range(STREAK_MIN..=STREAK_MAX)
        };
        for pixel in start..(start + len).min(num_pixels) {
            let value = rng.random_range(floor..VALUE_CEIL) as u8;
            write_artifact(&mut out, pixel, value);
        }
    }
    debug!(
        "inject_noise {}x{} density={} intensity={} events={}",
        image.w, image.h, params.density, params.intensity, events
    );
    out
}

/// Paint an artifact sample into the RGB channels of flattened pixel
/// `pixel`, leaving any alpha channel untouched.
fn write_artifact(image: &mut RawImage, pixel: usize, value: u8) {
    let base = image.pixel_base(pixel);
    for c in 0..image.channels.min(3) {
        image.data[base + c] = value;
    }
}
