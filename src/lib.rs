#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod error;
pub mod image;
pub mod mask;
pub mod pipeline;

// Stage-level modules – public so callers can drive individual transforms.
pub mod detect;
pub mod enhance;
pub mod inpaint;
pub mod preprocess;
pub mod simulate;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + results.
pub use crate::error::{Error, Result};
pub use crate::image::{LumaBuffer, RawImage};
pub use crate::mask::NoiseMask;
pub use crate::pipeline::{
    DespikeParams, Despiker, PipelineStage, PipelineStats, ProcessingResult, ProgressSink,
};
pub use crate::simulate::{inject_noise, SimulateParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use despike::prelude::*;
///
/// let image = RawImage::new(64, 64, 4);
/// let despiker = Despiker::new(DespikeParams::default());
/// let result = despiker.process(&image).expect("pipeline");
/// println!(
///     "flagged={} elapsed_ms={:.3}",
///     result.stats.noise_pixels, result.stats.elapsed_ms
/// );
/// ```
pub mod prelude {
    pub use crate::image::RawImage;
    pub use crate::{inject_noise, DespikeParams, Despiker, SimulateParams};
}
