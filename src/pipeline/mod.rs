//! Pipeline orchestration driving cosmic-ray removal end-to-end.
//!
//! The [`Despiker`] exposes a simple API: feed a decoded bitmap and get the
//! denoised rendering plus the detection mask and summary statistics.
//! Internally it sequences luminance normalization, 3×3 local-median spike
//! detection, neighbor-median inpainting, and the optional 2× upscale with
//! Laplacian sharpening, timing each stage.
//!
//! Typical usage:
//! ```
//! use despike::{Despiker, DespikeParams};
//! use despike::image::RawImage;
//!
//! let image = RawImage::new(32, 32, 4);
//! let despiker = Despiker::new(DespikeParams::default());
//! let result = despiker.process(&image).expect("pipeline");
//! println!("flagged={}", result.stats.noise_pixels);
//! ```
pub mod params;
pub mod progress;
pub mod report;

pub use params::DespikeParams;
pub use progress::{PipelineStage, ProgressSink};
pub use report::{PipelineStats, ProcessingResult, StageTiming, TimingBreakdown};

use crate::detect::detect_spikes;
use crate::enhance::enhance;
use crate::error::Result;
use crate::image::RawImage;
use crate::inpaint::inpaint;
use crate::preprocess::luminance;
use log::debug;
use std::time::Instant;

/// Cosmic-ray removal pipeline. Stateless across runs: each invocation owns
/// its buffers end-to-end and independent invocations never share mutable
/// state.
pub struct Despiker {
    params: DespikeParams,
}

impl Despiker {
    /// Create a pipeline with the supplied parameters, clamping any
    /// out-of-range values into their documented domains.
    pub fn new(params: DespikeParams) -> Self {
        Self {
            params: params.sanitized(),
        }
    }

    /// Parameters in effect after sanitization.
    pub fn params(&self) -> &DespikeParams {
        &self.params
    }

    /// Run the pipeline without progress reporting.
    pub fn process(&self, image: &RawImage) -> Result<ProcessingResult> {
        self.process_with_progress(image, &mut |_: PipelineStage| {})
    }

    /// Run the pipeline, reporting each upcoming stage to `progress` before
    /// it starts and [`PipelineStage::Complete`] after final assembly.
    ///
    /// On failure the run aborts and the error surfaces to the caller; no
    /// partial result is ever returned.
    pub fn process_with_progress(
        &self,
        image: &RawImage,
        progress: &mut dyn ProgressSink,
    ) -> Result<ProcessingResult> {
        let total_start = Instant::now();
        debug!(
            "Despiker::process start {}x{} threshold={} enhance={}",
            image.w, image.h, self.params.threshold, self.params.use_enhancement
        );
        let mut timings = TimingBreakdown::default();

        progress.stage(PipelineStage::Preprocessing);
        let stage_start = Instant::now();
        let buffer = luminance(image)?;
        timings.push("preprocess", stage_start.elapsed().as_secs_f64() * 1000.0);

        progress.stage(PipelineStage::Detection);
        let stage_start = Instant::now();
        let mask = detect_spikes(&buffer, self.params.threshold);
        let noise_pixels = mask.count_set();
        timings.push("detect", stage_start.elapsed().as_secs_f64() * 1000.0);

        progress.stage(PipelineStage::Denoising);
        let stage_start = Instant::now();
        let inpainted = inpaint(&buffer, &mask)?;
        timings.push("inpaint", stage_start.elapsed().as_secs_f64() * 1000.0);

        let enhanced = if self.params.use_enhancement {
            progress.stage(PipelineStage::Enhancement);
            let stage_start = Instant::now();
            let sharpened = enhance(&inpainted.buffer);
            let rendered = RawImage::from_luma(&sharpened);
            timings.push("enhance", stage_start.elapsed().as_secs_f64() * 1000.0);
            Some(rendered)
        } else {
            None
        };

        let mask_image = RawImage::from_mask(&mask);
        let denoised = RawImage::from_luma(&inpainted.buffer);

        let elapsed_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        timings.total_ms = elapsed_ms;
        let reduction_ratio = noise_pixels as f32 / (buffer.w * buffer.h) as f32;
        let result = ProcessingResult {
            original: image.clone(),
            mask_image,
            denoised,
            enhanced,
            stats: PipelineStats {
                noise_pixels,
                reduction_ratio,
                elapsed_ms,
            },
            timings,
        };

        progress.stage(PipelineStage::Complete);
        debug!(
            "Despiker::process done flagged={} ratio={:.4} elapsed_ms={:.3}",
            noise_pixels, reduction_ratio, elapsed_ms
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spike_image() -> RawImage {
        // 5×5 flat field with one bright interior pixel.
        let mut image = RawImage::new(5, 5, 4);
        for px in image.data.chunks_exact_mut(4) {
            px[0] = 30;
            px[1] = 30;
            px[2] = 30;
            px[3] = 255;
        }
        for c in 0..3 {
            image.data[(2 * 5 + 2) * 4 + c] = 250;
        }
        image
    }

    #[test]
    fn stages_are_reported_in_order() {
        let mut stages = Vec::new();
        let despiker = Despiker::new(DespikeParams::default());
        despiker
            .process_with_progress(&spike_image(), &mut |s: PipelineStage| stages.push(s))
            .unwrap();
        assert_eq!(
            stages,
            vec![
                PipelineStage::Preprocessing,
                PipelineStage::Detection,
                PipelineStage::Denoising,
                PipelineStage::Enhancement,
                PipelineStage::Complete,
            ]
        );
    }

    #[test]
    fn disabling_enhancement_skips_stage_and_output() {
        let mut stages = Vec::new();
        let despiker = Despiker::new(DespikeParams {
            use_enhancement: false,
            ..Default::default()
        });
        let result = despiker
            .process_with_progress(&spike_image(), &mut |s: PipelineStage| stages.push(s))
            .unwrap();
        assert!(result.enhanced.is_none());
        assert!(!stages.contains(&PipelineStage::Enhancement));
    }

    #[test]
    fn spike_is_counted_and_repaired() {
        let despiker = Despiker::new(DespikeParams {
            use_enhancement: false,
            ..Default::default()
        });
        let result = despiker.process(&spike_image()).unwrap();
        assert_eq!(result.stats.noise_pixels, 1);
        assert!((result.stats.reduction_ratio - 1.0 / 25.0).abs() < 1e-6);
        // The repaired pixel matches the flat background in the rendering.
        let center = result.denoised.channel(2, 2, 0);
        assert_eq!(center, result.denoised.channel(1, 1, 0));
        // Mask rendering is white at the spike, black elsewhere.
        assert_eq!(result.mask_image.channel(2, 2, 0), 255);
        assert_eq!(result.mask_image.channel(1, 1, 0), 0);
    }

    #[test]
    fn progress_listener_does_not_affect_results() {
        let despiker = Despiker::new(DespikeParams::default());
        let silent = despiker.process(&spike_image()).unwrap();
        let observed = despiker
            .process_with_progress(&spike_image(), &mut |_: PipelineStage| {})
            .unwrap();
        assert_eq!(silent.denoised.data, observed.denoised.data);
        assert_eq!(silent.stats.noise_pixels, observed.stats.noise_pixels);
    }

    #[test]
    fn enhanced_output_is_double_sized() {
        let despiker = Despiker::new(DespikeParams::default());
        let result = despiker.process(&spike_image()).unwrap();
        let enhanced = result.enhanced.expect("enhancement enabled");
        assert_eq!((enhanced.w, enhanced.h), (10, 10));
    }

    #[test]
    fn zero_sized_input_aborts_without_result() {
        let despiker = Despiker::new(DespikeParams::default());
        let err = despiker.process(&RawImage::new(0, 0, 4)).unwrap_err();
        assert!(matches!(err, crate::error::Error::InvalidDimensions(_)));
    }

    #[test]
    fn out_of_range_threshold_is_clamped_at_construction() {
        let despiker = Despiker::new(DespikeParams {
            threshold: 9.0,
            ..Default::default()
        });
        assert_eq!(despiker.params().threshold, params::THRESHOLD_MAX);
    }
}
