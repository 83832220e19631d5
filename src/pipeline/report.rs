//! Run statistics, per-stage timings, and the assembled result.
use crate::image::RawImage;
use serde::Serialize;

/// Timing entry for a single pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Aggregated timing trace for a pipeline run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms,
        });
    }
}

/// Summary statistics for a pipeline run.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStats {
    /// Pixels flagged by detection.
    pub noise_pixels: usize,
    /// Fraction of total pixels flagged, in [0, 1].
    pub reduction_ratio: f32,
    /// Wall time from pipeline start to final assembly.
    pub elapsed_ms: f64,
}

/// Output of a complete pipeline run. Constructed once per run and immutable
/// afterwards; runs are independent and results are never cached. Image
/// payloads are skipped during serialization — only the summary blocks are
/// written to JSON reports.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    /// The caller's input, passed through untouched.
    #[serde(skip)]
    pub original: RawImage,
    /// Detection mask rendered white-on-black.
    #[serde(skip)]
    pub mask_image: RawImage,
    /// Inpainted luminance rendered as grayscale RGBA.
    #[serde(skip)]
    pub denoised: RawImage,
    /// Upscaled + sharpened rendering; absent when enhancement is disabled.
    #[serde(skip)]
    pub enhanced: Option<RawImage>,
    pub stats: PipelineStats,
    pub timings: TimingBreakdown,
}
