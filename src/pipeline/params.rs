//! Pipeline parameters.
use log::warn;
use serde::Deserialize;

/// Detection threshold domain; values outside are clamped by
/// [`DespikeParams::sanitized`].
pub const THRESHOLD_MIN: f32 = 0.05;
pub const THRESHOLD_MAX: f32 = 0.5;

/// Parameters controlling a pipeline run.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DespikeParams {
    /// Detection sensitivity; higher values are more conservative and flag
    /// fewer pixels.
    pub threshold: f32,
    /// Enables the 2× upscale + sharpening stage and its output slot.
    pub use_enhancement: bool,
}

impl Default for DespikeParams {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            use_enhancement: true,
        }
    }
}

impl DespikeParams {
    /// Clamp the threshold into its documented domain, warning on
    /// adjustment. Out-of-range values are never fatal.
    pub fn sanitized(&self) -> Self {
        let mut p = self.clone();
        if !(THRESHOLD_MIN..=THRESHOLD_MAX).contains(&p.threshold) {
            let clamped = p.threshold.clamp(THRESHOLD_MIN, THRESHOLD_MAX);
            warn!(
                "threshold {} outside [{}, {}], clamping to {}",
                p.threshold, THRESHOLD_MIN, THRESHOLD_MAX, clamped
            );
            p.threshold = clamped;
        }
        p
    }
}
