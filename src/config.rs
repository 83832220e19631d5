//! Runtime configuration for the demo binaries.
//!
//! Both tools are driven by a small JSON file; parameters fall back to their
//! library defaults when omitted.
use crate::pipeline::DespikeParams;
use crate::simulate::SimulateParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DespikeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: DespikeParams,
    pub output: DespikeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DespikeOutputConfig {
    #[serde(rename = "denoised_image")]
    pub denoised_image: PathBuf,
    #[serde(default)]
    pub mask_image: Option<PathBuf>,
    #[serde(default)]
    pub enhanced_image: Option<PathBuf>,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_despike_config(path: &Path) -> Result<DespikeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[derive(Debug, Deserialize)]
pub struct SimulateToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: SimulateParams,
    pub output: SimulateOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SimulateOutputConfig {
    #[serde(rename = "noisy_image")]
    pub noisy_image: PathBuf,
}

pub fn load_simulate_config(path: &Path) -> Result<SimulateToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn despike_config_parses_with_default_params() {
        let json = r#"{
            "input": "frames/m31.png",
            "output": { "denoised_image": "out/m31_clean.png" }
        }"#;
        let config: DespikeToolConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.params.threshold, 0.15);
        assert!(config.params.use_enhancement);
        assert!(config.output.mask_image.is_none());
    }

    #[test]
    fn simulate_config_parses_seed() {
        let json = r#"{
            "input": "frames/clean.png",
            "params": { "density": 0.01, "seed": 99 },
            "output": { "noisy_image": "out/noisy.png" }
        }"#;
        let config: SimulateToolConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.params.seed, Some(99));
        assert_eq!(config.params.density, 0.01);
        assert_eq!(config.params.intensity, 0.8);
    }
}
