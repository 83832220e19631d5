//! Stage lifecycle and progress reporting.
use serde::Serialize;
use std::fmt;

/// Lifecycle of a pipeline run.
///
/// Transitions are strictly linear (`Idle → Preprocessing → Detection →
/// Denoising → Enhancement? → Complete`) with no back-edges or retries. The
/// value is purely informational: it feeds progress reporting, never control
/// decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PipelineStage {
    Idle,
    Preprocessing,
    Detection,
    Denoising,
    Enhancement,
    Complete,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PipelineStage::Idle => "idle",
            PipelineStage::Preprocessing => "preprocessing",
            PipelineStage::Detection => "detection",
            PipelineStage::Denoising => "denoising",
            PipelineStage::Enhancement => "enhancement",
            PipelineStage::Complete => "complete",
        };
        f.write_str(label)
    }
}

/// Observer notified synchronously with each upcoming stage.
///
/// Implemented for any `FnMut(PipelineStage)`. Absence of a sink never
/// alters computed results; the notification is the pipeline's only side
/// effect.
pub trait ProgressSink {
    fn stage(&mut self, stage: PipelineStage);
}

impl<F: FnMut(PipelineStage)> ProgressSink for F {
    fn stage(&mut self, stage: PipelineStage) {
        self(stage)
    }
}
