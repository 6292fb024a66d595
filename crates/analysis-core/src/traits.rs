use async_trait::async_trait;

use crate::error::BenchmarkError;
use crate::types::PipelineStage;

/// External supplier of industry/peer benchmark values keyed by analysis id,
/// sector and geography. `Ok(None)` means no benchmark exists for the key;
/// `Err` means the provider itself failed (and the run proceeds without).
#[async_trait]
pub trait BenchmarkProvider: Send + Sync {
    async fn fetch(
        &self,
        definition_id: &str,
        sector: &str,
        geography: &str,
    ) -> Result<Option<f64>, BenchmarkError>;
}

/// Progress observer for one run. Percent is 0..=100 and non-decreasing.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, percent: u8, stage: PipelineStage);
}

/// Sink that discards progress updates.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_progress(&self, _percent: u8, _stage: PipelineStage) {}
}

impl<F> ProgressSink for F
where
    F: Fn(u8, PipelineStage) + Send + Sync,
{
    fn on_progress(&self, percent: u8, stage: PipelineStage) {
        self(percent, stage)
    }
}
