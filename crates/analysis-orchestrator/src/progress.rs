use analysis_core::{PipelineStage, ProgressSink};

/// Monotonic progress reporting over the staged pipeline. Each stage owns
/// a fixed weight; within a stage the tracker interpolates, and finished
/// runs always land on exactly 100.
pub(crate) struct ProgressTracker<'a> {
    sink: &'a dyn ProgressSink,
    completed_weight: u8,
    last_reported: u8,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(sink: &'a dyn ProgressSink) -> Self {
        Self {
            sink,
            completed_weight: 0,
            last_reported: 0,
        }
    }

    /// Report partial progress inside a stage. `fraction` is clamped to
    /// 0..1; reported percent never decreases.
    pub(crate) fn within(&mut self, stage: PipelineStage, fraction: f64) {
        let partial = (stage.weight() as f64 * fraction.clamp(0.0, 1.0)) as u8;
        let percent = (self.completed_weight + partial).min(100);
        self.report(percent, stage);
    }

    /// Mark a stage as finished, banking its full weight.
    pub(crate) fn finish(&mut self, stage: PipelineStage) {
        self.completed_weight = (self.completed_weight + stage.weight()).min(100);
        self.report(self.completed_weight, stage);
    }

    pub(crate) fn done(&mut self) {
        self.report(100, PipelineStage::Done);
    }

    pub(crate) fn percent(&self) -> u8 {
        self.last_reported
    }

    fn report(&mut self, percent: u8, stage: PipelineStage) {
        if percent < self.last_reported {
            return;
        }
        self.last_reported = percent;
        self.sink.on_progress(percent, stage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<u8>>);

    impl ProgressSink for Recorder {
        fn on_progress(&self, percent: u8, _stage: PipelineStage) {
            self.0.lock().unwrap().push(percent);
        }
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_100() {
        let recorder = Recorder(Mutex::new(Vec::new()));
        let mut tracker = ProgressTracker::new(&recorder);
        tracker.within(PipelineStage::Ingest, 0.5);
        tracker.finish(PipelineStage::Ingest);
        tracker.finish(PipelineStage::Structure);
        tracker.within(PipelineStage::Benchmark, 0.9);
        // A later smaller fraction must not move the needle backwards.
        tracker.within(PipelineStage::Benchmark, 0.1);
        tracker.finish(PipelineStage::Benchmark);
        tracker.within(PipelineStage::Compute, 0.5);
        tracker.finish(PipelineStage::Compute);
        tracker.finish(PipelineStage::Aggregate);
        tracker.done();

        let reported = recorder.0.lock().unwrap();
        assert!(reported.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*reported.last().unwrap(), 100);
    }
}
