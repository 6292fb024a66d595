//! Staged analysis pipeline: ingest, structure, benchmark, compute,
//! aggregate.
//!
//! One orchestrator instance is built once and reused across runs; each
//! run owns its own [`PipelineState`]. Failures are scoped as narrowly as
//! possible: a formula failure marks one result, a benchmark failure
//! downgrades one classification, and only the two critical early stages
//! can fail the run as a whole.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use aggregation::Aggregator;
use analysis_catalog::{AnalysisCatalog, AnalysisDefinition};
use analysis_core::{
    AnalysisRequest, AnalysisResult, BenchmarkProvider, CatalogError, ExecutiveSummary,
    NullProgress, PipelineStage, PipelineState, ProgressSink, RegistryError, StageError,
    StageSeverity, Statement,
};
use classification::ClassificationEngine;
use dashmap::DashMap;
use formula_engine::{FormulaInput, FormulaRegistry};
use futures::future::join_all;
use thiserror::Error;
use tracing::{info, instrument, warn};

mod progress;
#[cfg(test)]
mod tests;

use progress::ProgressTracker;

/// Knobs of one orchestrator instance. Applies to every run it executes.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Upper bound on concurrently awaited benchmark fetches and computed
    /// formulas per batch.
    pub concurrency_limit: usize,
    /// Per-fetch budget for the benchmark provider.
    pub benchmark_timeout: Duration,
    /// How many entries each SWOT quadrant of the summary may carry.
    pub swot_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            concurrency_limit: 16,
            benchmark_timeout: Duration::from_secs(5),
            swot_limit: 5,
        }
    }
}

/// Orchestrator construction failure: the catalog or formula registry is
/// internally inconsistent. Nothing can run until the build is fixed.
#[derive(Error, Debug)]
pub enum InitError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Whole-run failure. Per-metric failures never surface here; they ride
/// along inside the results.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{} stage failed: {message}", stage.as_str())]
    CriticalStage {
        stage: PipelineStage,
        message: String,
    },

    /// Run was cancelled. Work finished before the cancellation point is
    /// carried in the partial outcome.
    #[error("run cancelled during compute")]
    Cancelled(Box<RunOutcome>),

    /// The request scoped an id the catalog does not know.
    #[error("unknown analysis id: {0}")]
    UnknownAnalysis(String),
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// One result per selected definition, in catalog order.
    pub results: Vec<AnalysisResult>,
    /// Absent only on cancelled runs that never reached aggregation.
    pub summary: Option<ExecutiveSummary>,
    pub errors: Vec<StageError>,
    pub state: PipelineState,
}

/// Cooperative cancellation handle. Cancelling stops the pipeline at the
/// next batch boundary; work already in flight finishes.
#[derive(Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct AnalysisOrchestrator {
    catalog: AnalysisCatalog,
    registry: FormulaRegistry,
    classifier: ClassificationEngine,
    aggregator: Aggregator,
    benchmarks: Arc<dyn BenchmarkProvider>,
    config: PipelineConfig,
}

impl AnalysisOrchestrator {
    pub fn new(
        benchmarks: Arc<dyn BenchmarkProvider>,
        config: PipelineConfig,
    ) -> Result<Self, InitError> {
        let catalog = AnalysisCatalog::load()?;
        let registry = FormulaRegistry::new(&catalog)?;
        let aggregator = Aggregator::new(config.swot_limit);
        Ok(Self {
            catalog,
            registry,
            classifier: ClassificationEngine::new(),
            aggregator,
            benchmarks,
            config,
        })
    }

    pub fn catalog(&self) -> &AnalysisCatalog {
        &self.catalog
    }

    /// Run without progress reporting or cancellation.
    pub async fn run(
        &self,
        statement: &Statement,
        request: &AnalysisRequest,
    ) -> Result<RunOutcome, PipelineError> {
        self.run_with(statement, request, &NullProgress, &CancelFlag::new())
            .await
    }

    #[instrument(skip_all, fields(sector = %request.sector, geography = %request.geography))]
    pub async fn run_with(
        &self,
        statement: &Statement,
        request: &AnalysisRequest,
        progress: &dyn ProgressSink,
        cancel: &CancelFlag,
    ) -> Result<RunOutcome, PipelineError> {
        let mut state = PipelineState::new();
        let mut tracker = ProgressTracker::new(progress);

        // Ingest: sanity-check the statement. The only way a statement
        // fails here is by carrying nothing to analyze at all.
        state.stage = PipelineStage::Ingest;
        if let Err(message) = validate_statement(statement, &mut state.errors) {
            state.stage = PipelineStage::Failed;
            return Err(PipelineError::CriticalStage {
                stage: PipelineStage::Ingest,
                message,
            });
        }
        tracker.finish(PipelineStage::Ingest);

        // Structure: resolve the scope against the catalog and order the
        // selection into dependency levels.
        state.stage = PipelineStage::Structure;
        let selected = match self.catalog.select(&request.scope) {
            Ok(selected) => selected,
            Err(err) => {
                state.stage = PipelineStage::Failed;
                return Err(match err {
                    CatalogError::UnknownId(id) => PipelineError::UnknownAnalysis(id),
                    other => PipelineError::CriticalStage {
                        stage: PipelineStage::Structure,
                        message: other.to_string(),
                    },
                });
            }
        };
        let levels = self.registry.plan(&selected);
        info!(
            selected = selected.len(),
            levels = levels.len(),
            "scope structured"
        );
        tracker.finish(PipelineStage::Structure);

        // Benchmark: prefetch reference values for every benchmarked
        // metric in scope. Failures and timeouts degrade, never abort.
        state.stage = PipelineStage::Benchmark;
        let benchmarks = self
            .fetch_benchmarks(&selected, request, &mut state.errors, &mut tracker)
            .await;
        tracker.finish(PipelineStage::Benchmark);

        // Compute and classify, level by level.
        state.stage = PipelineStage::Compute;
        let mut results_by_id: HashMap<String, AnalysisResult> = HashMap::new();
        let mut siblings: HashMap<String, f64> = HashMap::new();
        let total = selected.len().max(1);
        let mut processed = 0usize;

        for level in &levels {
            for batch in level.chunks(self.config.concurrency_limit.max(1)) {
                if cancel.is_cancelled() {
                    state.errors.push(StageError {
                        stage: PipelineStage::Compute,
                        severity: StageSeverity::Warning,
                        message: "run cancelled; later analyses never ran".to_string(),
                    });
                    state.progress_percent = tracker.percent();
                    state.stage = PipelineStage::Failed;
                    let outcome = self.partial_outcome(&selected, results_by_id, state);
                    return Err(PipelineError::Cancelled(Box::new(outcome)));
                }

                let computed = DashMap::new();
                let work = batch.iter().map(|def| {
                    let computed = &computed;
                    let siblings = &siblings;
                    let benchmarks = &benchmarks;
                    async move {
                        let input = FormulaInput {
                            statement,
                            siblings,
                        };
                        let result = self.evaluate(def, &input, benchmarks.get(def.id).copied());
                        computed.insert(def.id.to_string(), result);
                    }
                });
                join_all(work).await;

                for (id, result) in computed {
                    if let Some(value) = result.raw_value {
                        siblings.insert(id.clone(), value);
                        state.completed_analyses.insert(id.clone());
                    }
                    results_by_id.insert(id, result);
                }
                processed += batch.len();
                tracker.within(PipelineStage::Compute, processed as f64 / total as f64);
            }
        }
        tracker.finish(PipelineStage::Compute);

        // Aggregate: roll the classified results into a summary.
        state.stage = PipelineStage::Aggregate;
        let results: Vec<AnalysisResult> = selected
            .iter()
            .filter_map(|def| results_by_id.remove(def.id))
            .collect();
        let summary = self.aggregator.aggregate(&self.catalog, &results);
        tracker.finish(PipelineStage::Aggregate);

        state.stage = PipelineStage::Done;
        tracker.done();
        state.progress_percent = tracker.percent();

        Ok(RunOutcome {
            results,
            summary: Some(summary),
            errors: state.errors.clone(),
            state,
        })
    }

    /// Compute and classify one definition. Never fails: computation
    /// errors become part of the result.
    fn evaluate(
        &self,
        def: &AnalysisDefinition,
        input: &FormulaInput<'_>,
        benchmark: Option<f64>,
    ) -> AnalysisResult {
        let (raw_value, error) = match self.registry.compute(def, input) {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(err)),
        };
        let classification = self.classifier.classify(def, raw_value, benchmark);
        AnalysisResult {
            definition_id: def.id.to_string(),
            name: def.name.to_string(),
            category: def.category(),
            subcategory: def.subcategory,
            unit: def.unit,
            raw_value,
            benchmark_value: benchmark,
            peer_value: None,
            rating: classification.rating,
            risk_level: classification.risk_level,
            recommendations: classification.recommendations,
            error,
        }
    }

    async fn fetch_benchmarks(
        &self,
        selected: &[&AnalysisDefinition],
        request: &AnalysisRequest,
        errors: &mut Vec<StageError>,
        tracker: &mut ProgressTracker<'_>,
    ) -> HashMap<&'static str, f64> {
        let wanted: Vec<&AnalysisDefinition> = selected
            .iter()
            .copied()
            .filter(|def| def.benchmark_applicable)
            .collect();
        let total = wanted.len().max(1);

        let mut found = HashMap::new();
        let mut fetched = 0usize;
        for batch in wanted.chunks(self.config.concurrency_limit.max(1)) {
            let fetches = batch.iter().map(|def| async move {
                let fetch = self
                    .benchmarks
                    .fetch(def.id, &request.sector, &request.geography);
                match tokio::time::timeout(self.config.benchmark_timeout, fetch).await {
                    Ok(result) => (def.id, result),
                    Err(_) => (def.id, Err(analysis_core::BenchmarkError::Timeout)),
                }
            });
            for (id, outcome) in join_all(fetches).await {
                match outcome {
                    Ok(Some(value)) => {
                        found.insert(id, value);
                    }
                    Ok(None) => {}
                    Err(err) => {
                        warn!(id, %err, "benchmark fetch failed; falling back");
                        errors.push(StageError {
                            stage: PipelineStage::Benchmark,
                            severity: StageSeverity::Warning,
                            message: format!("{id}: {err}"),
                        });
                    }
                }
            }
            fetched += batch.len();
            tracker.within(PipelineStage::Benchmark, fetched as f64 / total as f64);
        }
        found
    }

    fn partial_outcome(
        &self,
        selected: &[&AnalysisDefinition],
        mut results_by_id: HashMap<String, AnalysisResult>,
        state: PipelineState,
    ) -> RunOutcome {
        let results: Vec<AnalysisResult> = selected
            .iter()
            .filter_map(|def| results_by_id.remove(def.id))
            .collect();
        RunOutcome {
            errors: state.errors.clone(),
            summary: None,
            results,
            state,
        }
    }
}

/// Statement sanity checks. Returns the fatal message when there is
/// nothing to analyze; softer inconsistencies are recorded as warnings.
fn validate_statement(
    statement: &Statement,
    errors: &mut Vec<StageError>,
) -> Result<(), String> {
    let bs = &statement.balance_sheet;
    let is = &statement.income_statement;
    let has_anything = bs.total_assets.is_some()
        || bs.current_assets.is_some()
        || is.revenue.is_some()
        || statement.cash_flow.operating_cash_flow.is_some()
        || !statement.history.is_empty();
    if !has_anything {
        return Err("statement carries no usable figures".to_string());
    }

    if let (Some(assets), Some(liabilities), Some(equity)) =
        (bs.total_assets, bs.total_liabilities, bs.total_equity)
    {
        let gap = (assets - (liabilities + equity)).abs();
        if gap > assets.abs() * 0.005 {
            errors.push(StageError {
                stage: PipelineStage::Ingest,
                severity: StageSeverity::Warning,
                message: format!(
                    "balance identity off by {gap:.0}: assets {assets:.0} vs liabilities+equity {:.0}",
                    liabilities + equity
                ),
            });
        }
    }
    if let (Some(current), Some(total)) = (bs.current_assets, bs.total_assets) {
        if current > total {
            errors.push(StageError {
                stage: PipelineStage::Ingest,
                severity: StageSeverity::Warning,
                message: "current assets exceed total assets".to_string(),
            });
        }
    }
    Ok(())
}
