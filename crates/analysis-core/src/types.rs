use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ComputationError;

/// Top-level analysis category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Classical,
    Applied,
    Advanced,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Classical => "classical",
            Category::Applied => "applied",
            Category::Advanced => "advanced",
        }
    }
}

/// Analysis subcategory. Each belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subcategory {
    Liquidity,
    Activity,
    Leverage,
    Profitability,
    Market,
    Structural,
    CashFlow,
    CreditRisk,
    Distress,
    Growth,
    Dupont,
    WorkingCapital,
    Statistical,
    Forecasting,
    Valuation,
    Sensitivity,
}

impl Subcategory {
    pub fn category(&self) -> Category {
        match self {
            Subcategory::Liquidity
            | Subcategory::Activity
            | Subcategory::Leverage
            | Subcategory::Profitability
            | Subcategory::Market
            | Subcategory::Structural
            | Subcategory::CashFlow => Category::Classical,
            Subcategory::CreditRisk
            | Subcategory::Distress
            | Subcategory::Growth
            | Subcategory::Dupont
            | Subcategory::WorkingCapital => Category::Applied,
            Subcategory::Statistical
            | Subcategory::Forecasting
            | Subcategory::Valuation
            | Subcategory::Sensitivity => Category::Advanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Subcategory::Liquidity => "liquidity",
            Subcategory::Activity => "activity",
            Subcategory::Leverage => "leverage",
            Subcategory::Profitability => "profitability",
            Subcategory::Market => "market",
            Subcategory::Structural => "structural",
            Subcategory::CashFlow => "cash_flow",
            Subcategory::CreditRisk => "credit_risk",
            Subcategory::Distress => "distress",
            Subcategory::Growth => "growth",
            Subcategory::Dupont => "dupont",
            Subcategory::WorkingCapital => "working_capital",
            Subcategory::Statistical => "statistical",
            Subcategory::Forecasting => "forecasting",
            Subcategory::Valuation => "valuation",
            Subcategory::Sensitivity => "sensitivity",
        }
    }

    pub const ALL: [Subcategory; 16] = [
        Subcategory::Liquidity,
        Subcategory::Activity,
        Subcategory::Leverage,
        Subcategory::Profitability,
        Subcategory::Market,
        Subcategory::Structural,
        Subcategory::CashFlow,
        Subcategory::CreditRisk,
        Subcategory::Distress,
        Subcategory::Growth,
        Subcategory::Dupont,
        Subcategory::WorkingCapital,
        Subcategory::Statistical,
        Subcategory::Forecasting,
        Subcategory::Valuation,
        Subcategory::Sensitivity,
    ];
}

/// Unit of a computed metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputUnit {
    Ratio,
    Percent,
    Days,
    Times,
    Currency,
    PerShare,
    Score,
    Months,
}

/// Which direction of a metric is favorable relative to its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Direction {
    HigherBetter,
    LowerBetter,
    TargetBand { low: f64, high: f64 },
}

/// Five-band ordinal rating, plus Unrated when no reference is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    VeryGood,
    Good,
    Acceptable,
    Poor,
    Unrated,
}

impl Rating {
    /// Ordinal score Poor=1 .. Excellent=5; Unrated carries none.
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            Rating::Excellent => Some(5),
            Rating::VeryGood => Some(4),
            Rating::Good => Some(3),
            Rating::Acceptable => Some(2),
            Rating::Poor => Some(1),
            Rating::Unrated => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::VeryGood => "Very Good",
            Rating::Good => "Good",
            Rating::Acceptable => "Acceptable",
            Rating::Poor => "Poor",
            Rating::Unrated => "Unrated",
        }
    }
}

/// Coarse risk tier derived alongside the rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }
}

/// Outcome of one analysis definition for one run. Exactly one of
/// `raw_value` / `error` is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub definition_id: String,
    pub name: String,
    pub category: Category,
    pub subcategory: Subcategory,
    pub unit: OutputUnit,
    pub raw_value: Option<f64>,
    pub benchmark_value: Option<f64>,
    pub peer_value: Option<f64>,
    pub rating: Rating,
    pub risk_level: Option<RiskLevel>,
    pub recommendations: Vec<String>,
    pub error: Option<ComputationError>,
}

/// Mean rating ordinal for one subcategory plus result counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryScore {
    pub subcategory: Subcategory,
    /// Mean ordinal (1..5) over rated results; None when nothing was rated.
    pub score: Option<f64>,
    pub rated: usize,
    pub unrated: usize,
    pub errored: usize,
}

/// One entry in the key-risk list of an executive summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyRisk {
    pub definition_id: String,
    pub name: String,
    pub risk_level: RiskLevel,
    pub rating: Rating,
}

/// Per-run roll-up of all classified results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub generated_at: DateTime<Utc>,
    pub subcategory_scores: Vec<SubcategoryScore>,
    /// Overall score on a 0..100 scale; None when no result was rated.
    pub overall_score: Option<f64>,
    pub overall_rating: Rating,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
    pub key_risks: Vec<KeyRisk>,
    pub forecast_notes: Vec<String>,
}

/// Which catalog entries a run covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisScope {
    Classical,
    Applied,
    Advanced,
    Comprehensive,
    Custom { ids: Vec<String> },
}

/// Caller request for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub scope: AnalysisScope,
    pub sector: String,
    pub geography: String,
    /// Carried through to downstream reporting; the core does not localize.
    pub language: String,
}

/// Pipeline stage of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Ingest,
    Structure,
    Benchmark,
    Compute,
    Aggregate,
    Done,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Ingest => "ingest",
            PipelineStage::Structure => "structure",
            PipelineStage::Benchmark => "benchmark",
            PipelineStage::Compute => "compute",
            PipelineStage::Aggregate => "aggregate",
            PipelineStage::Done => "done",
            PipelineStage::Failed => "failed",
        }
    }

    /// Progress weight of the stage, in percent. Weights of the working
    /// stages sum to 100.
    pub fn weight(&self) -> u8 {
        match self {
            PipelineStage::Ingest => 10,
            PipelineStage::Structure => 15,
            PipelineStage::Benchmark => 10,
            PipelineStage::Compute => 55,
            PipelineStage::Aggregate => 10,
            PipelineStage::Done | PipelineStage::Failed => 0,
        }
    }
}

/// Severity of a recorded stage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageSeverity {
    Warning,
    Fatal,
}

/// One error recorded against a pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageError {
    pub stage: PipelineStage,
    pub severity: StageSeverity,
    pub message: String,
}

/// Mutable state of one run. Created at run start, owned by the
/// orchestrator, discarded when the run ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineState {
    pub stage: PipelineStage,
    pub completed_analyses: BTreeSet<String>,
    pub errors: Vec<StageError>,
    pub progress_percent: u8,
}

impl PipelineState {
    pub fn new() -> Self {
        Self {
            stage: PipelineStage::Ingest,
            completed_analyses: BTreeSet::new(),
            errors: Vec::new(),
            progress_percent: 0,
        }
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_ordinals() {
        assert_eq!(Rating::Excellent.ordinal(), Some(5));
        assert_eq!(Rating::Poor.ordinal(), Some(1));
        assert_eq!(Rating::Unrated.ordinal(), None);
    }

    #[test]
    fn stage_weights_sum_to_100() {
        let total: u32 = [
            PipelineStage::Ingest,
            PipelineStage::Structure,
            PipelineStage::Benchmark,
            PipelineStage::Compute,
            PipelineStage::Aggregate,
        ]
        .iter()
        .map(|s| s.weight() as u32)
        .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn every_subcategory_maps_to_its_category() {
        for sub in Subcategory::ALL {
            // Category round-trips through as_str naming conventions.
            assert!(!sub.as_str().is_empty());
            let _ = sub.category();
        }
    }
}
