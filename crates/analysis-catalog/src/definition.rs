use analysis_core::{Category, Direction, FieldRef, OutputUnit, Subcategory};
use serde::Serialize;

/// Absolute classification thresholds used when no benchmark is available.
/// Interpretation follows the definition's direction: for `HigherBetter`
/// the value must be at or above the threshold, for `LowerBetter` at or
/// below it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AbsoluteBands {
    pub excellent: f64,
    pub very_good: f64,
    pub good: f64,
    pub acceptable: f64,
}

/// One catalog entry: a single named financial metric and how to compute
/// and classify it. Ids are stable and globally unique.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub subcategory: Subcategory,
    /// Scalar statement fields the formula reads directly.
    pub required_fields: &'static [FieldRef],
    /// Sibling analysis ids whose values the formula reads. Always within
    /// the same subcategory, so every scope that selects the dependent also
    /// selects its dependencies.
    pub depends_on: &'static [&'static str],
    /// Minimum number of historical periods required (0 = none).
    pub min_history: usize,
    pub unit: OutputUnit,
    pub direction: Direction,
    pub benchmark_applicable: bool,
    pub forecastable: bool,
    pub absolute_bands: Option<AbsoluteBands>,
}

impl AnalysisDefinition {
    pub fn category(&self) -> Category {
        self.subcategory.category()
    }
}

/// Entry literal helper. Defaults: ratio unit, higher-is-better, benchmark
/// applicable, not forecastable, no absolute fallback.
pub(crate) fn def(
    id: &'static str,
    name: &'static str,
    subcategory: Subcategory,
) -> AnalysisDefinition {
    AnalysisDefinition {
        id,
        name,
        subcategory,
        required_fields: &[],
        depends_on: &[],
        min_history: 0,
        unit: OutputUnit::Ratio,
        direction: Direction::HigherBetter,
        benchmark_applicable: true,
        forecastable: false,
        absolute_bands: None,
    }
}

impl AnalysisDefinition {
    pub(crate) fn fields(mut self, fields: &'static [FieldRef]) -> Self {
        self.required_fields = fields;
        self
    }

    pub(crate) fn depends(mut self, ids: &'static [&'static str]) -> Self {
        self.depends_on = ids;
        self
    }

    pub(crate) fn history(mut self, min_periods: usize) -> Self {
        self.min_history = min_periods;
        self
    }

    pub(crate) fn unit(mut self, unit: OutputUnit) -> Self {
        self.unit = unit;
        self
    }

    pub(crate) fn lower_better(mut self) -> Self {
        self.direction = Direction::LowerBetter;
        self
    }

    pub(crate) fn target_band(mut self, low: f64, high: f64) -> Self {
        self.direction = Direction::TargetBand { low, high };
        self
    }

    pub(crate) fn no_benchmark(mut self) -> Self {
        self.benchmark_applicable = false;
        self
    }

    pub(crate) fn forecastable(mut self) -> Self {
        self.forecastable = true;
        self
    }

    pub(crate) fn bands(
        mut self,
        excellent: f64,
        very_good: f64,
        good: f64,
        acceptable: f64,
    ) -> Self {
        self.absolute_bands = Some(AbsoluteBands {
            excellent,
            very_good,
            good,
            acceptable,
        });
        self
    }
}
