//! Rating and risk classification of computed analysis values.
//!
//! Classification is pure and per-metric: one raw value, one optional
//! benchmark, one definition in; a rating, an optional risk level, and
//! remediation text out. Benchmark comparison is preferred; fixed
//! absolute bands are the fallback; a metric with neither stays
//! `Unrated` rather than being guessed at.

mod bands;
mod recommendations;

use analysis_catalog::AnalysisDefinition;
use analysis_core::{Rating, RiskLevel};
use tracing::trace;

/// Rating for a normalized benchmark ratio, where 1.0 means "at
/// benchmark". Shared with the aggregate scoring path so the overall
/// rating uses the same scale as individual metrics.
pub fn rating_for_ratio(ratio: f64) -> Rating {
    bands::rating_from_ratio(ratio)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub rating: Rating,
    pub risk_level: Option<RiskLevel>,
    pub recommendations: Vec<String>,
}

impl Classification {
    fn unrated(def: &AnalysisDefinition) -> Self {
        Self {
            rating: Rating::Unrated,
            risk_level: None,
            recommendations: recommendations::for_result(def, Rating::Unrated, None),
        }
    }
}

#[derive(Debug, Default)]
pub struct ClassificationEngine;

impl ClassificationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classify one computed value. `benchmark` is the sector/geography
    /// reference for this metric, when one was obtained.
    pub fn classify(
        &self,
        def: &AnalysisDefinition,
        raw_value: Option<f64>,
        benchmark: Option<f64>,
    ) -> Classification {
        let Some(value) = raw_value else {
            return Classification::unrated(def);
        };

        let benchmark = if def.benchmark_applicable {
            benchmark
        } else {
            None
        };

        let (rating, risk_level) = match bands::effective_ratio(def, value, benchmark) {
            Some(ratio) => (
                bands::rating_from_ratio(ratio),
                Some(bands::risk_from_ratio(ratio)),
            ),
            None => match &def.absolute_bands {
                Some(fixed) => {
                    let rating = bands::rating_from_bands(fixed, def.direction, value);
                    (rating, bands::risk_from_rating(rating))
                }
                None => return Classification::unrated(def),
            },
        };

        trace!(id = def.id, ?rating, "classified");
        let recommendations = recommendations::for_result(def, rating, risk_level);
        Classification {
            rating,
            risk_level,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_catalog::AnalysisCatalog;
    use analysis_core::Direction;

    fn catalog() -> AnalysisCatalog {
        AnalysisCatalog::load().unwrap()
    }

    #[test]
    fn benchmark_comparison_drives_the_rating() {
        let catalog = catalog();
        let engine = ClassificationEngine::new();
        let def = catalog.get("current_ratio").unwrap();

        // 2.4 against a benchmark of 2.0 is 1.2x: excellent.
        let c = engine.classify(def, Some(2.4), Some(2.0));
        assert_eq!(c.rating, Rating::Excellent);
        assert_eq!(c.risk_level, Some(RiskLevel::Low));
        assert_eq!(c.recommendations.len(), 1);

        // Exactly at benchmark is good.
        let c = engine.classify(def, Some(2.0), Some(2.0));
        assert_eq!(c.rating, Rating::Good);

        // 1.5 against 2.0 is 0.75x: poor, very high risk, with an extra
        // escalation line.
        let c = engine.classify(def, Some(1.5), Some(2.0));
        assert_eq!(c.rating, Rating::Poor);
        assert_eq!(c.risk_level, Some(RiskLevel::VeryHigh));
        assert_eq!(c.recommendations.len(), 2);
    }

    #[test]
    fn lower_better_metrics_mirror_the_scale() {
        let catalog = catalog();
        let engine = ClassificationEngine::new();
        let def = catalog.get("capital_intensity").unwrap();
        assert_eq!(def.direction, Direction::LowerBetter);

        // 0.8x the benchmark of a lower-is-better metric is excellent.
        let c = engine.classify(def, Some(0.8), Some(1.0));
        assert_eq!(c.rating, Rating::Excellent);

        // 1.3x the benchmark is poor.
        let c = engine.classify(def, Some(1.3), Some(1.0));
        assert_eq!(c.rating, Rating::Poor);
    }

    #[test]
    fn target_band_metrics_ignore_the_benchmark() {
        let catalog = catalog();
        let engine = ClassificationEngine::new();
        let def = catalog.get("payables_turnover").unwrap();
        assert!(matches!(def.direction, Direction::TargetBand { .. }));

        // Band is 4..10; the center rates excellent whatever the benchmark.
        let center = engine.classify(def, Some(7.0), Some(100.0));
        assert_eq!(center.rating, Rating::Excellent);
        let edge = engine.classify(def, Some(10.0), None);
        assert_eq!(edge.rating, Rating::Good);
        let far = engine.classify(def, Some(30.0), None);
        assert_eq!(far.rating, Rating::Poor);
    }

    #[test]
    fn absolute_bands_back_up_missing_benchmarks() {
        let catalog = catalog();
        let engine = ClassificationEngine::new();
        let def = catalog.get("altman_z_score").unwrap();

        let c = engine.classify(def, Some(3.6), None);
        assert_eq!(c.rating, Rating::Excellent);
        let c = engine.classify(def, Some(1.0), None);
        assert_eq!(c.rating, Rating::Poor);
        assert_eq!(c.risk_level, Some(RiskLevel::VeryHigh));
    }

    #[test]
    fn no_context_means_unrated() {
        let catalog = catalog();
        let engine = ClassificationEngine::new();
        // Per-share metric with neither benchmark nor absolute bands.
        let def = catalog.get("book_value_per_share").unwrap();
        let c = engine.classify(def, Some(12.5), None);
        assert_eq!(c.rating, Rating::Unrated);
        assert_eq!(c.risk_level, None);
        assert!(!c.recommendations.is_empty());

        let missing = engine.classify(catalog.get("current_ratio").unwrap(), None, Some(2.0));
        assert_eq!(missing.rating, Rating::Unrated);
    }

    #[test]
    fn higher_values_never_rate_worse_for_higher_better_metrics() {
        let catalog = catalog();
        let engine = ClassificationEngine::new();
        let def = catalog.get("return_on_equity").unwrap();

        let mut last = 0;
        for step in 0..80 {
            let value = step as f64 * 0.5;
            let rating = engine.classify(def, Some(value), Some(15.0)).rating;
            let ordinal = rating.ordinal().unwrap_or(0);
            assert!(ordinal >= last, "rating regressed at value {value}");
            last = ordinal;
        }
    }
}
