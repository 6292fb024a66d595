//! Executive summary roll-up over a batch of classified results.
//!
//! The aggregator never recomputes or reclassifies anything: it reads
//! the per-metric ratings produced upstream and condenses them into
//! subcategory scores, an overall score, a SWOT view, and the key-risk
//! list.

use std::collections::BTreeMap;

use analysis_catalog::{AnalysisCatalog, AnalysisDefinition};
use analysis_core::{
    AnalysisResult, ExecutiveSummary, KeyRisk, OutputUnit, Rating, RiskLevel, Subcategory,
    SubcategoryScore,
};
use chrono::Utc;
use tracing::debug;

/// Score (0..100) treated as "at benchmark" when rating the overall
/// result: a straight Good across the board lands exactly here.
const OVERALL_BENCHMARK: f64 = 80.0;

pub struct Aggregator {
    swot_limit: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Aggregator {
    pub fn new(swot_limit: usize) -> Self {
        Self { swot_limit }
    }

    pub fn aggregate(
        &self,
        catalog: &AnalysisCatalog,
        results: &[AnalysisResult],
    ) -> ExecutiveSummary {
        let subcategory_scores = subcategory_scores(results);

        let rated_scores: Vec<f64> = subcategory_scores
            .iter()
            .filter_map(|s| s.score)
            .collect();
        let overall_score = if rated_scores.is_empty() {
            None
        } else {
            // Mean ordinal (1..5) scaled to 0..100.
            Some(rated_scores.iter().sum::<f64>() / rated_scores.len() as f64 * 20.0)
        };
        let overall_rating = match overall_score {
            Some(score) => classification::rating_for_ratio(score / OVERALL_BENCHMARK),
            None => Rating::Unrated,
        };

        let (strengths, weaknesses) = self.swot_core(catalog, results);
        let (opportunities, threats) = self.swot_outlook(catalog, results);
        let key_risks = key_risks(results);
        let forecast_notes = forecast_notes(results);

        debug!(
            results = results.len(),
            overall = ?overall_score,
            "summary assembled"
        );
        ExecutiveSummary {
            generated_at: Utc::now(),
            subcategory_scores,
            overall_score,
            overall_rating,
            strengths,
            weaknesses,
            opportunities,
            threats,
            key_risks,
            forecast_notes,
        }
    }

    /// Strengths and weaknesses: the most favorable and least favorable
    /// rated results, ordered by distance from their benchmark.
    fn swot_core(
        &self,
        catalog: &AnalysisCatalog,
        results: &[AnalysisResult],
    ) -> (Vec<String>, Vec<String>) {
        let mut scored: Vec<(&AnalysisResult, f64)> = results
            .iter()
            .filter(|r| r.rating.ordinal().is_some())
            .filter_map(|r| {
                let def = catalog.get(&r.definition_id).ok()?;
                Some((r, favorability(def, r)))
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let strengths = scored
            .iter()
            .filter(|(r, _)| matches!(r.rating, Rating::Excellent | Rating::VeryGood))
            .take(self.swot_limit)
            .map(|(r, _)| describe(r))
            .collect();
        let weaknesses = scored
            .iter()
            .rev()
            .filter(|(r, _)| matches!(r.rating, Rating::Poor | Rating::Acceptable))
            .take(self.swot_limit)
            .map(|(r, _)| describe(r))
            .collect();
        (strengths, weaknesses)
    }

    /// Opportunities and threats come from the forward-looking metrics:
    /// a strong forecastable metric is an opportunity, a weak one a
    /// threat. Very-high-risk results join the threat list regardless.
    fn swot_outlook(
        &self,
        catalog: &AnalysisCatalog,
        results: &[AnalysisResult],
    ) -> (Vec<String>, Vec<String>) {
        let mut opportunities = Vec::new();
        let mut threats = Vec::new();
        for result in results {
            let Ok(def) = catalog.get(&result.definition_id) else {
                continue;
            };
            let Some(ordinal) = result.rating.ordinal() else {
                continue;
            };
            if def.forecastable {
                if ordinal >= 3 {
                    opportunities.push(format!("{} points upward", result.name));
                } else {
                    threats.push(format!("{} projects below the comfortable range", result.name));
                }
            } else if result.risk_level == Some(RiskLevel::VeryHigh) {
                threats.push(format!("{} carries very high risk", result.name));
            }
        }
        opportunities.truncate(self.swot_limit);
        threats.truncate(self.swot_limit);
        (opportunities, threats)
    }
}

/// Mean rating ordinal per subcategory, in taxonomy order, for every
/// subcategory that produced at least one result.
fn subcategory_scores(results: &[AnalysisResult]) -> Vec<SubcategoryScore> {
    let mut buckets: BTreeMap<Subcategory, (Vec<u8>, usize, usize)> = BTreeMap::new();
    for result in results {
        let bucket = buckets.entry(result.subcategory).or_default();
        if result.error.is_some() {
            bucket.2 += 1;
        } else {
            match result.rating.ordinal() {
                Some(ordinal) => bucket.0.push(ordinal),
                None => bucket.1 += 1,
            }
        }
    }

    Subcategory::ALL
        .into_iter()
        .filter_map(|subcategory| {
            let (ordinals, unrated, errored) = buckets.remove(&subcategory)?;
            let score = if ordinals.is_empty() {
                None
            } else {
                Some(ordinals.iter().map(|o| *o as f64).sum::<f64>() / ordinals.len() as f64)
            };
            Some(SubcategoryScore {
                subcategory,
                score,
                rated: ordinals.len(),
                unrated,
                errored,
            })
        })
        .collect()
}

/// Signed distance from the benchmark in the favorable direction. Metrics
/// without a usable benchmark fall back to their rating ordinal, centered
/// on Good.
fn favorability(def: &AnalysisDefinition, result: &AnalysisResult) -> f64 {
    use analysis_core::Direction;
    let ordinal_fallback = || {
        result
            .rating
            .ordinal()
            .map(|o| (o as f64 - 3.0) / 2.0)
            .unwrap_or(0.0)
    };
    let (Some(value), Some(benchmark)) = (result.raw_value, result.benchmark_value) else {
        return ordinal_fallback();
    };
    if benchmark <= 0.0 {
        return ordinal_fallback();
    }
    match def.direction {
        Direction::HigherBetter => value / benchmark - 1.0,
        Direction::LowerBetter => 1.0 - value / benchmark,
        Direction::TargetBand { .. } => ordinal_fallback(),
    }
}

fn describe(result: &AnalysisResult) -> String {
    match (result.raw_value, result.benchmark_value) {
        (Some(value), Some(benchmark)) => format!(
            "{} rated {} ({:.2} vs benchmark {:.2})",
            result.name,
            result.rating.label(),
            value,
            benchmark
        ),
        (Some(value), None) => format!(
            "{} rated {} ({:.2})",
            result.name,
            result.rating.label(),
            value
        ),
        _ => format!("{} rated {}", result.name, result.rating.label()),
    }
}

/// Every High or VeryHigh result, worst first.
fn key_risks(results: &[AnalysisResult]) -> Vec<KeyRisk> {
    let mut risks: Vec<KeyRisk> = results
        .iter()
        .filter(|r| {
            matches!(
                r.risk_level,
                Some(RiskLevel::High) | Some(RiskLevel::VeryHigh)
            )
        })
        .filter_map(|r| {
            Some(KeyRisk {
                definition_id: r.definition_id.clone(),
                name: r.name.clone(),
                risk_level: r.risk_level?,
                rating: r.rating,
            })
        })
        .collect();
    risks.sort_by(|a, b| b.risk_level.cmp(&a.risk_level));
    risks
}

/// One readable line per successfully computed forecasting metric.
fn forecast_notes(results: &[AnalysisResult]) -> Vec<String> {
    results
        .iter()
        .filter(|r| r.subcategory == Subcategory::Forecasting)
        .filter_map(|r| {
            let value = r.raw_value?;
            let formatted = match r.unit {
                OutputUnit::Currency => format!("{value:.0}"),
                OutputUnit::Percent => format!("{value:.1}%"),
                OutputUnit::Months => format!("{value:.1} months"),
                _ => format!("{value:.2}"),
            };
            Some(format!("{}: {}", r.name, formatted))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::Category;

    fn result(
        id: &str,
        name: &str,
        subcategory: Subcategory,
        rating: Rating,
        risk: Option<RiskLevel>,
    ) -> AnalysisResult {
        AnalysisResult {
            definition_id: id.to_string(),
            name: name.to_string(),
            category: subcategory.category(),
            subcategory,
            unit: OutputUnit::Ratio,
            raw_value: Some(1.0),
            benchmark_value: None,
            peer_value: None,
            rating,
            risk_level: risk,
            recommendations: Vec::new(),
            error: None,
        }
    }

    fn catalog() -> AnalysisCatalog {
        AnalysisCatalog::load().unwrap()
    }

    #[test]
    fn overall_score_is_mean_subcategory_ordinal_times_twenty() {
        // One result per subcategory with ordinals 4, 3, 5, 4, 2: mean 3.6,
        // overall 72, which sits at 0.9x the benchmark: acceptable.
        let results = vec![
            result(
                "current_ratio",
                "Current Ratio",
                Subcategory::Liquidity,
                Rating::VeryGood,
                None,
            ),
            result(
                "asset_turnover",
                "Asset Turnover",
                Subcategory::Activity,
                Rating::Good,
                None,
            ),
            result(
                "debt_ratio",
                "Debt Ratio",
                Subcategory::Leverage,
                Rating::Excellent,
                None,
            ),
            result(
                "net_margin",
                "Net Margin",
                Subcategory::Profitability,
                Rating::VeryGood,
                None,
            ),
            result(
                "price_to_earnings",
                "P/E Ratio",
                Subcategory::Market,
                Rating::Acceptable,
                None,
            ),
        ];
        let summary = Aggregator::default().aggregate(&catalog(), &results);
        let overall = summary.overall_score.unwrap();
        assert!((overall - 72.0).abs() < 1e-9);
        assert_eq!(summary.overall_rating, Rating::Acceptable);
        assert_eq!(summary.subcategory_scores.len(), 5);
    }

    #[test]
    fn unrated_results_do_not_move_the_score() {
        let results = vec![
            result(
                "current_ratio",
                "Current Ratio",
                Subcategory::Liquidity,
                Rating::Good,
                None,
            ),
            result(
                "book_value_per_share",
                "Book Value per Share",
                Subcategory::Market,
                Rating::Unrated,
                None,
            ),
        ];
        let summary = Aggregator::default().aggregate(&catalog(), &results);
        // Only liquidity carries a score; market is present but unrated.
        assert!((summary.overall_score.unwrap() - 60.0).abs() < 1e-9);
        let market = summary
            .subcategory_scores
            .iter()
            .find(|s| s.subcategory == Subcategory::Market)
            .unwrap();
        assert_eq!(market.score, None);
        assert_eq!(market.unrated, 1);
    }

    #[test]
    fn no_rated_results_means_unrated_summary() {
        let results = vec![result(
            "book_value_per_share",
            "Book Value per Share",
            Subcategory::Market,
            Rating::Unrated,
            None,
        )];
        let summary = Aggregator::default().aggregate(&catalog(), &results);
        assert_eq!(summary.overall_score, None);
        assert_eq!(summary.overall_rating, Rating::Unrated);
    }

    #[test]
    fn elevated_risks_surface_worst_first() {
        let results = vec![
            result(
                "current_ratio",
                "Current Ratio",
                Subcategory::Liquidity,
                Rating::Acceptable,
                Some(RiskLevel::High),
            ),
            result(
                "altman_z_score",
                "Altman Z-Score",
                Subcategory::Distress,
                Rating::Poor,
                Some(RiskLevel::VeryHigh),
            ),
            result(
                "net_margin",
                "Net Margin",
                Subcategory::Profitability,
                Rating::Good,
                Some(RiskLevel::Low),
            ),
        ];
        let summary = Aggregator::default().aggregate(&catalog(), &results);
        assert_eq!(summary.key_risks.len(), 2);
        assert_eq!(summary.key_risks[0].risk_level, RiskLevel::VeryHigh);
        assert_eq!(summary.key_risks[0].definition_id, "altman_z_score");
    }

    #[test]
    fn swot_separates_extremes_by_benchmark_deviation() {
        let mut strong = result(
            "return_on_equity",
            "Return on Equity",
            Subcategory::Profitability,
            Rating::Excellent,
            None,
        );
        strong.raw_value = Some(24.0);
        strong.benchmark_value = Some(15.0);
        let mut weak = result(
            "current_ratio",
            "Current Ratio",
            Subcategory::Liquidity,
            Rating::Poor,
            Some(RiskLevel::VeryHigh),
        );
        weak.raw_value = Some(0.9);
        weak.benchmark_value = Some(2.0);

        let summary = Aggregator::default().aggregate(&catalog(), &[strong, weak]);
        assert_eq!(summary.strengths.len(), 1);
        assert!(summary.strengths[0].contains("Return on Equity"));
        assert_eq!(summary.weaknesses.len(), 1);
        assert!(summary.weaknesses[0].contains("Current Ratio"));
        assert!(summary.threats.iter().any(|t| t.contains("Current Ratio")));
    }

    #[test]
    fn forecast_results_produce_notes() {
        let mut forecast = result(
            "revenue_forecast",
            "Revenue Forecast (Next Period)",
            Subcategory::Forecasting,
            Rating::Unrated,
            None,
        );
        forecast.unit = OutputUnit::Currency;
        forecast.raw_value = Some(1_250_000.0);
        let summary = Aggregator::default().aggregate(&catalog(), &[forecast]);
        assert_eq!(summary.forecast_notes.len(), 1);
        assert!(summary.forecast_notes[0].contains("1250000"));
    }

    #[test]
    fn category_is_consistent_with_subcategory_in_fixtures() {
        let r = result(
            "altman_z_score",
            "Altman Z-Score",
            Subcategory::Distress,
            Rating::Good,
            None,
        );
        assert_eq!(r.category, Category::Applied);
    }
}
