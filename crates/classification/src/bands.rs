//! Threshold logic: raw value plus context in, rating and risk out.

use analysis_catalog::{AbsoluteBands, AnalysisDefinition};
use analysis_core::{Direction, Rating, RiskLevel};

/// Normalized benchmark ratio: 1.0 means "at benchmark", above 1.0 means
/// "better than benchmark" regardless of the metric's direction.
///
/// `LowerBetter` is mirrored around 1.0 so 0.8x the benchmark scores like
/// 1.2x would for a `HigherBetter` metric. `TargetBand` ignores the
/// benchmark entirely: the band is its own target, scoring 1.2 at the
/// center and decaying linearly to 0.8 at one band-width outside either
/// edge.
pub(crate) fn effective_ratio(
    def: &AnalysisDefinition,
    value: f64,
    benchmark: Option<f64>,
) -> Option<f64> {
    match def.direction {
        Direction::TargetBand { low, high } => Some(band_ratio(value, low, high)),
        Direction::HigherBetter => {
            let b = benchmark.filter(|b| *b > 0.0)?;
            Some(value / b)
        }
        Direction::LowerBetter => {
            let b = benchmark.filter(|b| *b > 0.0)?;
            Some(2.0 - value / b)
        }
    }
}

fn band_ratio(value: f64, low: f64, high: f64) -> f64 {
    let width = high - low;
    if width <= 0.0 {
        return if value == low { 1.2 } else { 0.8 };
    }
    let center = (low + high) / 2.0;
    if value >= low && value <= high {
        // 1.2 at the center, 1.0 at either edge.
        1.2 - 0.2 * ((value - center).abs() / (width / 2.0))
    } else {
        // 1.0 at the edge, 0.8 one band-width out, falling further beyond.
        let outside = if value < low { low - value } else { value - high };
        1.0 - 0.2 * (outside / width)
    }
}

pub(crate) fn rating_from_ratio(ratio: f64) -> Rating {
    if ratio >= 1.2 {
        Rating::Excellent
    } else if ratio >= 1.1 {
        Rating::VeryGood
    } else if ratio >= 1.0 {
        Rating::Good
    } else if ratio >= 0.8 {
        Rating::Acceptable
    } else {
        Rating::Poor
    }
}

pub(crate) fn risk_from_ratio(ratio: f64) -> RiskLevel {
    if ratio >= 1.0 {
        RiskLevel::Low
    } else if ratio >= 0.9 {
        RiskLevel::Medium
    } else if ratio >= 0.8 {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    }
}

/// Fixed-threshold fallback for metrics without a usable benchmark.
pub(crate) fn rating_from_bands(
    bands: &AbsoluteBands,
    direction: Direction,
    value: f64,
) -> Rating {
    let passes = |threshold: f64| match direction {
        Direction::LowerBetter => value <= threshold,
        _ => value >= threshold,
    };
    if passes(bands.excellent) {
        Rating::Excellent
    } else if passes(bands.very_good) {
        Rating::VeryGood
    } else if passes(bands.good) {
        Rating::Good
    } else if passes(bands.acceptable) {
        Rating::Acceptable
    } else {
        Rating::Poor
    }
}

/// Risk implied by a fixed-threshold rating. Coarser than the benchmark
/// path on purpose: absolute bands say nothing about distance.
pub(crate) fn risk_from_rating(rating: Rating) -> Option<RiskLevel> {
    match rating {
        Rating::Excellent | Rating::VeryGood | Rating::Good => Some(RiskLevel::Low),
        Rating::Acceptable => Some(RiskLevel::Medium),
        Rating::Poor => Some(RiskLevel::VeryHigh),
        Rating::Unrated => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_ratio_thresholds() {
        assert_eq!(rating_from_ratio(1.25), Rating::Excellent);
        assert_eq!(rating_from_ratio(1.2), Rating::Excellent);
        assert_eq!(rating_from_ratio(1.15), Rating::VeryGood);
        assert_eq!(rating_from_ratio(1.0), Rating::Good);
        assert_eq!(rating_from_ratio(0.9), Rating::Acceptable);
        assert_eq!(rating_from_ratio(0.79), Rating::Poor);
    }

    #[test]
    fn band_ratio_peaks_at_center_and_decays() {
        // Band 30..60: center 45 scores 1.2, edges score 1.0.
        assert!((band_ratio(45.0, 30.0, 60.0) - 1.2).abs() < 1e-12);
        assert!((band_ratio(30.0, 30.0, 60.0) - 1.0).abs() < 1e-12);
        assert!((band_ratio(60.0, 30.0, 60.0) - 1.0).abs() < 1e-12);
        // One band-width outside either edge scores 0.8.
        assert!((band_ratio(0.0, 30.0, 60.0) - 0.8).abs() < 1e-12);
        assert!((band_ratio(90.0, 30.0, 60.0) - 0.8).abs() < 1e-12);
        // Further out keeps falling.
        assert!(band_ratio(150.0, 30.0, 60.0) < 0.8);
    }

    #[test]
    fn risk_tracks_the_same_ratio() {
        assert_eq!(risk_from_ratio(1.05), RiskLevel::Low);
        assert_eq!(risk_from_ratio(0.95), RiskLevel::Medium);
        assert_eq!(risk_from_ratio(0.85), RiskLevel::High);
        assert_eq!(risk_from_ratio(0.5), RiskLevel::VeryHigh);
    }

    #[test]
    fn absolute_bands_respect_direction() {
        let bands = AbsoluteBands {
            excellent: 3.0,
            very_good: 2.7,
            good: 1.8,
            acceptable: 1.1,
        };
        assert_eq!(
            rating_from_bands(&bands, Direction::HigherBetter, 3.2),
            Rating::Excellent
        );
        assert_eq!(
            rating_from_bands(&bands, Direction::HigherBetter, 2.0),
            Rating::Good
        );
        assert_eq!(
            rating_from_bands(&bands, Direction::HigherBetter, 0.9),
            Rating::Poor
        );

        let lower = AbsoluteBands {
            excellent: 5.0,
            very_good: 10.0,
            good: 18.0,
            acceptable: 30.0,
        };
        assert_eq!(
            rating_from_bands(&lower, Direction::LowerBetter, 4.0),
            Rating::Excellent
        );
        assert_eq!(
            rating_from_bands(&lower, Direction::LowerBetter, 25.0),
            Rating::Acceptable
        );
    }
}
