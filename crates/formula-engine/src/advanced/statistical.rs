use std::collections::HashMap;

use analysis_core::{ComputationError, HistoricalPeriod};
use statrs::statistics::Statistics;

use crate::input::{div, not_meaningful, pct, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("revenue_volatility", revenue_volatility);
    reg.insert("earnings_volatility", earnings_volatility);
    reg.insert("revenue_trend_slope", revenue_trend_slope);
    reg.insert("earnings_trend_slope", earnings_trend_slope);
    reg.insert("revenue_cagr", revenue_cagr);
    reg.insert("earnings_cagr", earnings_cagr);
    reg.insert(
        "revenue_earnings_correlation",
        revenue_earnings_correlation,
    );
    reg.insert(
        "revenue_variation_coefficient",
        revenue_variation_coefficient,
    );
    reg.insert("cash_flow_stability", cash_flow_stability);
    reg.insert("margin_stability", margin_stability);
    reg.insert("growth_consistency", growth_consistency);
    reg.insert("earnings_predictability", earnings_predictability);
}

/// Chronological series of one historical field. Periods where the field
/// was not reported are skipped; too few surviving points is a declared
/// failure, not a silently shorter series.
pub(crate) fn series(
    input: &FormulaInput,
    required: usize,
    accessor: fn(&HistoricalPeriod) -> Option<f64>,
) -> Result<Vec<f64>, ComputationError> {
    let values: Vec<f64> = input
        .statement
        .history
        .iter()
        .filter_map(accessor)
        .collect();
    if values.len() < required {
        return Err(ComputationError::InsufficientHistory {
            required,
            available: values.len(),
        });
    }
    Ok(values)
}

/// Period-over-period growth in percent, skipping zero bases.
fn growth_series(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| pct((w[1] - w[0]) / w[0].abs()))
        .collect()
}

/// Ordinary least squares over the series index. Returns (slope, r2).
pub(crate) fn linear_trend(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;
    let mut ss_xy = 0.0;
    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        let dy = y - mean_y;
        ss_xy += dx * dy;
        ss_xx += dx * dx;
        ss_yy += dy * dy;
    }
    let slope = ss_xy / ss_xx;
    let r2 = if ss_yy == 0.0 {
        1.0
    } else {
        (ss_xy * ss_xy) / (ss_xx * ss_yy)
    };
    (slope, r2)
}

fn growth_volatility(values: &[f64]) -> Result<f64, ComputationError> {
    let growth = growth_series(values);
    if growth.len() < 2 {
        return Err(not_meaningful("too many zero-base periods"));
    }
    Ok(growth.as_slice().std_dev())
}

fn revenue_volatility(input: &FormulaInput) -> Result<f64, ComputationError> {
    growth_volatility(&series(input, 4, |p| p.revenue)?)
}

fn earnings_volatility(input: &FormulaInput) -> Result<f64, ComputationError> {
    growth_volatility(&series(input, 4, |p| p.net_income)?)
}

/// Trend slope normalized by the series mean, in percent per period.
fn trend_slope(values: &[f64]) -> Result<f64, ComputationError> {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    if mean == 0.0 {
        return Err(not_meaningful("zero-mean series"));
    }
    let (slope, _) = linear_trend(values);
    Ok(pct(slope / mean.abs()))
}

fn revenue_trend_slope(input: &FormulaInput) -> Result<f64, ComputationError> {
    trend_slope(&series(input, 3, |p| p.revenue)?)
}

fn earnings_trend_slope(input: &FormulaInput) -> Result<f64, ComputationError> {
    trend_slope(&series(input, 3, |p| p.net_income)?)
}

/// Compound annual growth over the series span; both endpoints must be
/// positive for the geometric form to hold.
fn cagr(values: &[f64]) -> Result<f64, ComputationError> {
    let first = values[0];
    let last = values[values.len() - 1];
    if first <= 0.0 || last <= 0.0 {
        return Err(not_meaningful("non-positive endpoint"));
    }
    let periods = (values.len() - 1) as f64;
    Ok(pct((last / first).powf(1.0 / periods) - 1.0))
}

fn revenue_cagr(input: &FormulaInput) -> Result<f64, ComputationError> {
    cagr(&series(input, 3, |p| p.revenue)?)
}

fn earnings_cagr(input: &FormulaInput) -> Result<f64, ComputationError> {
    cagr(&series(input, 3, |p| p.net_income)?)
}

fn revenue_earnings_correlation(input: &FormulaInput) -> Result<f64, ComputationError> {
    let pairs: Vec<(f64, f64)> = input
        .statement
        .history
        .iter()
        .filter_map(|p| Some((p.revenue?, p.net_income?)))
        .collect();
    if pairs.len() < 4 {
        return Err(ComputationError::InsufficientHistory {
            required: 4,
            available: pairs.len(),
        });
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let mut ss_xy = 0.0;
    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    for (x, y) in &pairs {
        ss_xy += (x - mean_x) * (y - mean_y);
        ss_xx += (x - mean_x) * (x - mean_x);
        ss_yy += (y - mean_y) * (y - mean_y);
    }
    if ss_xx == 0.0 || ss_yy == 0.0 {
        return Err(not_meaningful("constant series"));
    }
    Ok(ss_xy / (ss_xx * ss_yy).sqrt())
}

fn revenue_variation_coefficient(input: &FormulaInput) -> Result<f64, ComputationError> {
    let values = series(input, 4, |p| p.revenue)?;
    let slice = values.as_slice();
    let mean = slice.mean();
    if mean <= 0.0 {
        return Err(not_meaningful("non-positive mean revenue"));
    }
    Ok(pct(slice.std_dev() / mean))
}

/// One minus the variation coefficient of operating cash flow, clamped to
/// [0, 1]. Steady positive cash generation scores near 1.
fn cash_flow_stability(input: &FormulaInput) -> Result<f64, ComputationError> {
    let values = series(input, 4, |p| p.operating_cash_flow)?;
    let slice = values.as_slice();
    let mean = slice.mean();
    if mean == 0.0 {
        return Err(not_meaningful("zero-mean cash flow series"));
    }
    Ok((1.0 - slice.std_dev() / mean.abs()).clamp(0.0, 1.0))
}

/// Standard deviation of the net margin across periods, in percent points.
fn margin_stability(input: &FormulaInput) -> Result<f64, ComputationError> {
    let margins: Vec<f64> = input
        .statement
        .history
        .iter()
        .filter_map(|p| {
            let revenue = p.revenue?;
            let ni = p.net_income?;
            div(ni, revenue).ok().map(pct)
        })
        .collect();
    if margins.len() < 4 {
        return Err(ComputationError::InsufficientHistory {
            required: 4,
            available: margins.len(),
        });
    }
    Ok(margins.as_slice().std_dev())
}

/// Share of periods with positive revenue growth, in percent.
fn growth_consistency(input: &FormulaInput) -> Result<f64, ComputationError> {
    let values = series(input, 4, |p| p.revenue)?;
    let growth = growth_series(&values);
    if growth.is_empty() {
        return Err(not_meaningful("too many zero-base periods"));
    }
    let positive = growth.iter().filter(|g| **g > 0.0).count() as f64;
    Ok(pct(positive / growth.len() as f64))
}

/// R-squared of a linear fit on earnings: how much of the movement a
/// straight trend line explains.
fn earnings_predictability(input: &FormulaInput) -> Result<f64, ComputationError> {
    let values = series(input, 4, |p| p.net_income)?;
    let (_, r2) = linear_trend(&values);
    Ok(r2)
}
