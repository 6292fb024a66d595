use std::collections::HashMap;

use analysis_core::{ComputationError, HistoricalPeriod};

use crate::advanced::statistical::{linear_trend, series};
use crate::input::{div, not_meaningful, pct, FormulaInput};
use crate::FormulaFn;
use analysis_core::FieldRef::*;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("revenue_forecast", revenue_forecast);
    reg.insert("earnings_forecast", earnings_forecast);
    reg.insert(
        "operating_cash_flow_forecast",
        operating_cash_flow_forecast,
    );
    reg.insert("revenue_forecast_growth", revenue_forecast_growth);
    reg.insert("earnings_forecast_growth", earnings_forecast_growth);
    reg.insert("forecast_eps", forecast_eps);
    reg.insert("projected_return_on_equity", projected_return_on_equity);
    reg.insert("breakeven_revenue", breakeven_revenue);
    reg.insert("margin_of_safety", margin_of_safety);
    reg.insert("cash_runway", cash_runway);
}

/// Next-period value from a linear fit over the historical series.
fn project_next(
    input: &FormulaInput,
    accessor: fn(&HistoricalPeriod) -> Option<f64>,
) -> Result<f64, ComputationError> {
    let values = series(input, 3, accessor)?;
    let n = values.len() as f64;
    let (slope, _) = linear_trend(&values);
    let mean = values.iter().sum::<f64>() / n;
    let intercept = mean - slope * (n - 1.0) / 2.0;
    Ok(intercept + slope * n)
}

fn forecast_growth(
    input: &FormulaInput,
    accessor: fn(&HistoricalPeriod) -> Option<f64>,
) -> Result<f64, ComputationError> {
    let values = series(input, 3, accessor)?;
    let last = values[values.len() - 1];
    if last == 0.0 {
        return Err(not_meaningful("zero latest period"));
    }
    let next = project_next(input, accessor)?;
    Ok(pct((next - last) / last.abs()))
}

fn revenue_forecast(input: &FormulaInput) -> Result<f64, ComputationError> {
    project_next(input, |p| p.revenue)
}

fn earnings_forecast(input: &FormulaInput) -> Result<f64, ComputationError> {
    project_next(input, |p| p.net_income)
}

fn operating_cash_flow_forecast(input: &FormulaInput) -> Result<f64, ComputationError> {
    project_next(input, |p| p.operating_cash_flow)
}

fn revenue_forecast_growth(input: &FormulaInput) -> Result<f64, ComputationError> {
    forecast_growth(input, |p| p.revenue)
}

fn earnings_forecast_growth(input: &FormulaInput) -> Result<f64, ComputationError> {
    forecast_growth(input, |p| p.net_income)
}

fn forecast_eps(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(
        project_next(input, |p| p.net_income)?,
        input.req(SharesOutstanding)?,
    )
}

fn projected_return_on_equity(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(
        project_next(input, |p| p.net_income)?,
        input.req(TotalEquity)?,
    )?))
}

/// Revenue level at which gross profit just covers operating expenses.
fn breakeven_revenue(input: &FormulaInput) -> Result<f64, ComputationError> {
    let revenue = input.req(Revenue)?;
    let gross_margin = div(revenue - input.req(CostOfGoodsSold)?, revenue)?;
    if gross_margin <= 0.0 {
        return Err(not_meaningful("non-positive gross margin"));
    }
    Ok(input.req(OperatingExpenses)? / gross_margin)
}

fn margin_of_safety(input: &FormulaInput) -> Result<f64, ComputationError> {
    let revenue = input.req(Revenue)?;
    let breakeven = input.dep("breakeven_revenue")?;
    Ok(pct(div(revenue - breakeven, revenue)?))
}

/// Months of operating expenses covered by cash on hand, with the annual
/// expense base spread evenly.
fn cash_runway(input: &FormulaInput) -> Result<f64, ComputationError> {
    let monthly = input.req(OperatingExpenses)? / 12.0;
    div(input.req(CashAndEquivalents)?, monthly)
}
