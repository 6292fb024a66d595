use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::{self, *};

use crate::input::{div, not_meaningful, pct, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("revenue_growth", revenue_growth);
    reg.insert("net_income_growth", net_income_growth);
    reg.insert("operating_income_growth", operating_income_growth);
    reg.insert("total_asset_growth", total_asset_growth);
    reg.insert("equity_growth", equity_growth);
    reg.insert("eps_growth", eps_growth);
    reg.insert("dividend_growth", dividend_growth);
    reg.insert("operating_cash_flow_growth", operating_cash_flow_growth);
    reg.insert("sustainable_growth_rate", sustainable_growth_rate);
    reg.insert("internal_growth_rate", internal_growth_rate);
}

/// Period-over-period change in percent. The prior value's magnitude is
/// the base so a loss-to-profit swing still reads as an improvement.
fn growth_pct(
    input: &FormulaInput,
    current: FieldRef,
    prior: FieldRef,
) -> Result<f64, ComputationError> {
    let current = input.req(current)?;
    let prior = input.req(prior)?;
    Ok(pct(div(current - prior, prior.abs())?))
}

fn revenue_growth(input: &FormulaInput) -> Result<f64, ComputationError> {
    growth_pct(input, Revenue, PriorRevenue)
}

fn net_income_growth(input: &FormulaInput) -> Result<f64, ComputationError> {
    growth_pct(input, NetIncome, PriorNetIncome)
}

fn operating_income_growth(input: &FormulaInput) -> Result<f64, ComputationError> {
    growth_pct(input, OperatingIncome, PriorOperatingIncome)
}

fn total_asset_growth(input: &FormulaInput) -> Result<f64, ComputationError> {
    growth_pct(input, TotalAssets, PriorTotalAssets)
}

fn equity_growth(input: &FormulaInput) -> Result<f64, ComputationError> {
    growth_pct(input, TotalEquity, PriorTotalEquity)
}

fn eps_growth(input: &FormulaInput) -> Result<f64, ComputationError> {
    // EPS may be reported or derived from net income and share count.
    let current = input.eps()?;
    let prior = input.req(PriorEps)?;
    Ok(pct(div(current - prior, prior.abs())?))
}

fn dividend_growth(input: &FormulaInput) -> Result<f64, ComputationError> {
    growth_pct(input, DividendsPerShare, PriorDividendsPerShare)
}

fn operating_cash_flow_growth(input: &FormulaInput) -> Result<f64, ComputationError> {
    growth_pct(input, OperatingCashFlow, PriorOperatingCashFlow)
}

fn retention_rate(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ni = input.req(NetIncome)?;
    if ni <= 0.0 {
        return Err(not_meaningful("non-positive net income"));
    }
    let dividends = input.opt(DividendsPaid).map(f64::abs).unwrap_or(0.0);
    Ok((1.0 - dividends / ni).clamp(0.0, 1.0))
}

fn sustainable_growth_rate(input: &FormulaInput) -> Result<f64, ComputationError> {
    let roe = div(input.req(NetIncome)?, input.req(TotalEquity)?)?;
    Ok(pct(roe * retention_rate(input)?))
}

fn internal_growth_rate(input: &FormulaInput) -> Result<f64, ComputationError> {
    let roa = div(input.req(NetIncome)?, input.req(TotalAssets)?)?;
    let b = retention_rate(input)?;
    let denom = 1.0 - roa * b;
    if denom <= 0.0 {
        return Err(not_meaningful("retained return exceeds asset base"));
    }
    Ok(pct(roa * b / denom))
}
