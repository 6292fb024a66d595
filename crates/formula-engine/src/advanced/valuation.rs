use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::advanced::statistical::series;
use crate::input::{div, not_meaningful, pct, FormulaInput};
use crate::FormulaFn;

const DISCOUNT_RATE: f64 = 0.10;
const TERMINAL_GROWTH: f64 = 0.025;
const EQUITY_COST: f64 = 0.09;
const DCF_YEARS: u32 = 5;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("graham_number", graham_number);
    reg.insert("graham_upside", graham_upside);
    reg.insert("discounted_cash_flow_value", discounted_cash_flow_value);
    reg.insert("discounted_cash_flow_upside", discounted_cash_flow_upside);
    reg.insert("gordon_growth_value", gordon_growth_value);
    reg.insert("gordon_growth_upside", gordon_growth_upside);
    reg.insert("earnings_power_value", earnings_power_value);
    reg.insert("residual_income", residual_income);
}

fn upside(input: &FormulaInput, value_id: &str) -> Result<f64, ComputationError> {
    let price = input.req(SharePrice)?;
    if price <= 0.0 {
        return Err(not_meaningful("non-positive share price"));
    }
    let value = input.dep(value_id)?;
    Ok(pct((value - price) / price))
}

fn graham_number(input: &FormulaInput) -> Result<f64, ComputationError> {
    let eps = input.eps()?;
    let bvps = input.book_value_per_share()?;
    if eps <= 0.0 || bvps <= 0.0 {
        return Err(not_meaningful("non-positive earnings or book value"));
    }
    Ok((22.5 * eps * bvps).sqrt())
}

fn graham_upside(input: &FormulaInput) -> Result<f64, ComputationError> {
    upside(input, "graham_number")
}

/// Five-year two-stage free cash flow model. The growth stage reuses the
/// historical revenue CAGR, clamped to a conservative band; without enough
/// history a flat 4% is assumed.
fn discounted_cash_flow_value(input: &FormulaInput) -> Result<f64, ComputationError> {
    let fcf = input.req(OperatingCashFlow)? - input.req(CapitalExpenditures)?.abs();
    if fcf <= 0.0 {
        return Err(not_meaningful("non-positive free cash flow"));
    }
    let shares = input.req(SharesOutstanding)?;
    if shares <= 0.0 {
        return Err(not_meaningful("non-positive share count"));
    }
    let growth = series(input, 3, |p| p.revenue)
        .ok()
        .and_then(|values| {
            let first = values[0];
            let last = values[values.len() - 1];
            if first <= 0.0 || last <= 0.0 {
                return None;
            }
            let periods = (values.len() - 1) as f64;
            Some((last / first).powf(1.0 / periods) - 1.0)
        })
        .map(|g| g.clamp(0.0, 0.12))
        .unwrap_or(0.04);

    let mut value = 0.0;
    let mut cash = fcf;
    for year in 1..=DCF_YEARS {
        cash *= 1.0 + growth;
        value += cash / (1.0 + DISCOUNT_RATE).powi(year as i32);
    }
    let terminal = cash * (1.0 + TERMINAL_GROWTH) / (DISCOUNT_RATE - TERMINAL_GROWTH);
    value += terminal / (1.0 + DISCOUNT_RATE).powi(DCF_YEARS as i32);
    Ok(value / shares)
}

fn discounted_cash_flow_upside(input: &FormulaInput) -> Result<f64, ComputationError> {
    upside(input, "discounted_cash_flow_value")
}

fn gordon_growth_value(input: &FormulaInput) -> Result<f64, ComputationError> {
    let dps = input.req(DividendsPerShare)?;
    if dps <= 0.0 {
        return Err(not_meaningful("no dividend"));
    }
    let prior = input.req(PriorDividendsPerShare)?;
    let growth = if prior > 0.0 {
        ((dps - prior) / prior).clamp(0.0, 0.06)
    } else {
        0.0
    };
    // Growth must stay below the cost of equity for the perpetuity to
    // converge; the clamp above guarantees it.
    Ok(dps * (1.0 + growth) / (EQUITY_COST - growth))
}

fn gordon_growth_upside(input: &FormulaInput) -> Result<f64, ComputationError> {
    upside(input, "gordon_growth_value")
}

/// No-growth value of current after-tax operating earnings.
fn earnings_power_value(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ebit = input.ebit()?;
    if ebit <= 0.0 {
        return Err(not_meaningful("non-positive operating profit"));
    }
    let nopat = ebit * (1.0 - input.tax_rate()?);
    div(nopat / EQUITY_COST, input.req(SharesOutstanding)?)
}

/// Earnings left after charging book equity its cost.
fn residual_income(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(input.req(NetIncome)? - EQUITY_COST * input.req(TotalEquity)?)
}
