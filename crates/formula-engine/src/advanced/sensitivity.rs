use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, not_meaningful, pct, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("interest_rate_sensitivity", interest_rate_sensitivity);
    reg.insert("cost_inflation_sensitivity", cost_inflation_sensitivity);
    reg.insert(
        "receivables_default_sensitivity",
        receivables_default_sensitivity,
    );
    reg.insert(
        "inventory_writedown_sensitivity",
        inventory_writedown_sensitivity,
    );
    reg.insert("revenue_shock_headroom", revenue_shock_headroom);
}

/// Earnings hit from a 100bp rate rise on total debt, as a share of net
/// income.
fn interest_rate_sensitivity(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ni = input.req(NetIncome)?;
    if ni == 0.0 {
        return Err(not_meaningful("zero net income"));
    }
    let shock = input.total_debt()? * 0.01;
    Ok(pct(shock / ni.abs()))
}

/// Cost base relative to operating profit: the EBIT hit, in percent, from
/// each 1% of cost inflation.
fn cost_inflation_sensitivity(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ebit = input.ebit()?;
    if ebit <= 0.0 {
        return Err(not_meaningful("non-positive operating profit"));
    }
    let cost_base = input.req(CostOfGoodsSold)? + input.req(OperatingExpenses)?;
    div(cost_base, ebit)
}

/// Receivables at risk relative to net income.
fn receivables_default_sensitivity(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ni = input.req(NetIncome)?;
    if ni <= 0.0 {
        return Err(not_meaningful("non-positive net income"));
    }
    div(input.req(AccountsReceivable)?, ni)
}

/// Inventory at risk relative to book equity.
fn inventory_writedown_sensitivity(input: &FormulaInput) -> Result<f64, ComputationError> {
    let equity = input.req(TotalEquity)?;
    if equity <= 0.0 {
        return Err(not_meaningful("non-positive equity"));
    }
    div(input.req(Inventory)?, equity)
}

/// Operating profit relative to the gross profit lost in a 10% revenue
/// shock; above 1 means EBIT survives the shock.
fn revenue_shock_headroom(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ebit = input.ebit()?;
    let revenue = input.req(Revenue)?;
    let gross_profit = revenue - input.req(CostOfGoodsSold)?;
    if gross_profit <= 0.0 {
        return Err(not_meaningful("non-positive gross profit"));
    }
    div(ebit, 0.10 * gross_profit)
}
