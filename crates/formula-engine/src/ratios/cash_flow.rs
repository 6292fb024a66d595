use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, not_meaningful, pct, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("operating_cash_flow_margin", operating_cash_flow_margin);
    reg.insert("cash_flow_to_net_income", cash_flow_to_net_income);
    reg.insert("free_cash_flow_margin", free_cash_flow_margin);
    reg.insert("capex_to_revenue", capex_to_revenue);
    reg.insert("capex_to_depreciation", capex_to_depreciation);
    reg.insert("cash_flow_to_debt", cash_flow_to_debt);
    reg.insert("free_cash_flow_to_operating", free_cash_flow_to_operating);
    reg.insert("dividend_cash_coverage", dividend_cash_coverage);
    reg.insert("cash_flow_adequacy", cash_flow_adequacy);
    reg.insert(
        "operating_cash_flow_per_share",
        operating_cash_flow_per_share,
    );
    reg.insert("free_cash_flow_yield", free_cash_flow_yield);
    reg.insert("external_financing_ratio", external_financing_ratio);
}

fn operating_cash_flow_margin(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(
        input.req(OperatingCashFlow)?,
        input.req(Revenue)?,
    )?))
}

fn cash_flow_to_net_income(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ni = input.req(NetIncome)?;
    if ni <= 0.0 {
        return Err(not_meaningful("non-positive net income"));
    }
    div(input.req(OperatingCashFlow)?, ni)
}

fn free_cash_flow_margin(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.free_cash_flow()?, input.req(Revenue)?)?))
}

// Capex and dividends are reported as outflows by some sources; use the
// magnitude so the ratio is sign-independent.

fn capex_to_revenue(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(
        input.req(CapitalExpenditures)?.abs(),
        input.req(Revenue)?,
    )?))
}

fn capex_to_depreciation(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(
        input.req(CapitalExpenditures)?.abs(),
        input.req(DepreciationAmortization)?,
    )
}

fn cash_flow_to_debt(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(OperatingCashFlow)?, input.total_debt()?)
}

fn free_cash_flow_to_operating(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.free_cash_flow()?, input.req(OperatingCashFlow)?)
}

fn dividend_cash_coverage(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(
        input.req(OperatingCashFlow)?,
        input.req(DividendsPaid)?.abs(),
    )
}

fn cash_flow_adequacy(input: &FormulaInput) -> Result<f64, ComputationError> {
    let outflows = input.req(CapitalExpenditures)?.abs() + input.req(DividendsPaid)?.abs();
    div(input.req(OperatingCashFlow)?, outflows)
}

fn operating_cash_flow_per_share(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(
        input.req(OperatingCashFlow)?,
        input.req(SharesOutstanding)?,
    )
}

fn free_cash_flow_yield(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.free_cash_flow()?, input.market_cap()?)?))
}

fn external_financing_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(
        input.req(FinancingCashFlow)?.abs(),
        input.req(Revenue)?,
    )?))
}
