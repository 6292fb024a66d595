use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, not_meaningful, pct, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("ebitda_interest_coverage", ebitda_interest_coverage);
    reg.insert("net_debt_to_ebitda", net_debt_to_ebitda);
    reg.insert(
        "funds_from_operations_to_debt",
        funds_from_operations_to_debt,
    );
    reg.insert("debt_to_tangible_net_worth", debt_to_tangible_net_worth);
    reg.insert("short_term_debt_coverage", short_term_debt_coverage);
    reg.insert("equity_to_debt", equity_to_debt);
    reg.insert("financial_expense_ratio", financial_expense_ratio);
    reg.insert("net_debt_to_equity", net_debt_to_equity);
    reg.insert("debt_service_cash_coverage", debt_service_cash_coverage);
    reg.insert("interest_to_ebitda", interest_to_ebitda);
}

fn ebitda_interest_coverage(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.ebitda()?, input.req(InterestExpense)?)
}

fn net_debt_to_ebitda(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ebitda = input.ebitda()?;
    if ebitda <= 0.0 {
        return Err(not_meaningful("non-positive EBITDA"));
    }
    div(input.net_debt()?, ebitda)
}

fn funds_from_operations_to_debt(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ffo = input.req(NetIncome)? + input.req(DepreciationAmortization)?;
    div(ffo, input.total_debt()?)
}

fn debt_to_tangible_net_worth(input: &FormulaInput) -> Result<f64, ComputationError> {
    let tangible = input.req(TotalEquity)?
        - input.opt(IntangibleAssets).unwrap_or(0.0)
        - input.opt(Goodwill).unwrap_or(0.0);
    if tangible <= 0.0 {
        return Err(not_meaningful("non-positive tangible net worth"));
    }
    div(input.req(TotalLiabilities)?, tangible)
}

fn short_term_debt_coverage(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(OperatingCashFlow)?, input.req(ShortTermDebt)?)
}

fn equity_to_debt(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(TotalEquity)?, input.req(TotalLiabilities)?)
}

fn financial_expense_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.req(InterestExpense)?, input.req(Revenue)?)?))
}

fn net_debt_to_equity(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.net_debt()?, input.req(TotalEquity)?)
}

fn debt_service_cash_coverage(input: &FormulaInput) -> Result<f64, ComputationError> {
    let service = input.req(InterestExpense)? + input.opt(ShortTermDebt).unwrap_or(0.0);
    div(input.req(OperatingCashFlow)?, service)
}

fn interest_to_ebitda(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ebitda = input.ebitda()?;
    if ebitda <= 0.0 {
        return Err(not_meaningful("non-positive EBITDA"));
    }
    Ok(pct(div(input.req(InterestExpense)?, ebitda)?))
}
