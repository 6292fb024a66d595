use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("debt_ratio", debt_ratio);
    reg.insert("debt_to_equity", debt_to_equity);
    reg.insert("long_term_debt_to_equity", long_term_debt_to_equity);
    reg.insert("equity_ratio", equity_ratio);
    reg.insert("equity_multiplier", equity_multiplier);
    reg.insert("interest_coverage", interest_coverage);
    reg.insert("cash_interest_coverage", cash_interest_coverage);
    reg.insert("debt_service_coverage", debt_service_coverage);
    reg.insert("financial_leverage_degree", financial_leverage_degree);
    reg.insert("capitalization_ratio", capitalization_ratio);
    reg.insert("total_debt_to_ebitda", total_debt_to_ebitda);
    reg.insert("fixed_assets_to_equity", fixed_assets_to_equity);
    reg.insert(
        "current_liabilities_to_total_debt",
        current_liabilities_to_total_debt,
    );
    reg.insert("self_financing_ratio", self_financing_ratio);
    reg.insert(
        "non_current_liabilities_to_assets",
        non_current_liabilities_to_assets,
    );
}

fn debt_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(TotalLiabilities)?, input.req(TotalAssets)?)
}

fn debt_to_equity(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(TotalLiabilities)?, input.req(TotalEquity)?)
}

fn long_term_debt_to_equity(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(LongTermDebt)?, input.req(TotalEquity)?)
}

fn equity_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(TotalEquity)?, input.req(TotalAssets)?)
}

fn equity_multiplier(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(TotalAssets)?, input.req(TotalEquity)?)
}

fn interest_coverage(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.ebit()?, input.req(InterestExpense)?)
}

fn cash_interest_coverage(input: &FormulaInput) -> Result<f64, ComputationError> {
    let interest = input.req(InterestExpense)?;
    div(input.req(OperatingCashFlow)? + interest, interest)
}

fn debt_service_coverage(input: &FormulaInput) -> Result<f64, ComputationError> {
    let service = input.req(InterestExpense)? + input.opt(ShortTermDebt).unwrap_or(0.0);
    div(input.ebitda()?, service)
}

fn financial_leverage_degree(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ebit = input.ebit()?;
    div(ebit, ebit - input.req(InterestExpense)?)
}

fn capitalization_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ltd = input.req(LongTermDebt)?;
    div(ltd, ltd + input.req(TotalEquity)?)
}

fn total_debt_to_ebitda(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.total_debt()?, input.ebitda()?)
}

fn fixed_assets_to_equity(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(PpeNet)?, input.req(TotalEquity)?)
}

fn current_liabilities_to_total_debt(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(CurrentLiabilities)?, input.req(TotalLiabilities)?)
}

fn self_financing_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(RetainedEarnings)?, input.req(TotalAssets)?)
}

fn non_current_liabilities_to_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(NonCurrentLiabilities)?, input.req(TotalAssets)?)
}
