use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, pct, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("current_assets_to_total", current_assets_to_total);
    reg.insert("non_current_assets_to_total", non_current_assets_to_total);
    reg.insert("inventory_to_total_assets", inventory_to_total_assets);
    reg.insert("receivables_to_total_assets", receivables_to_total_assets);
    reg.insert("cash_to_total_assets", cash_to_total_assets);
    reg.insert("ppe_to_total_assets", ppe_to_total_assets);
    reg.insert("intangibles_to_total_assets", intangibles_to_total_assets);
    reg.insert("current_liabilities_to_total", current_liabilities_to_total);
    reg.insert(
        "non_current_liabilities_to_total",
        non_current_liabilities_to_total,
    );
    reg.insert("retained_earnings_to_equity", retained_earnings_to_equity);
    reg.insert("short_term_debt_share", short_term_debt_share);
    reg.insert("fixed_to_current_assets", fixed_to_current_assets);
    reg.insert("working_capital_structure", working_capital_structure);
}

fn share_of_assets(
    input: &FormulaInput,
    field: analysis_core::FieldRef,
) -> Result<f64, ComputationError> {
    Ok(pct(div(input.req(field)?, input.req(TotalAssets)?)?))
}

fn current_assets_to_total(input: &FormulaInput) -> Result<f64, ComputationError> {
    share_of_assets(input, CurrentAssets)
}

fn non_current_assets_to_total(input: &FormulaInput) -> Result<f64, ComputationError> {
    share_of_assets(input, NonCurrentAssets)
}

fn inventory_to_total_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    share_of_assets(input, Inventory)
}

fn receivables_to_total_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    share_of_assets(input, AccountsReceivable)
}

fn cash_to_total_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    share_of_assets(input, CashAndEquivalents)
}

fn ppe_to_total_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    share_of_assets(input, PpeNet)
}

fn intangibles_to_total_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    share_of_assets(input, IntangibleAssets)
}

fn current_liabilities_to_total(input: &FormulaInput) -> Result<f64, ComputationError> {
    share_of_assets(input, CurrentLiabilities)
}

fn non_current_liabilities_to_total(input: &FormulaInput) -> Result<f64, ComputationError> {
    share_of_assets(input, NonCurrentLiabilities)
}

fn retained_earnings_to_equity(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(
        input.req(RetainedEarnings)?,
        input.req(TotalEquity)?,
    )?))
}

fn short_term_debt_share(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.req(ShortTermDebt)?, input.total_debt()?)?))
}

fn fixed_to_current_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(NonCurrentAssets)?, input.req(CurrentAssets)?)
}

fn working_capital_structure(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ca = input.req(CurrentAssets)?;
    let wc = ca - input.req(CurrentLiabilities)?;
    Ok(pct(div(wc, ca)?))
}
