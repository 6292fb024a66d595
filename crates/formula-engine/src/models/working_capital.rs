use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, not_meaningful, pct, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("net_working_capital", net_working_capital);
    reg.insert("working_capital_to_assets", working_capital_to_assets);
    reg.insert("working_capital_to_revenue", working_capital_to_revenue);
    reg.insert("inventory_to_working_capital", inventory_to_working_capital);
    reg.insert(
        "receivables_to_working_capital",
        receivables_to_working_capital,
    );
    reg.insert("cash_to_working_capital", cash_to_working_capital);
    reg.insert("short_term_financing_ratio", short_term_financing_ratio);
    reg.insert("payables_to_inventory", payables_to_inventory);
    reg.insert("own_working_capital", own_working_capital);
    reg.insert(
        "own_working_capital_to_inventory",
        own_working_capital_to_inventory,
    );
    reg.insert("equity_maneuverability", equity_maneuverability);
    reg.insert("receivables_to_payables", receivables_to_payables);
}

fn working_capital(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(input.req(CurrentAssets)? - input.req(CurrentLiabilities)?)
}

/// Working capital that must be positive to serve as a denominator.
fn positive_working_capital(input: &FormulaInput) -> Result<f64, ComputationError> {
    let wc = working_capital(input)?;
    if wc <= 0.0 {
        return Err(not_meaningful("non-positive working capital"));
    }
    Ok(wc)
}

fn net_working_capital(input: &FormulaInput) -> Result<f64, ComputationError> {
    working_capital(input)
}

fn working_capital_to_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(working_capital(input)?, input.req(TotalAssets)?)?))
}

fn working_capital_to_revenue(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(working_capital(input)?, input.req(Revenue)?)?))
}

fn inventory_to_working_capital(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(Inventory)?, positive_working_capital(input)?)
}

fn receivables_to_working_capital(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(
        input.req(AccountsReceivable)?,
        positive_working_capital(input)?,
    )
}

fn cash_to_working_capital(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(
        input.req(CashAndEquivalents)?,
        positive_working_capital(input)?,
    )
}

fn short_term_financing_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(CurrentLiabilities)?, input.req(CurrentAssets)?)
}

fn payables_to_inventory(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(AccountsPayable)?, input.req(Inventory)?)
}

/// Long-term capital left after funding non-current assets.
fn own_working_capital(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(input.req(TotalEquity)? + input.req(NonCurrentLiabilities)? - input.req(NonCurrentAssets)?)
}

fn own_working_capital_to_inventory(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.dep("own_working_capital")?, input.req(Inventory)?)
}

fn equity_maneuverability(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.dep("own_working_capital")?, input.req(TotalEquity)?)
}

fn receivables_to_payables(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(AccountsReceivable)?, input.req(AccountsPayable)?)
}
