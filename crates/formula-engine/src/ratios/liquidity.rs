use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("current_ratio", current_ratio);
    reg.insert("quick_ratio", quick_ratio);
    reg.insert("cash_ratio", cash_ratio);
    reg.insert("operating_cash_flow_ratio", operating_cash_flow_ratio);
    reg.insert("defensive_interval", defensive_interval);
    reg.insert("cash_to_current_assets", cash_to_current_assets);
    reg.insert("cash_coverage_of_payables", cash_coverage_of_payables);
    reg.insert("liquid_assets_ratio", liquid_assets_ratio);
    reg.insert("inventory_to_current_assets", inventory_to_current_assets);
    reg.insert("prepaid_to_current_assets", prepaid_to_current_assets);
}

fn current_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(CurrentAssets)?, input.req(CurrentLiabilities)?)
}

fn quick_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    let quick = input.req(CurrentAssets)? - input.req(Inventory)?;
    div(quick, input.req(CurrentLiabilities)?)
}

fn cash_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    let cash = input.req(CashAndEquivalents)? + input.opt(ShortTermInvestments).unwrap_or(0.0);
    div(cash, input.req(CurrentLiabilities)?)
}

fn operating_cash_flow_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(OperatingCashFlow)?, input.req(CurrentLiabilities)?)
}

fn defensive_interval(input: &FormulaInput) -> Result<f64, ComputationError> {
    let liquid = input.req(CashAndEquivalents)?
        + input.opt(ShortTermInvestments).unwrap_or(0.0)
        + input.req(AccountsReceivable)?;
    let daily_spend = (input.req(CostOfGoodsSold)? + input.req(OperatingExpenses)?) / 365.0;
    div(liquid, daily_spend)
}

fn cash_to_current_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(CashAndEquivalents)?, input.req(CurrentAssets)?)
}

fn cash_coverage_of_payables(input: &FormulaInput) -> Result<f64, ComputationError> {
    let cash = input.req(CashAndEquivalents)? + input.opt(ShortTermInvestments).unwrap_or(0.0);
    div(cash, input.req(AccountsPayable)?)
}

fn liquid_assets_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    let liquid = input.req(CashAndEquivalents)?
        + input.opt(ShortTermInvestments).unwrap_or(0.0)
        + input.req(AccountsReceivable)?;
    div(liquid, input.req(CurrentLiabilities)?)
}

fn inventory_to_current_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(Inventory)?, input.req(CurrentAssets)?)
}

fn prepaid_to_current_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(PrepaidExpenses)?, input.req(CurrentAssets)?)
}
