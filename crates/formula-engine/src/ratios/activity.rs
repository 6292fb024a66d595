use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, not_meaningful, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("inventory_turnover", inventory_turnover);
    reg.insert("receivables_turnover", receivables_turnover);
    reg.insert("payables_turnover", payables_turnover);
    reg.insert("asset_turnover", asset_turnover);
    reg.insert("fixed_asset_turnover", fixed_asset_turnover);
    reg.insert("equity_turnover", equity_turnover);
    reg.insert("working_capital_turnover", working_capital_turnover);
    reg.insert("current_asset_turnover", current_asset_turnover);
    reg.insert("non_current_asset_turnover", non_current_asset_turnover);
    reg.insert("capital_intensity", capital_intensity);
    reg.insert("days_sales_inventory", days_sales_inventory);
    reg.insert("days_sales_outstanding", days_sales_outstanding);
    reg.insert("days_payables_outstanding", days_payables_outstanding);
    reg.insert("operating_cycle", operating_cycle);
    reg.insert("cash_conversion_cycle", cash_conversion_cycle);
}

fn inventory_turnover(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(CostOfGoodsSold)?, input.req(Inventory)?)
}

fn receivables_turnover(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(Revenue)?, input.req(AccountsReceivable)?)
}

fn payables_turnover(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(CostOfGoodsSold)?, input.req(AccountsPayable)?)
}

fn asset_turnover(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(Revenue)?, input.req(TotalAssets)?)
}

fn fixed_asset_turnover(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(Revenue)?, input.req(PpeNet)?)
}

fn equity_turnover(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(Revenue)?, input.req(TotalEquity)?)
}

fn working_capital_turnover(input: &FormulaInput) -> Result<f64, ComputationError> {
    let wc = input.req(CurrentAssets)? - input.req(CurrentLiabilities)?;
    if wc <= 0.0 {
        return Err(not_meaningful("non-positive working capital"));
    }
    div(input.req(Revenue)?, wc)
}

fn current_asset_turnover(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(Revenue)?, input.req(CurrentAssets)?)
}

fn non_current_asset_turnover(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(Revenue)?, input.req(NonCurrentAssets)?)
}

fn capital_intensity(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(TotalAssets)?, input.req(Revenue)?)
}

// Day-count metrics read the turnover computed earlier in the same batch;
// a failed turnover surfaces here as DependencyUnavailable.

fn days_sales_inventory(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(365.0, input.dep("inventory_turnover")?)
}

fn days_sales_outstanding(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(365.0, input.dep("receivables_turnover")?)
}

fn days_payables_outstanding(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(365.0, input.dep("payables_turnover")?)
}

fn operating_cycle(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(input.dep("days_sales_inventory")? + input.dep("days_sales_outstanding")?)
}

fn cash_conversion_cycle(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(input.dep("days_sales_inventory")? + input.dep("days_sales_outstanding")?
        - input.dep("days_payables_outstanding")?)
}
