use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, not_meaningful, pct, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("dupont_return_on_equity", dupont_return_on_equity);
    reg.insert("dupont_return_on_assets", dupont_return_on_assets);
    reg.insert("dupont_five_factor_roe", dupont_five_factor_roe);
    reg.insert("degree_of_operating_leverage", degree_of_operating_leverage);
    reg.insert("degree_of_total_leverage", degree_of_total_leverage);
}

/// Net margin x asset turnover x equity multiplier.
fn dupont_return_on_equity(input: &FormulaInput) -> Result<f64, ComputationError> {
    let margin = div(input.req(NetIncome)?, input.req(Revenue)?)?;
    let turnover = div(input.req(Revenue)?, input.req(TotalAssets)?)?;
    let multiplier = div(input.req(TotalAssets)?, input.req(TotalEquity)?)?;
    Ok(pct(margin * turnover * multiplier))
}

/// Net margin x asset turnover.
fn dupont_return_on_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    let margin = div(input.req(NetIncome)?, input.req(Revenue)?)?;
    let turnover = div(input.req(Revenue)?, input.req(TotalAssets)?)?;
    Ok(pct(margin * turnover))
}

/// Tax burden x interest burden x operating margin x asset turnover x
/// equity multiplier.
fn dupont_five_factor_roe(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ebit = input.ebit()?;
    if ebit <= 0.0 {
        return Err(not_meaningful("non-positive operating profit"));
    }
    let pretax = input.req(PretaxIncome)?;
    if pretax <= 0.0 {
        return Err(not_meaningful("non-positive pretax income"));
    }
    let tax_burden = div(input.req(NetIncome)?, pretax)?;
    let interest_burden = div(pretax, ebit)?;
    let operating_margin = div(ebit, input.req(Revenue)?)?;
    let turnover = div(input.req(Revenue)?, input.req(TotalAssets)?)?;
    let multiplier = div(input.req(TotalAssets)?, input.req(TotalEquity)?)?;
    Ok(pct(
        tax_burden * interest_burden * operating_margin * turnover * multiplier,
    ))
}

/// Contribution margin over EBIT, approximated with gross profit.
fn degree_of_operating_leverage(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ebit = input.ebit()?;
    if ebit <= 0.0 {
        return Err(not_meaningful("non-positive operating profit"));
    }
    div(input.gross_profit()?, ebit)
}

fn degree_of_total_leverage(input: &FormulaInput) -> Result<f64, ComputationError> {
    let dol = input.dep("degree_of_operating_leverage")?;
    let ebit = input.ebit()?;
    let pretax = input.req(PretaxIncome)?;
    if pretax <= 0.0 {
        return Err(not_meaningful("non-positive pretax income"));
    }
    // Financial leverage degree is EBIT over pretax income.
    Ok(dol * div(ebit, pretax)?)
}
