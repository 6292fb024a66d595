use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("altman_z_score", altman_z_score);
    reg.insert("altman_z_prime_score", altman_z_prime_score);
    reg.insert("altman_z_double_prime_score", altman_z_double_prime_score);
    reg.insert("springate_score", springate_score);
    reg.insert("taffler_score", taffler_score);
    reg.insert("zmijewski_score", zmijewski_score);
    reg.insert("ohlson_o_score", ohlson_o_score);
    reg.insert("grover_score", grover_score);
}

fn working_capital_to_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    let wc = input.req(CurrentAssets)? - input.req(CurrentLiabilities)?;
    div(wc, input.req(TotalAssets)?)
}

/// Altman (1968), public manufacturing form. Market value of equity falls
/// back to book equity when no market data is supplied.
fn altman_z_score(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ta = input.req(TotalAssets)?;
    let x1 = working_capital_to_assets(input)?;
    let x2 = div(input.req(RetainedEarnings)?, ta)?;
    let x3 = div(input.ebit()?, ta)?;
    let equity_value = input
        .statement
        .market_cap()
        .or(input.opt(TotalEquity))
        .ok_or(ComputationError::MissingInput(TotalEquity))?;
    let x4 = div(equity_value, input.req(TotalLiabilities)?)?;
    let x5 = div(input.req(Revenue)?, ta)?;
    Ok(1.2 * x1 + 1.4 * x2 + 3.3 * x3 + 0.6 * x4 + 1.0 * x5)
}

/// Altman Z' (1983), private-firm form with book equity.
fn altman_z_prime_score(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ta = input.req(TotalAssets)?;
    let x1 = working_capital_to_assets(input)?;
    let x2 = div(input.req(RetainedEarnings)?, ta)?;
    let x3 = div(input.ebit()?, ta)?;
    let x4 = div(input.req(TotalEquity)?, input.req(TotalLiabilities)?)?;
    let x5 = div(input.req(Revenue)?, ta)?;
    Ok(0.717 * x1 + 0.847 * x2 + 3.107 * x3 + 0.420 * x4 + 0.998 * x5)
}

/// Altman Z'' (1995), non-manufacturing / emerging-market form.
fn altman_z_double_prime_score(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ta = input.req(TotalAssets)?;
    let x1 = working_capital_to_assets(input)?;
    let x2 = div(input.req(RetainedEarnings)?, ta)?;
    let x3 = div(input.ebit()?, ta)?;
    let x4 = div(input.req(TotalEquity)?, input.req(TotalLiabilities)?)?;
    Ok(6.56 * x1 + 3.26 * x2 + 6.72 * x3 + 1.05 * x4)
}

fn springate_score(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ta = input.req(TotalAssets)?;
    let a = working_capital_to_assets(input)?;
    let b = div(input.ebit()?, ta)?;
    let c = div(input.req(PretaxIncome)?, input.req(CurrentLiabilities)?)?;
    let d = div(input.req(Revenue)?, ta)?;
    Ok(1.03 * a + 3.07 * b + 0.66 * c + 0.4 * d)
}

fn taffler_score(input: &FormulaInput) -> Result<f64, ComputationError> {
    let x1 = div(input.req(PretaxIncome)?, input.req(CurrentLiabilities)?)?;
    let x2 = div(input.req(CurrentAssets)?, input.req(TotalLiabilities)?)?;
    let x3 = div(input.req(CurrentLiabilities)?, input.req(TotalAssets)?)?;
    let x4 = div(input.req(Revenue)?, input.req(TotalAssets)?)?;
    Ok(0.53 * x1 + 0.13 * x2 + 0.18 * x3 + 0.16 * x4)
}

fn zmijewski_score(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ta = input.req(TotalAssets)?;
    let roa = div(input.req(NetIncome)?, ta)?;
    let leverage = div(input.req(TotalLiabilities)?, ta)?;
    let liquidity = div(input.req(CurrentAssets)?, input.req(CurrentLiabilities)?)?;
    Ok(-4.336 - 4.513 * roa + 5.679 * leverage + 0.004 * liquidity)
}

fn ohlson_o_score(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ta = input.req(TotalAssets)?;
    let tl = input.req(TotalLiabilities)?;
    let ni = input.req(NetIncome)?;
    let prior_ni = input.req(PriorNetIncome)?;
    if ta <= 0.0 {
        return Err(ComputationError::NotMeaningful(
            "non-positive total assets".to_string(),
        ));
    }
    let size = ta.ln();
    let wc_ta = working_capital_to_assets(input)?;
    let cl_ca = div(input.req(CurrentLiabilities)?, input.req(CurrentAssets)?)?;
    let ni_ta = div(ni, ta)?;
    let ffo_tl = div(input.req(OperatingCashFlow)?, tl)?;
    let insolvent = if tl > ta { 1.0 } else { 0.0 };
    let two_year_loss = if ni < 0.0 && prior_ni < 0.0 { 1.0 } else { 0.0 };
    let denom = ni.abs() + prior_ni.abs();
    let delta_ni = if denom == 0.0 {
        0.0
    } else {
        (ni - prior_ni) / denom
    };
    Ok(-1.32 - 0.407 * size + 6.03 * div(tl, ta)? - 1.43 * wc_ta + 0.0757 * cl_ca
        - 1.72 * insolvent
        - 2.37 * ni_ta
        - 1.83 * ffo_tl
        + 0.285 * two_year_loss
        - 0.521 * delta_ni)
}

fn grover_score(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ta = input.req(TotalAssets)?;
    let x1 = working_capital_to_assets(input)?;
    let x3 = div(input.ebit()?, ta)?;
    let roa = div(input.req(NetIncome)?, ta)?;
    Ok(1.650 * x1 + 3.404 * x3 - 0.016 * roa + 0.057)
}
