use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, not_meaningful, pct, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("gross_margin", gross_margin);
    reg.insert("operating_margin", operating_margin);
    reg.insert("net_margin", net_margin);
    reg.insert("ebitda_margin", ebitda_margin);
    reg.insert("pretax_margin", pretax_margin);
    reg.insert("return_on_assets", return_on_assets);
    reg.insert("return_on_equity", return_on_equity);
    reg.insert("return_on_capital_employed", return_on_capital_employed);
    reg.insert("return_on_invested_capital", return_on_invested_capital);
    reg.insert("return_on_fixed_assets", return_on_fixed_assets);
    reg.insert("operating_return_on_assets", operating_return_on_assets);
    reg.insert("cash_return_on_assets", cash_return_on_assets);
    reg.insert("cost_of_goods_ratio", cost_of_goods_ratio);
    reg.insert("operating_expense_ratio", operating_expense_ratio);
    reg.insert("sga_ratio", sga_ratio);
    reg.insert("effective_tax_ratio", effective_tax_ratio);
    reg.insert("interest_burden", interest_burden);
    reg.insert("tax_burden", tax_burden);
    reg.insert("revenue_per_share", revenue_per_share);
    reg.insert("gross_profit_to_assets", gross_profit_to_assets);
}

fn gross_margin(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.gross_profit()?, input.req(Revenue)?)?))
}

fn operating_margin(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.req(OperatingIncome)?, input.req(Revenue)?)?))
}

fn net_margin(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.req(NetIncome)?, input.req(Revenue)?)?))
}

fn ebitda_margin(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.ebitda()?, input.req(Revenue)?)?))
}

fn pretax_margin(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.req(PretaxIncome)?, input.req(Revenue)?)?))
}

fn return_on_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.req(NetIncome)?, input.req(TotalAssets)?)?))
}

fn return_on_equity(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.req(NetIncome)?, input.req(TotalEquity)?)?))
}

fn return_on_capital_employed(input: &FormulaInput) -> Result<f64, ComputationError> {
    let employed = input.req(TotalAssets)? - input.req(CurrentLiabilities)?;
    Ok(pct(div(input.ebit()?, employed)?))
}

fn return_on_invested_capital(input: &FormulaInput) -> Result<f64, ComputationError> {
    let nopat = input.ebit()? * (1.0 - input.tax_rate()?);
    let invested = input.req(TotalEquity)? + input.total_debt().unwrap_or(0.0);
    Ok(pct(div(nopat, invested)?))
}

fn return_on_fixed_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.req(NetIncome)?, input.req(PpeNet)?)?))
}

fn operating_return_on_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.ebit()?, input.req(TotalAssets)?)?))
}

fn cash_return_on_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(
        input.req(OperatingCashFlow)?,
        input.req(TotalAssets)?,
    )?))
}

fn cost_of_goods_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.req(CostOfGoodsSold)?, input.req(Revenue)?)?))
}

fn operating_expense_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.req(OperatingExpenses)?, input.req(Revenue)?)?))
}

fn sga_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    let sga = input.req(SellingExpenses)? + input.req(AdminExpenses)?;
    Ok(pct(div(sga, input.req(Revenue)?)?))
}

fn effective_tax_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(input.tax_rate()?))
}

fn interest_burden(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(PretaxIncome)?, input.ebit()?)
}

fn tax_burden(input: &FormulaInput) -> Result<f64, ComputationError> {
    let pretax = input.req(PretaxIncome)?;
    if pretax <= 0.0 {
        return Err(not_meaningful("non-positive pretax income"));
    }
    div(input.req(NetIncome)?, pretax)
}

fn revenue_per_share(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.req(Revenue)?, input.req(SharesOutstanding)?)
}

fn gross_profit_to_assets(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.gross_profit()?, input.req(TotalAssets)?)?))
}
