use std::collections::HashMap;

use analysis_core::ComputationError;
use analysis_core::FieldRef::*;

use crate::input::{div, not_meaningful, pct, FormulaInput};
use crate::FormulaFn;

pub(crate) fn register(reg: &mut HashMap<&'static str, FormulaFn>) {
    reg.insert("price_to_earnings", price_to_earnings);
    reg.insert("price_to_book", price_to_book);
    reg.insert("price_to_sales", price_to_sales);
    reg.insert("dividend_yield", dividend_yield);
    reg.insert("dividend_payout", dividend_payout);
    reg.insert("earnings_yield", earnings_yield);
    reg.insert("book_value_per_share", book_value_per_share);
    reg.insert("market_to_book", market_to_book);
    reg.insert("peg_ratio", peg_ratio);
    reg.insert("price_to_cash_flow", price_to_cash_flow);
    reg.insert("price_to_free_cash_flow", price_to_free_cash_flow);
    reg.insert("dividend_coverage", dividend_coverage);
    reg.insert("retention_ratio", retention_ratio);
    reg.insert("tobin_q", tobin_q);
    reg.insert("ev_to_ebitda", ev_to_ebitda);
}

fn price_to_earnings(input: &FormulaInput) -> Result<f64, ComputationError> {
    let eps = input.eps()?;
    if eps <= 0.0 {
        return Err(not_meaningful("non-positive EPS"));
    }
    div(input.req(SharePrice)?, eps)
}

fn price_to_book(input: &FormulaInput) -> Result<f64, ComputationError> {
    let bvps = input.book_value_per_share()?;
    if bvps <= 0.0 {
        return Err(not_meaningful("non-positive book value per share"));
    }
    div(input.req(SharePrice)?, bvps)
}

fn price_to_sales(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.market_cap()?, input.req(Revenue)?)
}

fn dividend_yield(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(
        input.req(DividendsPerShare)?,
        input.req(SharePrice)?,
    )?))
}

fn dividend_payout(input: &FormulaInput) -> Result<f64, ComputationError> {
    let eps = input.eps()?;
    if eps <= 0.0 {
        return Err(not_meaningful("non-positive EPS"));
    }
    Ok(pct(div(input.req(DividendsPerShare)?, eps)?))
}

fn earnings_yield(input: &FormulaInput) -> Result<f64, ComputationError> {
    Ok(pct(div(input.eps()?, input.req(SharePrice)?)?))
}

fn book_value_per_share(input: &FormulaInput) -> Result<f64, ComputationError> {
    input.book_value_per_share()
}

fn market_to_book(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.market_cap()?, input.req(TotalEquity)?)
}

fn peg_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    let eps = input.eps()?;
    let prior_eps = input.req(PriorEps)?;
    if eps <= 0.0 {
        return Err(not_meaningful("non-positive EPS"));
    }
    if prior_eps == 0.0 {
        return Err(ComputationError::DivisionByZero);
    }
    let growth = pct((eps - prior_eps) / prior_eps.abs());
    if growth <= 0.0 {
        return Err(not_meaningful("non-positive EPS growth"));
    }
    let pe = div(input.req(SharePrice)?, eps)?;
    div(pe, growth)
}

fn price_to_cash_flow(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ocf = input.req(OperatingCashFlow)?;
    if ocf <= 0.0 {
        return Err(not_meaningful("non-positive operating cash flow"));
    }
    div(input.market_cap()?, ocf)
}

fn price_to_free_cash_flow(input: &FormulaInput) -> Result<f64, ComputationError> {
    let fcf = input.free_cash_flow()?;
    if fcf <= 0.0 {
        return Err(not_meaningful("non-positive free cash flow"));
    }
    div(input.market_cap()?, fcf)
}

fn dividend_coverage(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.eps()?, input.req(DividendsPerShare)?)
}

fn retention_ratio(input: &FormulaInput) -> Result<f64, ComputationError> {
    let eps = input.eps()?;
    if eps <= 0.0 {
        return Err(not_meaningful("non-positive EPS"));
    }
    Ok(pct(1.0 - div(input.req(DividendsPerShare)?, eps)?))
}

fn tobin_q(input: &FormulaInput) -> Result<f64, ComputationError> {
    div(input.market_cap()?, input.req(TotalAssets)?)
}

fn ev_to_ebitda(input: &FormulaInput) -> Result<f64, ComputationError> {
    let ev = input.market_cap()? + input.total_debt().unwrap_or(0.0)
        - input.req(CashAndEquivalents)?;
    let ebitda = input.ebitda()?;
    if ebitda <= 0.0 {
        return Err(not_meaningful("non-positive EBITDA"));
    }
    div(ev, ebitda)
}
