use crate::definition::AnalysisDefinition;

mod activity;
mod cash_flow;
mod credit_risk;
mod distress;
mod dupont;
mod forecasting;
mod growth;
mod leverage;
mod liquidity;
mod market;
mod profitability;
mod sensitivity;
mod statistical;
mod structural;
mod valuation;
mod working_capital;

/// All catalog entries, grouped by subcategory module. Order within a
/// subcategory is the published order; callers must not rely on it.
pub(crate) fn all() -> Vec<AnalysisDefinition> {
    let mut defs = Vec::with_capacity(crate::taxonomy::TOTAL_DEFINITIONS);
    defs.extend(liquidity::definitions());
    defs.extend(activity::definitions());
    defs.extend(leverage::definitions());
    defs.extend(profitability::definitions());
    defs.extend(market::definitions());
    defs.extend(structural::definitions());
    defs.extend(cash_flow::definitions());
    defs.extend(credit_risk::definitions());
    defs.extend(distress::definitions());
    defs.extend(growth::definitions());
    defs.extend(dupont::definitions());
    defs.extend(working_capital::definitions());
    defs.extend(statistical::definitions());
    defs.extend(forecasting::definitions());
    defs.extend(valuation::definitions());
    defs.extend(sensitivity::definitions());
    defs
}
