//! Canned guidance text, one line per classified result.
//!
//! The table is total: every (subcategory, rating) pair resolves to a
//! template, so a classified result always carries at least one
//! recommendation. `{metric}` is replaced with the definition's display
//! name.

use analysis_catalog::AnalysisDefinition;
use analysis_core::{Rating, RiskLevel, Subcategory};

fn template(subcategory: Subcategory, rating: Rating) -> &'static str {
    use Rating::*;
    use Subcategory::*;
    match (subcategory, rating) {
        (Liquidity, Excellent | VeryGood) => "Short-term coverage is comfortable: {metric} leaves headroom over current obligations",
        (Liquidity, Good) => "{metric} meets the expected level of short-term coverage; maintain current liquidity buffers",
        (Liquidity, Acceptable | Poor) => "Strengthen short-term coverage: {metric} signals pressure on the ability to meet current obligations",
        (Liquidity, Unrated) => "{metric} computed without a reference; supply a sector benchmark to judge short-term coverage",

        (Activity, Excellent | VeryGood) => "Asset utilization is efficient: {metric} turns capital faster than peers require",
        (Activity, Good) => "{metric} shows in-line asset utilization; no action needed",
        (Activity, Acceptable | Poor) => "Review asset utilization: {metric} points to capital tied up longer than peers tolerate",
        (Activity, Unrated) => "{metric} lacks a reference value; benchmark against sector turnover to assess utilization",

        (Leverage, Excellent | VeryGood) => "The capital structure is conservative: {metric} leaves borrowing capacity in reserve",
        (Leverage, Good) => "{metric} indicates a balanced capital structure",
        (Leverage, Acceptable | Poor) => "Reduce debt load or extend maturities: {metric} shows a strained capital structure",
        (Leverage, Unrated) => "{metric} needs a sector reference before the debt position can be judged",

        (Profitability, Excellent | VeryGood) => "Margins are strong: {metric} earns well above the required return",
        (Profitability, Good) => "{metric} sits at a sustainable level of profitability",
        (Profitability, Acceptable | Poor) => "Address margin erosion: {metric} indicates returns below a sustainable level",
        (Profitability, Unrated) => "{metric} computed without profitability context; compare against sector margins",

        (Market, Excellent | VeryGood) => "Market pricing is favorable: {metric} sits in the range investors reward",
        (Market, Good) => "{metric} is in line with typical market expectations",
        (Market, Acceptable | Poor) => "Reassess market positioning: {metric} sits outside the range investors reward",
        (Market, Unrated) => "{metric} is informational; valuation multiples need a peer group to interpret",

        (Structural, Excellent | VeryGood) => "Balance-sheet composition is sound: {metric} shows a well-proportioned structure",
        (Structural, Good) => "{metric} reflects an ordinary asset and funding mix",
        (Structural, Acceptable | Poor) => "Rebalance the balance-sheet mix: {metric} shows a skewed asset or funding structure",
        (Structural, Unrated) => "{metric} needs a sector norm before the structure can be judged",

        (CashFlow, Excellent | VeryGood) => "Cash conversion is healthy: {metric} backs reported earnings with cash",
        (CashFlow, Good) => "{metric} shows adequate cash generation",
        (CashFlow, Acceptable | Poor) => "Improve cash conversion: {metric} shows reported earnings outrunning cash generation",
        (CashFlow, Unrated) => "{metric} lacks a cash-flow reference; compare against sector conversion rates",

        (CreditRisk, Excellent | VeryGood) => "Debt service capacity is robust: {metric} would satisfy lender covenants with margin",
        (CreditRisk, Good) => "{metric} meets typical lender expectations",
        (CreditRisk, Acceptable | Poor) => "Shore up debt service capacity: {metric} would concern lenders at current levels",
        (CreditRisk, Unrated) => "{metric} needs covenant-level context to assess credit standing",

        (Distress, Excellent | VeryGood) => "{metric} sits firmly in the safe zone",
        (Distress, Good) => "{metric} is clear of the distress zone; keep monitoring",
        (Distress, Acceptable | Poor) => "Investigate solvency drivers: {metric} is in or near the distress zone",
        (Distress, Unrated) => "{metric} could not be scored; supply the missing statement figures",

        (Growth, Excellent | VeryGood) => "Growth is outpacing the baseline: {metric} supports expansion plans",
        (Growth, Good) => "{metric} shows steady growth at the expected rate",
        (Growth, Acceptable | Poor) => "Revisit the growth engine: {metric} trails the rate needed to hold competitive position",
        (Growth, Unrated) => "{metric} needs a prior period or sector growth rate for context",

        (Dupont, Excellent | VeryGood) => "The return chain is strong: {metric} shows compounding drivers working together",
        (Dupont, Good) => "{metric} shows a balanced return decomposition",
        (Dupont, Acceptable | Poor) => "Decompose the return drivers: {metric} isolates where the return chain leaks",
        (Dupont, Unrated) => "{metric} could not be decomposed; check the underlying margin and turnover inputs",

        (WorkingCapital, Excellent | VeryGood) => "Working capital is well managed: {metric} keeps the operating cycle lightly funded",
        (WorkingCapital, Good) => "{metric} shows ordinary working-capital usage",
        (WorkingCapital, Acceptable | Poor) => "Tighten working-capital management: {metric} shows funding locked in the operating cycle",
        (WorkingCapital, Unrated) => "{metric} needs a sector norm to judge working-capital efficiency",

        (Statistical, Excellent | VeryGood) => "Operating performance is stable: {metric} shows a dependable multi-year pattern",
        (Statistical, Good) => "{metric} shows acceptable variability across periods",
        (Statistical, Acceptable | Poor) => "Stabilize operating performance: {metric} shows more variability than the trend supports",
        (Statistical, Unrated) => "{metric} needs more historical periods before stability can be judged",

        (Forecasting, Excellent | VeryGood) => "The projection is favorable: {metric} points to continued strength",
        (Forecasting, Good) => "{metric} projects a steady continuation of current performance",
        (Forecasting, Acceptable | Poor) => "Plan for a weaker trajectory: {metric} projects below the comfortable range",
        (Forecasting, Unrated) => "{metric} is a point projection; track it against actuals next period",

        (Valuation, Excellent | VeryGood) => "Intrinsic value exceeds the market price: {metric} suggests a margin of safety",
        (Valuation, Good) => "{metric} prices the company close to fair value",
        (Valuation, Acceptable | Poor) => "Re-examine intrinsic value assumptions: {metric} leaves little margin of safety",
        (Valuation, Unrated) => "{metric} is an intrinsic-value estimate; compare against the market price to act on it",

        (Sensitivity, Excellent | VeryGood) => "Shock exposure is contained: {metric} shows earnings absorbing plausible stress",
        (Sensitivity, Good) => "{metric} shows manageable exposure to single-factor shocks",
        (Sensitivity, Acceptable | Poor) => "Hedge the exposed factor: {metric} shows outsized earnings impact from a small shock",
        (Sensitivity, Unrated) => "{metric} needs a complete statement before exposure can be sized",
    }
}

/// Recommendations for one classified result. Always at least one line;
/// elevated risk adds an escalation note.
pub(crate) fn for_result(
    def: &AnalysisDefinition,
    rating: Rating,
    risk: Option<RiskLevel>,
) -> Vec<String> {
    let mut out = vec![template(def.subcategory, rating).replace("{metric}", def.name)];
    if matches!(risk, Some(RiskLevel::High) | Some(RiskLevel::VeryHigh)) {
        out.push(format!(
            "{} warrants close monitoring: risk level is elevated",
            def.name
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATINGS: [Rating; 6] = [
        Rating::Excellent,
        Rating::VeryGood,
        Rating::Good,
        Rating::Acceptable,
        Rating::Poor,
        Rating::Unrated,
    ];

    #[test]
    fn every_subcategory_rating_pair_has_a_template() {
        for subcategory in Subcategory::ALL {
            for rating in RATINGS {
                let text = template(subcategory, rating);
                assert!(
                    text.contains("{metric}"),
                    "{:?}/{:?} template lacks interpolation",
                    subcategory,
                    rating
                );
            }
        }
    }

    #[test]
    fn every_definition_gets_a_recommendation_at_every_rating() {
        let catalog = analysis_catalog::AnalysisCatalog::load().unwrap();
        for def in catalog.list() {
            for rating in RATINGS {
                let recs = for_result(def, rating, None);
                assert!(!recs.is_empty(), "{} at {:?}", def.id, rating);
                assert!(recs[0].contains(def.name), "{} at {:?}", def.id, rating);
            }
        }
    }
}
