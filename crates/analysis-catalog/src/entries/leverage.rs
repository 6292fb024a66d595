use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Leverage;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("debt_ratio", "Debt Ratio", SUB)
            .fields(&[TotalLiabilities, TotalAssets])
            .lower_better()
            .bands(0.35, 0.45, 0.55, 0.7)
            .forecastable(),
        def("debt_to_equity", "Debt to Equity", SUB)
            .fields(&[TotalLiabilities, TotalEquity])
            .lower_better()
            .bands(0.5, 0.8, 1.0, 1.5)
            .forecastable(),
        def("long_term_debt_to_equity", "Long-Term Debt to Equity", SUB)
            .fields(&[LongTermDebt, TotalEquity])
            .lower_better()
            .bands(0.3, 0.5, 0.7, 1.0),
        def("equity_ratio", "Equity Ratio", SUB)
            .fields(&[TotalEquity, TotalAssets])
            .bands(0.65, 0.55, 0.45, 0.3),
        def("equity_multiplier", "Equity Multiplier", SUB)
            .fields(&[TotalAssets, TotalEquity])
            .lower_better()
            .bands(1.5, 2.0, 2.5, 3.5),
        def("interest_coverage", "Interest Coverage", SUB)
            .fields(&[Ebit, InterestExpense])
            .unit(OutputUnit::Times)
            .bands(8.0, 5.0, 3.0, 1.5),
        def("cash_interest_coverage", "Cash Interest Coverage", SUB)
            .fields(&[OperatingCashFlow, InterestExpense])
            .unit(OutputUnit::Times)
            .bands(10.0, 6.0, 4.0, 2.0),
        def("debt_service_coverage", "Debt Service Coverage", SUB)
            .fields(&[Ebitda, InterestExpense, ShortTermDebt])
            .unit(OutputUnit::Times)
            .bands(3.0, 2.0, 1.5, 1.0),
        def("financial_leverage_degree", "Degree of Financial Leverage", SUB)
            .fields(&[Ebit, InterestExpense])
            .lower_better()
            .bands(1.1, 1.25, 1.5, 2.0),
        def("capitalization_ratio", "Capitalization Ratio", SUB)
            .fields(&[LongTermDebt, TotalEquity])
            .lower_better()
            .bands(0.25, 0.35, 0.45, 0.6),
        def("total_debt_to_ebitda", "Total Debt to EBITDA", SUB)
            .fields(&[Ebitda])
            .lower_better()
            .bands(1.0, 2.0, 3.0, 4.5)
            .forecastable(),
        def("fixed_assets_to_equity", "Fixed Assets to Equity", SUB)
            .fields(&[PpeNet, TotalEquity])
            .lower_better()
            .bands(0.75, 1.0, 1.25, 1.75),
        def("current_liabilities_to_total_debt", "Current Liabilities Share of Debt", SUB)
            .fields(&[CurrentLiabilities, TotalLiabilities])
            .target_band(0.3, 0.6),
        def("self_financing_ratio", "Self-Financing Ratio", SUB)
            .fields(&[RetainedEarnings, TotalAssets])
            .bands(0.4, 0.3, 0.2, 0.1),
        def("non_current_liabilities_to_assets", "Non-Current Liabilities to Assets", SUB)
            .fields(&[NonCurrentLiabilities, TotalAssets])
            .lower_better()
            .bands(0.15, 0.25, 0.35, 0.5),
    ]
}
