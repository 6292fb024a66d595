use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::CreditRisk;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("ebitda_interest_coverage", "EBITDA Interest Coverage", SUB)
            .fields(&[Ebitda, InterestExpense])
            .unit(OutputUnit::Times)
            .bands(10.0, 7.0, 4.0, 2.0),
        def("net_debt_to_ebitda", "Net Debt to EBITDA", SUB)
            .fields(&[CashAndEquivalents, Ebitda])
            .lower_better()
            .bands(0.5, 1.5, 2.5, 3.5)
            .forecastable(),
        def("funds_from_operations_to_debt", "FFO to Debt", SUB)
            .fields(&[NetIncome, DepreciationAmortization])
            .bands(0.6, 0.45, 0.3, 0.15),
        def("debt_to_tangible_net_worth", "Debt to Tangible Net Worth", SUB)
            .fields(&[TotalLiabilities, TotalEquity, IntangibleAssets, Goodwill])
            .lower_better()
            .bands(0.6, 1.0, 1.5, 2.2),
        def("short_term_debt_coverage", "Short-Term Debt Coverage", SUB)
            .fields(&[OperatingCashFlow, ShortTermDebt])
            .unit(OutputUnit::Times)
            .bands(4.0, 3.0, 2.0, 1.0),
        def("equity_to_debt", "Equity to Debt", SUB)
            .fields(&[TotalEquity, TotalLiabilities])
            .bands(2.0, 1.5, 1.0, 0.6),
        def("financial_expense_ratio", "Financial Expense Ratio", SUB)
            .fields(&[InterestExpense, Revenue])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(1.0, 2.0, 3.5, 5.0),
        def("net_debt_to_equity", "Net Debt to Equity", SUB)
            .fields(&[CashAndEquivalents, TotalEquity])
            .lower_better()
            .bands(0.2, 0.4, 0.6, 1.0),
        def("debt_service_cash_coverage", "Debt Service Cash Coverage", SUB)
            .fields(&[OperatingCashFlow, InterestExpense, ShortTermDebt])
            .unit(OutputUnit::Times)
            .bands(3.0, 2.2, 1.5, 1.0),
        def("interest_to_ebitda", "Interest to EBITDA", SUB)
            .fields(&[InterestExpense, Ebitda])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(8.0, 12.0, 20.0, 30.0),
    ]
}
