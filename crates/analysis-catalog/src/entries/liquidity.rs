use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Liquidity;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("current_ratio", "Current Ratio", SUB)
            .fields(&[CurrentAssets, CurrentLiabilities])
            .bands(2.5, 2.0, 1.5, 1.0)
            .forecastable(),
        def("quick_ratio", "Quick Ratio", SUB)
            .fields(&[CurrentAssets, Inventory, CurrentLiabilities])
            .bands(1.5, 1.2, 1.0, 0.7)
            .forecastable(),
        def("cash_ratio", "Cash Ratio", SUB)
            .fields(&[CashAndEquivalents, CurrentLiabilities])
            .bands(0.5, 0.35, 0.2, 0.1),
        def("operating_cash_flow_ratio", "Operating Cash Flow Ratio", SUB)
            .fields(&[OperatingCashFlow, CurrentLiabilities])
            .bands(1.0, 0.75, 0.5, 0.25),
        def("defensive_interval", "Defensive Interval", SUB)
            .fields(&[
                CashAndEquivalents,
                AccountsReceivable,
                CostOfGoodsSold,
                OperatingExpenses,
            ])
            .unit(OutputUnit::Days)
            .bands(120.0, 90.0, 60.0, 30.0),
        def("cash_to_current_assets", "Cash to Current Assets", SUB)
            .fields(&[CashAndEquivalents, CurrentAssets])
            .bands(0.3, 0.2, 0.1, 0.05),
        def("cash_coverage_of_payables", "Cash Coverage of Payables", SUB)
            .fields(&[CashAndEquivalents, AccountsPayable])
            .bands(1.5, 1.0, 0.6, 0.3),
        def("liquid_assets_ratio", "Liquid Assets Ratio", SUB)
            .fields(&[CashAndEquivalents, AccountsReceivable, CurrentLiabilities])
            .bands(1.2, 1.0, 0.8, 0.5),
        def("inventory_to_current_assets", "Inventory to Current Assets", SUB)
            .fields(&[Inventory, CurrentAssets])
            .lower_better()
            .bands(0.2, 0.3, 0.45, 0.6),
        def("prepaid_to_current_assets", "Prepaid Expenses to Current Assets", SUB)
            .fields(&[PrepaidExpenses, CurrentAssets])
            .lower_better()
            .bands(0.02, 0.05, 0.08, 0.12),
    ]
}
