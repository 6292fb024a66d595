use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Structural;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("current_assets_to_total", "Current Assets Share", SUB)
            .fields(&[CurrentAssets, TotalAssets])
            .unit(OutputUnit::Percent)
            .target_band(30.0, 60.0),
        def("non_current_assets_to_total", "Non-Current Assets Share", SUB)
            .fields(&[NonCurrentAssets, TotalAssets])
            .unit(OutputUnit::Percent)
            .target_band(40.0, 70.0),
        def("inventory_to_total_assets", "Inventory Share of Assets", SUB)
            .fields(&[Inventory, TotalAssets])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(10.0, 15.0, 22.0, 30.0),
        def("receivables_to_total_assets", "Receivables Share of Assets", SUB)
            .fields(&[AccountsReceivable, TotalAssets])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(10.0, 15.0, 20.0, 28.0),
        def("cash_to_total_assets", "Cash Share of Assets", SUB)
            .fields(&[CashAndEquivalents, TotalAssets])
            .unit(OutputUnit::Percent)
            .target_band(5.0, 20.0),
        def("ppe_to_total_assets", "PP&E Share of Assets", SUB)
            .fields(&[PpeNet, TotalAssets])
            .unit(OutputUnit::Percent)
            .target_band(20.0, 50.0),
        def("intangibles_to_total_assets", "Intangibles Share of Assets", SUB)
            .fields(&[IntangibleAssets, TotalAssets])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(5.0, 10.0, 18.0, 28.0),
        def("current_liabilities_to_total", "Current Liabilities Share", SUB)
            .fields(&[CurrentLiabilities, TotalAssets])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(20.0, 28.0, 35.0, 45.0),
        def("non_current_liabilities_to_total", "Non-Current Liabilities Share", SUB)
            .fields(&[NonCurrentLiabilities, TotalAssets])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(12.0, 20.0, 28.0, 38.0),
        def("retained_earnings_to_equity", "Retained Earnings Share of Equity", SUB)
            .fields(&[RetainedEarnings, TotalEquity])
            .unit(OutputUnit::Percent)
            .bands(60.0, 45.0, 30.0, 15.0),
        def("short_term_debt_share", "Short-Term Share of Debt", SUB)
            .fields(&[ShortTermDebt])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(20.0, 30.0, 40.0, 55.0),
        def("fixed_to_current_assets", "Fixed to Current Assets", SUB)
            .fields(&[NonCurrentAssets, CurrentAssets])
            .target_band(0.8, 2.0),
        def("working_capital_structure", "Working Capital Share of Current Assets", SUB)
            .fields(&[CurrentAssets, CurrentLiabilities])
            .unit(OutputUnit::Percent)
            .bands(40.0, 30.0, 20.0, 10.0),
    ]
}
