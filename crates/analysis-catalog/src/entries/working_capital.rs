use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::WorkingCapital;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("net_working_capital", "Net Working Capital", SUB)
            .fields(&[CurrentAssets, CurrentLiabilities])
            .unit(OutputUnit::Currency)
            .forecastable(),
        def("working_capital_to_assets", "Working Capital to Assets", SUB)
            .fields(&[CurrentAssets, CurrentLiabilities, TotalAssets])
            .unit(OutputUnit::Percent)
            .bands(25.0, 18.0, 12.0, 5.0),
        def("working_capital_to_revenue", "Working Capital to Revenue", SUB)
            .fields(&[CurrentAssets, CurrentLiabilities, Revenue])
            .unit(OutputUnit::Percent)
            .target_band(10.0, 25.0),
        def("inventory_to_working_capital", "Inventory to Working Capital", SUB)
            .fields(&[Inventory, CurrentAssets, CurrentLiabilities])
            .lower_better()
            .bands(0.5, 0.8, 1.1, 1.5),
        def("receivables_to_working_capital", "Receivables to Working Capital", SUB)
            .fields(&[AccountsReceivable, CurrentAssets, CurrentLiabilities])
            .lower_better()
            .bands(0.4, 0.7, 1.0, 1.4),
        def("cash_to_working_capital", "Cash to Working Capital", SUB)
            .fields(&[CashAndEquivalents, CurrentAssets, CurrentLiabilities])
            .bands(0.5, 0.35, 0.2, 0.1),
        def("short_term_financing_ratio", "Short-Term Financing of Current Assets", SUB)
            .fields(&[ShortTermDebt, CurrentAssets])
            .lower_better()
            .bands(0.1, 0.2, 0.3, 0.45),
        def("payables_to_inventory", "Payables to Inventory", SUB)
            .fields(&[AccountsPayable, Inventory])
            .target_band(0.5, 1.2),
        def("own_working_capital", "Own Working Capital", SUB)
            .fields(&[TotalEquity, NonCurrentLiabilities, NonCurrentAssets])
            .unit(OutputUnit::Currency),
        def("own_working_capital_to_inventory", "Own Working Capital Coverage of Inventory", SUB)
            .fields(&[Inventory])
            .depends(&["own_working_capital"])
            .bands(1.0, 0.8, 0.6, 0.4),
        def("equity_maneuverability", "Equity Maneuverability", SUB)
            .fields(&[TotalEquity])
            .depends(&["own_working_capital"])
            .bands(0.5, 0.4, 0.3, 0.2),
        def("receivables_to_payables", "Receivables to Payables", SUB)
            .fields(&[AccountsReceivable, AccountsPayable])
            .target_band(0.9, 1.5),
    ]
}
