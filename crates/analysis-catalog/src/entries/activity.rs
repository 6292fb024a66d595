use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Activity;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("inventory_turnover", "Inventory Turnover", SUB)
            .fields(&[CostOfGoodsSold, Inventory])
            .unit(OutputUnit::Times)
            .bands(12.0, 8.0, 6.0, 4.0)
            .forecastable(),
        def("receivables_turnover", "Receivables Turnover", SUB)
            .fields(&[Revenue, AccountsReceivable])
            .unit(OutputUnit::Times)
            .bands(12.0, 10.0, 8.0, 6.0),
        def("payables_turnover", "Payables Turnover", SUB)
            .fields(&[CostOfGoodsSold, AccountsPayable])
            .unit(OutputUnit::Times)
            .target_band(4.0, 10.0),
        def("asset_turnover", "Total Asset Turnover", SUB)
            .fields(&[Revenue, TotalAssets])
            .unit(OutputUnit::Times)
            .bands(2.0, 1.5, 1.0, 0.5)
            .forecastable(),
        def("fixed_asset_turnover", "Fixed Asset Turnover", SUB)
            .fields(&[Revenue, PpeNet])
            .unit(OutputUnit::Times)
            .bands(5.0, 4.0, 3.0, 2.0),
        def("equity_turnover", "Equity Turnover", SUB)
            .fields(&[Revenue, TotalEquity])
            .unit(OutputUnit::Times)
            .bands(3.0, 2.5, 2.0, 1.0),
        def("working_capital_turnover", "Working Capital Turnover", SUB)
            .fields(&[Revenue, CurrentAssets, CurrentLiabilities])
            .unit(OutputUnit::Times)
            .bands(6.0, 5.0, 4.0, 2.0),
        def("current_asset_turnover", "Current Asset Turnover", SUB)
            .fields(&[Revenue, CurrentAssets])
            .unit(OutputUnit::Times)
            .bands(3.0, 2.5, 2.0, 1.0),
        def("non_current_asset_turnover", "Non-Current Asset Turnover", SUB)
            .fields(&[Revenue, NonCurrentAssets])
            .unit(OutputUnit::Times)
            .bands(4.0, 3.0, 2.0, 1.0),
        def("capital_intensity", "Capital Intensity", SUB)
            .fields(&[TotalAssets, Revenue])
            .lower_better()
            .bands(0.5, 0.8, 1.0, 1.5),
        def("days_sales_inventory", "Days Sales of Inventory", SUB)
            .depends(&["inventory_turnover"])
            .unit(OutputUnit::Days)
            .lower_better()
            .bands(30.0, 45.0, 60.0, 90.0)
            .forecastable(),
        def("days_sales_outstanding", "Days Sales Outstanding", SUB)
            .depends(&["receivables_turnover"])
            .unit(OutputUnit::Days)
            .lower_better()
            .bands(30.0, 37.0, 46.0, 61.0),
        def("days_payables_outstanding", "Days Payables Outstanding", SUB)
            .depends(&["payables_turnover"])
            .unit(OutputUnit::Days)
            .target_band(30.0, 90.0),
        def("operating_cycle", "Operating Cycle", SUB)
            .depends(&["days_sales_inventory", "days_sales_outstanding"])
            .unit(OutputUnit::Days)
            .lower_better()
            .bands(60.0, 82.0, 106.0, 151.0),
        def("cash_conversion_cycle", "Cash Conversion Cycle", SUB)
            .depends(&[
                "days_sales_inventory",
                "days_sales_outstanding",
                "days_payables_outstanding",
            ])
            .unit(OutputUnit::Days)
            .lower_better()
            .bands(30.0, 45.0, 60.0, 90.0)
            .forecastable(),
    ]
}
