use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::CashFlow;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("operating_cash_flow_margin", "Operating Cash Flow Margin", SUB)
            .fields(&[OperatingCashFlow, Revenue])
            .unit(OutputUnit::Percent)
            .bands(20.0, 15.0, 10.0, 5.0)
            .forecastable(),
        def("cash_flow_to_net_income", "Cash Flow to Net Income", SUB)
            .fields(&[OperatingCashFlow, NetIncome])
            .bands(1.4, 1.2, 1.0, 0.8),
        def("free_cash_flow_margin", "Free Cash Flow Margin", SUB)
            .fields(&[OperatingCashFlow, CapitalExpenditures, Revenue])
            .unit(OutputUnit::Percent)
            .bands(15.0, 10.0, 6.0, 2.0)
            .forecastable(),
        def("capex_to_revenue", "Capex to Revenue", SUB)
            .fields(&[CapitalExpenditures, Revenue])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(4.0, 7.0, 10.0, 15.0),
        def("capex_to_depreciation", "Capex to Depreciation", SUB)
            .fields(&[CapitalExpenditures, DepreciationAmortization])
            .target_band(0.9, 1.8),
        def("cash_flow_to_debt", "Cash Flow to Debt", SUB)
            .fields(&[OperatingCashFlow])
            .bands(0.6, 0.45, 0.3, 0.15),
        def("free_cash_flow_to_operating", "Free Cash Flow Conversion", SUB)
            .fields(&[OperatingCashFlow, CapitalExpenditures])
            .bands(0.7, 0.55, 0.4, 0.2),
        def("dividend_cash_coverage", "Dividend Cash Coverage", SUB)
            .fields(&[OperatingCashFlow, DividendsPaid])
            .unit(OutputUnit::Times)
            .bands(5.0, 3.5, 2.5, 1.5),
        def("cash_flow_adequacy", "Cash Flow Adequacy", SUB)
            .fields(&[OperatingCashFlow, CapitalExpenditures, DividendsPaid])
            .bands(1.5, 1.2, 1.0, 0.7),
        def("operating_cash_flow_per_share", "Operating Cash Flow per Share", SUB)
            .fields(&[OperatingCashFlow, SharesOutstanding])
            .unit(OutputUnit::PerShare),
        def("free_cash_flow_yield", "Free Cash Flow Yield", SUB)
            .fields(&[OperatingCashFlow, CapitalExpenditures])
            .unit(OutputUnit::Percent)
            .bands(8.0, 6.0, 4.0, 2.0),
        def("external_financing_ratio", "External Financing Ratio", SUB)
            .fields(&[FinancingCashFlow, Revenue])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(2.0, 5.0, 10.0, 18.0),
    ]
}
