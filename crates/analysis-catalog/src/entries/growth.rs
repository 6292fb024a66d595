use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Growth;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("revenue_growth", "Revenue Growth", SUB)
            .fields(&[Revenue, PriorRevenue])
            .unit(OutputUnit::Percent)
            .bands(20.0, 12.0, 7.0, 2.0)
            .forecastable(),
        def("net_income_growth", "Net Income Growth", SUB)
            .fields(&[NetIncome, PriorNetIncome])
            .unit(OutputUnit::Percent)
            .bands(25.0, 15.0, 8.0, 2.0)
            .forecastable(),
        def("operating_income_growth", "Operating Income Growth", SUB)
            .fields(&[OperatingIncome, PriorOperatingIncome])
            .unit(OutputUnit::Percent)
            .bands(20.0, 12.0, 7.0, 2.0),
        def("total_asset_growth", "Total Asset Growth", SUB)
            .fields(&[TotalAssets, PriorTotalAssets])
            .unit(OutputUnit::Percent)
            .bands(15.0, 10.0, 5.0, 1.0),
        def("equity_growth", "Equity Growth", SUB)
            .fields(&[TotalEquity, PriorTotalEquity])
            .unit(OutputUnit::Percent)
            .bands(18.0, 12.0, 6.0, 2.0),
        def("eps_growth", "EPS Growth", SUB)
            .fields(&[Eps, PriorEps])
            .unit(OutputUnit::Percent)
            .bands(25.0, 15.0, 8.0, 2.0)
            .forecastable(),
        def("dividend_growth", "Dividend Growth", SUB)
            .fields(&[DividendsPerShare, PriorDividendsPerShare])
            .unit(OutputUnit::Percent)
            .bands(15.0, 10.0, 5.0, 0.0),
        def("operating_cash_flow_growth", "Operating Cash Flow Growth", SUB)
            .fields(&[OperatingCashFlow, PriorOperatingCashFlow])
            .unit(OutputUnit::Percent)
            .bands(20.0, 12.0, 6.0, 1.0),
        def("sustainable_growth_rate", "Sustainable Growth Rate", SUB)
            .fields(&[NetIncome, TotalEquity, DividendsPaid])
            .unit(OutputUnit::Percent)
            .bands(15.0, 10.0, 6.0, 2.0)
            .forecastable(),
        def("internal_growth_rate", "Internal Growth Rate", SUB)
            .fields(&[NetIncome, TotalAssets, DividendsPaid])
            .unit(OutputUnit::Percent)
            .bands(10.0, 7.0, 4.0, 1.0),
    ]
}
