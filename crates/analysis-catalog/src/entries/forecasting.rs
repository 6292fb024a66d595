use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Forecasting;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("revenue_forecast", "Revenue Forecast (Next Period)", SUB)
            .history(3)
            .unit(OutputUnit::Currency)
            .no_benchmark()
            .forecastable(),
        def("earnings_forecast", "Earnings Forecast (Next Period)", SUB)
            .history(3)
            .unit(OutputUnit::Currency)
            .no_benchmark()
            .forecastable(),
        def("operating_cash_flow_forecast", "Operating Cash Flow Forecast", SUB)
            .history(3)
            .unit(OutputUnit::Currency)
            .no_benchmark()
            .forecastable(),
        def("revenue_forecast_growth", "Forecast Revenue Growth", SUB)
            .history(3)
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(15.0, 10.0, 5.0, 1.0)
            .forecastable(),
        def("earnings_forecast_growth", "Forecast Earnings Growth", SUB)
            .history(3)
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(18.0, 12.0, 6.0, 1.0)
            .forecastable(),
        def("forecast_eps", "Forecast EPS", SUB)
            .history(3)
            .fields(&[SharesOutstanding])
            .unit(OutputUnit::PerShare)
            .no_benchmark()
            .forecastable(),
        def("projected_return_on_equity", "Projected Return on Equity", SUB)
            .history(3)
            .fields(&[TotalEquity])
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(20.0, 15.0, 10.0, 5.0)
            .forecastable(),
        def("breakeven_revenue", "Breakeven Revenue", SUB)
            .fields(&[OperatingExpenses, Revenue, CostOfGoodsSold])
            .unit(OutputUnit::Currency)
            .no_benchmark()
            .forecastable(),
        def("margin_of_safety", "Margin of Safety", SUB)
            .fields(&[Revenue])
            .depends(&["breakeven_revenue"])
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(40.0, 30.0, 20.0, 10.0)
            .forecastable(),
        def("cash_runway", "Cash Runway", SUB)
            .fields(&[CashAndEquivalents, OperatingExpenses])
            .unit(OutputUnit::Months)
            .no_benchmark()
            .bands(24.0, 18.0, 12.0, 6.0)
            .forecastable(),
    ]
}
