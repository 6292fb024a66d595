use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Statistical;

/// Multi-period statistical models over `Statement::history`. These are
/// internal stability measures; industry benchmarks do not apply.
pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("revenue_volatility", "Revenue Growth Volatility", SUB)
            .history(4)
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .lower_better()
            .bands(5.0, 10.0, 18.0, 30.0),
        def("earnings_volatility", "Earnings Growth Volatility", SUB)
            .history(4)
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .lower_better()
            .bands(10.0, 20.0, 35.0, 50.0),
        def("revenue_trend_slope", "Revenue Trend Slope", SUB)
            .history(3)
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(10.0, 6.0, 3.0, 0.0),
        def("earnings_trend_slope", "Earnings Trend Slope", SUB)
            .history(3)
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(12.0, 8.0, 4.0, 0.0),
        def("revenue_cagr", "Revenue CAGR", SUB)
            .history(3)
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(15.0, 10.0, 5.0, 2.0)
            .forecastable(),
        def("earnings_cagr", "Earnings CAGR", SUB)
            .history(3)
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(18.0, 12.0, 6.0, 2.0)
            .forecastable(),
        def("revenue_earnings_correlation", "Revenue/Earnings Correlation", SUB)
            .history(4)
            .no_benchmark()
            .bands(0.9, 0.75, 0.6, 0.4),
        def("revenue_variation_coefficient", "Revenue Variation Coefficient", SUB)
            .history(4)
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .lower_better()
            .bands(10.0, 18.0, 28.0, 40.0),
        def("cash_flow_stability", "Cash Flow Stability", SUB)
            .history(4)
            .no_benchmark()
            .bands(0.9, 0.8, 0.65, 0.5),
        def("margin_stability", "Margin Stability", SUB)
            .history(4)
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .lower_better()
            .bands(2.0, 4.0, 7.0, 10.0),
        def("growth_consistency", "Growth Consistency", SUB)
            .history(4)
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(90.0, 75.0, 60.0, 40.0),
        def("earnings_predictability", "Earnings Predictability", SUB)
            .history(4)
            .no_benchmark()
            .bands(0.85, 0.7, 0.5, 0.3),
    ]
}
