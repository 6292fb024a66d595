use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Valuation;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("graham_number", "Graham Number", SUB)
            .fields(&[Eps])
            .unit(OutputUnit::PerShare)
            .no_benchmark(),
        def("graham_upside", "Graham Number Upside", SUB)
            .fields(&[SharePrice])
            .depends(&["graham_number"])
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(50.0, 30.0, 15.0, 0.0),
        def("discounted_cash_flow_value", "DCF Value per Share", SUB)
            .fields(&[OperatingCashFlow, CapitalExpenditures, SharesOutstanding])
            .unit(OutputUnit::PerShare)
            .no_benchmark()
            .forecastable(),
        def("discounted_cash_flow_upside", "DCF Upside", SUB)
            .fields(&[SharePrice])
            .depends(&["discounted_cash_flow_value"])
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(50.0, 30.0, 15.0, 0.0),
        def("gordon_growth_value", "Gordon Growth Value", SUB)
            .fields(&[DividendsPerShare, PriorDividendsPerShare])
            .unit(OutputUnit::PerShare)
            .no_benchmark(),
        def("gordon_growth_upside", "Gordon Growth Upside", SUB)
            .fields(&[SharePrice])
            .depends(&["gordon_growth_value"])
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .bands(40.0, 25.0, 10.0, 0.0),
        def("earnings_power_value", "Earnings Power Value per Share", SUB)
            .fields(&[Ebit, TaxExpense, PretaxIncome, SharesOutstanding])
            .unit(OutputUnit::PerShare)
            .no_benchmark(),
        def("residual_income", "Residual Income", SUB)
            .fields(&[NetIncome, TotalEquity])
            .unit(OutputUnit::Currency)
            .no_benchmark(),
    ]
}
