use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Market;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("price_to_earnings", "Price to Earnings", SUB)
            .fields(&[SharePrice, Eps])
            .target_band(10.0, 25.0)
            .forecastable(),
        def("price_to_book", "Price to Book", SUB)
            .fields(&[SharePrice, TotalEquity, SharesOutstanding])
            .target_band(1.0, 3.0),
        def("price_to_sales", "Price to Sales", SUB)
            .fields(&[Revenue])
            .target_band(1.0, 4.0),
        def("dividend_yield", "Dividend Yield", SUB)
            .fields(&[DividendsPerShare, SharePrice])
            .unit(OutputUnit::Percent)
            .bands(5.0, 3.5, 2.5, 1.0),
        def("dividend_payout", "Dividend Payout", SUB)
            .fields(&[DividendsPerShare, Eps])
            .unit(OutputUnit::Percent)
            .target_band(30.0, 60.0),
        def("earnings_yield", "Earnings Yield", SUB)
            .fields(&[Eps, SharePrice])
            .unit(OutputUnit::Percent)
            .bands(10.0, 7.0, 5.0, 3.0),
        def("book_value_per_share", "Book Value per Share", SUB)
            .fields(&[TotalEquity, SharesOutstanding])
            .unit(OutputUnit::PerShare),
        def("market_to_book", "Market to Book", SUB)
            .fields(&[TotalEquity])
            .target_band(1.0, 3.0),
        def("peg_ratio", "PEG Ratio", SUB)
            .fields(&[SharePrice, Eps, PriorEps])
            .lower_better()
            .bands(0.8, 1.0, 1.5, 2.0),
        def("price_to_cash_flow", "Price to Cash Flow", SUB)
            .fields(&[OperatingCashFlow])
            .lower_better()
            .bands(6.0, 9.0, 12.0, 16.0),
        def("price_to_free_cash_flow", "Price to Free Cash Flow", SUB)
            .fields(&[OperatingCashFlow, CapitalExpenditures])
            .lower_better()
            .bands(10.0, 15.0, 20.0, 28.0),
        def("dividend_coverage", "Dividend Coverage", SUB)
            .fields(&[Eps, DividendsPerShare])
            .unit(OutputUnit::Times)
            .bands(3.0, 2.5, 2.0, 1.2),
        def("retention_ratio", "Retention Ratio", SUB)
            .fields(&[Eps, DividendsPerShare])
            .unit(OutputUnit::Percent)
            .target_band(40.0, 70.0),
        def("tobin_q", "Tobin's Q", SUB)
            .fields(&[TotalAssets])
            .target_band(0.8, 2.0),
        def("ev_to_ebitda", "EV to EBITDA", SUB)
            .fields(&[CashAndEquivalents, Ebitda])
            .lower_better()
            .bands(6.0, 8.0, 11.0, 14.0)
            .forecastable(),
    ]
}
