use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Profitability;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("gross_margin", "Gross Margin", SUB)
            .fields(&[Revenue, CostOfGoodsSold])
            .unit(OutputUnit::Percent)
            .bands(50.0, 40.0, 30.0, 20.0)
            .forecastable(),
        def("operating_margin", "Operating Margin", SUB)
            .fields(&[OperatingIncome, Revenue])
            .unit(OutputUnit::Percent)
            .bands(20.0, 15.0, 10.0, 5.0)
            .forecastable(),
        def("net_margin", "Net Profit Margin", SUB)
            .fields(&[NetIncome, Revenue])
            .unit(OutputUnit::Percent)
            .bands(15.0, 10.0, 7.0, 3.0)
            .forecastable(),
        def("ebitda_margin", "EBITDA Margin", SUB)
            .fields(&[Ebitda, Revenue])
            .unit(OutputUnit::Percent)
            .bands(25.0, 20.0, 15.0, 8.0),
        def("pretax_margin", "Pretax Margin", SUB)
            .fields(&[PretaxIncome, Revenue])
            .unit(OutputUnit::Percent)
            .bands(18.0, 12.0, 8.0, 4.0),
        def("return_on_assets", "Return on Assets", SUB)
            .fields(&[NetIncome, TotalAssets])
            .unit(OutputUnit::Percent)
            .bands(12.0, 9.0, 6.0, 3.0)
            .forecastable(),
        def("return_on_equity", "Return on Equity", SUB)
            .fields(&[NetIncome, TotalEquity])
            .unit(OutputUnit::Percent)
            .bands(20.0, 15.0, 10.0, 5.0)
            .forecastable(),
        def("return_on_capital_employed", "Return on Capital Employed", SUB)
            .fields(&[Ebit, TotalAssets, CurrentLiabilities])
            .unit(OutputUnit::Percent)
            .bands(18.0, 14.0, 10.0, 6.0),
        def("return_on_invested_capital", "Return on Invested Capital", SUB)
            .fields(&[Ebit, TaxExpense, PretaxIncome, TotalEquity])
            .unit(OutputUnit::Percent)
            .bands(15.0, 12.0, 9.0, 5.0),
        def("return_on_fixed_assets", "Return on Fixed Assets", SUB)
            .fields(&[NetIncome, PpeNet])
            .unit(OutputUnit::Percent)
            .bands(25.0, 18.0, 12.0, 6.0),
        def("operating_return_on_assets", "Operating Return on Assets", SUB)
            .fields(&[Ebit, TotalAssets])
            .unit(OutputUnit::Percent)
            .bands(15.0, 11.0, 8.0, 4.0),
        def("cash_return_on_assets", "Cash Return on Assets", SUB)
            .fields(&[OperatingCashFlow, TotalAssets])
            .unit(OutputUnit::Percent)
            .bands(15.0, 11.0, 8.0, 4.0),
        def("cost_of_goods_ratio", "Cost of Goods Ratio", SUB)
            .fields(&[CostOfGoodsSold, Revenue])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(50.0, 60.0, 70.0, 80.0),
        def("operating_expense_ratio", "Operating Expense Ratio", SUB)
            .fields(&[OperatingExpenses, Revenue])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(15.0, 20.0, 28.0, 35.0),
        def("sga_ratio", "SG&A Ratio", SUB)
            .fields(&[SellingExpenses, AdminExpenses, Revenue])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(10.0, 15.0, 20.0, 28.0),
        def("effective_tax_ratio", "Effective Tax Ratio", SUB)
            .fields(&[TaxExpense, PretaxIncome])
            .unit(OutputUnit::Percent)
            .lower_better()
            .bands(15.0, 21.0, 28.0, 35.0),
        def("interest_burden", "Interest Burden", SUB)
            .fields(&[PretaxIncome, Ebit])
            .bands(0.95, 0.9, 0.8, 0.65),
        def("tax_burden", "Tax Burden", SUB)
            .fields(&[NetIncome, PretaxIncome])
            .bands(0.85, 0.8, 0.72, 0.6),
        def("revenue_per_share", "Revenue per Share", SUB)
            .fields(&[Revenue, SharesOutstanding])
            .unit(OutputUnit::PerShare),
        def("gross_profit_to_assets", "Gross Profit to Assets", SUB)
            .fields(&[Revenue, CostOfGoodsSold, TotalAssets])
            .unit(OutputUnit::Percent)
            .bands(40.0, 30.0, 22.0, 12.0),
    ]
}
