use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Dupont;

pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("dupont_return_on_equity", "DuPont ROE (3-Factor)", SUB)
            .fields(&[NetIncome, Revenue, TotalAssets, TotalEquity])
            .unit(OutputUnit::Percent)
            .bands(20.0, 15.0, 10.0, 5.0),
        def("dupont_return_on_assets", "DuPont ROA (2-Factor)", SUB)
            .fields(&[NetIncome, Revenue, TotalAssets])
            .unit(OutputUnit::Percent)
            .bands(12.0, 9.0, 6.0, 3.0),
        def("dupont_five_factor_roe", "DuPont ROE (5-Factor)", SUB)
            .fields(&[
                NetIncome,
                PretaxIncome,
                Ebit,
                Revenue,
                TotalAssets,
                TotalEquity,
            ])
            .unit(OutputUnit::Percent)
            .bands(20.0, 15.0, 10.0, 5.0),
        def("degree_of_operating_leverage", "Degree of Operating Leverage", SUB)
            .fields(&[Revenue, CostOfGoodsSold, Ebit])
            .target_band(1.2, 2.5),
        def("degree_of_total_leverage", "Degree of Total Leverage", SUB)
            .fields(&[Ebit, InterestExpense])
            .depends(&["degree_of_operating_leverage"])
            .target_band(1.5, 3.5),
    ]
}
