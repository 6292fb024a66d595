use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Distress;

/// Bankruptcy and distress scoring models. All are absolute-scale scores
/// with published cutoffs; industry benchmarks do not apply.
pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("altman_z_score", "Altman Z-Score", SUB)
            .fields(&[
                CurrentAssets,
                CurrentLiabilities,
                RetainedEarnings,
                Ebit,
                TotalLiabilities,
                Revenue,
                TotalAssets,
            ])
            .unit(OutputUnit::Score)
            .no_benchmark()
            .bands(3.5, 3.0, 2.7, 1.8),
        def("altman_z_prime_score", "Altman Z'-Score (Private)", SUB)
            .fields(&[
                CurrentAssets,
                CurrentLiabilities,
                RetainedEarnings,
                Ebit,
                TotalEquity,
                TotalLiabilities,
                Revenue,
                TotalAssets,
            ])
            .unit(OutputUnit::Score)
            .no_benchmark()
            .bands(3.2, 2.9, 2.5, 1.23),
        def("altman_z_double_prime_score", "Altman Z''-Score (Non-Manufacturing)", SUB)
            .fields(&[
                CurrentAssets,
                CurrentLiabilities,
                RetainedEarnings,
                Ebit,
                TotalEquity,
                TotalLiabilities,
                TotalAssets,
            ])
            .unit(OutputUnit::Score)
            .no_benchmark()
            .bands(3.25, 2.6, 1.9, 1.1),
        def("springate_score", "Springate S-Score", SUB)
            .fields(&[
                CurrentAssets,
                CurrentLiabilities,
                Ebit,
                PretaxIncome,
                Revenue,
                TotalAssets,
            ])
            .unit(OutputUnit::Score)
            .no_benchmark()
            .bands(1.5, 1.2, 0.9, 0.6),
        def("taffler_score", "Taffler Z-Score", SUB)
            .fields(&[
                PretaxIncome,
                CurrentLiabilities,
                CurrentAssets,
                TotalLiabilities,
                TotalAssets,
                Revenue,
            ])
            .unit(OutputUnit::Score)
            .no_benchmark()
            .bands(0.6, 0.4, 0.3, 0.2),
        def("zmijewski_score", "Zmijewski X-Score", SUB)
            .fields(&[
                NetIncome,
                TotalAssets,
                TotalLiabilities,
                CurrentAssets,
                CurrentLiabilities,
            ])
            .unit(OutputUnit::Score)
            .no_benchmark()
            .lower_better()
            .bands(-1.5, -0.8, -0.3, 0.0),
        def("ohlson_o_score", "Ohlson O-Score", SUB)
            .fields(&[
                TotalAssets,
                TotalLiabilities,
                CurrentAssets,
                CurrentLiabilities,
                NetIncome,
                OperatingCashFlow,
                PriorNetIncome,
            ])
            .unit(OutputUnit::Score)
            .no_benchmark()
            .lower_better()
            .bands(-2.0, -1.0, -0.3, 0.5),
        def("grover_score", "Grover G-Score", SUB)
            .fields(&[
                CurrentAssets,
                CurrentLiabilities,
                Ebit,
                NetIncome,
                TotalAssets,
            ])
            .unit(OutputUnit::Score)
            .no_benchmark()
            .bands(1.0, 0.7, 0.4, 0.01),
    ]
}
