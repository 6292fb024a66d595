use analysis_core::FieldRef::*;
use analysis_core::{OutputUnit, Subcategory};

use crate::definition::{def, AnalysisDefinition};

const SUB: Subcategory = Subcategory::Sensitivity;

/// What-if exposure ratios: how hard plausible single-factor shocks would
/// hit earnings or equity.
pub(crate) fn definitions() -> Vec<AnalysisDefinition> {
    vec![
        def("interest_rate_sensitivity", "Interest Rate Sensitivity", SUB)
            .fields(&[NetIncome])
            .unit(OutputUnit::Percent)
            .no_benchmark()
            .lower_better()
            .bands(2.0, 5.0, 10.0, 20.0),
        def("cost_inflation_sensitivity", "Cost Inflation Sensitivity", SUB)
            .fields(&[CostOfGoodsSold, OperatingExpenses, Ebit])
            .no_benchmark()
            .lower_better()
            .bands(4.0, 6.0, 9.0, 14.0),
        def("receivables_default_sensitivity", "Receivables Default Sensitivity", SUB)
            .fields(&[AccountsReceivable, NetIncome])
            .no_benchmark()
            .lower_better()
            .bands(1.0, 2.0, 3.5, 5.0),
        def("inventory_writedown_sensitivity", "Inventory Writedown Sensitivity", SUB)
            .fields(&[Inventory, TotalEquity])
            .no_benchmark()
            .lower_better()
            .bands(0.2, 0.35, 0.5, 0.8),
        def("revenue_shock_headroom", "Revenue Shock Headroom", SUB)
            .fields(&[Revenue, CostOfGoodsSold, Ebit])
            .no_benchmark()
            .bands(3.0, 2.0, 1.5, 1.0),
    ]
}
