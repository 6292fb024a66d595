use analysis_core::Subcategory;

/// Published taxonomy: definitions per subcategory. The catalog is
/// validated against this table at load time and any mismatch is fatal.
pub const TAXONOMY: [(Subcategory, usize); 16] = [
    (Subcategory::Liquidity, 10),
    (Subcategory::Activity, 15),
    (Subcategory::Leverage, 15),
    (Subcategory::Profitability, 20),
    (Subcategory::Market, 15),
    (Subcategory::Structural, 13),
    (Subcategory::CashFlow, 12),
    (Subcategory::CreditRisk, 10),
    (Subcategory::Distress, 8),
    (Subcategory::Growth, 10),
    (Subcategory::Dupont, 5),
    (Subcategory::WorkingCapital, 12),
    (Subcategory::Statistical, 12),
    (Subcategory::Forecasting, 10),
    (Subcategory::Valuation, 8),
    (Subcategory::Sensitivity, 5),
];

/// Grand total the taxonomy must sum to.
pub const TOTAL_DEFINITIONS: usize = 180;
