use std::collections::HashMap;

use analysis_core::{ComputationError, FieldRef, Statement};

/// Read-only inputs of one formula evaluation: the statement plus the
/// sibling values already computed earlier in the same run.
pub struct FormulaInput<'a> {
    pub statement: &'a Statement,
    pub siblings: &'a HashMap<String, f64>,
}

impl FormulaInput<'_> {
    /// Required scalar field.
    pub fn req(&self, field: FieldRef) -> Result<f64, ComputationError> {
        self.statement
            .field(field)
            .ok_or(ComputationError::MissingInput(field))
    }

    /// Optional scalar field.
    pub fn opt(&self, field: FieldRef) -> Option<f64> {
        self.statement.field(field)
    }

    /// Sibling value computed earlier in the same batch. Absent (not
    /// selected, not yet computed, or errored) means the dependent metric
    /// fails on its own rather than re-triggering computation.
    pub fn dep(&self, id: &str) -> Result<f64, ComputationError> {
        self.siblings
            .get(id)
            .copied()
            .ok_or_else(|| ComputationError::DependencyUnavailable(id.to_string()))
    }

    pub fn ebit(&self) -> Result<f64, ComputationError> {
        self.statement
            .ebit()
            .ok_or(ComputationError::MissingInput(FieldRef::Ebit))
    }

    pub fn ebitda(&self) -> Result<f64, ComputationError> {
        self.statement
            .ebitda()
            .ok_or(ComputationError::MissingInput(FieldRef::Ebitda))
    }

    pub fn gross_profit(&self) -> Result<f64, ComputationError> {
        self.statement
            .gross_profit()
            .ok_or(ComputationError::MissingInput(FieldRef::GrossProfit))
    }

    pub fn free_cash_flow(&self) -> Result<f64, ComputationError> {
        self.statement
            .free_cash_flow()
            .ok_or(ComputationError::MissingInput(FieldRef::FreeCashFlow))
    }

    pub fn market_cap(&self) -> Result<f64, ComputationError> {
        self.statement
            .market_cap()
            .ok_or(ComputationError::MissingInput(FieldRef::MarketCap))
    }

    pub fn eps(&self) -> Result<f64, ComputationError> {
        self.statement
            .eps()
            .ok_or(ComputationError::MissingInput(FieldRef::Eps))
    }

    pub fn book_value_per_share(&self) -> Result<f64, ComputationError> {
        self.statement
            .book_value_per_share()
            .ok_or(ComputationError::MissingInput(FieldRef::BookValuePerShare))
    }

    /// Short-term plus long-term debt; missing when neither side is known.
    pub fn total_debt(&self) -> Result<f64, ComputationError> {
        self.statement
            .total_debt()
            .ok_or(ComputationError::MissingInput(FieldRef::LongTermDebt))
    }

    pub fn net_debt(&self) -> Result<f64, ComputationError> {
        let debt = self.total_debt()?;
        let cash = self.req(FieldRef::CashAndEquivalents)?;
        let sti = self.opt(FieldRef::ShortTermInvestments).unwrap_or(0.0);
        Ok(debt - cash - sti)
    }

    /// Effective tax rate from the statement; pretax must be positive.
    pub fn tax_rate(&self) -> Result<f64, ComputationError> {
        self.req(FieldRef::TaxExpense)?;
        self.req(FieldRef::PretaxIncome)?;
        self.statement
            .effective_tax_rate()
            .ok_or_else(|| not_meaningful("non-positive pretax income"))
    }
}

/// Checked division. A zero denominator is always a declared failure,
/// never a silent Infinity/NaN.
pub fn div(numerator: f64, denominator: f64) -> Result<f64, ComputationError> {
    if denominator == 0.0 {
        Err(ComputationError::DivisionByZero)
    } else {
        Ok(numerator / denominator)
    }
}

/// Ratio to percent.
pub fn pct(value: f64) -> f64 {
    value * 100.0
}

pub fn not_meaningful(reason: &str) -> ComputationError {
    ComputationError::NotMeaningful(reason.to_string())
}
