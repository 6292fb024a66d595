//! Formula registry and computation planning for the analysis catalog.
//!
//! Every catalog entry maps to exactly one pure formula function. The
//! registry validates that mapping at construction time, so a running
//! pipeline can assume full coverage.

use std::collections::{HashMap, HashSet};

use analysis_catalog::{AnalysisCatalog, AnalysisDefinition};
use analysis_core::{ComputationError, RegistryError};
use tracing::debug;

mod advanced;
pub mod input;
mod models;
mod ratios;

pub use input::FormulaInput;

pub(crate) type FormulaFn = fn(&FormulaInput) -> Result<f64, ComputationError>;

pub struct FormulaRegistry {
    formulas: HashMap<&'static str, FormulaFn>,
}

impl FormulaRegistry {
    /// Builds the full formula table and cross-checks it against the
    /// catalog: every definition needs a formula, every formula needs a
    /// definition, and every declared dependency must be a catalog id.
    pub fn new(catalog: &AnalysisCatalog) -> Result<Self, RegistryError> {
        let mut formulas: HashMap<&'static str, FormulaFn> = HashMap::new();
        ratios::liquidity::register(&mut formulas);
        ratios::activity::register(&mut formulas);
        ratios::leverage::register(&mut formulas);
        ratios::profitability::register(&mut formulas);
        ratios::market::register(&mut formulas);
        ratios::structural::register(&mut formulas);
        ratios::cash_flow::register(&mut formulas);
        models::credit_risk::register(&mut formulas);
        models::distress::register(&mut formulas);
        models::growth::register(&mut formulas);
        models::dupont::register(&mut formulas);
        models::working_capital::register(&mut formulas);
        advanced::statistical::register(&mut formulas);
        advanced::forecasting::register(&mut formulas);
        advanced::valuation::register(&mut formulas);
        advanced::sensitivity::register(&mut formulas);

        for def in catalog.list() {
            if !formulas.contains_key(def.id) {
                return Err(RegistryError::MissingFormula(def.id.to_string()));
            }
            for dep in def.depends_on {
                if !catalog.contains(dep) {
                    return Err(RegistryError::UnknownDependency {
                        id: def.id.to_string(),
                        dependency: dep.to_string(),
                    });
                }
            }
        }
        for id in formulas.keys() {
            if !catalog.contains(id) {
                return Err(RegistryError::OrphanFormula(id.to_string()));
            }
        }
        debug!(formulas = formulas.len(), "formula registry validated");
        Ok(Self { formulas })
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Evaluates one definition. Pure: same statement and siblings always
    /// produce the same outcome.
    pub fn compute(
        &self,
        def: &AnalysisDefinition,
        input: &FormulaInput,
    ) -> Result<f64, ComputationError> {
        let available = input.statement.history.len();
        if available < def.min_history {
            return Err(ComputationError::InsufficientHistory {
                required: def.min_history,
                available,
            });
        }
        let formula = self
            .formulas
            .get(def.id)
            .ok_or_else(|| ComputationError::DependencyUnavailable(def.id.to_string()))?;
        let value = formula(input)?;
        if !value.is_finite() {
            return Err(ComputationError::NotMeaningful(
                "non-finite result".to_string(),
            ));
        }
        Ok(value)
    }

    /// Orders a selection into dependency levels: everything in level N
    /// depends only on metrics in levels below N. Levels run sequentially;
    /// entries within one level are independent and may run concurrently.
    ///
    /// A dependency outside the selection counts as resolved here; the
    /// dependent then fails at compute time with `DependencyUnavailable`
    /// instead of blocking the whole plan.
    pub fn plan<'a>(&self, selected: &[&'a AnalysisDefinition]) -> Vec<Vec<&'a AnalysisDefinition>> {
        let selected_ids: HashSet<&str> = selected.iter().map(|d| d.id).collect();
        let mut placed: HashSet<&str> = HashSet::new();
        let mut remaining: Vec<&AnalysisDefinition> = selected.to_vec();
        let mut levels = Vec::new();

        while !remaining.is_empty() {
            let (ready, blocked): (Vec<_>, Vec<_>) = remaining.into_iter().partition(|def| {
                def.depends_on
                    .iter()
                    .all(|dep| !selected_ids.contains(dep) || placed.contains(dep))
            });
            if ready.is_empty() {
                // Dependency cycle; the catalog does not contain one, but
                // never loop forever on a bad custom selection.
                levels.push(blocked);
                break;
            }
            for def in &ready {
                placed.insert(def.id);
            }
            remaining = blocked;
            levels.push(ready);
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::{AnalysisScope, Statement};

    fn catalog() -> AnalysisCatalog {
        AnalysisCatalog::load().unwrap()
    }

    fn registry(catalog: &AnalysisCatalog) -> FormulaRegistry {
        FormulaRegistry::new(catalog).unwrap()
    }

    fn statement() -> Statement {
        let mut s = Statement::default();
        s.balance_sheet.current_assets = Some(500_000.0);
        s.balance_sheet.current_liabilities = Some(250_000.0);
        s.balance_sheet.inventory = Some(120_000.0);
        s.income_statement.revenue = Some(1_200_000.0);
        s.income_statement.cost_of_goods_sold = Some(720_000.0);
        s
    }

    fn input<'a>(
        statement: &'a Statement,
        siblings: &'a HashMap<String, f64>,
    ) -> FormulaInput<'a> {
        FormulaInput {
            statement,
            siblings,
        }
    }

    #[test]
    fn registry_covers_every_catalog_entry() {
        let catalog = catalog();
        let registry = registry(&catalog);
        assert_eq!(registry.len(), catalog.len());
    }

    #[test]
    fn current_ratio_divides_current_assets_by_liabilities() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let statement = statement();
        let siblings = HashMap::new();
        let def = catalog.get("current_ratio").unwrap();
        let value = registry.compute(def, &input(&statement, &siblings)).unwrap();
        assert!((value - 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_denominator_is_a_declared_failure() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let mut statement = statement();
        statement.balance_sheet.current_liabilities = Some(0.0);
        let siblings = HashMap::new();
        let def = catalog.get("current_ratio").unwrap();
        let err = registry
            .compute(def, &input(&statement, &siblings))
            .unwrap_err();
        assert_eq!(err, ComputationError::DivisionByZero);
    }

    #[test]
    fn missing_field_names_the_field() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let statement = Statement::default();
        let siblings = HashMap::new();
        let def = catalog.get("current_ratio").unwrap();
        let err = registry
            .compute(def, &input(&statement, &siblings))
            .unwrap_err();
        assert!(matches!(err, ComputationError::MissingInput(_)));
    }

    #[test]
    fn tax_rate_comes_from_the_statement_helper() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let mut statement = statement();
        statement.income_statement.tax_expense = Some(25_000.0);
        statement.income_statement.pretax_income = Some(100_000.0);
        let siblings = HashMap::new();
        let def = catalog.get("effective_tax_ratio").unwrap();
        let value = registry.compute(def, &input(&statement, &siblings)).unwrap();
        assert!((value - 25.0).abs() < 1e-9);

        statement.income_statement.pretax_income = Some(-10_000.0);
        let err = registry
            .compute(def, &input(&statement, &siblings))
            .unwrap_err();
        assert!(matches!(err, ComputationError::NotMeaningful(_)));
    }

    #[test]
    fn day_count_metrics_read_sibling_turnovers() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let statement = statement();
        let mut siblings = HashMap::new();
        siblings.insert("inventory_turnover".to_string(), 8.5);
        let def = catalog.get("days_sales_inventory").unwrap();
        let value = registry.compute(def, &input(&statement, &siblings)).unwrap();
        assert!((value - 365.0 / 8.5).abs() < 1e-9);
    }

    #[test]
    fn absent_sibling_fails_the_dependent_only() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let statement = statement();
        let siblings = HashMap::new();
        let def = catalog.get("days_sales_inventory").unwrap();
        let err = registry
            .compute(def, &input(&statement, &siblings))
            .unwrap_err();
        assert_eq!(
            err,
            ComputationError::DependencyUnavailable("inventory_turnover".to_string())
        );
    }

    #[test]
    fn history_gate_runs_before_the_formula() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let statement = statement();
        let siblings = HashMap::new();
        let def = catalog.get("revenue_cagr").unwrap();
        let err = registry
            .compute(def, &input(&statement, &siblings))
            .unwrap_err();
        assert_eq!(
            err,
            ComputationError::InsufficientHistory {
                required: 3,
                available: 0,
            }
        );
    }

    #[test]
    fn computation_is_idempotent() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let statement = statement();
        let siblings = HashMap::new();
        let def = catalog.get("current_ratio").unwrap();
        let a = registry.compute(def, &input(&statement, &siblings)).unwrap();
        let b = registry.compute(def, &input(&statement, &siblings)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn plan_levels_respect_dependency_chains() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let selected = catalog.select(&AnalysisScope::Comprehensive).unwrap();
        let levels = registry.plan(&selected);

        let level_of = |id: &str| -> usize {
            levels
                .iter()
                .position(|level| level.iter().any(|d| d.id == id))
                .unwrap()
        };
        assert_eq!(level_of("inventory_turnover"), 0);
        assert_eq!(level_of("days_sales_inventory"), 1);
        assert_eq!(level_of("operating_cycle"), 2);
        assert_eq!(level_of("cash_conversion_cycle"), 2);
        assert!(level_of("days_payables_outstanding") < level_of("cash_conversion_cycle"));

        let total: usize = levels.iter().map(Vec::len).sum();
        assert_eq!(total, selected.len());
    }

    #[test]
    fn plan_treats_unselected_dependencies_as_resolved() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let selected = vec![catalog.get("days_sales_inventory").unwrap()];
        let levels = registry.plan(&selected);
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].len(), 1);
    }

    #[test]
    fn altman_z_matches_hand_computed_value() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let mut s = Statement::default();
        s.balance_sheet.current_assets = Some(400.0);
        s.balance_sheet.current_liabilities = Some(200.0);
        s.balance_sheet.total_assets = Some(1_000.0);
        s.balance_sheet.total_liabilities = Some(500.0);
        s.balance_sheet.total_equity = Some(500.0);
        s.balance_sheet.retained_earnings = Some(300.0);
        s.income_statement.revenue = Some(1_500.0);
        s.income_statement.operating_income = Some(150.0);
        let siblings = HashMap::new();
        let def = catalog.get("altman_z_score").unwrap();
        let value = registry.compute(def, &input(&s, &siblings)).unwrap();
        // 1.2*0.2 + 1.4*0.3 + 3.3*0.15 + 0.6*1.0 + 1.0*1.5
        assert!((value - 3.255).abs() < 1e-9);
    }

    #[test]
    fn negative_working_capital_is_not_meaningful_as_a_base() {
        let catalog = catalog();
        let registry = registry(&catalog);
        let mut s = Statement::default();
        s.balance_sheet.current_assets = Some(100.0);
        s.balance_sheet.current_liabilities = Some(250.0);
        s.balance_sheet.inventory = Some(50.0);
        let siblings = HashMap::new();
        let def = catalog.get("inventory_to_working_capital").unwrap();
        let err = registry.compute(def, &input(&s, &siblings)).unwrap_err();
        assert!(matches!(err, ComputationError::NotMeaningful(_)));
    }
}
