pub mod definition;
mod entries;
pub mod taxonomy;

use std::collections::HashMap;

use analysis_core::{AnalysisScope, CatalogError, Category, Subcategory};

pub use definition::{AbsoluteBands, AnalysisDefinition};
pub use taxonomy::{TAXONOMY, TOTAL_DEFINITIONS};

/// Immutable registry of all analysis definitions. Loaded once at process
/// start and validated against the published taxonomy before use.
pub struct AnalysisCatalog {
    definitions: Vec<AnalysisDefinition>,
    by_id: HashMap<&'static str, usize>,
}

impl AnalysisCatalog {
    /// Build and validate the catalog. Duplicate ids and taxonomy count
    /// mismatches are fatal here, before any run can start.
    pub fn load() -> Result<Self, CatalogError> {
        let definitions = entries::all();

        let mut by_id = HashMap::with_capacity(definitions.len());
        for (idx, def) in definitions.iter().enumerate() {
            if by_id.insert(def.id, idx).is_some() {
                return Err(CatalogError::DuplicateId(def.id.to_string()));
            }
        }

        for (subcategory, expected) in taxonomy::TAXONOMY {
            let actual = definitions
                .iter()
                .filter(|d| d.subcategory == subcategory)
                .count();
            if actual != expected {
                return Err(CatalogError::CountMismatch {
                    subcategory,
                    expected,
                    actual,
                });
            }
        }

        if definitions.len() != taxonomy::TOTAL_DEFINITIONS {
            return Err(CatalogError::TotalMismatch {
                expected: taxonomy::TOTAL_DEFINITIONS,
                actual: definitions.len(),
            });
        }

        Ok(Self { definitions, by_id })
    }

    pub fn list(&self) -> &[AnalysisDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&AnalysisDefinition, CatalogError> {
        self.by_id
            .get(id)
            .map(|&idx| &self.definitions[idx])
            .ok_or_else(|| CatalogError::UnknownId(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Filter by category and/or subcategory and/or an explicit id list.
    /// All criteria that are present must match.
    pub fn filter(
        &self,
        category: Option<Category>,
        subcategory: Option<Subcategory>,
        ids: Option<&[String]>,
    ) -> Vec<&AnalysisDefinition> {
        self.definitions
            .iter()
            .filter(|d| category.map_or(true, |c| d.category() == c))
            .filter(|d| subcategory.map_or(true, |s| d.subcategory == s))
            .filter(|d| ids.map_or(true, |ids| ids.iter().any(|id| id == d.id)))
            .collect()
    }

    /// Resolve a request scope to the definitions it selects. Unknown ids
    /// in a custom scope are an error; scope selection never silently
    /// drops an id.
    pub fn select(&self, scope: &AnalysisScope) -> Result<Vec<&AnalysisDefinition>, CatalogError> {
        match scope {
            AnalysisScope::Classical => Ok(self.filter(Some(Category::Classical), None, None)),
            AnalysisScope::Applied => Ok(self.filter(Some(Category::Applied), None, None)),
            AnalysisScope::Advanced => Ok(self.filter(Some(Category::Advanced), None, None)),
            AnalysisScope::Comprehensive => Ok(self.definitions.iter().collect()),
            AnalysisScope::Custom { ids } => {
                for id in ids {
                    if !self.contains(id) {
                        return Err(CatalogError::UnknownId(id.clone()));
                    }
                }
                Ok(self.filter(None, None, Some(ids)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::Direction;

    #[test]
    fn catalog_loads_with_180_definitions() {
        let catalog = AnalysisCatalog::load().unwrap();
        assert_eq!(catalog.len(), 180);
    }

    #[test]
    fn per_subcategory_counts_match_taxonomy() {
        let catalog = AnalysisCatalog::load().unwrap();
        for (subcategory, expected) in TAXONOMY {
            let actual = catalog
                .list()
                .iter()
                .filter(|d| d.subcategory == subcategory)
                .count();
            assert_eq!(actual, expected, "{:?}", subcategory);
        }
        let total: usize = TAXONOMY.iter().map(|(_, n)| n).sum();
        assert_eq!(total, TOTAL_DEFINITIONS);
    }

    #[test]
    fn ids_are_unique_and_resolvable() {
        let catalog = AnalysisCatalog::load().unwrap();
        for def in catalog.list() {
            assert_eq!(catalog.get(def.id).unwrap().id, def.id);
        }
        assert!(catalog.get("no_such_metric").is_err());
    }

    #[test]
    fn dependencies_stay_within_their_subcategory() {
        // Guarantees every scope that selects a dependent metric also
        // selects what it depends on.
        let catalog = AnalysisCatalog::load().unwrap();
        for def in catalog.list() {
            for dep in def.depends_on {
                let dep_def = catalog.get(dep).unwrap();
                assert_eq!(
                    dep_def.subcategory, def.subcategory,
                    "{} depends on {} across subcategories",
                    def.id, dep
                );
            }
        }
    }

    #[test]
    fn scope_selection() {
        let catalog = AnalysisCatalog::load().unwrap();
        assert_eq!(
            catalog.select(&AnalysisScope::Classical).unwrap().len(),
            100
        );
        assert_eq!(catalog.select(&AnalysisScope::Applied).unwrap().len(), 45);
        assert_eq!(catalog.select(&AnalysisScope::Advanced).unwrap().len(), 35);
        assert_eq!(
            catalog.select(&AnalysisScope::Comprehensive).unwrap().len(),
            180
        );

        let custom = AnalysisScope::Custom {
            ids: vec!["current_ratio".into(), "altman_z_score".into()],
        };
        assert_eq!(catalog.select(&custom).unwrap().len(), 2);

        let bad = AnalysisScope::Custom {
            ids: vec!["not_a_metric".into()],
        };
        assert!(catalog.select(&bad).is_err());
    }

    #[test]
    fn benchmarked_definitions_have_a_direction_fallback() {
        // Every benchmark-applicable definition with absolute bands must
        // order them consistently with its direction.
        let catalog = AnalysisCatalog::load().unwrap();
        for def in catalog.list() {
            if let Some(bands) = def.absolute_bands {
                match def.direction {
                    Direction::HigherBetter => {
                        assert!(
                            bands.excellent >= bands.very_good
                                && bands.very_good >= bands.good
                                && bands.good >= bands.acceptable,
                            "{} bands not descending",
                            def.id
                        );
                    }
                    Direction::LowerBetter => {
                        assert!(
                            bands.excellent <= bands.very_good
                                && bands.very_good <= bands.good
                                && bands.good <= bands.acceptable,
                            "{} bands not ascending",
                            def.id
                        );
                    }
                    Direction::TargetBand { .. } => {}
                }
            }
        }
    }
}
