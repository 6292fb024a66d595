use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::statement::FieldRef;
use crate::types::Subcategory;

/// Failure of a single formula. Recorded on the owning `AnalysisResult`,
/// never propagated across the batch boundary.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComputationError {
    #[error("missing input field: {0}")]
    MissingInput(FieldRef),

    #[error("division by zero")]
    DivisionByZero,

    #[error("dependency unavailable: {0}")]
    DependencyUnavailable(String),

    #[error("not meaningful: {0}")]
    NotMeaningful(String),

    #[error("insufficient history: need {required} periods, have {available}")]
    InsufficientHistory { required: usize, available: usize },
}

/// Catalog consistency failure. Fatal at load time, before any run starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("duplicate analysis id: {0}")]
    DuplicateId(String),

    #[error("{subcategory:?}: expected {expected} definitions, found {actual}")]
    CountMismatch {
        subcategory: Subcategory,
        expected: usize,
        actual: usize,
    },

    #[error("catalog total: expected {expected} definitions, found {actual}")]
    TotalMismatch { expected: usize, actual: usize },

    #[error("unknown analysis id: {0}")]
    UnknownId(String),
}

/// Formula registry consistency failure. Fatal at load time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("no formula registered for analysis id: {0}")]
    MissingFormula(String),

    #[error("formula registered for unknown analysis id: {0}")]
    OrphanFormula(String),

    #[error("analysis {id} declares unknown dependency: {dependency}")]
    UnknownDependency { id: String, dependency: String },
}

/// Benchmark lookup failure. Local to one analysis id's benchmark field;
/// never an error on the result itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchmarkError {
    #[error("benchmark unavailable")]
    Unavailable,

    #[error("benchmark fetch timed out")]
    Timeout,

    #[error("benchmark provider error: {0}")]
    Provider(String),
}
