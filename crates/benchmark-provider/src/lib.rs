//! Benchmark sources for sector/geography reference values.
//!
//! Providers implement the async [`BenchmarkProvider`] seam from
//! `analysis-core`. The pipeline treats every provider as slow and
//! unreliable: a missing or failed benchmark downgrades the affected
//! metric to its fallback classification, never the run.

use std::collections::HashMap;

use analysis_catalog::AnalysisCatalog;
use analysis_core::{BenchmarkError, BenchmarkProvider};
use async_trait::async_trait;
use tracing::trace;

/// In-memory benchmark table keyed by analysis id and sector, with an
/// optional per-geography scaling factor. The usual way to load curated
/// sector medians.
#[derive(Debug, Default)]
pub struct StaticBenchmarkProvider {
    benchmarks: HashMap<(String, String), f64>,
    geography_factors: HashMap<String, f64>,
}

impl StaticBenchmarkProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_benchmark(
        mut self,
        definition_id: impl Into<String>,
        sector: impl Into<String>,
        value: f64,
    ) -> Self {
        self.benchmarks
            .insert((definition_id.into(), sector.into()), value);
        self
    }

    /// Multiplier applied to every benchmark for one geography. Unlisted
    /// geographies use the sector value unscaled.
    pub fn with_geography_factor(mut self, geography: impl Into<String>, factor: f64) -> Self {
        self.geography_factors.insert(geography.into(), factor);
        self
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}

#[async_trait]
impl BenchmarkProvider for StaticBenchmarkProvider {
    async fn fetch(
        &self,
        definition_id: &str,
        sector: &str,
        geography: &str,
    ) -> Result<Option<f64>, BenchmarkError> {
        let key = (definition_id.to_string(), sector.to_string());
        let value = self.benchmarks.get(&key).map(|v| {
            let factor = self.geography_factors.get(geography).copied().unwrap_or(1.0);
            v * factor
        });
        trace!(definition_id, sector, geography, ?value, "benchmark lookup");
        Ok(value)
    }
}

/// Deterministic benchmarks derived from the catalog's own absolute
/// bands: each benchmarked metric gets the midpoint of its VeryGood and
/// Good thresholds, for every sector alike. Useful in tests and demos
/// where no curated table exists.
#[derive(Debug)]
pub struct StubBenchmarkProvider {
    values: HashMap<&'static str, f64>,
}

impl StubBenchmarkProvider {
    pub fn new(catalog: &AnalysisCatalog) -> Self {
        let values = catalog
            .list()
            .iter()
            .filter(|def| def.benchmark_applicable)
            .filter_map(|def| {
                let bands = def.absolute_bands?;
                Some((def.id, (bands.very_good + bands.good) / 2.0))
            })
            .collect();
        Self { values }
    }
}

#[async_trait]
impl BenchmarkProvider for StubBenchmarkProvider {
    async fn fetch(
        &self,
        definition_id: &str,
        _sector: &str,
        _geography: &str,
    ) -> Result<Option<f64>, BenchmarkError> {
        Ok(self.values.get(definition_id).copied())
    }
}

/// Provider that never has anything: every metric falls back to its
/// absolute bands or stays unrated.
#[derive(Debug, Default)]
pub struct NoBenchmarks;

#[async_trait]
impl BenchmarkProvider for NoBenchmarks {
    async fn fetch(
        &self,
        _definition_id: &str,
        _sector: &str,
        _geography: &str,
    ) -> Result<Option<f64>, BenchmarkError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_scales_by_geography() {
        let provider = StaticBenchmarkProvider::new()
            .with_benchmark("current_ratio", "manufacturing", 2.0)
            .with_geography_factor("emerging", 0.9);

        let base = provider
            .fetch("current_ratio", "manufacturing", "global")
            .await
            .unwrap();
        assert_eq!(base, Some(2.0));

        let scaled = provider
            .fetch("current_ratio", "manufacturing", "emerging")
            .await
            .unwrap();
        assert_eq!(scaled, Some(1.8));

        let missing = provider
            .fetch("current_ratio", "retail", "global")
            .await
            .unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn stub_provider_covers_banded_benchmarked_metrics() {
        let catalog = AnalysisCatalog::load().unwrap();
        let provider = StubBenchmarkProvider::new(&catalog);

        for def in catalog.list() {
            let value = provider.fetch(def.id, "any", "any").await.unwrap();
            if def.benchmark_applicable && def.absolute_bands.is_some() {
                assert!(value.is_some(), "{}", def.id);
            } else {
                assert_eq!(value, None, "{}", def.id);
            }
        }
    }

    #[tokio::test]
    async fn no_benchmarks_always_returns_none() {
        let value = NoBenchmarks.fetch("anything", "any", "any").await.unwrap();
        assert_eq!(value, None);
    }
}
