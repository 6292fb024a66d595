use std::sync::{Arc, Mutex};
use std::time::Duration;

use analysis_core::{
    AnalysisRequest, AnalysisScope, BenchmarkError, BenchmarkProvider, HistoricalPeriod,
    PipelineStage, PriorPeriod, Rating, StageSeverity, Statement,
};
use benchmark_provider::{NoBenchmarks, StubBenchmarkProvider};

use crate::{AnalysisOrchestrator, CancelFlag, PipelineConfig, PipelineError};

/// Internally consistent statement of a healthy mid-size company, with
/// four years of history and a prior-period snapshot.
fn full_statement() -> Statement {
    let mut s = Statement::default();

    let bs = &mut s.balance_sheet;
    bs.cash_and_equivalents = Some(150_000.0);
    bs.short_term_investments = Some(50_000.0);
    bs.accounts_receivable = Some(180_000.0);
    bs.inventory = Some(120_000.0);
    bs.prepaid_expenses = Some(10_000.0);
    bs.current_assets = Some(510_000.0);
    bs.ppe_net = Some(600_000.0);
    bs.intangible_assets = Some(80_000.0);
    bs.goodwill = Some(40_000.0);
    bs.long_term_investments = Some(20_000.0);
    bs.non_current_assets = Some(740_000.0);
    bs.total_assets = Some(1_250_000.0);
    bs.accounts_payable = Some(90_000.0);
    bs.short_term_debt = Some(60_000.0);
    bs.accrued_liabilities = Some(30_000.0);
    bs.current_liabilities = Some(180_000.0);
    bs.long_term_debt = Some(320_000.0);
    bs.non_current_liabilities = Some(370_000.0);
    bs.total_liabilities = Some(550_000.0);
    bs.share_capital = Some(300_000.0);
    bs.retained_earnings = Some(400_000.0);
    bs.total_equity = Some(700_000.0);

    let is = &mut s.income_statement;
    is.revenue = Some(2_000_000.0);
    is.cost_of_goods_sold = Some(1_200_000.0);
    is.gross_profit = Some(800_000.0);
    is.operating_expenses = Some(520_000.0);
    is.selling_expenses = Some(200_000.0);
    is.admin_expenses = Some(120_000.0);
    is.depreciation_amortization = Some(110_000.0);
    is.operating_income = Some(280_000.0);
    is.interest_expense = Some(40_000.0);
    is.interest_income = Some(5_000.0);
    is.pretax_income = Some(245_000.0);
    is.tax_expense = Some(49_000.0);
    is.net_income = Some(196_000.0);

    let cf = &mut s.cash_flow;
    cf.operating_cash_flow = Some(260_000.0);
    cf.investing_cash_flow = Some(-150_000.0);
    cf.financing_cash_flow = Some(-80_000.0);
    cf.capital_expenditures = Some(130_000.0);
    cf.dividends_paid = Some(60_000.0);

    let m = &mut s.market;
    m.share_price = Some(25.0);
    m.shares_outstanding = Some(100_000.0);
    m.dividends_per_share = Some(0.6);
    m.beta = Some(1.1);

    s.prior = Some(PriorPeriod {
        revenue: Some(1_800_000.0),
        net_income: Some(170_000.0),
        total_assets: Some(1_150_000.0),
        total_equity: Some(640_000.0),
        operating_income: Some(250_000.0),
        eps: Some(1.7),
        dividends_per_share: Some(0.55),
        operating_cash_flow: Some(235_000.0),
    });

    let years = [
        ("2022", 1_500_000.0, 120_000.0, 180_000.0, 950_000.0, 500_000.0),
        ("2023", 1_650_000.0, 150_000.0, 205_000.0, 1_050_000.0, 560_000.0),
        ("2024", 1_800_000.0, 170_000.0, 235_000.0, 1_150_000.0, 640_000.0),
        ("2025", 2_000_000.0, 196_000.0, 260_000.0, 1_250_000.0, 700_000.0),
    ];
    s.history = years
        .into_iter()
        .map(|(label, rev, ni, ocf, ta, te)| HistoricalPeriod {
            label: label.to_string(),
            revenue: Some(rev),
            net_income: Some(ni),
            operating_cash_flow: Some(ocf),
            total_assets: Some(ta),
            total_equity: Some(te),
        })
        .collect();
    s
}

fn request(scope: AnalysisScope) -> AnalysisRequest {
    AnalysisRequest {
        scope,
        sector: "manufacturing".to_string(),
        geography: "global".to_string(),
        language: "en".to_string(),
    }
}

fn orchestrator(provider: Arc<dyn BenchmarkProvider>) -> AnalysisOrchestrator {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    AnalysisOrchestrator::new(provider, PipelineConfig::default()).unwrap()
}

fn stub_orchestrator() -> AnalysisOrchestrator {
    let catalog = analysis_catalog::AnalysisCatalog::load().unwrap();
    orchestrator(Arc::new(StubBenchmarkProvider::new(&catalog)))
}

#[tokio::test]
async fn comprehensive_run_computes_every_definition() {
    let orchestrator = stub_orchestrator();
    let statement = full_statement();
    let outcome = orchestrator
        .run(&statement, &request(AnalysisScope::Comprehensive))
        .await
        .unwrap();

    assert_eq!(outcome.results.len(), 180);
    for result in &outcome.results {
        assert!(
            result.error.is_none(),
            "{} failed: {:?}",
            result.definition_id,
            result.error
        );
        assert!(result.raw_value.is_some(), "{}", result.definition_id);
    }
    assert_eq!(outcome.state.stage, PipelineStage::Done);
    assert_eq!(outcome.state.progress_percent, 100);
    assert_eq!(outcome.state.completed_analyses.len(), 180);

    let summary = outcome.summary.unwrap();
    assert!(summary.overall_score.is_some());
    assert!(!summary.subcategory_scores.is_empty());
}

#[tokio::test]
async fn formula_failures_stay_on_their_own_results() {
    let orchestrator = stub_orchestrator();
    let mut statement = full_statement();
    statement.balance_sheet.current_liabilities = Some(0.0);

    let outcome = orchestrator
        .run(&statement, &request(AnalysisScope::Classical))
        .await
        .unwrap();

    let current_ratio = outcome
        .results
        .iter()
        .find(|r| r.definition_id == "current_ratio")
        .unwrap();
    assert!(current_ratio.error.is_some());
    assert_eq!(current_ratio.rating, Rating::Unrated);

    // An unrelated metric still computes and classifies.
    let net_margin = outcome
        .results
        .iter()
        .find(|r| r.definition_id == "net_margin")
        .unwrap();
    assert!(net_margin.error.is_none());
    assert!(net_margin.raw_value.is_some());
    assert!(outcome.summary.is_some());
}

#[tokio::test]
async fn dependent_metrics_receive_sibling_values() {
    let orchestrator = stub_orchestrator();
    let statement = full_statement();
    let outcome = orchestrator
        .run(&statement, &request(AnalysisScope::Classical))
        .await
        .unwrap();

    let value = |id: &str| {
        outcome
            .results
            .iter()
            .find(|r| r.definition_id == id)
            .unwrap()
            .raw_value
            .unwrap()
    };
    let expected = value("days_sales_inventory") + value("days_sales_outstanding")
        - value("days_payables_outstanding");
    assert!((value("cash_conversion_cycle") - expected).abs() < 1e-9);
}

#[tokio::test]
async fn progress_is_monotonic_and_ends_at_100() {
    let orchestrator = stub_orchestrator();
    let statement = full_statement();
    let reported: Mutex<Vec<u8>> = Mutex::new(Vec::new());
    let sink = |percent: u8, _stage: PipelineStage| {
        reported.lock().unwrap().push(percent);
    };

    orchestrator
        .run_with(
            &statement,
            &request(AnalysisScope::Comprehensive),
            &sink,
            &CancelFlag::new(),
        )
        .await
        .unwrap();

    let reported = reported.into_inner().unwrap();
    assert!(reported.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*reported.last().unwrap(), 100);
}

#[tokio::test]
async fn cancelled_run_returns_partial_outcome() {
    let orchestrator = stub_orchestrator();
    let statement = full_statement();
    let cancel = CancelFlag::new();
    cancel.cancel();

    let err = orchestrator
        .run_with(
            &statement,
            &request(AnalysisScope::Comprehensive),
            &analysis_core::NullProgress,
            &cancel,
        )
        .await
        .unwrap_err();

    let PipelineError::Cancelled(outcome) = err else {
        panic!("expected cancellation");
    };
    assert_eq!(outcome.state.stage, PipelineStage::Failed);
    assert!(outcome.summary.is_none());
    assert!(outcome.results.len() < 180);
    assert!(outcome
        .errors
        .iter()
        .any(|e| e.stage == PipelineStage::Compute && e.severity == StageSeverity::Warning));
}

struct SlowProvider;

#[async_trait::async_trait]
impl BenchmarkProvider for SlowProvider {
    async fn fetch(
        &self,
        _definition_id: &str,
        _sector: &str,
        _geography: &str,
    ) -> Result<Option<f64>, BenchmarkError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Some(1.0))
    }
}

#[tokio::test(start_paused = true)]
async fn benchmark_timeouts_degrade_instead_of_failing() {
    let config = PipelineConfig {
        benchmark_timeout: Duration::from_millis(10),
        ..PipelineConfig::default()
    };
    let orchestrator = AnalysisOrchestrator::new(Arc::new(SlowProvider), config).unwrap();
    let statement = full_statement();

    let outcome = orchestrator
        .run(&statement, &request(AnalysisScope::Classical))
        .await
        .unwrap();

    assert_eq!(outcome.state.stage, PipelineStage::Done);
    assert!(outcome
        .errors
        .iter()
        .any(|e| e.stage == PipelineStage::Benchmark && e.message.contains("timed out")));
    // Metrics with absolute bands still classify via the fallback path.
    let current_ratio = outcome
        .results
        .iter()
        .find(|r| r.definition_id == "current_ratio")
        .unwrap();
    assert_ne!(current_ratio.rating, Rating::Unrated);
    assert_eq!(current_ratio.benchmark_value, None);
}

#[tokio::test]
async fn unknown_custom_id_is_rejected_before_compute() {
    let orchestrator = orchestrator(Arc::new(NoBenchmarks));
    let statement = full_statement();
    let scope = AnalysisScope::Custom {
        ids: vec!["not_a_metric".to_string()],
    };

    let err = orchestrator.run(&statement, &request(scope)).await.unwrap_err();
    let PipelineError::UnknownAnalysis(id) = err else {
        panic!("expected unknown-analysis error, got {err}");
    };
    assert_eq!(id, "not_a_metric");
}

#[tokio::test]
async fn empty_statement_fails_the_ingest_stage() {
    let orchestrator = orchestrator(Arc::new(NoBenchmarks));
    let statement = Statement::default();

    let err = orchestrator
        .run(&statement, &request(AnalysisScope::Classical))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::CriticalStage {
            stage: PipelineStage::Ingest,
            ..
        }
    ));
}

#[tokio::test]
async fn inconsistent_balance_sheet_warns_but_runs() {
    let orchestrator = orchestrator(Arc::new(NoBenchmarks));
    let mut statement = full_statement();
    statement.balance_sheet.total_liabilities = Some(400_000.0);

    let outcome = orchestrator
        .run(&statement, &request(AnalysisScope::Classical))
        .await
        .unwrap();
    assert!(outcome
        .errors
        .iter()
        .any(|e| e.stage == PipelineStage::Ingest && e.severity == StageSeverity::Warning));
    assert_eq!(outcome.state.stage, PipelineStage::Done);
}

#[tokio::test]
async fn custom_scope_runs_exactly_the_requested_ids() {
    let orchestrator = stub_orchestrator();
    let statement = full_statement();
    let scope = AnalysisScope::Custom {
        ids: vec![
            "current_ratio".to_string(),
            "days_sales_inventory".to_string(),
            "inventory_turnover".to_string(),
        ],
    };

    let outcome = orchestrator.run(&statement, &request(scope)).await.unwrap();
    assert_eq!(outcome.results.len(), 3);
    // The dependent metric found its sibling because the turnover was
    // also selected.
    let dsi = outcome
        .results
        .iter()
        .find(|r| r.definition_id == "days_sales_inventory")
        .unwrap();
    assert!(dsi.error.is_none());
}
