use serde::{Deserialize, Serialize};

/// Balance sheet section of a normalized statement. All fields optional;
/// formulas declare which ones they require.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub cash_and_equivalents: Option<f64>,
    pub short_term_investments: Option<f64>,
    pub accounts_receivable: Option<f64>,
    pub inventory: Option<f64>,
    pub prepaid_expenses: Option<f64>,
    pub current_assets: Option<f64>,
    pub ppe_net: Option<f64>,
    pub intangible_assets: Option<f64>,
    pub goodwill: Option<f64>,
    pub long_term_investments: Option<f64>,
    pub non_current_assets: Option<f64>,
    pub total_assets: Option<f64>,
    pub accounts_payable: Option<f64>,
    pub short_term_debt: Option<f64>,
    pub accrued_liabilities: Option<f64>,
    pub current_liabilities: Option<f64>,
    pub long_term_debt: Option<f64>,
    pub non_current_liabilities: Option<f64>,
    pub total_liabilities: Option<f64>,
    pub share_capital: Option<f64>,
    pub retained_earnings: Option<f64>,
    pub total_equity: Option<f64>,
}

/// Income statement section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub revenue: Option<f64>,
    pub cost_of_goods_sold: Option<f64>,
    pub gross_profit: Option<f64>,
    pub operating_expenses: Option<f64>,
    pub selling_expenses: Option<f64>,
    pub admin_expenses: Option<f64>,
    pub depreciation_amortization: Option<f64>,
    pub operating_income: Option<f64>,
    pub ebit: Option<f64>,
    pub ebitda: Option<f64>,
    pub interest_expense: Option<f64>,
    pub interest_income: Option<f64>,
    pub pretax_income: Option<f64>,
    pub tax_expense: Option<f64>,
    pub net_income: Option<f64>,
}

/// Cash flow statement section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashFlowStatement {
    pub operating_cash_flow: Option<f64>,
    pub investing_cash_flow: Option<f64>,
    pub financing_cash_flow: Option<f64>,
    pub capital_expenditures: Option<f64>,
    pub dividends_paid: Option<f64>,
    pub free_cash_flow: Option<f64>,
}

/// Market data section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketData {
    pub share_price: Option<f64>,
    pub shares_outstanding: Option<f64>,
    pub market_cap: Option<f64>,
    pub eps: Option<f64>,
    pub dividends_per_share: Option<f64>,
    pub book_value_per_share: Option<f64>,
    pub beta: Option<f64>,
}

/// Prior-period snapshot used by growth metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriorPeriod {
    pub revenue: Option<f64>,
    pub net_income: Option<f64>,
    pub total_assets: Option<f64>,
    pub total_equity: Option<f64>,
    pub operating_income: Option<f64>,
    pub eps: Option<f64>,
    pub dividends_per_share: Option<f64>,
    pub operating_cash_flow: Option<f64>,
}

/// One period in the multi-year series consumed by the statistical and
/// forecasting models. Ordered oldest first in `Statement::history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoricalPeriod {
    pub label: String,
    pub revenue: Option<f64>,
    pub net_income: Option<f64>,
    pub operating_cash_flow: Option<f64>,
    pub total_assets: Option<f64>,
    pub total_equity: Option<f64>,
}

/// Normalized financial statement. Owned by the caller for the duration of
/// one run; the engine never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statement {
    pub balance_sheet: BalanceSheet,
    pub income_statement: IncomeStatement,
    pub cash_flow: CashFlowStatement,
    pub market: MarketData,
    #[serde(default)]
    pub prior: Option<PriorPeriod>,
    #[serde(default)]
    pub history: Vec<HistoricalPeriod>,
}

/// Addressable field of a `Statement`. The catalog declares required fields
/// in terms of these, and `Statement::field` is the single scalar read path,
/// so declarations stay checkable against actual lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRef {
    // Balance sheet
    CashAndEquivalents,
    ShortTermInvestments,
    AccountsReceivable,
    Inventory,
    PrepaidExpenses,
    CurrentAssets,
    PpeNet,
    IntangibleAssets,
    Goodwill,
    LongTermInvestments,
    NonCurrentAssets,
    TotalAssets,
    AccountsPayable,
    ShortTermDebt,
    AccruedLiabilities,
    CurrentLiabilities,
    LongTermDebt,
    NonCurrentLiabilities,
    TotalLiabilities,
    ShareCapital,
    RetainedEarnings,
    TotalEquity,
    // Income statement
    Revenue,
    CostOfGoodsSold,
    GrossProfit,
    OperatingExpenses,
    SellingExpenses,
    AdminExpenses,
    DepreciationAmortization,
    OperatingIncome,
    Ebit,
    Ebitda,
    InterestExpense,
    InterestIncome,
    PretaxIncome,
    TaxExpense,
    NetIncome,
    // Cash flow
    OperatingCashFlow,
    InvestingCashFlow,
    FinancingCashFlow,
    CapitalExpenditures,
    DividendsPaid,
    FreeCashFlow,
    // Market
    SharePrice,
    SharesOutstanding,
    MarketCap,
    Eps,
    DividendsPerShare,
    BookValuePerShare,
    Beta,
    // Prior period
    PriorRevenue,
    PriorNetIncome,
    PriorTotalAssets,
    PriorTotalEquity,
    PriorOperatingIncome,
    PriorEps,
    PriorDividendsPerShare,
    PriorOperatingCashFlow,
}

impl FieldRef {
    pub fn name(&self) -> &'static str {
        match self {
            FieldRef::CashAndEquivalents => "cash_and_equivalents",
            FieldRef::ShortTermInvestments => "short_term_investments",
            FieldRef::AccountsReceivable => "accounts_receivable",
            FieldRef::Inventory => "inventory",
            FieldRef::PrepaidExpenses => "prepaid_expenses",
            FieldRef::CurrentAssets => "current_assets",
            FieldRef::PpeNet => "ppe_net",
            FieldRef::IntangibleAssets => "intangible_assets",
            FieldRef::Goodwill => "goodwill",
            FieldRef::LongTermInvestments => "long_term_investments",
            FieldRef::NonCurrentAssets => "non_current_assets",
            FieldRef::TotalAssets => "total_assets",
            FieldRef::AccountsPayable => "accounts_payable",
            FieldRef::ShortTermDebt => "short_term_debt",
            FieldRef::AccruedLiabilities => "accrued_liabilities",
            FieldRef::CurrentLiabilities => "current_liabilities",
            FieldRef::LongTermDebt => "long_term_debt",
            FieldRef::NonCurrentLiabilities => "non_current_liabilities",
            FieldRef::TotalLiabilities => "total_liabilities",
            FieldRef::ShareCapital => "share_capital",
            FieldRef::RetainedEarnings => "retained_earnings",
            FieldRef::TotalEquity => "total_equity",
            FieldRef::Revenue => "revenue",
            FieldRef::CostOfGoodsSold => "cost_of_goods_sold",
            FieldRef::GrossProfit => "gross_profit",
            FieldRef::OperatingExpenses => "operating_expenses",
            FieldRef::SellingExpenses => "selling_expenses",
            FieldRef::AdminExpenses => "admin_expenses",
            FieldRef::DepreciationAmortization => "depreciation_amortization",
            FieldRef::OperatingIncome => "operating_income",
            FieldRef::Ebit => "ebit",
            FieldRef::Ebitda => "ebitda",
            FieldRef::InterestExpense => "interest_expense",
            FieldRef::InterestIncome => "interest_income",
            FieldRef::PretaxIncome => "pretax_income",
            FieldRef::TaxExpense => "tax_expense",
            FieldRef::NetIncome => "net_income",
            FieldRef::OperatingCashFlow => "operating_cash_flow",
            FieldRef::InvestingCashFlow => "investing_cash_flow",
            FieldRef::FinancingCashFlow => "financing_cash_flow",
            FieldRef::CapitalExpenditures => "capital_expenditures",
            FieldRef::DividendsPaid => "dividends_paid",
            FieldRef::FreeCashFlow => "free_cash_flow",
            FieldRef::SharePrice => "share_price",
            FieldRef::SharesOutstanding => "shares_outstanding",
            FieldRef::MarketCap => "market_cap",
            FieldRef::Eps => "eps",
            FieldRef::DividendsPerShare => "dividends_per_share",
            FieldRef::BookValuePerShare => "book_value_per_share",
            FieldRef::Beta => "beta",
            FieldRef::PriorRevenue => "prior_revenue",
            FieldRef::PriorNetIncome => "prior_net_income",
            FieldRef::PriorTotalAssets => "prior_total_assets",
            FieldRef::PriorTotalEquity => "prior_total_equity",
            FieldRef::PriorOperatingIncome => "prior_operating_income",
            FieldRef::PriorEps => "prior_eps",
            FieldRef::PriorDividendsPerShare => "prior_dividends_per_share",
            FieldRef::PriorOperatingCashFlow => "prior_operating_cash_flow",
        }
    }
}

impl std::fmt::Display for FieldRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Statement {
    /// Scalar field lookup. Prior-period refs resolve through `prior`.
    pub fn field(&self, field: FieldRef) -> Option<f64> {
        let bs = &self.balance_sheet;
        let is = &self.income_statement;
        let cf = &self.cash_flow;
        let mk = &self.market;
        match field {
            FieldRef::CashAndEquivalents => bs.cash_and_equivalents,
            FieldRef::ShortTermInvestments => bs.short_term_investments,
            FieldRef::AccountsReceivable => bs.accounts_receivable,
            FieldRef::Inventory => bs.inventory,
            FieldRef::PrepaidExpenses => bs.prepaid_expenses,
            FieldRef::CurrentAssets => bs.current_assets,
            FieldRef::PpeNet => bs.ppe_net,
            FieldRef::IntangibleAssets => bs.intangible_assets,
            FieldRef::Goodwill => bs.goodwill,
            FieldRef::LongTermInvestments => bs.long_term_investments,
            FieldRef::NonCurrentAssets => bs.non_current_assets,
            FieldRef::TotalAssets => bs.total_assets,
            FieldRef::AccountsPayable => bs.accounts_payable,
            FieldRef::ShortTermDebt => bs.short_term_debt,
            FieldRef::AccruedLiabilities => bs.accrued_liabilities,
            FieldRef::CurrentLiabilities => bs.current_liabilities,
            FieldRef::LongTermDebt => bs.long_term_debt,
            FieldRef::NonCurrentLiabilities => bs.non_current_liabilities,
            FieldRef::TotalLiabilities => bs.total_liabilities,
            FieldRef::ShareCapital => bs.share_capital,
            FieldRef::RetainedEarnings => bs.retained_earnings,
            FieldRef::TotalEquity => bs.total_equity,
            FieldRef::Revenue => is.revenue,
            FieldRef::CostOfGoodsSold => is.cost_of_goods_sold,
            FieldRef::GrossProfit => is.gross_profit,
            FieldRef::OperatingExpenses => is.operating_expenses,
            FieldRef::SellingExpenses => is.selling_expenses,
            FieldRef::AdminExpenses => is.admin_expenses,
            FieldRef::DepreciationAmortization => is.depreciation_amortization,
            FieldRef::OperatingIncome => is.operating_income,
            FieldRef::Ebit => is.ebit,
            FieldRef::Ebitda => is.ebitda,
            FieldRef::InterestExpense => is.interest_expense,
            FieldRef::InterestIncome => is.interest_income,
            FieldRef::PretaxIncome => is.pretax_income,
            FieldRef::TaxExpense => is.tax_expense,
            FieldRef::NetIncome => is.net_income,
            FieldRef::OperatingCashFlow => cf.operating_cash_flow,
            FieldRef::InvestingCashFlow => cf.investing_cash_flow,
            FieldRef::FinancingCashFlow => cf.financing_cash_flow,
            FieldRef::CapitalExpenditures => cf.capital_expenditures,
            FieldRef::DividendsPaid => cf.dividends_paid,
            FieldRef::FreeCashFlow => cf.free_cash_flow,
            FieldRef::SharePrice => mk.share_price,
            FieldRef::SharesOutstanding => mk.shares_outstanding,
            FieldRef::MarketCap => mk.market_cap,
            FieldRef::Eps => mk.eps,
            FieldRef::DividendsPerShare => mk.dividends_per_share,
            FieldRef::BookValuePerShare => mk.book_value_per_share,
            FieldRef::Beta => mk.beta,
            FieldRef::PriorRevenue => self.prior.as_ref().and_then(|p| p.revenue),
            FieldRef::PriorNetIncome => self.prior.as_ref().and_then(|p| p.net_income),
            FieldRef::PriorTotalAssets => self.prior.as_ref().and_then(|p| p.total_assets),
            FieldRef::PriorTotalEquity => self.prior.as_ref().and_then(|p| p.total_equity),
            FieldRef::PriorOperatingIncome => self.prior.as_ref().and_then(|p| p.operating_income),
            FieldRef::PriorEps => self.prior.as_ref().and_then(|p| p.eps),
            FieldRef::PriorDividendsPerShare => {
                self.prior.as_ref().and_then(|p| p.dividends_per_share)
            }
            FieldRef::PriorOperatingCashFlow => {
                self.prior.as_ref().and_then(|p| p.operating_cash_flow)
            }
        }
    }

    /// Short-term plus long-term debt. Present if at least one side is.
    pub fn total_debt(&self) -> Option<f64> {
        let std_ = self.balance_sheet.short_term_debt;
        let ltd = self.balance_sheet.long_term_debt;
        match (std_, ltd) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or(0.0) + b.unwrap_or(0.0)),
        }
    }

    /// Total debt net of cash and short-term investments.
    pub fn net_debt(&self) -> Option<f64> {
        let debt = self.total_debt()?;
        let cash = self.balance_sheet.cash_and_equivalents?;
        let sti = self.balance_sheet.short_term_investments.unwrap_or(0.0);
        Some(debt - cash - sti)
    }

    /// Gross profit, derived from revenue - COGS when not reported directly.
    pub fn gross_profit(&self) -> Option<f64> {
        self.income_statement.gross_profit.or_else(|| {
            let rev = self.income_statement.revenue?;
            let cogs = self.income_statement.cost_of_goods_sold?;
            Some(rev - cogs)
        })
    }

    /// EBIT, falling back to operating income.
    pub fn ebit(&self) -> Option<f64> {
        self.income_statement
            .ebit
            .or(self.income_statement.operating_income)
    }

    /// EBITDA, derived from EBIT + D&A when not reported directly.
    pub fn ebitda(&self) -> Option<f64> {
        self.income_statement.ebitda.or_else(|| {
            let ebit = self.ebit()?;
            let da = self.income_statement.depreciation_amortization?;
            Some(ebit + da)
        })
    }

    /// Free cash flow, derived from OCF - capex when not reported directly.
    pub fn free_cash_flow(&self) -> Option<f64> {
        self.cash_flow.free_cash_flow.or_else(|| {
            let ocf = self.cash_flow.operating_cash_flow?;
            let capex = self.cash_flow.capital_expenditures?;
            Some(ocf - capex)
        })
    }

    /// Market cap, derived from price * shares when not reported directly.
    pub fn market_cap(&self) -> Option<f64> {
        self.market.market_cap.or_else(|| {
            let price = self.market.share_price?;
            let shares = self.market.shares_outstanding?;
            Some(price * shares)
        })
    }

    /// Earnings per share, derived from net income / shares when absent.
    pub fn eps(&self) -> Option<f64> {
        self.market.eps.or_else(|| {
            let ni = self.income_statement.net_income?;
            let shares = self.market.shares_outstanding?;
            if shares > 0.0 {
                Some(ni / shares)
            } else {
                None
            }
        })
    }

    /// Book value per share, derived from equity / shares when absent.
    pub fn book_value_per_share(&self) -> Option<f64> {
        self.market.book_value_per_share.or_else(|| {
            let equity = self.balance_sheet.total_equity?;
            let shares = self.market.shares_outstanding?;
            if shares > 0.0 {
                Some(equity / shares)
            } else {
                None
            }
        })
    }

    /// Effective tax rate (tax / pretax), clamped to [0, 1].
    pub fn effective_tax_rate(&self) -> Option<f64> {
        let tax = self.income_statement.tax_expense?;
        let pretax = self.income_statement.pretax_income?;
        if pretax > 0.0 {
            Some((tax / pretax).clamp(0.0, 1.0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup_resolves_every_section() {
        let mut stmt = Statement::default();
        stmt.balance_sheet.total_assets = Some(1_000_000.0);
        stmt.income_statement.revenue = Some(750_000.0);
        stmt.cash_flow.operating_cash_flow = Some(120_000.0);
        stmt.market.share_price = Some(42.0);
        stmt.prior = Some(PriorPeriod {
            revenue: Some(600_000.0),
            ..Default::default()
        });

        assert_eq!(stmt.field(FieldRef::TotalAssets), Some(1_000_000.0));
        assert_eq!(stmt.field(FieldRef::Revenue), Some(750_000.0));
        assert_eq!(stmt.field(FieldRef::OperatingCashFlow), Some(120_000.0));
        assert_eq!(stmt.field(FieldRef::SharePrice), Some(42.0));
        assert_eq!(stmt.field(FieldRef::PriorRevenue), Some(600_000.0));
        assert_eq!(stmt.field(FieldRef::Inventory), None);
    }

    #[test]
    fn derived_helpers_fall_back() {
        let mut stmt = Statement::default();
        stmt.income_statement.revenue = Some(100.0);
        stmt.income_statement.cost_of_goods_sold = Some(60.0);
        stmt.income_statement.operating_income = Some(25.0);
        stmt.income_statement.depreciation_amortization = Some(5.0);
        stmt.cash_flow.operating_cash_flow = Some(30.0);
        stmt.cash_flow.capital_expenditures = Some(12.0);
        stmt.market.share_price = Some(10.0);
        stmt.market.shares_outstanding = Some(4.0);
        stmt.income_statement.net_income = Some(8.0);

        assert_eq!(stmt.gross_profit(), Some(40.0));
        assert_eq!(stmt.ebit(), Some(25.0));
        assert_eq!(stmt.ebitda(), Some(30.0));
        assert_eq!(stmt.free_cash_flow(), Some(18.0));
        assert_eq!(stmt.market_cap(), Some(40.0));
        assert_eq!(stmt.eps(), Some(2.0));
    }

    #[test]
    fn effective_tax_rate_needs_positive_pretax() {
        let mut stmt = Statement::default();
        stmt.income_statement.tax_expense = Some(2.0);
        stmt.income_statement.pretax_income = Some(10.0);
        assert_eq!(stmt.effective_tax_rate(), Some(0.2));

        stmt.income_statement.pretax_income = Some(-5.0);
        assert_eq!(stmt.effective_tax_rate(), None);
    }

    #[test]
    fn statement_round_trips_through_json() {
        let raw = r#"{
            "balance_sheet": { "total_assets": 1000000.0, "current_assets": 400000.0 },
            "income_statement": { "revenue": 750000.0, "net_income": 60000.0 },
            "cash_flow": { "operating_cash_flow": 90000.0 },
            "market": {},
            "history": [
                { "label": "2024", "revenue": 700000.0 }
            ]
        }"#;
        let stmt: Statement = serde_json::from_str(raw).unwrap();
        assert_eq!(stmt.field(FieldRef::TotalAssets), Some(1_000_000.0));
        assert_eq!(stmt.history.len(), 1);
        assert!(stmt.prior.is_none());

        let encoded = serde_json::to_string(&stmt).unwrap();
        let back: Statement = serde_json::from_str(&encoded).unwrap();
        assert_eq!(back.field(FieldRef::Revenue), Some(750_000.0));
    }

    #[test]
    fn total_debt_present_when_one_side_known() {
        let mut stmt = Statement::default();
        assert_eq!(stmt.total_debt(), None);
        stmt.balance_sheet.short_term_debt = Some(50.0);
        assert_eq!(stmt.total_debt(), Some(50.0));
        stmt.balance_sheet.long_term_debt = Some(150.0);
        assert_eq!(stmt.total_debt(), Some(200.0));
    }
}
