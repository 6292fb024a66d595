pub(crate) mod activity;
pub(crate) mod cash_flow;
pub(crate) mod leverage;
pub(crate) mod liquidity;
pub(crate) mod market;
pub(crate) mod profitability;
pub(crate) mod structural;
