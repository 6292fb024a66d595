pub(crate) mod forecasting;
pub(crate) mod sensitivity;
pub(crate) mod statistical;
pub(crate) mod valuation;
