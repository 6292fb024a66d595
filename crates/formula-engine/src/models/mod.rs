pub(crate) mod credit_risk;
pub(crate) mod distress;
pub(crate) mod dupont;
pub(crate) mod growth;
pub(crate) mod working_capital;
