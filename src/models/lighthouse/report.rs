use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::Categories;
use serde::Deserialize;
use std::collections::HashMap;

// The slice of a Lighthouse JSON report this tool reads. Everything
// else in the report is ignored by serde.
#[derive(Debug, Deserialize)]
pub struct Report {
    pub categories: Categories,
    pub audits: HashMap<String, Audit>,
}
