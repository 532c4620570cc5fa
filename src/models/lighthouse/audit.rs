use serde::Deserialize;

// pub struct for an individual audit entry
#[derive(Debug, Deserialize)]
pub struct Audit {
    #[serde(rename = "numericValue")]
    pub numeric_value: Option<f64>,
}
