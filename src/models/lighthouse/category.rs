use serde::Deserialize;

// pub struct for a category score; Lighthouse reports null when it
// could not compute one
#[derive(Debug, Deserialize, Clone)]
pub struct Category {
    pub score: Option<f64>,
}

// pub struct for the categories block; only performance is requested
#[derive(Debug, Deserialize)]
pub struct Categories {
    pub performance: Option<Category>,
}
