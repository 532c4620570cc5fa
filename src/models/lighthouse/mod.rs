pub mod audit;
pub mod category;
pub mod report;
pub mod sample;

pub use audit::Audit;
pub use category::{Categories, Category};
pub use report::Report;
pub use sample::{Sample, COLUMNS};
