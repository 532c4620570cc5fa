// src/models/mod.rs

pub mod lighthouse;
pub mod run;

pub use lighthouse::{Audit, Categories, Category, Report, Sample, COLUMNS};
pub use run::{resolve_devices, Device, RunRequest};
