pub mod audit_service;
pub mod compute;

pub use audit_service::{AuditEngine, Chrome, Lighthouse};
pub use compute::{aggregate, build_table};
