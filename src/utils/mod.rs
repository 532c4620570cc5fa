pub mod format;

pub use format::{format_time, format_value, ucfirst};
