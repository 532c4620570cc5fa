use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("audit report has no numeric `{field}` entry")]
    MalformedReport { field: &'static str },

    #[error("cannot aggregate an empty batch of trials")]
    EmptyBatch,

    #[error("failed to launch chrome: {0}")]
    BrowserLaunch(String),

    #[error("lighthouse failed for {url}: {stderr}")]
    Engine { url: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
