use std::process::Stdio;

use tokio::process::Command;

use crate::error::Error;
use crate::models::{Device, Report};
use crate::services::audit_service::chrome::Chrome;

/// A source of audit reports. Taking `&mut self` keeps a second
/// in-flight audit against the shared browser from compiling.
#[allow(async_fn_in_trait)]
pub trait AuditEngine {
    async fn audit(&mut self, url: &str, device: Device) -> Result<Report, Error>;
}

/// Drives the `lighthouse` CLI against the shared Chrome instance.
pub struct Lighthouse<'a> {
    chrome: &'a mut Chrome,
    blocked_urls: &'a [String],
}

impl<'a> Lighthouse<'a> {
    pub fn new(chrome: &'a mut Chrome, blocked_urls: &'a [String]) -> Self {
        Self {
            chrome,
            blocked_urls,
        }
    }
}

impl AuditEngine for Lighthouse<'_> {
    async fn audit(&mut self, url: &str, device: Device) -> Result<Report, Error> {
        let mut command = Command::new("lighthouse");
        command
            .arg(url)
            .arg("--output=json")
            .arg("--output-path=stdout")
            .arg("--quiet")
            .arg("--only-categories=performance")
            .arg("--no-enable-error-reporting")
            .arg("--max-wait-for-load=120000")
            .arg(format!("--port={}", self.chrome.port()));

        // Mobile emulation is the engine default.
        if device == Device::Desktop {
            command.arg("--preset=desktop");
        }
        for pattern in self.blocked_urls {
            command.arg("--blocked-url-patterns").arg(pattern);
        }

        let output = command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(Error::Engine {
                url: url.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}
