use std::net::TcpListener;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use log::{info, warn};
use tokio::process::{Child, Command};

use crate::error::Error;

const CHROME_CANDIDATES: [&str; 5] = [
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
    "chrome",
];

const READY_TIMEOUT: Duration = Duration::from_secs(15);

/// A headless Chrome instance owned for the duration of one URL's
/// audit session. The child is spawned with `kill_on_drop`, so the
/// browser cannot outlive the session even when the run is cancelled
/// mid-trial.
pub struct Chrome {
    child: Child,
    port: u16,
}

impl Chrome {
    pub async fn launch() -> Result<Chrome, Error> {
        let binary = find_binary()?;
        let port = free_port()?;
        info!("Booting {} on port {}", binary.display(), port);

        let child = Command::new(&binary)
            .arg("--headless")
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg(format!("--remote-debugging-port={}", port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let chrome = Chrome { child, port };
        chrome.wait_until_ready().await?;
        Ok(chrome)
    }

    /// DevTools port the audit engine connects to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Poll the DevTools endpoint until the browser accepts
    /// connections, or give up after [`READY_TIMEOUT`].
    async fn wait_until_ready(&self) -> Result<(), Error> {
        let endpoint = format!("http://127.0.0.1:{}/json/version", self.port);
        let client = reqwest::Client::new();
        let deadline = tokio::time::Instant::now() + READY_TIMEOUT;

        loop {
            match client.get(&endpoint).send().await {
                Ok(response) if response.status().is_success() => return Ok(()),
                _ if tokio::time::Instant::now() >= deadline => {
                    return Err(Error::BrowserLaunch(format!(
                        "devtools endpoint {} did not come up within {}s",
                        endpoint,
                        READY_TIMEOUT.as_secs()
                    )));
                }
                _ => tokio::time::sleep(Duration::from_millis(200)).await,
            }
        }
    }

    /// Terminate the browser. Dropping the handle kills it too; this
    /// just makes the normal path deterministic.
    pub async fn kill(&mut self) {
        if let Err(error) = self.child.kill().await {
            warn!("Failed to kill chrome: {}", error);
        }
    }
}

fn find_binary() -> Result<PathBuf, Error> {
    if let Ok(path) = std::env::var("CHROME_PATH") {
        return Ok(PathBuf::from(path));
    }

    CHROME_CANDIDATES
        .iter()
        .find_map(|name| which::which(name).ok())
        .ok_or_else(|| {
            Error::BrowserLaunch("no chrome binary found; set CHROME_PATH".to_string())
        })
}

/// Let the OS hand out an unused port for the DevTools listener.
fn free_port() -> Result<u16, Error> {
    let listener = TcpListener::bind(("127.0.0.1", 0))?;
    Ok(listener.local_addr()?.port())
}
