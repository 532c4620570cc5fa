use anyhow::{Context, Result};
use comfy_table::Table;

use crate::error::Error;
use crate::models::{Device, RunRequest};
use crate::services::audit_service::chrome::Chrome;
use crate::services::audit_service::engine::Lighthouse;
use crate::services::audit_service::runner::run_trials;
use crate::utils::format::ucfirst;

/// Process every URL in input order. A failure stops the session;
/// URLs already processed have already printed their tables.
pub async fn run(request: &RunRequest) -> Result<()> {
    for url in &request.urls {
        println!("\n{}", url);
        audit_url(url, request)
            .await
            .with_context(|| format!("audit run failed for {}", url))?;
    }
    Ok(())
}

/// One Chrome instance per URL, shared across the requested devices
/// and taken down again on success and failure alike.
async fn audit_url(url: &str, request: &RunRequest) -> Result<()> {
    let mut chrome = Chrome::launch().await?;

    let mut tables: Vec<(Device, Table)> = Vec::with_capacity(request.devices.len());
    let mut outcome: Result<(), Error> = Ok(());

    for device in &request.devices {
        let mut engine = Lighthouse::new(&mut chrome, &request.blocked_urls);
        match run_trials(&mut engine, url, *device, request.times, request.summary).await {
            Ok(table) => tables.push((*device, table)),
            Err(error) => {
                outcome = Err(error);
                break;
            }
        }
    }

    chrome.kill().await;
    outcome?;

    for (device, table) in tables {
        println!("{} Results", ucfirst(device.label()));
        println!("{}\n", table);
    }
    Ok(())
}
