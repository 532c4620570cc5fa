use comfy_table::Table;
use log::info;

use crate::error::Error;
use crate::models::{Device, Sample};
use crate::services::audit_service::engine::AuditEngine;
use crate::services::compute::{aggregate, build_table};
use crate::utils::format::ucfirst;

/// Run `times` trials for one (url, device) pair and assemble the
/// result table. Trials are strictly sequential; the engine owns
/// exclusive use of the browser for each one.
pub async fn run_trials<E: AuditEngine>(
    engine: &mut E,
    url: &str,
    device: Device,
    times: usize,
    summary: bool,
) -> Result<Table, Error> {
    let samples = collect_samples(engine, url, device, times).await?;
    let (avg, stdev) = aggregate(&samples)?;
    Ok(build_table(&samples, &avg, &stdev, summary))
}

/// One `Sample` per trial, in chronological order. The first failed
/// trial aborts the batch; a partial batch has no statistical value.
pub async fn collect_samples<E: AuditEngine>(
    engine: &mut E,
    url: &str,
    device: Device,
    times: usize,
) -> Result<Vec<Sample>, Error> {
    let mut samples = Vec::with_capacity(times);
    for trial in 1..=times {
        info!("Testing {} {}/{}", ucfirst(device.label()), trial, times);
        let report = engine.audit(url, device).await?;
        samples.push(Sample::from_report(&report)?);
    }
    Ok(samples)
}
