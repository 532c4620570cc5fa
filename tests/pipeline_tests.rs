//! Drives the runner -> stats -> table pipeline over a scripted
//! engine, the way a real session drives it over the lighthouse CLI.

use std::collections::VecDeque;

use pretty_assertions::assert_eq;
use serde_json::json;

use lightavg::error::Error;
use lightavg::models::{Device, Report, Sample};
use lightavg::services::audit_service::engine::AuditEngine;
use lightavg::services::audit_service::runner::{collect_samples, run_trials};

fn report(score: f64) -> Report {
    serde_json::from_value(json!({
        "categories": { "performance": { "score": score } },
        "audits": {
            "first-contentful-paint": { "numericValue": 800.0 },
            "speed-index": { "numericValue": 1500.0 },
            "largest-contentful-paint": { "numericValue": 1700.0 },
            "interactive": { "numericValue": 2100.0 },
            "total-blocking-time": { "numericValue": 30.0 },
            "cumulative-layout-shift": { "numericValue": 0.01 }
        }
    }))
    .unwrap()
}

/// Hands out canned results in order and counts how often it is asked.
struct ScriptedEngine {
    responses: VecDeque<Result<Report, Error>>,
    calls: usize,
}

impl ScriptedEngine {
    fn new(responses: Vec<Result<Report, Error>>) -> Self {
        Self {
            responses: responses.into(),
            calls: 0,
        }
    }
}

impl AuditEngine for ScriptedEngine {
    async fn audit(&mut self, _url: &str, _device: Device) -> Result<Report, Error> {
        self.calls += 1;
        self.responses.pop_front().expect("engine exhausted")
    }
}

#[tokio::test]
async fn batch_matches_trial_count_and_order() {
    let scores = [0.5, 0.7, 0.9];
    let mut engine = ScriptedEngine::new(scores.iter().map(|&s| Ok(report(s))).collect());

    let samples = collect_samples(&mut engine, "https://a.com", Device::Mobile, 3)
        .await
        .unwrap();

    assert_eq!(
        samples.iter().map(|s| s.score).collect::<Vec<_>>(),
        scores.to_vec()
    );
}

#[tokio::test]
async fn failed_trial_aborts_the_batch() {
    let mut engine = ScriptedEngine::new(vec![
        Ok(report(0.5)),
        Err(Error::Engine {
            url: "https://a.com".to_string(),
            stderr: "chrome went away".to_string(),
        }),
        Ok(report(0.9)),
    ]);

    let result = collect_samples(&mut engine, "https://a.com", Device::Mobile, 3).await;

    assert!(matches!(result, Err(Error::Engine { .. })));
    // The third trial never ran.
    assert_eq!(engine.calls, 2);
}

#[tokio::test]
async fn malformed_report_aborts_the_batch() {
    let broken: Report = serde_json::from_value(json!({
        "categories": { "performance": { "score": 0.4 } },
        "audits": {}
    }))
    .unwrap();
    let mut engine = ScriptedEngine::new(vec![Ok(report(0.5)), Ok(broken)]);

    let result = collect_samples(&mut engine, "https://a.com", Device::Desktop, 2).await;
    assert!(matches!(result, Err(Error::MalformedReport { .. })));
}

#[tokio::test]
async fn summary_mode_prints_two_aggregate_rows() {
    let mut engine =
        ScriptedEngine::new([0.5, 0.7, 0.9].iter().map(|&s| Ok(report(s))).collect());

    let table = run_trials(&mut engine, "https://a.com", Device::Mobile, 3, true)
        .await
        .unwrap();
    let rendered = table.to_string();

    let data_rows: Vec<&str> = rendered
        .lines()
        .filter(|line| line.contains("AVG") || line.contains("SD") || line.contains('#'))
        .collect();
    assert_eq!(data_rows.len(), 2);

    // Mean of [50, 70, 90] and its population stdev, alongside the
    // time columns' own values.
    assert!(rendered.contains("70"));
    assert!(rendered.contains("16.3"));
    assert!(rendered.contains("800ms"));
    assert!(rendered.contains("1.5s"));
}

#[tokio::test]
async fn full_mode_prints_every_trial() {
    let mut engine =
        ScriptedEngine::new([0.5, 0.7, 0.9].iter().map(|&s| Ok(report(s))).collect());

    let table = run_trials(&mut engine, "https://a.com", Device::Mobile, 3, false)
        .await
        .unwrap();
    let rendered = table.to_string();

    for label in ["#1", "#2", "#3", "AVG", "SD"] {
        assert!(rendered.contains(label), "missing row {label}");
    }
}

#[test]
fn identical_reports_aggregate_to_zero_spread() {
    let samples: Vec<Sample> = (0..4)
        .map(|_| Sample::from_report(&report(0.8)).unwrap())
        .collect();

    let (mean, stdev) = lightavg::services::compute::aggregate(&samples).unwrap();
    assert_eq!(mean, samples[0]);
    assert_eq!(stdev.to_row(), [0.0; 7]);
}
