use clap::Parser;

use crate::models::{resolve_devices, RunRequest};

/// Averages multiple successive Lighthouse runs
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The comma-delimited URL(s) to test
    pub url: String,

    /// The number of tests to run per device
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub times: u32,

    /// Test only desktop
    #[arg(short, long)]
    pub desktop: bool,

    /// Test only mobile
    #[arg(short, long)]
    pub mobile: bool,

    /// Comma-separated URLs to block, wildcards allowed
    #[arg(short, long)]
    pub block: Option<String>,

    /// Only show summary rows
    #[arg(short, long)]
    pub summary: bool,
}

impl Cli {
    pub fn into_request(self) -> RunRequest {
        RunRequest {
            urls: split_list(&self.url),
            times: self.times as usize,
            devices: resolve_devices(self.mobile, self.desktop),
            blocked_urls: self.block.as_deref().map(split_list).unwrap_or_default(),
            summary: self.summary,
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
