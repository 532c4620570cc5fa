use clap::Parser;

use lightavg::cli::Cli;
use lightavg::services::audit_service::session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let request = Cli::parse().into_request();

    // Ctrl-C is a graceful stop: cancelling the session future drops
    // the Chrome handle, which takes the browser down with it.
    tokio::select! {
        result = session::run(&request) => result,
        _ = tokio::signal::ctrl_c() => Ok(()),
    }
}
