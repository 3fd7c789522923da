mod cli;
mod error;
mod http;
mod report;
mod runner;
mod suite;
mod testing;

#[cfg(test)]
mod test_support;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use cli::Cli;
use runner::ProbeRunner;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let client = reqwest::Client::builder().build()?;
    let runner = ProbeRunner::new(client, cli.base_url.clone(), cli.warmup());
    let report = runner.run(&suite::default_suite(), &mut io::stdout()).await?;

    if cli.strict && report.failed > 0 {
        info!(failed = report.failed, "strict mode: exiting with failure");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
