use clap::Parser;
use depman_cli::{Cli, logging, run_cli};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> miette::Result<ExitCode> {
    let cli = Cli::parse();

    logging::setup_tracing(cli.log)?;

    Ok(match run_cli(cli).await? {
        Some(code) => ExitCode::from(code),
        None => ExitCode::SUCCESS,
    })
}
