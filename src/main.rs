mod adb;
mod cli;
mod cli_cmds;
mod config;
mod error;
mod launch;
mod preflight;
mod profile;
mod scrcpy;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    cli::run().await
}
