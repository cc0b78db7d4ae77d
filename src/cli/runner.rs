use clap::Parser;
use std::process::ExitCode;

use super::{Cli, Commands};
use crate::cli_cmds::*;
use crate::config::Config;
use crate::error::Error;
use crate::launch::Overrides;

pub(crate) async fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            return report(&Error::Config {
                message: format!("{e:#}"),
            })
        }
    };

    let result = match cli.command {
        Commands::Devices => cmd_devices(&config).await,
        Commands::Profiles => cmd_profiles(),
        Commands::Start {
            profile,
            serial,
            max_size,
            bitrate,
            fps,
            turn_screen_off,
            stay_awake,
            no_audio,
        } => {
            let overrides = Overrides {
                max_size,
                bitrate,
                fps,
                turn_screen_off,
                stay_awake,
                no_audio,
            };
            cmd_start(&config, &profile, serial.as_deref(), &overrides).await
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => report(&err),
    }
}

fn report(err: &Error) -> ExitCode {
    eprintln!("Error: {err}");
    ExitCode::from(err.exit_code())
}
