use std::process::ExitCode;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::launch::{LaunchConfig, Overrides};
use crate::{adb, preflight, profile, scrcpy};

pub async fn cmd_devices(config: &Config) -> Result<ExitCode> {
    let devices = adb::list_devices(&config.adb()).await?;

    if devices.is_empty() {
        eprintln!("No devices attached.");
    }
    for serial in &devices {
        println!("{serial}");
    }

    Ok(ExitCode::SUCCESS)
}

pub fn cmd_profiles() -> Result<ExitCode> {
    for preset in profile::PROFILES {
        let flags = LaunchConfig::from_profile(preset).args().join(" ");
        println!("{:<20} {flags}", preset.name);
    }
    Ok(ExitCode::SUCCESS)
}

pub async fn cmd_start(
    config: &Config,
    profile_name: &str,
    serial: Option<&str>,
    overrides: &Overrides,
) -> Result<ExitCode> {
    // Cheap local validation first: an unknown profile must fail before any
    // subprocess is spawned.
    let preset = profile::lookup(profile_name).ok_or_else(|| Error::UnknownProfile {
        name: profile_name.to_string(),
    })?;

    let device = preflight::check(config, serial).await?;

    let mut launch = LaunchConfig::from_profile(preset);
    launch.apply(overrides);

    println!("Starting '{}' session on {device}...", preset.name);
    let code = scrcpy::run_session(&config.scrcpy(), &launch.to_args(&device)).await?;

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(255)))
}
