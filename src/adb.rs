use std::path::Path;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Enumerate attached devices via the bridge tool.
///
/// Only devices in the `device` state count; `unauthorized`, `offline` and
/// friends are not usable for mirroring and are skipped.
pub async fn list_devices(adb: &Path) -> Result<Vec<String>> {
    debug!(tool = %adb.display(), "enumerating devices");

    let output = Command::new(adb)
        .arg("devices")
        .output()
        .await
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => Error::MissingExecutable {
                tool: adb.display().to_string(),
            },
            _ => Error::Bridge {
                message: source.to_string(),
            },
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Bridge {
            message: stderr.trim().to_string(),
        });
    }

    let devices = parse_devices_output(&String::from_utf8_lossy(&output.stdout));
    debug!(count = devices.len(), "devices enumerated");
    Ok(devices)
}

/// Parse `adb devices` output: a header line, then `<serial>\t<state>` rows.
fn parse_devices_output(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(serial), Some("device")) => Some(serial.to_string()),
                _ => None,
            }
        })
        .collect()
}
