use crate::adb;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::scrcpy;

/// Pre-launch checks, short-circuiting on the first failure: both external
/// tools must resolve, at least one usable device must be attached, and the
/// choice of device must be unambiguous. Returns the serial the session
/// will use.
pub async fn check(config: &Config, requested: Option<&str>) -> Result<String> {
    scrcpy::ensure_available(&config.scrcpy()).await?;
    let devices = adb::list_devices(&config.adb()).await?;
    select_device(&devices, requested)
}

/// Pick the session device from the enumerated list. With several devices
/// attached and no explicit selector we refuse to guess.
pub fn select_device(devices: &[String], requested: Option<&str>) -> Result<String> {
    if devices.is_empty() {
        return Err(Error::NoDeviceFound);
    }

    match requested {
        Some(serial) => {
            if devices.iter().any(|device| device == serial) {
                Ok(serial.to_string())
            } else {
                Err(Error::DeviceUnavailable {
                    serial: serial.to_string(),
                })
            }
        }
        None if devices.len() == 1 => Ok(devices[0].clone()),
        None => Err(Error::AmbiguousDevice {
            serials: devices.to_vec(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serials(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_devices() {
        assert!(matches!(
            select_device(&[], None),
            Err(Error::NoDeviceFound)
        ));
        // An explicit selector does not help when nothing is attached.
        assert!(matches!(
            select_device(&[], Some("R5CT10ABC")),
            Err(Error::NoDeviceFound)
        ));
    }

    #[test]
    fn test_single_device_is_picked_implicitly() {
        let devices = serials(&["R5CT10ABC"]);
        assert_eq!(select_device(&devices, None).unwrap(), "R5CT10ABC");
    }

    #[test]
    fn test_multiple_devices_without_selector_is_ambiguous() {
        let devices = serials(&["R5CT10ABC", "emulator-5554"]);
        match select_device(&devices, None) {
            Err(Error::AmbiguousDevice { serials }) => {
                assert_eq!(serials, devices);
            }
            other => panic!("expected AmbiguousDevice, got {other:?}"),
        }
    }

    #[test]
    fn test_selector_resolves_ambiguity() {
        let devices = serials(&["R5CT10ABC", "emulator-5554"]);
        assert_eq!(
            select_device(&devices, Some("emulator-5554")).unwrap(),
            "emulator-5554"
        );
    }

    #[test]
    fn test_selector_for_absent_device() {
        let devices = serials(&["R5CT10ABC"]);
        match select_device(&devices, Some("emulator-5554")) {
            Err(Error::DeviceUnavailable { serial }) => {
                assert_eq!(serial, "emulator-5554");
            }
            other => panic!("expected DeviceUnavailable, got {other:?}"),
        }
    }
}
