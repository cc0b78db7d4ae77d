use crate::profile::Profile;

/// A single mirroring-tool flag: either a bare switch or a keyed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Switch,
    Value(String),
}

/// The effective flag set handed to the mirroring tool: profile defaults
/// overlaid with explicit CLI overrides. Keys are unique; overwriting a key
/// keeps its original position so the argv stays stable, and the last write
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchConfig {
    flags: Vec<(String, FlagValue)>,
}

/// Explicit `start` overrides. Each one beats the profile default for the
/// same flag key.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_size: Option<u32>,
    pub bitrate: Option<String>,
    pub fps: Option<u32>,
    pub turn_screen_off: bool,
    pub stay_awake: bool,
    pub no_audio: bool,
}

impl LaunchConfig {
    pub fn from_profile(profile: &Profile) -> Self {
        let mut config = Self::default();
        for (key, value) in profile.defaults() {
            match value {
                Some(v) => config.set(key, FlagValue::Value(v.to_string())),
                None => config.set(key, FlagValue::Switch),
            }
        }
        config
    }

    /// Insert or replace a flag; replacement is last-write-wins.
    pub fn set(&mut self, key: &str, value: FlagValue) {
        if let Some(slot) = self.flags.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.flags.push((key.to_string(), value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&FlagValue> {
        self.flags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(size) = overrides.max_size {
            self.set("max-size", FlagValue::Value(size.to_string()));
        }
        if let Some(bitrate) = &overrides.bitrate {
            self.set("video-bit-rate", FlagValue::Value(bitrate.clone()));
        }
        if let Some(fps) = overrides.fps {
            self.set("max-fps", FlagValue::Value(fps.to_string()));
        }
        if overrides.turn_screen_off {
            self.set("turn-screen-off", FlagValue::Switch);
        }
        if overrides.stay_awake {
            self.set("stay-awake", FlagValue::Switch);
        }
        if overrides.no_audio {
            self.set("no-audio", FlagValue::Switch);
        }
    }

    /// Flags serialized in stable order, without the device selector.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for (key, value) in &self.flags {
            args.push(format!("--{key}"));
            if let FlagValue::Value(v) = value {
                args.push(v.clone());
            }
        }
        args
    }

    /// Full argv for the mirroring tool, device selector first.
    pub fn to_args(&self, serial: &str) -> Vec<String> {
        let mut args = vec!["--serial".to_string(), serial.to_string()];
        args.extend(self.args());
        args
    }
}
