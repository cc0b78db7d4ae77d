use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong before or while launching a session.
///
/// Each variant maps to its own process exit code so scripts wrapping
/// phonixcast can tell the failure modes apart; the mirroring tool's own
/// exit status is propagated separately and never folded into these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown profile '{name}' (run 'phonixcast profiles' to see presets)")]
    UnknownProfile { name: String },

    #[error("'{tool}' was not found on PATH")]
    MissingExecutable { tool: String },

    #[error("no Android device in 'device' state is attached")]
    NoDeviceFound,

    #[error("multiple devices attached ({}); pick one with --serial", .serials.join(", "))]
    AmbiguousDevice { serials: Vec<String> },

    #[error("requested device '{serial}' is not attached")]
    DeviceUnavailable { serial: String },

    #[error("device bridge failed: {message}")]
    Bridge { message: String },

    #[error("could not launch the mirroring tool: {source}")]
    Launch {
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::UnknownProfile { .. } => 3,
            Error::MissingExecutable { .. } => 4,
            Error::NoDeviceFound => 5,
            Error::AmbiguousDevice { .. } => 6,
            Error::DeviceUnavailable { .. } => 7,
            Error::Bridge { .. } => 8,
            Error::Launch { .. } => 9,
            Error::Config { .. } => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            Error::UnknownProfile {
                name: "x".into(),
            },
            Error::MissingExecutable { tool: "adb".into() },
            Error::NoDeviceFound,
            Error::AmbiguousDevice {
                serials: vec!["a".into(), "b".into()],
            },
            Error::DeviceUnavailable {
                serial: "a".into(),
            },
            Error::Bridge {
                message: "boom".into(),
            },
            Error::Launch {
                source: std::io::Error::other("spawn"),
            },
            Error::Config {
                message: "bad toml".into(),
            },
        ];

        let codes: HashSet<u8> = errors.iter().map(Error::exit_code).collect();
        assert_eq!(codes.len(), errors.len(), "exit codes must not collide");
        assert!(!codes.contains(&0), "errors must never exit 0");
        // 1 (generic) and 2 (clap usage error) are reserved.
        assert!(!codes.contains(&1));
        assert!(!codes.contains(&2));
    }

    #[test]
    fn test_ambiguous_device_lists_serials() {
        let err = Error::AmbiguousDevice {
            serials: vec!["R5CT10ABC".into(), "emulator-5554".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("R5CT10ABC"));
        assert!(msg.contains("emulator-5554"));
        assert!(msg.contains("--serial"));
    }
}
