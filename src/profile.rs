/// Named latency/quality preset for the mirroring tool.
///
/// The registry is fixed at compile time: three presets trading image
/// quality against glass-to-glass latency. Each default is a scrcpy flag
/// (without the leading dashes); `None` marks a bare switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    defaults: &'static [(&'static str, Option<&'static str>)],
}

/// Declaration order is the display order for `phonixcast profiles`.
pub const PROFILES: &[Profile] = &[
    Profile {
        name: "balanced",
        defaults: &[
            ("max-size", Some("1920")),
            ("video-bit-rate", Some("8M")),
            ("max-fps", Some("60")),
            ("video-codec", Some("h264")),
        ],
    },
    Profile {
        name: "low-latency",
        defaults: &[
            ("max-size", Some("1600")),
            ("video-bit-rate", Some("6M")),
            ("max-fps", Some("45")),
            ("video-codec", Some("h264")),
            ("no-audio", None),
        ],
    },
    Profile {
        name: "ultra-low-latency",
        defaults: &[
            ("max-size", Some("1280")),
            ("video-bit-rate", Some("4M")),
            ("max-fps", Some("30")),
            ("video-codec", Some("h264")),
            ("no-audio", None),
        ],
    },
];

pub fn lookup(name: &str) -> Option<&'static Profile> {
    PROFILES.iter().find(|profile| profile.name == name)
}

impl Profile {
    /// Default flags in argv order.
    pub fn defaults(&self) -> impl Iterator<Item = (&'static str, Option<&'static str>)> + '_ {
        self.defaults.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let names: Vec<&str> = PROFILES.iter().map(|p| p.name).collect();
        assert_eq!(names, ["balanced", "low-latency", "ultra-low-latency"]);
    }

    #[test]
    fn test_every_listed_profile_resolves() {
        for profile in PROFILES {
            let found = lookup(profile.name).expect("listed profile must resolve");
            assert_eq!(found.name, profile.name);
        }
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        assert!(lookup("nonexistent").is_none());
        assert!(lookup("").is_none());
        // Lookup is exact, not prefix-based.
        assert!(lookup("low").is_none());
        assert!(lookup("Balanced").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in PROFILES.iter().enumerate() {
            for b in &PROFILES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_latency_presets_drop_audio() {
        for name in ["low-latency", "ultra-low-latency"] {
            let profile = lookup(name).unwrap();
            assert!(
                profile
                    .defaults()
                    .any(|(key, value)| key == "no-audio" && value.is_none()),
                "{name} should carry the no-audio switch"
            );
        }
    }
}
