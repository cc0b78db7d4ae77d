mod core;

pub use core::{cmd_devices, cmd_profiles, cmd_start};
