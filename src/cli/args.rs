use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phonixcast")]
#[command(version)]
#[command(about = "USB screen mirroring launcher for Android devices (adb + scrcpy)")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Alternate config file
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List attached devices reported by the device bridge
    Devices,
    /// List the built-in streaming profiles
    Profiles,
    /// Start a mirroring session
    Start {
        /// Streaming profile (see 'phonixcast profiles')
        #[arg(short, long)]
        profile: String,

        /// Device serial, required when several devices are attached
        #[arg(short, long)]
        serial: Option<String>,

        /// Cap the longer video dimension (pixels)
        #[arg(long)]
        max_size: Option<u32>,

        /// Video bitrate, e.g. "8M"
        #[arg(long)]
        bitrate: Option<String>,

        /// Frame rate cap
        #[arg(long)]
        fps: Option<u32>,

        /// Turn the device screen off while mirroring
        #[arg(long)]
        turn_screen_off: bool,

        /// Keep the device awake while plugged in
        #[arg(long)]
        stay_awake: bool,

        /// Disable audio forwarding
        #[arg(long)]
        no_audio: bool,
    },
}
