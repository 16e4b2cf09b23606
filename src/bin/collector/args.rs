use std::path::PathBuf;

use chrono_tz::Tz;
use clap::Parser;
use envsense::sensor::Device;

#[derive(Debug, Parser)]
pub struct Args {
    /// Directory holding one dataset file per calendar day.
    #[arg(long, env = "ENVSENSE_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Sensor address, optionally annotated with its expected role
    /// (e.g. `192.168.0.7=full`). Repeat once per device; polled in order.
    #[arg(long = "device", required = true)]
    pub devices: Vec<Device>,

    #[arg(long, env = "TZ")]
    pub timezone: Tz,

    /// Per-request timeout for sensor fetches, in seconds.
    #[arg(long, default_value_t = 10)]
    pub http_timeout_secs: u64,
}
