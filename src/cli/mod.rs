//! # Command Line
//!
//! Every flag defaults to the value the smoke test has always used, so a bare
//! `dish-probe` probes `http://localhost:3000` after a two second warm-up.

use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use tracing::Level;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_WARMUP_SECS: u64 = 2;

#[derive(Debug, Clone, Parser)]
#[command(name = "dish-probe")]
#[command(about = "Smoke test for the restaurant dish search API", long_about = None)]
pub struct Cli {
    /// Base URL of the service under test.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Seconds to wait before the first probe so the service can come up.
    #[arg(long, default_value_t = DEFAULT_WARMUP_SECS)]
    pub warmup_secs: u64,

    /// Exit with a failure status when any case fails.
    #[arg(long)]
    pub strict: bool,

    /// Log each request to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn warmup(&self) -> Duration {
        Duration::from_secs(self.warmup_secs)
    }

    pub fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::WARN }
    }
}
