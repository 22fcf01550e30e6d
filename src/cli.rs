use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Path of the append-only report log
    #[arg(long, value_name = "PATH", default_value = "wifi_log.txt")]
    pub log_file: PathBuf,

    /// Timeout in seconds for vendor/OS enrichment lookups
    #[arg(long, value_name = "SECONDS", default_value_t = 5)]
    pub lookup_timeout: u64,
}
