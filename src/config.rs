use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

const VENDOR_API: &str = "https://api.macvendors.com";
const OS_API: &str = "https://macvendors.co/api";

/// Immutable per-run configuration assembled from CLI arguments and
/// built-in defaults. The provider table is injected here rather than
/// living as a hidden module constant so tests can swap it out.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Append-only report log, one plain-text line per emitted message.
    pub log_file: PathBuf,
    /// Bound on every enrichment HTTP call.
    pub lookup_timeout: Duration,
    /// Plain-text MAC-vendor endpoint, queried as `<vendor_api>/<mac>`.
    pub vendor_api: String,
    /// JSON MAC-vendor endpoint, queried as `<os_api>/<mac>/json`.
    pub os_api: String,
    /// SSID-fragment to provider-name pairs, matched case-insensitively.
    pub providers: Vec<(String, String)>,
}

impl ScanConfig {
    pub fn from_cli(args: &Cli) -> Self {
        Self {
            log_file: args.log_file.clone(),
            lookup_timeout: Duration::from_secs(args.lookup_timeout),
            ..Self::default()
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("wifi_log.txt"),
            lookup_timeout: Duration::from_secs(5),
            vendor_api: VENDOR_API.to_string(),
            os_api: OS_API.to_string(),
            providers: default_providers(),
        }
    }
}

pub fn default_providers() -> Vec<(String, String)> {
    [
        ("WIFI_PROVIDER_1", "Dostawca 1"),
        ("WIFI_PROVIDER_2", "Dostawca 2"),
        ("WIFI_PROVIDER_3", "Dostawca 3"),
    ]
    .into_iter()
    .map(|(fragment, name)| (fragment.to_string(), name.to_string()))
    .collect()
}
