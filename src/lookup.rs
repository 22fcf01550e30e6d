use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::config::ScanConfig;

/// Best-effort identity lookup result. The `"Unknown"` sentinel only
/// materializes at the presentation boundary, via `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(String),
    Unknown,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(value) => f.write_str(value),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OsLookupBody {
    #[serde(default)]
    result: Option<OsLookupResult>,
}

#[derive(Debug, Deserialize)]
struct OsLookupResult {
    #[serde(default)]
    company: Option<String>,
}

/// Client for the three identity lookups. Each one is isolated: a
/// failure decays to [`Lookup::Unknown`] and never propagates, so the
/// orchestrator needs no enrichment error handling. Every HTTP call
/// carries the configured finite timeout.
pub struct EnrichmentClient {
    http: reqwest::Client,
    vendor_api: String,
    os_api: String,
    providers: Vec<(String, String)>,
}

impl EnrichmentClient {
    pub fn new(config: &ScanConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.lookup_timeout)
            .build()?;
        Ok(Self {
            http,
            vendor_api: config.vendor_api.clone(),
            os_api: config.os_api.clone(),
            providers: config.providers.clone(),
        })
    }

    /// Looks up the device vendor for a hardware address. The endpoint
    /// answers plain text; HTTP 200 yields the trimmed body verbatim.
    pub async fn vendor(&self, mac: &str) -> Lookup {
        let url = format!("{}/{}", self.vendor_api, mac);
        match self.http.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => match response.text().await {
                Ok(body) => Lookup::Found(body.trim().to_string()),
                Err(err) => {
                    debug!("vendor lookup body read failed: {err}");
                    Lookup::Unknown
                }
            },
            Ok(response) => {
                debug!("vendor lookup answered {}", response.status());
                Lookup::Unknown
            }
            Err(err) => {
                debug!("vendor lookup failed: {err}");
                Lookup::Unknown
            }
        }
    }

    /// Matches an SSID against the provider table, case-insensitively
    /// and position-independently. Purely local, no network call.
    pub fn provider(&self, ssid: &str) -> Lookup {
        let ssid = ssid.to_lowercase();
        for (fragment, name) in &self.providers {
            if ssid.contains(&fragment.to_lowercase()) {
                return Lookup::Found(name.clone());
            }
        }
        Lookup::Unknown
    }

    /// Guesses the operating system behind a hardware address via the
    /// JSON vendor endpoint's nested `result.company` field.
    pub async fn operating_system(&self, mac: &str) -> Lookup {
        let url = format!("{}/{}/json", self.os_api, mac);
        match self.http.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                match response.json::<OsLookupBody>().await {
                    Ok(body) => match body.result.and_then(|r| r.company) {
                        Some(company) => Lookup::Found(company),
                        None => Lookup::Unknown,
                    },
                    Err(err) => {
                        debug!("os lookup returned malformed json: {err}");
                        Lookup::Unknown
                    }
                }
            }
            Ok(response) => {
                debug!("os lookup answered {}", response.status());
                Lookup::Unknown
            }
            Err(err) => {
                debug!("os lookup failed: {err}");
                Lookup::Unknown
            }
        }
    }
}
