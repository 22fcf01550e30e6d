use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::errors::ScanError;
use crate::estimate::estimate_distance;
use crate::lookup::EnrichmentClient;
use crate::probe;
use crate::report::{DeviceReport, ReportSink};
use crate::security::{is_protected, SecurityLabel};
use crate::wifi::{DiscoveredNetwork, WifiFacility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning,
    Reporting,
}

/// Drives one discovery-and-enrichment pass: scan, then per network
/// estimate distance, probe reachability and latency, enrich identity,
/// classify security and emit the combined record. Strictly sequential;
/// one probe/report cycle fully completes before the next begins.
pub struct Orchestrator<F: WifiFacility> {
    facility: F,
    enrichment: EnrichmentClient,
    latency_client: reqwest::Client,
    sink: ReportSink,
    state: ScanState,
}

impl<F: WifiFacility> Orchestrator<F> {
    pub fn new(facility: F, config: &ScanConfig) -> Result<Self, ScanError> {
        let enrichment = EnrichmentClient::new(config)?;
        let latency_client = reqwest::Client::builder()
            .timeout(probe::LATENCY_TIMEOUT)
            .build()?;
        Ok(Self {
            facility,
            enrichment,
            latency_client,
            sink: ReportSink::new(config.log_file.clone()),
            state: ScanState::Idle,
        })
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub async fn run_pass(&mut self) -> Result<(), ScanError> {
        self.state = ScanState::Scanning;
        let networks = match self.facility.scan().await {
            Ok(networks) => networks,
            Err(err) => {
                self.state = ScanState::Idle;
                return Err(err);
            }
        };

        if networks.is_empty() {
            self.sink.emit("No available Wi-Fi networks found.")?;
            self.state = ScanState::Idle;
            return Ok(());
        }

        self.state = ScanState::Reporting;
        self.sink.emit("Found available Wi-Fi networks:")?;
        // Reported in the order the facility returned them.
        for network in networks {
            self.report_network(network).await?;
        }

        self.state = ScanState::Idle;
        Ok(())
    }

    async fn report_network(&mut self, network: DiscoveredNetwork) -> Result<(), ScanError> {
        info!("probing {} ({})", network.ssid, network.bssid);

        let distance_m = match estimate_distance(network.signal_dbm, network.frequency_ghz()) {
            Ok(distance) => distance,
            Err(err) => {
                self.sink
                    .emit(&format!("Skipping {}: {}", network.ssid, err))?;
                return Ok(());
            }
        };

        let (reachable, probe_secs) = probe::ping(&network.bssid).await;
        debug!("ping {}: reachable={reachable} in {probe_secs:.3}s", network.bssid);
        let latency = probe::measure_latency(&self.latency_client, &network.bssid).await;
        let vendor = self.enrichment.vendor(&network.bssid).await;

        let handle = self.facility.register_profile(&network);
        let (akm_suites, cipher) = self.facility.security_attributes(handle);
        let security = SecurityLabel::classify(&akm_suites, cipher);
        let protected = is_protected(&akm_suites);

        let provider = self.enrichment.provider(&network.ssid);
        let operating_system = self.enrichment.operating_system(&network.bssid).await;

        let report = DeviceReport {
            ssid: network.ssid,
            bssid: network.bssid,
            signal_dbm: network.signal_dbm,
            frequency_ghz: network.frequency_khz as f64 / 1_000_000.0,
            distance_m,
            reachable,
            probe_secs,
            latency,
            vendor,
            security,
            protected,
            provider,
            operating_system,
        };
        self.sink.emit_report(&report)?;
        Ok(())
    }
}
