use tokio_wifiscanner::Wifi;
use tracing::debug;

use crate::errors::ScanError;
use crate::security::{AkmType, CipherType};

/// One access point as reported by the radio scan facility.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredNetwork {
    /// Human-readable network name, not guaranteed unique or non-empty.
    pub ssid: String,
    /// Hardware address of the access point, six colon- or
    /// hyphen-separated hex octet pairs. Probe target and lookup key.
    pub bssid: String,
    /// Received signal power in dBm, more negative = weaker.
    pub signal_dbm: i32,
    /// Broadcast frequency in kHz as reported by the facility.
    pub frequency_khz: u32,
    pub akm_suites: Vec<AkmType>,
    pub cipher: CipherType,
}

impl DiscoveredNetwork {
    pub fn frequency_ghz(&self) -> f64 {
        f64::from(self.frequency_khz) / 1_000_000.0
    }

    fn from_wifi(w: Wifi) -> Self {
        let signal_dbm = w.signal_level.parse::<f32>().unwrap_or(-100.0).round() as i32;
        let channel = w.channel.parse::<u16>().unwrap_or(0);
        let (akm_suites, cipher) = parse_security(&w.security);
        Self {
            ssid: w.ssid,
            bssid: w.mac,
            signal_dbm,
            frequency_khz: channel_to_khz(channel),
            akm_suites,
            cipher,
        }
    }
}

/// Opaque handle to a profile registered with the facility. Security
/// attributes are only queryable through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileHandle(pub(crate) usize);

/// The radio scan facility. A trait seam so the orchestrator can be
/// driven by a scripted facility in tests.
#[allow(async_fn_in_trait)]
pub trait WifiFacility {
    /// Runs one radio scan and returns the visible networks in
    /// facility-defined order.
    async fn scan(&self) -> Result<Vec<DiscoveredNetwork>, ScanError>;

    /// Registers a network profile so its security attributes become
    /// queryable.
    fn register_profile(&mut self, network: &DiscoveredNetwork) -> ProfileHandle;

    fn security_attributes(&self, handle: ProfileHandle) -> (Vec<AkmType>, CipherType);
}

/// Production facility backed by the system wireless interface.
#[derive(Default)]
pub struct WifiRadio {
    profiles: Vec<(Vec<AkmType>, CipherType)>,
}

impl WifiRadio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WifiFacility for WifiRadio {
    async fn scan(&self) -> Result<Vec<DiscoveredNetwork>, ScanError> {
        let networks = tokio_wifiscanner::scan().await.map_err(|err| {
            debug!("wifi scan failed: {err}");
            ScanError::FacilityUnavailable
        })?;
        Ok(networks
            .into_iter()
            .map(DiscoveredNetwork::from_wifi)
            .collect())
    }

    fn register_profile(&mut self, network: &DiscoveredNetwork) -> ProfileHandle {
        self.profiles
            .push((network.akm_suites.clone(), network.cipher));
        ProfileHandle(self.profiles.len() - 1)
    }

    fn security_attributes(&self, handle: ProfileHandle) -> (Vec<AkmType>, CipherType) {
        self.profiles
            .get(handle.0)
            .cloned()
            .unwrap_or((vec![AkmType::Unknown], CipherType::Unknown))
    }
}

/// Maps an 802.11 channel number to its center frequency. Channels the
/// mapping does not know become 0 kHz and are flagged downstream as
/// invalid input.
fn channel_to_khz(channel: u16) -> u32 {
    match channel {
        1..=13 => (2407 + 5 * u32::from(channel)) * 1000,
        14 => 2_484_000,
        32..=177 => (5000 + 5 * u32::from(channel)) * 1000,
        _ => 0,
    }
}

/// Parses the facility's free-form security descriptor into suite
/// enumerants. The Linux backend leaves the field empty for networks it
/// cannot describe, which reads as an open network.
fn parse_security(security: &str) -> (Vec<AkmType>, CipherType) {
    let s = security.to_uppercase();
    let trimmed = s.trim();

    let mut akm_suites = Vec::new();
    if s.contains("WPA2") {
        akm_suites.push(if s.contains("PSK") {
            AkmType::Wpa2Psk
        } else {
            AkmType::Wpa2
        });
    }
    if s.replace("WPA2", "").contains("WPA") {
        akm_suites.push(if s.contains("PSK") {
            AkmType::WpaPsk
        } else {
            AkmType::Wpa
        });
    }

    let cipher = if s.contains("WEP") {
        CipherType::Wep
    } else if s.contains("CCMP") || s.contains("AES") {
        CipherType::Ccmp
    } else if s.contains("TKIP") {
        CipherType::Tkip
    } else if trimmed.is_empty() {
        CipherType::None
    } else {
        CipherType::Unknown
    };

    if akm_suites.is_empty()
        && (trimmed.is_empty() || trimmed.contains("NONE") || trimmed.contains("OPEN"))
    {
        akm_suites.push(AkmType::None);
    }

    (akm_suites, cipher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn channel_mapping_covers_both_bands() {
        assert_eq!(channel_to_khz(1), 2_412_000);
        assert_eq!(channel_to_khz(6), 2_437_000);
        assert_eq!(channel_to_khz(14), 2_484_000);
        assert_eq!(channel_to_khz(36), 5_180_000);
        assert_eq!(channel_to_khz(0), 0);
    }

    #[test]
    fn mixed_mode_descriptor_yields_both_suites() {
        let (akm, cipher) = parse_security("WPA WPA2 PSK (CCMP)");
        assert_eq!(akm, vec![AkmType::Wpa2Psk, AkmType::WpaPsk]);
        assert_eq!(cipher, CipherType::Ccmp);
    }

    #[test]
    fn empty_descriptor_reads_as_open() {
        let (akm, cipher) = parse_security("");
        assert_eq!(akm, vec![AkmType::None]);
        assert_eq!(cipher, CipherType::None);
    }

    #[test]
    fn wep_descriptor_sets_cipher_only() {
        let (akm, cipher) = parse_security("WEP");
        assert!(akm.is_empty());
        assert_eq!(cipher, CipherType::Wep);
    }

    #[test]
    fn registered_profile_attributes_round_trip() {
        let mut radio = WifiRadio::new();
        let network = DiscoveredNetwork {
            ssid: "net".into(),
            bssid: "aa:bb:cc:dd:ee:ff".into(),
            signal_dbm: -55,
            frequency_khz: 2_412_000,
            akm_suites: vec![AkmType::Wpa2Psk],
            cipher: CipherType::Ccmp,
        };
        let handle = radio.register_profile(&network);
        let (akm, cipher) = radio.security_attributes(handle);
        assert_eq!(akm, vec![AkmType::Wpa2Psk]);
        assert_eq!(cipher, CipherType::Ccmp);
    }

    #[test]
    fn frequency_converts_to_ghz() {
        let network = DiscoveredNetwork {
            ssid: String::new(),
            bssid: String::new(),
            signal_dbm: -60,
            frequency_khz: 2_412_000,
            akm_suites: vec![],
            cipher: CipherType::None,
        };
        assert!((network.frequency_ghz() - 2.412).abs() < 1e-9);
    }
}
