use strum::Display;

/// Authentication-key-management suites as reported by the scan facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AkmType {
    None,
    Wpa,
    WpaPsk,
    Wpa2,
    Wpa2Psk,
    Unknown,
}

/// Traffic encryption suites as reported by the scan facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherType {
    None,
    Wep,
    Tkip,
    Ccmp,
    Unknown,
}

/// User-facing security category of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SecurityLabel {
    #[strum(to_string = "WPA2")]
    Wpa2,
    #[strum(to_string = "WPA")]
    Wpa,
    #[strum(to_string = "WEP")]
    Wep,
    #[strum(to_string = "Open")]
    Open,
    #[strum(to_string = "Unknown")]
    Unknown,
}

impl SecurityLabel {
    /// Classifies a network's security configuration. First match wins:
    /// WPA2 takes precedence over WPA on mixed-mode networks regardless
    /// of suite ordering, then WEP by cipher, then Open.
    pub fn classify(akm_suites: &[AkmType], cipher: CipherType) -> Self {
        if akm_suites
            .iter()
            .any(|a| matches!(a, AkmType::Wpa2 | AkmType::Wpa2Psk))
        {
            Self::Wpa2
        } else if akm_suites
            .iter()
            .any(|a| matches!(a, AkmType::Wpa | AkmType::WpaPsk))
        {
            Self::Wpa
        } else if cipher == CipherType::Wep {
            Self::Wep
        } else if akm_suites.contains(&AkmType::None) {
            Self::Open
        } else {
            Self::Unknown
        }
    }
}

/// A network is password protected unless its only suite is the
/// "no authentication" marker.
pub fn is_protected(akm_suites: &[AkmType]) -> bool {
    akm_suites != [AkmType::None]
}
