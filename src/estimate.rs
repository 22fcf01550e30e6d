use crate::errors::ScanError;

/// Estimates the distance to an access point in meters from its received
/// signal power and broadcast frequency, using the log-distance path-loss
/// model. The result grows with weaker signals and shrinks with higher
/// frequencies; very weak signals can produce arbitrarily large values.
pub fn estimate_distance(signal_dbm: i32, freq_ghz: f64) -> Result<f64, ScanError> {
    if freq_ghz <= 0.0 {
        return Err(ScanError::InvalidInput(format!(
            "non-positive frequency: {freq_ghz} GHz"
        )));
    }
    let freq_mhz = freq_ghz * 1000.0;
    let exponent = (27.55 - 20.0 * freq_mhz.log10() + f64::from(signal_dbm.abs())) / 20.0;
    Ok(10f64.powf(exponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_distance_at_2_4_ghz() {
        let d = estimate_distance(-60, 2.4).unwrap();
        assert!((d - 9.94).abs() < 0.05, "got {d}");
    }

    #[test]
    fn weaker_signal_is_farther() {
        let mut last = 0.0;
        for dbm in [-30, -50, -60, -70, -90] {
            let d = estimate_distance(dbm, 2.4).unwrap();
            assert!(d > last, "{dbm} dBm gave {d}, not above {last}");
            last = d;
        }
    }

    #[test]
    fn higher_frequency_is_nearer() {
        let mut last = f64::INFINITY;
        for ghz in [2.412, 2.484, 5.18, 5.825] {
            let d = estimate_distance(-65, ghz).unwrap();
            assert!(d < last, "{ghz} GHz gave {d}, not below {last}");
            last = d;
        }
    }

    #[test]
    fn non_positive_frequency_is_rejected() {
        for ghz in [0.0, -2.4] {
            match estimate_distance(-60, ghz) {
                Err(ScanError::InvalidInput(_)) => {}
                other => panic!("expected InvalidInput, got {other:?}"),
            }
        }
    }

    #[test]
    fn distance_is_deterministic() {
        let a = estimate_distance(-72, 5.5).unwrap();
        let b = estimate_distance(-72, 5.5).unwrap();
        assert_eq!(a, b);
    }
}
