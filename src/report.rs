use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use color_eyre::owo_colors::OwoColorize;

use crate::lookup::Lookup;
use crate::probe::Latency;
use crate::security::SecurityLabel;

/// The combined diagnostic record for one discovered network. Every
/// field always renders, either as a real value or as its sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceReport {
    pub ssid: String,
    pub bssid: String,
    pub signal_dbm: i32,
    pub frequency_ghz: f64,
    pub distance_m: f64,
    pub reachable: bool,
    pub probe_secs: f64,
    pub latency: Latency,
    pub vendor: Lookup,
    pub security: SecurityLabel,
    pub protected: bool,
    pub provider: Lookup,
    pub operating_system: Lookup,
}

/// Emits report lines to the console (colored) and to the append-only
/// log file (same text, ANSI codes stripped). The file is opened,
/// appended and closed per line; concurrent external writers are not
/// coordinated against.
pub struct ReportSink {
    log_file: PathBuf,
}

impl ReportSink {
    pub fn new(log_file: PathBuf) -> Self {
        Self { log_file }
    }

    pub fn emit(&self, line: &str) -> std::io::Result<()> {
        println!("{line}");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        writeln!(file, "{}", strip_ansi_escapes::strip_str(line))?;
        Ok(())
    }

    pub fn emit_report(&self, report: &DeviceReport) -> std::io::Result<()> {
        self.emit(&format!(
            "Name: {}, Signal: {}, Frequency: {:.3} GHz, Distance: {}",
            report.ssid.blue(),
            format!("{} dBm", report.signal_dbm).green(),
            report.frequency_ghz,
            format!("{:.2} meters", report.distance_m).magenta().bold(),
        ))?;
        if report.reachable {
            self.emit(&format!("Ping to device {} succeeded.", report.bssid))?;
        } else {
            self.emit(&format!("Ping to device {} failed.", report.bssid))?;
        }
        match report.latency {
            Latency::Measured(secs) => self.emit(&format!(
                "Connection latency for device {}: {:.2} s",
                report.bssid, secs
            ))?,
            Latency::Failed => self.emit(&format!(
                "Could not measure connection latency for device {}",
                report.bssid
            ))?,
        }
        self.emit(&format!("Device vendor: {}", report.vendor))?;
        self.emit(&format!("Security type: {}", report.security))?;
        self.emit(&format!("Password protected: {}", report.protected))?;
        self.emit(&format!("Internet provider: {}", report.provider))?;
        self.emit(&format!("Operating system: {}", report.operating_system))?;
        let elapsed = (report.probe_secs * 100.0).round() / 100.0;
        self.emit(&format!(
            "Device probe time: {}",
            format!("{elapsed:.2} s").red()
        ))?;
        self.emit("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_report() -> DeviceReport {
        DeviceReport {
            ssid: "TestNet".to_string(),
            bssid: "aa:bb:cc:dd:ee:ff".to_string(),
            signal_dbm: -70,
            frequency_ghz: 2.412,
            distance_m: 31.4,
            reachable: false,
            probe_secs: 0.004,
            latency: Latency::Failed,
            vendor: Lookup::Unknown,
            security: SecurityLabel::Open,
            protected: false,
            provider: Lookup::Unknown,
            operating_system: Lookup::Unknown,
        }
    }

    fn temp_log(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wifiprobe-report-{name}-{}.log", std::process::id()))
    }

    #[test]
    fn log_lines_carry_no_ansi_codes() {
        let path = temp_log("ansi");
        let _ = std::fs::remove_file(&path);
        let sink = ReportSink::new(path.clone());
        sink.emit_report(&sample_report()).unwrap();
        let log = std::fs::read_to_string(&path).unwrap();
        assert!(!log.contains('\u{1b}'), "log contains escape codes: {log:?}");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn every_field_renders_a_value_or_sentinel() {
        let path = temp_log("fields");
        let _ = std::fs::remove_file(&path);
        let sink = ReportSink::new(path.clone());
        sink.emit_report(&sample_report()).unwrap();
        let log = std::fs::read_to_string(&path).unwrap();
        assert!(log.contains("Name: TestNet, Signal: -70 dBm, Frequency: 2.412 GHz"));
        assert!(log.contains("Distance: 31.40 meters"));
        assert!(log.contains("Ping to device aa:bb:cc:dd:ee:ff failed."));
        assert!(log.contains("Could not measure connection latency for device aa:bb:cc:dd:ee:ff"));
        assert!(log.contains("Device vendor: Unknown"));
        assert!(log.contains("Security type: Open"));
        assert!(log.contains("Password protected: false"));
        assert!(log.contains("Internet provider: Unknown"));
        assert!(log.contains("Operating system: Unknown"));
        assert!(log.contains("Device probe time: 0.00 s"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn emit_appends_one_line_per_message() {
        let path = temp_log("append");
        let _ = std::fs::remove_file(&path);
        let sink = ReportSink::new(path.clone());
        sink.emit("first").unwrap();
        sink.emit("second").unwrap();
        let log = std::fs::read_to_string(&path).unwrap();
        assert_eq!(log, "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }
}
