use std::net::IpAddr;
use std::time::{Duration, Instant};

use rand::random;
use surge_ping::{Client, Config, PingIdentifier, PingSequence};
use tracing::debug;

/// Timeout for the single HTTP GET the latency probe issues.
pub const LATENCY_TIMEOUT: Duration = Duration::from_secs(5);

const PING_PAYLOAD: [u8; 56] = [0; 56];

/// Outcome of one latency probe. Renders as seconds on success and as
/// the `-1` sentinel on failure; no other negative value can occur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Latency {
    Measured(f64),
    Failed,
}

impl Latency {
    pub fn seconds(self) -> f64 {
        match self {
            Self::Measured(secs) => secs,
            Self::Failed => -1.0,
        }
    }
}

/// Sends a single ICMP echo to `target` and reports whether it answered,
/// together with the wall-clock time spent on the attempt. Any failure,
/// including a target that is not an address at all, reads as
/// unreachable; this never returns an error.
pub async fn ping(target: &str) -> (bool, f64) {
    let started = Instant::now();
    let reachable = ping_once(target).await;
    (reachable, started.elapsed().as_secs_f64())
}

async fn ping_once(target: &str) -> bool {
    let Ok(addr) = target.parse::<IpAddr>() else {
        debug!("ping target {target} is not an IP address");
        return false;
    };
    let client = match Client::new(&Config::default()) {
        Ok(client) => client,
        Err(err) => {
            debug!("icmp client unavailable: {err}");
            return false;
        }
    };
    let mut pinger = client.pinger(addr, PingIdentifier(random())).await;
    // Timeout stays at the pinger's default, not separately configured.
    pinger.ping(PingSequence(0), &PING_PAYLOAD).await.is_ok()
}

/// Issues one bounded HTTP GET to `http://<target>` and returns the
/// elapsed response time. Any transport error (timeout, refused
/// connection, DNS failure) degrades to [`Latency::Failed`].
pub async fn measure_latency(client: &reqwest::Client, target: &str) -> Latency {
    let url = format!("http://{target}");
    let started = Instant::now();
    match client.get(&url).timeout(LATENCY_TIMEOUT).send().await {
        Ok(_) => Latency::Measured(started.elapsed().as_secs_f64()),
        Err(err) => {
            debug!("latency probe to {url} failed: {err}");
            Latency::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn failed_latency_renders_the_exact_sentinel() {
        assert_eq!(Latency::Failed.seconds(), -1.0);
        assert_eq!(Latency::Measured(0.25).seconds(), 0.25);
    }

    #[tokio::test]
    async fn ping_of_a_mac_address_is_unreachable() {
        let (reachable, elapsed) = ping("aa:bb:cc:dd:ee:ff").await;
        assert!(!reachable);
        assert!(elapsed >= 0.0);
    }

    #[tokio::test]
    async fn latency_probe_fails_to_sentinel_on_refused_connection() {
        let client = reqwest::Client::builder()
            .timeout(LATENCY_TIMEOUT)
            .build()
            .unwrap();
        let latency = measure_latency(&client, "127.0.0.1:1").await;
        assert_eq!(latency, Latency::Failed);
        assert_eq!(latency.seconds(), -1.0);
    }
}
