use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::scanner::CaptureSample;

/// Protocols reported in simulated capture log lines
const LOG_PROTOCOLS: [&str; 3] = ["TCP", "UDP", "ICMP"];

/// A source of per-second packet counts for live capture.
///
/// The simulated source draws random numbers; a real capture backend would
/// count frames seen on the interface.
pub trait CaptureSource {
    /// Produces the sample for the second starting at `at`
    fn next_sample(&mut self, at: DateTime<Utc>) -> CaptureSample;

    /// One log line describing a packet seen at `at`
    fn log_line(&mut self, at: DateTime<Utc>) -> String;
}

/// Capture source backed by a seedable RNG
pub struct RandomCaptureSource {
    rng: StdRng,
}

impl RandomCaptureSource {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { rng }
    }
}

impl CaptureSource for RandomCaptureSource {
    fn next_sample(&mut self, at: DateTime<Utc>) -> CaptureSample {
        CaptureSample {
            timestamp: at,
            packets: self.rng.gen_range(50..150),
        }
    }

    fn log_line(&mut self, at: DateTime<Utc>) -> String {
        let protocol = LOG_PROTOCOLS[self.rng.gen_range(0..LOG_PROTOCOLS.len())];
        let length: u32 = self.rng.gen_range(0..1500);
        format!(
            "[{}] Packet captured: Protocol {protocol}, Length {length}",
            at.format("%H:%M:%S")
        )
    }
}
