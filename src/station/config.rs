//! Static station configuration.

use core::fmt;
use core::time::Duration;

use crate::network::application::http::{self, DEFAULT_TIMEOUT, Url};

/// How long the station sleeps after a successful report.
pub const DEFAULT_DEEP_SLEEP: Duration = Duration::from_millis(300_000);
/// How long the station waits before retrying a failed cycle.
pub const DEFAULT_ERROR_RETRY: Duration = Duration::from_secs(3);

/// Configuration of a [`Station`](super::Station).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Config<'a> {
    /// SSID of the access point to join.
    pub ssid: &'a str,
    /// Password of the access point.
    pub password: &'a str,
    /// Collector URL the readings are POSTed to.
    pub destination_url: &'a str,
    /// Sleep after a successful report.
    pub deep_sleep: Duration,
    /// Wait before retrying after a failed cycle.
    pub error_retry: Duration,
    /// Connect and read/write timeout of each report request.
    pub timeout: Duration,
}

impl<'a> Config<'a> {
    /// Creates a configuration with the default timings.
    pub fn new(ssid: &'a str, password: &'a str, destination_url: &'a str) -> Self {
        Self {
            ssid,
            password,
            destination_url,
            deep_sleep: DEFAULT_DEEP_SLEEP,
            error_retry: DEFAULT_ERROR_RETRY,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Checks that the destination is a usable `http://` URL.
    pub fn validate(&self) -> Result<Url<'a>, http::Error> {
        Url::parse(self.destination_url)
    }
}

// Keeps the password out of logs.
impl fmt::Debug for Config<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("ssid", &self.ssid)
            .field("password", &"***")
            .field("destination_url", &self.destination_url)
            .field("deep_sleep", &self.deep_sleep)
            .field("error_retry", &self.error_retry)
            .field("timeout", &self.timeout)
            .finish()
    }
}
