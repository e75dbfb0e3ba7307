//! # Weather station application
//!
//! Measures the weather, POSTs the readings as JSON to a collector and sleeps,
//! retrying the whole cycle after a short delay whenever anything fails.
//!
//! The hardware is reached through small traits so the station runs against
//! any board support package:
//!
//! - [`Sensor`]: produces a [`Reading`]
//! - [`Wlan`]: joins the access point before the first report
//! - [`Sleep`]: deep sleep after a report, plain delay before a retry
//! - a debug sink, which is any [`core::fmt::Write`] (UART, display, ...)
//!
//! ```text
//! join_network ──▶ report ──ok──▶ deep_sleep ──┐
//!                    ▲  │                      │
//!                    │  └─err──▶ delay ────────┤
//!                    └─────────────────────────┘
//! ```

use core::fmt;
use core::time::Duration;

use crate::network::Connect;
use crate::network::application::http::{self, Client, Response};
use crate::network::error::{Error as NetworkError, NetworkError as _};

pub mod config;
pub mod reading;

pub use config::Config;
pub use reading::Reading;

/// A source of weather measurements.
pub trait Sensor {
    /// Associated error type
    type Error: fmt::Debug;
    /// Takes one set of measurements.
    fn read(&mut self) -> Result<Reading, Self::Error>;
}

/// The wireless network interface.
pub trait Wlan {
    /// Associated error type
    type Error: crate::network::error::NetworkError;
    /// Returns `true` while associated with an access point.
    fn is_connected(&self) -> bool;
    /// Joins the access point, blocking until connected or failed.
    fn join(&mut self, ssid: &str, password: &str) -> Result<(), Self::Error>;
}

/// Suspends the station between cycles.
pub trait Sleep {
    /// Low-power sleep after a successful report. On hardware this usually
    /// resets the device on wake-up and never returns.
    fn deep_sleep(&mut self, duration: Duration);
    /// Busy or light sleep before retrying a failed cycle.
    fn delay(&mut self, duration: Duration);
}

/// Errors of one station cycle.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error<E> {
    /// The sensor could not be read.
    Sensor(E),
    /// The access point could not be joined.
    Network(NetworkError),
    /// The report request failed.
    Http(http::Error),
}

impl<E> From<http::Error> for Error<E> {
    fn from(err: http::Error) -> Self {
        Error::Http(err)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Sensor(e) => write!(f, "sensor error: {e:?}"),
            Error::Network(e) => write!(f, "network error: {e}"),
            Error::Http(e) => write!(f, "http error: {e}"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Sensor(e) => defmt::write!(f, "Sensor({})", e),
            Error::Network(e) => defmt::write!(f, "Network({})", e),
            Error::Http(e) => defmt::write!(f, "Http({})", e),
        }
    }
}

/// The measure-and-report loop.
#[derive(Debug)]
pub struct Station<'a, N, S, W, Z, D>
where
    N: Connect,
    S: Sensor,
    W: Wlan,
    Z: Sleep,
    D: fmt::Write,
{
    config: Config<'a>,
    client: Client<N>,
    sensor: S,
    wlan: W,
    sleeper: Z,
    debug: D,
}

impl<'a, N, S, W, Z, D> Station<'a, N, S, W, Z, D>
where
    N: Connect,
    S: Sensor,
    W: Wlan,
    Z: Sleep,
    D: fmt::Write,
{
    /// Assembles a station from its configuration and hardware.
    pub fn new(config: Config<'a>, network: N, sensor: S, wlan: W, sleeper: Z, debug: D) -> Self {
        Self {
            config,
            client: Client::new(network),
            sensor,
            wlan,
            sleeper,
            debug,
        }
    }

    /// Joins the configured access point unless already connected.
    pub fn join_network(&mut self) -> Result<(), Error<S::Error>> {
        let ssid = self.config.ssid;
        if !self.wlan.is_connected() {
            // The debug sink is best effort, write errors are ignored.
            let _ = writeln!(self.debug, "Connecting to WLAN network {ssid} ...");
            self.wlan
                .join(ssid, self.config.password)
                .map_err(|e| Error::Network(e.kind()))?;
        }
        info!("station: joined {}", ssid);
        let _ = writeln!(self.debug, "Connected to {ssid}");
        Ok(())
    }

    /// Measures once and POSTs the reading to the collector.
    pub fn report(&mut self) -> Result<Response, Error<S::Error>> {
        let reading = self.sensor.read().map_err(Error::Sensor)?;
        let _ = writeln!(self.debug, "{reading}");

        let url = self.config.destination_url;
        let response = self.client.post(url, &[], Some(&reading), &[], self.config.timeout)?;

        let status = response.status_code();
        if status == 200 {
            let _ = writeln!(self.debug, "Successfully sent HTTP POST request to: {url}");
        }
        let _ = writeln!(
            self.debug,
            "Received response from {url}\nStatus code: {status}\nContent: {}",
            response.text()
        );
        Ok(response)
    }

    /// Runs one cycle: report, then deep sleep on success or wait the retry
    /// delay on failure.
    pub fn step(&mut self) -> Result<Response, Error<S::Error>> {
        match self.report() {
            Ok(response) => {
                debug!("station: reported, status {}", response.status_code());
                self.sleeper.deep_sleep(self.config.deep_sleep);
                Ok(response)
            }
            Err(e) => {
                warn!("station: report cycle failed");
                self.retry_after_error();
                Err(e)
            }
        }
    }

    /// Joins the network, then reports forever.
    pub fn run(&mut self) -> ! {
        while self.join_network().is_err() {
            self.retry_after_error();
        }
        loop {
            // Failures are already reported to the debug sink.
            let _ = self.step();
        }
    }

    /// The debug sink.
    pub fn debug_sink(&self) -> &D {
        &self.debug
    }

    /// The sleep scheduler.
    pub fn sleeper(&self) -> &Z {
        &self.sleeper
    }

    fn retry_after_error(&mut self) {
        let retry = self.config.error_retry;
        let secs = retry.as_secs();
        let _ = writeln!(self.debug, "Error occurred, retry in {secs} seconds ...");
        self.sleeper.delay(retry);
    }
}
