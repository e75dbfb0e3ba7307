//! Sensor readings and their JSON form.

use core::fmt;

use serde::Serialize;

/// One set of weather measurements.
///
/// Serializes to the JSON object the collector expects:
/// `{"temperature":..,"humidity":..,"pressure":..,"windspeed":..,"rain":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    /// Air temperature.
    pub temperature: f32,
    /// Relative humidity.
    pub humidity: f32,
    /// Air pressure.
    pub pressure: f32,
    /// Anemometer level.
    #[serde(rename = "windspeed")]
    pub wind_speed: f32,
    /// Rain sensor level.
    pub rain: f32,
}

impl Reading {
    /// Builds a reading from environment values and raw analog samples.
    ///
    /// The anemometer and rain sensor are sampled through a signed ADC; only
    /// the magnitude is meaningful.
    pub fn from_samples(
        temperature: f32,
        humidity: f32,
        pressure: f32,
        wind: i16,
        rain: i16,
    ) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
            wind_speed: f32::from(wind.unsigned_abs()),
            rain: f32::from(rain.unsigned_abs()),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Temperature: {}", self.temperature)?;
        writeln!(f, "Humidity: {}", self.humidity)?;
        writeln!(f, "Pressure: {}", self.pressure)?;
        writeln!(f, "Wind speed: {}", self.wind_speed)?;
        write!(f, "Rain: {}", self.rain)
    }
}
