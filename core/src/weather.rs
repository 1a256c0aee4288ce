use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::config::ForecastLocation;

const OPEN_METEO_FORECAST: &str = "https://api.open-meteo.com/v1/forecast";

// ── Data types ──────────────────────────────────────────────────────

/// Hourly series for one forecast day, index 0 = local midnight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlyForecast {
    pub temperature_f: Vec<Option<f32>>,
    pub rain_chance: Vec<Option<f32>>,
}

/// The two values the station acts on for a single hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourReading {
    pub temperature_f: f32,
    pub rain_chance: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyIcon {
    Sun,
    Rain,
}

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("error decoding weather JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected weather data structure: missing {0}")]
    Structure(&'static str),
    #[error("no forecast entry for hour {hour} ({len} entries)")]
    HourOutOfRange { hour: usize, len: usize },
    #[error("forecast {field} is null for hour {hour}")]
    MissingValue { field: &'static str, hour: usize },
}

// ── Open-Meteo JSON structures ──────────────────────────────────────

#[derive(Deserialize)]
struct MeteoRoot {
    hourly: Option<MeteoHourly>,
}

#[derive(Deserialize)]
struct MeteoHourly {
    temperature_2m: Option<Vec<Option<f32>>>,
    precipitation_probability: Option<Vec<Option<f32>>>,
}

// ── Request ─────────────────────────────────────────────────────────

pub fn forecast_url(location: &ForecastLocation) -> String {
    format!(
        "{}?latitude={}&longitude={}\
         &hourly=temperature_2m,precipitation_probability\
         &temperature_unit=fahrenheit&windspeed_unit=mph&precipitation_unit=inch\
         &timezone={}&forecast_days=1",
        OPEN_METEO_FORECAST,
        location.latitude,
        location.longitude,
        urlencoding::encode(&location.timezone),
    )
}

// ── Parsing ─────────────────────────────────────────────────────────

pub fn parse_forecast(json: &str) -> Result<HourlyForecast, ForecastError> {
    let root: MeteoRoot = serde_json::from_str(json)?;
    let hourly = root.hourly.ok_or(ForecastError::Structure("hourly"))?;
    let temperature_f = hourly
        .temperature_2m
        .ok_or(ForecastError::Structure("hourly.temperature_2m"))?;
    let rain_chance = hourly
        .precipitation_probability
        .ok_or(ForecastError::Structure("hourly.precipitation_probability"))?;

    info!(
        "forecast: {} temperature / {} rain entries",
        temperature_f.len(),
        rain_chance.len()
    );

    Ok(HourlyForecast {
        temperature_f,
        rain_chance,
    })
}

impl HourlyForecast {
    /// Look up the forecast for `hour`, checking both series are long enough.
    pub fn at_hour(&self, hour: usize) -> Result<HourReading, ForecastError> {
        let len = self.temperature_f.len().min(self.rain_chance.len());
        if hour >= len {
            return Err(ForecastError::HourOutOfRange { hour, len });
        }
        let temperature_f = self.temperature_f[hour].ok_or(ForecastError::MissingValue {
            field: "temperature_2m",
            hour,
        })?;
        let chance = self.rain_chance[hour].ok_or(ForecastError::MissingValue {
            field: "precipitation_probability",
            hour,
        })?;
        Ok(HourReading {
            temperature_f,
            rain_chance: chance.round().clamp(0.0, 100.0) as u8,
        })
    }
}

// ── Thresholds ──────────────────────────────────────────────────────

pub fn is_hot(temperature_f: f32, max_f: f32) -> bool {
    temperature_f > max_f
}

pub fn is_rainy(rain_chance: u8, max_pct: u8) -> bool {
    rain_chance > max_pct
}

pub fn sky_icon(rain_chance: u8) -> SkyIcon {
    if rain_chance == 0 {
        SkyIcon::Sun
    } else {
        SkyIcon::Rain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_json() -> String {
        let temps: Vec<String> = (0..24).map(|h| format!("{}.5", 70 + h)).collect();
        let rain: Vec<String> = (0..24).map(|h| (h * 4).to_string()).collect();
        format!(
            r#"{{"latitude":30.22,"hourly_units":{{"temperature_2m":"°F"}},
                "hourly":{{"time":[],"temperature_2m":[{}],"precipitation_probability":[{}]}}}}"#,
            temps.join(","),
            rain.join(",")
        )
    }

    #[test]
    fn url_carries_location_and_units() {
        let loc = ForecastLocation {
            latitude: 30.2241,
            longitude: -92.0198,
            timezone: "America/Chicago".to_string(),
        };
        assert_eq!(
            forecast_url(&loc),
            "https://api.open-meteo.com/v1/forecast?latitude=30.2241&longitude=-92.0198\
             &hourly=temperature_2m,precipitation_probability\
             &temperature_unit=fahrenheit&windspeed_unit=mph&precipitation_unit=inch\
             &timezone=America%2FChicago&forecast_days=1"
        );
    }

    #[test]
    fn reading_is_indexed_by_hour() {
        let forecast = parse_forecast(&day_json()).unwrap();
        let noon = forecast.at_hour(12).unwrap();
        assert_eq!(noon.temperature_f, 82.5);
        assert_eq!(noon.rain_chance, 48);
        let midnight = forecast.at_hour(0).unwrap();
        assert_eq!(midnight.rain_chance, 0);
    }

    #[test]
    fn hour_past_end_of_series_is_an_error() {
        let forecast = parse_forecast(
            r#"{"hourly":{"temperature_2m":[80.0,81.0],"precipitation_probability":[5]}}"#,
        )
        .unwrap();
        assert!(forecast.at_hour(0).is_ok());
        assert!(matches!(
            forecast.at_hour(1),
            Err(ForecastError::HourOutOfRange { hour: 1, len: 1 })
        ));
    }

    #[test]
    fn missing_hourly_block_is_a_structure_error() {
        let err = parse_forecast(r#"{"latitude":30.2}"#).unwrap_err();
        assert!(matches!(err, ForecastError::Structure("hourly")));
        let err = parse_forecast(r#"{"hourly":{"precipitation_probability":[1]}}"#).unwrap_err();
        assert!(matches!(err, ForecastError::Structure("hourly.temperature_2m")));
    }

    #[test]
    fn null_entries_are_reported() {
        let forecast = parse_forecast(
            r#"{"hourly":{"temperature_2m":[null],"precipitation_probability":[10]}}"#,
        )
        .unwrap();
        assert!(matches!(
            forecast.at_hour(0),
            Err(ForecastError::MissingValue { field: "temperature_2m", hour: 0 })
        ));
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(matches!(parse_forecast("not json"), Err(ForecastError::Json(_))));
    }

    #[test]
    fn temperature_threshold_is_strict() {
        assert!(!is_hot(85.0, 85.0));
        assert!(is_hot(85.1, 85.0));
        assert!(!is_hot(60.0, 85.0));
    }

    #[test]
    fn rain_threshold_is_strict() {
        assert!(!is_rainy(15, 15));
        assert!(is_rainy(16, 15));
        assert!(!is_rainy(0, 15));
    }

    #[test]
    fn sun_only_when_rain_chance_is_zero() {
        assert_eq!(sky_icon(0), SkyIcon::Sun);
        assert_eq!(sky_icon(1), SkyIcon::Rain);
        assert_eq!(sky_icon(100), SkyIcon::Rain);
    }
}
