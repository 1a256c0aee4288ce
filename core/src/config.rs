use std::time::Duration;

use crate::clock::HourIndexing;

// ── Defaults ────────────────────────────────────────────────────────

const DEFAULT_TEMP_MAX_F: f32 = 85.0;
const DEFAULT_RAIN_MAX_PCT: u8 = 15;
const DEFAULT_API_INTERVAL_SECS: u64 = 90;
const DEFAULT_LOOP_SLEEP_MS: u64 = 100;
const DEFAULT_BRIGHTNESS: u8 = 80;

const DEFAULT_WIFI_ATTEMPTS: u32 = 3;
const DEFAULT_WIFI_RETRY_SECS: u64 = 5;

/// Point the hourly forecast is requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name, sent url-encoded so hour 0 is local midnight.
    pub timezone: String,
}

/// Ground station the satellite elevation is computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_m: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub norad_id: u32,
    pub label: String,
}

/// Everything the poll loop needs apart from secrets and pin numbers.
#[derive(Debug, Clone)]
pub struct StationConfig {
    pub forecast: ForecastLocation,
    pub observer: Observer,
    pub satellite: Satellite,
    /// Temperature in °F above which the heat range turns red.
    pub temp_max_f: f32,
    /// Rain chance in % above which the rain range turns blue.
    pub rain_max_pct: u8,
    pub api_interval: Duration,
    pub loop_sleep: Duration,
    pub brightness: u8,
    pub wifi_attempts: u32,
    pub wifi_retry_delay: Duration,
    pub hour_indexing: HourIndexing,
    /// Log raw API bodies at info level.
    pub debug_payloads: bool,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            forecast: ForecastLocation {
                latitude: 30.2241,
                longitude: -92.0198,
                timezone: "America/Chicago".to_string(),
            },
            observer: Observer {
                latitude: 30.20128,
                longitude: -92.04119,
                elevation_m: 10,
            },
            satellite: Satellite {
                norad_id: 25544,
                label: "ISS".to_string(),
            },
            temp_max_f: DEFAULT_TEMP_MAX_F,
            rain_max_pct: DEFAULT_RAIN_MAX_PCT,
            api_interval: Duration::from_secs(DEFAULT_API_INTERVAL_SECS),
            loop_sleep: Duration::from_millis(DEFAULT_LOOP_SLEEP_MS),
            brightness: DEFAULT_BRIGHTNESS,
            wifi_attempts: DEFAULT_WIFI_ATTEMPTS,
            wifi_retry_delay: Duration::from_secs(DEFAULT_WIFI_RETRY_SECS),
            hour_indexing: HourIndexing::Local,
            debug_payloads: true,
        }
    }
}

impl StationConfig {
    /// Boot banner text shown while the first satellite fix is pending.
    pub fn acquiring_text(&self) -> String {
        format!("ACQ {} POS", self.satellite.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployed_station() {
        let cfg = StationConfig::default();
        assert_eq!(cfg.temp_max_f, 85.0);
        assert_eq!(cfg.rain_max_pct, 15);
        assert_eq!(cfg.api_interval, Duration::from_secs(90));
        assert_eq!(cfg.wifi_attempts, 3);
        assert_eq!(cfg.satellite.norad_id, 25544);
        assert_eq!(cfg.hour_indexing, HourIndexing::Local);
    }

    #[test]
    fn acquiring_text_uses_satellite_label() {
        assert_eq!(StationConfig::default().acquiring_text(), "ACQ ISS POS");
    }
}
