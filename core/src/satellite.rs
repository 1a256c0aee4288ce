use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{Observer, Satellite};

const N2YO_POSITIONS: &str = "https://api.n2yo.com/rest/v1/satellite/positions";
/// Number of future positions requested; only the first is used.
const POSITION_SECONDS: u32 = 1;

/// Direction of travel relative to the previous fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Descending,
    Unchanged,
}

impl Trend {
    /// Marker appended to the display line.
    pub fn marker(self) -> Option<char> {
        match self {
            Trend::Rising => Some('U'),
            Trend::Descending => Some('D'),
            Trend::Unchanged => None,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Descending => "descending",
            Trend::Unchanged => "unchanged",
        }
    }
}

#[derive(Debug, Error)]
pub enum SatelliteError {
    #[error("error decoding satellite JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("N2YO rejected the request: {0}")]
    Api(String),
    #[error("satellite response has no positions")]
    NoPositions,
}

// ── N2YO JSON structures ────────────────────────────────────────────

#[derive(Deserialize)]
struct PositionsRoot {
    info: Option<PositionsInfo>,
    positions: Option<Vec<Position>>,
}

#[derive(Deserialize)]
struct PositionsInfo {
    error: Option<String>,
}

#[derive(Deserialize)]
struct Position {
    elevation: f64,
}

pub fn positions_url(satellite: &Satellite, observer: &Observer, api_key: &str) -> String {
    format!(
        "{}/{}/{}/{}/{}/{}?apiKey={}",
        N2YO_POSITIONS,
        satellite.norad_id,
        observer.latitude,
        observer.longitude,
        observer.elevation_m,
        POSITION_SECONDS,
        urlencoding::encode(api_key),
    )
}

/// Copy of `url` safe for logs, with the API key value masked.
pub fn redact_api_key(url: &str) -> String {
    match url.find("apiKey=") {
        Some(i) => {
            let start = i + "apiKey=".len();
            let end = url[start..].find('&').map_or(url.len(), |n| start + n);
            format!("{}***{}", &url[..start], &url[end..])
        }
        None => url.to_string(),
    }
}

/// Elevation in degrees of the first reported position.
pub fn parse_elevation(json: &str) -> Result<f64, SatelliteError> {
    let root: PositionsRoot = serde_json::from_str(json)?;
    if let Some(err) = root.info.and_then(|i| i.error) {
        return Err(SatelliteError::Api(err));
    }
    root.positions
        .and_then(|p| p.into_iter().next())
        .map(|p| p.elevation)
        .ok_or(SatelliteError::NoPositions)
}

/// Remembers the last elevation so consecutive fixes yield a [`Trend`].
#[derive(Debug, Default)]
pub struct ElevationTracker {
    previous: f64,
}

impl ElevationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self) -> f64 {
        self.previous
    }

    pub fn observe(&mut self, elevation: f64) -> Trend {
        let trend = if elevation > self.previous {
            Trend::Rising
        } else if elevation < self.previous {
            Trend::Descending
        } else {
            Trend::Unchanged
        };
        info!("satellite elevation {} is {}", elevation, trend.describe());
        self.previous = elevation;
        trend
    }
}

/// Display line such as `ISS 41.7 U`, or `None` when nothing moved.
pub fn status_line(label: &str, elevation: f64, trend: Trend) -> Option<String> {
    trend
        .marker()
        .map(|m| format!("{} {} {}", label, elevation, m))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISS_FIX: &str = r#"{
        "info":{"satname":"SPACE STATION","satid":25544,"transactionscount":3},
        "positions":[
            {"satlatitude":-39.9,"satlongitude":158.3,"sataltitude":417.8,
             "azimuth":254.5,"elevation":-69.19,"ra":44.3,"dec":-43.1,
             "timestamp":1521354418,"eclipsed":true},
            {"elevation":-69.0}
        ]}"#;

    #[test]
    fn url_is_templated_from_observer() {
        let sat = Satellite {
            norad_id: 25544,
            label: "ISS".to_string(),
        };
        let obs = Observer {
            latitude: 30.20128,
            longitude: -92.04119,
            elevation_m: 10,
        };
        assert_eq!(
            positions_url(&sat, &obs, "ABC-123"),
            "https://api.n2yo.com/rest/v1/satellite/positions/25544/30.20128/-92.04119/10/1?apiKey=ABC-123"
        );
    }

    #[test]
    fn api_key_is_masked_for_logs() {
        assert_eq!(
            redact_api_key("https://x/1/2?apiKey=SECRET"),
            "https://x/1/2?apiKey=***"
        );
        assert_eq!(
            redact_api_key("https://x/?apiKey=SECRET&y=1"),
            "https://x/?apiKey=***&y=1"
        );
        assert_eq!(redact_api_key("https://x/?a=1"), "https://x/?a=1");
    }

    #[test]
    fn first_position_wins() {
        assert_eq!(parse_elevation(ISS_FIX).unwrap(), -69.19);
    }

    #[test]
    fn empty_positions_is_an_error() {
        let err = parse_elevation(r#"{"info":{"satid":25544},"positions":[]}"#).unwrap_err();
        assert!(matches!(err, SatelliteError::NoPositions));
    }

    #[test]
    fn api_error_is_surfaced() {
        let err = parse_elevation(r#"{"error":"x","info":{"error":"Invalid API Key!"}}"#)
            .unwrap_err();
        assert!(matches!(err, SatelliteError::Api(ref m) if m == "Invalid API Key!"));
    }

    #[test]
    fn tracker_starts_at_zero_and_follows_fixes() {
        let mut tracker = ElevationTracker::new();
        assert_eq!(tracker.observe(12.5), Trend::Rising);
        assert_eq!(tracker.observe(12.5), Trend::Unchanged);
        assert_eq!(tracker.observe(3.0), Trend::Descending);
        assert_eq!(tracker.previous(), 3.0);
    }

    #[test]
    fn below_horizon_first_fix_is_descending() {
        let mut tracker = ElevationTracker::new();
        assert_eq!(tracker.observe(-40.2), Trend::Descending);
    }

    #[test]
    fn status_line_marks_direction() {
        assert_eq!(
            status_line("ISS", 41.75, Trend::Rising).as_deref(),
            Some("ISS 41.75 U")
        );
        assert_eq!(
            status_line("ISS", -3.5, Trend::Descending).as_deref(),
            Some("ISS -3.5 D")
        );
        assert_eq!(status_line("ISS", 10.0, Trend::Unchanged), None);
    }
}
