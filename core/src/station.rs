//! What happens to the strip and the screen when a fix arrives.
//!
//! Network I/O stays in the firmware; this type only sees parsed payloads,
//! so a failed fetch simply never reaches it.

use core::fmt::Debug;
use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::clock::{forecast_hour, LocalTime};
use crate::config::StationConfig;
use crate::display::{Dashboard, Panel};
use crate::leds::{LedFrame, LedWriter, SOFT_WHITE, STARTUP_RANGE};
use crate::satellite::{status_line, ElevationTracker, Trend};
use crate::timer::{IntervalTimer, MinuteWatch};
use crate::weather::{is_hot, is_rainy, ForecastError, HourReading, HourlyForecast};

#[derive(Debug, Error)]
pub enum StationError<PE: Debug, LE: Debug> {
    #[error("display update failed: {0:?}")]
    Display(PE),
    #[error("LED strip update failed: {0:?}")]
    Leds(LE),
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

/// Outcome of applying one forecast hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    pub hour: usize,
    pub reading: HourReading,
    pub hot: bool,
    pub rainy: bool,
}

pub struct Station<P, L> {
    config: StationConfig,
    dashboard: Dashboard<P>,
    strip: L,
    frame: LedFrame,
    tracker: ElevationTracker,
    minute: MinuteWatch,
    api_timer: IntervalTimer,
}

impl<P, L> Station<P, L>
where
    P: Panel,
    P::Error: Debug,
    L: LedWriter,
    L::Error: Debug,
{
    /// `uptime` starts the API timer; the first fetch is one interval later.
    pub fn new(config: StationConfig, panel: P, strip: L, uptime: Duration) -> Self {
        let api_timer = IntervalTimer::new(config.api_interval, uptime);
        Self {
            config,
            dashboard: Dashboard::new(panel),
            strip,
            frame: LedFrame::new(),
            tracker: ElevationTracker::new(),
            minute: MinuteWatch::default(),
            api_timer,
        }
    }

    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    pub fn frame(&self) -> &LedFrame {
        &self.frame
    }

    pub fn dashboard(&self) -> &Dashboard<P> {
        &self.dashboard
    }

    pub fn strip(&self) -> &L {
        &self.strip
    }

    fn show_leds(&mut self) -> Result<(), StationError<P::Error, L::Error>> {
        self.strip
            .write(&self.frame, self.config.brightness)
            .map_err(StationError::Leds)
    }

    fn present(&mut self) -> Result<(), StationError<P::Error, L::Error>> {
        self.dashboard.present().map_err(StationError::Display)
    }

    /// Blank the strip, then light the startup pixels and a status line.
    pub fn boot(&mut self) -> Result<(), StationError<P::Error, L::Error>> {
        self.frame.clear();
        self.show_leds()?;
        self.dashboard.clear_all().map_err(StationError::Display)?;
        self.present()?;

        self.frame.fill(STARTUP_RANGE, SOFT_WHITE);
        self.show_leds()?;
        let status = self.config.acquiring_text();
        self.dashboard
            .draw_status(&status)
            .map_err(StationError::Display)?;
        self.present()
    }

    /// Redraw the clock when the minute changed. Returns whether it did.
    pub fn tick_clock(
        &mut self,
        now: &LocalTime,
    ) -> Result<bool, StationError<P::Error, L::Error>> {
        if !self.minute.changed(now.minute) {
            return Ok(false);
        }
        self.dashboard
            .draw_time(now.hour, now.minute)
            .map_err(StationError::Display)?;
        self.present()?;
        Ok(true)
    }

    /// True at most once per API interval; restarts the interval when it fires.
    pub fn take_api_slot(&mut self, uptime: Duration) -> bool {
        if !self.api_timer.is_due(uptime) {
            return false;
        }
        self.api_timer.reset(uptime);
        true
    }

    /// Update screen and strip from the forecast entry for the current hour.
    pub fn apply_forecast(
        &mut self,
        forecast: &HourlyForecast,
        now: &LocalTime,
    ) -> Result<Conditions, StationError<P::Error, L::Error>> {
        let hour = forecast_hour(self.config.hour_indexing, now);
        let reading = forecast.at_hour(hour)?;
        let hot = is_hot(reading.temperature_f, self.config.temp_max_f);
        let rainy = is_rainy(reading.rain_chance, self.config.rain_max_pct);
        info!(
            "hour {}: temp {}°F (max {}) rain {}% (max {})",
            hour,
            reading.temperature_f,
            self.config.temp_max_f,
            reading.rain_chance,
            self.config.rain_max_pct
        );

        self.dashboard
            .draw_temperature(reading.temperature_f)
            .map_err(StationError::Display)?;
        self.dashboard
            .draw_rain(reading.rain_chance)
            .map_err(StationError::Display)?;
        self.present()?;

        self.frame.apply_conditions(hot, rainy);
        self.show_leds()?;

        Ok(Conditions {
            hour,
            reading,
            hot,
            rainy,
        })
    }

    /// Track the new elevation; the display only changes on rise or fall.
    pub fn apply_elevation(
        &mut self,
        elevation: f64,
    ) -> Result<Trend, StationError<P::Error, L::Error>> {
        let trend = self.tracker.observe(elevation);
        if let Some(line) = status_line(&self.config.satellite.label, elevation, trend) {
            self.dashboard
                .draw_satellite(&line)
                .map_err(StationError::Display)?;
            self.present()?;
        }
        Ok(trend)
    }
}
