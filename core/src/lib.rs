//! Platform-agnostic logic for the Skylight firmware.
//!
//! Everything here is free of ESP-IDF types: API parsing, threshold checks,
//! clock math, the LED frame and dashboard drawing. The firmware crate
//! supplies the hardware behind the [`display::Panel`] and
//! [`leds::LedWriter`] traits.

pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod icons;
pub mod leds;
pub mod satellite;
pub mod station;
pub mod timer;
pub mod weather;

pub use config::StationConfig;
pub use error::FetchError;
