//! Layout and drawing for the 128x64 monochrome dashboard.
//!
//! Each value owns a fixed rectangle. Updating a value clears its
//! rectangle and redraws it; nothing else on screen is touched.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    text::{Baseline, Text},
};
use profont::PROFONT_7_POINT;

use crate::clock::format_clock;
use crate::weather::sky_icon;

pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

const FONT: &MonoFont<'static> = &PROFONT_7_POINT;

// ── Regions ─────────────────────────────────────────────────────────

pub const TIME_REGION: Rectangle = Rectangle::new(Point::new(85, 8), Size::new(40, 10));
pub const TEMP_REGION: Rectangle = Rectangle::new(Point::new(0, 20), Size::new(80, 10));
pub const RAIN_REGION: Rectangle = Rectangle::new(Point::new(0, 35), Size::new(80, 10));
/// Stops short of the icon so a satellite redraw never clips the sun's rays.
pub const SAT_REGION: Rectangle = Rectangle::new(Point::new(0, 50), Size::new(86, 10));
pub const ICON_REGION: Rectangle = Rectangle::new(Point::new(88, 28), Size::new(40, 36));
pub const ICON_CENTER: Point = Point::new(105, 45);

/// A monochrome draw target that can push its buffer to the glass.
pub trait Panel: DrawTarget<Color = BinaryColor> {
    fn present(&mut self) -> Result<(), Self::Error>;
}

pub struct Dashboard<P> {
    panel: P,
}

impl<P: Panel> Dashboard<P> {
    pub fn new(panel: P) -> Self {
        Self { panel }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn clear_all(&mut self) -> Result<(), P::Error> {
        self.panel.clear(BinaryColor::Off)
    }

    pub fn clear_region(&mut self, region: Rectangle) -> Result<(), P::Error> {
        self.panel.fill_solid(&region, BinaryColor::Off)
    }

    fn write_in(&mut self, region: Rectangle, text: &str) -> Result<(), P::Error> {
        self.clear_region(region)?;
        let style = MonoTextStyle::new(FONT, BinaryColor::On);
        // Clip so a long string can never spill into a neighbouring region.
        let mut clipped = self.panel.clipped(&region);
        Text::with_baseline(text, region.top_left, style, Baseline::Top).draw(&mut clipped)?;
        Ok(())
    }

    pub fn draw_time(&mut self, hour: u32, minute: u32) -> Result<(), P::Error> {
        self.write_in(TIME_REGION, &format_clock(hour, minute))
    }

    pub fn draw_temperature(&mut self, temperature_f: f32) -> Result<(), P::Error> {
        self.write_in(TEMP_REGION, &format!("Temp: {} f", temperature_f as i32))
    }

    /// Rain text plus the matching sun or rain-cloud icon.
    pub fn draw_rain(&mut self, rain_chance: u8) -> Result<(), P::Error> {
        self.write_in(RAIN_REGION, &format!("Rain: {}%", rain_chance))?;
        self.clear_region(ICON_REGION)?;
        sky_icon(rain_chance).draw(&mut self.panel, ICON_CENTER)
    }

    pub fn draw_satellite(&mut self, line: &str) -> Result<(), P::Error> {
        self.write_in(SAT_REGION, line)
    }

    /// Transient status in the satellite row, e.g. while acquiring.
    pub fn draw_status(&mut self, text: &str) -> Result<(), P::Error> {
        self.write_in(SAT_REGION, text)
    }

    pub fn present(&mut self) -> Result<(), P::Error> {
        self.panel.present()
    }
}
