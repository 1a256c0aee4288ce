//! The 30-pixel strip, modelled as a frame of colors split into fixed
//! pixel ranges.

pub const LED_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `brightness / 255`.
    pub fn scaled(self, brightness: u8) -> Color {
        let s = |c: u8| ((c as u16 * brightness as u16) / 255) as u8;
        Color::new(s(self.r), s(self.g), s(self.b))
    }

    /// Wire order for WS2812 pixels.
    pub fn grb(self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }
}

// ── Palette ─────────────────────────────────────────────────────────

pub const SOFT_WHITE: Color = Color::new(255, 200, 50);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const OFF: Color = Color::new(0, 0, 0);

/// Inclusive span of pixels with a fixed meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRange {
    pub start: usize,
    pub stop: usize,
}

impl PixelRange {
    pub const fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    pub fn len(&self) -> usize {
        self.stop + 1 - self.start
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, pixel: usize) -> bool {
        (self.start..=self.stop).contains(&pixel)
    }
}

pub const RAIN_RANGE: PixelRange = PixelRange::new(0, 3);
pub const LIGHT_RANGE: PixelRange = PixelRange::new(4, 25);
pub const HEAT_RANGE: PixelRange = PixelRange::new(26, 29);
pub const ALL_PIXELS: PixelRange = PixelRange::new(0, LED_COUNT - 1);
/// Lit at boot before the first forecast arrives.
pub const STARTUP_RANGE: PixelRange = PixelRange::new(12, 16);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedFrame {
    pixels: [Color; LED_COUNT],
}

impl Default for LedFrame {
    fn default() -> Self {
        Self {
            pixels: [OFF; LED_COUNT],
        }
    }
}

impl LedFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixels(&self) -> &[Color; LED_COUNT] {
        &self.pixels
    }

    /// Color every pixel in `range`; pixels past the strip are ignored.
    pub fn fill(&mut self, range: PixelRange, color: Color) {
        let stop = range.stop.min(LED_COUNT - 1);
        for px in &mut self.pixels[range.start.min(LED_COUNT)..=stop] {
            *px = color;
        }
    }

    pub fn clear(&mut self) {
        self.fill(ALL_PIXELS, OFF);
    }

    /// Paint the heat and rain indicators and the ambient light between them.
    pub fn apply_conditions(&mut self, hot: bool, rainy: bool) {
        self.fill(HEAT_RANGE, if hot { RED } else { SOFT_WHITE });
        self.fill(RAIN_RANGE, if rainy { BLUE } else { SOFT_WHITE });
        self.fill(LIGHT_RANGE, SOFT_WHITE);
    }

    /// Brightness-scaled GRB bytes, pixel 0 first.
    pub fn grb_bytes(&self, brightness: u8) -> [u8; LED_COUNT * 3] {
        let mut out = [0u8; LED_COUNT * 3];
        for (chunk, px) in out.chunks_exact_mut(3).zip(self.pixels.iter()) {
            chunk.copy_from_slice(&px.scaled(brightness).grb());
        }
        out
    }
}

/// Hardware sink for a frame.
pub trait LedWriter {
    type Error;

    fn write(&mut self, frame: &LedFrame, brightness: u8) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_is(frame: &LedFrame, range: PixelRange, color: Color) -> bool {
        frame.pixels()[range.start..=range.stop]
            .iter()
            .all(|&c| c == color)
    }

    #[test]
    fn ranges_cover_the_strip_without_overlap() {
        assert_eq!(RAIN_RANGE.len() + LIGHT_RANGE.len() + HEAT_RANGE.len(), LED_COUNT);
        for px in 0..LED_COUNT {
            let owners = [RAIN_RANGE, LIGHT_RANGE, HEAT_RANGE]
                .iter()
                .filter(|r| r.contains(px))
                .count();
            assert_eq!(owners, 1, "pixel {}", px);
        }
    }

    #[test]
    fn hot_turns_heat_range_red() {
        let mut frame = LedFrame::new();
        frame.apply_conditions(true, false);
        assert!(range_is(&frame, HEAT_RANGE, RED));
        assert!(range_is(&frame, RAIN_RANGE, SOFT_WHITE));
        assert!(range_is(&frame, LIGHT_RANGE, SOFT_WHITE));
    }

    #[test]
    fn rain_turns_rain_range_blue() {
        let mut frame = LedFrame::new();
        frame.apply_conditions(false, true);
        assert!(range_is(&frame, RAIN_RANGE, BLUE));
        assert!(range_is(&frame, HEAT_RANGE, SOFT_WHITE));
    }

    #[test]
    fn mild_dry_hour_is_all_soft_white() {
        let mut frame = LedFrame::new();
        frame.apply_conditions(true, true);
        frame.apply_conditions(false, false);
        assert!(range_is(&frame, ALL_PIXELS, SOFT_WHITE));
    }

    #[test]
    fn clear_turns_everything_off() {
        let mut frame = LedFrame::new();
        frame.fill(STARTUP_RANGE, SOFT_WHITE);
        frame.clear();
        assert_eq!(frame, LedFrame::new());
    }

    #[test]
    fn fill_clamps_to_strip_length() {
        let mut frame = LedFrame::new();
        frame.fill(PixelRange::new(28, 40), BLUE);
        assert_eq!(frame.pixels()[29], BLUE);
        assert_eq!(frame.pixels()[27], OFF);
    }

    #[test]
    fn brightness_scales_channels() {
        assert_eq!(SOFT_WHITE.scaled(255), SOFT_WHITE);
        assert_eq!(SOFT_WHITE.scaled(0), OFF);
        assert_eq!(SOFT_WHITE.scaled(80), Color::new(80, 62, 15));
    }

    #[test]
    fn bytes_are_grb_ordered() {
        let mut frame = LedFrame::new();
        frame.fill(PixelRange::new(0, 0), RED);
        frame.fill(PixelRange::new(1, 1), BLUE);
        let bytes = frame.grb_bytes(255);
        assert_eq!(&bytes[0..3], &[0, 255, 0]);
        assert_eq!(&bytes[3..6], &[0, 0, 255]);
        assert_eq!(&bytes[6..9], &[0, 0, 0]);
    }
}
