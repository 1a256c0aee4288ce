use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
};

use crate::weather::SkyIcon;

const SUN_RADIUS: i32 = 10;
/// Rays reach one and a half radii out from the center.
const SUN_RAY_LENGTH: f32 = SUN_RADIUS as f32 * 1.5;
const SUN_RAY_STEP_DEG: usize = 30;

const RAIN_DROP_LEN: i32 = 3;
const RAIN_DROP_SPACING: i32 = 5;
const RAIN_DROP_COUNT: i32 = 4;

fn filled_disc<D>(target: &mut D, center: Point, radius: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Circle::with_center(center, (2 * radius + 1) as u32)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)
}

fn line<D>(target: &mut D, from: Point, to: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(from, to)
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(target)
}

impl SkyIcon {
    /// Draw the icon around `center`.
    pub fn draw<D>(self, target: &mut D, center: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        match self {
            SkyIcon::Sun => draw_sun(target, center),
            SkyIcon::Rain => draw_rain_cloud(target, center),
        }
    }
}

fn draw_sun<D>(target: &mut D, center: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    filled_disc(target, center, SUN_RADIUS)?;
    for deg in (0..360).step_by(SUN_RAY_STEP_DEG) {
        let rad = (deg as f32).to_radians();
        let tip = Point::new(
            (SUN_RAY_LENGTH * rad.cos()) as i32,
            (SUN_RAY_LENGTH * rad.sin()) as i32,
        );
        line(target, center, center + tip)?;
    }
    Ok(())
}

fn draw_rain_cloud<D>(target: &mut D, center: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    filled_disc(target, center, 5)?;
    filled_disc(target, center + Point::new(8, -2), 7)?;
    filled_disc(target, center + Point::new(16, 0), 5)?;

    let mut start = center + Point::new(-3, 10);
    for _ in 0..RAIN_DROP_COUNT {
        let end = start + Point::new(RAIN_DROP_LEN, -RAIN_DROP_LEN);
        line(target, start, end)?;
        start.x += RAIN_DROP_SPACING;
    }
    Ok(())
}
