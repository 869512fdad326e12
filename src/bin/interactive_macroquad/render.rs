use std::convert::Infallible;

use macroquad::prelude::*;
use parabolic_sim::core::surface::palette;
use parabolic_sim::core::{DrawSurface, Rgb, ScreenPoint, Stroke};

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn to_color(color: Rgb) -> Color {
    Color::from_rgba(color.0, color.1, color.2, 255)
}

/// Paints canvas commands into a fixed rectangle of the macroquad window.
pub(crate) struct MacroquadSurface<'a> {
    origin: Vec2,
    size: Vec2,
    font: Option<&'a Font>,
}

impl<'a> MacroquadSurface<'a> {
    pub(crate) fn new(origin: Vec2, size: Vec2, font: Option<&'a Font>) -> Self {
        Self { origin, size, font }
    }

    fn to_window(&self, p: ScreenPoint) -> Vec2 {
        self.origin + vec2(p.x as f32, p.y as f32)
    }
}

impl DrawSurface for MacroquadSurface<'_> {
    type Error = Infallible;

    fn size(&self) -> (f64, f64) {
        (f64::from(self.size.x), f64::from(self.size.y))
    }

    fn clear(&mut self) -> Result<(), Infallible> {
        draw_rectangle(
            self.origin.x,
            self.origin.y,
            self.size.x,
            self.size.y,
            to_color(palette::BACKGROUND),
        );
        Ok(())
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: Stroke) -> Result<(), Infallible> {
        let a = self.to_window(from);
        let b = self.to_window(to);
        draw_line(a.x, a.y, b.x, b.y, stroke.width as f32, to_color(stroke.color));
        Ok(())
    }

    fn polyline(&mut self, points: &[ScreenPoint], stroke: Stroke) -> Result<(), Infallible> {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], stroke)?;
        }
        Ok(())
    }

    fn disc(&mut self, center: ScreenPoint, radius: f64, color: Rgb) -> Result<(), Infallible> {
        let c = self.to_window(center);
        draw_circle(c.x, c.y, radius as f32, to_color(color));
        Ok(())
    }

    fn label(
        &mut self,
        text: &str,
        at: ScreenPoint,
        font_size: f64,
        color: Rgb,
    ) -> Result<(), Infallible> {
        let p = self.to_window(at);
        draw_ui_text(text, p.x, p.y, font_size as u16, to_color(color), self.font);
        Ok(())
    }
}
