//! plotters-backed canvas, used to export the static preview as SVG.

use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontDesc;

use crate::core::error::SimError;
use crate::core::render::RenderLoop;
use crate::core::surface::{DrawSurface, Rgb, ScreenPoint, Stroke, palette};

pub struct PlottersSurface<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
    width: f64,
    height: f64,
}

impl<DB: DrawingBackend> PlottersSurface<DB> {
    pub fn new(area: DrawingArea<DB, Shift>) -> Self {
        let (width, height) = area.dim_in_pixel();
        Self {
            area,
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    pub fn present(self) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        self.area.present()
    }
}

fn backend_coord(p: ScreenPoint) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn shape(stroke: Stroke) -> ShapeStyle {
    rgb(stroke.color).stroke_width(stroke.width.round().max(1.0) as u32)
}

impl<DB: DrawingBackend> DrawSurface for PlottersSurface<DB> {
    type Error = DrawingAreaErrorKind<DB::ErrorType>;

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.area.fill(&rgb(palette::BACKGROUND))
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: Stroke) -> Result<(), Self::Error> {
        self.area.draw(&PathElement::new(
            vec![backend_coord(from), backend_coord(to)],
            shape(stroke),
        ))
    }

    fn polyline(&mut self, points: &[ScreenPoint], stroke: Stroke) -> Result<(), Self::Error> {
        let coords: Vec<(i32, i32)> = points.iter().copied().map(backend_coord).collect();
        self.area.draw(&PathElement::new(coords, shape(stroke)))
    }

    fn disc(&mut self, center: ScreenPoint, radius: f64, color: Rgb) -> Result<(), Self::Error> {
        self.area.draw(&Circle::new(
            backend_coord(center),
            radius.round() as i32,
            rgb(color).filled(),
        ))
    }

    fn label(
        &mut self,
        text: &str,
        at: ScreenPoint,
        font_size: f64,
        color: Rgb,
    ) -> Result<(), Self::Error> {
        let style = FontDesc::from(("sans-serif", font_size)).color(&rgb(color));
        self.area
            .draw(&Text::new(text.to_string(), backend_coord(at), style))
    }
}

fn export_error(err: impl std::fmt::Display) -> SimError {
    SimError::Export(err.to_string())
}

/// Writes the loop's static preview to an SVG file.
pub fn export_svg(path: &Path, size: (u32, u32), render: &RenderLoop) -> Result<(), SimError> {
    let area = SVGBackend::new(path, size).into_drawing_area();
    let mut surface = PlottersSurface::new(area);
    render.draw_static(&mut surface).map_err(export_error)?;
    surface.present().map_err(export_error)?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Same as [`export_svg`] but returns the document instead of writing it.
pub fn render_svg(size: (u32, u32), render: &RenderLoop) -> Result<String, SimError> {
    let mut document = String::new();
    {
        let area = SVGBackend::with_string(&mut document, size).into_drawing_area();
        let mut surface = PlottersSurface::new(area);
        render.draw_static(&mut surface).map_err(export_error)?;
        surface.present().map_err(export_error)?;
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::SimulationParameters;
    use crate::core::render::RenderSettings;

    #[test]
    fn preview_renders_to_svg() {
        let render = RenderLoop::new(SimulationParameters::default(), RenderSettings::default());
        let svg = render_svg((800, 500), &render).expect("svg export");

        assert!(svg.contains("<svg"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn invalid_preview_still_exports() {
        let render = RenderLoop::new(
            SimulationParameters::default().with_gravity(-1.0),
            RenderSettings::default(),
        );
        let svg = render_svg((800, 500), &render).expect("svg export");

        assert!(svg.contains("<svg"));
        assert!(!svg.contains("<circle"));
    }
}
