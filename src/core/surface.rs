use std::convert::Infallible;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

pub mod palette {
    use super::Rgb;

    pub const BACKGROUND: Rgb = Rgb::from_hex(0x1a1a2e);
    pub const GRID: Rgb = Rgb::from_hex(0x333333);
    pub const AXIS: Rgb = Rgb::from_hex(0x666666);
    pub const TRAJECTORY: Rgb = Rgb::from_hex(0xffffff);
    pub const LAUNCH_MARKER: Rgb = Rgb::from_hex(0x00ff00);
    pub const LANDING_MARKER: Rgb = Rgb::from_hex(0xff6b6b);
    pub const PROJECTILE: Rgb = Rgb::from_hex(0xffff00);
    pub const WARNING: Rgb = Rgb::from_hex(0xffb347);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgb, width: f64) -> Self {
        Self { color, width }
    }
}

/// Anything the render loop can draw on. Coordinates are pixels with the
/// origin in the top-left corner and y growing downwards.
pub trait DrawSurface {
    type Error: std::error::Error;

    fn size(&self) -> (f64, f64);

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: Stroke)
    -> Result<(), Self::Error>;

    fn polyline(&mut self, points: &[ScreenPoint], stroke: Stroke) -> Result<(), Self::Error>;

    /// Filled circle.
    fn disc(&mut self, center: ScreenPoint, radius: f64, color: Rgb) -> Result<(), Self::Error>;

    fn label(
        &mut self,
        text: &str,
        at: ScreenPoint,
        font_size: f64,
        color: Rgb,
    ) -> Result<(), Self::Error>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<ScreenPoint>,
        stroke: Stroke,
    },
    Disc {
        center: ScreenPoint,
        radius: f64,
        color: Rgb,
    },
    Label {
        text: String,
        at: ScreenPoint,
        font_size: f64,
        color: Rgb,
    },
}

/// In-memory canvas. Holds the commands drawn since the last `clear`, the
/// way a real canvas keeps its pixels until it is wiped, and can paint them
/// again onto another surface.
#[derive(Clone, Debug)]
pub struct DisplayList {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_blank(&self) -> bool {
        self.commands.iter().all(|c| *c == DrawCommand::Clear)
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[ScreenPoint], Stroke)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, stroke } => Some((points.as_slice(), *stroke)),
            _ => None,
        })
    }

    pub fn discs(&self) -> impl Iterator<Item = (ScreenPoint, f64, Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Disc {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn replay<S: DrawSurface>(&self, target: &mut S) -> Result<(), S::Error> {
        for command in &self.commands {
            match command {
                DrawCommand::Clear => target.clear()?,
                DrawCommand::Line { from, to, stroke } => target.line(*from, *to, *stroke)?,
                DrawCommand::Polyline { points, stroke } => target.polyline(points, *stroke)?,
                DrawCommand::Disc {
                    center,
                    radius,
                    color,
                } => target.disc(*center, *radius, *color)?,
                DrawCommand::Label {
                    text,
                    at,
                    font_size,
                    color,
                } => target.label(text, *at, *font_size, *color)?,
            }
        }
        Ok(())
    }
}

impl DrawSurface for DisplayList {
    type Error = Infallible;

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> Result<(), Infallible> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: Stroke) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Line { from, to, stroke });
        Ok(())
    }

    fn polyline(&mut self, points: &[ScreenPoint], stroke: Stroke) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
        Ok(())
    }

    fn disc(&mut self, center: ScreenPoint, radius: f64, color: Rgb) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn label(
        &mut self,
        text: &str,
        at: ScreenPoint,
        font_size: f64,
        color: Rgb,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Label {
            text: text.to_string(),
            at,
            font_size,
            color,
        });
        Ok(())
    }
}
