use std::ops::Range;

use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1240;
pub const INITIAL_WINDOW_HEIGHT: i32 = 560;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const CANVAS_X: f32 = 20.0;
pub const CANVAS_Y: f32 = 30.0;
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 500.0;

pub const PANEL_X: f32 = 850.0;
pub const PANEL_Y: f32 = 30.0;
pub const PANEL_WIDTH: f32 = 360.0;
pub const PANEL_HEIGHT: f32 = 290.0;
pub const READOUT_Y: f32 = 360.0;

pub const ANGLE_RANGE_DEG: Range<f32> = 0.0..90.0;
pub const SPEED_RANGE_MPS: Range<f32> = 1.0..100.0;
pub const GRAVITY_RANGE_MPS2: Range<f32> = 0.1..25.0;
pub const HEIGHT_RANGE_M: Range<f32> = 0.0..100.0;

pub const WINDOW_BG: Color = Color::new(0.08, 0.08, 0.12, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.88, 0.90, 0.94, 1.0);
pub const MUTED_TEXT_COLOR: Color = Color::new(0.55, 0.58, 0.64, 1.0);
