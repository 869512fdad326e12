use crate::core::ballistics::TrajectoryMetrics;
use crate::core::surface::ScreenPoint;

/// Pixels kept between the canvas edge and each axis.
pub const AXIS_MARGIN_PX: f64 = 50.0;
/// Extra metres of headroom above the apex.
pub const HEADROOM_M: f64 = 10.0;
/// Upper bound on pixels per metre, so tiny throws don't zoom into a blob.
pub const MAX_SCALE: f64 = 5.0;

/// Maps simulation metres onto a `width` x `height` pixel canvas with the
/// launch origin at the bottom-left axis corner and y pointing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    scale: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    pub fn fit(width: f64, height: f64, metrics: &TrajectoryMetrics, height_m: f64) -> Self {
        let inner_w = width - 2.0 * AXIS_MARGIN_PX;
        let inner_h = height - 2.0 * AXIS_MARGIN_PX;

        // A zero (or backwards) range puts no constraint on the x scale.
        let scale_x = if metrics.range_m > 0.0 {
            inner_w / metrics.range_m
        } else {
            f64::INFINITY
        };
        let scale_y = inner_h / (metrics.max_height_m.max(height_m) + HEADROOM_M);

        let scale = scale_x.min(scale_y).min(MAX_SCALE).max(0.0);
        Self::new(width, height, scale)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn ground_y(&self) -> f64 {
        self.height - AXIS_MARGIN_PX
    }

    pub fn origin(&self) -> ScreenPoint {
        ScreenPoint::new(AXIS_MARGIN_PX, self.ground_y())
    }

    pub fn to_screen(&self, x_m: f64, y_m: f64) -> ScreenPoint {
        ScreenPoint::new(
            x_m * self.scale + AXIS_MARGIN_PX,
            self.ground_y() - y_m * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::ballistics::{SimulationParameters, compute_metrics};

    fn fit(params: SimulationParameters) -> Viewport {
        let metrics = compute_metrics(&params).expect("valid launch");
        Viewport::fit(800.0, 500.0, &metrics, params.height_m)
    }

    #[test]
    fn long_throw_is_limited_by_range() {
        let viewport = fit(SimulationParameters::default());
        let metrics = compute_metrics(&SimulationParameters::default()).expect("valid launch");

        assert_relative_eq!(viewport.scale(), 700.0 / metrics.range_m);
        let landing = viewport.to_screen(metrics.range_m, 0.0);
        assert_relative_eq!(landing.x, 750.0, epsilon = 1e-9);
        assert_relative_eq!(landing.y, 450.0);
    }

    #[test]
    fn tall_throw_is_limited_by_height() {
        let params = SimulationParameters::default().with_angle(90.0);
        let metrics = compute_metrics(&params).expect("valid launch");
        let viewport = fit(params);

        assert_relative_eq!(viewport.scale(), 400.0 / (metrics.max_height_m + HEADROOM_M));
    }

    #[test]
    fn small_throw_is_capped() {
        let viewport = fit(SimulationParameters::default().with_speed(5.0));
        assert_eq!(viewport.scale(), MAX_SCALE);

        let dropped = fit(SimulationParameters::default().with_speed(0.0));
        assert_eq!(dropped.scale(), MAX_SCALE);
    }

    #[test]
    fn y_axis_points_up() {
        let viewport = Viewport::new(800.0, 500.0, 2.0);

        assert_eq!(viewport.origin(), ScreenPoint::new(50.0, 450.0));
        assert_eq!(viewport.to_screen(10.0, 20.0), ScreenPoint::new(70.0, 410.0));
        assert_eq!(viewport.to_screen(0.0, -5.0).y, 460.0);
    }
}
