use crate::core::ballistics::{SimulationParameters, TrajectoryMetrics};
use crate::core::error::SimError;

const UNAVAILABLE: &str = "--";

pub fn format_with_unit(value: f64, unit: &str) -> String {
    format!("{value:.2} {unit}")
}

/// The three numbers shown next to the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readouts {
    pub range: String,
    pub max_height: String,
    pub flight_time: String,
}

impl Readouts {
    pub fn from_metrics(metrics: &TrajectoryMetrics) -> Self {
        Self {
            range: format_with_unit(metrics.range_m, "m"),
            max_height: format_with_unit(metrics.max_height_m, "m"),
            flight_time: format_with_unit(metrics.flight_time_s, "s"),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            range: UNAVAILABLE.to_string(),
            max_height: UNAVAILABLE.to_string(),
            flight_time: UNAVAILABLE.to_string(),
        }
    }

    pub fn from_result(metrics: Result<&TrajectoryMetrics, &SimError>) -> Self {
        match metrics {
            Ok(metrics) => Self::from_metrics(metrics),
            Err(_) => Self::unavailable(),
        }
    }
}

/// Slider captions, e.g. `45°` or `9.8 m/s²`.
pub fn input_labels(params: &SimulationParameters) -> [String; 4] {
    [
        format!("{}°", params.angle_deg),
        format!("{} m/s", params.speed_mps),
        format!("{} m/s²", params.gravity_mps2),
        format!("{} m", params.height_m),
    ]
}
