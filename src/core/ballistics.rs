//! Closed-form projectile kinematics: no drag, flat ground at y = 0.

use log::{debug, warn};

use crate::core::error::{InvalidReason, SimError};

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// One snapshot of the four launch inputs. Replaced as a whole whenever an
/// input changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub angle_deg: f64,
    pub speed_mps: f64,
    pub gravity_mps2: f64,
    pub height_m: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            angle_deg: 45.0,
            speed_mps: 50.0,
            gravity_mps2: EARTH_GRAVITY_MPS2,
            height_m: 0.0,
        }
    }
}

impl SimulationParameters {
    pub fn with_angle(self, angle_deg: f64) -> Self {
        Self { angle_deg, ..self }
    }

    pub fn with_speed(self, speed_mps: f64) -> Self {
        Self { speed_mps, ..self }
    }

    pub fn with_gravity(self, gravity_mps2: f64) -> Self {
        Self {
            gravity_mps2,
            ..self
        }
    }

    pub fn with_height(self, height_m: f64) -> Self {
        Self { height_m, ..self }
    }

    fn validate(&self) -> Result<(), SimError> {
        if !self.angle_deg.is_finite()
            || !self.speed_mps.is_finite()
            || !self.gravity_mps2.is_finite()
            || !self.height_m.is_finite()
        {
            return Err(SimError::invalid(InvalidReason::NonFiniteInput));
        }
        if self.gravity_mps2 <= 0.0 {
            return Err(SimError::invalid(InvalidReason::NonPositiveGravity(
                self.gravity_mps2,
            )));
        }
        if self.speed_mps < 0.0 {
            return Err(SimError::invalid(InvalidReason::NegativeSpeed(
                self.speed_mps,
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryMetrics {
    pub horizontal_velocity: f64,
    pub vertical_velocity: f64,
    pub flight_time_s: f64,
    pub range_m: f64,
    pub max_height_m: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub t: f64,
}

pub fn velocity_components(params: &SimulationParameters) -> (f64, f64) {
    let theta = params.angle_deg.to_radians();
    let vx = params.speed_mps * theta.cos();
    let vy = params.speed_mps * theta.sin();
    (vx, vy)
}

pub fn compute_metrics(params: &SimulationParameters) -> Result<TrajectoryMetrics, SimError> {
    params.validate()?;

    let g = params.gravity_mps2;
    let (vx, vy) = velocity_components(params);

    let disc = vy * vy + 2.0 * g * params.height_m;
    if disc < 0.0 {
        warn!("rejecting launch that never reaches the ground: {params:?}");
        return Err(SimError::invalid(InvalidReason::NegativeDiscriminant(disc)));
    }

    // Positive root of h + vy*t - g*t^2/2 = 0.
    let t_land = (vy + disc.sqrt()) / g;
    if t_land < 0.0 {
        return Err(SimError::invalid(InvalidReason::NegativeFlightTime(t_land)));
    }

    // Apex formula is kept as-is for descending launches too.
    let max_height = params.height_m + (vy * vy) / (2.0 * g);

    Ok(TrajectoryMetrics {
        horizontal_velocity: vx,
        vertical_velocity: vy,
        flight_time_s: t_land,
        range_m: vx * t_land,
        max_height_m: max_height,
    })
}

pub fn position_at(
    params: &SimulationParameters,
    metrics: &TrajectoryMetrics,
    time_s: f64,
) -> (f64, f64) {
    let x = metrics.horizontal_velocity * time_s;
    let y = params.height_m + (metrics.vertical_velocity * time_s)
        - (0.5 * params.gravity_mps2 * time_s * time_s);
    (x, y)
}

/// Evenly spaced samples over `[0, flight_time_s]`, `sample_count + 1` of them.
/// The last sample lands exactly on the flight time.
pub fn sample_points(
    params: &SimulationParameters,
    metrics: &TrajectoryMetrics,
    sample_count: usize,
) -> Vec<TrajectoryPoint> {
    let sample_count = sample_count.max(1);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 / sample_count as f64) * metrics.flight_time_s;
            let (x, y) = position_at(params, metrics, t);
            TrajectoryPoint { x, y, t }
        })
        .collect()
}

/// Metrics and samples computed together from one parameter snapshot, so the
/// two can never drift apart.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    params: SimulationParameters,
    metrics: TrajectoryMetrics,
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn compute(params: SimulationParameters, sample_count: usize) -> Result<Self, SimError> {
        let metrics = compute_metrics(&params)?;
        let points = sample_points(&params, &metrics, sample_count);
        debug!(
            "trajectory: range {:.3} m, apex {:.3} m, flight {:.3} s, {} samples",
            metrics.range_m,
            metrics.max_height_m,
            metrics.flight_time_s,
            points.len()
        );
        Ok(Self {
            params,
            metrics,
            points,
        })
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn metrics(&self) -> &TrajectoryMetrics {
        &self.metrics
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Samples whose time stamp has been reached by `elapsed_s`.
    pub fn revealed(&self, elapsed_s: f64) -> &[TrajectoryPoint] {
        let count = self.points.partition_point(|p| p.t <= elapsed_s);
        &self.points[..count]
    }

    pub fn last_point(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn params(angle_deg: f64, speed_mps: f64, gravity_mps2: f64, height_m: f64) -> SimulationParameters {
        SimulationParameters {
            angle_deg,
            speed_mps,
            gravity_mps2,
            height_m,
        }
    }

    #[test]
    fn computes_known_metrics_for_forty_five_degrees() {
        let metrics = compute_metrics(&params(45.0, 50.0, 9.8, 0.0)).expect("valid launch");

        assert_close(metrics.flight_time_s, 7.2154, 0.0005);
        assert_close(metrics.range_m, 255.10, 0.01);
        assert_close(metrics.max_height_m, 63.78, 0.01);
    }

    #[test]
    fn vertical_launch_lands_where_it_started() {
        let metrics = compute_metrics(&params(90.0, 20.0, 9.8, 0.0)).expect("valid launch");

        assert_close(metrics.range_m, 0.0, 1e-9);
        assert_close(metrics.flight_time_s, 4.0816, 0.0005);
        assert_close(metrics.max_height_m, 20.41, 0.01);
    }

    #[test]
    fn zero_speed_drops_straight_down() {
        for angle in [0.0, 30.0, 60.0, 90.0] {
            let metrics = compute_metrics(&params(angle, 0.0, 9.8, 2.0)).expect("valid launch");
            assert_relative_eq!(
                metrics.flight_time_s,
                (2.0f64 * 2.0 / 9.8).sqrt(),
                epsilon = 1e-12
            );
            assert_close(metrics.range_m, 0.0, 1e-12);
        }

        let grounded = compute_metrics(&params(30.0, 0.0, 9.8, 0.0)).expect("valid launch");
        assert_eq!(grounded.flight_time_s, 0.0);
        assert_eq!(grounded.range_m, 0.0);
    }

    #[test]
    fn raised_launch_flies_longer() {
        let flat = compute_metrics(&params(30.0, 20.0, 9.8, 0.0)).expect("valid launch");
        let raised = compute_metrics(&params(30.0, 20.0, 9.8, 15.0)).expect("valid launch");

        assert!(raised.flight_time_s > flat.flight_time_s);
        assert!(raised.range_m > flat.range_m);
        assert_close(raised.max_height_m - flat.max_height_m, 15.0, 1e-9);
    }

    #[test]
    fn metrics_are_bit_identical_across_calls() {
        let p = params(37.5, 42.0, 3.71, 12.0);
        assert_eq!(compute_metrics(&p), compute_metrics(&p));
    }

    #[test]
    fn descending_launch_keeps_apex_formula() {
        let metrics = compute_metrics(&params(-20.0, 10.0, 9.8, 30.0)).expect("valid launch");
        let vy = metrics.vertical_velocity;

        assert!(vy < 0.0);
        assert_relative_eq!(metrics.max_height_m, 30.0 + vy * vy / (2.0 * 9.8));
    }

    #[test]
    fn rejects_zero_and_negative_gravity() {
        for g in [0.0, -9.8] {
            let err = compute_metrics(&params(45.0, 10.0, g, 0.0)).expect_err("must fail");
            assert_eq!(
                err,
                SimError::invalid(InvalidReason::NonPositiveGravity(g))
            );
        }
    }

    #[test]
    fn rejects_negative_discriminant() {
        let err = compute_metrics(&params(0.0, 1.0, 9.8, -10.0)).expect_err("must fail");

        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("no real landing time"));
    }

    #[test]
    fn rejects_non_finite_and_negative_speed() {
        let nan = compute_metrics(&params(f64::NAN, 10.0, 9.8, 0.0)).expect_err("must fail");
        assert_eq!(nan, SimError::invalid(InvalidReason::NonFiniteInput));

        let negative = compute_metrics(&params(45.0, -1.0, 9.8, 0.0)).expect_err("must fail");
        assert_eq!(
            negative,
            SimError::invalid(InvalidReason::NegativeSpeed(-1.0))
        );
    }

    #[test]
    fn samples_cover_the_whole_flight() {
        let trajectory =
            Trajectory::compute(params(45.0, 50.0, 9.8, 0.0), DEFAULT_SAMPLE_COUNT).expect("valid");
        let points = trajectory.points();

        assert_eq!(points.len(), 101);
        assert_eq!(points[0].t, 0.0);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[0].y, 0.0);
        assert_eq!(points[100].t, trajectory.metrics().flight_time_s);
        assert!(points.windows(2).all(|w| w[0].t < w[1].t));

        let last = points[100];
        assert_close(last.x, trajectory.metrics().range_m, 1e-9);
        assert_close(last.y, 0.0, 1e-9);
    }

    #[test]
    fn sampling_is_restartable() {
        let p = params(60.0, 25.0, 1.62, 4.0);
        let metrics = compute_metrics(&p).expect("valid");

        assert_eq!(sample_points(&p, &metrics, 100), sample_points(&p, &metrics, 100));
        assert_eq!(sample_points(&p, &metrics, 0).len(), 2);
    }

    #[test]
    fn revealed_stops_at_elapsed_time() {
        let trajectory =
            Trajectory::compute(params(45.0, 50.0, 9.8, 0.0), DEFAULT_SAMPLE_COUNT).expect("valid");
        let flight = trajectory.metrics().flight_time_s;

        assert_eq!(trajectory.revealed(0.0).len(), 1);
        assert_eq!(trajectory.revealed(flight).len(), 101);
        assert!(trajectory.revealed(flight / 2.0).iter().all(|p| p.t <= flight / 2.0));
    }
}
