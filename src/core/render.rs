//! Frame-by-frame drawing of a trajectory, static or animated.
//!
//! The loop never schedules work on its own. `launch` hands the host a
//! [`FrameTicket`]; the host redeems it with [`RenderLoop::frame`] once per
//! display refresh and gets either the next ticket or a stop. A ticket cannot
//! be cloned, so at most one frame is ever pending. `reset` bumps the loop's
//! generation, which turns any ticket still held by the host into a no-op.

use log::{debug, info, warn};

use crate::core::ballistics::{
    DEFAULT_SAMPLE_COUNT, SimulationParameters, Trajectory, TrajectoryPoint,
};
use crate::core::error::SimError;
use crate::core::readout::Readouts;
use crate::core::surface::{DrawSurface, ScreenPoint, Stroke, palette};
use crate::core::window::{AXIS_MARGIN_PX, Viewport};

/// Simulated seconds added per drawn frame, independent of wall-clock time.
pub const DEFAULT_TIME_STEP_S: f64 = 0.02;
pub const GRID_SPACING_PX: f64 = 50.0;

const MARKER_RADIUS_PX: f64 = 6.0;
const PROJECTILE_RADIUS_PX: f64 = 5.0;
const INDICATOR_FONT_SIZE: f64 = 18.0;

const GRID_STROKE: Stroke = Stroke::new(palette::GRID, 1.0);
const AXIS_STROKE: Stroke = Stroke::new(palette::AXIS, 2.0);
const TRAJECTORY_STROKE: Stroke = Stroke::new(palette::TRAJECTORY, 2.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    pub sample_count: usize,
    pub time_step_s: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            time_step_s: DEFAULT_TIME_STEP_S,
        }
    }
}

impl RenderSettings {
    fn sanitized(self) -> Self {
        let time_step_s = if self.time_step_s.is_finite() && self.time_step_s > 0.0 {
            self.time_step_s
        } else {
            DEFAULT_TIME_STEP_S
        };
        Self {
            sample_count: self.sample_count.max(1),
            time_step_s,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    running: bool,
    elapsed_s: f64,
}

impl AnimationState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }
}

/// Permission to draw exactly one animation frame.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping the ticket stops the animation"]
pub struct FrameTicket {
    generation: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Flight still in progress; redeem this ticket on the next refresh.
    Next(FrameTicket),
    /// This frame reached the landing time and the animation went idle.
    Finished,
    /// The ticket was stale. Nothing was drawn.
    Cancelled,
}

pub struct RenderLoop {
    settings: RenderSettings,
    params: SimulationParameters,
    trajectory: Result<Trajectory, SimError>,
    animation: AnimationState,
    generation: u64,
}

impl RenderLoop {
    pub fn new(params: SimulationParameters, settings: RenderSettings) -> Self {
        let settings = settings.sanitized();
        let trajectory = compute_logged(params, settings.sample_count);
        Self {
            settings,
            params,
            trajectory,
            animation: AnimationState::default(),
            generation: 0,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn trajectory(&self) -> Result<&Trajectory, &SimError> {
        self.trajectory.as_ref()
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn readouts(&self) -> Readouts {
        Readouts::from_result(self.trajectory.as_ref().map(|t| t.metrics()))
    }

    /// Swaps in a new parameter snapshot and recomputes metrics and samples
    /// together. An idle loop redraws its preview; a running one keeps
    /// animating against the new trajectory, or stops if it became invalid.
    pub fn set_parameters<S: DrawSurface>(
        &mut self,
        params: SimulationParameters,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        self.params = params;
        self.trajectory = compute_logged(params, self.settings.sample_count);

        if self.animation.running {
            if self.trajectory.is_ok() {
                return Ok(());
            }
            self.cancel_pending();
        }
        self.draw_static(surface)
    }

    /// Starts a fresh animation from t = 0. Returns `None` when one is
    /// already running or the configuration cannot be drawn.
    pub fn launch(&mut self) -> Option<FrameTicket> {
        if self.animation.running {
            debug!("launch ignored: animation already running");
            return None;
        }
        if let Err(err) = &self.trajectory {
            debug!("launch ignored: {err}");
            return None;
        }

        self.animation = AnimationState {
            running: true,
            elapsed_s: 0.0,
        };
        info!("launch: {:?}", self.params);
        Some(FrameTicket {
            generation: self.generation,
        })
    }

    /// Cancels any pending frame, returns to idle and redraws the preview.
    pub fn reset<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if self.animation.running {
            info!("reset at t = {:.2} s", self.animation.elapsed_s);
        }
        self.cancel_pending();
        self.draw_static(surface)
    }

    /// Draws one animation frame and advances the simulated clock.
    pub fn frame<S: DrawSurface>(
        &mut self,
        ticket: FrameTicket,
        surface: &mut S,
    ) -> Result<FrameOutcome, S::Error> {
        if ticket.generation != self.generation || !self.animation.running {
            return Ok(FrameOutcome::Cancelled);
        }
        let Ok(trajectory) = &self.trajectory else {
            return Ok(FrameOutcome::Cancelled);
        };

        let viewport = fit_viewport(trajectory, surface);
        draw_backdrop(surface)?;

        let revealed = trajectory.revealed(self.animation.elapsed_s);
        draw_path(surface, &viewport, revealed)?;
        if let Some(current) = revealed.last() {
            surface.disc(
                viewport.to_screen(current.x, current.y),
                PROJECTILE_RADIUS_PX,
                palette::PROJECTILE,
            )?;
        }
        draw_launch_marker(surface, &viewport, trajectory)?;

        self.animation.elapsed_s += self.settings.time_step_s;

        if self.animation.elapsed_s >= trajectory.metrics().flight_time_s {
            self.animation.running = false;
            draw_landing_marker(surface, &viewport, trajectory)?;
            info!(
                "flight complete: {:.2} s simulated",
                trajectory.metrics().flight_time_s
            );
            return Ok(FrameOutcome::Finished);
        }

        Ok(FrameOutcome::Next(ticket))
    }

    /// Launches and redeems tickets back to back until the flight lands.
    /// Returns the number of frames drawn.
    pub fn run_to_completion<S: DrawSurface>(&mut self, surface: &mut S) -> Result<usize, S::Error> {
        let mut frames = 0;
        let mut pending = self.launch();
        while let Some(ticket) = pending.take() {
            match self.frame(ticket, surface)? {
                FrameOutcome::Next(next) => {
                    frames += 1;
                    pending = Some(next);
                }
                FrameOutcome::Finished => frames += 1,
                FrameOutcome::Cancelled => {}
            }
        }
        Ok(frames)
    }

    /// Grid, axes, the full flight path and both end markers. An invalid
    /// configuration gets grid and axes plus a warning line instead.
    pub fn draw_static<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        draw_backdrop(surface)?;

        match &self.trajectory {
            Ok(trajectory) => {
                let viewport = fit_viewport(trajectory, surface);
                draw_path(surface, &viewport, trajectory.points())?;
                draw_launch_marker(surface, &viewport, trajectory)?;
                draw_landing_marker(surface, &viewport, trajectory)
            }
            Err(err) => surface.label(
                &err.to_string(),
                ScreenPoint::new(AXIS_MARGIN_PX + 10.0, AXIS_MARGIN_PX),
                INDICATOR_FONT_SIZE,
                palette::WARNING,
            ),
        }
    }

    fn cancel_pending(&mut self) {
        self.animation = AnimationState::default();
        self.generation = self.generation.wrapping_add(1);
    }
}

fn compute_logged(
    params: SimulationParameters,
    sample_count: usize,
) -> Result<Trajectory, SimError> {
    let trajectory = Trajectory::compute(params, sample_count);
    if let Err(err) = &trajectory {
        warn!("{err}");
    }
    trajectory
}

fn fit_viewport<S: DrawSurface>(trajectory: &Trajectory, surface: &S) -> Viewport {
    let (width, height) = surface.size();
    Viewport::fit(
        width,
        height,
        trajectory.metrics(),
        trajectory.params().height_m,
    )
}

fn draw_backdrop<S: DrawSurface>(surface: &mut S) -> Result<(), S::Error> {
    surface.clear()?;
    draw_grid(surface)?;
    draw_axes(surface)
}

fn draw_grid<S: DrawSurface>(surface: &mut S) -> Result<(), S::Error> {
    let (width, height) = surface.size();

    let columns = (width / GRID_SPACING_PX).floor().max(0.0) as usize;
    for i in 0..=columns {
        let x = i as f64 * GRID_SPACING_PX;
        surface.line(
            ScreenPoint::new(x, 0.0),
            ScreenPoint::new(x, height),
            GRID_STROKE,
        )?;
    }

    let rows = (height / GRID_SPACING_PX).floor().max(0.0) as usize;
    for i in 0..=rows {
        let y = i as f64 * GRID_SPACING_PX;
        surface.line(
            ScreenPoint::new(0.0, y),
            ScreenPoint::new(width, y),
            GRID_STROKE,
        )?;
    }
    Ok(())
}

fn draw_axes<S: DrawSurface>(surface: &mut S) -> Result<(), S::Error> {
    let (width, height) = surface.size();
    let ground_y = height - AXIS_MARGIN_PX;
    surface.line(
        ScreenPoint::new(0.0, ground_y),
        ScreenPoint::new(width, ground_y),
        AXIS_STROKE,
    )?;
    surface.line(
        ScreenPoint::new(AXIS_MARGIN_PX, 0.0),
        ScreenPoint::new(AXIS_MARGIN_PX, height),
        AXIS_STROKE,
    )
}

fn draw_path<S: DrawSurface>(
    surface: &mut S,
    viewport: &Viewport,
    points: &[TrajectoryPoint],
) -> Result<(), S::Error> {
    if points.len() < 2 {
        return Ok(());
    }
    let screen: Vec<ScreenPoint> = points
        .iter()
        .map(|p| viewport.to_screen(p.x, p.y))
        .collect();
    surface.polyline(&screen, TRAJECTORY_STROKE)
}

fn draw_launch_marker<S: DrawSurface>(
    surface: &mut S,
    viewport: &Viewport,
    trajectory: &Trajectory,
) -> Result<(), S::Error> {
    surface.disc(
        viewport.to_screen(0.0, trajectory.params().height_m),
        MARKER_RADIUS_PX,
        palette::LAUNCH_MARKER,
    )
}

fn draw_landing_marker<S: DrawSurface>(
    surface: &mut S,
    viewport: &Viewport,
    trajectory: &Trajectory,
) -> Result<(), S::Error> {
    match trajectory.last_point() {
        Some(last) => surface.disc(
            viewport.to_screen(last.x, last.y),
            MARKER_RADIUS_PX,
            palette::LANDING_MARKER,
        ),
        None => Ok(()),
    }
}
