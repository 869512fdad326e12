use log::debug;
use parabolic_sim::core::{
    DisplayList, FrameOutcome, FrameTicket, RenderLoop, RenderSettings, SimulationParameters,
};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Slider positions. macroquad sliders work in f32.
#[derive(Clone, Copy)]
pub(crate) struct SliderInputs {
    pub(crate) angle_deg: f32,
    pub(crate) speed_mps: f32,
    pub(crate) gravity_mps2: f32,
    pub(crate) height_m: f32,
}

impl SliderInputs {
    fn from_params(params: &SimulationParameters) -> Self {
        Self {
            angle_deg: params.angle_deg as f32,
            speed_mps: params.speed_mps as f32,
            gravity_mps2: params.gravity_mps2 as f32,
            height_m: params.height_m as f32,
        }
    }

    pub(crate) fn to_params(self) -> SimulationParameters {
        SimulationParameters {
            angle_deg: slider_value(self.angle_deg),
            speed_mps: slider_value(self.speed_mps),
            gravity_mps2: slider_value(self.gravity_mps2),
            height_m: slider_value(self.height_m),
        }
    }
}

// Snap to hundredths so 9.8f32 reads back as 9.8 rather than 9.800000190734863.
fn slider_value(value: f32) -> f64 {
    (f64::from(value) * 100.0).round() / 100.0
}

pub(crate) struct AppRuntime {
    pub(crate) inputs: SliderInputs,
    pub(crate) render: RenderLoop,
    pub(crate) canvas: DisplayList,
    pending: Option<FrameTicket>,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let params = SimulationParameters::default();
        let render = RenderLoop::new(params, RenderSettings::default());
        let mut canvas = DisplayList::new(f64::from(CANVAS_WIDTH), f64::from(CANVAS_HEIGHT));
        let Ok(()) = render.draw_static(&mut canvas);

        Self {
            inputs: SliderInputs::from_params(&params),
            render,
            canvas,
            pending: None,
        }
    }

    /// Pushes slider changes into the render loop as one new snapshot.
    pub(crate) fn apply_inputs(&mut self) {
        let params = self.inputs.to_params();
        if params == *self.render.params() {
            return;
        }
        debug!("inputs changed: {params:?}");
        let Ok(()) = self.render.set_parameters(params, &mut self.canvas);
    }

    pub(crate) fn launch(&mut self) {
        if let Some(ticket) = self.render.launch() {
            self.pending = Some(ticket);
        }
    }

    pub(crate) fn reset(&mut self) {
        self.pending = None;
        let Ok(()) = self.render.reset(&mut self.canvas);
    }

    /// Draws the next animation frame into the canvas, if one is pending.
    pub(crate) fn step_animation(&mut self) {
        let Some(ticket) = self.pending.take() else {
            return;
        };
        let Ok(outcome) = self.render.frame(ticket, &mut self.canvas);
        if let FrameOutcome::Next(next) = outcome {
            self.pending = Some(next);
        }
    }
}
