use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use parabolic_sim::core::readout::input_labels;

use crate::constants::{
    ANGLE_RANGE_DEG, GRAVITY_RANGE_MPS2, HEIGHT_RANGE_M, PANEL_HEIGHT, PANEL_WIDTH, PANEL_X,
    PANEL_Y, SPEED_RANGE_MPS,
};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let [angle, speed, gravity, height] = input_labels(&state.inputs.to_params());

    let mut actions = FrameActions::default();
    widgets::Window::new(
        hash!(),
        vec2(PANEL_X, PANEL_Y),
        vec2(PANEL_WIDTH, PANEL_HEIGHT),
    )
    .label("Launch Controls")
    .movable(false)
    .ui(&mut *root_ui(), |ui| {
        ui.label(None, &format!("Angle: {angle}"));
        ui.slider(
            hash!(),
            "Angle (deg)",
            ANGLE_RANGE_DEG,
            &mut state.inputs.angle_deg,
        );
        ui.label(None, &format!("Velocity: {speed}"));
        ui.slider(
            hash!(),
            "Velocity (m/s)",
            SPEED_RANGE_MPS,
            &mut state.inputs.speed_mps,
        );
        ui.label(None, &format!("Gravity: {gravity}"));
        ui.slider(
            hash!(),
            "Gravity (m/s^2)",
            GRAVITY_RANGE_MPS2,
            &mut state.inputs.gravity_mps2,
        );
        ui.label(None, &format!("Height: {height}"));
        ui.slider(
            hash!(),
            "Height (m)",
            HEIGHT_RANGE_M,
            &mut state.inputs.height_m,
        );
        ui.separator();
        if ui.button(None, "Launch (Space)") {
            actions.launch = true;
        }
        if ui.button(None, "Reset (R)") {
            actions.reset = true;
        }
    });

    actions
}
