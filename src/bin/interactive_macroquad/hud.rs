use macroquad::prelude::*;

use crate::constants::{MUTED_TEXT_COLOR, PANEL_X, READOUT_Y, TEXT_COLOR};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, font: Option<&Font>) {
    let readouts = state.render.readouts();
    let rows = [
        ("Range", readouts.range),
        ("Max height", readouts.max_height),
        ("Time of flight", readouts.flight_time),
    ];

    for (i, (caption, value)) in rows.iter().enumerate() {
        let y = READOUT_Y + i as f32 * 34.0;
        draw_ui_text(caption, PANEL_X, y, 22, MUTED_TEXT_COLOR, font);
        draw_ui_text(value, PANEL_X + 170.0, y, 24, TEXT_COLOR, font);
    }

    let animation = state.render.animation();
    let status = if animation.is_running() {
        format!("Flying: t = {:.2} s", animation.elapsed_s())
    } else {
        "Idle".to_string()
    };
    draw_ui_text(
        &status,
        PANEL_X,
        READOUT_Y + 3.0 * 34.0 + 10.0,
        20,
        MUTED_TEXT_COLOR,
        font,
    );
}
