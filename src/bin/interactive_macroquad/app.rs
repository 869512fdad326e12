use log::warn;
use macroquad::prelude::*;

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, CANVAS_X, CANVAS_Y, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    MSAA_SAMPLES, UI_FONT_PATH, WINDOW_BG,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::MacroquadSurface;
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        clear_background(WINDOW_BG);

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        state.apply_inputs();
        if actions.reset {
            state.reset();
        }
        if actions.launch {
            state.launch();
        }
        // One simulated step per display refresh.
        state.step_animation();

        let mut surface = MacroquadSurface::new(
            vec2(CANVAS_X, CANVAS_Y),
            vec2(CANVAS_WIDTH, CANVAS_HEIGHT),
            ui_font.as_ref(),
        );
        let Ok(()) = state.canvas.replay(&mut surface);

        draw_hud(&state, ui_font.as_ref());

        next_frame().await;
    }
}
