use approx::assert_abs_diff_eq;
use parabolic_sim::core::render::DEFAULT_TIME_STEP_S;
use parabolic_sim::core::surface::palette;
use parabolic_sim::core::{
    DisplayList, DrawSurface, FrameOutcome, RenderLoop, RenderSettings, SimulationParameters,
};

fn blank_canvas() -> DisplayList {
    DisplayList::new(800.0, 500.0)
}

#[test]
fn vertical_shot_animates_in_place() {
    let params = SimulationParameters {
        angle_deg: 90.0,
        speed_mps: 20.0,
        gravity_mps2: 9.8,
        height_m: 0.0,
    };
    let mut render = RenderLoop::new(params, RenderSettings::default());
    let metrics = *render.trajectory().expect("valid launch").metrics();

    assert_abs_diff_eq!(metrics.range_m, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(metrics.flight_time_s, 4.0816, epsilon = 5e-4);
    assert_abs_diff_eq!(metrics.max_height_m, 20.41, epsilon = 5e-3);

    let mut canvas = blank_canvas();
    let frames = render.run_to_completion(&mut canvas).unwrap();
    assert_eq!(frames, (metrics.flight_time_s / DEFAULT_TIME_STEP_S).ceil() as usize);

    let (path, _) = canvas.polylines().next().expect("path drawn");
    assert!(path.iter().all(|p| (p.x - 50.0).abs() < 1e-6));
}

#[test]
fn relaunch_after_reset_starts_clean() {
    let mut render = RenderLoop::new(SimulationParameters::default(), RenderSettings::default());
    let mut canvas = blank_canvas();

    let mut ticket = render.launch().expect("idle");
    for _ in 0..50 {
        ticket = match render.frame(ticket, &mut canvas).unwrap() {
            FrameOutcome::Next(next) => next,
            other => panic!("unexpected {other:?}"),
        };
    }
    assert!(render.animation().elapsed_s() > 0.9);

    render.reset(&mut canvas).unwrap();
    assert_eq!(render.frame(ticket, &mut canvas).unwrap(), FrameOutcome::Cancelled);

    let frames = render.run_to_completion(&mut canvas).unwrap();
    let flight = render.trajectory().unwrap().metrics().flight_time_s;
    assert_eq!(frames, (flight / DEFAULT_TIME_STEP_S).ceil() as usize);
    assert!(!render.animation().is_running());
}

#[test]
fn finished_canvas_replays_identically() {
    let mut render = RenderLoop::new(
        SimulationParameters::default().with_height(20.0).with_gravity(1.62),
        RenderSettings::default(),
    );
    let mut canvas = blank_canvas();
    render.run_to_completion(&mut canvas).unwrap();

    let mut mirror = blank_canvas();
    mirror.clear().unwrap();
    canvas.replay(&mut mirror).unwrap();
    assert_eq!(mirror.commands(), canvas.commands());

    let landing = canvas.discs().last().expect("landing marker");
    assert_eq!(landing.2, palette::LANDING_MARKER);
}

#[test]
fn extreme_inputs_stay_finite() {
    let cases = [
        SimulationParameters::default().with_speed(1.0e6),
        SimulationParameters::default().with_speed(1.0e-6),
        SimulationParameters::default().with_gravity(1.0e-6),
        SimulationParameters::default().with_height(1.0e5).with_speed(0.0),
        SimulationParameters::default().with_angle(-45.0).with_height(50.0),
    ];

    for params in cases {
        let render = RenderLoop::new(params, RenderSettings::default());
        let mut canvas = blank_canvas();
        render.draw_static(&mut canvas).unwrap();

        let (path, _) = canvas.polylines().next().expect("path drawn");
        assert!(
            path.iter().all(|p| p.x.is_finite() && p.y.is_finite()),
            "non-finite coordinates for {params:?}"
        );
    }
}

#[test]
fn settings_control_sampling_and_step() {
    let settings = RenderSettings {
        sample_count: 10,
        time_step_s: 0.5,
    };
    let mut render = RenderLoop::new(SimulationParameters::default(), settings);
    assert_eq!(render.trajectory().unwrap().points().len(), 11);

    let frames = render.run_to_completion(&mut blank_canvas()).unwrap();
    let flight = render.trajectory().unwrap().metrics().flight_time_s;
    assert_eq!(frames, (flight / 0.5).ceil() as usize);
}
