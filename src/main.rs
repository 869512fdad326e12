use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use parabolic_sim::core::plot::export_svg;
use parabolic_sim::core::{DisplayList, RenderLoop, RenderSettings, SimulationParameters};

const DEFAULT_CANVAS: (u32, u32) = (800, 500);

#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    params: Option<SimulationParameters>,
    animate: bool,
    svg: Option<PathBuf>,
    canvas: Option<(u32, u32)>,
}

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn parse_canvas(value: &str) -> Result<(u32, u32), String> {
    let parsed = value
        .split_once('x')
        .and_then(|(w, h)| Some((w.parse::<u32>().ok()?, h.parse::<u32>().ok()?)));
    match parsed {
        Some((w, h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(format!(
            "Invalid canvas size: '{value}'. Expected WIDTHxHEIGHT, e.g. 800x500."
        )),
    }
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn get_params_from_user() -> Result<SimulationParameters, String> {
    Ok(SimulationParameters {
        angle_deg: read_f64("Angle (degrees): ")?,
        speed_mps: read_f64("Velocity (m/s): ")?,
        gravity_mps2: read_f64("Gravity (m/s^2): ")?,
        height_m: read_f64("Height (m): ")?,
    })
}

fn params_from_positionals(values: &[&str]) -> Result<SimulationParameters, String> {
    match values {
        [angle, speed] => Ok(SimulationParameters::default()
            .with_angle(parse_f64(angle, "angle")?)
            .with_speed(parse_f64(speed, "velocity")?)),
        [angle, speed, gravity, height] => Ok(SimulationParameters {
            angle_deg: parse_f64(angle, "angle")?,
            speed_mps: parse_f64(speed, "velocity")?,
            gravity_mps2: parse_f64(gravity, "gravity")?,
            height_m: parse_f64(height, "height")?,
        }),
        _ => Err(
            "Expected 2 or 4 numbers: <angle_deg> <velocity_mps> [<gravity_mps2> <height_m>]."
                .to_string(),
        ),
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut positionals = Vec::new();

    let mut iter = args.iter().skip(1).peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--animate" => options.animate = true,
            "--svg" => {
                let path = iter.next_if(|next| next.ends_with(".svg")).map(PathBuf::from);
                options.svg = Some(path.unwrap_or_else(default_svg_path));
            }
            "--canvas" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--canvas needs a WIDTHxHEIGHT value.".to_string())?;
                options.canvas = Some(parse_canvas(value)?);
            }
            flag if flag.starts_with("--") => return Err(format!("Unknown option '{flag}'.")),
            value => positionals.push(value),
        }
    }

    if !positionals.is_empty() {
        options.params = Some(params_from_positionals(&positionals)?);
    }
    Ok(options)
}

fn default_svg_path() -> PathBuf {
    PathBuf::from(Local::now().format("trajectory-%Y%m%d-%H%M%S.svg").to_string())
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} [OPTIONS]");
    println!("  {program} [OPTIONS] <angle_deg> <velocity_mps> [<gravity_mps2> <height_m>]");
    println!();
    println!("Options:");
    println!("  --animate            play the launch headlessly and report the frame count");
    println!("  --svg [PATH.svg]     export the preview (default: timestamped file name)");
    println!("  --canvas WxH         canvas size in pixels (default: 800x500)");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 45 50");
    println!("  {program} --animate --svg 30 20 1.62 5");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let options = parse_args(&args)?;
    let params = match options.params {
        Some(params) => params,
        None => get_params_from_user()?,
    };
    let (width, height) = options.canvas.unwrap_or(DEFAULT_CANVAS);

    let mut render = RenderLoop::new(params, RenderSettings::default());
    let metrics = *render.trajectory().map_err(|e| e.to_string())?.metrics();
    let readouts = render.readouts();

    println!("\nRange: {}", readouts.range);
    println!("Max height: {}", readouts.max_height);
    println!("Time of flight: {}", readouts.flight_time);

    if options.animate {
        let mut canvas = DisplayList::new(f64::from(width), f64::from(height));
        let Ok(frames) = render.run_to_completion(&mut canvas);
        println!(
            "Animated {frames} frames at {:.2} s per frame (flight {:.4} s).",
            render.settings().time_step_s,
            metrics.flight_time_s
        );
    }

    if let Some(path) = options.svg {
        export_svg(&path, (width, height), &render).map_err(|e| e.to_string())?;
        println!("Preview written to {}", path.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{CliOptions, parse_args, parse_canvas};

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("parabolic_sim")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn two_numbers_keep_default_gravity_and_height() {
        let options = parse_args(&args(&["30", "20"])).expect("valid args");
        let params = options.params.expect("params given");

        assert_eq!(params.angle_deg, 30.0);
        assert_eq!(params.speed_mps, 20.0);
        assert_eq!(params.gravity_mps2, 9.8);
        assert_eq!(params.height_m, 0.0);
    }

    #[test]
    fn flags_mix_with_positionals() {
        let options =
            parse_args(&args(&["--animate", "45", "50", "1.62", "3", "--svg", "out.svg"]))
                .expect("valid args");

        assert!(options.animate);
        assert_eq!(options.svg, Some(PathBuf::from("out.svg")));
        assert_eq!(options.params.map(|p| p.gravity_mps2), Some(1.62));
    }

    #[test]
    fn bare_svg_flag_gets_timestamped_name() {
        let options = parse_args(&args(&["--svg", "45", "50"])).expect("valid args");
        let path = options.svg.expect("svg requested");

        assert!(path.to_string_lossy().starts_with("trajectory-"));
        assert!(options.params.is_some());
    }

    #[test]
    fn no_arguments_means_prompt() {
        assert_eq!(parse_args(&args(&[])), Ok(CliOptions::default()));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(&args(&["45"])).is_err());
        assert!(parse_args(&args(&["45", "fast"])).unwrap_err().contains("velocity"));
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_canvas("800by500").is_err());
        assert_eq!(parse_canvas("640x480"), Ok((640, 480)));
    }
}
