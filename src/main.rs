use std::env;
use std::io::{self, Write};

use projectile_motion::core::{MediumParams, ProjectileInMedium};

#[derive(Clone, Copy, Debug)]
struct Inputs {
    speed_mps: f64,
    angle_deg: f64,
    medium: MediumParams,
}

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
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

fn get_inputs_from_user() -> Result<Inputs, String> {
    Ok(Inputs {
        speed_mps: read_f64("Velocity (m/s): ")?,
        angle_deg: read_f64("Angle (degrees): ")?,
        medium: MediumParams::default(),
    })
}

fn get_inputs_from_args(args: &[String]) -> Result<Inputs, String> {
    if args.len() != 3 && args.len() != 5 {
        return Err(
            "Expected <velocity_mps> <angle_deg>, optionally followed by <mass_kg> <diameter_m>."
                .to_string(),
        );
    }

    let mut medium = MediumParams::default();
    if args.len() == 5 {
        medium.mass_kg = parse_f64(&args[3], "mass")?;
        medium.diameter_m = parse_f64(&args[4], "diameter")?;
    }

    Ok(Inputs {
        speed_mps: parse_f64(&args[1], "velocity")?,
        angle_deg: parse_f64(&args[2], "angle")?,
        medium,
    })
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <velocity_mps> <angle_deg>");
    println!("  {program} <velocity_mps> <angle_deg> <mass_kg> <diameter_m>");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 30 45");
    println!("  {program} 30 45 0.45 0.22");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let inputs = if args.len() == 1 {
        get_inputs_from_user()?
    } else {
        get_inputs_from_args(&args)?
    };

    let projectile =
        ProjectileInMedium::with_params(inputs.speed_mps, inputs.angle_deg, inputs.medium)
            .map_err(|e| e.to_string())?;

    println!("\nIn a vacuum:");
    println!("  Range: {:.4} m", projectile.ideal.range_m);
    println!("  Apex height: {:.4} m", projectile.ideal.apex_height_m);
    println!("  Flight time: {:.4} s", projectile.ideal.flight_time_s);

    println!("\nWith quadratic drag:");
    println!("  Effective acceleration: {:.4} m/s^2", projectile.accel_mps2);
    println!("  Range: {:.4} m", projectile.range_m);
    println!("  Apex height: {:.4} m", projectile.apex_height_m);
    println!("  Flight time: {:.4} s", projectile.flight_time_s);
    println!("  Drag force at launch: {:.4} N", projectile.drag_force_n());

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
