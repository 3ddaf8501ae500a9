use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use plotters::prelude::*;
use projectile_motion::core::window::chart_axis_spans;
use projectile_motion::core::ProjectileInMedium;

const SAMPLE_STEP_S: f64 = 0.05;
const DEMO_SPEED_MPS: f64 = 30.0;
const DEMO_ANGLE_DEG: f64 = 45.0;

fn output_path(args: &[String]) -> Result<PathBuf, String> {
    match args.len() {
        1 => Ok(PathBuf::from(format!(
            "img/drag-{}.png",
            chrono::Local::now().format("%Y-%m-%d")
        ))),
        2 => Ok(PathBuf::from(&args[1])),
        _ => Err("Too many arguments; expected at most one output path.".to_string()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let path = output_path(&args)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let projectile = ProjectileInMedium::new(DEMO_SPEED_MPS, DEMO_ANGLE_DEG)?;
    let ideal_arc = projectile.ideal.arc_points(SAMPLE_STEP_S)?;
    let real_arc = projectile.arc_points(SAMPLE_STEP_S)?;

    // The vacuum arc bounds both curves, so it sets the window.
    let (x_span, y_span) =
        chart_axis_spans(projectile.ideal.range_m, projectile.ideal.apex_height_m);

    let root = BitMapBackend::new(&path, (900, 540)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Effect of drag on projectile motion", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..x_span, 0.0..y_span)?;

    chart
        .configure_mesh()
        .x_desc("Distance (in m)")
        .y_desc("Height (in m)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(ideal_arc, &RED))?
        .label("Projectile without air resistance")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &RED));
    chart
        .draw_series(LineSeries::new(real_arc, &CYAN))?
        .label("Projectile with air resistance")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &CYAN));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    println!("Chart written to {}", path.display());

    Ok(())
}
