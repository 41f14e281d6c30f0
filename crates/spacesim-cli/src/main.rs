use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spacesim_core::constants::NUM_FRAMES;
use spacesim_sim::{
    generate_frames, validate_trajectory, ChaseCamera, FrameClock, FrameGenerator, FrameState,
    OrbitParameters, RunConfig,
};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spacesim")]
#[command(about = "Circular-orbit pose generator for synthetic spacecraft imagery")]
struct Cli {
    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Run configuration; flags override values from --config
#[derive(Args)]
struct RunArgs {
    /// JSON run configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Orbit radius (meters)
    #[arg(long, global = true)]
    radius: Option<f64>,

    /// Gravitational parameter of the central body (m³/s²)
    #[arg(long, global = true)]
    mu: Option<f64>,

    /// Time step per frame (seconds)
    #[arg(long, global = true)]
    dt: Option<f64>,

    /// Number of frames to generate
    #[arg(long, global = true)]
    frames: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show orbit parameters and derived quantities
    Info,

    /// Print the per-frame log to stdout
    Frames {
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Include chase camera pose columns
        #[arg(long, default_value = "false")]
        camera: bool,
    },

    /// Generate a run and check it against the circular-orbit invariants
    Validate {
        /// Allowed error (radius error is relative to the orbit radius)
        #[arg(long, default_value = "1e-9")]
        tolerance: f64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// Frame log row with the chase camera pose appended
#[derive(Serialize)]
struct CameraRow {
    frame: u64,
    time: f64,
    x: f64,
    y: f64,
    z: f64,
    cam_x: f64,
    cam_y: f64,
    cam_z: f64,
    pitch: f64,
    roll: f64,
    yaw: f64,
    /// Unit view axis of the camera
    view_x: f64,
    view_y: f64,
    view_z: f64,
}

impl CameraRow {
    fn new(state: &FrameState, camera: &ChaseCamera) -> Self {
        let pose = state.camera_pose(camera);
        let view = pose.view_direction();
        Self {
            frame: state.frame_index,
            time: state.time,
            x: state.position.x,
            y: state.position.y,
            z: state.position.z,
            cam_x: pose.location.x,
            cam_y: pose.location.y,
            cam_z: pose.location.z,
            pitch: pose.orientation.pitch,
            roll: pose.orientation.roll,
            yaw: pose.orientation.yaw,
            view_x: view.x,
            view_y: view.y,
            view_z: view.z,
        }
    }
}

fn resolve_config(args: &RunArgs) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    if args.radius.is_some() || args.mu.is_some() || args.dt.is_some() {
        let base = config.orbit;
        config.orbit = OrbitParameters::new(
            args.radius.unwrap_or(base.radius()),
            args.mu.unwrap_or(base.gravitational_parameter()),
            args.dt.unwrap_or(base.time_step()),
        )?;
    }

    if let Some(n) = args.frames {
        config.num_frames = n;
    }

    Ok(config)
}

fn write_table<W, I>(
    mut out: W,
    frames: I,
    clock: &FrameClock,
    camera: Option<&ChaseCamera>,
) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = FrameState>,
{
    write!(
        out,
        "{:>6} {:>10} {:>15} {:>15} {:>10}",
        "Frame", "Time (s)", "X (m)", "Y (m)", "Z (m)"
    )?;
    if camera.is_some() {
        write!(
            out,
            " {:>15} {:>15} {:>10} {:>10}",
            "Cam X (m)", "Cam Y (m)", "Cam Z (m)", "Yaw (°)"
        )?;
    }
    if clock.start().is_some() {
        write!(out, "  Epoch")?;
    }
    writeln!(out)?;

    for f in frames {
        write!(
            out,
            "{:>6} {:>10.3} {:>15.6} {:>15.6} {:>10.3}",
            f.frame_index, f.time, f.position.x, f.position.y, f.position.z
        )?;
        if let Some(cam) = camera {
            let pose = f.camera_pose(cam);
            write!(
                out,
                " {:>15.6} {:>15.6} {:>10.3} {:>10.3}",
                pose.location.x,
                pose.location.y,
                pose.location.z,
                pose.orientation.yaw.to_degrees()
            )?;
        }
        if let Some(epoch) = clock.epoch_at(f.frame_index) {
            write!(out, "  {}", epoch)?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

fn write_csv<W, I>(out: W, frames: I, camera: Option<&ChaseCamera>) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = FrameState>,
{
    let mut w = csv::Writer::from_writer(out);
    for f in frames {
        match camera {
            Some(cam) => w.serialize(CameraRow::new(&f, cam))?,
            None => w.serialize(f.record())?,
        }
    }
    w.flush()?;
    Ok(())
}

/// Writes a JSON array one row per line, without buffering the run
fn write_json<W, I>(mut out: W, frames: I, camera: Option<&ChaseCamera>) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = FrameState>,
{
    write!(out, "[")?;
    for (i, f) in frames.into_iter().enumerate() {
        write!(out, "{}\n  ", if i == 0 { "" } else { "," })?;
        match camera {
            Some(cam) => serde_json::to_writer(&mut out, &CameraRow::new(&f, cam))?,
            None => serde_json::to_writer(&mut out, &f.record())?,
        }
    }
    writeln!(out, "\n]")?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    // Logs go to stderr so the frame log on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli.run)?;
    let orbit = config.orbit();
    let clock = config.clock()?;

    match cli.command {
        Commands::Info => {
            let p = orbit.params();
            println!("Circular orbit:");
            println!("  Radius:            {:.3} m", p.radius());
            println!("  μ:                 {:.6e} m³/s²", p.gravitational_parameter());
            println!("  Time step:         {:.3} s", p.time_step());
            println!("  Mean motion:       {:.9} rad/s", orbit.mean_motion());
            println!(
                "  Step per frame:    {:.9} rad ({:.4}°)",
                orbit.angular_step(),
                orbit.angular_step().to_degrees()
            );
            println!("  Orbital speed:     {:.3} m/s", orbit.orbital_speed());
            println!("  Period:            {:.3} s", orbit.period());
            println!("  Frames per orbit:  {:.2}", orbit.frames_per_orbit());

            println!("\nChase camera:");
            println!("  Behind:            {:.3} m", config.camera.offset_behind());
            println!("  Above:             {:.3} m", config.camera.offset_above());

            println!("\nRun:");
            println!("  Frames:            {} (seed run: {})", config.num_frames, NUM_FRAMES);
            println!("  Duration:          {}", clock.run_duration(config.num_frames));
            if let Some(start) = clock.start() {
                println!("  Start epoch:       {}", start);
            }
        }

        Commands::Frames { format, camera } => {
            tracing::info!("Generating {} frames", config.num_frames);
            let frames = FrameGenerator::new(orbit, config.num_frames);
            let camera = camera.then_some(&config.camera);
            let out = std::io::stdout().lock();

            match format {
                OutputFormat::Table => write_table(out, frames, &clock, camera)?,
                OutputFormat::Csv => write_csv(out, frames, camera)?,
                OutputFormat::Json => write_json(out, frames, camera)?,
            }
        }

        Commands::Validate { tolerance } => {
            let frames = generate_frames(orbit, config.num_frames);
            let report = validate_trajectory(&orbit, &frames);

            println!("Validated {} frames:", report.num_frames);
            println!("  Max radius error:  {:.3e} m", report.max_radius_error);
            println!("  Max |z|:           {:.3e} m", report.max_abs_z);
            println!("  Max step error:    {:.3e} rad", report.max_step_error);
            println!("  Max time error:    {:.3e} s", report.max_time_error);
            println!("  Indices contiguous: {}", report.indices_contiguous);
            println!("  Theta increasing:   {}", report.theta_strictly_increasing);

            if !report.passes(&orbit, tolerance) {
                anyhow::bail!("Trajectory failed validation at tolerance {:e}", tolerance);
            }
            tracing::info!("Trajectory passed validation at tolerance {:e}", tolerance);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacesim_sim::CircularOrbit;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("spacesim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&["frames", "--radius", "2000", "--frames", "7"]);
        let config = resolve_config(&cli.run).unwrap();
        assert_eq!(config.orbit.radius(), 2000.0);
        assert_eq!(config.orbit.gravitational_parameter(), 398_600.0);
        assert_eq!(config.num_frames, 7);
    }

    #[test]
    fn test_invalid_flag_rejected() {
        let cli = parse(&["info", "--dt", "0"]);
        assert!(resolve_config(&cli.run).is_err());
    }

    #[test]
    fn test_csv_header_matches_log_columns() {
        let mut buf = Vec::new();
        write_csv(&mut buf, FrameGenerator::new(CircularOrbit::default(), 3), None).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("frame,time,x,y,z"));
        assert_eq!(lines.next(), Some("0,0.0,1000.0,0.0,0.0"));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_csv_with_camera() {
        let frames = FrameGenerator::new(CircularOrbit::default(), 1);
        let mut buf = Vec::new();
        write_csv(&mut buf, frames, Some(&ChaseCamera::default())).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(
            "frame,time,x,y,z,cam_x,cam_y,cam_z,pitch,roll,yaw,view_x,view_y,view_z\n"
        ));
        assert!(text.contains("1000.0,-10.0,2.0"));
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        write_json(&mut buf, FrameGenerator::new(CircularOrbit::default(), 4), None).unwrap();

        let rows: Vec<serde_json::Value> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3]["frame"], 3);
        assert_eq!(rows[3]["time"], 3.0);
    }

    #[test]
    fn test_json_with_camera_view_axis() {
        let frames = FrameGenerator::new(CircularOrbit::default(), 2);
        let mut buf = Vec::new();
        write_json(&mut buf, frames, Some(&ChaseCamera::default())).unwrap();

        let rows: Vec<serde_json::Value> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["cam_y"], -10.0);
        let view_y = rows[0]["view_y"].as_f64().unwrap();
        assert!((view_y + 1.0).abs() < 1e-12, "{view_y}");
    }

    #[test]
    fn test_empty_run_outputs() {
        let mut json = Vec::new();
        write_json(&mut json, FrameGenerator::new(CircularOrbit::default(), 0), None).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_slice(&json).unwrap();
        assert!(rows.is_empty());

        let mut csv = Vec::new();
        write_csv(&mut csv, FrameGenerator::new(CircularOrbit::default(), 0), None).unwrap();
        assert!(csv.is_empty());
    }

    #[test]
    fn test_table_streams_rows() {
        let clock = FrameClock::new(1.0);
        let mut buf = Vec::new();
        let frames = FrameGenerator::new(CircularOrbit::default(), 5);
        write_table(&mut buf, frames, &clock, Some(&ChaseCamera::default())).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Cam X (m)"));
        assert!(!lines[0].contains("Epoch"));
        assert!(lines[1].trim_start().starts_with("0 "));
    }

    #[test]
    fn test_output_consumes_frames_lazily() {
        // A run far too large to collect is only pulled as far as it is written
        let frames = FrameGenerator::new(CircularOrbit::default(), u64::MAX).take(3);
        let mut buf = Vec::new();
        write_csv(&mut buf, frames, None).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 4);
    }
}
