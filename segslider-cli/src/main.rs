//! SegSlider CLI — headless slider layouts and drag replays.
//!
//! Commands:
//! - `layout` — print segments, handle offsets and marker offsets for a seed pair
//! - `drag` — apply one drag to a seeded slider and print the result
//! - `replay` — replay a TOML drag script, printing every notification

mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use segslider_core::{
    ContainerMetrics, Handle, PointChange, RecordingObserver, SegmentedSlider, SliderConfig,
    SliderFile, SliderLayout, TrackGeometry,
};

use crate::script::DragScript;

#[derive(Parser)]
#[command(
    name = "segslider",
    about = "SegSlider CLI — green/amber/red segmented slider geometry"
)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    /// Print JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the layout for a pair of points.
    Layout {
        #[command(flatten)]
        setup: SetupArgs,
    },
    /// Drag one handle to a pixel offset.
    Drag {
        /// Handle to drag.
        #[arg(long, value_parser = parse_handle)]
        handle: Handle,

        /// Target left-edge offset of the handle, in pixels.
        #[arg(long, allow_hyphen_values = true)]
        offset: f64,

        #[command(flatten)]
        setup: SetupArgs,
    },
    /// Replay a TOML drag script.
    Replay {
        /// Path to the script.
        #[arg(long)]
        script: PathBuf,

        #[command(flatten)]
        setup: SetupArgs,
    },
}

/// Seeds and track geometry shared by every command.
#[derive(Args, Debug, Clone)]
struct SetupArgs {
    /// TOML config with `[slider]` seeds and an optional `[track]` table.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Green seed point (0..=100).
    #[arg(long)]
    green: Option<f64>,

    /// Amber seed point (0..=100).
    #[arg(long)]
    amber: Option<f64>,

    /// Container width in pixels. Defaults to 200.
    #[arg(long)]
    width: Option<f64>,

    /// Left padding in pixels. Defaults to 0.
    #[arg(long)]
    padding_left: Option<f64>,

    /// Right padding in pixels. Defaults to 0.
    #[arg(long)]
    padding_right: Option<f64>,

    /// Number of point markers. Defaults to 11.
    #[arg(long)]
    markers: Option<usize>,

    /// Handle width in pixels. Defaults to 10.
    #[arg(long)]
    handle_width: Option<f64>,
}

impl SetupArgs {
    /// Config file first, then flags on top.
    fn resolve(&self) -> Result<(ContainerMetrics, SliderConfig)> {
        let file = match &self.config {
            Some(path) => SliderFile::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SliderFile::default(),
        };

        let base = file.track.unwrap_or_default();
        let metrics = ContainerMetrics {
            width: self.width.unwrap_or(base.width),
            padding_left: self.padding_left.unwrap_or(base.padding_left),
            padding_right: self.padding_right.unwrap_or(base.padding_right),
            marker_count: self.markers.unwrap_or(base.marker_count),
            handle_width: self.handle_width.unwrap_or(base.handle_width),
        };
        let seeds = file.slider.with_overrides(self.green, self.amber);
        Ok((metrics, seeds))
    }

    /// Build a slider with a recorder attached and run the seed notification.
    fn build(&self) -> Result<(SegmentedSlider, RecordingObserver)> {
        let (metrics, seeds) = self.resolve()?;
        debug!(?metrics, ?seeds, "building slider");
        let geometry = TrackGeometry::from_container(&metrics)?;
        let recorder = RecordingObserver::new();
        let slider = SegmentedSlider::with_observer(geometry, &seeds, recorder.clone())?;
        Ok((slider, recorder))
    }
}

fn parse_handle(s: &str) -> Result<Handle, String> {
    match s.to_ascii_lowercase().as_str() {
        "green" | "g" => Ok(Handle::Green),
        "amber" | "a" => Ok(Handle::Amber),
        other => Err(format!("unknown handle '{other}' (expected green or amber)")),
    }
}

#[derive(Debug, Serialize)]
struct Report {
    green: f64,
    amber: f64,
    geometry: TrackGeometry,
    layout: SliderLayout,
    markers: Vec<f64>,
    notifications: Vec<(f64, f64)>,
    clamped_steps: Vec<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let report = match cli.command {
        Commands::Layout { setup } => run_layout(&setup)?,
        Commands::Drag {
            handle,
            offset,
            setup,
        } => run_drag(&setup, handle, offset)?,
        Commands::Replay { script, setup } => run_replay(&setup, &script)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn run_layout(setup: &SetupArgs) -> Result<Report> {
    let (slider, recorder) = setup.build()?;
    Ok(report(&slider, &recorder, &[]))
}

fn run_drag(setup: &SetupArgs, handle: Handle, offset: f64) -> Result<Report> {
    let (mut slider, recorder) = setup.build()?;
    let change = slider.drag(handle, offset);
    Ok(report(&slider, &recorder, &[change]))
}

fn run_replay(setup: &SetupArgs, path: &std::path::Path) -> Result<Report> {
    let script = DragScript::from_file(path)
        .with_context(|| format!("loading script {}", path.display()))?;
    let (mut slider, recorder) = setup.build()?;
    let changes = script.replay(&mut slider)?;
    Ok(report(&slider, &recorder, &changes))
}

fn report(slider: &SegmentedSlider, recorder: &RecordingObserver, changes: &[PointChange]) -> Report {
    let geometry = *slider.geometry();
    let markers = geometry.marker_offsets(&vec![0.0; geometry.point_count()]);
    Report {
        green: slider.green_point(),
        amber: slider.amber_point(),
        geometry,
        layout: *slider.layout(),
        markers,
        notifications: recorder.notifications(),
        clamped_steps: changes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.clamped)
            .map(|(i, _)| i + 1)
            .collect(),
    }
}

fn print_report(r: &Report) {
    println!("Points");
    println!("  green:  {:.2}", r.green);
    println!("  amber:  {:.2}", r.amber);
    println!();
    println!(
        "Track  start {:.2}  end {:.2}  interval {:.2}  handle {:.2}",
        r.geometry.start_position,
        r.geometry.end_position,
        r.geometry.point_interval,
        r.geometry.handle_width
    );
    println!();
    println!("Segments");
    for (name, rect) in [("green", r.layout.green), ("amber", r.layout.amber), ("red", r.layout.red)] {
        println!("  {name:<6} offset {:>8.2}  width {:>8.2}", rect.offset, rect.width);
    }
    println!();
    println!("Handles (left edge)");
    println!("  green  {:>8.2}", r.layout.green_handle);
    println!("  amber  {:>8.2}", r.layout.amber_handle);
    println!();
    let markers: Vec<String> = r.markers.iter().map(|m| format!("{m:.1}")).collect();
    println!("Markers  {}", markers.join(" "));
    println!();
    println!("Notifications");
    for (i, (g, a)) in r.notifications.iter().enumerate() {
        println!("  {i:>3}  green {g:>7.2}  amber {a:>7.2}");
    }
    if !r.clamped_steps.is_empty() {
        let steps: Vec<String> = r.clamped_steps.iter().map(|s| s.to_string()).collect();
        println!();
        println!("Stopped at the other handle on step(s): {}", steps.join(", "));
    }
}
