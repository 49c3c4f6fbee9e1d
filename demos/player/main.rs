//! Headless playback demo.
//!
//! Loads a sheet manifest, drives the animator with a simulated tick
//! schedule, and prints the frame/source-rect timeline that a rendering host
//! would consume. Discrete control events (pause toggles, clip switches,
//! speed steps) can be scheduled on the timeline to exercise the full
//! control surface without a window or keyboard.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use flipbook_rs::prelude::*;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	run(cli)
}

#[derive(Parser)]
#[command(name = "player")]
#[command(author = "flipbook-rs project")]
#[command(version)]
#[command(about = "Simulate sprite-sheet playback from a manifest", long_about = None)]
struct Cli {
	/// Path to a sheet manifest (JSON)
	#[arg(value_name = "MANIFEST")]
	manifest: PathBuf,

	/// Total simulated time in milliseconds
	#[arg(short, long, value_name = "MS", default_value_t = 2000.0)]
	duration: f64,

	/// Interval between simulated ticks in milliseconds
	#[arg(short, long, value_name = "MS", default_value_t = 16.0)]
	tick: f64,

	/// Alternate ticks by +/- this many milliseconds to simulate scheduler jitter
	#[arg(short, long, value_name = "MS", default_value_t = 0.0)]
	jitter: f64,

	/// Start on this clip instead of the manifest's initial clip
	#[arg(short, long, value_name = "NAME")]
	clip: Option<String>,

	/// Playback-rate multiplier applied before the simulation starts
	#[arg(short, long, value_name = "RATE")]
	rate: Option<f64>,

	/// Start paused regardless of the manifest's autoplay flag
	#[arg(long, default_value_t = false)]
	start_paused: bool,

	/// Viewport size for the centered destination rectangle, in pixels
	#[arg(long, value_name = "PX", default_value_t = 256.0)]
	viewport: f64,

	/// Toggle play/pause at these timeline instants (repeatable)
	#[arg(long, value_name = "MS")]
	toggle_at: Vec<f64>,

	/// Switch to the next registered clip at these instants (repeatable)
	#[arg(long, value_name = "MS")]
	switch_at: Vec<f64>,
}

/// A control event pinned to the simulated timeline.
enum Control {
	TogglePlay,
	NextClip,
}

fn run(cli: Cli) -> Result<()> {
	if cli.duration <= 0.0 {
		bail!("Duration must be positive, got {}", cli.duration);
	}
	if cli.tick <= 0.0 {
		bail!("Tick interval must be positive, got {}", cli.tick);
	}
	if cli.jitter < 0.0 || cli.jitter >= cli.tick {
		bail!("Jitter must lie in [0, tick), got {}", cli.jitter);
	}

	let manifest = SheetManifest::load(&cli.manifest)
		.with_context(|| format!("Failed to load manifest {}", cli.manifest.display()))?;
	let (library, mut animator) = manifest
		.build()
		.with_context(|| format!("Invalid manifest {}", cli.manifest.display()))?;
	let layout = *library.layout();

	if let Some(name) = &cli.clip {
		animator.set_clip(library.require(name)?.clone());
	}
	if let Some(rate) = cli.rate {
		animator.set_rate(rate);
	}
	if cli.start_paused && animator.is_playing() {
		animator.toggle_play();
	}

	let dest = DestRect::centered(&layout, cli.viewport, cli.viewport, manifest.scale);
	println!("sheet:    {layout} ({} frames)", library.frame_capacity());
	println!(
		"clips:    {}",
		library.clips().iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
	);
	println!("dest:     {dest} in a {0}×{0} viewport", cli.viewport);
	println!("starting: {animator} @ rate {}", animator.rate());
	println!();

	let mut events = schedule(&cli);
	let mut now = 0.0;
	let mut tick_index: u64 = 0;
	let mut total_steps: u64 = 0;

	while now < cli.duration {
		// Fire control events that came due since the previous tick
		while events.last().is_some_and(|(at, _)| *at <= now) {
			let (at, control) = events.pop().expect("checked non-empty");
			match control {
				Control::TogglePlay => {
					let playing = animator.toggle_play();
					println!(
						"{at:9.1}ms  -- {}",
						if playing {
							"resumed"
						} else {
							"paused"
						}
					);
				}
				Control::NextClip => {
					if let Some(next) = library.next_after(animator.clip().name()) {
						let next = next.clone();
						println!("{at:9.1}ms  -- switch to {next}");
						animator.set_clip(next);
					}
				}
			}
		}

		// Alternate the jitter sign so the average tick stays on schedule
		let elapsed = if tick_index % 2 == 0 {
			cli.tick + cli.jitter
		} else {
			cli.tick - cli.jitter
		};

		let stepped = animator.advance(elapsed);
		now += elapsed;
		tick_index += 1;
		total_steps += u64::from(stepped);

		if stepped > 0 {
			println!(
				"{now:9.1}ms  {animator}  sheet frame {:3}  src {}",
				animator.current_frame_index(),
				animator.source_rect(&layout)
			);
		}
	}

	println!();
	println!(
		"{total_steps} frame steps over {:.0}ms across {tick_index} ticks",
		cli.duration
	);
	Ok(())
}

/// Builds the control-event queue, latest first so events pop in time order.
fn schedule(cli: &Cli) -> Vec<(f64, Control)> {
	let mut events: Vec<(f64, Control)> = cli
		.toggle_at
		.iter()
		.map(|&at| (at, Control::TogglePlay))
		.chain(cli.switch_at.iter().map(|&at| (at, Control::NextClip)))
		.collect();
	events.sort_by(|a, b| b.0.total_cmp(&a.0));
	events
}
