//! Sheet manifest validation utility.
//!
//! Provides two subcommands:
//! - `validate`: scan a directory (defaults to `assets/`) and check every
//!   `.json` manifest against the playback validation rules.
//! - `inspect`: deep-dive into a single manifest and optionally focus on one
//!   clip; with an image available, cross-check the declared grid against
//!   the real sheet dimensions.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use flipbook_rs::prelude::*;
use walkdir::WalkDir;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Validate(opts) => run_validate(opts),
		Command::Inspect(opts) => run_inspect(opts),
	}
}

#[derive(Parser)]
#[command(name = "manifest_utils")]
#[command(author = "flipbook-rs project")]
#[command(version)]
#[command(about = "Validate and inspect sheet manifest files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Validate every manifest under a directory
	Validate(ValidateArgs),
	/// Inspect a single manifest and optionally focus on one clip
	Inspect(InspectArgs),
}

#[derive(Args)]
struct ValidateArgs {
	/// Directory containing sheet manifests
	#[arg(short = 'd', long, value_name = "DIR", default_value = "assets")]
	root: PathBuf,

	/// Recurse into sub-directories while scanning
	#[arg(short, long, default_value_t = false)]
	recursive: bool,

	/// Print per-clip diagnostics even when clean
	#[arg(short, long, default_value_t = false)]
	verbose: bool,

	/// Exit with an error when warnings are encountered
	#[arg(long, default_value_t = false)]
	fail_on_warning: bool,
}

#[derive(Args)]
struct InspectArgs {
	/// Path to a single manifest file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Only show diagnostics for the specified clip
	#[arg(short, long, value_name = "NAME")]
	clip: Option<String>,

	/// Path to the sheet image, overriding the manifest's `image` field
	#[arg(short, long, value_name = "FILE")]
	image: Option<PathBuf>,
}

#[derive(Default)]
struct ScanTotals {
	files: usize,
	clean: usize,
	warnings: usize,
	errors: usize,
}

fn run_validate(args: ValidateArgs) -> Result<()> {
	if !args.root.exists() {
		bail!("Root directory {} does not exist", args.root.display());
	}
	if !args.root.is_dir() {
		bail!("{} is not a directory", args.root.display());
	}

	let files = collect_manifests(&args.root, args.recursive);
	if files.is_empty() {
		println!("No .json manifests found under {}", args.root.display());
		return Ok(());
	}

	let mut totals = ScanTotals::default();
	for path in files {
		totals.files += 1;
		match validate_file(&path, args.verbose) {
			Ok(warnings) if warnings == 0 => totals.clean += 1,
			Ok(warnings) => totals.warnings += warnings,
			Err(err) => {
				totals.errors += 1;
				println!("ERROR  {}: {err:#}", path.display());
			}
		}
	}

	println!();
	println!(
		"{} manifests: {} clean, {} warnings, {} errors",
		totals.files, totals.clean, totals.warnings, totals.errors
	);

	if totals.errors > 0 {
		bail!("Validation failed");
	}
	if args.fail_on_warning && totals.warnings > 0 {
		bail!("Validation produced warnings");
	}
	Ok(())
}

/// Validates one manifest, returning the number of warnings printed.
fn validate_file(path: &Path, verbose: bool) -> Result<usize> {
	let manifest = SheetManifest::load(path)?;
	let (library, _) = manifest.build()?;

	let mut warnings = 0;
	match sheet_image_path(path, &manifest, None) {
		Some(image_path) => {
			if let Some(capacity) = read_image_capacity(&image_path, library.layout()) {
				if capacity < library.frame_capacity() {
					warnings += 1;
					println!(
						"WARN   {}: image {} holds {} frames, manifest declares {}",
						path.display(),
						image_path.display(),
						capacity,
						library.frame_capacity()
					);
				}
			} else {
				// Playback does not need the image; the host renders a
				// placeholder until the resource shows up.
				warnings += 1;
				println!(
					"WARN   {}: sheet image {} is missing or unreadable",
					path.display(),
					image_path.display()
				);
			}
		}
		None => {
			if verbose {
				println!("       {}: no image declared, grid taken on faith", path.display());
			}
		}
	}

	if verbose {
		println!("OK     {}: {}", path.display(), library);
		for clip in library.clips() {
			println!("         {clip}");
		}
	} else if warnings == 0 {
		println!("OK     {}", path.display());
	}
	Ok(warnings)
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let manifest = SheetManifest::load(&args.file)
		.with_context(|| format!("Failed to load manifest {}", args.file.display()))?;
	let (library, animator) = manifest
		.build()
		.with_context(|| format!("Invalid manifest {}", args.file.display()))?;
	let layout = *library.layout();

	println!("manifest: {}", args.file.display());
	println!("layout:   {layout}");
	println!("capacity: {} frames ({} rows)", library.frame_capacity(), manifest.rows);
	println!("initial:  {} (autoplay: {})", animator.clip().name(), animator.is_playing());
	println!("scale:    {}", manifest.scale);

	if let Some(image_path) = sheet_image_path(&args.file, &manifest, args.image.as_deref()) {
		match read_image_capacity(&image_path, &layout) {
			Some(capacity) if capacity >= library.frame_capacity() => {
				println!("image:    {} ({capacity} frames)", image_path.display());
			}
			Some(capacity) => {
				println!(
					"image:    {} holds only {capacity} of {} declared frames!",
					image_path.display(),
					library.frame_capacity()
				);
			}
			None => {
				println!("image:    {} (missing or unreadable)", image_path.display());
			}
		}
	}

	println!();
	for clip in library.clips() {
		if args.clip.as_deref().is_some_and(|name| name != clip.name()) {
			continue;
		}
		let first = layout.source_rect(clip.start_frame());
		let last = layout.source_rect(clip.end_frame());
		println!("{clip}");
		println!("  {} frames, {:.2}ms per frame", clip.len(), clip.frame_duration_ms());
		println!("  cycle {:.2}ms", clip.cycle_duration_ms());
		println!("  first {first}, last {last}");
	}

	if let Some(name) = &args.clip {
		// Surface a typo'd --clip as an error instead of silent no output
		library.require(name)?;
	}
	Ok(())
}

/// Collects manifest paths under `root`, one level deep unless recursing.
fn collect_manifests(root: &Path, recursive: bool) -> Vec<PathBuf> {
	let mut walker = WalkDir::new(root).sort_by_file_name();
	if !recursive {
		walker = walker.max_depth(1);
	}
	walker
		.into_iter()
		.filter_map(Result::ok)
		.filter(|entry| entry.file_type().is_file())
		.map(|entry| entry.into_path())
		.filter(|path| path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")))
		.collect()
}

/// Resolves the sheet image path: an explicit override wins, otherwise the
/// manifest's `image` field relative to the manifest file.
fn sheet_image_path(
	manifest_path: &Path,
	manifest: &SheetManifest,
	override_path: Option<&Path>,
) -> Option<PathBuf> {
	if let Some(path) = override_path {
		return Some(path.to_path_buf());
	}
	let declared = manifest.image.as_ref()?;
	match manifest_path.parent() {
		Some(dir) => Some(dir.join(declared)),
		None => Some(declared.clone()),
	}
}

/// Reads the image dimensions and returns how many frames the layout can
/// address in it, or `None` when the image cannot be read.
fn read_image_capacity(path: &Path, layout: &SheetLayout) -> Option<u32> {
	match image::image_dimensions(path) {
		Ok((width, height)) => Some(layout.frame_capacity(width, height)),
		Err(err) => {
			log::warn!("could not read {}: {err}", path.display());
			None
		}
	}
}
