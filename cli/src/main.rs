//! svgnorm CLI - SVG asset normalization tool

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use svgnorm::{
    batch::normalize_files, detect_format_from_path, extract_dimensions,
    normalize_file_to_with_options, normalize_file_with_options, read_markup, NormalizeOptions,
};

#[derive(Parser)]
#[command(name = "svgnorm")]
#[command(version)]
#[command(about = "Normalize SVG assets: optimize structure, strip fixed sizing, auto-fit dimensions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize an SVG/SVGZ file
    #[command(alias = "norm")]
    Normalize {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (in place if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,

        /// Print the outcome report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print declared dimensions (attributes, then view-box)
    Dims {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print estimated content bounds
    Bounds {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Padding ratio around scanned content
        #[arg(long, default_value_t = svgnorm::pipeline::DEFAULT_PADDING_RATIO)]
        padding: f64,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a file is recognizable SVG/SVGZ
    Check {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Normalize every SVG/SVGZ file in a directory, in parallel
    Batch {
        /// Input directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        #[command(flatten)]
        policy: PolicyArgs,
    },
}

/// Sizing policy flags shared by normalize and batch.
#[derive(clap::Args)]
struct PolicyArgs {
    /// Upper clamp for the longer output side
    #[arg(long, default_value_t = svgnorm::pipeline::DEFAULT_MAX_DIMENSION)]
    max: u32,

    /// Lower bound for the shorter output side
    #[arg(long, default_value_t = svgnorm::pipeline::DEFAULT_MIN_DIMENSION)]
    min: u32,

    /// Decimal places kept by numeric cleanup
    #[arg(long, default_value_t = svgnorm::pipeline::DEFAULT_PRECISION)]
    precision: u8,

    /// Compute dimensions only, leave markup untouched
    #[arg(long)]
    no_optimize: bool,
}

impl PolicyArgs {
    fn to_options(&self) -> NormalizeOptions {
        NormalizeOptions::new()
            .with_max_dimension(self.max)
            .with_min_dimension(self.min)
            .with_precision(self.precision)
            .with_optimize(!self.no_optimize)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Normalize {
            input,
            output,
            policy,
            json,
        } => cmd_normalize(&input, output.as_deref(), &policy, json),
        Commands::Dims { input, json } => cmd_dims(&input, json),
        Commands::Bounds {
            input,
            padding,
            json,
        } => cmd_bounds(&input, padding, json),
        Commands::Check { input } => cmd_check(&input),
        Commands::Batch { dir, policy } => cmd_batch(&dir, &policy),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn cmd_normalize(
    input: &Path,
    output: Option<&Path>,
    policy: &PolicyArgs,
    json: bool,
) -> svgnorm::Result<()> {
    let outcome = match output {
        Some(out) => normalize_file_to_with_options(input, out, policy.to_options())?,
        None => normalize_file_with_options(input, policy.to_options())?,
    };

    if json {
        println!("{}", outcome.to_json_pretty()?);
        return Ok(());
    }

    let dims = outcome
        .dimensions
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let status = if outcome.optimized {
        "optimized".green()
    } else {
        "kept original".yellow()
    };
    println!(
        "{} {} ({}, {} bytes)",
        input.display().to_string().bold(),
        status,
        dims,
        outcome.byte_size
    );
    Ok(())
}

fn cmd_dims(input: &Path, json: bool) -> svgnorm::Result<()> {
    let svg = read_markup(input)?;
    let size = extract_dimensions(&svg);

    if json {
        println!("{}", serde_json::to_string_pretty(&size).map_err(to_other)?);
        return Ok(());
    }
    match (size.width, size.height) {
        (Some(w), Some(h)) => println!("{w} x {h}"),
        (w, h) => println!("width: {w:?}, height: {h:?}"),
    }
    Ok(())
}

fn cmd_bounds(input: &Path, padding: f64, json: bool) -> svgnorm::Result<()> {
    let svg = read_markup(input)?;
    match svgnorm::extract::content_bounds(&svg, padding) {
        Some(rect) if json => {
            println!("{}", serde_json::to_string_pretty(&rect).map_err(to_other)?)
        }
        Some(rect) => println!(
            "x={} y={} width={} height={}",
            rect.x, rect.y, rect.width, rect.height
        ),
        None => println!("{}", "no determinable content bounds".yellow()),
    }
    Ok(())
}

fn cmd_check(input: &Path) -> svgnorm::Result<()> {
    match detect_format_from_path(input) {
        Ok(format) => {
            println!("{} {}", input.display().to_string().bold(), format.to_string().green());
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn cmd_batch(dir: &Path, policy: &PolicyArgs) -> svgnorm::Result<()> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_vector = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg") || ext.eq_ignore_ascii_case("svgz"));
        if is_vector {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        println!("{}", "no SVG files found".yellow());
        return Ok(());
    }

    let bar = ProgressBar::new(paths.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}").map_err(to_other)?,
    );

    let entries = normalize_files(&paths, &policy.to_options());
    let mut failures = 0usize;
    for entry in &entries {
        bar.inc(1);
        if let Err(err) = &entry.outcome {
            failures += 1;
            bar.println(format!(
                "{} {}: {}",
                "failed".red(),
                entry.path.display(),
                err
            ));
        }
    }
    bar.finish_and_clear();

    let ok = entries.len() - failures;
    println!(
        "{} {} normalized, {} failed",
        "done:".green().bold(),
        ok,
        failures
    );
    Ok(())
}

fn to_other<E: std::fmt::Display>(err: E) -> svgnorm::Error {
    svgnorm::Error::Other(err.to_string())
}
