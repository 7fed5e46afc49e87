//! # Spokecalc CLI Application
//!
//! Terminal front end for the wheel geometry engine.
//!
//! ```text
//! spoke_cli solve --input build.json          # JSON request from a file
//! cat build.json | spoke_cli solve --format json
//! spoke_cli interactive                       # prompt for each value
//! spoke_cli demo                              # symmetric 32-spoke front wheel
//! ```
//!
//! Set `RUST_LOG=spoke_core=debug` to trace each calculation.

mod config;
mod report;

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use spoke_core::{solve, BuildRequest, BuildSpec, CalculatorSettings, GeometryError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Human-readable report
    Text,
    /// `SpokeResult` as pretty JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Spoke length and wheel geometry calculator")]
struct Args {
    /// TOML file with defaults for optional inputs.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, global = true, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a JSON build request.
    Solve {
        /// Request file; `-` or omitted reads stdin.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Prompt for each input, Enter keeps the default.
    Interactive,
    /// Solve a symmetric 32-spoke 3-cross front wheel.
    Demo,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spoke_cli=info,spoke_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let settings = config::load_settings(args.config.as_deref())?;

    let spec = match &args.command {
        Command::Solve { input } => read_request(input.as_ref())?.resolve(&settings),
        Command::Interactive => prompt_spec(&settings)?,
        Command::Demo => demo_spec(&settings),
    };

    match solve(spec) {
        Ok(result) => {
            match args.format {
                Format::Text => print!("{}", report::render(&spec, &result)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            report_error(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn report_error(e: &GeometryError) {
    if e.is_input_error() {
        eprintln!("Error: {}", e);
    } else {
        tracing::error!(code = e.error_code(), %e, "calculation defect");
        eprintln!("Internal error: {} (please report this build)", e);
    }
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn read_request(input: Option<&PathBuf>) -> Result<BuildRequest> {
    let text = match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("reading request {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("parsing build request JSON")
}

fn demo_spec(settings: &CalculatorSettings) -> BuildSpec {
    BuildSpec {
        erd: 600.0,
        rim_offset: settings.default_rim_offset,
        flange_diameter_left: 45.0,
        flange_diameter_right: 45.0,
        flange_offset_left: 35.0,
        flange_offset_right: 35.0,
        spoke_hole_diameter: settings.default_spoke_hole_diameter,
        spoke_count: 32,
        cross_pattern_left: 3,
        cross_pattern_right: 3,
    }
}

fn prompt_spec(settings: &CalculatorSettings) -> Result<BuildSpec> {
    let demo = demo_spec(settings);
    println!("Spokecalc - Spoke Length Calculator");
    println!("===================================");
    println!("Press Enter to keep the value in brackets.");
    println!();

    Ok(BuildSpec {
        erd: prompt("ERD (mm)", demo.erd)?,
        rim_offset: prompt("Rim drilling offset (mm, + favors drive side)", demo.rim_offset)?,
        flange_diameter_left: prompt("Left flange PCD (mm)", demo.flange_diameter_left)?,
        flange_offset_left: prompt("Left flange offset (mm)", demo.flange_offset_left)?,
        flange_diameter_right: prompt("Right flange PCD (mm)", demo.flange_diameter_right)?,
        flange_offset_right: prompt("Right flange offset (mm)", demo.flange_offset_right)?,
        spoke_hole_diameter: prompt("Spoke hole diameter (mm)", demo.spoke_hole_diameter)?,
        spoke_count: prompt("Spoke count", demo.spoke_count)?,
        cross_pattern_left: prompt("Left cross pattern", demo.cross_pattern_left)?,
        cross_pattern_right: prompt("Right cross pattern", demo.cross_pattern_right)?,
    })
}

fn prompt<T>(label: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + std::fmt::Display,
{
    print!("{} [{}]: ", label, default);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse()
        .map_err(|_| anyhow::anyhow!("'{}' is not a valid value for {}", trimmed, label))
}
