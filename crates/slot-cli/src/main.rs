//! `slots` CLI — find the windows in which a whole group is free.
//!
//! ## Usage
//!
//! ```sh
//! # Read a request from stdin, print common slots of at least 30 minutes
//! slots find --duration 30 < group.json
//!
//! # Read from file, write JSON to file
//! slots find -i group.json -o slots.json --format json
//!
//! # Show every pipeline stage (unavailable time, free time, shared window)
//! slots explain -i group.json
//!
//! # Debug logging (or set RUST_LOG)
//! slots -v find -i group.json
//! ```

mod render;
mod request;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use request::Request;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Find common free time slots across a group's daily schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log pipeline stages to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the common free slots
    Find {
        #[command(flatten)]
        args: IoArgs,
    },
    /// Print every intermediate timeline along with the common free slots
    Explain {
        #[command(flatten)]
        args: IoArgs,
    },
}

#[derive(clap::Args)]
struct IoArgs {
    /// Input request file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Minimum meeting length in minutes (overrides the request's "duration")
    #[arg(short, long, allow_negative_numbers = true)]
    duration: Option<i64>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find { args } => {
            let (people, duration) = load_request(&args)?;
            let slots = slot_engine::find_common_free_slots_for(&people, duration)
                .context("Failed to compute common free slots")?;
            debug!(slots = slots.len(), "computed common free slots");

            let rendered = match args.format {
                Format::Text => render::slots_text(&slots, duration),
                Format::Json => render::slots_json(&slots)?,
            };
            write_output(args.output.as_deref(), &rendered)?;
        }
        Commands::Explain { args } => {
            let (people, duration) = load_request(&args)?;
            let report = slot_engine::analyze_group(&people, duration)
                .context("Failed to compute common free slots")?;

            let rendered = match args.format {
                Format::Text => render::report_text(&report),
                Format::Json => render::report_json(&report)?,
            };
            write_output(args.output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read and decode the request, resolving the duration from flag or body.
fn load_request(args: &IoArgs) -> Result<(Vec<slot_engine::Person>, i64)> {
    let json = read_input(args.input.as_deref())?;
    let request = Request::from_json(&json)?;
    let people = request.people()?;

    let duration = args.duration.or(request.duration).context(
        "No meeting duration given: pass --duration or set \"duration\" in the request",
    )?;
    debug!(people = people.len(), duration, "loaded request");

    Ok((people, duration))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
