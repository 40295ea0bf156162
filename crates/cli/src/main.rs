#![forbid(unsafe_code)]

mod render;

use std::io::{self, Read};
use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maxsub_core::{Config, Number, parse_with};
use maxsub_solvers::max_subarray::{self, Action, Event};

use render::Report;

#[derive(Parser, Debug)]
#[command(
    name = "maxsub",
    about = "Find the maximum subarray of a list of numbers and show each step",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Array of numbers, e.g. "[-2, 1, -3, 4]". Read from stdin when omitted.
    array: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Leave the algorithm steps out of the output.
    #[arg(long, default_value_t = false)]
    no_steps: bool,

    /// Reject arrays with more than this many elements.
    #[arg(long)]
    max_len: Option<usize>,

    /// Stop the pass after this many steps and report the best so far.
    #[arg(long)]
    stop_after: Option<NonZeroUsize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let raw = match cli.array {
        Some(array) => array,
        None => read_stdin()?,
    };

    let config = Config {
        max_len: cli.max_len,
    };
    let seq = parse_with(&raw, &config)?;
    info!(len = seq.len(), "parsed input");

    let stop_after = cli.stop_after.map(NonZeroUsize::get);
    let mut steps = Vec::with_capacity(max_subarray::trace_len(seq.len()));
    let solution = max_subarray::solve_observed(&seq, |event: &Event| -> Option<Action> {
        debug!(index = event.index(), "{event}");
        steps.push(event.to_string());
        match stop_after {
            Some(limit) if steps.len() >= limit => Some(Action::StopEarly),
            _ => None,
        }
    });
    info!(
        sum = %Number(solution.sum),
        start = solution.start,
        end = solution.end,
        status = ?solution.status,
        "solved"
    );

    if cli.no_steps {
        steps.clear();
    }

    let mut out = io::stdout().lock();
    match cli.format {
        Format::Text => render::write_text(&mut out, &solution, &steps),
        Format::Json => render::write_json(
            &mut out,
            &Report {
                solution: &solution,
                steps: &steps,
            },
        ),
    }
    .context("failed to write output")?;

    Ok(())
}

/// Reads the whole of standard input.
fn read_stdin() -> Result<String> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read input from stdin")?;
    Ok(raw)
}

/// Initialize tracing on stderr with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
