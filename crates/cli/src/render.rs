use std::io::{self, Write};

use serde::Serialize;

use maxsub_core::Number;
use maxsub_solvers::max_subarray::{Solution, Status};

/// JSON shape of a solve: the solution fields plus the recorded steps.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(flatten)]
    pub solution: &'a Solution,
    pub steps: &'a [String],
}

/// Writes the steps as a numbered list followed by the result block.
///
/// The step list is skipped entirely when there are no steps.
pub fn write_text<W: Write>(
    out: &mut W,
    solution: &Solution,
    steps: &[String],
) -> io::Result<()> {
    if !steps.is_empty() {
        writeln!(out, "Algorithm Steps")?;
        for (i, step) in steps.iter().enumerate() {
            writeln!(out, "{}. {step}", i + 1)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Maximum Sum: {}", Number(solution.sum))?;
    writeln!(out, "Subarray: {}", solution.elements)?;
    writeln!(out, "Indices: {} to {}", solution.start, solution.end)?;

    if solution.status == Status::StoppedByObserver {
        writeln!(out, "Stopped early; result covers the elements processed so far.")?;
    }

    Ok(())
}

/// Writes the report as pretty-printed JSON with a trailing newline.
pub fn write_json<W: Write>(out: &mut W, report: &Report<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
