//! Prints a bicycle gear table.
//!
//! Run with:
//! ```text
//! cargo run --bin gear-table -- --front 50 --wheel "700C (~29 inches)"
//! cargo run --bin gear-table -- --front 34 --wheel Other --diameter 27.2
//! cargo run --bin gear-table -- --front 50 --select 6:0:7:2
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use gear_tables::calculator::{Calculator, CellRange, CustomWheelPrompt, WheelSelection};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gear-table",
    about = "Gear ratio, gear-inch, and cadence table for a bicycle drivetrain"
)]
struct Cli {
    /// Front chainring tooth count.
    #[arg(long)]
    front: String,

    /// Wheel size: "20 inches", "24 inches", "26 inches", "27.5 inches",
    /// "700C (~29 inches)", or "Other".
    #[arg(long, default_value_t = WheelSelection::default())]
    wheel: WheelSelection,

    /// Custom wheel diameter in inches (10 to 60) used when the wheel is "Other".
    /// Prompted for on stdin when omitted.
    #[arg(long)]
    diameter: Option<f64>,

    /// Export only this block of cells, as TOP:LEFT:BOTTOM:RIGHT (zero-based,
    /// inclusive). May be repeated.
    #[arg(long = "select", value_name = "RANGE")]
    selections: Vec<CellRange>,
}

/// Answers the custom wheel size prompt from `--diameter` or line input.
///
/// Text that is not a number is reported and asked for again. A blank line or
/// end of input cancels.
struct LinePrompt<R, W> {
    preset: Option<f64>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    fn ask(&mut self) -> io::Result<Option<f64>> {
        loop {
            write!(
                self.output,
                "Enter wheel diameter in inches (10 to 60, blank to cancel): "
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.is_empty() {
                return Ok(None);
            }

            match line.parse() {
                Ok(inches) => return Ok(Some(inches)),
                Err(err) => {
                    tracing::debug!(input = line, %err, "custom wheel diameter is not a number");
                    writeln!(self.output, "{line:?} is not a number, try again.")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> CustomWheelPrompt for LinePrompt<R, W> {
    fn custom_diameter(&mut self) -> Option<f64> {
        if let Some(inches) = self.preset {
            return Some(inches);
        }

        self.ask()
            .inspect_err(|err| tracing::warn!(%err, "failed to read custom wheel diameter"))
            .ok()
            .flatten()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut calculator = Calculator::default();
    let mut prompt = LinePrompt {
        preset: cli.diameter,
        input: io::stdin().lock(),
        output: io::stderr(),
    };

    let table = match calculator.calculate(&cli.front, cli.wheel, &mut prompt) {
        Ok(table) => table,
        Err(err) if err.is_cancellation() => {
            tracing::info!("calculation cancelled");
            return Ok(());
        }
        Err(err) => return Err(err).context("failed to calculate gear table"),
    };

    let text = if cli.selections.is_empty() {
        table.to_tsv()
    } else {
        calculator.copy(&cli.selections).unwrap_or_default()
    };

    io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .context("failed to write gear table")?;

    Ok(())
}
