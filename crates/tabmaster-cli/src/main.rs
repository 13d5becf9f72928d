//! TabMaster command-line runner
//!
//! Each input file (or stdin when none is given) is one batch, run against a
//! fresh session. Output lines go to stdout; diagnostics go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use tabmaster_core::{decode_lines, decode_payload, Config, ExecutionStats, Executor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// One command per line
    Lines,
    /// A JSON array of command strings
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tabmaster")]
#[command(about = "Replay browser tab session commands")]
struct Args {
    /// Command batch files (reads stdin when omitted)
    files: Vec<PathBuf>,

    /// Input format of each batch
    #[arg(long = "format", value_enum, default_value_t = InputFormat::Lines)]
    format: InputFormat,

    /// Print a JSON execution report per batch instead of raw output lines
    #[arg(long = "report", default_value_t = false)]
    report: bool,

    /// Include the final session state in each report (implies --report)
    #[arg(long = "snapshot", default_value_t = false)]
    snapshot: bool,

    /// Print aggregate statistics over all batches
    #[arg(long = "stats", default_value_t = false)]
    stats: bool,

    /// JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,
}

struct Batch {
    source: String,
    text: String,
}

fn main() -> Result<()> {
    tabmaster_core::init_logging();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    let batches = read_batches(&args.files)?;
    let executor = Executor::new(config.clone()).with_snapshot(args.snapshot);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut reports = Vec::with_capacity(batches.len());

    for batch in batches {
        let commands = match args.format {
            InputFormat::Lines => decode_lines(&batch.text, &config),
            InputFormat::Json => decode_payload(&batch.text, &config),
        }
        .with_context(|| format!("Invalid command batch in {}", batch.source))?;

        tracing::debug!(source = %batch.source, command_count = commands.len(), "Running batch");

        let report = executor.execute(commands);

        if args.report || args.snapshot {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        } else {
            for line in &report.results {
                writeln!(out, "{}", line)?;
            }
        }

        reports.push(report);
    }

    if args.stats {
        serde_json::to_writer_pretty(&mut out, &ExecutionStats::from_reports(&reports))?;
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

fn read_batches(files: &[PathBuf]) -> Result<Vec<Batch>> {
    if files.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read commands from stdin")?;
        return Ok(vec![Batch {
            source: "<stdin>".to_string(),
            text,
        }]);
    }

    files
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(Batch {
                source: path.display().to_string(),
                text,
            })
        })
        .collect()
}
