use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use robot_sim::{Config, InputSource, Simulator};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Moves toy robots around a 5x5 grid, one command per input line.
#[derive(Parser)]
struct Args {
    /// Files to read commands from, in order. Reads standard input if none
    /// are given, or for "-"
    inputs: Vec<PathBuf>,

    /// Log unknown commands and commands that had no effect
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,

    /// Draw the grid after every REPORT
    #[arg(long, default_value_t = false)]
    show_grid: bool,

    /// Write the final state of the board as JSON into this file
    #[arg(long)]
    record_state: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Debug notices are useless if the log level hides them
    let level = if args.debug {
        args.log_level.max(LevelFilter::DEBUG)
    } else {
        args.log_level
    };
    initialize_logging(level);

    let config = Config {
        debug: args.debug,
        show_grid: args.show_grid,
    };
    let stdout = std::io::stdout().lock();
    let mut simulator = Simulator::new(config, stdout);

    for source in InputSource::from_paths(&args.inputs) {
        debug!(source = %source.name(), "Reading commands");
        let reader = source.open()?;
        simulator.run(&source.name(), reader)?;
    }

    let summary = simulator.summary();
    info!(
        lines = summary.lines,
        applied = summary.applied,
        skipped = summary.skipped,
        ignored = summary.ignored,
        "End of input"
    );

    if let Some(path) = args.record_state {
        let mut writer = BufWriter::new(
            File::create(&path)
                .with_context(|| format!("Could not create '{}'", path.display()))?,
        );
        serde_json::to_writer_pretty(&mut writer, &simulator.board().snapshot())?;
        writer.flush()?;
        debug!(path = %path.display(), "Recorded final state");
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
