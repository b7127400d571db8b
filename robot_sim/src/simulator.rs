use std::io::{BufRead, Write};

use anyhow::Context;
use toy_robot::{parse_command, Action, Board, Command, Notice, Outcome};
use tracing::{debug, trace};

use crate::Config;

/// What happened to a single line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Applied,
    /// Not a known command.
    Skipped,
    Ignored(Notice),
}

/// Counts for a whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub applied: usize,
    pub skipped: usize,
    pub ignored: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::Applied => self.applied += 1,
            LineOutcome::Skipped => self.skipped += 1,
            LineOutcome::Ignored(_) => self.ignored += 1,
        }
    }
}

/// Feeds lines of input to a [`Board`], writing reports to `out`.
pub struct Simulator<W: Write> {
    board: Board,
    config: Config,
    out: W,
    summary: RunSummary,
}

impl<W: Write> Simulator<W> {
    pub fn new(config: Config, out: W) -> Self {
        Self {
            board: Board::new(),
            config,
            out,
            summary: RunSummary::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Parses and applies one line.
    ///
    /// Returns an error only for malformed `PLACE`/`ROBOT` arguments and
    /// failures writing a report.
    pub fn process_line(&mut self, line: &str) -> anyhow::Result<LineOutcome> {
        let outcome = match parse_command(line)? {
            None => {
                if self.config.debug {
                    debug!(line = line.trim_end(), "Command not supported");
                }
                LineOutcome::Skipped
            }
            Some(command) => self.apply(&command)?,
        };
        self.summary.record(&outcome);
        Ok(outcome)
    }

    fn apply(&mut self, command: &Command) -> anyhow::Result<LineOutcome> {
        trace!(%command, "Applying command");
        let outcome = self.board.apply(command, &mut self.out)?;
        if self.config.show_grid && *command == Command::Plain(Action::Report) {
            writeln!(self.out, "{}", self.board.visualize())?;
        }
        Ok(match outcome {
            Outcome::Applied => LineOutcome::Applied,
            Outcome::Ignored(notice) => {
                if self.config.debug {
                    debug!(%command, "{}", notice);
                }
                LineOutcome::Ignored(notice)
            }
        })
    }

    /// Processes every line of `reader`, stopping at the first malformed command.
    ///
    /// `source` names the input in error messages.
    pub fn run(&mut self, source: &str, reader: impl BufRead) -> anyhow::Result<()> {
        for (line_idx, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Could not read from {}", source))?;
            self.process_line(&line)
                .with_context(|| format!("Invalid command on line {} of {}", line_idx + 1, source))?;
        }
        self.out.flush()?;
        Ok(())
    }
}
