mod input;
mod simulator;
pub use input::*;
pub use simulator::*;

/// Runtime options for a [`Simulator`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Log skipped lines and ignored commands at debug level.
    pub debug: bool,
    /// Draw the grid after every report.
    pub show_grid: bool,
}
