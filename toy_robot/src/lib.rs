pub use board::*;
pub use command::*;
pub use direction::*;
pub use robot::*;
pub use snapshot::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod command;
mod direction;
mod robot;
mod snapshot;
mod visualization;
