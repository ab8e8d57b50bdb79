pub mod error;
pub mod grid;
pub mod parser;
pub mod segment;
pub mod tracker;

#[cfg(test)]
mod oracle;

pub use error::{Error, Result};
pub use grid::{Cell, Direction, Move};
pub use segment::{Segment, Span};
pub use tracker::{Coverage, Tracker};
