//! Command implementations

pub mod simple;
pub mod simulate;
pub mod stats;

pub use simple::run_simple;
pub use simulate::{Guesser, SimulationResult, run_simulation};
pub use stats::{LocationProgress, ProgressSummary, completion_ratio, summarize};
