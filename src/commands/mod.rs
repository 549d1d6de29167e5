//! Command implementations

pub mod evaluate;
pub mod simple;
pub mod simulate;

pub use evaluate::{EvaluationResult, evaluate_guess};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
