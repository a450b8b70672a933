mod config;
pub mod constants;
mod core;
mod errors;
mod solution;

pub use config::SolverConfig;
pub use core::ExpressionSolver;
pub use errors::SolverError;
pub use solution::SolutionSet;
