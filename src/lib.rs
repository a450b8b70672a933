//! Make Ten - find every arithmetic expression over four digits that hits
//! each target from 1 to 10
//!
//! Digits may be reordered and adjacent digits merged into longer numbers;
//! the numbers are combined with `+`, `-`, `*` and `/` under every possible
//! parenthesization.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

use std::collections::BTreeMap;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, evaluate};
pub use iterator::{ConcatVariants, ExpressionGenerator, Permutations};
pub use solver::{ExpressionSolver, SolutionSet, SolverConfig, SolverError};
pub use utils::{UtilsError, parse_digit_string, validate_digits};

/// Find every expression over `digits` for each target 1 through 10
///
/// This is a convenience function that runs a solver with the default
/// configuration.
///
/// # Errors
///
/// Returns an error if any digit lies outside 1..=9.
///
/// # Examples
///
/// ```
/// use make_ten::solve;
///
/// let solutions = solve([1, 2, 3, 4]).expect("digits are valid");
/// assert!(solutions.get(10).contains(&"((1+2)+(3+4))".to_string()));
/// ```
pub fn solve(digits: [u32; 4]) -> Result<SolutionSet, SolverError> {
    ExpressionSolver::new().solve(digits)
}

/// Like [`solve`], returning the plain mapping from target to expressions
///
/// # Errors
///
/// Returns an error if any digit lies outside 1..=9.
///
/// # Examples
///
/// ```
/// use make_ten::solve_all_ten;
///
/// let results = solve_all_ten([5, 5, 5, 5]).expect("digits are valid");
/// assert_eq!(results.len(), 10);
/// assert!(results[&1].contains(&"((5/5)*(5/5))".to_string()));
/// ```
pub fn solve_all_ten(digits: [u32; 4]) -> Result<BTreeMap<i64, Vec<String>>, SolverError> {
    solve(digits).map(SolutionSet::into_map)
}
