use std::collections::HashSet;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::Expression;
use crate::iterator::{ConcatVariants, ExpressionGenerator, Permutations};
use crate::solver::config::SolverConfig;
use crate::solver::constants::{TARGET_MAX, TARGET_MIN};
use crate::solver::errors::SolverError;
use crate::solver::solution::SolutionSet;
use crate::utils::{DIGIT_COUNT, digits_to_tokens, token_to_number, validate_digits};

/// A candidate solution found while searching one ordering of the digits
type Candidate = (i64, String);

/// Exhaustive solver for every target in `TARGET_MIN..=TARGET_MAX`
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    /// Create a new expression solver with the default configuration
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Find every expression over `digits` that evaluates to each target.
    ///
    /// Every ordering of the digits, every grouping of adjacent digits into
    /// numbers and every parenthesization with every operator assignment is
    /// tried. An expression is kept the first time its text is seen for a
    /// target; the lists preserve discovery order.
    ///
    /// # Errors
    ///
    /// Returns an error if any digit lies outside 1..=9.
    pub fn solve(&self, digits: [u32; DIGIT_COUNT]) -> Result<SolutionSet, SolverError> {
        validate_digits(&digits)?;

        info!(
            "Searching expressions over {:?} for targets {}..={}",
            digits, TARGET_MIN, TARGET_MAX
        );

        let orderings: Vec<Vec<String>> = Permutations::new(digits_to_tokens(&digits)).collect();
        debug!("Generated {} orderings", orderings.len());

        let per_ordering: Vec<Vec<Candidate>> = if self.config.parallel {
            orderings
                .par_iter()
                .map(|ordering| self.search_ordering(ordering))
                .collect::<Result<_, _>>()?
        } else {
            orderings
                .iter()
                .map(|ordering| self.search_ordering(ordering))
                .collect::<Result<_, _>>()?
        };

        let mut solutions = SolutionSet::new();
        let mut seen: HashSet<Candidate> = HashSet::new();
        let mut matched = 0usize;

        for (target, text) in per_ordering.into_iter().flatten() {
            matched += 1;
            if seen.insert((target, text.clone())) {
                solutions.push(target, text);
            }
        }

        info!(
            "Found {} distinct solutions ({} matches before deduplication), unsolved targets: {:?}",
            solutions.len(),
            matched,
            solutions.unsolved_targets()
        );

        Ok(solutions)
    }

    /// Search every grouping of one ordering, in generation order
    fn search_ordering(&self, ordering: &[String]) -> Result<Vec<Candidate>, SolverError> {
        let mut found = Vec::new();

        for grouping in ConcatVariants::new(ordering) {
            let operands = grouping
                .iter()
                .map(|token| token_to_number(token).map(Expression::Number))
                .collect::<Result<Vec<_>, _>>()?;

            let expressions = ExpressionGenerator::generate_expressions(&operands);
            debug!(
                "Grouping {:?} produced {} expressions",
                grouping,
                expressions.len()
            );

            found.extend(expressions.into_iter().filter_map(|expr| {
                self.target_value(&expr)
                    .map(|target| (target, expr.to_string()))
            }));
        }

        Ok(found)
    }

    /// The target an expression hits, if its rounded value is an integer in range
    fn target_value(&self, expr: &Expression) -> Option<i64> {
        expr.integer_value_with_scale(self.config.rounding_scale)
            .filter(|target| (TARGET_MIN..=TARGET_MAX).contains(target))
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}
