use std::collections::BTreeMap;

use crate::solver::constants::{TARGET_MAX, TARGET_MIN};

/// Expressions found for each target, in first-discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSet {
    by_target: BTreeMap<i64, Vec<String>>,
}

impl SolutionSet {
    /// A set with an empty list for every target
    pub fn new() -> Self {
        Self {
            by_target: (TARGET_MIN..=TARGET_MAX).map(|t| (t, Vec::new())).collect(),
        }
    }

    pub(crate) fn push(&mut self, target: i64, expression: String) {
        if let Some(list) = self.by_target.get_mut(&target) {
            list.push(expression);
        }
    }

    /// Expressions for `target`; empty for targets outside the searched range
    pub fn get(&self, target: i64) -> &[String] {
        self.by_target
            .get(&target)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn count(&self, target: i64) -> usize {
        self.get(target).len()
    }

    /// Targets in ascending order with their expressions
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[String])> {
        self.by_target.iter().map(|(t, list)| (*t, list.as_slice()))
    }

    pub fn targets(&self) -> impl Iterator<Item = i64> + '_ {
        self.by_target.keys().copied()
    }

    /// Total number of expressions across all targets
    pub fn len(&self) -> usize {
        self.by_target.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn unsolved_targets(&self) -> Vec<i64> {
        self.iter()
            .filter(|(_, list)| list.is_empty())
            .map(|(t, _)| t)
            .collect()
    }

    pub fn into_map(self) -> BTreeMap<i64, Vec<String>> {
        self.by_target
    }
}

impl Default for SolutionSet {
    fn default() -> Self {
        Self::new()
    }
}
