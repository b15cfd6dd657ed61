use std::{
    collections::{BTreeMap, btree_map},
    fmt,
};

use crate::error::RuntimeError;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of one interpreter run.
///
/// This struct maps every variable created so far to its current integer
/// value. It is created empty at the start of a run, mutated in place by
/// statement execution and reported at the end.
///
/// ## Usage
///
/// A fresh `ProgramState` is passed by mutable reference through every nested
/// statement. Nothing else carries state between runs, so two runs of the same
/// program against fresh states always end identically.
///
/// Variables are kept in name order, which makes the final report stable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProgramState {
    variables:   BTreeMap<String, i64>,
    diagnostics: Vec<RuntimeError>,
}

impl ProgramState {
    /// Creates an empty state with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `name`, if it has been created.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Sets `name` to `value`, creating the variable if it does not exist.
    pub fn set(&mut self, name: &str, value: i64) {
        match self.variables.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.variables.insert(name.to_string(), value);
            },
        }
    }

    /// Applies `delta` to `name` if it exists.
    ///
    /// Returns `false` without creating anything when the variable is
    /// undefined. Arithmetic wraps on overflow.
    pub fn adjust(&mut self, name: &str, delta: i64) -> bool {
        self.variables
            .get_mut(name)
            .map(|slot| *slot = slot.wrapping_add(delta))
            .is_some()
    }

    /// Iterates over all variables in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, i64> {
        self.variables.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Conditions that were reported and recovered from during the run.
    #[must_use]
    pub fn diagnostics(&self) -> &[RuntimeError] {
        &self.diagnostics
    }

    pub(in crate::interpreter::evaluator) fn report(&mut self, error: RuntimeError) {
        tracing::warn!(%error, "recovered from runtime error");
        self.diagnostics.push(error);
    }
}

impl<'a> IntoIterator for &'a ProgramState {
    type IntoIter = btree_map::Iter<'a, String, i64>;
    type Item = (&'a String, &'a i64);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Prints one `Variable: <name>, Value: <value>` line per variable.
impl fmt::Display for ProgramState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.variables {
            writeln!(f, "Variable: {name}, Value: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_creates_and_overwrites() {
        let mut state = ProgramState::new();
        state.set("x", 5);
        assert_eq!(state.get("x"), Some(5));
        state.set("x", 0);
        assert_eq!(state.get("x"), Some(0));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn adjust_never_creates() {
        let mut state = ProgramState::new();
        assert!(!state.adjust("x", 1));
        assert!(state.is_empty());
    }

    #[test]
    fn adjust_wraps_on_overflow() {
        let mut state = ProgramState::new();
        state.set("x", i64::MAX);
        assert!(state.adjust("x", 1));
        assert_eq!(state.get("x"), Some(i64::MIN));
    }

    #[test]
    fn report_is_sorted_by_name() {
        let mut state = ProgramState::new();
        state.set("y", 2);
        state.set("a", -1);
        assert_eq!(state.to_string(), "Variable: a, Value: -1\nVariable: y, Value: 2\n");
    }
}
