//! Variable assignments.

use std::fmt;

use crate::ast::Variable;
use crate::error::EvaluationError;

/// Mapping from variables to boolean values.
///
/// Entries are kept sorted by variable name, so equality and hashing follow
/// the canonical variable order. An assignment never holds a variable that is
/// not among the variables it was built from.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct VariableAssignment {
    entries: Vec<(Variable, bool)>,
}

impl VariableAssignment {
    /// Every variable set to `true`.
    pub fn all_true(variables: &[Variable]) -> Self {
        let mut entries: Vec<(Variable, bool)> = variables.iter().map(|v| (v.clone(), true)).collect();
        entries.sort();
        entries.dedup_by(|a, b| a.0 == b.0);
        Self { entries }
    }

    /// The all-true assignment with some values overridden by name.
    ///
    /// Fails if a name is not one of `variables`.
    pub fn with_overrides<S, I>(variables: &[Variable], overrides: I) -> Result<Self, EvaluationError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, bool)>,
    {
        let mut assignment = Self::all_true(variables);
        for (name, value) in overrides {
            assignment.set_by_name(name.as_ref(), value)?;
        }
        Ok(assignment)
    }

    /// An assignment holding only the named variables.
    ///
    /// Fails if a name is not one of `variables`. Evaluating a statement that
    /// references a variable left out here fails as well.
    pub fn from_pairs<S, I>(variables: &[Variable], pairs: I) -> Result<Self, EvaluationError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, bool)>,
    {
        let mut entries: Vec<(Variable, bool)> = Vec::new();
        for (name, value) in pairs {
            let name = name.as_ref();
            let variable = variables
                .iter()
                .find(|v| v.name() == name)
                .ok_or_else(|| undefined(name))?;
            match entries.binary_search_by(|(v, _)| v.cmp(variable)) {
                Ok(i) => entries[i].1 = value,
                Err(i) => entries.insert(i, (variable.clone(), value)),
            }
        }
        Ok(Self { entries })
    }

    /// The assignment of row `row` of a truth table over `variables`, which
    /// must be sorted and free of duplicates.
    ///
    /// Variable `j` of `n` is `true` iff bit `n - 1 - j` of `row` is zero:
    /// the first variable toggles slowest, the last one every row.
    pub fn from_row(variables: &[Variable], row: usize) -> Self {
        let n = variables.len();
        let entries = variables
            .iter()
            .enumerate()
            .map(|(j, v)| (v.clone(), (row >> (n - 1 - j)) & 1 == 0))
            .collect();
        Self { entries }
    }

    /// Inverse of [`from_row`][Self::from_row].
    pub fn row_index(&self) -> usize {
        self.entries
            .iter()
            .fold(0, |index, (_, value)| (index << 1) | (!*value as usize))
    }

    pub fn get(&self, variable: &Variable) -> Result<bool, EvaluationError> {
        self.get_by_name(variable.name())
    }

    pub fn get_by_name(&self, name: &str) -> Result<bool, EvaluationError> {
        self.position(name).map(|i| self.entries[i].1)
    }

    /// Change the value of a variable already held by this assignment.
    pub fn set(&mut self, variable: &Variable, value: bool) -> Result<(), EvaluationError> {
        self.set_by_name(variable.name(), value)
    }

    pub fn set_by_name(&mut self, name: &str, value: bool) -> Result<(), EvaluationError> {
        let i = self.position(name)?;
        self.entries[i].1 = value;
        Ok(())
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.position(variable.name()).is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.entries.iter().map(|(v, _)| v)
    }

    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.entries.iter().map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, bool)> {
        self.entries.iter().map(|(v, value)| (v, *value))
    }

    fn position(&self, name: &str) -> Result<usize, EvaluationError> {
        self.entries
            .binary_search_by(|(v, _)| v.name().cmp(name))
            .map_err(|_| undefined(name))
    }
}

fn undefined(name: &str) -> EvaluationError {
    EvaluationError::UndefinedVariable { name: name.to_string() }
}

impl fmt::Display for VariableAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (variable, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", variable, value)?;
        }
        write!(f, "}}")
    }
}
