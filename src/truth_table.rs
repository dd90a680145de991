//! Truth table enumeration.
//!
//! A statement over `n` variables has exactly `2^n` rows. Row `i` assigns
//! variable `j` (in canonical order) the value `true` iff bit `n - 1 - j` of
//! `i` is zero, so for variables `[a, b]`:
//!
//! ```text
//! row  a  b
//!  0   T  T
//!  1   T  F
//!  2   F  T
//!  3   F  F
//! ```

use std::ops::Index;

use log::debug;

use crate::assignment::VariableAssignment;
use crate::ast::Variable;
use crate::statement::Statement;

/// One row: an assignment and the values computed under it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TruthTableRow {
    pub assignment: VariableAssignment,
    /// One value per marked sub-expression, followed by the statement value.
    pub results: Vec<bool>,
}

impl TruthTableRow {
    /// Value of the whole statement.
    pub fn value(&self) -> bool {
        self.results[self.results.len() - 1]
    }

    /// Values of the marked sub-expressions.
    pub fn sub_values(&self) -> &[bool] {
        &self.results[..self.results.len() - 1]
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TruthTable {
    variables: Vec<Variable>,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Enumerate all assignments of `statement`'s variables.
    ///
    /// # Panics
    ///
    /// Panics if the statement has too many variables for `2^n` to fit in a `usize`.
    pub fn new(statement: &Statement) -> Self {
        let variables = statement.variables().to_vec();
        let n = variables.len();
        assert!(
            n < usize::BITS as usize,
            "cannot enumerate 2^{} rows",
            n
        );
        let size = 1usize << n;
        debug!("truth table of {:?}: {} variables, {} rows", statement.source(), n, size);

        let rows = (0..size)
            .map(|i| {
                let assignment = VariableAssignment::from_row(&variables, i);
                let results = statement
                    .evaluate_row(&assignment)
                    .expect("row assignment covers every variable");
                TruthTableRow { assignment, results }
            })
            .collect();

        Self { variables, rows }
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`: even a statement without variables has one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&TruthTableRow> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TruthTableRow> {
        self.rows.iter()
    }

    /// Results for `assignment`, if it assigns exactly this table's variables.
    pub fn get(&self, assignment: &VariableAssignment) -> Option<&[bool]> {
        if !assignment.variables().eq(self.variables.iter()) {
            return None;
        }
        self.rows.get(assignment.row_index()).map(|row| row.results.as_slice())
    }

    /// Column of final values, in row order.
    pub fn values(&self) -> Vec<bool> {
        self.rows.iter().map(TruthTableRow::value).collect()
    }

    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(TruthTableRow::value)
    }

    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(TruthTableRow::value)
    }
}

impl Index<usize> for TruthTable {
    type Output = TruthTableRow;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a TruthTable {
    type Item = &'a TruthTableRow;
    type IntoIter = std::slice::Iter<'a, TruthTableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
