use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::assignment::VariableAssignment;
use crate::ast::{Ast, NodeId, Variable};
use crate::error::{CompileError, EvaluationError};
use crate::parser::parse;
use crate::truth_table::TruthTable;

/// A compiled, immutable logical expression.
#[derive(Debug, Clone)]
pub struct Statement {
    source: String,
    ast: Ast,
    root: NodeId,
    /// Sorted by name, no duplicates.
    variables: Vec<Variable>,
    /// Marked groups, in the order their closing parenthesis was reached.
    sub_expressions: Vec<NodeId>,
}

impl Statement {
    pub(crate) fn new(
        source: String,
        ast: Ast,
        root: NodeId,
        variables: Vec<Variable>,
        sub_expressions: Vec<NodeId>,
    ) -> Self {
        Self {
            source,
            ast,
            root,
            variables,
            sub_expressions,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Canonical variable list: deduplicated and sorted by name.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables
            .binary_search_by(|v| v.name().cmp(name))
            .ok()
            .map(|i| &self.variables[i])
    }

    pub fn sub_expressions(&self) -> &[NodeId] {
        &self.sub_expressions
    }

    /// Every variable set to `true`.
    pub fn default_assignment(&self) -> VariableAssignment {
        VariableAssignment::all_true(&self.variables)
    }

    /// The default assignment with some values overridden by name.
    pub fn assignment<S, I>(&self, overrides: I) -> Result<VariableAssignment, EvaluationError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, bool)>,
    {
        VariableAssignment::with_overrides(&self.variables, overrides)
    }

    /// An assignment holding only the named variables.
    pub fn partial_assignment<S, I>(&self, pairs: I) -> Result<VariableAssignment, EvaluationError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, bool)>,
    {
        VariableAssignment::from_pairs(&self.variables, pairs)
    }

    pub fn evaluate(&self, assignment: &VariableAssignment) -> Result<bool, EvaluationError> {
        self.ast.evaluate(self.root, assignment)
    }

    /// Evaluate under the all-true assignment.
    pub fn evaluate_default(&self) -> bool {
        let assignment = self.default_assignment();
        self.ast
            .evaluate(self.root, &assignment)
            .expect("default assignment covers every variable")
    }

    /// Evaluate under the default assignment with some values overridden by name.
    pub fn evaluate_with<S, I>(&self, overrides: I) -> Result<bool, EvaluationError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, bool)>,
    {
        let assignment = self.assignment(overrides)?;
        debug!("evaluate {:?} under {}", self.source, assignment);
        self.evaluate(&assignment)
    }

    /// Values of the marked sub-expressions followed by the value of the
    /// whole statement.
    pub fn evaluate_row(&self, assignment: &VariableAssignment) -> Result<Vec<bool>, EvaluationError> {
        let values = self.ast.evaluate_all(assignment)?;
        Ok(self
            .sub_expressions
            .iter()
            .chain(std::iter::once(&self.root))
            .map(|id| values[id.index()])
            .collect())
    }

    pub fn truth_table(&self) -> TruthTable {
        TruthTable::new(self)
    }

    /// Whether both statements have structurally equal syntax trees.
    pub fn structurally_eq(&self, other: &Statement) -> bool {
        self.ast.same_structure(self.root, &other.ast, other.root)
    }
}

impl FromStr for Statement {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
