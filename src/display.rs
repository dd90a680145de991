//! Text rendering of statements and truth tables.

use std::fmt;

use crate::ast::{BinaryOp, Node, NodeId};
use crate::statement::Statement;
use crate::truth_table::TruthTable;

/// Literal text used for boolean values in rendered tables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DisplayConfig {
    pub true_text: String,
    pub false_text: String,
}

impl DisplayConfig {
    pub fn new(true_text: impl Into<String>, false_text: impl Into<String>) -> Self {
        Self {
            true_text: true_text.into(),
            false_text: false_text.into(),
        }
    }

    pub fn text(&self, value: bool) -> &str {
        if value {
            &self.true_text
        } else {
            &self.false_text
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new("T", "F")
    }
}

impl Statement {
    /// Canonical rendering of the whole statement.
    pub fn render(&self) -> String {
        self.render_node(self.root())
    }

    /// Canonical rendering of a subtree: word operators, every binary
    /// operation parenthesized. The result parses back to an equivalent
    /// statement.
    pub fn render_node(&self, id: NodeId) -> String {
        let mut out = String::new();
        render_into(self, id, &mut out);
        out
    }
}

/// Pending output while rendering a subtree.
enum Step {
    Node(NodeId),
    Operator(BinaryOp),
    Close,
}

fn render_into(statement: &Statement, id: NodeId, out: &mut String) {
    let mut stack = vec![Step::Node(id)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Operator(op) => {
                out.push(' ');
                out.push_str(op.keyword());
                out.push(' ');
            }
            Step::Close => out.push(')'),
            Step::Node(id) => match statement.ast().node(id) {
                Node::Literal { value, .. } => out.push_str(if *value { "true" } else { "false" }),
                Node::Variable(variable) => out.push_str(variable.name()),
                Node::Not { operand, .. } => {
                    out.push_str("not ");
                    stack.push(Step::Node(*operand));
                }
                Node::Binary { op, left, right, .. } => {
                    out.push('(');
                    stack.push(Step::Close);
                    stack.push(Step::Node(*right));
                    stack.push(Step::Operator(*op));
                    stack.push(Step::Node(*left));
                }
            },
        }
    }
}

impl TruthTable {
    /// Plain-text table: one column per variable, one per marked
    /// sub-expression, and a last column for the statement itself.
    pub fn render(&self, statement: &Statement, config: &DisplayConfig) -> String {
        let mut headers: Vec<String> = self.variables().iter().map(|v| v.name().to_string()).collect();
        headers.extend(statement.sub_expressions().iter().map(|&id| statement.render_node(id)));
        headers.push(statement.source().trim().to_string());

        let widths: Vec<usize> = headers
            .iter()
            .map(|h| {
                h.chars()
                    .count()
                    .max(config.true_text.chars().count())
                    .max(config.false_text.chars().count())
            })
            .collect();

        let mut out = String::new();
        push_line(&mut out, headers.iter().map(String::as_str), &widths);
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        push_line(&mut out, rule.iter().map(String::as_str), &widths);
        for row in self.iter() {
            let cells = row
                .assignment
                .values()
                .chain(row.results.iter().copied())
                .map(|value| config.text(value));
            push_line(&mut out, cells, &widths);
        }
        out
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

impl fmt::Display for TruthTable {
    /// Rows as `assignment => results` lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = DisplayConfig::default();
        for row in self.iter() {
            let results: Vec<&str> = row.results.iter().map(|&value| config.text(value)).collect();
            writeln!(f, "{} => {}", row.assignment, results.join(" "))?;
        }
        Ok(())
    }
}
