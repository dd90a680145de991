//! Abstract syntax tree.
//!
//! Nodes live in an [`Ast`] arena and refer to their children by [`NodeId`].
//! The arena is filled bottom-up, so every child is stored before its parent
//! and the nodes of one subtree occupy a contiguous range ending at the
//! subtree root. This makes a single forward pass over the arena a valid
//! evaluation order (see [`Ast::evaluate_all`]).

use std::fmt;
use std::sync::Arc;

use crate::assignment::VariableAssignment;
use crate::error::EvaluationError;

/// A named atomic proposition. Two variables are equal iff their names are.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Variable {
    name: Arc<str>,
}

impl Variable {
    pub fn new(name: &str) -> Self {
        Self { name: Arc::from(name) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Index of a node in its [`Ast`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Nand,
    Implies,
    Iff,
}

impl BinaryOp {
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOp::And => left && right,
            BinaryOp::Or => left || right,
            BinaryOp::Xor => left != right,
            BinaryOp::Nand => !(left && right),
            BinaryOp::Implies => !left || right,
            BinaryOp::Iff => left == right,
        }
    }

    /// Canonical word spelling, accepted back by the tokenizer.
    pub fn keyword(self) -> &'static str {
        match self {
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Xor => "xor",
            BinaryOp::Nand => "nand",
            BinaryOp::Implies => "implies",
            BinaryOp::Iff => "iff",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    Literal { value: bool, lexeme: String },
    Variable(Variable),
    Not { lexeme: String, operand: NodeId },
    Binary {
        op: BinaryOp,
        lexeme: String,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    /// Source spelling of the token this node was built from.
    pub fn lexeme(&self) -> &str {
        match self {
            Node::Literal { lexeme, .. } | Node::Not { lexeme, .. } | Node::Binary { lexeme, .. } => lexeme,
            Node::Variable(variable) => variable.name(),
        }
    }

    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Node::Literal { .. } | Node::Variable(_) => vec![],
            Node::Not { operand, .. } => vec![*operand],
            Node::Binary { left, right, .. } => vec![*left, *right],
        }
    }

    /// Whether both nodes have the same variant and lexeme, ignoring children.
    fn same_shape(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Literal { value: a, lexeme: x }, Node::Literal { value: b, lexeme: y }) => a == b && x == y,
            (Node::Variable(a), Node::Variable(b)) => a == b,
            (Node::Not { lexeme: x, .. }, Node::Not { lexeme: y, .. }) => x == y,
            (Node::Binary { op: a, lexeme: x, .. }, Node::Binary { op: b, lexeme: y, .. }) => a == b && x == y,
            _ => false,
        }
    }
}

/// Arena of nodes, children stored before parents.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node whose children are already in the arena.
    ///
    /// # Panics
    ///
    /// Panics if a child id does not refer to an existing node.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        for child in node.children() {
            assert!(child < id, "child {} must precede its parent {}", child, id);
        }
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Evaluate the subtree rooted at `id`.
    ///
    /// Both operands of a binary node are always evaluated, left first.
    /// Uses an explicit work stack, so deep left-leaning chains do not grow
    /// the call stack.
    pub fn evaluate(&self, id: NodeId, assignment: &VariableAssignment) -> Result<bool, EvaluationError> {
        let mut values: Vec<bool> = Vec::new();
        let mut stack: Vec<(NodeId, bool)> = vec![(id, false)];

        while let Some((id, expanded)) = stack.pop() {
            match (self.node(id), expanded) {
                (Node::Literal { value, .. }, _) => values.push(*value),
                (Node::Variable(variable), _) => values.push(assignment.get(variable)?),
                (Node::Not { operand, .. }, false) => {
                    stack.push((id, true));
                    stack.push((*operand, false));
                }
                (Node::Not { .. }, true) => {
                    let a = values.pop().unwrap();
                    values.push(!a);
                }
                (Node::Binary { left, right, .. }, false) => {
                    stack.push((id, true));
                    stack.push((*right, false));
                    stack.push((*left, false));
                }
                (Node::Binary { op, .. }, true) => {
                    let b = values.pop().unwrap();
                    let a = values.pop().unwrap();
                    values.push(op.apply(a, b));
                }
            }
        }

        Ok(values.pop().unwrap())
    }

    /// Evaluate every node of the arena in one forward pass.
    ///
    /// The result is indexed by [`NodeId::index`].
    pub fn evaluate_all(&self, assignment: &VariableAssignment) -> Result<Vec<bool>, EvaluationError> {
        let mut values: Vec<bool> = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.iter() {
            let value = match node {
                Node::Literal { value, .. } => *value,
                Node::Variable(variable) => assignment.get(variable)?,
                Node::Not { operand, .. } => !values[operand.0],
                Node::Binary { op, left, right, .. } => op.apply(values[left.0], values[right.0]),
            };
            values.push(value);
        }
        Ok(values)
    }

    /// Structural equality of the subtree at `id` with the subtree at
    /// `other_id` in `other`: same variants, same lexemes, equal children.
    pub fn same_structure(&self, id: NodeId, other: &Ast, other_id: NodeId) -> bool {
        let mut stack = vec![(id, other_id)];
        while let Some((a, b)) = stack.pop() {
            let (x, y) = (self.node(a), other.node(b));
            if !x.same_shape(y) {
                return false;
            }
            stack.extend(x.children().into_iter().zip(y.children()));
        }
        true
    }

    /// Variables referenced in the subtree at `id`, in first-occurrence order.
    pub fn variables(&self, id: NodeId) -> Vec<Variable> {
        let mut result: Vec<Variable> = Vec::new();
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if let Node::Variable(variable) = node {
                if !result.contains(variable) {
                    result.push(variable.clone());
                }
            }
            stack.extend(node.children().into_iter().rev());
        }
        result
    }
}
