//! Precedence-climbing recursive-descent parser.
//!
//! Grammar, from the loosest tier to the tightest:
//!
//! ```text
//! expr(IFF)        = expr(IMPLIES) ( IFF expr(IMPLIES) )*
//! expr(IMPLIES)    = expr(CONNECTIVE) ( IMPLIES expr(CONNECTIVE) )*
//! expr(CONNECTIVE) = factor ( (AND | OR | XOR | NAND) factor )*
//! factor           = BOOLEAN | VARIABLE | NOT factor | '(' expr(IFF) ')'
//! ```
//!
//! Every infix tier folds left: `a => b => c` is `(a => b) => c`. Since the
//! folding is a loop, only groups and negations grow the call stack, and
//! their nesting is bounded by [`Config::max_depth`].

use std::collections::HashMap;

use log::{debug, trace};

use crate::ast::{Ast, Node, NodeId, Variable};
use crate::config::Config;
use crate::error::CompileError;
use crate::lexer::Lexer;
use crate::statement::Statement;
use crate::token::{Precedence, Token, TokenKind};

/// Compile `text` with the default [`Config`].
pub fn parse(text: &str) -> Result<Statement, CompileError> {
    parse_with(text, &Config::default())
}

/// Compile `text` with an explicit [`Config`].
pub fn parse_with(text: &str, config: &Config) -> Result<Statement, CompileError> {
    let tokens = Lexer::new(config.highlight_marker).tokenize(text)?;
    Parser::new(tokens, config.max_depth).parse(text)
}

pub struct Parser {
    tokens: Vec<Token>,
    /// Number of source words the tokens were split from.
    words: usize,
    index: usize,
    depth: usize,
    max_depth: usize,
    ast: Ast,
    /// Variables in first-occurrence order.
    encountered: Vec<Variable>,
    lookup: HashMap<String, Variable>,
    sub_expressions: Vec<NodeId>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, max_depth: usize) -> Self {
        let words = tokens.last().map_or(0, |token| token.word + 1);
        Self {
            tokens,
            words,
            index: 0,
            depth: 0,
            max_depth,
            ast: Ast::new(),
            encountered: Vec::new(),
            lookup: HashMap::new(),
            sub_expressions: Vec::new(),
        }
    }

    /// Parse the whole token stream into a statement for `source`.
    pub fn parse(mut self, source: &str) -> Result<Statement, CompileError> {
        debug!("parse({:?}): {} tokens", source, self.tokens.len());

        let root = self.expression(Precedence::LOWEST)?;
        if let Some(token) = self.advance() {
            return Err(CompileError::MisplacedToken {
                position: token.word,
                token,
            });
        }

        let mut variables = self.encountered;
        variables.sort();
        debug!(
            "parse: {} nodes, {} variables, {} marked sub-expressions",
            self.ast.len(),
            variables.len(),
            self.sub_expressions.len()
        );

        Ok(Statement::new(
            source.to_string(),
            self.ast,
            root,
            variables,
            self.sub_expressions,
        ))
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn end_of_input(&self) -> CompileError {
        CompileError::UnexpectedEndOfInput {
            position: self.words,
        }
    }

    fn expression(&mut self, precedence: Precedence) -> Result<NodeId, CompileError> {
        match precedence.tighter() {
            None => self.factor(),
            Some(tighter) => self.infix_chain(precedence, |parser| parser.expression(tighter)),
        }
    }

    /// `operand (op operand)*` for the operators of one tier, folded left.
    fn infix_chain<F>(&mut self, precedence: Precedence, mut operand: F) -> Result<NodeId, CompileError>
    where
        F: FnMut(&mut Self) -> Result<NodeId, CompileError>,
    {
        let mut left = operand(self)?;

        while let Some(op) = self
            .peek()
            .filter(|token| token.kind.precedence() == Some(precedence))
            .and_then(|token| token.kind.binary_op())
        {
            let token = self.advance().ok_or_else(|| self.end_of_input())?;
            trace!("infix {} at {}", token, token.position);
            let right = operand(self)?;
            left = self.ast.push(Node::Binary {
                op,
                lexeme: token.lexeme,
                left,
                right,
            });
        }

        Ok(left)
    }

    fn factor(&mut self) -> Result<NodeId, CompileError> {
        let token = self.advance().ok_or_else(|| self.end_of_input())?;

        match token.kind {
            TokenKind::Boolean => match TokenKind::boolean_value(&token.lexeme) {
                Some(value) => Ok(self.ast.push(Node::Literal {
                    value,
                    lexeme: token.lexeme,
                })),
                None => Err(CompileError::MisplacedToken {
                    position: token.word,
                    token,
                }),
            },
            TokenKind::Variable => {
                let variable = self.intern(&token.lexeme);
                Ok(self.ast.push(Node::Variable(variable)))
            }
            TokenKind::Not => {
                self.enter(token.word)?;
                let operand = self.factor()?;
                self.depth -= 1;
                Ok(self.ast.push(Node::Not {
                    lexeme: token.lexeme,
                    operand,
                }))
            }
            kind if kind.is_open_paren() => {
                self.enter(token.word)?;
                let inner = self.expression(Precedence::LOWEST)?;
                self.expect(TokenKind::CloseParen)?;
                self.depth -= 1;
                if token.kind == TokenKind::MarkedOpenParen {
                    trace!("marked sub-expression {} opened at {}", inner, token.position);
                    self.sub_expressions.push(inner);
                }
                Ok(inner)
            }
            _ => Err(CompileError::MisplacedToken {
                position: token.word,
                token,
            }),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, CompileError> {
        let token = self.advance().ok_or_else(|| self.end_of_input())?;
        if token.kind != kind {
            return Err(CompileError::TokenMismatch {
                expected: kind,
                position: token.word,
                found: token,
            });
        }
        Ok(token)
    }

    fn enter(&mut self, position: usize) -> Result<(), CompileError> {
        if self.depth >= self.max_depth {
            return Err(CompileError::NestingTooDeep {
                limit: self.max_depth,
                position,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// The variable named `name`, created on first occurrence.
    fn intern(&mut self, name: &str) -> Variable {
        if let Some(variable) = self.lookup.get(name) {
            return variable.clone();
        }
        let variable = Variable::new(name);
        trace!("new variable {}", variable);
        self.lookup.insert(name.to_string(), variable.clone());
        self.encountered.push(variable.clone());
        variable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::ast::BinaryOp;

    fn root_op(statement: &Statement) -> Option<BinaryOp> {
        match statement.ast().node(statement.root()) {
            Node::Binary { op, .. } => Some(*op),
            _ => None,
        }
    }

    #[test]
    fn test_parse_single_variable() {
        let s = parse("p").unwrap();
        assert_eq!(s.ast().len(), 1);
        assert_eq!(s.variables(), &[Variable::new("p")]);
        assert!(s.sub_expressions().is_empty());
    }

    #[test]
    fn test_precedence_tiers() {
        assert_eq!(root_op(&parse("p or q implies v").unwrap()), Some(BinaryOp::Implies));
        assert_eq!(root_op(&parse("p implies q iff v").unwrap()), Some(BinaryOp::Iff));
        assert_eq!(root_op(&parse("p iff q implies v").unwrap()), Some(BinaryOp::Iff));
        assert_eq!(root_op(&parse("not p and q").unwrap()), Some(BinaryOp::And));
    }

    #[test]
    fn test_same_tier_folds_left() {
        let s = parse("p and q or r").unwrap();
        let Node::Binary { op, left, .. } = s.ast().node(s.root()) else {
            panic!("expected binary root");
        };
        assert_eq!(*op, BinaryOp::Or);
        assert!(matches!(s.ast().node(*left), Node::Binary { op: BinaryOp::And, .. }));

        let s = parse("p implies q implies r").unwrap();
        let Node::Binary { left, right, .. } = s.ast().node(s.root()) else {
            panic!("expected binary root");
        };
        assert!(matches!(s.ast().node(*left), Node::Binary { op: BinaryOp::Implies, .. }));
        assert!(matches!(s.ast().node(*right), Node::Variable(_)));
    }

    #[test]
    fn test_not_binds_tightest() {
        let s = parse("¬¬p ⊕ q").unwrap();
        let Node::Binary { op, left, .. } = s.ast().node(s.root()) else {
            panic!("expected binary root");
        };
        assert_eq!(*op, BinaryOp::Xor);
        let Node::Not { operand, .. } = s.ast().node(*left) else {
            panic!("expected negation");
        };
        assert!(matches!(s.ast().node(*operand), Node::Not { .. }));
    }

    #[test]
    fn test_variables_deduplicated_and_sorted() {
        let s = parse("r and p or r and q").unwrap();
        let names: Vec<&str> = s.variables().iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["p", "q", "r"]);
    }

    #[test]
    fn test_marked_sub_expressions_innermost_first() {
        let s = parse("*(p and *(q or r)) implies *(s)").unwrap();
        let rendered: Vec<String> = s.sub_expressions().iter().map(|&id| s.render_node(id)).collect();
        assert_eq!(rendered, vec!["(q or r)", "(p and (q or r))", "s"]);
    }

    #[test]
    fn test_marker_disabled() {
        let config = Config::default().with_highlight_marker(None);
        assert!(matches!(
            parse_with("*(p)", &config),
            Err(CompileError::UnknownToken { .. })
        ));
        let s = parse_with("(p) and q", &config).unwrap();
        assert!(s.sub_expressions().is_empty());
    }

    #[test]
    fn test_custom_marker() {
        let config = Config::default().with_highlight_marker(Some('#'));
        let s = parse_with("#(p and q) or r", &config).unwrap();
        assert_eq!(s.sub_expressions().len(), 1);
    }

    #[test]
    fn test_not_symbol_as_marker() {
        let config = Config::default().with_highlight_marker(Some('!'));
        let s = parse_with("!(p) and q", &config).unwrap();
        assert_eq!(s.sub_expressions().len(), 1);
        assert_eq!(s.render(), "(p and q)");

        let s = parse_with("!p and !!(q)", &config).unwrap();
        assert_eq!(s.sub_expressions().len(), 1);
        assert_eq!(s.render(), "(not p and not q)");
    }

    #[test]
    fn test_uppercase_single_letters_are_variables() {
        let s = parse("M and N").unwrap();
        let names: Vec<&str> = s.variables().iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["M", "N"]);

        let s = parse("T or F").unwrap();
        assert_eq!(s.variables().len(), 2);
        assert!(matches!(s.ast().node(s.root()), Node::Binary { op: BinaryOp::Or, .. }));

        let s = parse("TRUE AND n").unwrap();
        assert!(s.variables().is_empty());
    }

    #[test]
    fn test_unexpected_end_of_input() {
        assert_eq!(
            parse("p and").unwrap_err(),
            CompileError::UnexpectedEndOfInput { position: 2 }
        );
        assert_eq!(
            parse("").unwrap_err(),
            CompileError::UnexpectedEndOfInput { position: 0 }
        );
        assert_eq!(
            parse("(p or q").unwrap_err(),
            CompileError::UnexpectedEndOfInput { position: 4 }
        );
        assert!(matches!(parse("not"), Err(CompileError::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn test_token_mismatch() {
        let err = parse("(p q)").unwrap_err();
        assert_eq!(
            err,
            CompileError::TokenMismatch {
                expected: TokenKind::CloseParen,
                found: Token::new(TokenKind::Variable, "q", 2, 2),
                position: 2,
            }
        );
    }

    #[test]
    fn test_misplaced_token() {
        assert_eq!(
            parse("and p").unwrap_err(),
            CompileError::MisplacedToken {
                token: Token::new(TokenKind::And, "and", 0, 0),
                position: 0,
            }
        );
        assert!(matches!(
            parse("p )").unwrap_err(),
            CompileError::MisplacedToken { position: 1, .. }
        ));
        assert!(matches!(
            parse("p q").unwrap_err(),
            CompileError::MisplacedToken { position: 1, .. }
        ));
    }

    #[test]
    fn test_positions_are_word_indices() {
        assert_eq!(
            parse("p&&q )").unwrap_err(),
            CompileError::MisplacedToken {
                token: Token::new(TokenKind::CloseParen, ")", 3, 1),
                position: 1,
            }
        );
        assert_eq!(
            parse("(p&&q r)").unwrap_err(),
            CompileError::TokenMismatch {
                expected: TokenKind::CloseParen,
                found: Token::new(TokenKind::Variable, "r", 4, 2),
                position: 2,
            }
        );
        assert_eq!(
            parse("p&&q and").unwrap_err(),
            CompileError::UnexpectedEndOfInput { position: 2 }
        );
        let config = Config::default().with_max_depth(1);
        assert_eq!(
            parse_with("p&&q or ¬¬r", &config).unwrap_err(),
            CompileError::NestingTooDeep { limit: 1, position: 3 }
        );
    }

    #[test]
    fn test_nesting_limit() {
        let config = Config::default().with_max_depth(3);
        assert!(parse_with("((( p )))", &config).is_ok());
        assert_eq!(
            parse_with("(((( p ))))", &config).unwrap_err(),
            CompileError::NestingTooDeep { limit: 3, position: 3 }
        );
        assert!(matches!(
            parse_with("!!!!p", &config),
            Err(CompileError::NestingTooDeep { .. })
        ));
    }

    #[test]
    fn test_long_chain_does_not_hit_nesting_limit() {
        let text = vec!["p"; 5000].join(" and ");
        let s = parse(&text).unwrap();
        assert_eq!(s.ast().len(), 2 * 5000 - 1);
        assert_eq!(s.variables().len(), 1);
    }
}
