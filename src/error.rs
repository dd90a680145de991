//! Error types for compilation and evaluation.
//!
//! The two taxonomies are disjoint: [`CompileError`] is raised while turning
//! text into a [`Statement`][crate::statement::Statement], and
//! [`EvaluationError`] is raised while querying or building assignments.

use std::fmt;

use crate::token::{Token, TokenKind};

/// Error raised by the tokenizer or the parser.
///
/// Every `position` is the index of the offending source word, as split by
/// [`Lexer::words`][crate::lexer::Lexer::words]. For
/// [`UnexpectedEndOfInput`][CompileError::UnexpectedEndOfInput] it is the
/// number of words.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CompileError {
    /// No token kind matches the word, not even a prefix of it.
    UnknownToken { word: String, position: usize },
    /// A specific token was required, but another one was found.
    TokenMismatch {
        expected: TokenKind,
        found: Token,
        position: usize,
    },
    /// The token stream ended while an operand or a closing token was expected.
    UnexpectedEndOfInput { position: usize },
    /// The token cannot appear here, e.g. a bare infix operator.
    MisplacedToken { token: Token, position: usize },
    /// Groups or negations are nested deeper than the configured limit.
    NestingTooDeep { limit: usize, position: usize },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnknownToken { word, position } => {
                write!(f, "unknown token '{}' in word {}", word, position)
            }
            CompileError::TokenMismatch {
                expected,
                found,
                position,
            } => write!(
                f,
                "expected {} at position {}, found {} '{}'",
                expected, position, found.kind, found.lexeme
            ),
            CompileError::UnexpectedEndOfInput { position } => {
                write!(f, "unexpected end of input at position {}", position)
            }
            CompileError::MisplacedToken { token, position } => write!(
                f,
                "misplaced {} '{}' at position {}",
                token.kind, token.lexeme, position
            ),
            CompileError::NestingTooDeep { limit, position } => write!(
                f,
                "nesting deeper than {} levels at position {}",
                limit, position
            ),
        }
    }
}

impl std::error::Error for CompileError {}

/// Error raised when a variable is missing from an assignment or does not
/// belong to the statement.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum EvaluationError {
    UndefinedVariable { name: String },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::UndefinedVariable { name } => write!(f, "undefined variable '{}'", name),
        }
    }
}

impl std::error::Error for EvaluationError {}
