//! Token model: token kinds, their spellings and their binding strength.
//!
//! Every kind owns a table of aliases. Aliases of two or more characters are
//! matched ASCII-case-insensitively (`AND`, `True`); single-character aliases
//! are matched exactly, so `T` or `N` stay free as variable names. The order of
//! [`TokenKind::ALL`] is the tie-break used by the tokenizer whenever several
//! kinds match a prefix of the same word.

use std::fmt;

use crate::ast::BinaryOp;

const NOT: &[&str] = &["¬", "!", "~", "not", "lnot", "\\neg", "\\lnot"];
const AND: &[&str] = &["∧", "&&", "&", "and", "land", "\\land", "\\wedge"];
const OR: &[&str] = &["∨", "||", "or", "lor", "\\lor", "\\vee"];
const NAND: &[&str] = &["|", "↑", "sh", "nand", "lnand"];
const XOR: &[&str] = &["⊕", "^", "xor", "lxor", "oplus", "\\oplus"];
const IMPLIES: &[&str] = &["⇒", "=⇒", "→", "->", "=>", "implies", "\\implies", "\\Rightarrow"];
const IFF: &[&str] = &["⇔", "↔", "<->", "<=>", "iff", "liff", "\\iff", "\\Leftrightarrow"];
const OPEN_PAREN: &[&str] = &["("];
const CLOSE_PAREN: &[&str] = &[")"];
const TRUE: &[&str] = &["true", "⊤", "t", "y", "1"];
const FALSE: &[&str] = &["false", "⊥", "f", "n", "0"];

/// Category of a token.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Not,
    And,
    Or,
    Nand,
    Xor,
    Implies,
    Iff,
    /// An opening parenthesis preceded by the highlight marker.
    MarkedOpenParen,
    OpenParen,
    CloseParen,
    Boolean,
    Variable,
}

impl TokenKind {
    /// All kinds, in matching priority order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Not,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Nand,
        TokenKind::Xor,
        TokenKind::Implies,
        TokenKind::Iff,
        TokenKind::MarkedOpenParen,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Boolean,
        TokenKind::Variable,
    ];

    /// Fixed spellings of this kind.
    ///
    /// Empty for kinds whose spelling is not a fixed table:
    /// [`Variable`][TokenKind::Variable] (any single word character) and
    /// [`MarkedOpenParen`][TokenKind::MarkedOpenParen] (depends on the marker).
    /// [`Boolean`][TokenKind::Boolean] spellings are split into
    /// [`TRUE`] and [`FALSE`] tables, see [`TokenKind::boolean_value`].
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            TokenKind::Not => NOT,
            TokenKind::And => AND,
            TokenKind::Or => OR,
            TokenKind::Nand => NAND,
            TokenKind::Xor => XOR,
            TokenKind::Implies => IMPLIES,
            TokenKind::Iff => IFF,
            TokenKind::OpenParen => OPEN_PAREN,
            TokenKind::CloseParen => CLOSE_PAREN,
            TokenKind::MarkedOpenParen | TokenKind::Boolean | TokenKind::Variable => &[],
        }
    }

    /// Binding strength of an infix kind, `None` for everything else.
    pub fn precedence(self) -> Option<Precedence> {
        match self {
            TokenKind::Iff => Some(Precedence::Iff),
            TokenKind::Implies => Some(Precedence::Implies),
            TokenKind::And | TokenKind::Or | TokenKind::Xor | TokenKind::Nand => Some(Precedence::Connective),
            _ => None,
        }
    }

    /// Operator built by an infix kind.
    pub fn binary_op(self) -> Option<BinaryOp> {
        match self {
            TokenKind::And => Some(BinaryOp::And),
            TokenKind::Or => Some(BinaryOp::Or),
            TokenKind::Xor => Some(BinaryOp::Xor),
            TokenKind::Nand => Some(BinaryOp::Nand),
            TokenKind::Implies => Some(BinaryOp::Implies),
            TokenKind::Iff => Some(BinaryOp::Iff),
            _ => None,
        }
    }

    pub fn is_open_paren(self) -> bool {
        matches!(self, TokenKind::OpenParen | TokenKind::MarkedOpenParen)
    }

    /// Length in bytes of the longest spelling of this kind that `word` starts with.
    pub fn match_prefix(self, word: &str, marker: Option<char>) -> Option<usize> {
        match self {
            TokenKind::Variable => word.chars().next().filter(|&c| is_word_char(c)).map(char::len_utf8),
            TokenKind::MarkedOpenParen => {
                let marker = marker?;
                let rest = word.strip_prefix(marker)?;
                rest.starts_with('(').then(|| marker.len_utf8() + 1)
            }
            TokenKind::Boolean => longest_alias(word, TRUE).max(longest_alias(word, FALSE)),
            kind => longest_alias(word, kind.aliases()),
        }
    }

    /// Whether the whole `word` is a spelling of this kind.
    pub fn match_full(self, word: &str, marker: Option<char>) -> bool {
        !word.is_empty() && self.match_prefix(word, marker) == Some(word.len())
    }

    /// Value of a boolean literal spelling.
    pub fn boolean_value(lexeme: &str) -> Option<bool> {
        if longest_alias(lexeme, TRUE) == Some(lexeme.len()) {
            Some(true)
        } else if longest_alias(lexeme, FALSE) == Some(lexeme.len()) {
            Some(false)
        } else {
            None
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Nand => "NAND",
            TokenKind::Xor => "XOR",
            TokenKind::Implies => "IMPLIES",
            TokenKind::Iff => "IFF",
            TokenKind::MarkedOpenParen => "MARKED_OPEN_PAREN",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Variable => "VARIABLE",
        };
        f.write_str(name)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn longest_alias(word: &str, aliases: &[&str]) -> Option<usize> {
    let bytes = word.as_bytes();
    aliases
        .iter()
        .filter(|alias| {
            let Some(head) = bytes.get(..alias.len()) else {
                return false;
            };
            if alias.chars().count() == 1 {
                head == alias.as_bytes()
            } else {
                head.eq_ignore_ascii_case(alias.as_bytes())
            }
        })
        .map(|alias| alias.len())
        .max()
}

/// Binding strength of infix operators, from loosest to tightest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Precedence {
    Iff,
    Implies,
    /// AND, OR, XOR and NAND share one tier.
    Connective,
    /// Prefix NOT, tighter than every infix operator.
    Not,
}

impl Precedence {
    pub const LOWEST: Precedence = Precedence::Iff;

    /// The next tighter tier, `None` past the last infix tier.
    pub fn tighter(self) -> Option<Precedence> {
        match self {
            Precedence::Iff => Some(Precedence::Implies),
            Precedence::Implies => Some(Precedence::Connective),
            Precedence::Connective => Some(Precedence::Not),
            Precedence::Not => None,
        }
    }
}

/// A token: its kind and the exact text it was matched from.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Index of the token in the stream.
    pub position: usize,
    /// Index of the source word the token was split from.
    pub word: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize, word: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
            word,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.lexeme)
    }
}
