//! Tokenizer.
//!
//! The input is first split into words: whitespace separates words, and
//! parentheses and the prefix NOT symbols always stand alone. A highlight
//! marker immediately before `(` stays attached to it, so that `*(` is a
//! single word. This takes priority over the NOT split, so `!` can be the
//! marker and still negate when it is not followed by `(`.
//!
//! Each word is then matched in two steps:
//!
//! 1. **Full-word match**: the first kind (in [`TokenKind::ALL`] order) that
//!    spells the whole word wins.
//! 2. **Prefix fallback**: otherwise, the first kind that spells a prefix of
//!    the word wins (its longest such spelling is taken), and the remainder
//!    is matched again from step 1. This splits words like `¬p` or `p&&q`.

use log::{debug, trace};

use crate::error::CompileError;
use crate::token::{Token, TokenKind};

const NOT_SYMBOLS: [char; 3] = ['¬', '!', '~'];

/// Splits input text into tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexer {
    marker: Option<char>,
}

impl Lexer {
    /// Create a lexer recognizing `marker` before `(` as a marked group.
    pub fn new(marker: Option<char>) -> Self {
        Self { marker }
    }

    pub fn marker(&self) -> Option<char> {
        self.marker
    }

    /// Split `text` into candidate words.
    pub fn words(&self, text: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut current = String::new();

        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if self.marker == Some(c) && chars.next_if_eq(&'(').is_some() {
                flush(&mut current, &mut words);
                words.push(format!("{}(", c));
            } else if c.is_whitespace() {
                flush(&mut current, &mut words);
            } else if c == '(' || c == ')' || NOT_SYMBOLS.contains(&c) {
                flush(&mut current, &mut words);
                words.push(c.to_string());
            } else {
                current.push(c);
            }
        }
        flush(&mut current, &mut words);

        words
    }

    /// Tokenize `text`.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>, CompileError> {
        let words = self.words(text);
        debug!("tokenize: {} words in {:?}", words.len(), text);

        let mut tokens = Vec::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            self.tokenize_word(word, index, &mut tokens)?;
        }

        debug!("tokenize: {} tokens", tokens.len());
        Ok(tokens)
    }

    fn tokenize_word(&self, word: &str, index: usize, tokens: &mut Vec<Token>) -> Result<(), CompileError> {
        let mut rest = word;

        while !rest.is_empty() {
            if let Some(kind) = TokenKind::ALL.into_iter().find(|k| k.match_full(rest, self.marker)) {
                self.push(tokens, kind, rest, index);
                break;
            }

            let prefix = TokenKind::ALL
                .into_iter()
                .find_map(|k| self.match_prefix(k, rest).map(|len| (k, len)));
            match prefix {
                Some((kind, len)) => {
                    self.push(tokens, kind, &rest[..len], index);
                    rest = &rest[len..];
                }
                None => {
                    return Err(CompileError::UnknownToken {
                        word: word.to_string(),
                        position: index,
                    });
                }
            }
        }

        Ok(())
    }

    fn match_prefix(&self, kind: TokenKind, word: &str) -> Option<usize> {
        kind.match_prefix(word, self.marker).filter(|&len| len > 0)
    }

    fn push(&self, tokens: &mut Vec<Token>, kind: TokenKind, lexeme: &str, word: usize) {
        let token = Token::new(kind, lexeme, tokens.len(), word);
        trace!("token {} = {}", token.position, token);
        tokens.push(token);
    }
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
