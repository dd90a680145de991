//! # proptable: propositional logic in Rust
//!
//! **`proptable`** compiles textual propositional-logic expressions into a syntax tree,
//! evaluates them under variable assignments, and enumerates complete truth tables.
//!
//! ## Syntax
//!
//! Operators can be written in ASCII, as words, or with Unicode symbols.
//! From the loosest binding to the tightest:
//!
//! | Operator | Spellings |
//! |----------|-----------|
//! | IFF      | `⇔` `↔` `<->` `<=>` `iff` `liff` |
//! | IMPLIES  | `⇒` `=⇒` `→` `->` `=>` `implies` |
//! | AND      | `∧` `&&` `&` `and` `land` |
//! | OR       | `∨` `\|\|` `or` `lor` |
//! | XOR      | `⊕` `^` `xor` `lxor` `oplus` |
//! | NAND     | `\|` `↑` `sh` `nand` `lnand` |
//! | NOT      | `¬` `!` `~` `not` `lnot` |
//!
//! AND, OR, XOR and NAND share one tier; every infix tier associates to the left.
//! Literals are `true`/`false` and `t`/`f`, `y`/`n`, `1`/`0`.
//! Spellings of two or more letters ignore ASCII case (`AND`, `True`), single
//! letters do not: `T` or `N` is a variable.
//! Any other single word character is a variable.
//!
//! A group written as `*( ... )` is *marked*: its value gets its own column in
//! the truth table. The marker character is set in [`Config`][crate::config::Config].
//!
//! ## Basic Usage
//!
//! ```rust
//! use proptable::parse;
//!
//! let statement = parse("p and *(q or r)").unwrap();
//! assert_eq!(statement.variables().len(), 3);
//!
//! // Default assignment: every variable is true.
//! assert!(statement.evaluate_default());
//! assert_eq!(statement.evaluate_with([("q", false), ("r", false)]), Ok(false));
//!
//! let table = statement.truth_table();
//! assert_eq!(table.len(), 8);
//! // Marked sub-expression first, then the statement value.
//! assert_eq!(table[0].results, vec![true, true]);
//! ```

pub mod assignment;
pub mod ast;
pub mod config;
pub mod display;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod statement;
pub mod token;
pub mod truth_table;

pub use crate::assignment::VariableAssignment;
pub use crate::ast::{Ast, BinaryOp, Node, NodeId, Variable};
pub use crate::config::Config;
pub use crate::display::DisplayConfig;
pub use crate::error::{CompileError, EvaluationError};
pub use crate::parser::{parse, parse_with};
pub use crate::statement::Statement;
pub use crate::truth_table::{TruthTable, TruthTableRow};
