//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (function declarations, blocks, control flow)
//! - Expression parsing (binary ops, postfix chains, literals,
//!   declaration/assignment disambiguation)
//! - Type parsing for annotations (`int`, `list[...]`, `func[[...], ...]`)
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling. It
//! fails fast on the first error and attempts no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
