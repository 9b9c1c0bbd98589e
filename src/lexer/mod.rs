//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using regex patterns in maximal-munch order
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
