//! Error types for the lexer and parser.
//!
//! This module defines the error values returned by the two analysis
//! phases. It includes:
//!
//! - An error structure carrying the offending source position
//! - Lexical error variants (unrecognised character, unterminated string)
//! - Syntax error variants (expected-token mismatches)
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
