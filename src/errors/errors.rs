use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Broad classification of an error.
///
/// Lexical errors come out of `tokenize`; syntax errors come out of the
/// parser. Both fail the whole run on first occurrence - there is no
/// recovery or batching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorKind::Lexical,
            ErrorImpl::UnterminatedString => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. } => ErrorKind::Syntax,
            ErrorImpl::ExpectedToken { .. } => ErrorKind::Syntax,
            ErrorImpl::InvalidAssignmentTarget { .. } => ErrorKind::Syntax,
            ErrorImpl::NumberParseError { .. } => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Expected `\"` to terminate the string"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::ExpectedToken { expected, received } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found `{}`",
                expected, received
            )),
            ErrorImpl::InvalidAssignmentTarget { token } => ErrorTip::Suggestion(format!(
                "Only a plain identifier can appear before `{}`",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected:?}, found {received:?}")]
    ExpectedToken { expected: String, received: String },
    #[error("invalid target for {token:?}: expected an identifier")]
    InvalidAssignmentTarget { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
