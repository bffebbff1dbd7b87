use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A recorded diagnostic: what went wrong and at which token.
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

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::NoPrefixHandler { .. } => "NoPrefixHandler",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { expected: TokenKind::Semicolon, .. } => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::ExpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("missing {} token", expected))
            }
            ErrorImpl::NoPrefixHandler { kind: TokenKind::EOF, .. } => {
                ErrorTip::Suggestion(String::from("unexpected end of input"))
            }
            ErrorImpl::NoPrefixHandler { token, .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                token
            )),
            ErrorImpl::NumberParseError { .. } => ErrorTip::Suggestion(String::from(
                "integers must fit in a signed 64-bit value",
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the expression with `let` bindings",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected token kind {expected} but found {found}")]
    ExpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} ({token:?}) found")]
    NoPrefixHandler { kind: TokenKind, token: String },
    #[error("could not parse {token:?} as an integer")]
    NumberParseError { token: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
