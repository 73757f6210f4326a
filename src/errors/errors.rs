use std::fmt::Display;

use thiserror::Error;

use crate::Position;

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

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::MalformedChar { .. } => "MalformedChar",
            ErrorImpl::MalformedFloat { .. } => "MalformedFloat",
            ErrorImpl::ExpectedAmpersand => "ExpectedAmpersand",
            ErrorImpl::ExpectedPipe => "ExpectedPipe",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
            ErrorImpl::MalformedChar { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid character literal: `{}`, expected a single character between quotes",
                lexeme
            )),
            ErrorImpl::MalformedFloat { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid float: `{}`, a decimal point must be followed by a digit",
                lexeme
            )),
            ErrorImpl::ExpectedAmpersand => {
                ErrorTip::Suggestion(String::from("Expected `&` after `&`, did you mean `&&`?"))
            }
            ErrorImpl::ExpectedPipe => {
                ErrorTip::Suggestion(String::from("Expected `|` after `|`, did you mean `||`?"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("malformed character literal: {lexeme:?}")]
    MalformedChar { lexeme: String },
    #[error("malformed float: {lexeme:?}")]
    MalformedFloat { lexeme: String },
    #[error("expected '&' after '&'")]
    ExpectedAmpersand,
    #[error("expected '|' after '|'")]
    ExpectedPipe,
}
