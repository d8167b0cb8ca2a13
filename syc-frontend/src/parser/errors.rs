//! Parse error types for the SysY parser

use crate::lexer::Token;
use syc_common::{CompilerError, SourceLocation};
use thiserror::Error;

/// Parse error types specific to the parser
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: Token },

    #[error("Unexpected end of file, expected {expected}")]
    UnexpectedEndOfFile {
        expected: String,
        location: SourceLocation,
    },

    #[error("{message}")]
    InvalidExpression {
        message: String,
        location: SourceLocation,
    },
}

impl From<ParseError> for CompilerError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnexpectedToken { expected, found } => CompilerError::parse_error(
                format!("Expected {}, found {}", expected, found.token_type),
                found.span.start,
            ),
            ParseError::UnexpectedEndOfFile { expected, location } => CompilerError::parse_error(
                format!("Unexpected end of file, expected {}", expected),
                location,
            ),
            ParseError::InvalidExpression { message, location } => {
                CompilerError::parse_error(message, location)
            }
        }
    }
}
