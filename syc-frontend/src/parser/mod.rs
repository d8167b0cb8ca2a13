//! SysY Recursive Descent Parser
//!
//! Parses SysY tokens into an abstract syntax tree.

pub mod declarations;
pub mod errors;
pub mod expressions;
pub mod statements;

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use std::collections::VecDeque;
use syc_common::{CompilerError, SourceLocation, SourceSpan};

pub use errors::ParseError;

/// SysY Parser
pub struct Parser {
    pub(crate) tokens: VecDeque<Token>,
}

impl Parser {
    /// Create a new parser
    pub fn new(tokens: Vec<Token>) -> Self {
        // Comments and newlines carry no syntax; drop them up front
        let filtered_tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| {
                !matches!(
                    t.token_type,
                    TokenType::LineComment(_) | TokenType::BlockComment(_) | TokenType::Newline
                )
            })
            .collect();

        Self {
            tokens: filtered_tokens.into(),
        }
    }

    /// Peek at current token without consuming
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Peek at the token `offset` positions ahead
    pub(crate) fn peek_ahead(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(offset)
    }

    /// Get current token and advance
    pub(crate) fn advance(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Check if current token matches expected type
    pub(crate) fn check(&self, token_type: &TokenType) -> bool {
        if let Some(token) = self.peek() {
            std::mem::discriminant(&token.token_type) == std::mem::discriminant(token_type)
        } else {
            matches!(token_type, TokenType::EndOfFile)
        }
    }

    /// Consume token if it matches expected type
    pub(crate) fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect and consume a specific token type
    pub(crate) fn expect(&mut self, token_type: TokenType, context: &str) -> Result<Token, ParseError> {
        if let Some(token) = self.advance() {
            if std::mem::discriminant(&token.token_type) == std::mem::discriminant(&token_type) {
                Ok(token)
            } else {
                Err(ParseError::UnexpectedToken {
                    expected: format!("{} in {}", token_type, context),
                    found: token,
                })
            }
        } else {
            Err(ParseError::UnexpectedEndOfFile {
                expected: format!("{} in {}", token_type, context),
                location: SourceLocation::new_simple(0, 0),
            })
        }
    }

    /// Expect and consume an identifier, returning its name
    pub(crate) fn expect_identifier(&mut self, context: &str) -> Result<(String, SourceSpan), ParseError> {
        if let Some(token) = self.advance() {
            if let TokenType::Identifier(name) = token.token_type {
                Ok((name, token.span))
            } else {
                Err(ParseError::UnexpectedToken {
                    expected: format!("identifier in {}", context),
                    found: token,
                })
            }
        } else {
            Err(ParseError::UnexpectedEndOfFile {
                expected: format!("identifier in {}", context),
                location: SourceLocation::new_simple(0, 0),
            })
        }
    }

    /// Get current location for error reporting
    pub(crate) fn current_location(&self) -> SourceLocation {
        if let Some(token) = self.peek() {
            token.span.start.clone()
        } else {
            SourceLocation::new_simple(0, 0)
        }
    }

    /// Get the span of the current token
    pub(crate) fn current_span(&self) -> SourceSpan {
        if let Some(token) = self.peek() {
            token.span.clone()
        } else {
            SourceSpan::dummy()
        }
    }

    /// Parse a complete compilation unit
    pub fn parse_comp_unit(&mut self) -> Result<CompUnit, CompilerError> {
        let start_location = self.current_location();
        let mut items = Vec::new();

        while !self.check(&TokenType::EndOfFile) {
            items.push(self.parse_top_level_item()?);
        }

        let end_location = self.current_location();

        Ok(CompUnit {
            items,
            span: SourceSpan::new(start_location, end_location),
        })
    }

    /// Parse one top-level item: a declaration or a function definition.
    ///
    /// `int Ident (` opens a function definition; every other start of
    /// `const`/`int`/`void` is a declaration (void declarations are a parse
    /// error caught inside `parse_function`).
    fn parse_top_level_item(&mut self) -> Result<TopLevelItem, CompilerError> {
        if self.check(&TokenType::Const) {
            return Ok(TopLevelItem::Declaration(self.parse_declaration()?));
        }

        if self.check(&TokenType::Void) {
            return Ok(TopLevelItem::Function(self.parse_function()?));
        }

        if self.check(&TokenType::Int) {
            let opens_function = matches!(
                self.peek_ahead(1).map(|t| &t.token_type),
                Some(TokenType::Identifier(_))
            ) && matches!(
                self.peek_ahead(2).map(|t| &t.token_type),
                Some(TokenType::LeftParen)
            );

            if opens_function {
                return Ok(TopLevelItem::Function(self.parse_function()?));
            }
            return Ok(TopLevelItem::Declaration(self.parse_declaration()?));
        }

        let token = self.advance().ok_or(ParseError::UnexpectedEndOfFile {
            expected: "declaration or function definition".to_string(),
            location: SourceLocation::new_simple(0, 0),
        })?;
        Err(ParseError::UnexpectedToken {
            expected: "declaration or function definition".to_string(),
            found: token,
        }
        .into())
    }
}
