//! Integer literal parsing for the SysY lexer
//!
//! SysY integer constants come in three radixes: decimal, octal with a
//! leading `0`, and hexadecimal with a `0x`/`0X` prefix.

use crate::lexer::{Lexer, TokenType};
use syc_common::CompilerError;

impl Lexer {
    /// Tokenize an integer literal
    pub fn tokenize_integer(&mut self) -> Result<TokenType, CompilerError> {
        let mut number = String::new();

        // Handle hex prefix
        if self.current_char() == Some('0')
            && matches!(self.peek_char(1), Some('x') | Some('X'))
        {
            self.advance(); // '0'
            self.advance(); // 'x' or 'X'

            while let Some(ch) = self.current_char() {
                if ch.is_ascii_hexdigit() {
                    number.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }

            if number.is_empty() {
                return Err(CompilerError::lexer_error(
                    "Invalid hex literal".to_string(),
                    self.current_location(),
                ));
            }

            let value = i64::from_str_radix(&number, 16).map_err(|_| {
                CompilerError::lexer_error(
                    format!("Invalid hex literal: 0x{}", number),
                    self.current_location(),
                )
            })?;

            return Ok(TokenType::IntLiteral(value));
        }

        // Collect the digit run; radix is decided by the leading character
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // A leading zero makes the literal octal ("0" alone is just zero)
        if number.len() > 1 && number.starts_with('0') {
            let value = i64::from_str_radix(&number[1..], 8).map_err(|_| {
                CompilerError::lexer_error(
                    format!("Invalid octal literal: {}", number),
                    self.current_location(),
                )
            })?;
            return Ok(TokenType::IntLiteral(value));
        }

        let value = number.parse::<i64>().map_err(|_| {
            CompilerError::lexer_error(
                format!("Invalid integer literal: {}", number),
                self.current_location(),
            )
        })?;

        Ok(TokenType::IntLiteral(value))
    }
}
