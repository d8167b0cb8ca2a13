//! SysY Lexer
//!
//! Tokenizes SysY source code into a stream of tokens.
//! Handles keywords, operators, integer literals, identifiers, and comments.

pub mod literals;
pub mod token;

pub use token::{Token, TokenType};

use std::collections::HashMap;
use syc_common::{CompilerError, SourceLocation, SourceSpan};

/// SysY Lexer
pub struct Lexer {
    pub(crate) input: Vec<char>,
    pub(crate) position: usize,
    pub(crate) line: u32,
    pub(crate) column: u32,
    keywords: HashMap<String, TokenType>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            keywords: HashMap::new(),
        };

        lexer.initialize_keywords();
        lexer
    }

    /// Initialize keyword map
    fn initialize_keywords(&mut self) {
        let keywords = [
            ("const", TokenType::Const),
            ("int", TokenType::Int),
            ("void", TokenType::Void),
            ("if", TokenType::If),
            ("else", TokenType::Else),
            ("while", TokenType::While),
            ("break", TokenType::Break),
            ("continue", TokenType::Continue),
            ("return", TokenType::Return),
        ];

        for (keyword, token_type) in keywords {
            self.keywords.insert(keyword.to_string(), token_type);
        }
    }

    /// Get current character
    pub(crate) fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    pub(crate) fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Advance to next character
    pub(crate) fn advance(&mut self) -> Option<char> {
        if let Some(ch) = self.current_char() {
            self.position += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    /// Get current location
    pub(crate) fn current_location(&self) -> SourceLocation {
        SourceLocation::new_simple(self.line, self.column)
    }

    /// Skip whitespace (except newlines)
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() && ch != '\n' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Tokenize an identifier or keyword
    fn tokenize_identifier(&mut self) -> TokenType {
        let mut identifier = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if let Some(keyword_token) = self.keywords.get(&identifier) {
            keyword_token.clone()
        } else {
            TokenType::Identifier(identifier)
        }
    }

    /// Tokenize a line comment (after the leading //)
    fn tokenize_line_comment(&mut self) -> TokenType {
        self.advance(); // '/'
        self.advance(); // '/'

        let mut text = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '\n' {
                break;
            }
            text.push(ch);
            self.advance();
        }
        TokenType::LineComment(text)
    }

    /// Tokenize a block comment (after the leading /*)
    fn tokenize_block_comment(&mut self) -> Result<TokenType, CompilerError> {
        self.advance(); // '/'
        self.advance(); // '*'

        let mut text = String::new();
        loop {
            match self.current_char() {
                Some('*') if self.peek_char(1) == Some('/') => {
                    self.advance();
                    self.advance();
                    return Ok(TokenType::BlockComment(text));
                }
                Some(ch) => {
                    text.push(ch);
                    self.advance();
                }
                None => {
                    return Err(CompilerError::lexer_error(
                        "Unterminated block comment".to_string(),
                        self.current_location(),
                    ));
                }
            }
        }
    }

    /// Get next token
    pub fn next_token(&mut self) -> Result<Token, CompilerError> {
        self.skip_whitespace();

        let start_location = self.current_location();

        let token_type = match self.current_char() {
            None => TokenType::EndOfFile,

            Some('\n') => {
                self.advance();
                TokenType::Newline
            }

            Some(ch) if ch.is_alphabetic() || ch == '_' => self.tokenize_identifier(),

            Some(ch) if ch.is_ascii_digit() => self.tokenize_integer()?,

            Some('+') => {
                self.advance();
                TokenType::Plus
            }

            Some('-') => {
                self.advance();
                TokenType::Minus
            }

            Some('*') => {
                self.advance();
                TokenType::Star
            }

            Some('/') => {
                if self.peek_char(1) == Some('/') {
                    self.tokenize_line_comment()
                } else if self.peek_char(1) == Some('*') {
                    self.tokenize_block_comment()?
                } else {
                    self.advance();
                    TokenType::Slash
                }
            }

            Some('%') => {
                self.advance();
                TokenType::Percent
            }

            Some('!') => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    TokenType::BangEqual
                } else {
                    TokenType::Bang
                }
            }

            Some('=') => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    TokenType::EqualEqual
                } else {
                    TokenType::Equal
                }
            }

            Some('<') => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                }
            }

            Some('>') => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                }
            }

            Some('&') => {
                self.advance();
                if self.current_char() == Some('&') {
                    self.advance();
                    TokenType::AmpersandAmpersand
                } else {
                    return Err(CompilerError::lexer_error(
                        "Expected '&&'".to_string(),
                        self.current_location(),
                    ));
                }
            }

            Some('|') => {
                self.advance();
                if self.current_char() == Some('|') {
                    self.advance();
                    TokenType::PipePipe
                } else {
                    return Err(CompilerError::lexer_error(
                        "Expected '||'".to_string(),
                        self.current_location(),
                    ));
                }
            }

            Some('(') => {
                self.advance();
                TokenType::LeftParen
            }
            Some(')') => {
                self.advance();
                TokenType::RightParen
            }
            Some('{') => {
                self.advance();
                TokenType::LeftBrace
            }
            Some('}') => {
                self.advance();
                TokenType::RightBrace
            }
            Some('[') => {
                self.advance();
                TokenType::LeftBracket
            }
            Some(']') => {
                self.advance();
                TokenType::RightBracket
            }
            Some(';') => {
                self.advance();
                TokenType::Semicolon
            }
            Some(',') => {
                self.advance();
                TokenType::Comma
            }

            Some(ch) => {
                return Err(CompilerError::lexer_error(
                    format!("Unexpected character: {}", ch),
                    self.current_location(),
                ));
            }
        };

        let end_location = self.current_location();
        let span = SourceSpan::new(start_location, end_location);

        Ok(Token::new(token_type, span))
    }

    /// Tokenize entire input into a vector of tokens
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompilerError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token_type, TokenType::EndOfFile);
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }
}
