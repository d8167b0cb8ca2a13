//! Statement and block parsing

use super::{ParseError, Parser};
use crate::ast::*;
use crate::lexer::TokenType;
use syc_common::{CompilerError, SourceSpan};

impl Parser {
    /// Parse `'{' (Decl | Stmt)* '}'`
    pub(crate) fn parse_block(&mut self) -> Result<Block, CompilerError> {
        let start = self.current_location();
        self.expect(TokenType::LeftBrace, "block")?;

        let mut items = Vec::new();
        while !self.check(&TokenType::RightBrace) {
            if self.check(&TokenType::EndOfFile) {
                return Err(ParseError::UnexpectedEndOfFile {
                    expected: "} to close block".to_string(),
                    location: self.current_location(),
                }
                .into());
            }
            if self.check(&TokenType::Const) || self.check(&TokenType::Int) {
                items.push(BlockItem::Declaration(self.parse_declaration()?));
            } else {
                items.push(BlockItem::Statement(self.parse_statement()?));
            }
        }
        self.expect(TokenType::RightBrace, "block")?;

        let end = self.current_location();
        Ok(Block {
            items,
            span: SourceSpan::new(start, end),
        })
    }

    /// Parse a single statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, CompilerError> {
        let start = self.current_location();

        if self.check(&TokenType::LeftBrace) {
            let block = self.parse_block()?;
            let span = block.span.clone();
            return Ok(Statement {
                kind: StatementKind::Block(block),
                span,
            });
        }

        if self.match_token(&TokenType::If) {
            self.expect(TokenType::LeftParen, "if statement")?;
            let condition = self.parse_expression()?;
            self.expect(TokenType::RightParen, "if statement")?;
            let then_branch = Box::new(self.parse_statement()?);
            let else_branch = if self.match_token(&TokenType::Else) {
                Some(Box::new(self.parse_statement()?))
            } else {
                None
            };
            let end = self.current_location();
            return Ok(Statement {
                kind: StatementKind::If {
                    condition,
                    then_branch,
                    else_branch,
                },
                span: SourceSpan::new(start, end),
            });
        }

        if self.match_token(&TokenType::While) {
            self.expect(TokenType::LeftParen, "while statement")?;
            let condition = self.parse_expression()?;
            self.expect(TokenType::RightParen, "while statement")?;
            let body = Box::new(self.parse_statement()?);
            let end = self.current_location();
            return Ok(Statement {
                kind: StatementKind::While { condition, body },
                span: SourceSpan::new(start, end),
            });
        }

        if self.match_token(&TokenType::Break) {
            self.expect(TokenType::Semicolon, "break statement")?;
            let end = self.current_location();
            return Ok(Statement {
                kind: StatementKind::Break,
                span: SourceSpan::new(start, end),
            });
        }

        if self.match_token(&TokenType::Continue) {
            self.expect(TokenType::Semicolon, "continue statement")?;
            let end = self.current_location();
            return Ok(Statement {
                kind: StatementKind::Continue,
                span: SourceSpan::new(start, end),
            });
        }

        if self.match_token(&TokenType::Return) {
            let value = if self.check(&TokenType::Semicolon) {
                None
            } else {
                Some(self.parse_expression()?)
            };
            self.expect(TokenType::Semicolon, "return statement")?;
            let end = self.current_location();
            return Ok(Statement {
                kind: StatementKind::Return(value),
                span: SourceSpan::new(start, end),
            });
        }

        // Empty statement
        if self.match_token(&TokenType::Semicolon) {
            let end = self.current_location();
            return Ok(Statement {
                kind: StatementKind::Expression(None),
                span: SourceSpan::new(start, end),
            });
        }

        // Assignment vs. expression statement: parse an expression first,
        // then a following `=` turns an lvalue into an assignment target.
        let expr = self.parse_expression()?;
        if self.check(&TokenType::Equal) {
            if let ExpressionKind::LVal(target) = expr.kind {
                self.advance(); // '='
                let value = self.parse_expression()?;
                self.expect(TokenType::Semicolon, "assignment")?;
                let end = self.current_location();
                return Ok(Statement {
                    kind: StatementKind::Assign { target, value },
                    span: SourceSpan::new(start, end),
                });
            }
            return Err(ParseError::InvalidExpression {
                message: "Assignment target is not an lvalue".to_string(),
                location: expr.span.start,
            }
            .into());
        }

        self.expect(TokenType::Semicolon, "expression statement")?;
        let end = self.current_location();
        Ok(Statement {
            kind: StatementKind::Expression(Some(expr)),
            span: SourceSpan::new(start, end),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn parse_stmt(input: &str) -> Statement {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize().unwrap();
        let mut parser = Parser::new(tokens);
        parser.parse_statement().unwrap()
    }

    #[test]
    fn test_assignment_statement() {
        let stmt = parse_stmt("a = 1;");
        match stmt.kind {
            StatementKind::Assign { target, .. } => {
                assert_eq!(target.name, "a");
                assert!(target.indices.is_empty());
            }
            _ => panic!("Expected assignment"),
        }
    }

    #[test]
    fn test_subscripted_assignment() {
        let stmt = parse_stmt("m[1][2] = x + 1;");
        match stmt.kind {
            StatementKind::Assign { target, .. } => {
                assert_eq!(target.name, "m");
                assert_eq!(target.indices.len(), 2);
            }
            _ => panic!("Expected assignment"),
        }
    }

    #[test]
    fn test_expression_statement() {
        let stmt = parse_stmt("putint(x);");
        assert!(matches!(stmt.kind, StatementKind::Expression(Some(_))));
    }

    #[test]
    fn test_empty_statement() {
        let stmt = parse_stmt(";");
        assert!(matches!(stmt.kind, StatementKind::Expression(None)));
    }

    #[test]
    fn test_return_forms() {
        assert!(matches!(parse_stmt("return;").kind, StatementKind::Return(None)));
        assert!(matches!(parse_stmt("return 0;").kind, StatementKind::Return(Some(_))));
    }

    #[test]
    fn test_if_else() {
        let stmt = parse_stmt("if (a < b) x = 1; else x = 2;");
        match stmt.kind {
            StatementKind::If { else_branch, .. } => assert!(else_branch.is_some()),
            _ => panic!("Expected if statement"),
        }
    }

    #[test]
    fn test_while() {
        let stmt = parse_stmt("while (i < 10) i = i + 1;");
        assert!(matches!(stmt.kind, StatementKind::While { .. }));
    }

    #[test]
    fn test_nested_block() {
        let stmt = parse_stmt("{ int x = 1; x = 2; }");
        match stmt.kind {
            StatementKind::Block(block) => assert_eq!(block.items.len(), 2),
            _ => panic!("Expected block"),
        }
    }

    #[test]
    fn test_assignment_to_non_lvalue_rejected() {
        let mut lexer = Lexer::new("1 = 2;");
        let tokens = lexer.tokenize().unwrap();
        let mut parser = Parser::new(tokens);
        assert!(parser.parse_statement().is_err());
    }
}
