//! Expression parsing
//!
//! Precedence climbing, loosest first: `||`, `&&`, equality, relational,
//! additive, multiplicative, unary, primary.

use super::{ParseError, Parser};
use crate::ast::*;
use crate::lexer::TokenType;
use syc_common::{CompilerError, SourceSpan};

impl Parser {
    /// Parse a full expression
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, CompilerError> {
        self.parse_logical_or()
    }

    fn parse_logical_or(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_logical_and()?;
        while self.match_token(&TokenType::PipePipe) {
            let right = self.parse_logical_and()?;
            left = binary(BinaryOp::LogicalOr, left, right);
        }
        Ok(left)
    }

    fn parse_logical_and(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_equality()?;
        while self.match_token(&TokenType::AmpersandAmpersand) {
            let right = self.parse_equality()?;
            left = binary(BinaryOp::LogicalAnd, left, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_relational()?;
        loop {
            let op = if self.match_token(&TokenType::EqualEqual) {
                BinaryOp::Eq
            } else if self.match_token(&TokenType::BangEqual) {
                BinaryOp::Ne
            } else {
                break;
            };
            let right = self.parse_relational()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = if self.match_token(&TokenType::LessEqual) {
                BinaryOp::Le
            } else if self.match_token(&TokenType::GreaterEqual) {
                BinaryOp::Ge
            } else if self.match_token(&TokenType::Less) {
                BinaryOp::Lt
            } else if self.match_token(&TokenType::Greater) {
                BinaryOp::Gt
            } else {
                break;
            };
            let right = self.parse_additive()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = if self.match_token(&TokenType::Plus) {
                BinaryOp::Add
            } else if self.match_token(&TokenType::Minus) {
                BinaryOp::Sub
            } else {
                break;
            };
            let right = self.parse_multiplicative()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expression, CompilerError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = if self.match_token(&TokenType::Star) {
                BinaryOp::Mul
            } else if self.match_token(&TokenType::Slash) {
                BinaryOp::Div
            } else if self.match_token(&TokenType::Percent) {
                BinaryOp::Mod
            } else {
                break;
            };
            let right = self.parse_unary()?;
            left = binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expression, CompilerError> {
        let start = self.current_span();
        let op = if self.match_token(&TokenType::Plus) {
            UnaryOp::Plus
        } else if self.match_token(&TokenType::Minus) {
            UnaryOp::Neg
        } else if self.match_token(&TokenType::Bang) {
            UnaryOp::Not
        } else {
            return self.parse_primary();
        };

        let operand = self.parse_unary()?;
        let span = SourceSpan::new(start.start, operand.span.end.clone());
        Ok(Expression {
            kind: ExpressionKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        })
    }

    /// Parse `'(' Exp ')' | Ident '(' args ')' | LVal | IntLiteral`
    fn parse_primary(&mut self) -> Result<Expression, CompilerError> {
        // Parenthesized expression: the inner node is returned directly,
        // grouping only affects the tree shape already.
        if self.match_token(&TokenType::LeftParen) {
            let expr = self.parse_expression()?;
            self.expect(TokenType::RightParen, "parenthesized expression")?;
            return Ok(expr);
        }

        let token = self.advance().ok_or(ParseError::UnexpectedEndOfFile {
            expected: "expression".to_string(),
            location: syc_common::SourceLocation::new_simple(0, 0),
        })?;

        match token.token_type {
            TokenType::IntLiteral(value) => Ok(Expression {
                kind: ExpressionKind::IntLiteral(value),
                span: token.span,
            }),

            TokenType::Identifier(name) => {
                // Function call
                if self.check(&TokenType::LeftParen) {
                    self.advance(); // '('
                    let mut arguments = Vec::new();
                    if !self.check(&TokenType::RightParen) {
                        arguments.push(self.parse_expression()?);
                        while self.match_token(&TokenType::Comma) {
                            arguments.push(self.parse_expression()?);
                        }
                    }
                    self.expect(TokenType::RightParen, "call")?;
                    let end = self.current_location();
                    return Ok(Expression {
                        kind: ExpressionKind::Call {
                            callee: name,
                            arguments,
                        },
                        span: SourceSpan::new(token.span.start, end),
                    });
                }

                // Variable reference with optional subscripts
                let mut indices = Vec::new();
                while self.match_token(&TokenType::LeftBracket) {
                    indices.push(self.parse_expression()?);
                    self.expect(TokenType::RightBracket, "subscript")?;
                }
                let end = self.current_location();
                let span = SourceSpan::new(token.span.start, end);
                Ok(Expression {
                    kind: ExpressionKind::LVal(LVal {
                        name,
                        indices,
                        span: span.clone(),
                    }),
                    span,
                })
            }

            _ => Err(ParseError::UnexpectedToken {
                expected: "expression".to_string(),
                found: token,
            }
            .into()),
        }
    }
}

fn binary(op: BinaryOp, left: Expression, right: Expression) -> Expression {
    let span = SourceSpan::new(left.span.start.clone(), right.span.end.clone());
    Expression {
        kind: ExpressionKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use syc_common::CompilerError;

    fn parse_expr(input: &str) -> Result<Expression, CompilerError> {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize()?;
        let mut parser = Parser::new(tokens);
        parser.parse_expression()
    }

    #[test]
    fn test_parse_integer_literal() {
        let expr = parse_expr("42").unwrap();
        match expr.kind {
            ExpressionKind::IntLiteral(value) => assert_eq!(value, 42),
            _ => panic!("Expected integer literal"),
        }
    }

    #[test]
    fn test_parse_binary_expression() {
        let expr = parse_expr("2 + 3").unwrap();
        match expr.kind {
            ExpressionKind::Binary { op, left, right } => {
                assert_eq!(op, BinaryOp::Add);
                assert!(matches!(left.kind, ExpressionKind::IntLiteral(2)));
                assert!(matches!(right.kind, ExpressionKind::IntLiteral(3)));
            }
            _ => panic!("Expected binary expression"),
        }
    }

    #[test]
    fn test_precedence() {
        // 1 + 2 * 3 parses as 1 + (2 * 3)
        let expr = parse_expr("1 + 2 * 3").unwrap();
        match expr.kind {
            ExpressionKind::Binary { op, right, .. } => {
                assert_eq!(op, BinaryOp::Add);
                assert!(matches!(
                    right.kind,
                    ExpressionKind::Binary { op: BinaryOp::Mul, .. }
                ));
            }
            _ => panic!("Expected binary expression"),
        }
    }

    #[test]
    fn test_parens_override_precedence() {
        // (1 + 2) * 3 parses as (+ ...) * 3
        let expr = parse_expr("(1 + 2) * 3").unwrap();
        match expr.kind {
            ExpressionKind::Binary { op, left, .. } => {
                assert_eq!(op, BinaryOp::Mul);
                assert!(matches!(
                    left.kind,
                    ExpressionKind::Binary { op: BinaryOp::Add, .. }
                ));
            }
            _ => panic!("Expected binary expression"),
        }
    }

    #[test]
    fn test_unary_chain() {
        let expr = parse_expr("--5").unwrap();
        match expr.kind {
            ExpressionKind::Unary { op, operand } => {
                assert_eq!(op, UnaryOp::Neg);
                assert!(matches!(operand.kind, ExpressionKind::Unary { .. }));
            }
            _ => panic!("Expected unary expression"),
        }
    }

    #[test]
    fn test_relational_vs_logical() {
        // a < b && c < d parses as (<) && (<)
        let expr = parse_expr("a < b && c < d").unwrap();
        match expr.kind {
            ExpressionKind::Binary { op, left, right } => {
                assert_eq!(op, BinaryOp::LogicalAnd);
                assert!(matches!(
                    left.kind,
                    ExpressionKind::Binary { op: BinaryOp::Lt, .. }
                ));
                assert!(matches!(
                    right.kind,
                    ExpressionKind::Binary { op: BinaryOp::Lt, .. }
                ));
            }
            _ => panic!("Expected logical and"),
        }
    }

    #[test]
    fn test_parse_function_call() {
        let expr = parse_expr("foo(1, x + 2)").unwrap();
        match expr.kind {
            ExpressionKind::Call { callee, arguments } => {
                assert_eq!(callee, "foo");
                assert_eq!(arguments.len(), 2);
            }
            _ => panic!("Expected function call"),
        }
    }

    #[test]
    fn test_parse_subscripted_lval() {
        let expr = parse_expr("m[i][j + 1]").unwrap();
        match expr.kind {
            ExpressionKind::LVal(lval) => {
                assert_eq!(lval.name, "m");
                assert_eq!(lval.indices.len(), 2);
            }
            _ => panic!("Expected lvalue"),
        }
    }
}
