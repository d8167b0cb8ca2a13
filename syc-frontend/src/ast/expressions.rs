//! Expression AST nodes for SysY

use super::ops::{BinaryOp, UnaryOp};
use serde::{Deserialize, Serialize};
use syc_common::SourceSpan;

/// AST expression node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    /// Integer literal (radix already resolved by the lexer)
    IntLiteral(i64),

    /// Variable reference, possibly subscripted
    LVal(LVal),

    /// Unary operation
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },

    /// Binary operation
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Function call
    Call {
        callee: String,
        arguments: Vec<Expression>,
    },
}

/// A variable reference with zero or more subscripts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LVal {
    pub name: String,
    pub indices: Vec<Expression>,
    pub span: SourceSpan,
}

/// Initializer for a defined name: a single expression for scalars, a brace
/// list (arbitrarily nested) for arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initializer {
    pub kind: InitializerKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InitializerKind {
    Expr(Expression),
    List(Vec<Initializer>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_creation() {
        let expr = Expression {
            kind: ExpressionKind::IntLiteral(42),
            span: SourceSpan::dummy(),
        };

        match expr.kind {
            ExpressionKind::IntLiteral(value) => assert_eq!(value, 42),
            _ => panic!("Expected IntLiteral"),
        }
    }
}
