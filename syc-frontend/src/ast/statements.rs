//! Statement AST nodes for SysY

use super::expressions::{Expression, LVal};
use super::Declaration;
use serde::{Deserialize, Serialize};
use syc_common::SourceSpan;

/// A `{ ... }` block: declarations and statements in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub items: Vec<BlockItem>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockItem {
    Declaration(Declaration),
    Statement(Statement),
}

/// AST statement node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    /// `lval = exp;`
    Assign { target: LVal, value: Expression },

    /// `exp;` or the empty statement `;`
    Expression(Option<Expression>),

    /// Nested block
    Block(Block),

    /// `if (cond) stmt [else stmt]` — parsed but not lowered
    If {
        condition: Expression,
        then_branch: Box<Statement>,
        else_branch: Option<Box<Statement>>,
    },

    /// `while (cond) stmt` — parsed but not lowered
    While {
        condition: Expression,
        body: Box<Statement>,
    },

    /// `break;` — parsed but not lowered
    Break,

    /// `continue;` — parsed but not lowered
    Continue,

    /// `return [exp];`
    Return(Option<Expression>),
}
