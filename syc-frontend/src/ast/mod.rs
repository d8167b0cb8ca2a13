//! Abstract syntax tree for SysY
//!
//! Every node is a span-carrying struct wrapping a closed kind-enum, so that
//! downstream dispatch is an exhaustive `match` — there is no visitor
//! hierarchy and no runtime type probing.

pub mod expressions;
pub mod ops;
pub mod statements;

pub use expressions::{Expression, ExpressionKind, Initializer, InitializerKind, LVal};
pub use ops::{BinaryOp, UnaryOp};
pub use statements::{Block, BlockItem, Statement, StatementKind};

use serde::{Deserialize, Serialize};
use syc_common::SourceSpan;

/// A complete compilation unit: declarations and function definitions in
/// source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompUnit {
    pub items: Vec<TopLevelItem>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TopLevelItem {
    Declaration(Declaration),
    Function(FunctionDef),
}

/// One `const int ...;` or `int ...;` declaration, possibly defining several
/// names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub is_const: bool,
    pub defs: Vec<VarDef>,
    pub span: SourceSpan,
}

/// A single defined name inside a declaration. `dims` is empty for scalars;
/// each entry is a constant expression giving one dimension size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDef {
    pub name: String,
    pub dims: Vec<Expression>,
    pub init: Option<Initializer>,
    pub span: SourceSpan,
}

/// Return type of a function definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeSpec {
    Int,
    Void,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub return_type: TypeSpec,
    pub name: String,
    pub params: Vec<Param>,
    pub body: Block,
    pub span: SourceSpan,
}

/// A formal parameter. SysY admits array-shaped parameters (`int a[]`),
/// which parse but are not lowered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub is_array: bool,
    pub span: SourceSpan,
}
