//! Compile-time folding of constant expressions
//!
//! Best effort over 32-bit wrapping arithmetic: literals, unary `+ - !`,
//! binary `+ - * / %`, and identifiers bound as scalar constants fold;
//! anything else yields 0. Division or modulo by a statically-known zero
//! also yields 0 and never traps.

use crate::ast::{BinaryOp, Expression, ExpressionKind, UnaryOp};
use crate::ir::IrBinaryOp;
use crate::irgen::symbols::SymbolTable;

/// Fold an expression to its compile-time value
pub fn fold_expr(symbols: &SymbolTable, expr: &Expression) -> i32 {
    match &expr.kind {
        ExpressionKind::IntLiteral(v) => *v as i32,

        ExpressionKind::Unary { op, operand } => {
            let v = fold_expr(symbols, operand);
            match op {
                UnaryOp::Plus => v,
                UnaryOp::Neg => v.wrapping_neg(),
                UnaryOp::Not => (v == 0) as i32,
            }
        }

        ExpressionKind::Binary { op, left, right } => {
            let ir_op = match op {
                BinaryOp::Add => IrBinaryOp::Add,
                BinaryOp::Sub => IrBinaryOp::Sub,
                BinaryOp::Mul => IrBinaryOp::Mul,
                BinaryOp::Div => IrBinaryOp::SDiv,
                BinaryOp::Mod => IrBinaryOp::SRem,
                // Comparisons and logical operators are not folded
                _ => return 0,
            };
            let lhs = fold_expr(symbols, left);
            let rhs = fold_expr(symbols, right);
            fold_arith(ir_op, lhs, rhs)
        }

        ExpressionKind::LVal(lval) => {
            if !lval.indices.is_empty() {
                return 0;
            }
            match symbols.lookup(&lval.name) {
                Some(info) if info.is_const && !info.is_array => info.const_value,
                _ => 0,
            }
        }

        ExpressionKind::Call { .. } => 0,
    }
}

/// 32-bit wrapping arithmetic shared between the evaluator and the
/// fold-or-emit instruction path
pub fn fold_arith(op: IrBinaryOp, lhs: i32, rhs: i32) -> i32 {
    match op {
        IrBinaryOp::Add => lhs.wrapping_add(rhs),
        IrBinaryOp::Sub => lhs.wrapping_sub(rhs),
        IrBinaryOp::Mul => lhs.wrapping_mul(rhs),
        IrBinaryOp::SDiv => {
            if rhs == 0 {
                0
            } else {
                lhs.wrapping_div(rhs)
            }
        }
        IrBinaryOp::SRem => {
            if rhs == 0 {
                0
            } else {
                lhs.wrapping_rem(rhs)
            }
        }
    }
}
