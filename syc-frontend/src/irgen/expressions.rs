//! Expression lowering
//!
//! Each expression kind lowers to a `Value`: literals stay immediate,
//! constant scalars resolve to their folded literal without a load, and
//! everything else emits instructions through the builder. Arithmetic on two
//! immediates folds instead of emitting; loaded registers never fold.

use super::const_eval::fold_arith;
use super::IrGenerator;
use crate::ast::*;
use crate::ir::{ICmpCond, IrBinaryOp, Value};
use syc_common::CompilerError;

/// Compare operators map to an icmp condition
fn icmp_cond(op: BinaryOp) -> Option<ICmpCond> {
    match op {
        BinaryOp::Eq => Some(ICmpCond::Eq),
        BinaryOp::Ne => Some(ICmpCond::Ne),
        BinaryOp::Lt => Some(ICmpCond::Slt),
        BinaryOp::Gt => Some(ICmpCond::Sgt),
        BinaryOp::Le => Some(ICmpCond::Sle),
        BinaryOp::Ge => Some(ICmpCond::Sge),
        _ => None,
    }
}

/// Arithmetic operators map to an IR opcode
fn arith_op(op: BinaryOp) -> Option<IrBinaryOp> {
    match op {
        BinaryOp::Add => Some(IrBinaryOp::Add),
        BinaryOp::Sub => Some(IrBinaryOp::Sub),
        BinaryOp::Mul => Some(IrBinaryOp::Mul),
        BinaryOp::Div => Some(IrBinaryOp::SDiv),
        BinaryOp::Mod => Some(IrBinaryOp::SRem),
        _ => None,
    }
}

impl IrGenerator {
    /// Lower one expression to a value
    pub(crate) fn gen_expr(&mut self, expr: &Expression) -> Result<Value, CompilerError> {
        match &expr.kind {
            ExpressionKind::IntLiteral(v) => Ok(Value::Constant(*v as i32)),

            ExpressionKind::LVal(lval) => self.gen_lval_read(lval),

            ExpressionKind::Unary { op, operand } => match op {
                UnaryOp::Plus => self.gen_expr(operand),
                UnaryOp::Neg => {
                    let v = self.gen_expr(operand)?;
                    self.emit_binary(IrBinaryOp::Sub, Value::Constant(0), v)
                }
                UnaryOp::Not => {
                    let v = self.gen_expr(operand)?;
                    let flag = self.builder.build_icmp(ICmpCond::Eq, v, Value::Constant(0))?;
                    Ok(self.builder.build_zext(flag)?)
                }
            },

            ExpressionKind::Binary { op, left, right } => {
                if let Some(cond) = icmp_cond(*op) {
                    let lhs = self.gen_expr(left)?;
                    let rhs = self.gen_expr(right)?;
                    let flag = self.builder.build_icmp(cond, lhs, rhs)?;
                    // The 1-bit result must be widened before any further use
                    return Ok(self.builder.build_zext(flag)?);
                }
                if let Some(ir_op) = arith_op(*op) {
                    let lhs = self.gen_expr(left)?;
                    let rhs = self.gen_expr(right)?;
                    return self.emit_binary(ir_op, lhs, rhs);
                }
                // && and || would need branching control flow
                self.warn(format!("logical operator '{op}' is not lowered"), &expr.span);
                Ok(Value::Undef)
            }

            ExpressionKind::Call { callee, arguments } => self.gen_call(callee, arguments, expr),
        }
    }

    /// Read a (possibly subscripted) variable
    fn gen_lval_read(&mut self, lval: &LVal) -> Result<Value, CompilerError> {
        let info = match self.symbols.lookup(&lval.name) {
            Some(info) => info.clone(),
            None => {
                self.report(format!("undefined variable '{}'", lval.name), &lval.span);
                return Ok(Value::Undef);
            }
        };

        if !info.is_array {
            if !lval.indices.is_empty() {
                self.report(format!("'{}' is not an array", lval.name), &lval.span);
                return Ok(Value::Undef);
            }
            // Constant scalars read as their folded literal, never a load
            if info.is_const {
                return Ok(Value::Constant(info.const_value));
            }
            return Ok(self.builder.build_load(info.value)?);
        }

        if lval.indices.len() != info.dims.len() {
            self.report(
                format!(
                    "'{}' expects {} subscripts, got {}",
                    lval.name,
                    info.dims.len(),
                    lval.indices.len()
                ),
                &lval.span,
            );
            return Ok(Value::Undef);
        }

        let addr = self.resolve_address(&info, &lval.indices)?;
        Ok(self.builder.build_load(addr)?)
    }

    fn gen_call(
        &mut self,
        callee: &str,
        arguments: &[Expression],
        expr: &Expression,
    ) -> Result<Value, CompilerError> {
        let return_type = match self.functions.get(callee) {
            Some(ty) => *ty,
            None => {
                self.report(format!("call to undefined function '{callee}'"), &expr.span);
                return Ok(Value::Undef);
            }
        };

        let mut args = Vec::with_capacity(arguments.len());
        for arg in arguments {
            args.push(self.gen_expr(arg)?);
        }

        let result = self.builder.build_call(callee, args, return_type)?;
        Ok(result.unwrap_or(Value::Undef))
    }

    /// Emit a binary operation, folding when both operands are immediates.
    /// Loaded registers are never immediates, so runtime values always emit.
    pub(crate) fn emit_binary(
        &mut self,
        op: IrBinaryOp,
        lhs: Value,
        rhs: Value,
    ) -> Result<Value, CompilerError> {
        if let (Some(a), Some(b)) = (lhs.as_constant(), rhs.as_constant()) {
            return Ok(Value::Constant(fold_arith(op, a, b)));
        }
        Ok(self.builder.build_binary(op, lhs, rhs)?)
    }
}
