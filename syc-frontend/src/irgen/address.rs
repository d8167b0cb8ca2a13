//! Subscript-to-pointer address resolution
//!
//! Arrays are stored row-major in one flat buffer of `Π dims` scalars. A
//! subscript list becomes a linear offset through stride arithmetic: the
//! stride of position i is the product of every dimension to its right.
//! Offset terms fold when both operands are immediates and emit runtime
//! multiplies/adds otherwise; the final address is one bounded
//! element-access instruction against the flat buffer.

use super::{IrGenerator, SymbolInfo};
use crate::ast::Expression;
use crate::ir::{IrBinaryOp, Value};
use syc_common::CompilerError;

impl IrGenerator {
    /// Resolve a variable reference to the address it names.
    ///
    /// Scalars and subscript-free references resolve to the bound storage
    /// value directly; subscripted arrays go through stride arithmetic and a
    /// single element-access instruction.
    pub(crate) fn resolve_address(
        &mut self,
        info: &SymbolInfo,
        indices: &[Expression],
    ) -> Result<Value, CompilerError> {
        if !info.is_array || indices.is_empty() {
            return Ok(info.value.clone());
        }

        let mut offset: Option<Value> = None;
        for (position, index_expr) in indices.iter().enumerate() {
            let index = self.gen_expr(index_expr)?;
            let stride: u32 = info.dims[position + 1..].iter().product();
            let term = self.emit_binary(IrBinaryOp::Mul, index, Value::Constant(stride as i32))?;
            offset = Some(match offset {
                None => term,
                Some(acc) => self.emit_binary(IrBinaryOp::Add, acc, term)?,
            });
        }

        let offset = offset.unwrap_or(Value::Constant(0));
        self.element_address(info.value.clone(), offset, info.total_elems())
    }

    /// Address of one element of a flat buffer by linear index. Every
    /// element access in the generator funnels through here.
    pub(crate) fn element_address(
        &mut self,
        base: Value,
        index: Value,
        total_elems: u32,
    ) -> Result<Value, CompilerError> {
        Ok(self.builder.build_gep(base, index, total_elems)?)
    }
}
