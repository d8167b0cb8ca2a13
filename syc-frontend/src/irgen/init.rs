//! Initializer flattening
//!
//! Converts a nested brace-initializer tree into a linear, row-major buffer
//! of exactly `Π dims` entries. A sub-group at nesting level L occupies one
//! block of `Π dims[L+1..]` slots: its leaves are written in order and the
//! rest of the block stays zero. Two mirrored procedures cover the two
//! element domains — compile-time integers for constant and global arrays,
//! computed values for local mutable arrays.

use super::const_eval::fold_expr;
use super::IrGenerator;
use crate::ast::{Initializer, InitializerKind};
use crate::ir::Value;
use syc_common::CompilerError;

fn flat_len(dims: &[u32]) -> usize {
    dims.iter().map(|&d| d as usize).product()
}

impl IrGenerator {
    /// Flatten to compile-time integers
    pub(crate) fn flatten_const_init(&mut self, init: &Initializer, dims: &[u32]) -> Vec<i32> {
        let mut buf = vec![0; flat_len(dims)];
        match &init.kind {
            InitializerKind::Expr(_) => {
                self.report("array initializer must be a brace list".to_string(), &init.span);
            }
            InitializerKind::List(items) => self.fill_const(items, dims, &mut buf, 0),
        }
        buf
    }

    fn fill_const(&mut self, items: &[Initializer], dims: &[u32], buf: &mut [i32], base: usize) {
        let total = flat_len(dims);
        let step = flat_len(&dims[dims.len().min(1)..]).max(1);

        let mut cursor = 0usize;
        for item in items {
            match &item.kind {
                InitializerKind::Expr(expr) => {
                    if cursor >= total {
                        self.report("too many initializer values".to_string(), &item.span);
                        break;
                    }
                    buf[base + cursor] = fold_expr(&self.symbols, expr);
                    cursor += 1;
                }
                InitializerKind::List(sub) => {
                    // A sub-group starts at the next block boundary
                    let aligned = cursor.div_ceil(step) * step;
                    if aligned >= total {
                        self.report("too many initializer values".to_string(), &item.span);
                        break;
                    }
                    let sub_dims = if dims.is_empty() { dims } else { &dims[1..] };
                    self.fill_const(sub, sub_dims, buf, base + aligned);
                    cursor = aligned + step;
                }
            }
        }
    }

    /// Flatten to computed values; leaf expressions may emit code
    pub(crate) fn flatten_runtime_init(
        &mut self,
        init: &Initializer,
        dims: &[u32],
    ) -> Result<Vec<Value>, CompilerError> {
        let mut buf = vec![Value::Constant(0); flat_len(dims)];
        match &init.kind {
            InitializerKind::Expr(_) => {
                self.report("array initializer must be a brace list".to_string(), &init.span);
            }
            InitializerKind::List(items) => self.fill_runtime(items, dims, &mut buf, 0)?,
        }
        Ok(buf)
    }

    fn fill_runtime(
        &mut self,
        items: &[Initializer],
        dims: &[u32],
        buf: &mut [Value],
        base: usize,
    ) -> Result<(), CompilerError> {
        let total = flat_len(dims);
        let step = flat_len(&dims[dims.len().min(1)..]).max(1);

        let mut cursor = 0usize;
        for item in items {
            match &item.kind {
                InitializerKind::Expr(expr) => {
                    if cursor >= total {
                        self.report("too many initializer values".to_string(), &item.span);
                        break;
                    }
                    buf[base + cursor] = self.gen_expr(expr)?;
                    cursor += 1;
                }
                InitializerKind::List(sub) => {
                    let aligned = cursor.div_ceil(step) * step;
                    if aligned >= total {
                        self.report("too many initializer values".to_string(), &item.span);
                        break;
                    }
                    let sub_dims = if dims.is_empty() { dims } else { &dims[1..] };
                    self.fill_runtime(sub, sub_dims, buf, base + aligned)?;
                    cursor = aligned + step;
                }
            }
        }
        Ok(())
    }
}
