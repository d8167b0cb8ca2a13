//! Declaration lowering
//!
//! Dispatch is the product of three independent axes: const vs. mutable,
//! scalar vs. array, local vs. global. Globals never emit instructions —
//! their initializers fold at compile time into rendered declaration lines.
//! Locals allocate a stack slot and store their initial contents, except a
//! mutable array without an initializer, whose contents stay undefined.

use super::const_eval::fold_expr;
use super::{IrGenerator, SymbolInfo};
use crate::ast::{Declaration, Initializer, InitializerKind, VarDef};
use crate::ir::{GlobalInit, GlobalVariable, Value};
use syc_common::CompilerError;

impl IrGenerator {
    /// Lower one declaration (possibly defining several names)
    pub(crate) fn gen_declaration(&mut self, decl: &Declaration) -> Result<(), CompilerError> {
        for def in &decl.defs {
            self.gen_var_def(decl.is_const, def)?;
        }
        Ok(())
    }

    fn gen_var_def(&mut self, is_const: bool, def: &VarDef) -> Result<(), CompilerError> {
        if self.symbols.exists_in_current_scope(&def.name) {
            self.report(format!("redefinition of '{}'", def.name), &def.span);
            return Ok(());
        }

        let mut dims = Vec::with_capacity(def.dims.len());
        for dim_expr in &def.dims {
            let size = fold_expr(&self.symbols, dim_expr);
            if size < 0 {
                self.report(
                    format!("array dimension of '{}' must be non-negative", def.name),
                    &def.span,
                );
                dims.push(0);
            } else {
                dims.push(size as u32);
            }
        }

        match (is_const, dims.is_empty(), self.symbols.at_global_scope()) {
            (_, true, true) => self.gen_global_scalar(is_const, def),
            (_, false, true) => self.gen_global_array(is_const, def, dims),
            (true, true, false) => self.gen_local_const_scalar(def),
            (false, true, false) => self.gen_local_scalar(def),
            (true, false, false) => self.gen_local_const_array(def, dims),
            (false, false, false) => self.gen_local_array(def, dims),
        }
    }

    /// Global scalar, const or mutable: fold the initializer (0 when absent)
    /// and render a declaration line; no instructions are emitted.
    fn gen_global_scalar(&mut self, is_const: bool, def: &VarDef) -> Result<(), CompilerError> {
        let value = match &def.init {
            Some(init) => self.fold_scalar_init(init),
            None => {
                if is_const {
                    self.report(
                        format!("constant '{}' requires an initializer", def.name),
                        &def.span,
                    );
                }
                0
            }
        };

        self.module.add_global(GlobalVariable {
            name: def.name.clone(),
            is_constant: is_const,
            init: GlobalInit::Scalar(value),
        });

        let storage = Value::Global(def.name.clone());
        let info = if is_const {
            SymbolInfo::constant(storage, value)
        } else {
            SymbolInfo::scalar(storage)
        };
        self.symbols.add(&def.name, info);
        Ok(())
    }

    /// Global array: every leaf folds at compile time. A missing initializer
    /// on a mutable array renders as a zero-fill; a constant array always
    /// carries its full literal list.
    fn gen_global_array(
        &mut self,
        is_const: bool,
        def: &VarDef,
        dims: Vec<u32>,
    ) -> Result<(), CompilerError> {
        let total: u32 = dims.iter().product();

        let init = match &def.init {
            Some(init) => GlobalInit::Array(self.flatten_const_init(init, &dims)),
            None => {
                if is_const {
                    self.report(
                        format!("constant '{}' requires an initializer", def.name),
                        &def.span,
                    );
                    GlobalInit::Array(vec![0; total as usize])
                } else {
                    GlobalInit::ZeroArray(total)
                }
            }
        };

        self.module.add_global(GlobalVariable {
            name: def.name.clone(),
            is_constant: is_const,
            init,
        });

        let storage = Value::Global(def.name.clone());
        self.symbols
            .add(&def.name, SymbolInfo::array(storage, dims, is_const));
        Ok(())
    }

    /// Local constant scalar: a slot is allocated and the folded value
    /// stored, but the binding keeps the literal so later reads never load.
    fn gen_local_const_scalar(&mut self, def: &VarDef) -> Result<(), CompilerError> {
        let value = match &def.init {
            Some(init) => self.fold_scalar_init(init),
            None => {
                self.report(
                    format!("constant '{}' requires an initializer", def.name),
                    &def.span,
                );
                0
            }
        };

        let slot = self.builder.build_alloca(None)?;
        self.builder
            .build_store(Value::Constant(value), slot.clone())?;
        self.symbols.add(&def.name, SymbolInfo::constant(slot, value));
        Ok(())
    }

    /// Local mutable scalar: allocate, then evaluate and store the
    /// initializer when one exists (possibly emitting runtime code).
    fn gen_local_scalar(&mut self, def: &VarDef) -> Result<(), CompilerError> {
        let slot = self.builder.build_alloca(None)?;

        if let Some(init) = &def.init {
            match &init.kind {
                InitializerKind::Expr(expr) => {
                    let value = self.gen_expr(expr)?;
                    self.builder.build_store(value, slot.clone())?;
                }
                InitializerKind::List(_) => {
                    self.report(
                        format!("brace initializer on scalar '{}'", def.name),
                        &init.span,
                    );
                }
            }
        }

        self.symbols.add(&def.name, SymbolInfo::scalar(slot));
        Ok(())
    }

    /// Local constant array: flatten to integers and store all elements —
    /// the fresh slot starts uninitialized, so padding zeros are stored too.
    fn gen_local_const_array(&mut self, def: &VarDef, dims: Vec<u32>) -> Result<(), CompilerError> {
        let total: u32 = dims.iter().product();
        let slot = self.builder.build_alloca(Some(total))?;

        let values = match &def.init {
            Some(init) => self.flatten_const_init(init, &dims),
            None => {
                self.report(
                    format!("constant '{}' requires an initializer", def.name),
                    &def.span,
                );
                vec![0; total as usize]
            }
        };

        for (i, value) in values.iter().enumerate() {
            let addr = self.element_address(slot.clone(), Value::Constant(i as i32), total)?;
            self.builder.build_store(Value::Constant(*value), addr)?;
        }

        self.symbols
            .add(&def.name, SymbolInfo::array(slot, dims, true));
        Ok(())
    }

    /// Local mutable array: with an initializer list, flatten over computed
    /// values and store every element; without one the contents stay
    /// undefined.
    fn gen_local_array(&mut self, def: &VarDef, dims: Vec<u32>) -> Result<(), CompilerError> {
        let total: u32 = dims.iter().product();
        let slot = self.builder.build_alloca(Some(total))?;

        if let Some(init) = &def.init {
            let values = self.flatten_runtime_init(init, &dims)?;
            for (i, value) in values.into_iter().enumerate() {
                let addr = self.element_address(slot.clone(), Value::Constant(i as i32), total)?;
                self.builder.build_store(value, addr)?;
            }
        }

        self.symbols
            .add(&def.name, SymbolInfo::array(slot, dims, false));
        Ok(())
    }

    /// Fold a scalar initializer; a brace list here is a shape error
    fn fold_scalar_init(&mut self, init: &Initializer) -> i32 {
        match &init.kind {
            InitializerKind::Expr(expr) => fold_expr(&self.symbols, expr),
            InitializerKind::List(_) => {
                self.report("brace initializer on scalar".to_string(), &init.span);
                0
            }
        }
    }
}
