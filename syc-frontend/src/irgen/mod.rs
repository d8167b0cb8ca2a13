//! IR generation from the AST
//!
//! A single synchronous depth-first traversal: each AST node is dispatched
//! through one exhaustive `match` arm, consulting the symbol table, the
//! constant evaluator, the initializer flatteners, and the address resolver
//! as needed, and emitting into the current function through the builder.
//! Emission order is visitation order.
//!
//! Source-level problems (redefinitions, undefined references, constructs
//! this generator does not lower) become diagnostics and generation
//! continues; an `Err` from here means broken builder state, which is a bug.

pub mod address;
pub mod const_eval;
pub mod declarations;
pub mod expressions;
pub mod init;
pub mod symbols;

pub use symbols::{SymbolInfo, SymbolTable};

use crate::ast::*;
use crate::ir::{IrBuilder, IrType, Module, Value};
use std::collections::HashMap;
use syc_common::{CompilerError, ErrorReporter, SourceSpan};

#[cfg(test)]
mod tests;

/// Generates a textual IR module from a parsed compilation unit
pub struct IrGenerator {
    module: Module,
    builder: IrBuilder,
    symbols: SymbolTable,
    reporter: ErrorReporter,
    /// Return types of every callable name, seeded with the two external
    /// primitives and extended as definitions are lowered
    functions: HashMap<String, IrType>,
    current_return_type: IrType,
}

impl IrGenerator {
    pub fn new() -> Self {
        let mut functions = HashMap::new();
        functions.insert("getint".to_string(), IrType::I32);
        functions.insert("putint".to_string(), IrType::Void);

        Self {
            module: Module::new(),
            builder: IrBuilder::new(),
            symbols: SymbolTable::new(),
            reporter: ErrorReporter::new(),
            functions,
            current_return_type: IrType::I32,
        }
    }

    /// Walk the whole unit and produce the module plus collected diagnostics
    pub fn generate(mut self, unit: &CompUnit) -> Result<(Module, ErrorReporter), CompilerError> {
        for item in &unit.items {
            match item {
                TopLevelItem::Declaration(decl) => self.gen_declaration(decl)?,
                TopLevelItem::Function(func) => self.gen_function(func)?,
            }
        }
        Ok((self.module, self.reporter))
    }

    fn gen_function(&mut self, func: &FunctionDef) -> Result<(), CompilerError> {
        log::debug!("lowering function '{}'", func.name);

        let return_type = match func.return_type {
            TypeSpec::Int => IrType::I32,
            TypeSpec::Void => IrType::Void,
        };

        if self
            .functions
            .insert(func.name.clone(), return_type)
            .is_some()
        {
            self.report(format!("redefinition of function '{}'", func.name), &func.span);
        }
        self.current_return_type = return_type;

        let param_regs = self
            .builder
            .create_function(func.name.clone(), return_type, func.params.len());

        // Parameters live in a scope of their own; the body block nests
        // inside it, so a body-local may shadow a parameter.
        self.symbols.enter_scope();
        for (param, reg) in func.params.iter().zip(param_regs) {
            if param.is_array {
                self.report(
                    format!("array parameter '{}' is not supported; binding as scalar", param.name),
                    &param.span,
                );
            }
            let slot = self.builder.build_alloca(None)?;
            self.builder.build_store(Value::Reg(reg), slot.clone())?;
            if !self.symbols.add(&param.name, SymbolInfo::scalar(slot)) {
                self.report(format!("redefinition of parameter '{}'", param.name), &param.span);
            }
        }

        self.gen_block(&func.body)?;

        // A body that falls off the end still needs a terminator
        if !self.builder.current_block_has_terminator() {
            let default = match return_type {
                IrType::I32 => Some(Value::Constant(0)),
                IrType::Void => None,
            };
            self.builder.build_ret(default)?;
        }

        self.symbols.exit_scope();

        let function = self
            .builder
            .finish_function()
            .ok_or_else(|| CompilerError::from("builder lost the current function".to_string()))?;
        self.module.add_function(function);
        Ok(())
    }

    fn gen_block(&mut self, block: &Block) -> Result<(), CompilerError> {
        self.symbols.enter_scope();
        for item in &block.items {
            match item {
                BlockItem::Declaration(decl) => self.gen_declaration(decl)?,
                BlockItem::Statement(stmt) => self.gen_statement(stmt)?,
            }
        }
        self.symbols.exit_scope();
        Ok(())
    }

    fn gen_statement(&mut self, stmt: &Statement) -> Result<(), CompilerError> {
        match &stmt.kind {
            StatementKind::Assign { target, value } => self.gen_assignment(target, value),

            StatementKind::Expression(Some(expr)) => {
                self.gen_expr(expr)?;
                Ok(())
            }
            StatementKind::Expression(None) => Ok(()),

            StatementKind::Block(block) => self.gen_block(block),

            StatementKind::Return(value) => self.gen_return(value.as_ref(), &stmt.span),

            StatementKind::If { .. } => {
                self.warn("if statement is not lowered; skipped".to_string(), &stmt.span);
                Ok(())
            }
            StatementKind::While { .. } => {
                self.warn("while statement is not lowered; skipped".to_string(), &stmt.span);
                Ok(())
            }
            StatementKind::Break => {
                self.warn("break statement is not lowered; skipped".to_string(), &stmt.span);
                Ok(())
            }
            StatementKind::Continue => {
                self.warn("continue statement is not lowered; skipped".to_string(), &stmt.span);
                Ok(())
            }
        }
    }

    fn gen_assignment(&mut self, target: &LVal, value: &Expression) -> Result<(), CompilerError> {
        let info = match self.symbols.lookup(&target.name) {
            Some(info) => info.clone(),
            None => {
                self.report(format!("undefined variable '{}'", target.name), &target.span);
                return Ok(());
            }
        };

        if info.is_const {
            self.report(format!("cannot assign to constant '{}'", target.name), &target.span);
            return Ok(());
        }
        if !info.is_array && !target.indices.is_empty() {
            self.report(format!("'{}' is not an array", target.name), &target.span);
            return Ok(());
        }
        if info.is_array && target.indices.len() != info.dims.len() {
            self.report(
                format!(
                    "'{}' expects {} subscripts, got {}",
                    target.name,
                    info.dims.len(),
                    target.indices.len()
                ),
                &target.span,
            );
            return Ok(());
        }

        let value = self.gen_expr(value)?;
        let addr = self.resolve_address(&info, &target.indices)?;
        self.builder.build_store(value, addr)?;
        Ok(())
    }

    fn gen_return(
        &mut self,
        value: Option<&Expression>,
        span: &SourceSpan,
    ) -> Result<(), CompilerError> {
        match (value, self.current_return_type) {
            (Some(expr), IrType::I32) => {
                let v = self.gen_expr(expr)?;
                self.builder.build_ret(Some(v))?;
            }
            (None, IrType::Void) => {
                self.builder.build_ret(None)?;
            }
            (None, IrType::I32) => {
                self.report("return without a value in a function returning int".to_string(), span);
                self.builder.build_ret(Some(Value::Constant(0)))?;
            }
            (Some(_), IrType::Void) => {
                self.report("return with a value in a void function".to_string(), span);
                self.builder.build_ret(None)?;
            }
        }
        Ok(())
    }

    pub(crate) fn report(&mut self, message: String, span: &SourceSpan) {
        self.reporter.error(message, span.clone());
    }

    pub(crate) fn warn(&mut self, message: String, span: &SourceSpan) {
        self.reporter.warning(message, span.clone());
    }
}

impl Default for IrGenerator {
    fn default() -> Self {
        Self::new()
    }
}
