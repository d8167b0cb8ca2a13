//! Lexically scoped symbol table
//!
//! A stack of name-to-binding maps, innermost last. The global frame is
//! created on construction and never pops.

use crate::ir::{IrType, Value};
use std::collections::HashMap;

/// Everything the generator knows about one bound name
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolInfo {
    pub ty: IrType,
    /// Bound storage: a stack slot register or a global reference
    pub value: Value,
    pub is_const: bool,
    /// Folded value, meaningful only when `is_const` holds for a scalar
    pub const_value: i32,
    pub is_array: bool,
    /// Dimension sizes, outermost first; empty for scalars
    pub dims: Vec<u32>,
}

impl SymbolInfo {
    /// A mutable scalar bound to its storage address
    pub fn scalar(value: Value) -> Self {
        Self {
            ty: IrType::I32,
            value,
            is_const: false,
            const_value: 0,
            is_array: false,
            dims: Vec::new(),
        }
    }

    /// A constant scalar; reads resolve directly to `const_value`
    pub fn constant(value: Value, const_value: i32) -> Self {
        Self {
            ty: IrType::I32,
            value,
            is_const: true,
            const_value,
            is_array: false,
            dims: Vec::new(),
        }
    }

    /// An array bound to its flat storage buffer
    pub fn array(value: Value, dims: Vec<u32>, is_const: bool) -> Self {
        Self {
            ty: IrType::I32,
            value,
            is_const,
            const_value: 0,
            is_array: true,
            dims,
        }
    }

    /// Total element count of the flat buffer
    pub fn total_elems(&self) -> u32 {
        self.dims.iter().product()
    }
}

/// Stack of nested scopes
#[derive(Debug, Default)]
pub struct SymbolTable {
    scopes: Vec<HashMap<String, SymbolInfo>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    /// Enter a new scope
    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Exit current scope; the global frame never pops
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// True while no function/block scope is active
    pub fn at_global_scope(&self) -> bool {
        self.scopes.len() == 1
    }

    /// Bind a name in the current scope. Fails (no insertion) when the name
    /// is already bound in the innermost scope; shadowing an outer binding
    /// always succeeds.
    pub fn add(&mut self, name: &str, info: SymbolInfo) -> bool {
        if self.exists_in_current_scope(name) {
            return false;
        }
        self.scopes
            .last_mut()
            .expect("symbol table always has a global scope")
            .insert(name.to_string(), info);
        true
    }

    /// Look up a name, innermost scope first
    pub fn lookup(&self, name: &str) -> Option<&SymbolInfo> {
        for scope in self.scopes.iter().rev() {
            if let Some(info) = scope.get(name) {
                return Some(info);
            }
        }
        None
    }

    /// Check if a name exists in the current scope only
    pub fn exists_in_current_scope(&self, name: &str) -> bool {
        self.scopes
            .last()
            .map(|scope| scope.contains_key(name))
            .unwrap_or(false)
    }
}
