//! Module and global variables
//!
//! The module is the top-level container: the two external primitive
//! declarations, global variable lines, then function bodies, rendered in
//! that fixed order.

use crate::ir::Function;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Initializer of a global variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GlobalInit {
    /// Scalar with a folded literal
    Scalar(i32),

    /// Array with a complete element list (always exactly the flat length)
    Array(Vec<i32>),

    /// Uninitialized mutable array of the given flat length
    ZeroArray(u32),
}

/// Global variable definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalVariable {
    pub name: String,
    pub is_constant: bool,
    pub init: GlobalInit,
}

impl fmt::Display for GlobalVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_constant { "constant" } else { "global" };
        match &self.init {
            GlobalInit::Scalar(v) => {
                write!(f, "@{} = dso_local {} i32 {}, align 4", self.name, kind, v)
            }
            GlobalInit::Array(values) => {
                write!(f, "@{} = dso_local {} [{} x i32] [", self.name, kind, values.len())?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "i32 {v}")?;
                }
                write!(f, "], align 16")
            }
            GlobalInit::ZeroArray(n) => {
                write!(
                    f,
                    "@{} = dso_local {} [{} x i32] zeroinitializer, align 16",
                    self.name, kind, n
                )
            }
        }
    }
}

/// IR module - represents a complete compilation unit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Module {
    pub globals: Vec<GlobalVariable>,
    pub functions: Vec<Function>,
}

impl Module {
    pub fn new() -> Self {
        Self {
            globals: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    pub fn add_global(&mut self, global: GlobalVariable) {
        self.globals.push(global);
    }

    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn get_global(&self, name: &str) -> Option<&GlobalVariable> {
        self.globals.iter().find(|g| g.name == name)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // External primitives come first, always
        writeln!(f, "declare i32 @getint()")?;
        writeln!(f, "declare void @putint(i32)")?;

        if !self.globals.is_empty() {
            writeln!(f)?;
            for global in &self.globals {
                writeln!(f, "{global}")?;
            }
        }

        for function in &self.functions {
            writeln!(f)?;
            write!(f, "{function}")?;
        }

        Ok(())
    }
}
