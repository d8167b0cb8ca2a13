//! IR value representations
//!
//! Defines values that can be used as operands in IR instructions.

use serde::{Deserialize, Serialize};
use std::fmt;
use syc_common::RegId;

/// IR value - represents operands in IR instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Virtual register holding an instruction result
    Reg(RegId),

    /// Constant integer immediate
    Constant(i32),

    /// Global symbol reference
    Global(String),

    /// Placeholder for an unresolved reference
    Undef,
}

impl Value {
    /// Immediates fold; everything else is only known at runtime.
    pub fn as_constant(&self) -> Option<i32> {
        match self {
            Value::Constant(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Reg(id) => write!(f, "%{id}"),
            Value::Constant(val) => write!(f, "{val}"),
            Value::Global(name) => write!(f, "@{name}"),
            Value::Undef => write!(f, "undef"),
        }
    }
}
