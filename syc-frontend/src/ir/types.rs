//! IR type system
//!
//! Exactly two scalar types exist: the 32-bit signed integer and void.
//! Arrays are not first-class here; a symbol carries its dimension list and
//! storage is a flat buffer of scalars.

use serde::{Deserialize, Serialize};
use std::fmt;

/// IR type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrType {
    I32,
    Void,
}

impl IrType {
    pub fn is_void(&self) -> bool {
        matches!(self, IrType::Void)
    }
}

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrType::I32 => write!(f, "i32"),
            IrType::Void => write!(f, "void"),
        }
    }
}
