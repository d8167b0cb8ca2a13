//! IR operations
//!
//! Binary arithmetic opcodes and integer compare conditions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary arithmetic operations in IR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrBinaryOp {
    Add,
    Sub,
    Mul,
    SDiv,
    SRem,
}

impl fmt::Display for IrBinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            IrBinaryOp::Add => "add",
            IrBinaryOp::Sub => "sub",
            IrBinaryOp::Mul => "mul",
            IrBinaryOp::SDiv => "sdiv",
            IrBinaryOp::SRem => "srem",
        };
        write!(f, "{op_str}")
    }
}

/// Integer compare conditions (results are 1-bit and must be widened with
/// `zext` before use as a general value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ICmpCond {
    Eq,
    Ne,
    Slt,
    Sgt,
    Sle,
    Sge,
}

impl fmt::Display for ICmpCond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cond_str = match self {
            ICmpCond::Eq => "eq",
            ICmpCond::Ne => "ne",
            ICmpCond::Slt => "slt",
            ICmpCond::Sgt => "sgt",
            ICmpCond::Sle => "sle",
            ICmpCond::Sge => "sge",
        };
        write!(f, "{cond_str}")
    }
}
