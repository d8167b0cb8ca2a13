//! IR instructions
//!
//! Defines all instruction kinds available in the IR. Each variant renders
//! one output line; variants carrying a result register render as
//! `%n = <opcode> <operands>`, the rest as `<opcode> <operands>`.

use crate::ir::{ICmpCond, IrBinaryOp, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use syc_common::RegId;

/// IR instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Reserve a stack slot: one scalar (`elems` None) or a flat array of
    /// `elems` scalars
    Alloca { result: RegId, elems: Option<u32> },

    /// Store a scalar to an address
    Store { value: Value, ptr: Value },

    /// Load a scalar from an address
    Load { result: RegId, ptr: Value },

    /// Binary arithmetic: result = op lhs, rhs
    Binary {
        result: RegId,
        op: IrBinaryOp,
        lhs: Value,
        rhs: Value,
    },

    /// Integer compare: result (i1) = icmp cond lhs, rhs
    ICmp {
        result: RegId,
        cond: ICmpCond,
        lhs: Value,
        rhs: Value,
    },

    /// Widen an i1 compare result back to the scalar integer type
    ZExt { result: RegId, value: Value },

    /// Address of one element in a flat array of `elems` scalars
    GetElementPtr {
        result: RegId,
        base: Value,
        index: Value,
        elems: u32,
    },

    /// Function call; `result` is None for void callees
    Call {
        result: Option<RegId>,
        callee: String,
        args: Vec<Value>,
    },

    /// Return from the function
    Ret { value: Option<Value> },
}

impl Instruction {
    /// Returns of either flavor end a block
    pub fn is_terminator(&self) -> bool {
        matches!(self, Instruction::Ret { .. })
    }

    /// The register this instruction defines, if any
    pub fn result(&self) -> Option<RegId> {
        match self {
            Instruction::Alloca { result, .. }
            | Instruction::Load { result, .. }
            | Instruction::Binary { result, .. }
            | Instruction::ICmp { result, .. }
            | Instruction::ZExt { result, .. }
            | Instruction::GetElementPtr { result, .. } => Some(*result),
            Instruction::Call { result, .. } => *result,
            Instruction::Store { .. } | Instruction::Ret { .. } => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Alloca { result, elems: None } => {
                write!(f, "%{result} = alloca i32, align 4")
            }
            Instruction::Alloca {
                result,
                elems: Some(n),
            } => {
                write!(f, "%{result} = alloca [{n} x i32], align 16")
            }
            Instruction::Store { value, ptr } => {
                write!(f, "store i32 {value}, i32* {ptr}, align 4")
            }
            Instruction::Load { result, ptr } => {
                write!(f, "%{result} = load i32, i32* {ptr}, align 4")
            }
            Instruction::Binary {
                result,
                op,
                lhs,
                rhs,
            } => {
                write!(f, "%{result} = {op} i32 {lhs}, {rhs}")
            }
            Instruction::ICmp {
                result,
                cond,
                lhs,
                rhs,
            } => {
                write!(f, "%{result} = icmp {cond} i32 {lhs}, {rhs}")
            }
            Instruction::ZExt { result, value } => {
                write!(f, "%{result} = zext i1 {value} to i32")
            }
            Instruction::GetElementPtr {
                result,
                base,
                index,
                elems,
            } => {
                write!(
                    f,
                    "%{result} = getelementptr [{elems} x i32], [{elems} x i32]* {base}, i32 0, i32 {index}"
                )
            }
            Instruction::Call {
                result,
                callee,
                args,
            } => {
                if let Some(result) = result {
                    write!(f, "%{result} = call i32 @{callee}(")?;
                } else {
                    write!(f, "call void @{callee}(")?;
                }
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "i32 {arg}")?;
                }
                write!(f, ")")
            }
            Instruction::Ret { value: Some(value) } => write!(f, "ret i32 {value}"),
            Instruction::Ret { value: None } => write!(f, "ret void"),
        }
    }
}
