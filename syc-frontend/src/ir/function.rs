//! Function definitions

use crate::ir::{BasicBlock, IrType};
use serde::{Deserialize, Serialize};
use std::fmt;
use syc_common::RegId;

/// Function in IR
///
/// Parameters are registers drawn from the same per-function counter as
/// instruction results, so they always occupy `%0 .. %k-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub return_type: IrType,
    pub params: Vec<RegId>,
    pub blocks: Vec<BasicBlock>,
}

impl Function {
    pub fn new(name: String, return_type: IrType) -> Self {
        Self {
            name,
            return_type,
            params: Vec::new(),
            blocks: vec![BasicBlock::new("mainEntry")],
        }
    }

    pub fn entry_block(&self) -> &BasicBlock {
        &self.blocks[0]
    }

    pub fn entry_block_mut(&mut self) -> &mut BasicBlock {
        &mut self.blocks[0]
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "define {} @{}(", self.return_type, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "i32 %{param}")?;
        }
        writeln!(f, ") {{")?;
        for block in &self.blocks {
            write!(f, "{block}")?;
        }
        writeln!(f, "}}")
    }
}
