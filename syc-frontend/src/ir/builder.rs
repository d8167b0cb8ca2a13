//! IR builder
//!
//! The sole instruction-emission facade. Owns the function under
//! construction (and thereby the single insertion block) plus the
//! per-function register counter. Every `build_*` method appends exactly one
//! instruction; emitting with no current function is an internal error, not
//! a panic.

use crate::ir::{BasicBlock, Function, ICmpCond, Instruction, IrBinaryOp, IrType, Value};
use syc_common::RegId;

/// Builder for constructing IR
pub struct IrBuilder {
    current_function: Option<Function>,
    next_reg: RegId,
}

impl IrBuilder {
    pub fn new() -> Self {
        Self {
            current_function: None,
            next_reg: 0,
        }
    }

    fn new_reg(&mut self) -> RegId {
        let reg = self.next_reg;
        self.next_reg += 1;
        reg
    }

    /// Start a new function. The register counter restarts at 0 and the
    /// first `param_count` registers become the parameters.
    pub fn create_function(
        &mut self,
        name: String,
        return_type: IrType,
        param_count: usize,
    ) -> Vec<RegId> {
        let mut function = Function::new(name, return_type);
        self.next_reg = 0;

        let mut params = Vec::with_capacity(param_count);
        for _ in 0..param_count {
            params.push(self.new_reg());
        }
        function.params = params.clone();

        self.current_function = Some(function);
        params
    }

    /// Take the finished function out of the builder
    pub fn finish_function(&mut self) -> Option<Function> {
        self.current_function.take()
    }

    /// True when the insertion block already ends in a terminator
    pub fn current_block_has_terminator(&self) -> bool {
        self.current_function
            .as_ref()
            .is_some_and(|function| function.entry_block().has_terminator())
    }

    fn insertion_block(&mut self) -> Result<&mut BasicBlock, String> {
        match self.current_function.as_mut() {
            Some(function) => Ok(function.entry_block_mut()),
            None => Err("No current function".to_string()),
        }
    }

    fn add_instruction(&mut self, instr: Instruction) -> Result<(), String> {
        self.insertion_block()?.add_instruction(instr);
        Ok(())
    }

    /// Reserve a stack slot: a scalar, or a flat array of `elems` scalars.
    /// Returns the slot address as a fresh register.
    pub fn build_alloca(&mut self, elems: Option<u32>) -> Result<Value, String> {
        let result = self.new_reg();
        self.add_instruction(Instruction::Alloca { result, elems })?;
        Ok(Value::Reg(result))
    }

    /// Write a scalar to an address
    pub fn build_store(&mut self, value: Value, ptr: Value) -> Result<(), String> {
        self.add_instruction(Instruction::Store { value, ptr })
    }

    /// Read a scalar from an address
    pub fn build_load(&mut self, ptr: Value) -> Result<Value, String> {
        let result = self.new_reg();
        self.add_instruction(Instruction::Load { result, ptr })?;
        Ok(Value::Reg(result))
    }

    /// Binary arithmetic on two scalars
    pub fn build_binary(
        &mut self,
        op: IrBinaryOp,
        lhs: Value,
        rhs: Value,
    ) -> Result<Value, String> {
        let result = self.new_reg();
        self.add_instruction(Instruction::Binary {
            result,
            op,
            lhs,
            rhs,
        })?;
        Ok(Value::Reg(result))
    }

    /// Integer compare producing a 1-bit register
    pub fn build_icmp(&mut self, cond: ICmpCond, lhs: Value, rhs: Value) -> Result<Value, String> {
        let result = self.new_reg();
        self.add_instruction(Instruction::ICmp {
            result,
            cond,
            lhs,
            rhs,
        })?;
        Ok(Value::Reg(result))
    }

    /// Widen an i1 compare result to the scalar integer type. This is the
    /// only boolean-to-integer path.
    pub fn build_zext(&mut self, value: Value) -> Result<Value, String> {
        let result = self.new_reg();
        self.add_instruction(Instruction::ZExt { result, value })?;
        Ok(Value::Reg(result))
    }

    /// Address of one element in a flat array of `elems` scalars
    pub fn build_gep(&mut self, base: Value, index: Value, elems: u32) -> Result<Value, String> {
        let result = self.new_reg();
        self.add_instruction(Instruction::GetElementPtr {
            result,
            base,
            index,
            elems,
        })?;
        Ok(Value::Reg(result))
    }

    /// Call a function; void callees produce no result register
    pub fn build_call(
        &mut self,
        callee: &str,
        args: Vec<Value>,
        return_type: IrType,
    ) -> Result<Option<Value>, String> {
        let result = if return_type.is_void() {
            None
        } else {
            Some(self.new_reg())
        };
        self.add_instruction(Instruction::Call {
            result,
            callee: callee.to_string(),
            args,
        })?;
        Ok(result.map(Value::Reg))
    }

    /// Terminate the function
    pub fn build_ret(&mut self, value: Option<Value>) -> Result<(), String> {
        self.add_instruction(Instruction::Ret { value })
    }
}

impl Default for IrBuilder {
    fn default() -> Self {
        Self::new()
    }
}
