//! Identifier types shared across compiler phases

/// Virtual register identifier for IR
///
/// Registers are numbered from 0 within each function and are bound exactly
/// once to an instruction result.
pub type RegId = u32;
