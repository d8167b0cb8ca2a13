//! SysY Compiler - Common Types and Diagnostics
//!
//! This crate contains shared types, error definitions, and diagnostic
//! utilities used across all components of the SysY compiler.

pub mod error;
pub mod source_loc;
pub mod types;

pub use error::{CompilerError, Diagnostic, ErrorReporter, Severity};
pub use source_loc::{SourceLocation, SourceSpan};
pub use types::RegId;
