//! SysY Compiler - Frontend and IR Generation
//!
//! This crate provides the frontend components for the SysY compiler:
//! - Lexer: tokenizes SysY source code
//! - Parser: builds AST from tokens
//! - AST: abstract syntax tree definitions
//! - IR: the register-based textual intermediate representation
//! - IR generation: lowers the AST into an IR module

pub mod ast;
pub mod ir;
pub mod irgen;
pub mod lexer;
pub mod parser;

pub use ast::{CompUnit, Declaration, FunctionDef, TopLevelItem, TypeSpec};
pub use ir::{IrBuilder, IrType, Module, Value};
pub use irgen::{IrGenerator, SymbolTable};
pub use lexer::{Lexer, Token, TokenType};
pub use parser::{ParseError, Parser};

use syc_common::{CompilerError, ErrorReporter};

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Parse SysY source code into an AST
    pub fn parse_source(source: &str) -> Result<CompUnit, CompilerError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;

        let mut parser = Parser::new(tokens);
        parser.parse_comp_unit()
    }

    /// Compile SysY source code to an IR module.
    ///
    /// Source-level problems are collected in the returned reporter; the
    /// module is always complete. `Err` here means the input did not lex or
    /// parse, or an internal invariant broke.
    pub fn compile_to_ir(source: &str) -> Result<(Module, ErrorReporter), CompilerError> {
        let ast = Self::parse_source(source)?;
        let generator = IrGenerator::new();
        generator.generate(&ast)
    }

    /// Tokenize source code (for debugging)
    pub fn tokenize_source(source: &str) -> Result<Vec<Token>, CompilerError> {
        let mut lexer = Lexer::new(source);
        lexer.tokenize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_parse_simple_function() {
        let source = r#"
int main() {
    return 42;
}
"#;

        let ast = Frontend::parse_source(source).unwrap();
        assert_eq!(ast.items.len(), 1);

        match &ast.items[0] {
            TopLevelItem::Function(func) => {
                assert_eq!(func.name, "main");
                assert_eq!(func.return_type, TypeSpec::Int);
            }
            _ => panic!("Expected function definition"),
        }
    }

    #[test]
    fn test_frontend_tokenize() {
        let source = "int x = 42;";
        let tokens = Frontend::tokenize_source(source).unwrap();

        // Should have: int, x, =, 42, ;, EOF
        assert_eq!(tokens.len(), 6);
        assert!(matches!(tokens[0].token_type, TokenType::Int));
        assert!(matches!(tokens[1].token_type, TokenType::Identifier(_)));
        assert!(matches!(tokens[2].token_type, TokenType::Equal));
        assert!(matches!(tokens[3].token_type, TokenType::IntLiteral(42)));
        assert!(matches!(tokens[4].token_type, TokenType::Semicolon));
        assert!(matches!(tokens[5].token_type, TokenType::EndOfFile));
    }

    #[test]
    fn test_frontend_compile_clean_source_has_no_diagnostics() {
        let source = "int main() { return 0; }";
        let (module, reporter) = Frontend::compile_to_ir(source).unwrap();

        assert_eq!(module.functions.len(), 1);
        assert!(!reporter.has_errors());
    }
}
