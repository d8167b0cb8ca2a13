//! Declaration and function-definition parsing

use super::Parser;
use crate::ast::*;
use crate::lexer::TokenType;
use syc_common::{CompilerError, SourceSpan};

impl Parser {
    /// Parse `['const'] 'int' VarDef (',' VarDef)* ';'`
    pub(crate) fn parse_declaration(&mut self) -> Result<Declaration, CompilerError> {
        let start = self.current_location();
        let is_const = self.match_token(&TokenType::Const);
        self.expect(TokenType::Int, "declaration")?;

        let mut defs = vec![self.parse_var_def()?];
        while self.match_token(&TokenType::Comma) {
            defs.push(self.parse_var_def()?);
        }
        self.expect(TokenType::Semicolon, "declaration")?;

        let end = self.current_location();
        Ok(Declaration {
            is_const,
            defs,
            span: SourceSpan::new(start, end),
        })
    }

    /// Parse `Ident ('[' Exp ']')* ['=' InitVal]`
    fn parse_var_def(&mut self) -> Result<VarDef, CompilerError> {
        let (name, name_span) = self.expect_identifier("variable definition")?;

        let mut dims = Vec::new();
        while self.match_token(&TokenType::LeftBracket) {
            dims.push(self.parse_expression()?);
            self.expect(TokenType::RightBracket, "array dimension")?;
        }

        let init = if self.match_token(&TokenType::Equal) {
            Some(self.parse_init_val()?)
        } else {
            None
        };

        let end = self.current_location();
        Ok(VarDef {
            name,
            dims,
            init,
            span: SourceSpan::new(name_span.start, end),
        })
    }

    /// Parse `Exp | '{' [InitVal (',' InitVal)*] '}'`
    pub(crate) fn parse_init_val(&mut self) -> Result<Initializer, CompilerError> {
        let start = self.current_location();

        if self.match_token(&TokenType::LeftBrace) {
            let mut items = Vec::new();
            if !self.check(&TokenType::RightBrace) {
                items.push(self.parse_init_val()?);
                while self.match_token(&TokenType::Comma) {
                    items.push(self.parse_init_val()?);
                }
            }
            self.expect(TokenType::RightBrace, "initializer list")?;
            let end = self.current_location();
            return Ok(Initializer {
                kind: InitializerKind::List(items),
                span: SourceSpan::new(start, end),
            });
        }

        let expr = self.parse_expression()?;
        let span = expr.span.clone();
        Ok(Initializer {
            kind: InitializerKind::Expr(expr),
            span,
        })
    }

    /// Parse `('int'|'void') Ident '(' [Param (',' Param)*] ')' Block`
    pub(crate) fn parse_function(&mut self) -> Result<FunctionDef, CompilerError> {
        let start = self.current_location();

        let return_type = if self.match_token(&TokenType::Void) {
            TypeSpec::Void
        } else {
            self.expect(TokenType::Int, "function return type")?;
            TypeSpec::Int
        };

        let (name, _) = self.expect_identifier("function definition")?;
        self.expect(TokenType::LeftParen, "function definition")?;

        let mut params = Vec::new();
        if !self.check(&TokenType::RightParen) {
            params.push(self.parse_param()?);
            while self.match_token(&TokenType::Comma) {
                params.push(self.parse_param()?);
            }
        }
        self.expect(TokenType::RightParen, "function definition")?;

        let body = self.parse_block()?;
        let end = self.current_location();

        Ok(FunctionDef {
            return_type,
            name,
            params,
            body,
            span: SourceSpan::new(start, end),
        })
    }

    /// Parse `'int' Ident ['[' ']' ('[' Exp ']')*]`
    ///
    /// Array-shaped parameters are accepted syntactically; lowering rejects
    /// them with a diagnostic.
    fn parse_param(&mut self) -> Result<Param, CompilerError> {
        let start = self.current_location();
        self.expect(TokenType::Int, "parameter")?;
        let (name, _) = self.expect_identifier("parameter")?;

        let mut is_array = false;
        if self.match_token(&TokenType::LeftBracket) {
            is_array = true;
            self.expect(TokenType::RightBracket, "parameter")?;
            while self.match_token(&TokenType::LeftBracket) {
                self.parse_expression()?;
                self.expect(TokenType::RightBracket, "parameter")?;
            }
        }

        let end = self.current_location();
        Ok(Param {
            name,
            is_array,
            span: SourceSpan::new(start, end),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn parse_decl(input: &str) -> Declaration {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize().unwrap();
        let mut parser = Parser::new(tokens);
        parser.parse_declaration().unwrap()
    }

    #[test]
    fn test_scalar_declaration() {
        let decl = parse_decl("int a = 1;");
        assert!(!decl.is_const);
        assert_eq!(decl.defs.len(), 1);
        assert_eq!(decl.defs[0].name, "a");
        assert!(decl.defs[0].dims.is_empty());
        assert!(decl.defs[0].init.is_some());
    }

    #[test]
    fn test_multiple_defs() {
        let decl = parse_decl("int a, b = 2, c;");
        assert_eq!(decl.defs.len(), 3);
        assert!(decl.defs[0].init.is_none());
        assert!(decl.defs[1].init.is_some());
        assert!(decl.defs[2].init.is_none());
    }

    #[test]
    fn test_const_array_declaration() {
        let decl = parse_decl("const int m[2][3] = {{1, 2, 3}, {4}};");
        assert!(decl.is_const);
        let def = &decl.defs[0];
        assert_eq!(def.dims.len(), 2);
        match &def.init.as_ref().unwrap().kind {
            InitializerKind::List(items) => assert_eq!(items.len(), 2),
            _ => panic!("Expected initializer list"),
        }
    }

    #[test]
    fn test_nested_empty_initializer() {
        let decl = parse_decl("int a[2][2] = {{}, {}};");
        match &decl.defs[0].init.as_ref().unwrap().kind {
            InitializerKind::List(items) => {
                assert_eq!(items.len(), 2);
                for item in items {
                    assert!(matches!(&item.kind, InitializerKind::List(sub) if sub.is_empty()));
                }
            }
            _ => panic!("Expected initializer list"),
        }
    }
}
