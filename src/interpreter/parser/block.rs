use crate::{
    ast::{Block, Declaration, ProcedureDeclaration, TypeSpec, VariableDeclaration},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, token_position},
    },
};

impl Parser<'_> {
    /// Parses a block.
    ///
    /// Grammar: `block := declarations compound_stmt`
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        let declarations = self.parse_declarations()?;
        let compound = self.parse_compound_statement()?;
        Ok(Block { declarations,
                   compound })
    }

    /// Parses the declaration section of a block.
    ///
    /// Grammar:
    /// ```text
    ///     declarations := (VAR (var_decl ';')+)? (procedure_decl)*
    /// ```
    /// Each name in `a, b : INTEGER` becomes its own
    /// [`Declaration::Variable`].
    fn parse_declarations(&mut self) -> ParseResult<Vec<Declaration>> {
        let mut declarations = Vec::new();

        if self.lexer.peek(&[TokenKind::Var]).is_some() {
            self.lexer.eat(&[TokenKind::Var])?;
            loop {
                let group = self.parse_variable_declaration()?;
                declarations.extend(group.into_iter().map(Declaration::Variable));
                self.lexer.eat(&[TokenKind::Semi])?;
                if self.lexer.peek(&[TokenKind::Identifier]).is_none() {
                    break;
                }
            }
        }

        while self.lexer.peek(&[TokenKind::Procedure]).is_some() {
            declarations.push(Declaration::Procedure(self.parse_procedure_declaration()?));
        }

        Ok(declarations)
    }

    /// Parses one group of variables sharing a type.
    ///
    /// Grammar: `var_decl := ident (',' ident)* ':' type`
    fn parse_variable_declaration(&mut self) -> ParseResult<Vec<VariableDeclaration>> {
        let mut names = vec![self.parse_identifier()?];
        while self.lexer.peek(&[TokenKind::Comma]).is_some() {
            self.lexer.eat(&[TokenKind::Comma])?;
            names.push(self.parse_identifier()?);
        }
        self.lexer.eat(&[TokenKind::Colon])?;

        let type_token = self.lexer.eat(&[TokenKind::Integer, TokenKind::Real])?;
        let type_spec = if type_token.kind == TokenKind::Integer {
            TypeSpec::Integer
        } else {
            TypeSpec::Real
        };
        let type_position = token_position(&type_token);

        Ok(names.into_iter()
                .map(|(name, position)| VariableDeclaration { name,
                                                              type_spec,
                                                              position,
                                                              type_position })
                .collect())
    }

    /// Parses a procedure declaration.
    ///
    /// Grammar:
    /// ```text
    ///     procedure_decl := PROCEDURE ident ('(' params ')')? ';' block ';'
    ///     params         := var_decl (';' var_decl)*
    /// ```
    fn parse_procedure_declaration(&mut self) -> ParseResult<ProcedureDeclaration> {
        self.lexer.eat(&[TokenKind::Procedure])?;
        let (name, position) = self.parse_identifier()?;

        let mut params = Vec::new();
        if self.lexer.peek(&[TokenKind::LParen]).is_some() {
            self.lexer.eat(&[TokenKind::LParen])?;
            params.extend(self.parse_variable_declaration()?);
            while self.lexer.peek(&[TokenKind::Semi]).is_some() {
                self.lexer.eat(&[TokenKind::Semi])?;
                params.extend(self.parse_variable_declaration()?);
            }
            self.lexer.eat(&[TokenKind::RParen])?;
        }

        self.lexer.eat(&[TokenKind::Semi])?;
        let block = self.parse_block()?;
        self.lexer.eat(&[TokenKind::Semi])?;

        Ok(ProcedureDeclaration { name,
                                  params,
                                  block,
                                  position })
    }
}
