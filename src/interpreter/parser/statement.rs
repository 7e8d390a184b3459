use crate::{
    ast::{CompoundStatement, ProcedureCall, Statement, VariableRef},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, token_position},
    },
};

impl Parser<'_> {
    /// Parses `BEGIN statement_list END`.
    ///
    /// Statements are separated by `;`. Empty statements, as produced by a
    /// stray or trailing `;`, are dropped.
    ///
    /// # Errors
    /// Returns a `ParseError` if a statement is followed by anything other
    /// than `;` or `END`.
    pub(in crate::interpreter::parser) fn parse_compound_statement(
        &mut self)
        -> ParseResult<CompoundStatement> {
        let begin = self.lexer.eat(&[TokenKind::Begin])?;

        let mut statements = Vec::new();
        loop {
            if let Some(statement) = self.parse_statement()? {
                statements.push(statement);
            }
            if self.lexer.peek(&[TokenKind::Semi]).is_none() {
                break;
            }
            self.lexer.eat(&[TokenKind::Semi])?;
        }

        if self.lexer.peek(&[TokenKind::End]).is_none() {
            return Err(self.lexer.unexpected(&[TokenKind::Semi, TokenKind::End]));
        }
        self.lexer.eat(&[TokenKind::End])?;

        Ok(CompoundStatement { statements,
                               position: token_position(&begin) })
    }

    /// Parses a single, possibly empty, statement.
    ///
    /// Grammar:
    /// ```text
    ///     statement      := compound_stmt | assignment | procedure_call | ε
    ///     assignment     := ident ':=' expr
    ///     procedure_call := ident '(' (expr (',' expr)*)? ')'
    /// ```
    /// Assignments and calls share the leading identifier; the token after
    /// it decides between them.
    ///
    /// # Returns
    /// `None` for the empty statement.
    fn parse_statement(&mut self) -> ParseResult<Option<Statement>> {
        if self.lexer.peek(&[TokenKind::Begin]).is_some() {
            return Ok(Some(Statement::Compound(self.parse_compound_statement()?)));
        }
        if self.lexer.peek(&[TokenKind::Identifier]).is_none() {
            return Ok(None);
        }

        let (name, position) = self.parse_identifier()?;

        if self.lexer.peek(&[TokenKind::Assign]).is_some() {
            let target = VariableRef { id: self.next_node_id(),
                                       name,
                                       position };
            self.lexer.eat(&[TokenKind::Assign])?;
            let value = self.parse_expression()?;
            return Ok(Some(Statement::Assignment { target, value }));
        }

        if self.lexer.peek(&[TokenKind::LParen]).is_some() {
            let id = self.next_node_id();
            self.lexer.eat(&[TokenKind::LParen])?;
            let arguments = self.parse_comma_separated(Self::parse_expression, TokenKind::RParen)?;
            return Ok(Some(Statement::ProcedureCall(ProcedureCall { id,
                                                                    name,
                                                                    arguments,
                                                                    position })));
        }

        Err(self.lexer.unexpected(&[TokenKind::Assign, TokenKind::LParen]))
    }
}
