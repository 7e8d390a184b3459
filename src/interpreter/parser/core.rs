use crate::{
    ast::{NodeId, Position, Program},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser.
///
/// There is one method per grammar rule, spread over the modules of
/// [`crate::interpreter::parser`]. The parser pulls tokens from its
/// [`Lexer`] on demand and never looks more than one token ahead.
pub struct Parser<'src> {
    pub(super) lexer: Lexer<'src>,
    next_id:          u32,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`.
    ///
    /// # Errors
    /// Returns a lexical error if the first token is malformed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        Ok(Self { lexer:   Lexer::new(source)?,
                  next_id: 0, })
    }

    /// Parses a complete program and checks that nothing follows it.
    ///
    /// Grammar: `program := PROGRAM ident ';' block '.'`
    ///
    /// # Errors
    /// Returns the first lexical or syntax error in the source.
    ///
    /// # Example
    /// ```
    /// use pasquale::interpreter::parser::core::Parser;
    ///
    /// let program = Parser::new("PROGRAM Demo; BEGIN END.").unwrap().parse().unwrap();
    /// assert_eq!(program.name, "demo");
    /// assert!(program.block.compound.statements.is_empty());
    /// ```
    pub fn parse(mut self) -> ParseResult<Program> {
        let keyword = self.lexer.eat(&[TokenKind::Program])?;
        let (name, _) = self.parse_identifier()?;
        self.lexer.eat(&[TokenKind::Semi])?;
        let block = self.parse_block()?;
        self.lexer.eat(&[TokenKind::Dot])?;

        if self.lexer.has_more() {
            return Err(self.lexer.unexpected(&[TokenKind::Eof]));
        }

        Ok(Program { name,
                     block,
                     position: token_position(&keyword) })
    }

    /// Hands out the next node id.
    pub(in crate::interpreter::parser) const fn next_node_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// The position of the first character of `token`.
pub(in crate::interpreter::parser) const fn token_position(token: &Token) -> Position {
    Position::new(token.line, token.column)
}
