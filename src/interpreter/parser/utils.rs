use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenValue},
        parser::core::{ParseResult, Parser, token_position},
    },
};

impl Parser<'_> {
    /// Parses a plain identifier and returns its (lowercased) name together
    /// with its position.
    ///
    /// # Errors
    /// Returns a `ParseError` if the current token is not an identifier.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self)
                                                           -> ParseResult<(String, Position)> {
        let token = self.lexer.eat(&[TokenKind::Identifier])?;
        let position = token_position(&token);
        match token.value {
            Some(TokenValue::Identifier(name)) => Ok((name, position)),
            _ => Err(ParseError::UnexpectedToken { token:    token.describe(),
                                                   expected: TokenKind::Identifier.to_string(),
                                                   line:     position.line,
                                                   column:   position.column, }),
        }
    }

    /// Parses a comma-separated list of items until a closing token.
    ///
    /// An immediately encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse or if neither a comma
    /// nor the closing token follows an item.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        closing: TokenKind)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.lexer.peek(&[closing]).is_some() {
            self.lexer.eat(&[closing])?;
            return Ok(items);
        }
        loop {
            items.push(parse_item(self)?);
            let separator = self.lexer.eat(&[TokenKind::Comma, closing])?;
            if separator.kind == closing {
                return Ok(items);
            }
        }
    }
}
