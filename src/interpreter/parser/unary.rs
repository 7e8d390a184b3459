use crate::{
    ast::{Expr, LiteralValue, UnaryOperator, VariableRef},
    interpreter::{
        lexer::{TokenKind, TokenValue},
        parser::core::{ParseResult, Parser, token_position},
    },
};

/// Tokens that can start a factor, in the order reported by diagnostics.
const FACTOR_START: &[TokenKind] = &[TokenKind::IntegerConst,
                                     TokenKind::RealConst,
                                     TokenKind::LParen,
                                     TokenKind::Plus,
                                     TokenKind::Minus,
                                     TokenKind::Identifier];

impl Parser<'_> {
    /// Parses a factor.
    ///
    /// Prefix `+` and `-` recurse into `factor` itself, so chains such as
    /// `- - 3` nest to the right and bind tighter than any binary operator.
    ///
    /// Grammar:
    /// ```text
    ///     factor := NUMBER
    ///             | '(' expr ')'
    ///             | ('+' | '-') factor
    ///             | ident
    /// ```
    /// # Errors
    /// Returns a `ParseError` naming the offending token if it cannot start a
    /// factor.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.lexer.peek(FACTOR_START) else {
            return Err(self.lexer.unexpected(FACTOR_START));
        };
        let (kind, position) = (token.kind, token_position(token));

        match kind {
            TokenKind::Plus | TokenKind::Minus => {
                let op = if kind == TokenKind::Plus {
                    UnaryOperator::Plus
                } else {
                    UnaryOperator::Minus
                };
                self.lexer.eat(&[])?;
                let expr = self.parse_factor()?;
                Ok(Expr::UnaryOp { op,
                                   expr: Box::new(expr),
                                   position })
            },
            TokenKind::LParen => {
                self.lexer.eat(&[TokenKind::LParen])?;
                let expr = self.parse_expression()?;
                self.lexer.eat(&[TokenKind::RParen])?;
                Ok(expr)
            },
            TokenKind::Identifier => {
                let (name, position) = self.parse_identifier()?;
                Ok(Expr::Variable(VariableRef { id: self.next_node_id(),
                                                name,
                                                position }))
            },
            _ => {
                let literal = self.lexer.eat(FACTOR_START)?;
                let value = match literal.value {
                    Some(TokenValue::Integer(n)) => LiteralValue::Integer(n),
                    Some(TokenValue::Real(r)) => LiteralValue::Real(r),
                    _ => return Err(self.lexer.unexpected(FACTOR_START)),
                };
                Ok(Expr::Literal { value, position })
            },
        }
    }
}
