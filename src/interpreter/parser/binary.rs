use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, token_position},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// Handles left-associative `+` and `-`.
    ///
    /// Grammar: `expr := term (('+' | '-') term)*`
    ///
    /// # Example
    /// ```
    /// use pasquale::{
    ///     ast::{BinaryOperator, Expr, Statement},
    ///     parse,
    /// };
    ///
    /// let program = parse("PROGRAM p; VAR a : INTEGER; BEGIN a := 1 - 2 - 3 END.").unwrap();
    /// let Statement::Assignment { value, .. } = &program.block.compound.statements[0] else {
    ///     panic!("expected an assignment");
    /// };
    /// // (1 - 2) - 3
    /// let Expr::BinaryOp { left, op, .. } = value else { panic!("expected a binary op") };
    /// assert_eq!(*op, BinaryOperator::Sub);
    /// assert!(matches!(**left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
    /// ```
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        while let Some(token) = self.lexer.peek(&[TokenKind::Plus, TokenKind::Minus]) {
            let op = if token.kind == TokenKind::Plus {
                BinaryOperator::Add
            } else {
                BinaryOperator::Sub
            };
            let position = token_position(token);
            self.lexer.eat(&[])?;
            let right = self.parse_term()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative `*`, `/` and `DIV`.
    ///
    /// Grammar: `term := factor (('*' | '/' | DIV) factor)*`
    fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        while let Some(token) =
            self.lexer
                .peek(&[TokenKind::Mul, TokenKind::FloatDiv, TokenKind::IntegerDiv])
        {
            let op = match token.kind {
                TokenKind::Mul => BinaryOperator::Mul,
                TokenKind::FloatDiv => BinaryOperator::Div,
                _ => BinaryOperator::IntegerDiv,
            };
            let position = token_position(token);
            self.lexer.eat(&[])?;
            let right = self.parse_factor()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
        }
        Ok(left)
    }
}
