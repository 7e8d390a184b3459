use crate::{
    ast::{Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_, '_> {
    /// Evaluates a unary operation on a value.
    ///
    /// `+` is the identity and `-` negates.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Overflow`] when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use pasquale::{
    ///     ast::{Position, UnaryOperator},
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Minus, Value::Integer(5), Position::default());
    /// assert_eq!(v.unwrap(), Value::Integer(-5));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Plus, Value::Real(1.5), Position::default());
    /// assert_eq!(v.unwrap(), Value::Real(1.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, position: Position) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, value) => Ok(value),
            (UnaryOperator::Minus, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line:   position.line,
                                                 column: position.column, })
            },
            (UnaryOperator::Minus, Value::Real(r)) => Ok(Value::Real(-r)),
        }
    }
}
