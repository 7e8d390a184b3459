use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_, '_> {
    /// Evaluates a binary arithmetic operation.
    ///
    /// - `+`, `-` and `*` stay integral when both operands are integers and
    ///   promote to real otherwise.
    /// - `/` always produces a real.
    /// - `DIV` truncates toward zero and accepts integers only.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] for `/` or `DIV` by zero.
    /// - [`RuntimeError::TypeError`] for `DIV` with a real operand.
    /// - [`RuntimeError::Overflow`] when integer arithmetic overflows.
    ///
    /// # Example
    /// ```
    /// use pasquale::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let at = Position::default();
    /// let (twenty, eight) = (Value::Integer(20), Value::Integer(8));
    /// let div = Interpreter::eval_binary(BinaryOperator::Div, twenty, eight, at).unwrap();
    /// assert_eq!(div, Value::Real(2.5));
    ///
    /// let (minus_seven, two) = (Value::Integer(-7), Value::Integer(2));
    /// let int_div =
    ///     Interpreter::eval_binary(BinaryOperator::IntegerDiv, minus_seven, two, at).unwrap();
    /// assert_eq!(int_div, Value::Integer(-3));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, IntegerDiv, Mul, Sub};
        use Value::{Integer, Real};

        let overflow = RuntimeError::Overflow { line:   position.line,
                                                column: position.column, };
        let division_by_zero = RuntimeError::DivisionByZero { line:   position.line,
                                                              column: position.column, };

        match (op, left, right) {
            (IntegerDiv, Integer(_), Integer(0)) => Err(division_by_zero),
            (IntegerDiv, Integer(a), Integer(b)) => a.checked_div(b).map(Integer).ok_or(overflow),
            (IntegerDiv, ..) => {
                Err(RuntimeError::TypeError { details: format!("DIV expects INTEGER operands, found {} and {}",
                                                                left.type_name(),
                                                                right.type_name()),
                                              line:    position.line,
                                              column:  position.column, })
            },
            (Add | Sub | Mul, Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    _ => a.checked_mul(b),
                };
                result.map(Integer).ok_or(overflow)
            },
            (Add | Sub | Mul | Div, ..) => {
                let (a, b) = (left.as_real(), right.as_real());
                Ok(Real(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            _ => {
                                if b == 0.0 {
                                    return Err(division_by_zero);
                                }
                                a / b
                            },
                        }))
            },
        }
    }
}
