use std::fmt;

use crate::{
    ast::LiteralValue,
    util::num::{format_real, i64_to_f64},
};

/// Represents a runtime value in the interpreter.
///
/// Every variable binding and every evaluated expression is one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64 bit integer value.
    Integer(i64),
    /// A double precision floating-point value.
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        (*literal).into()
    }
}

impl Value {
    /// Converts the value to a real, promoting integers.
    ///
    /// # Example
    /// ```
    /// use pasquale::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_real(), 3.0);
    /// assert_eq!(Value::Real(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    pub const fn as_real(&self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(*n),
            Self::Real(r) => *r,
        }
    }

    /// Name of the value's type, as spelled in declarations.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Real(_) => "REAL",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => f.write_str(&format_real(*r)),
        }
    }
}
