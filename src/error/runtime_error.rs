#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Read a variable that holds no value in the frames visible to the
    /// current call.
    UnknownVariable {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The evaluator reached a state the analyzer should have ruled out.
    Internal {
        /// What went wrong.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
}

impl RuntimeError {
    /// The source line the error was reported at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::TypeError { line, .. }
            | Self::DivisionByZero { line, .. }
            | Self::Overflow { line, .. }
            | Self::Internal { line, .. } => *line,
        }
    }

    /// The source column the error was reported at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnknownVariable { column, .. }
            | Self::TypeError { column, .. }
            | Self::DivisionByZero { column, .. }
            | Self::Overflow { column, .. }
            | Self::Internal { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line, column } => write!(f,
                                                                   "Error on line {line}, column {column}: Variable '{name}' has no value in the current frame."),
            Self::TypeError { details,
                              line,
                              column, } => {
                write!(f, "Error on line {line}, column {column}: Type error: {details}.")
            },
            Self::DivisionByZero { line, column } => {
                write!(f, "Error on line {line}, column {column}: Division by zero.")
            },
            Self::Overflow { line, column } => write!(f,
                                                      "Error on line {line}, column {column}: Integer overflow while trying to compute result."),
            Self::Internal { details,
                             line,
                             column, } => write!(f,
                                                 "Error on line {line}, column {column}: Internal error: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
