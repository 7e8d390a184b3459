#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the analyzer can raise.
pub enum SemanticError {
    /// A name that no enclosing scope declares.
    UndeclaredIdentifier {
        /// The identifier.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A name declared twice in the same scope.
    DuplicateIdentifier {
        /// The identifier.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A call whose target is not a procedure.
    NotAProcedure {
        /// The called name.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A variable reference whose name denotes something else, such as a
    /// procedure.
    NotAVariable {
        /// The referenced name.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A declaration whose type name does not denote a type.
    NotAType {
        /// The type name.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A call with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The called procedure.
        name:     String,
        /// Number of arguments at the call site.
        found:    usize,
        /// Number of declared parameters.
        expected: usize,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
}

impl SemanticError {
    /// The source line the error was reported at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndeclaredIdentifier { line, .. }
            | Self::DuplicateIdentifier { line, .. }
            | Self::NotAProcedure { line, .. }
            | Self::NotAVariable { line, .. }
            | Self::NotAType { line, .. }
            | Self::ArgumentCountMismatch { line, .. } => *line,
        }
    }

    /// The source column the error was reported at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UndeclaredIdentifier { column, .. }
            | Self::DuplicateIdentifier { column, .. }
            | Self::NotAProcedure { column, .. }
            | Self::NotAVariable { column, .. }
            | Self::NotAType { column, .. }
            | Self::ArgumentCountMismatch { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredIdentifier { name, line, column } => write!(f,
                                                                        "Error on line {line}, column {column}: Undeclared identifier '{name}'."),
            Self::DuplicateIdentifier { name, line, column } => write!(f,
                                                                       "Error on line {line}, column {column}: Duplicate identifier '{name}' found."),
            Self::NotAProcedure { name, line, column } => write!(f,
                                                                 "Error on line {line}, column {column}: '{name}' is not a procedure."),
            Self::NotAVariable { name, line, column } => write!(f,
                                                                "Error on line {line}, column {column}: '{name}' is not a variable."),
            Self::NotAType { name, line, column } => {
                write!(f, "Error on line {line}, column {column}: '{name}' is not a type.")
            },
            Self::ArgumentCountMismatch { name,
                                          found,
                                          expected,
                                          line,
                                          column, } => write!(f,
                                                              "Error on line {line}, column {column}: Procedure '{name}' called with {found} arguments but takes {expected}."),
        }
    }
}

impl std::error::Error for SemanticError {}
