use std::fmt;

/// Lexing and parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// AST: unrecognized characters, unterminated comments, oversized literals
/// and tokens that do not fit the grammar.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing an analyzed
/// program, such as division by zero, integer overflow or reading a variable
/// that the current frame does not hold.
pub mod runtime_error;
/// Semantic errors.
///
/// Name resolution and arity errors raised by the analyzer: undeclared
/// identifiers, duplicate declarations, calls of non-procedures and argument
/// count mismatches.
pub mod semantic_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;

/// Any error produced by the pipeline.
///
/// Every phase has its own error type; this enum wraps them so that callers
/// of [`crate::run`] get a single type carrying a message and a source
/// location. All errors are fatal: no phase recovers from them.
#[derive(Debug)]
pub enum Error {
    /// A lexical or syntax error.
    Parse(ParseError),
    /// A name resolution or arity error.
    Semantic(SemanticError),
    /// An error raised during execution.
    Runtime(RuntimeError),
}

impl Error {
    /// The source line the error was reported at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Semantic(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }

    /// The source column the error was reported at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Parse(e) => e.column(),
            Self::Semantic(e) => e.column(),
            Self::Runtime(e) => e.column(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<SemanticError> for Error {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Semantic(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
