#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character that starts no token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// A `{` comment that is never closed.
    UnterminatedComment {
        /// The line of the opening brace.
        line:   usize,
        /// The column of the opening brace.
        column: usize,
    },
    /// An integer literal that does not fit into 64 bits.
    IntegerTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// Found a token that fits none of the grammar alternatives.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser would have accepted instead.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
}

impl ParseError {
    /// Whether this error was raised by the lexer rather than the parser.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        !matches!(self, Self::UnexpectedToken { .. })
    }

    /// The source line the error was reported at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedComment { line, .. }
            | Self::IntegerTooLarge { line, .. }
            | Self::UnexpectedToken { line, .. } => *line,
        }
    }

    /// The source column the error was reported at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::UnterminatedComment { column, .. }
            | Self::IntegerTooLarge { column, .. }
            | Self::UnexpectedToken { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character,
                                        line,
                                        column, } => write!(f,
                                                            "Error on line {line}, column {column}: Unexpected character '{character}'."),
            Self::UnterminatedComment { line, column } => write!(f,
                                                                 "Error on line {line}, column {column}: Comment is never closed."),
            Self::IntegerTooLarge { literal,
                                    line,
                                    column, } => write!(f,
                                                        "Error on line {line}, column {column}: Integer literal {literal} is too large."),
            Self::UnexpectedToken { token,
                                    expected,
                                    line,
                                    column, } => write!(f,
                                                        "Error on line {line}, column {column}: Unexpected token {token}, expected {expected}."),
        }
    }
}

impl std::error::Error for ParseError {}
