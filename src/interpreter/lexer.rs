use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult, util::num::format_real};

/// Raw lexemes as recognized by the generated state machine.
///
/// Keywords are not distinguished here: every word comes out as
/// [`RawToken::Word`] and is classified against [`KEYWORDS`] afterwards, so
/// that keyword matching is case-insensitive while identifiers keep a single
/// canonical spelling.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// Real literals such as `3.14`. A trailing dot without digits is not
    /// part of the literal.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    Real(f64),
    /// Integer literals such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifiers and keywords.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `:`
    #[token(":")]
    Colon,
    /// A `{` that no `}` closes. Closed `{ comments }`, which do not nest,
    /// match the same pattern and are skipped by [`skip_comment`].
    #[regex(r"\{[^}]*\}?", skip_comment)]
    UnterminatedComment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Blanks, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so that
/// columns can be derived from token spans.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// The kind of a token.
///
/// `TokenKind` carries no payload so that sets of kinds can be passed to
/// [`Lexer::peek`] and [`Lexer::eat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Returned forever once reached.
    Eof,
    /// An integer literal.
    IntegerConst,
    /// A real literal.
    RealConst,
    /// An identifier (stored lowercase).
    Identifier,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    FloatDiv,
    /// `DIV`
    IntegerDiv,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `.`
    Dot,
    /// `;`
    Semi,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `:=`
    Assign,
    /// `BEGIN`
    Begin,
    /// `END`
    End,
    /// `VAR`
    Var,
    /// `PROGRAM`
    Program,
    /// `PROCEDURE`
    Procedure,
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
}

/// Reserved words, keyed by their upper-case spelling.
const KEYWORDS: &[(&str, TokenKind)] = &[("BEGIN", TokenKind::Begin),
                                         ("END", TokenKind::End),
                                         ("DIV", TokenKind::IntegerDiv),
                                         ("INTEGER", TokenKind::Integer),
                                         ("REAL", TokenKind::Real),
                                         ("VAR", TokenKind::Var),
                                         ("PROGRAM", TokenKind::Program),
                                         ("PROCEDURE", TokenKind::Procedure)];

impl TokenKind {
    /// The fixed source spelling of this kind, if it has one.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Eof | Self::IntegerConst | Self::RealConst | Self::Identifier => None,
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Mul => Some("*"),
            Self::FloatDiv => Some("/"),
            Self::IntegerDiv => Some("DIV"),
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::Dot => Some("."),
            Self::Semi => Some(";"),
            Self::Colon => Some(":"),
            Self::Comma => Some(","),
            Self::Assign => Some(":="),
            Self::Begin => Some("BEGIN"),
            Self::End => Some("END"),
            Self::Var => Some("VAR"),
            Self::Program => Some("PROGRAM"),
            Self::Procedure => Some("PROCEDURE"),
            Self::Integer => Some("INTEGER"),
            Self::Real => Some("REAL"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.symbol()) {
            (_, Some(symbol)) => write!(f, "'{symbol}'"),
            (Self::Eof, None) => f.write_str("end of input"),
            (Self::IntegerConst, None) => f.write_str("integer literal"),
            (Self::RealConst, None) => f.write_str("real literal"),
            (_, None) => f.write_str("identifier"),
        }
    }
}

/// The payload of a literal or identifier token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Value of an integer literal.
    Integer(i64),
    /// Value of a real literal.
    Real(f64),
    /// Lowercased identifier text.
    Identifier(String),
}

/// A located token.
///
/// `line` and `column` are 1-based and point at the token's first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The literal value or identifier text, if any.
    pub value:  Option<TokenValue>,
    /// The source line of the first character.
    pub line:   usize,
    /// The source column of the first character.
    pub column: usize,
}

impl Token {
    /// Describes the token for diagnostics: its text in quotes, or
    /// `end of input`.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            format!("'{self}'")
        }
    }
}

/// Renders the token as source text that lexes back to an equal token.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, self.kind.symbol()) {
            (Some(TokenValue::Integer(n)), _) => write!(f, "{n}"),
            (Some(TokenValue::Real(r)), _) => f.write_str(&format_real(*r)),
            (Some(TokenValue::Identifier(name)), _) => f.write_str(name),
            (None, Some(symbol)) => f.write_str(symbol),
            (None, None) => Ok(()),
        }
    }
}

/// An on-demand tokenizer.
///
/// The lexer always holds the current token; the parser inspects it with
/// [`peek`](Self::peek) and consumes it with [`eat`](Self::eat). No separate
/// tokenization pass takes place.
///
/// # Example
/// ```
/// use pasquale::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x := 1").unwrap();
/// assert!(lexer.peek(&[TokenKind::Identifier]).is_some());
/// lexer.eat(&[TokenKind::Identifier]).unwrap();
/// lexer.eat(&[TokenKind::Assign]).unwrap();
/// lexer.eat(&[TokenKind::IntegerConst]).unwrap();
/// assert!(!lexer.has_more());
/// ```
pub struct Lexer<'src> {
    inner:   logos::Lexer<'src, RawToken>,
    current: Token,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns a lexical [`ParseError`] if the first token is malformed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let inner = RawToken::lexer_with_extras(source, LexerExtras { line:       1,
                                                                      line_start: 0, });
        let mut lexer = Self { inner,
                               current: Token { kind:   TokenKind::Eof,
                                                value:  None,
                                                line:   1,
                                                column: 1, } };
        lexer.current = lexer.next_token()?;
        Ok(lexer)
    }

    /// Whether tokens other than the end sentinel remain.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.current.kind != TokenKind::Eof
    }

    /// The current token, regardless of its kind.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Returns the current token without consuming it if its kind is one of
    /// `kinds`. An empty `kinds` matches nothing.
    #[must_use]
    pub fn peek(&self, kinds: &[TokenKind]) -> Option<&Token> {
        kinds.contains(&self.current.kind).then_some(&self.current)
    }

    /// Consumes and returns the current token if its kind is one of `kinds`.
    /// An empty `kinds` accepts any token.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] if the kind does not match, or
    /// a lexical error if the following token is malformed.
    pub fn eat(&mut self, kinds: &[TokenKind]) -> ParseResult<Token> {
        if !kinds.is_empty() && !kinds.contains(&self.current.kind) {
            return Err(self.unexpected(kinds));
        }
        let next = self.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Builds an "unexpected token" error for the current token.
    #[must_use]
    pub fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        let expected = if expected.is_empty() {
            "a different token".to_string()
        } else {
            expected.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" or ")
        };
        ParseError::UnexpectedToken { token: self.current.describe(),
                                      expected,
                                      line: self.current.line,
                                      column: self.current.column }
    }

    /// Reads the next token from the underlying state machine.
    fn next_token(&mut self) -> ParseResult<Token> {
        let Some(raw) = self.inner.next() else {
            let (line, column) = self.location(self.inner.source().len());
            return Ok(Token { kind: TokenKind::Eof,
                              value: None,
                              line,
                              column });
        };
        let (line, column) = self.location(self.inner.span().start);

        let (kind, value) = match raw {
            Ok(RawToken::Integer(n)) => (TokenKind::IntegerConst, Some(TokenValue::Integer(n))),
            Ok(RawToken::Real(r)) => (TokenKind::RealConst, Some(TokenValue::Real(r))),
            Ok(RawToken::Word) => classify_word(self.inner.slice()),
            Ok(RawToken::Plus) => (TokenKind::Plus, None),
            Ok(RawToken::Minus) => (TokenKind::Minus, None),
            Ok(RawToken::Star) => (TokenKind::Mul, None),
            Ok(RawToken::Slash) => (TokenKind::FloatDiv, None),
            Ok(RawToken::LParen) => (TokenKind::LParen, None),
            Ok(RawToken::RParen) => (TokenKind::RParen, None),
            Ok(RawToken::Dot) => (TokenKind::Dot, None),
            Ok(RawToken::Semicolon) => (TokenKind::Semi, None),
            Ok(RawToken::Comma) => (TokenKind::Comma, None),
            Ok(RawToken::Assign) => (TokenKind::Assign, None),
            Ok(RawToken::Colon) => (TokenKind::Colon, None),
            Ok(RawToken::UnterminatedComment) => {
                return Err(ParseError::UnterminatedComment { line, column });
            },
            // Skipped by their callbacks.
            Ok(RawToken::NewLine | RawToken::Ignored) => {
                unreachable!("skipped lexemes are never yielded")
            },
            Err(()) => {
                let slice = self.inner.slice();
                return Err(if slice.starts_with(|c: char| c.is_ascii_digit()) {
                               ParseError::IntegerTooLarge { literal: slice.to_string(),
                                                             line,
                                                             column }
                           } else {
                               ParseError::UnexpectedCharacter { character: slice.chars()
                                                                                 .next()
                                                                                 .unwrap_or('?'),
                                                                 line,
                                                                 column }
                           });
            },
        };

        Ok(Token { kind,
                   value,
                   line,
                   column })
    }

    /// Converts a byte offset on the current line into a `(line, column)`
    /// pair. Columns count characters, not bytes.
    fn location(&self, offset: usize) -> (usize, usize) {
        let extras = &self.inner.extras;
        let source = self.inner.source();
        let column = source.get(extras.line_start..offset)
                           .map_or(0, |text| text.chars().count());
        (extras.line, column + 1)
    }
}

/// Tokenizes the whole of `source`, including the trailing end token.
///
/// # Errors
/// Returns the first lexical error encountered.
///
/// # Example
/// ```
/// use pasquale::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("BEGIN a := 2 END").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Begin,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::IntegerConst,
///             TokenKind::End,
///             TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = Lexer::new(source)?;
    let mut tokens = Vec::new();
    loop {
        let token = lexer.eat(&[])?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Splits a word into a keyword or a lowercased identifier.
///
/// Keywords are matched on the upper-cased text; identifiers are stored
/// lower-cased.
fn classify_word(word: &str) -> (TokenKind, Option<TokenValue>) {
    let upper = word.to_ascii_uppercase();
    KEYWORDS.iter()
            .find(|(keyword, _)| *keyword == upper)
            .map_or_else(|| {
                             (TokenKind::Identifier,
                              Some(TokenValue::Identifier(word.to_ascii_lowercase())))
                         },
                         |(_, kind)| (*kind, None))
}

/// Skips a closed comment while keeping the line bookkeeping in step with
/// the newlines inside it. A comment that runs to the end of the input is
/// emitted instead, so that it is reported at its opening brace.
fn skip_comment(lex: &mut logos::Lexer<RawToken>) -> logos::FilterResult<(), ()> {
    let comment = lex.slice();
    if !comment.ends_with('}') {
        return logos::FilterResult::Emit(());
    }
    if let Some(last) = comment.rfind('\n') {
        lex.extras.line += comment.matches('\n').count();
        lex.extras.line_start = lex.span().start + last + 1;
    }
    logos::FilterResult::Skip
}

/// Parses a real literal from the current token slice.
fn parse_real(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the literal does not fit into an `i64`.
fn parse_integer(lex: &logos::Lexer<RawToken>) -> Option<i64> {
    lex.slice().parse().ok()
}
