//! # pasquale
//!
//! pasquale is an interpreter for a small subset of Pascal written in Rust.
//! Source text is tokenized, parsed into an abstract syntax tree, checked
//! against a scoped symbol table and finally executed by a tree-walking
//! evaluator that keeps one frame per procedure call.
//!
//! ```text
//! PROGRAM Part10;
//! VAR
//!    number     : INTEGER;
//!    a, b, c, x : INTEGER;
//!    y          : REAL;
//!
//! BEGIN {Part10}
//!    BEGIN
//!       number := 2;
//!       a := number;
//!       b := 10 * a + 10 * number DIV 4;
//!       c := a - - b
//!    END;
//!    x := 11;
//!    y := 20 / 7 + 3.14;
//! END.  {Part10}
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{
        evaluator::{core::Config, memory::Bindings},
        parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the node types the parser produces: the program,
/// blocks, declarations, statements and expressions. Nodes carry source
/// positions for diagnostics, and calls and variable references carry node
/// ids for the analyzer's side-table.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, analysis or execution. Every error carries a message and the
/// line and column it refers to.
///
/// # Responsibilities
/// - Defines one error enum per phase, plus the umbrella [`error::Error`].
/// - Attaches line and column numbers for context.
/// - Implements the standard error traits for reporting.
pub mod error;
/// Orchestrates the phases of the pipeline.
///
/// Lexer, parser, analyzer, evaluator and runtime values live here.
pub mod interpreter;
/// General utilities for safe numeric conversion and formatting.
pub mod util;

pub use crate::interpreter::{analyzer::core::analyze, evaluator::core::execute, lexer::tokenize};

/// Parses `source` into a [`Program`].
///
/// # Errors
/// Returns the first lexical or syntax error.
///
/// # Examples
/// ```
/// use pasquale::parse;
///
/// assert!(parse("PROGRAM p; BEGIN END.").is_ok());
///
/// // A dangling operator.
/// let err = parse("PROGRAM p; VAR a : INTEGER; BEGIN a := 10 * ; END.").unwrap_err();
/// assert_eq!(err.column(), 45);
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source)?.parse()
}

/// Runs a program with the default [`Config`] and returns the bindings left
/// in the program frame.
///
/// # Errors
/// Returns an error if parsing, analysis or execution fails. Nothing is
/// executed unless parsing and analysis both succeed.
///
/// # Examples
/// ```
/// use pasquale::{interpreter::value::core::Value, run};
///
/// let source = "PROGRAM p; VAR a : INTEGER; BEGIN a := 2 + 7 * 4 END.";
/// let bindings = run(source).unwrap();
/// assert_eq!(bindings.get("a"), Some(Value::Integer(30)));
///
/// // `b` is not declared.
/// let source = "PROGRAM p; VAR a : INTEGER; BEGIN a := b END.";
/// assert!(run(source).is_err());
/// ```
pub fn run(source: &str) -> Result<Bindings, Error> {
    run_with_config(source, Config::default())
}

/// Runs a program with an explicit [`Config`].
///
/// # Errors
/// Returns an error if parsing, analysis or execution fails.
pub fn run_with_config(source: &str, config: Config) -> Result<Bindings, Error> {
    let program = parse(source)?;
    let resolutions = analyze(&program)?;
    Ok(execute(&program, &resolutions, config)?)
}
