/// The analyzer module checks names and arities before execution.
///
/// The analyzer walks the AST once with a scoped symbol table. It rejects
/// undeclared identifiers, duplicate declarations within a scope, calls of
/// things that are not procedures and calls with the wrong number of
/// arguments, and records what each call and variable reference resolves to.
///
/// # Responsibilities
/// - Maintains the static scope stack, one scope per procedure body.
/// - Reports semantic errors with source locations.
/// - Produces the resolution side-table the evaluator depends on.
pub mod analyzer;
/// The evaluator module executes an analyzed AST.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// assignments and procedure calls, and manages the stack of call frames.
/// It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates arithmetic with integer-to-real promotion.
/// - Pushes and pops one frame per procedure call.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for the parser.
///
/// The lexer reads the raw source text and hands out one located token at a
/// time, on demand. Identifiers are folded to lowercase and keywords are
/// recognized regardless of case.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Skips whitespace and `{ ... }` comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one method per grammar rule and a single
/// token of lookahead.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting the offending token and its location.
/// - Assigns node ids to calls and variable references.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers and reals.
/// - Provides promotion from integer to real.
pub mod value;
