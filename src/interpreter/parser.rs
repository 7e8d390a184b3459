/// Parser state, the entry point and the `program` rule.
///
/// Holds the [`core::Parser`] type, the shared [`core::ParseResult`] alias
/// and the node id counter used by the analyzer's side-table.
pub mod core;

/// Block and declaration rules.
///
/// Parses declaration sections (`VAR` lists and nested procedures) and the
/// blocks that contain them.
pub mod block;

/// Statement rules.
///
/// Compound statements, assignments and procedure calls.
pub mod statement;

/// Binary expression rules.
///
/// The `expr` and `term` precedence levels, both left-associative.
pub mod binary;

/// The `factor` rule, including prefix `+` and `-`.
pub mod unary;

/// Helpers shared by the grammar rules.
pub mod utils;
