/// The analysis pass and its output.
///
/// Walks the AST once, rejecting undeclared and duplicate names and call
/// arity mismatches, and records what every call and variable reference
/// resolves to.
pub mod core;

/// Scoped symbol table.
///
/// A stack of name-to-symbol maps with a guard type that pops the innermost
/// scope when it goes out of scope.
pub mod scope;

/// Symbols stored in the table.
pub mod symbol;
