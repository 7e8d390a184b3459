use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

use crate::{ast::TypeSpec, interpreter::analyzer::symbol::Symbol};

/// A stack of lexical scopes.
///
/// Scope `0` is the global scope and is pre-seeded with the builtin types.
/// A new scope is pushed for every procedure body, covering its parameters
/// and locals. Lookups walk from the innermost scope outwards.
///
/// # Example
/// ```
/// use pasquale::{
///     ast::TypeSpec,
///     interpreter::analyzer::{scope::SymbolTable, symbol::Symbol},
/// };
///
/// let mut table = SymbolTable::new();
/// table.insert(Symbol::Variable { name:      "x".to_string(),
///                                 type_spec: TypeSpec::Integer, });
/// {
///     let inner = table.enter_scope();
///     assert_eq!(inner.level(), 1);
///     assert_eq!(inner.lookup("x").map(|(level, _)| level), Some(0));
/// }
/// assert_eq!(table.level(), 0);
/// ```
#[derive(Debug)]
pub struct SymbolTable<'ast> {
    scopes: Vec<HashMap<String, Symbol<'ast>>>,
}

#[allow(clippy::new_without_default)]
impl<'ast> SymbolTable<'ast> {
    /// Creates a table holding only the global scope with `INTEGER` and
    /// `REAL` registered.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self { scopes: vec![HashMap::new()] };
        table.insert(Symbol::BuiltinType(TypeSpec::Integer));
        table.insert(Symbol::BuiltinType(TypeSpec::Real));
        table
    }

    /// Index of the innermost scope.
    #[must_use]
    pub fn level(&self) -> usize {
        self.scopes.len() - 1
    }

    /// Registers `symbol` in the innermost scope under its own name.
    pub fn insert(&mut self, symbol: Symbol<'ast>) {
        let name = symbol.name().to_string();
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, symbol);
        }
    }

    /// Looks `name` up from the innermost scope outwards.
    ///
    /// # Returns
    /// The level of the scope holding the first match, and the symbol.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<(usize, &Symbol<'ast>)> {
        self.scopes
            .iter()
            .enumerate()
            .rev()
            .find_map(|(level, scope)| scope.get(name).map(|symbol| (level, symbol)))
    }

    /// Looks `name` up in the innermost scope only.
    #[must_use]
    pub fn lookup_current(&self, name: &str) -> Option<&Symbol<'ast>> {
        self.scopes.last().and_then(|scope| scope.get(name))
    }

    /// Pushes a new innermost scope.
    ///
    /// The returned guard derefs to the table and pops the scope when it is
    /// dropped, including when analysis bails out with `?`.
    pub fn enter_scope(&mut self) -> ScopeGuard<'_, 'ast> {
        self.scopes.push(HashMap::new());
        ScopeGuard { table: self }
    }
}

/// Keeps a scope pushed for as long as it lives.
pub struct ScopeGuard<'table, 'ast> {
    table: &'table mut SymbolTable<'ast>,
}

impl<'ast> Deref for ScopeGuard<'_, 'ast> {
    type Target = SymbolTable<'ast>;

    fn deref(&self) -> &Self::Target {
        self.table
    }
}

impl DerefMut for ScopeGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.table
    }
}

impl Drop for ScopeGuard<'_, '_> {
    fn drop(&mut self) {
        self.table.scopes.pop();
    }
}
