use crate::ast::{ProcedureDeclaration, TypeSpec};

/// A procedure as seen by callers: its declaration and the scope level it
/// was declared in.
///
/// The declaration is borrowed from the AST, so a binding can only outlive
/// the analysis as long as the program it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcedureBinding<'ast> {
    /// The declaration node, giving access to parameters and body.
    pub declaration:     &'ast ProcedureDeclaration,
    /// Level of the scope the procedure name was registered in.
    pub declaring_scope: usize,
}

impl ProcedureBinding<'_> {
    /// Number of formal parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.declaration.params.len()
    }
}

/// An entry in the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol<'ast> {
    /// `INTEGER` or `REAL`; only present in the global scope.
    BuiltinType(TypeSpec),
    /// A declared variable or formal parameter.
    Variable {
        /// Name of the variable.
        name:      String,
        /// Its declared type.
        type_spec: TypeSpec,
    },
    /// A declared procedure.
    Procedure(ProcedureBinding<'ast>),
}

impl Symbol<'_> {
    /// The name the symbol is registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BuiltinType(type_spec) => type_spec.name(),
            Self::Variable { name, .. } => name,
            Self::Procedure(binding) => &binding.declaration.name,
        }
    }
}
