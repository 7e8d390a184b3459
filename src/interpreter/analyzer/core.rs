use std::collections::HashMap;

use crate::{
    ast::{
        Block, CompoundStatement, Declaration, Expr, NodeId, ProcedureCall, ProcedureDeclaration,
        Program, Statement, VariableDeclaration, VariableRef,
    },
    error::SemanticError,
    interpreter::analyzer::{
        scope::SymbolTable,
        symbol::{ProcedureBinding, Symbol},
    },
};

/// Result type used by the analyzer.
pub type AnalysisResult<T> = Result<T, SemanticError>;

/// What the analyzer learned about the program.
///
/// This is a side-table keyed by [`NodeId`]: the AST itself is never
/// modified. The evaluator receives it explicitly and relies on it to find
/// the target of every call.
#[derive(Debug, Default)]
pub struct Resolutions<'ast> {
    procedures: HashMap<NodeId, ProcedureBinding<'ast>>,
    variables:  HashMap<NodeId, usize>,
}

impl<'ast> Resolutions<'ast> {
    /// The procedure a call resolved to.
    #[must_use]
    pub fn procedure(&self, id: NodeId) -> Option<&ProcedureBinding<'ast>> {
        self.procedures.get(&id)
    }

    /// The level of the scope that declares the variable behind a
    /// reference.
    #[must_use]
    pub fn variable_scope(&self, id: NodeId) -> Option<usize> {
        self.variables.get(&id).copied()
    }

    /// Number of resolved procedure calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.procedures.len()
    }
}

/// Runs the semantic analysis over a whole program.
///
/// # Errors
/// Returns the first [`SemanticError`] found; analysis does not continue
/// past it.
///
/// # Example
/// ```
/// use pasquale::{analyze, error::SemanticError, parse};
///
/// let program = parse("PROGRAM p; VAR a : INTEGER; BEGIN b := 1 END.").unwrap();
/// let err = analyze(&program).unwrap_err();
/// assert!(matches!(err, SemanticError::UndeclaredIdentifier { ref name, .. } if name == "b"));
/// ```
pub fn analyze(program: &Program) -> AnalysisResult<Resolutions<'_>> {
    let mut table = SymbolTable::new();
    let mut analyzer = Analyzer::default();
    analyzer.visit_block(&program.block, &mut table)?;
    Ok(analyzer.resolutions)
}

/// The analysis pass.
///
/// The symbol table is threaded through every visit by reference instead of
/// living in the analyzer, so that a [`ScopeGuard`] can hold it while the
/// analyzer keeps recording resolutions.
///
/// [`ScopeGuard`]: crate::interpreter::analyzer::scope::ScopeGuard
#[derive(Default)]
struct Analyzer<'ast> {
    resolutions: Resolutions<'ast>,
}

impl<'ast> Analyzer<'ast> {
    fn visit_block(&mut self,
                   block: &'ast Block,
                   table: &mut SymbolTable<'ast>)
                   -> AnalysisResult<()> {
        for declaration in &block.declarations {
            match declaration {
                Declaration::Variable(variable) => Self::visit_variable_declaration(variable, table)?,
                Declaration::Procedure(procedure) => {
                    self.visit_procedure_declaration(procedure, table)?;
                },
            }
        }
        self.visit_compound(&block.compound, table)
    }

    /// Declares a variable or parameter in the innermost scope.
    ///
    /// The type name must resolve to a builtin type. Redeclaring a name of
    /// the innermost scope is an error; shadowing an outer one is not.
    fn visit_variable_declaration(declaration: &VariableDeclaration,
                                  table: &mut SymbolTable<'ast>)
                                  -> AnalysisResult<()> {
        let type_name = declaration.type_spec.name();
        let type_spec = match table.lookup(type_name) {
            Some((_, Symbol::BuiltinType(type_spec))) => *type_spec,
            Some(_) => {
                return Err(SemanticError::NotAType { name:   type_name.to_string(),
                                                     line:   declaration.type_position.line,
                                                     column: declaration.type_position.column, });
            },
            None => {
                return Err(SemanticError::UndeclaredIdentifier { name:   type_name.to_string(),
                                                                 line:   declaration.type_position
                                                                                    .line,
                                                                 column: declaration.type_position
                                                                                    .column, });
            },
        };

        if table.lookup_current(&declaration.name).is_some() {
            return Err(SemanticError::DuplicateIdentifier { name:   declaration.name.clone(),
                                                            line:   declaration.position.line,
                                                            column: declaration.position.column, });
        }

        table.insert(Symbol::Variable { name: declaration.name.clone(),
                                        type_spec });
        Ok(())
    }

    /// Declares a procedure, then analyzes its body in a fresh scope.
    ///
    /// The procedure is registered before its body is visited, so it is
    /// visible to itself and to later declarations of the same block, but
    /// not to earlier ones.
    fn visit_procedure_declaration(&mut self,
                                   declaration: &'ast ProcedureDeclaration,
                                   table: &mut SymbolTable<'ast>)
                                   -> AnalysisResult<()> {
        if table.lookup_current(&declaration.name).is_some() {
            return Err(SemanticError::DuplicateIdentifier { name:   declaration.name.clone(),
                                                            line:   declaration.position.line,
                                                            column: declaration.position.column, });
        }
        table.insert(Symbol::Procedure(ProcedureBinding { declaration,
                                                          declaring_scope: table.level() }));

        let mut scope = table.enter_scope();
        for param in &declaration.params {
            Self::visit_variable_declaration(param, &mut scope)?;
        }
        self.visit_block(&declaration.block, &mut scope)
    }

    fn visit_compound(&mut self,
                      compound: &'ast CompoundStatement,
                      table: &mut SymbolTable<'ast>)
                      -> AnalysisResult<()> {
        for statement in &compound.statements {
            self.visit_statement(statement, table)?;
        }
        Ok(())
    }

    fn visit_statement(&mut self,
                       statement: &'ast Statement,
                       table: &mut SymbolTable<'ast>)
                       -> AnalysisResult<()> {
        match statement {
            Statement::Compound(compound) => self.visit_compound(compound, table),
            Statement::Assignment { target, value } => {
                self.resolve_variable(target, table)?;
                self.visit_expr(value, table)
            },
            Statement::ProcedureCall(call) => self.visit_procedure_call(call, table),
        }
    }

    /// Resolves the callee, checks the argument count and the arguments,
    /// and records the binding for the evaluator.
    fn visit_procedure_call(&mut self,
                            call: &'ast ProcedureCall,
                            table: &SymbolTable<'ast>)
                            -> AnalysisResult<()> {
        let binding = match table.lookup(&call.name) {
            Some((_, Symbol::Procedure(binding))) => *binding,
            Some(_) => {
                return Err(SemanticError::NotAProcedure { name:   call.name.clone(),
                                                          line:   call.position.line,
                                                          column: call.position.column, });
            },
            None => {
                return Err(SemanticError::UndeclaredIdentifier { name:   call.name.clone(),
                                                                 line:   call.position.line,
                                                                 column: call.position.column, });
            },
        };

        if call.arguments.len() != binding.arity() {
            return Err(SemanticError::ArgumentCountMismatch { name:     call.name.clone(),
                                                              found:    call.arguments.len(),
                                                              expected: binding.arity(),
                                                              line:     call.position.line,
                                                              column:   call.position.column, });
        }

        for argument in &call.arguments {
            self.visit_expr(argument, table)?;
        }

        self.resolutions.procedures.insert(call.id, binding);
        Ok(())
    }

    fn visit_expr(&mut self, expr: &Expr, table: &SymbolTable<'ast>) -> AnalysisResult<()> {
        match expr {
            Expr::Literal { .. } => Ok(()),
            Expr::Variable(variable) => self.resolve_variable(variable, table),
            Expr::UnaryOp { expr, .. } => self.visit_expr(expr, table),
            Expr::BinaryOp { left, right, .. } => {
                self.visit_expr(left, table)?;
                self.visit_expr(right, table)
            },
        }
    }

    fn resolve_variable(&mut self,
                        variable: &VariableRef,
                        table: &SymbolTable<'ast>)
                        -> AnalysisResult<()> {
        match table.lookup(&variable.name) {
            Some((level, Symbol::Variable { .. })) => {
                self.resolutions.variables.insert(variable.id, level);
                Ok(())
            },
            Some(_) => Err(SemanticError::NotAVariable { name:   variable.name.clone(),
                                                         line:   variable.position.line,
                                                         column: variable.position.column, }),
            None => Err(SemanticError::UndeclaredIdentifier { name:   variable.name.clone(),
                                                              line:   variable.position.line,
                                                              column: variable.position.column, }),
        }
    }
}
