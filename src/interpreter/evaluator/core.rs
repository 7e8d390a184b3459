use crate::{
    ast::{Block, CompoundStatement, Expr, Program, Statement, VariableRef},
    error::RuntimeError,
    interpreter::{
        analyzer::core::Resolutions,
        evaluator::memory::{Bindings, Memory},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Where variable references are looked up at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameLookup {
    /// Reads and writes go to the top-of-stack frame only.
    ///
    /// A procedure therefore cannot see the variables of the program or of
    /// an enclosing procedure, even though the analyzer accepts such
    /// references; reading one fails with
    /// [`RuntimeError::UnknownVariable`].
    #[default]
    TopFrame,
    /// Reads and writes go to the frame of the block that declares the
    /// variable, found by following static links.
    StaticChain,
}

/// Evaluation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// How variable references find their frame.
    pub frame_lookup: FrameLookup,
}

/// Executes an analyzed program and returns the program frame's bindings.
///
/// `resolutions` must come from analyzing the same `program`; a call missing
/// from it is reported as [`RuntimeError::Internal`].
///
/// # Errors
/// Returns the first [`RuntimeError`] raised during execution.
///
/// # Example
/// ```
/// use pasquale::{
///     analyze, execute,
///     interpreter::{evaluator::core::Config, value::core::Value},
///     parse,
/// };
///
/// let program = parse("PROGRAM p; VAR a : INTEGER; BEGIN a := 6 * 7 END.").unwrap();
/// let resolutions = analyze(&program).unwrap();
/// let bindings = execute(&program, &resolutions, Config::default()).unwrap();
/// assert_eq!(bindings.get("a"), Some(Value::Integer(42)));
/// ```
pub fn execute(program: &Program,
               resolutions: &Resolutions<'_>,
               config: Config)
               -> EvalResult<Bindings> {
    let interpreter = Interpreter { resolutions,
                                    config };
    let mut memory = Memory::new(&program.name);
    interpreter.exec_block(&program.block, &mut memory)?;
    Ok(memory.into_bindings())
}

/// The tree-walking evaluator.
///
/// It holds only read-only state; the frame stack is threaded through the
/// visits by reference so that a [`FrameGuard`] can own it while a
/// procedure body runs.
///
/// [`FrameGuard`]: crate::interpreter::evaluator::memory::FrameGuard
pub struct Interpreter<'res, 'ast> {
    pub(in crate::interpreter::evaluator) resolutions: &'res Resolutions<'ast>,
    pub(in crate::interpreter::evaluator) config:      Config,
}

impl Interpreter<'_, '_> {
    /// Executes the statements of a block. Declarations have no runtime
    /// effect.
    pub(in crate::interpreter::evaluator) fn exec_block(&self,
                                                        block: &Block,
                                                        memory: &mut Memory)
                                                        -> EvalResult<()> {
        self.exec_compound(&block.compound, memory)
    }

    fn exec_compound(&self, compound: &CompoundStatement, memory: &mut Memory) -> EvalResult<()> {
        for statement in &compound.statements {
            self.exec_statement(statement, memory)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// Assignments evaluate their right-hand side first and then store the
    /// value in the frame chosen by the [`FrameLookup`] policy.
    fn exec_statement(&self, statement: &Statement, memory: &mut Memory) -> EvalResult<()> {
        match statement {
            Statement::Compound(compound) => self.exec_compound(compound, memory),
            Statement::Assignment { target, value } => {
                let value = self.eval(value, memory)?;
                let frame = self.frame_of(target, memory)?;
                memory.frame_mut(frame).variables.insert(&target.name, value);
                Ok(())
            },
            Statement::ProcedureCall(call) => self.exec_procedure_call(call, memory),
        }
    }

    /// Evaluates an expression in the current frame.
    ///
    /// The evaluator dispatches on the expression variant: literals,
    /// variables, unary and binary operations.
    pub(in crate::interpreter::evaluator) fn eval(&self,
                                                  expr: &Expr,
                                                  memory: &Memory)
                                                  -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable(variable) => self.eval_variable(variable, memory),
            Expr::UnaryOp { op, expr, position } => {
                let operand = self.eval(expr, memory)?;
                Self::eval_unary(*op, operand, *position)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left, memory)?;
                let right = self.eval(right, memory)?;
                Self::eval_binary(*op, left, right, *position)
            },
        }
    }

    /// Looks up a variable.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] if the frame holds no value
    /// for the name.
    fn eval_variable(&self, variable: &VariableRef, memory: &Memory) -> EvalResult<Value> {
        let frame = self.frame_of(variable, memory)?;
        memory.frame(frame)
              .variables
              .get(&variable.name)
              .ok_or_else(|| RuntimeError::UnknownVariable { name:   variable.name.clone(),
                                                             line:   variable.position.line,
                                                             column: variable.position.column, })
    }

    /// Picks the frame a variable reference reads from or writes to.
    fn frame_of(&self, variable: &VariableRef, memory: &Memory) -> EvalResult<usize> {
        match self.config.frame_lookup {
            FrameLookup::TopFrame => Ok(memory.top_index()),
            FrameLookup::StaticChain => {
                let internal = |details: String| RuntimeError::Internal { details,
                                                                          line: variable.position
                                                                                        .line,
                                                                          column: variable.position
                                                                                          .column };
                let level = self.resolutions
                                .variable_scope(variable.id)
                                .ok_or_else(|| {
                                    internal(format!("variable '{}' was never resolved",
                                                     variable.name))
                                })?;
                memory.frame_for_scope(level).ok_or_else(|| {
                                                 internal(format!("no active frame for scope \
                                                                   level {level}"))
                                             })
            },
        }
    }
}
