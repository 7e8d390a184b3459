use crate::{
    ast::ProcedureCall,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Interpreter},
        memory::{Frame, Memory},
    },
};

impl Interpreter<'_, '_> {
    /// Executes a procedure call.
    ///
    /// The callee comes from the analyzer's resolutions. Arguments are
    /// evaluated in the caller's frame and bound to the parameter names in a
    /// new frame at the callee's scope level. The frame is popped when the
    /// body finishes, whether it succeeds or fails.
    ///
    /// # Errors
    /// - [`RuntimeError::Internal`] if the call was never resolved.
    /// - Any error raised while evaluating the arguments or the body.
    pub(in crate::interpreter::evaluator) fn exec_procedure_call(&self,
                                                                 call: &ProcedureCall,
                                                                 memory: &mut Memory)
                                                                 -> EvalResult<()> {
        let internal = |details: String| RuntimeError::Internal { details,
                                                                  line: call.position.line,
                                                                  column: call.position.column };

        let binding = self.resolutions.procedure(call.id).ok_or_else(|| {
                                                              internal(format!("call of '{}' was never resolved",
                                                                               call.name))
                                                          })?;
        let declaration = binding.declaration;

        let static_link = memory.frame_for_scope(binding.declaring_scope)
                                .ok_or_else(|| {
                                    internal(format!("no active frame for scope level {}",
                                                     binding.declaring_scope))
                                })?;
        let mut frame = Frame::new(&declaration.name,
                                   binding.declaring_scope + 1,
                                   Some(static_link));

        for (param, argument) in declaration.params.iter().zip(&call.arguments) {
            let value = self.eval(argument, memory)?;
            frame.variables.insert(&param.name, value);
        }

        let mut guard = memory.push_frame(frame);
        self.exec_block(&declaration.block, &mut guard)
    }
}
