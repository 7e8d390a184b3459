/// Core evaluation logic and configuration.
///
/// Contains the [`core::Interpreter`], the statement and expression
/// dispatch, and the frame lookup policy.
pub mod core;

/// Runtime memory.
///
/// Call frames, the frame stack with its scoped push, and the ordered
/// variable bindings handed back to callers.
pub mod memory;

/// Procedure call evaluation.
///
/// Builds the callee's frame from the caller's argument values and runs the
/// procedure body inside it.
pub mod call;

/// Binary operator evaluation logic.
///
/// Arithmetic with integer-to-real promotion, true division and truncating
/// integer division.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;
