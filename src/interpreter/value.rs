/// The runtime value type.
///
/// Defines [`core::Value`], the integer-or-real scalar every expression
/// evaluates to, together with promotion and formatting.
pub mod core;
