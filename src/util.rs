/// Numeric conversion and formatting helpers.
///
/// This module holds the promotion of integers to reals and the shared
/// formatting of real numbers used by tokens and runtime values.
pub mod num;
