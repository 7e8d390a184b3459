/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` in magnitude are rounded to the closest
/// representable value, as in any mixed integer/real arithmetic.
///
/// ## Example
/// ```
/// use pasquale::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Formats a real number so that it always reads back as a real.
///
/// Rust prints `2.0_f64` as `2`, which the lexer would take for an integer
/// literal. Whole numbers therefore get an explicit `.0`. Non-finite values
/// are printed as-is; they cannot appear in source text anyway.
///
/// ## Example
/// ```
/// use pasquale::util::num::format_real;
///
/// assert_eq!(format_real(2.0), "2.0");
/// assert_eq!(format_real(3.14), "3.14");
/// assert_eq!(format_real(-0.5), "-0.5");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    let text = value.to_string();
    if !value.is_finite() || text.contains('.') {
        text
    } else {
        text + ".0"
    }
}
