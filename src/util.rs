/// Numeric text helpers.
///
/// This module converts between operand text and `f64` values. Parsing is
/// permissive: it reads the longest leading decimal literal of a token and
/// falls back to NaN, so malformed operands never raise an error. Formatting
/// renders results without a trailing `.0` and spells out infinities.
pub mod num;
