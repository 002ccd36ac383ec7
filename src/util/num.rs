/// Spelling used for infinities when parsing and printing.
pub const INFINITY_LITERAL: &str = "Infinity";

/// Parses the longest numeric prefix of `text`, or returns NaN.
///
/// Leading whitespace, as [`is_separator_space`] defines it, is skipped. The
/// accepted prefix is an optional sign followed by either `Infinity` or a
/// decimal literal with optional fraction and exponent. Anything after the prefix is ignored; text without a numeric
/// prefix yields NaN.
///
/// # Example
/// ```
/// use polcalc::util::num::parse_lenient;
///
/// assert_eq!(parse_lenient("2.5"), 2.5);
/// assert_eq!(parse_lenient("-2"), -2.0);
/// assert_eq!(parse_lenient("12px"), 12.0);
/// assert_eq!(parse_lenient("1e3"), 1000.0);
/// assert_eq!(parse_lenient("1e"), 1.0);
/// assert_eq!(parse_lenient("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_lenient("hello").is_nan());
/// assert!(parse_lenient("").is_nan());
/// assert_eq!(parse_lenient("\u{FEFF}5"), 5.0);
/// assert!(parse_lenient("\u{85}5").is_nan());
/// ```
#[must_use]
pub fn parse_lenient(text: &str) -> f64 {
    leading_number(text.trim_start_matches(is_separator_space)).unwrap_or(f64::NAN)
}

/// Whitespace skipped before an operand literal.
///
/// Tab, vertical tab, form feed, the byte order mark, line terminators
/// (including U+2028 and U+2029) and every space separator. Unlike
/// [`char::is_whitespace`], U+0085 is not included and U+FEFF is.
#[must_use]
pub const fn is_separator_space(c: char) -> bool {
    matches!(c,
             '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
             | '\u{2000}'..='\u{200A}'
             | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}')
}

/// Reads the decimal literal at the start of `text`, if there is one.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if text[end..].starts_with(INFINITY_LITERAL) {
        let negative = bytes[0] == b'-';
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_start = (end + 1 + sign).min(bytes.len());
        let exp_digits = count_digits(&bytes[exp_start..]);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Renders a result the way the shell prints it.
///
/// Integral values carry no fractional part, infinities are spelled out, and
/// negative zero prints as `0`. Magnitudes of at least `1e21` or below `1e-6`
/// switch to exponent notation with an explicit exponent sign.
///
/// # Example
/// ```
/// use polcalc::util::num::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(-1.5e300), "-1.5e+300");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// assert_eq!(format_number(1e20), "100000000000000000000");
/// assert_eq!(format_number(0.000001), "0.000001");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            format!("-{INFINITY_LITERAL}")
        } else {
            INFINITY_LITERAL.to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else if !(EXPONENT_BELOW..EXPONENT_FROM).contains(&value.abs()) {
        exponent_form(value)
    } else {
        value.to_string()
    }
}

/// Smallest magnitude printed in plain decimal notation.
const EXPONENT_BELOW: f64 = 1e-6;
/// Magnitude from which results are printed in exponent notation.
const EXPONENT_FROM: f64 = 1e21;

/// Shortest exponent form, with `+` on non-negative exponents.
fn exponent_form(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => formatted,
    }
}
