//! Numeric literal parsing and canonical number formatting.

/// Formats a number in canonical decimal form.
///
/// Integral values carry no fractional part and negative zero collapses to
/// `"0"`, so `123.0`, `123` and `-0.0`/`0.0` each have exactly one spelling.
///
/// # Examples
///
/// ```
/// use sheetmatch_model::format_number;
///
/// assert_eq!(format_number(123.0), "123");
/// assert_eq!(format_number(1.50), "1.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(100.0), "100");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    // `Display` for f64 already prints the shortest round-trip digits and
    // drops the fractional part of integral values.
    format!("{value}")
}

/// Parses a decimal or exponential numeric literal.
///
/// Accepts an optional sign, digits with an optional decimal point and an
/// optional exponent (`"42"`, `"-1.5"`, `".5"`, `"1e3"`, `"2.50E-2"`).
/// Rejects anything with trailing garbage (`"12abc"`), hexadecimal, the
/// `inf`/`nan` spellings and literals too large to be finite. Callers trim
/// first; surrounding whitespace is not accepted here.
pub fn parse_numeric_literal(text: &str) -> Option<f64> {
    let mut digits = 0usize;
    for ch in text.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '+' | '-' | '.' | 'e' | 'E' => {}
            _ => return None,
        }
    }
    if digits == 0 {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
