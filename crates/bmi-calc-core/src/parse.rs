//! Free-text numeric input parsing.
//!
//! Form fields hand over whatever the user typed. Anything that is not a
//! finite base-10 literal comes back as `None` so callers never deal with
//! parse errors.

/// Parse a raw text field as a finite real number.
///
/// Accepts an optional sign, a decimal point and an exponent (`"1.75e2"`).
/// Leading and trailing ASCII whitespace and control characters are ignored;
/// other Unicode spacing (no-break space, em space) makes the text invalid.
/// Empty text, malformed literals and
/// non-finite values (`NaN`, `inf`, overflow) all yield `None`.
///
/// # Examples
///
/// ```
/// use bmi_calc_core::parse::parse_number;
///
/// assert_eq!(parse_number("170"), Some(170.0));
/// assert_eq!(parse_number(" -10.5 "), Some(-10.5));
/// assert_eq!(parse_number("abc"), None);
/// assert_eq!(parse_number(""), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(is_ignorable);
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Characters stripped from both ends of a field: space and ASCII controls.
const fn is_ignorable(c: char) -> bool {
    c <= ' '
}
