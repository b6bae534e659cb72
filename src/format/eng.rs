// ============================================================================
// Engineering Notation
// Renders values with exponents in multiples of three
// ============================================================================

use crate::domain::PresentationConfig;
use crate::numeric::{RenardError, RenardResult};

/// SI magnitude prefix symbols by engineering exponent
const SI_PREFIXES: [(i32, &str); 16] = [
    (-24, "y"),
    (-21, "z"),
    (-18, "a"),
    (-15, "f"),
    (-12, "p"),
    (-9, "n"),
    (-6, "µ"),
    (-3, "m"),
    (3, "k"),
    (6, "M"),
    (9, "G"),
    (12, "T"),
    (15, "P"),
    (18, "E"),
    (21, "Z"),
    (24, "Y"),
];

/// SI prefix symbol for an engineering exponent, if one exists.
pub fn si_prefix(exponent: i32) -> Option<&'static str> {
    SI_PREFIXES
        .iter()
        .find(|(e, _)| *e == exponent)
        .map(|(_, symbol)| *symbol)
}

/// Largest multiple of three not above a decimal exponent.
#[inline]
pub fn engineering_exponent(decimal_exponent: i32) -> i32 {
    decimal_exponent.div_euclid(3) * 3
}

/// Decimal digits of `|value|` rounded to `figures` significant digits, and
/// the decimal exponent of the leading digit.
fn decimal_digits(value: f64, figures: usize) -> Option<(String, i32)> {
    let scientific = format!("{:.*e}", figures.saturating_sub(1), value.abs());
    let (mantissa, exponent) = scientific.split_once('e')?;
    Some((mantissa.replace('.', ""), exponent.parse().ok()?))
}

/// Render `value` in engineering notation.
///
/// `prefix` selects SI symbols (`"2.5 k"`) over exponent suffixes
/// (`"2.5e3"`). Values in `[1, 1000)` carry no suffix.
///
/// # Example
/// ```
/// use renard::format::eng_string;
///
/// assert_eq!(eng_string(31.5, false), "31.5");
/// assert_eq!(eng_string(3150.0, false), "3.15e3");
/// assert_eq!(eng_string(20_000.0, true), "20 k");
/// ```
pub fn eng_string(value: f64, prefix: bool) -> String {
    render(value, &PresentationConfig::from_symbol_flag(prefix))
}

/// Render `value` according to `config`, after validating it.
pub fn format_value(value: f64, config: &PresentationConfig) -> RenardResult<String> {
    config.validate().map_err(RenardError::InvalidConfig)?;
    Ok(render(value, config))
}

fn render(value: f64, config: &PresentationConfig) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let Some((mut digits, decimal_exponent)) = decimal_digits(value, config.significant_digits)
    else {
        return value.to_string();
    };

    // Rounding carries are already folded into the decimal exponent
    let exponent = engineering_exponent(decimal_exponent);
    let whole = (decimal_exponent - exponent) as usize + 1;
    if digits.len() < whole {
        digits.push_str(&"0".repeat(whole - digits.len()));
    }
    let (integer, fraction) = digits.split_at(whole);
    let fraction = fraction.trim_end_matches('0');

    let sign = if value < 0.0 { "-" } else { "" };
    let mantissa = if fraction.is_empty() {
        format!("{}{}", sign, integer)
    } else {
        format!("{}{}.{}", sign, integer, fraction)
    };

    if exponent == 0 {
        return mantissa;
    }
    match si_prefix(exponent).filter(|_| config.uses_symbol()) {
        Some(symbol) => format!("{} {}", mantissa, symbol),
        None => format!("{}e{}", mantissa, exponent),
    }
}
