// ============================================================================
// Decade Arithmetic
// Log-space decomposition and significant-figure rounding
// ============================================================================

use rust_decimal::Decimal;

/// Smallest magnitude accepted as a range bound or query value.
///
/// Keeps `log10` well defined and every candidate clear of subnormals.
pub const MINIMUM_VALUE: f64 = 1e-200;

/// Decade of the stored base values, which always lie in `[1, 10)`.
pub const REFERENCE_DECADE: i32 = 0;

/// Split a log10 value into its integer decade (floor) and the remaining
/// mantissa in `[0, 1]`.
///
/// The mantissa can come out as exactly `1.0` when `log_value` is a tiny
/// negative number; callers treat that as "past the last table entry".
#[inline]
pub fn decade_mantissa(log_value: f64) -> (i32, f64) {
    let decade = log_value.floor();
    (decade as i32, log_value - decade)
}

/// Round `value` to `figures` significant figures.
///
/// The rounding goes through the exact decimal expansion of `value`, so the
/// result is the double nearest to the rounded decimal (`2000.0000000002`
/// at three figures is exactly `2000.0`).
pub fn round_sig(value: f64, figures: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let fraction_digits = figures.max(1) - 1;
    format!("{:.*e}", fraction_digits, value)
        .parse()
        .unwrap_or(value)
}

/// Exponent of the leading digit of `precision`, i.e. `floor(log10(p))`,
/// computed exactly on the decimal.
pub fn precision_exponent(precision: Decimal) -> i32 {
    let normalized = precision.normalize();
    let leading = normalized
        .mantissa()
        .unsigned_abs()
        .checked_ilog10()
        .map_or(0, |d| d as i32);
    leading - normalized.scale() as i32
}

/// Number of significant figures carried by values of a series rounded to
/// `precision`, for a series whose base values sit in `reference_decade`.
pub fn significant_figures(precision: Decimal, reference_decade: i32) -> usize {
    let figures = reference_decade + precision_exponent(precision).abs() + 1;
    figures.max(1) as usize
}
