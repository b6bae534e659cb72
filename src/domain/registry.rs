// ============================================================================
// Series Registry
// Static one-decade base values and the caches derived from them
// ============================================================================

use super::series_key::SeriesKey;
use crate::numeric::{significant_figures, RenardResult, REFERENCE_DECADE};
use rust_decimal::Decimal;
use std::sync::OnceLock;

// ============================================================================
// Base Value Tables
// ============================================================================

const R5_VALUES: [f64; 5] = [1.00, 1.60, 2.50, 4.00, 6.30];

const R10_VALUES: [f64; 10] = [1.00, 1.25, 1.60, 2.00, 2.50, 3.15, 4.00, 5.00, 6.30, 8.00];

const R20_VALUES: [f64; 20] = [
    1.00, 1.12, 1.25, 1.40, 1.60, 1.80, 2.00, 2.24, 2.50, 2.80, //
    3.15, 3.55, 4.00, 4.50, 5.00, 5.60, 6.30, 7.10, 8.00, 9.00,
];

const R40_VALUES: [f64; 40] = [
    1.00, 1.06, 1.12, 1.18, 1.25, 1.32, 1.40, 1.50, 1.60, 1.70, //
    1.80, 1.90, 2.00, 2.12, 2.24, 2.36, 2.50, 2.65, 2.80, 3.00, //
    3.15, 3.35, 3.55, 3.75, 4.00, 4.25, 4.50, 4.75, 5.00, 5.30, //
    5.60, 6.00, 6.30, 6.70, 7.10, 7.50, 8.00, 8.50, 9.00, 9.50,
];

const R80_VALUES: [f64; 80] = [
    1.00, 1.03, 1.06, 1.09, 1.12, 1.15, 1.18, 1.22, 1.25, 1.28, //
    1.32, 1.36, 1.40, 1.45, 1.50, 1.55, 1.60, 1.65, 1.70, 1.75, //
    1.80, 1.85, 1.90, 1.95, 2.00, 2.06, 2.12, 2.18, 2.24, 2.30, //
    2.36, 2.43, 2.50, 2.58, 2.65, 2.72, 2.80, 2.90, 3.00, 3.07, //
    3.15, 3.25, 3.35, 3.45, 3.55, 3.65, 3.75, 3.87, 4.00, 4.12, //
    4.25, 4.37, 4.50, 4.62, 4.75, 4.87, 5.00, 5.15, 5.30, 5.45, //
    5.60, 5.80, 6.00, 6.15, 6.30, 6.50, 6.70, 6.90, 7.10, 7.30, //
    7.50, 7.75, 8.00, 8.25, 8.50, 8.75, 9.00, 9.25, 9.50, 9.75,
];

const RR10_VALUES: [f64; 10] = [1.00, 1.25, 1.60, 2.00, 2.50, 3.20, 4.00, 5.00, 6.30, 8.00];

const RR20_VALUES: [f64; 20] = [
    1.00, 1.10, 1.25, 1.40, 1.60, 1.80, 2.00, 2.20, 2.50, 2.80, //
    3.20, 3.60, 4.00, 4.50, 5.00, 5.60, 6.30, 7.10, 8.00, 9.00,
];

const RR40_VALUES: [f64; 40] = [
    1.00, 1.05, 1.10, 1.20, 1.25, 1.30, 1.40, 1.50, 1.60, 1.70, //
    1.80, 1.90, 2.00, 2.10, 2.20, 2.40, 2.50, 2.60, 2.80, 3.00, //
    3.20, 3.40, 3.60, 3.80, 4.00, 4.20, 4.50, 4.80, 5.00, 5.30, //
    5.60, 6.00, 6.30, 6.70, 7.10, 7.50, 8.00, 8.50, 9.00, 9.50,
];

const RRR5_VALUES: [f64; 5] = [1.0, 1.5, 2.5, 4.0, 6.0];

const RRR10_VALUES: [f64; 10] = [1.0, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0];

const RRR20_VALUES: [f64; 20] = [
    1.0, 1.1, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.5, 2.8, //
    3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 7.0, 8.0, 9.0,
];

// ============================================================================
// Lookup
// ============================================================================

/// The base values of a series, strictly increasing within `[1, 10)`.
///
/// For R5 this is `[1.0, 1.6, 2.5, 4.0, 6.3]`.
pub fn series(key: SeriesKey) -> &'static [f64] {
    match key {
        SeriesKey::R5 => &R5_VALUES,
        SeriesKey::R10 => &R10_VALUES,
        SeriesKey::R20 => &R20_VALUES,
        SeriesKey::R40 => &R40_VALUES,
        SeriesKey::R80 => &R80_VALUES,
        SeriesKey::RR10 => &RR10_VALUES,
        SeriesKey::RR20 => &RR20_VALUES,
        SeriesKey::RR40 => &RR40_VALUES,
        SeriesKey::RRR5 => &RRR5_VALUES,
        SeriesKey::RRR10 => &RRR10_VALUES,
        SeriesKey::RRR20 => &RRR20_VALUES,
    }
}

/// The decimal multiple to which the base values of a series are rounded.
pub fn precision(key: SeriesKey) -> Decimal {
    key.precision()
}

/// All registered keys, in registry order.
pub fn series_keys() -> &'static [SeriesKey] {
    &SeriesKey::ALL
}

/// Resolve a key from its case-sensitive name.
///
/// # Errors
/// `UnknownSeries` listing the valid names.
pub fn key_from_name(name: &str) -> RenardResult<SeriesKey> {
    name.parse()
}

/// Base values of the series called `name`.
pub fn series_by_name(name: &str) -> RenardResult<&'static [f64]> {
    key_from_name(name).map(series)
}

/// Precision of the series called `name`.
pub fn precision_by_name(name: &str) -> RenardResult<Decimal> {
    key_from_name(name).map(precision)
}

// ============================================================================
// Derived Caches
// ============================================================================

/// Read-only data derived once per series from its base values.
#[derive(Debug, Clone)]
pub struct DerivedTable {
    /// `log10(v) mod 1` for each base value, strictly increasing
    pub mantissa_logs: Vec<f64>,
    /// Largest ratio between consecutive base values
    pub max_step_ratio: f64,
    /// Significant figures carried by every value of the series
    pub significant_figures: usize,
}

impl DerivedTable {
    fn build(key: SeriesKey) -> Self {
        let values = series(key);
        let mantissa_logs = values.iter().map(|v| v.log10().rem_euclid(1.0)).collect();
        let max_step_ratio = values
            .windows(2)
            .map(|pair| pair[1] / pair[0])
            .fold(1.0, f64::max);

        Self {
            mantissa_logs,
            max_step_ratio,
            significant_figures: significant_figures(key.precision(), REFERENCE_DECADE),
        }
    }

    /// Half the gap between the two largest mantissa logs.
    ///
    /// Slack used to keep bounds landing on (or numerically just past) a
    /// series member from excluding it.
    pub fn epsilon(&self) -> f64 {
        let n = self.mantissa_logs.len();
        (self.mantissa_logs[n - 1] - self.mantissa_logs[n - 2]) / 2.0
    }
}

static DERIVED: OnceLock<[DerivedTable; SeriesKey::COUNT]> = OnceLock::new();

/// Derived caches for a series, built for all series on first use.
pub fn derived(key: SeriesKey) -> &'static DerivedTable {
    let tables = DERIVED.get_or_init(|| {
        tracing::trace!("building derived series tables");
        SeriesKey::ALL.map(DerivedTable::build)
    });
    &tables[key.index()]
}

/// Mantissa-log table of a series.
pub fn mantissa_logs(key: SeriesKey) -> &'static [f64] {
    &derived(key).mantissa_logs
}

/// Upper bound on the multiplicative gap between adjacent series members.
pub fn max_step_ratio(key: SeriesKey) -> f64 {
    derived(key).max_step_ratio
}
