// ============================================================================
// Numeric Module
// Error taxonomy and decade arithmetic shared by the registry and the engine
// ============================================================================
//
// This module provides:
// - RenardError / RangeError: Error types for lookups and range queries
// - decade_mantissa: Log-space split into (decade, mantissa)
// - round_sig / significant_figures: Precision-driven output rounding
//
// Design principles:
// - All fallible operations return Result (no panics)
// - Rounding is decimal-exact, never `x * 10^n` arithmetic

mod decade;
mod errors;

pub use decade::{
    decade_mantissa, precision_exponent, round_sig, significant_figures, MINIMUM_VALUE,
    REFERENCE_DECADE,
};
pub use errors::{Bound, RangeError, RenardError, RenardResult};
