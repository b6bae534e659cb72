// ============================================================================
// Format Module
// Human-readable rendering of query results
// ============================================================================

mod eng;

pub use eng::{eng_string, engineering_exponent, format_value, si_prefix};
