// ============================================================================
// Renard Series Library
// Lookup and range enumeration over Renard preferred number series
// ============================================================================

//! # Renard
//!
//! Preferred number series (ISO 3 / Renard) for picking standard component
//! values across any order of magnitude.
//!
//! ## Features
//!
//! - **Closed series registry**: R5 … R80 and the rounded RR/RRR variants,
//!   one decade of base values each
//! - **Lazy range enumeration** across as many decades as a range spans
//! - **Nearest and directional lookups** (`>=`, `>`, `<=`, `<`)
//! - **Exact decimal precision** per series, driving output rounding
//! - **Engineering notation** with optional SI prefix symbols
//!
//! ## Example
//!
//! ```rust
//! use renard::prelude::*;
//!
//! // The base values of a series
//! assert_eq!(series(R5), &[1.0, 1.6, 2.5, 4.0, 6.3]);
//!
//! // Nearest values, at any magnitude
//! assert_eq!(find_nearest(R10, 21.0).unwrap(), 20.0);
//! assert_eq!(find_nearest_few(R20, 31.0, 3).unwrap().as_slice(), &[28.0, 31.5, 35.5]);
//!
//! // Directional neighbours
//! assert_eq!(find_greater_than(R20, 31.0).unwrap(), 31.5);
//! assert_eq!(find_less_than(R20, 31.0).unwrap(), 28.0);
//!
//! // Every member in a range
//! let values: Vec<f64> = rrange(R10, 1700.0, 3400.0).unwrap().collect();
//! assert_eq!(values, vec![2000.0, 2500.0, 3150.0]);
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod domain;
pub mod engine;
pub mod format;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        key_from_name, precision, series, series_keys, Direction, Notation, PresentationConfig,
        SeriesKey, R10, R20, R40, R5, R80, RR10, RR20, RR40, RRR10, RRR20, RRR5,
    };
    pub use crate::engine::{
        find, find_greater_than, find_greater_than_or_equal, find_less_than,
        find_less_than_or_equal, find_nearest, find_nearest_few, open_rrange, rrange, Nearby,
        OpenRRange, RRange,
    };
    pub use crate::format::{eng_string, format_value};
    pub use crate::numeric::{Bound, RangeError, RenardError, RenardResult};
}
