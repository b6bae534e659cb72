// ============================================================================
// Domain Models Module
// Series identifiers, the series registry and presentation settings
// ============================================================================

pub mod config;
pub mod direction;
pub mod registry;
pub mod series_key;

pub use config::{Notation, PresentationConfig};
pub use direction::Direction;
pub use registry::{
    derived, key_from_name, mantissa_logs, max_step_ratio, precision, precision_by_name, series,
    series_by_name, series_keys, DerivedTable,
};
pub use series_key::{SeriesKey, R10, R20, R40, R5, R80, RR10, RR20, RR40, RRR10, RRR20, RRR5};
