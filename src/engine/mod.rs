// ============================================================================
// Engine Module
// Range enumeration and nearest-value queries over the series registry
// ============================================================================

mod nearest;
mod range;

pub use nearest::{
    find, find_greater_than, find_greater_than_or_equal, find_less_than,
    find_less_than_or_equal, find_nearest, find_nearest_few, Nearby, MAX_NEAREST,
};
pub use range::{open_rrange, rrange, validate_range, OpenRRange, RRange};
