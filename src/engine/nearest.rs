// ============================================================================
// Nearest-Value Queries
// Closest members and directional neighbours of a query value
// ============================================================================

use super::range::rrange;
use crate::domain::{max_step_ratio, Direction, SeriesKey};
use crate::numeric::{RenardError, RenardResult};
use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// Largest `num` accepted by [`find_nearest_few`]
pub const MAX_NEAREST: usize = 3;

/// Up to three nearby values, ascending
pub type Nearby = ArrayVec<f64, MAX_NEAREST>;

/// Exponent applied to the max step ratio on each side of the query value.
/// Wide enough that the window always straddles the value with room for
/// three candidates, even across a decade boundary.
const WINDOW_EXPONENT: f64 = 1.5;

// A window spans at most six members of the coarsest series
type Candidates = SmallVec<[f64; 8]>;

/// The `num` series values closest to `value`, in ascending order.
///
/// With `num == 3` at least one returned value is below `value` and at
/// least one above it.
///
/// # Errors
/// - `InvalidCount` if `num` is not 1, 2 or 3
/// - `Range` if the search window around `value` is not a valid range
///   (non-finite value, or too close to the minimum magnitude)
pub fn find_nearest_few(key: SeriesKey, value: f64, num: usize) -> RenardResult<Nearby> {
    if !(1..=MAX_NEAREST).contains(&num) {
        return Err(RenardError::InvalidCount { num });
    }

    let reach = max_step_ratio(key).powf(WINDOW_EXPONENT);
    let candidates: Candidates = rrange(key, value / reach, value * reach)?.collect();

    tracing::debug!(
        series = %key,
        value,
        num,
        candidates = candidates.len(),
        "nearest window"
    );

    Ok(nearest_n(&candidates, value, num))
}

/// The single series value closest to `value`.
///
/// # Example
/// ```
/// use renard::prelude::*;
///
/// assert_eq!(find_nearest(R10, 21.0).unwrap(), 20.0);
/// ```
pub fn find_nearest(key: SeriesKey, value: f64) -> RenardResult<f64> {
    find_nearest_few(key, value, 1)?
        .first()
        .copied()
        .ok_or(RenardError::NoCandidate {
            value,
            direction: None,
        })
}

/// The series neighbour of `value` picked by `direction`.
///
/// # Errors
/// `Range` when the search window around `value` leaves the representable
/// magnitudes. `NoCandidate` if none of the three nearest values satisfies
/// the comparison; the window check makes this unreachable in practice.
pub fn find(key: SeriesKey, value: f64, direction: Direction) -> RenardResult<f64> {
    let nearby = find_nearest_few(key, value, MAX_NEAREST)?;
    direction
        .select(&nearby, value)
        .ok_or(RenardError::NoCandidate {
            value,
            direction: Some(direction),
        })
}

/// Smallest series value greater than or equal to `value`.
pub fn find_greater_than_or_equal(key: SeriesKey, value: f64) -> RenardResult<f64> {
    find(key, value, Direction::GreaterOrEqual)
}

/// Smallest series value strictly greater than `value`.
pub fn find_greater_than(key: SeriesKey, value: f64) -> RenardResult<f64> {
    find(key, value, Direction::Greater)
}

/// Largest series value less than or equal to `value`.
pub fn find_less_than_or_equal(key: SeriesKey, value: f64) -> RenardResult<f64> {
    find(key, value, Direction::LessOrEqual)
}

/// Largest series value strictly less than `value`.
pub fn find_less_than(key: SeriesKey, value: f64) -> RenardResult<f64> {
    find(key, value, Direction::Less)
}

/// Take the `n` candidates closest to `value`, ascending.
///
/// The distance sort is stable, so of two equidistant candidates the one
/// enumerated first (the smaller) wins.
fn nearest_n(candidates: &[f64], value: f64, n: usize) -> Nearby {
    let mut order: SmallVec<[usize; 8]> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        let da = (candidates[a] - value).abs();
        let db = (candidates[b] - value).abs();
        da.total_cmp(&db)
    });

    let mut nearest: Nearby = order
        .iter()
        .take(n.min(MAX_NEAREST))
        .map(|&i| candidates[i])
        .collect();
    nearest.sort_by(f64::total_cmp);
    nearest
}
