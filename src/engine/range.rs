// ============================================================================
// Range Enumeration
// Series members between two bounds, across any number of decades
// ============================================================================

use crate::domain::{derived, series, SeriesKey};
use crate::numeric::{
    decade_mantissa, round_sig, Bound, RangeError, RenardResult, MINIMUM_VALUE, REFERENCE_DECADE,
};
use std::iter::FusedIterator;

/// Check the preconditions shared by every range query.
///
/// Bounds must be finite, no smaller than [`MINIMUM_VALUE`], and ordered.
/// The first violated rule is reported.
pub fn validate_range(start: f64, stop: f64) -> Result<(), RangeError> {
    if !start.is_finite() {
        return Err(RangeError::NotFinite {
            bound: Bound::Start,
            value: start,
        });
    }
    if !stop.is_finite() {
        return Err(RangeError::NotFinite {
            bound: Bound::Stop,
            value: stop,
        });
    }
    if start < MINIMUM_VALUE {
        return Err(RangeError::TooSmall {
            bound: Bound::Start,
            value: start,
            minimum: MINIMUM_VALUE,
        });
    }
    if stop < MINIMUM_VALUE {
        return Err(RangeError::TooSmall {
            bound: Bound::Stop,
            value: stop,
            minimum: MINIMUM_VALUE,
        });
    }
    if start > stop {
        return Err(RangeError::Reversed { start, stop });
    }
    Ok(())
}

/// Series values in `[start, stop]`, in strictly increasing order.
///
/// # Errors
/// `Range` if either bound is not finite, is below [`MINIMUM_VALUE`], or if
/// `start > stop`.
///
/// # Example
/// ```
/// use renard::prelude::*;
///
/// let values: Vec<f64> = rrange(R10, 1700.0, 3400.0).unwrap().collect();
/// assert_eq!(values, vec![2000.0, 2500.0, 3150.0]);
/// ```
pub fn rrange(key: SeriesKey, start: f64, stop: f64) -> RenardResult<RRange> {
    validate_range(start, stop)?;
    Ok(RRange::new(key, start, stop))
}

/// Series values in the half-open range `[start, stop)`.
///
/// # Errors
/// Same as [`rrange`].
pub fn open_rrange(key: SeriesKey, start: f64, stop: f64) -> RenardResult<OpenRRange> {
    let inner = rrange(key, start, stop)?;
    Ok(OpenRRange { inner, stop })
}

// ============================================================================
// Closed Range Iterator
// ============================================================================

/// Lazy iterator over the members of a series inside a closed range.
///
/// Walks `(decade, index)` coordinates from the first table entry at or above
/// the relaxed start to the last entry at or below the relaxed stop. Each
/// candidate is scaled out of the reference decade, rounded to the series'
/// significant figures, then checked against the exact bounds.
#[derive(Debug, Clone)]
pub struct RRange {
    values: &'static [f64],
    figures: usize,
    start: f64,
    stop: f64,
    decade: i32,
    index: usize,
    stop_decade: i32,
    stop_index: usize,
}

impl RRange {
    fn new(key: SeriesKey, start: f64, stop: f64) -> Self {
        let table = derived(key);
        let logs = table.mantissa_logs.as_slice();
        let epsilon = table.epsilon();

        let (mut start_decade, start_mantissa) = decade_mantissa(start.log10() - epsilon);
        let mut start_index = logs.partition_point(|&m| m < start_mantissa);
        if start_index == logs.len() {
            // Wrap to next decade
            start_decade += 1;
            start_index = 0;
        }

        let (stop_decade, stop_mantissa) = decade_mantissa(stop.log10() + epsilon);
        let stop_index = logs.partition_point(|&m| m <= stop_mantissa);
        debug_assert!(stop_index > 0);

        tracing::trace!(
            series = %key,
            start,
            stop,
            start_decade,
            start_index,
            stop_decade,
            stop_index,
            "range coordinates"
        );

        Self {
            values: series(key),
            figures: table.significant_figures,
            start,
            stop,
            decade: start_decade,
            index: start_index,
            stop_decade,
            stop_index,
        }
    }

    #[inline]
    fn candidate(&self, index: usize, decade: i32) -> f64 {
        let scaled = self.values[index] * 10f64.powi(decade - REFERENCE_DECADE);
        round_sig(scaled, self.figures)
    }
}

impl Iterator for RRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        while self.decade <= self.stop_decade {
            let end = if self.decade == self.stop_decade {
                self.stop_index
            } else {
                self.values.len()
            };
            if self.index >= end {
                self.decade += 1;
                self.index = 0;
                continue;
            }

            let candidate = self.candidate(self.index, self.decade);
            self.index += 1;
            if self.start <= candidate && candidate <= self.stop {
                return Some(candidate);
            }
        }
        None
    }
}

impl FusedIterator for RRange {}

// ============================================================================
// Half-Open Range Iterator
// ============================================================================

/// [`RRange`] with the stop value itself excluded.
#[derive(Debug, Clone)]
pub struct OpenRRange {
    inner: RRange,
    stop: f64,
}

impl Iterator for OpenRRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let stop = self.stop;
        self.inner.find(|&value| value != stop)
    }
}

impl FusedIterator for OpenRRange {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{R10, R20, R5, RRR5};
    use crate::engine::find_nearest;
    use crate::numeric::RenardError;
    use proptest::prelude::*;

    fn collect(key: SeriesKey, start: f64, stop: f64) -> Vec<f64> {
        rrange(key, start, stop).unwrap().collect()
    }

    #[test]
    fn test_rrange_across_decade() {
        assert_eq!(collect(R10, 1700.0, 3400.0), vec![2000.0, 2500.0, 3150.0]);
    }

    #[test]
    fn test_rrange_inclusive_bounds() {
        assert_eq!(collect(R5, 1.6, 4.0), vec![1.6, 2.5, 4.0]);
        assert_eq!(collect(R5, 6.3, 6.3), vec![6.3]);
    }

    #[test]
    fn test_rrange_spans_several_decades() {
        assert_eq!(
            collect(R5, 0.5, 25.0),
            vec![0.63, 1.0, 1.6, 2.5, 4.0, 6.3, 10.0, 16.0, 25.0]
        );
    }

    #[test]
    fn test_rrange_empty_between_members() {
        assert!(collect(R5, 1.7, 2.4).is_empty());
    }

    #[test]
    fn test_rrange_small_magnitudes() {
        let values = collect(R5, 1e-12, 1e-11);
        assert_eq!(values, vec![1e-12, 1.6e-12, 2.5e-12, 4e-12, 6.3e-12, 1e-11]);
    }

    #[test]
    fn test_rrange_rounds_to_series_precision() {
        // RRR5 carries two significant figures
        assert_eq!(collect(RRR5, 140.0, 700.0), vec![150.0, 250.0, 400.0, 600.0]);
    }

    #[test]
    fn test_rrange_is_restartable() {
        let range = rrange(R20, 10.0, 100.0).unwrap();
        let first: Vec<f64> = range.clone().collect();
        let second: Vec<f64> = range.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 21);
    }

    #[test]
    fn test_rrange_fused() {
        let mut range = rrange(R5, 1.0, 1.0).unwrap();
        assert_eq!(range.next(), Some(1.0));
        assert_eq!(range.next(), None);
        assert_eq!(range.next(), None);
    }

    #[test]
    fn test_open_rrange_excludes_stop() {
        let values: Vec<f64> = open_rrange(R5, 1.0, 10.0).unwrap().collect();
        assert_eq!(values, vec![1.0, 1.6, 2.5, 4.0, 6.3]);

        let values: Vec<f64> = open_rrange(R5, 4.0, 4.0).unwrap().collect();
        assert!(values.is_empty());
    }

    #[test]
    fn test_rrange_start_infinite() {
        let err = rrange(R10, f64::INFINITY, 10.0).unwrap_err();
        assert_eq!(
            err,
            RenardError::Range(RangeError::NotFinite {
                bound: Bound::Start,
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_rrange_stop_infinite() {
        let err = rrange(R10, 10.0, f64::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            RenardError::Range(RangeError::NotFinite {
                bound: Bound::Stop,
                ..
            })
        ));
    }

    #[test]
    fn test_rrange_nan() {
        assert!(rrange(R10, f64::NAN, 10.0).is_err());
        assert!(rrange(R10, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_rrange_start_too_small() {
        let err = rrange(R10, 0.0, 10.0).unwrap_err();
        assert!(matches!(
            err,
            RenardError::Range(RangeError::TooSmall {
                bound: Bound::Start,
                ..
            })
        ));
        assert!(rrange(R10, 1e-201, 10.0).is_err());
        assert!(rrange(R10, MINIMUM_VALUE, 10.0).is_ok());
    }

    #[test]
    fn test_rrange_stop_too_small() {
        let err = rrange(R10, 10.0, 0.0).unwrap_err();
        // Start is valid, so the stop bound is reported
        assert!(matches!(
            err,
            RenardError::Range(RangeError::TooSmall {
                bound: Bound::Stop,
                ..
            })
        ));
    }

    #[test]
    fn test_rrange_wrong_order() {
        let err = rrange(R10, 10.0, 8.0).unwrap_err();
        assert_eq!(
            err,
            RenardError::Range(RangeError::Reversed {
                start: 10.0,
                stop: 8.0
            })
        );
    }

    #[test]
    fn test_open_rrange_validation() {
        assert!(open_rrange(R10, f64::INFINITY, 10.0).is_err());
        assert!(open_rrange(R10, 10.0, f64::INFINITY).is_err());
        assert!(open_rrange(R10, 0.0, 10.0).is_err());
        assert!(open_rrange(R10, 10.0, 0.0).is_err());
        assert!(open_rrange(R10, 10.0, 8.0).is_err());
    }

    #[test]
    fn test_member_low_decade_product_overshoots() {
        let high = 0.14 * 10.0;
        assert!(high > 1.4);

        let open: Vec<f64> = open_rrange(R20, 0.14, high).unwrap().collect();
        assert_eq!(open.len(), R20.cardinality() + 1);
        assert_eq!(open.first(), Some(&0.14));
        assert_eq!(open.last(), Some(&1.4));

        let closed = collect(R20, 0.14, high);
        assert_eq!(closed.len(), R20.cardinality() + 1);
        assert!(!closed.contains(&high));
    }

    #[test]
    fn test_member_low_exact_decade() {
        let open: Vec<f64> = open_rrange(R20, 0.14, 1.4).unwrap().collect();
        assert_eq!(open.len(), R20.cardinality());
        assert_eq!(collect(R20, 0.14, 1.4).len(), R20.cardinality() + 1);
    }

    // ========================================================================
    // Properties
    // ========================================================================

    fn any_key() -> impl Strategy<Value = SeriesKey> {
        proptest::sample::select(SeriesKey::ALL.to_vec())
    }

    fn magnitude() -> impl Strategy<Value = f64> {
        (-35.0f64..35.0).prop_map(|exponent| 10f64.powf(exponent))
    }

    proptest! {
        #[test]
        fn prop_rrange_one_decade_cardinality(key in any_key(), low in magnitude()) {
            prop_assume!(find_nearest(key, low).unwrap() != low);
            let high = low * 10.0;
            let values = collect(key, low, high);
            let include_end = values.contains(&high) as usize;
            prop_assert_eq!(values.len(), key.cardinality() + include_end);
        }

        #[test]
        fn prop_open_rrange_one_decade_cardinality(key in any_key(), low in magnitude()) {
            // Member lows are pinned by the overshoot tests above
            prop_assume!(find_nearest(key, low).unwrap() != low);
            let high = low * 10.0;
            let values: Vec<f64> = open_rrange(key, low, high).unwrap().collect();
            prop_assert_eq!(values.len(), key.cardinality());
        }

        #[test]
        fn prop_rrange_strictly_increasing(key in any_key(), a in magnitude(), b in magnitude()) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let values = collect(key, low, high);
            prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(values.iter().all(|&v| low <= v && v <= high));
        }

        #[test]
        fn prop_open_rrange_strictly_increasing(key in any_key(), a in magnitude(), b in magnitude()) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let values: Vec<f64> = open_rrange(key, low, high).unwrap().collect();
            prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(values.iter().all(|&v| low <= v && v < high));
        }
    }
}
