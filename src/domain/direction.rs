// ============================================================================
// Direction
// Comparison used by the directional finders
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which neighbour of a query value a directional finder returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Smallest member `>=` the query value
    GreaterOrEqual,
    /// Smallest member `>` the query value
    Greater,
    /// Largest member `<=` the query value
    LessOrEqual,
    /// Largest member `<` the query value
    Less,
}

impl Direction {
    /// Whether `candidate` satisfies the comparison against `value`.
    #[inline]
    pub fn accepts(self, candidate: f64, value: f64) -> bool {
        match self {
            Direction::GreaterOrEqual => candidate >= value,
            Direction::Greater => candidate > value,
            Direction::LessOrEqual => candidate <= value,
            Direction::Less => candidate < value,
        }
    }

    /// Pick the qualifying candidate closest to `value` from an ascending
    /// slice: the first match scanning upwards for the greater pair, the first
    /// match scanning downwards for the less pair.
    pub fn select(self, ascending: &[f64], value: f64) -> Option<f64> {
        match self {
            Direction::GreaterOrEqual | Direction::Greater => ascending
                .iter()
                .copied()
                .find(|&c| self.accepts(c, value)),
            Direction::LessOrEqual | Direction::Less => ascending
                .iter()
                .rev()
                .copied()
                .find(|&c| self.accepts(c, value)),
        }
    }

    /// Comparison operator symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            Direction::GreaterOrEqual => ">=",
            Direction::Greater => ">",
            Direction::LessOrEqual => "<=",
            Direction::Less => "<",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANDIDATES: [f64; 3] = [28.0, 31.5, 35.5];

    #[test]
    fn test_select_greater() {
        assert_eq!(Direction::Greater.select(&CANDIDATES, 31.0), Some(31.5));
        assert_eq!(Direction::Greater.select(&CANDIDATES, 31.5), Some(35.5));
        assert_eq!(Direction::GreaterOrEqual.select(&CANDIDATES, 31.5), Some(31.5));
    }

    #[test]
    fn test_select_less() {
        assert_eq!(Direction::Less.select(&CANDIDATES, 31.0), Some(28.0));
        assert_eq!(Direction::Less.select(&CANDIDATES, 31.5), Some(28.0));
        assert_eq!(Direction::LessOrEqual.select(&CANDIDATES, 31.5), Some(31.5));
    }

    #[test]
    fn test_select_none_qualifies() {
        assert_eq!(Direction::Greater.select(&CANDIDATES, 35.5), None);
        assert_eq!(Direction::Less.select(&CANDIDATES, 28.0), None);
        assert_eq!(Direction::GreaterOrEqual.select(&[], 1.0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::GreaterOrEqual.to_string(), ">=");
        assert_eq!(Direction::Less.to_string(), "<");
    }
}
