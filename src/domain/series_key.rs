// ============================================================================
// Series Key Domain Model
// ============================================================================

use crate::numeric::{RenardError, RenardResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of one Renard preferred number series.
///
/// The set is closed: every key carries a fixed cardinality (values per
/// decade) and the decimal precision its base values were rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeriesKey {
    R5 = 0,
    R10 = 1,
    R20 = 2,
    R40 = 3,
    R80 = 4,
    RR10 = 5,
    RR20 = 6,
    RR40 = 7,
    RRR5 = 8,
    RRR10 = 9,
    RRR20 = 10,
}

impl SeriesKey {
    /// Number of registered series
    pub const COUNT: usize = 11;

    /// All keys in registry order
    pub const ALL: [SeriesKey; Self::COUNT] = [
        SeriesKey::R5,
        SeriesKey::R10,
        SeriesKey::R20,
        SeriesKey::R40,
        SeriesKey::R80,
        SeriesKey::RR10,
        SeriesKey::RR20,
        SeriesKey::RR40,
        SeriesKey::RRR5,
        SeriesKey::RRR10,
        SeriesKey::RRR20,
    ];

    pub fn from_u8(val: u8) -> Option<Self> {
        Self::ALL.get(val as usize).copied()
    }

    /// Position of this key in registry order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical name, e.g. `"R20"`.
    pub const fn name(self) -> &'static str {
        match self {
            SeriesKey::R5 => "R5",
            SeriesKey::R10 => "R10",
            SeriesKey::R20 => "R20",
            SeriesKey::R40 => "R40",
            SeriesKey::R80 => "R80",
            SeriesKey::RR10 => "RR10",
            SeriesKey::RR20 => "RR20",
            SeriesKey::RR40 => "RR40",
            SeriesKey::RRR5 => "RRR5",
            SeriesKey::RRR10 => "RRR10",
            SeriesKey::RRR20 => "RRR20",
        }
    }

    /// Number of base values in one decade.
    pub const fn cardinality(self) -> usize {
        match self {
            SeriesKey::R5 | SeriesKey::RRR5 => 5,
            SeriesKey::R10 | SeriesKey::RR10 | SeriesKey::RRR10 => 10,
            SeriesKey::R20 | SeriesKey::RR20 | SeriesKey::RRR20 => 20,
            SeriesKey::R40 | SeriesKey::RR40 => 40,
            SeriesKey::R80 => 80,
        }
    }

    /// Decimal multiple to which the base values are rounded.
    pub fn precision(self) -> Decimal {
        match self {
            SeriesKey::R5 | SeriesKey::R10 | SeriesKey::R20 | SeriesKey::R40 | SeriesKey::R80 => {
                Decimal::new(1, 2)
            },
            SeriesKey::RR10 | SeriesKey::RR20 | SeriesKey::RR40 => Decimal::new(5, 2),
            SeriesKey::RRR5 => Decimal::new(5, 1),
            SeriesKey::RRR10 | SeriesKey::RRR20 => Decimal::new(1, 1),
        }
    }

    /// Names of all keys, in registry order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|key| key.name()).collect()
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SeriesKey {
    type Err = RenardError;

    /// Case-sensitive exact match against the canonical names.
    fn from_str(s: &str) -> RenardResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or_else(|| RenardError::UnknownSeries {
                name: s.to_string(),
                available: Self::names(),
            })
    }
}

// Module-level aliases
pub const R5: SeriesKey = SeriesKey::R5;
pub const R10: SeriesKey = SeriesKey::R10;
pub const R20: SeriesKey = SeriesKey::R20;
pub const R40: SeriesKey = SeriesKey::R40;
pub const R80: SeriesKey = SeriesKey::R80;
pub const RR10: SeriesKey = SeriesKey::RR10;
pub const RR20: SeriesKey = SeriesKey::RR20;
pub const RR40: SeriesKey = SeriesKey::RR40;
pub const RRR5: SeriesKey = SeriesKey::RRR5;
pub const RRR10: SeriesKey = SeriesKey::RRR10;
pub const RRR20: SeriesKey = SeriesKey::RRR20;
