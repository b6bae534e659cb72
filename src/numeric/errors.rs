// ============================================================================
// Renard Errors
// Error types for series lookup and range queries
// ============================================================================

use crate::domain::Direction;
use std::fmt;

/// Which end of a requested range failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The lower (start) bound
    Start,
    /// The upper (stop) bound
    Stop,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Start => write!(f, "start"),
            Bound::Stop => write!(f, "stop"),
        }
    }
}

/// Precondition failures of a range query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// Bound is NaN or infinite
    NotFinite { bound: Bound, value: f64 },
    /// Bound is below the minimum magnitude floor
    TooSmall { bound: Bound, value: f64, minimum: f64 },
    /// Start lies above stop
    Reversed { start: f64, stop: f64 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::NotFinite { bound, value } => {
                write!(f, "{} value {} is not finite", bound, value)
            },
            RangeError::TooSmall {
                bound,
                value,
                minimum,
            } => write!(
                f,
                "{} is too small: the {} value must be greater than or equal to {:e}",
                value, bound, minimum
            ),
            RangeError::Reversed { start, stop } => write!(
                f,
                "start value {} must be less than or equal to stop value {}",
                start, stop
            ),
        }
    }
}

/// Errors surfaced by the registry and the range engine.
#[derive(Debug, Clone, PartialEq)]
pub enum RenardError {
    /// Series name does not match any registered series
    UnknownSeries {
        name: String,
        available: Vec<&'static str>,
    },
    /// Nearest-few count outside 1..=3
    InvalidCount { num: usize },
    /// Range or query value failed validation
    Range(RangeError),
    /// No nearby candidate satisfies the requested comparison
    NoCandidate {
        value: f64,
        direction: Option<Direction>,
    },
    /// Presentation settings failed validation
    InvalidConfig(String),
}

impl fmt::Display for RenardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenardError::UnknownSeries { name, available } => write!(
                f,
                "Renard series with name {:?} not found. Available Renard series keys are {}",
                name,
                available.join(", ")
            ),
            RenardError::InvalidCount { num } => write!(f, "num {} is not 1, 2 or 3", num),
            RenardError::Range(err) => write!(f, "{}", err),
            RenardError::NoCandidate {
                value,
                direction: Some(direction),
            } => write!(f, "no series value {} {} could be found", direction, value),
            RenardError::NoCandidate {
                value,
                direction: None,
            } => write!(f, "no series value near {} could be found", value),
            RenardError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for RenardError {}

impl From<RangeError> for RenardError {
    fn from(err: RangeError) -> Self {
        RenardError::Range(err)
    }
}

/// Result type alias for series operations
pub type RenardResult<T> = Result<T, RenardError>;
