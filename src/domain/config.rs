// ============================================================================
// Presentation Configuration
// How query results are rendered for display
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Most significant digits an `f64` mantissa can meaningfully carry
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Default mantissa digits, enough to hide binary noise in series values
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 12;

// ============================================================================
// Notation
// ============================================================================

/// Suffix style for values of a thousand or more (or below one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// Engineering exponent suffix, e.g. `2.5e3`
    #[default]
    Exponent,

    /// SI magnitude prefix symbol, e.g. `2.5 k`
    /// Exponents outside the SI table fall back to `Exponent`
    SiPrefix,
}

// ============================================================================
// Complete Presentation Configuration
// ============================================================================

/// Output configuration for rendering series values
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PresentationConfig {
    /// Suffix style
    pub notation: Notation,

    /// Significant digits kept in the mantissa before trailing zeros are
    /// trimmed
    pub significant_digits: usize,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self::new(Notation::Exponent)
    }
}

impl PresentationConfig {
    /// Create a new configuration with the given notation
    pub fn new(notation: Notation) -> Self {
        Self {
            notation,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }

    /// Builder method: Set notation
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Builder method: Set mantissa significant digits
    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Whether SI prefix symbols are used
    pub fn uses_symbol(&self) -> bool {
        self.notation == Notation::SiPrefix
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.significant_digits == 0 {
            return Err("Significant digits must be at least 1".to_string());
        }
        if self.significant_digits > MAX_SIGNIFICANT_DIGITS {
            return Err(format!(
                "Significant digits cannot exceed {}",
                MAX_SIGNIFICANT_DIGITS
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl PresentationConfig {
    /// Plain decimals with `e` exponent suffixes
    pub fn exponent() -> Self {
        Self::new(Notation::Exponent)
    }

    /// SI prefix symbols (`k`, `M`, `µ`, ...)
    pub fn si_symbol() -> Self {
        Self::new(Notation::SiPrefix)
    }

    /// Pick the preset matching a command line `--symbol` flag
    pub fn from_symbol_flag(symbol: bool) -> Self {
        if symbol {
            Self::si_symbol()
        } else {
            Self::exponent()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = PresentationConfig::default();
        assert_eq!(config.notation, Notation::Exponent);
        assert_eq!(config.significant_digits, DEFAULT_SIGNIFICANT_DIGITS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PresentationConfig::exponent()
            .with_notation(Notation::SiPrefix)
            .with_significant_digits(6);

        assert!(config.uses_symbol());
        assert_eq!(config.significant_digits, 6);
    }

    #[test]
    fn test_validation() {
        assert!(PresentationConfig::default()
            .with_significant_digits(0)
            .validate()
            .is_err());
        assert!(PresentationConfig::default()
            .with_significant_digits(18)
            .validate()
            .is_err());
        assert!(PresentationConfig::default()
            .with_significant_digits(17)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_preset_configs() {
        assert!(PresentationConfig::from_symbol_flag(true).uses_symbol());
        assert!(!PresentationConfig::from_symbol_flag(false).uses_symbol());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_notation_serializes_by_name() {
        let json = serde_json::to_string(&Notation::SiPrefix).unwrap();
        assert_eq!(json, "\"SiPrefix\"");
    }
}
