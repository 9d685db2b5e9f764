use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Billing rate configuration.
///
/// All monetary values are tax-exclusive integer yen. The night window is a
/// fixed local-clock range that opens in the evening and closes early the
/// next morning; both hours are local wall-clock hours, no timezone applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Length of one extension billing unit, in seconds
    pub extension_unit_seconds: i64,
    /// Fee per extension unit (yen, tax-exclusive)
    pub extension_unit_fee_excl: i64,
    /// Surcharge rate applied to night-eligible extension units
    pub night_rate: f64,
    /// Consumption tax rate applied to the aggregated pre-tax total
    pub tax_rate: f64,
    /// Hour the night window opens (inclusive, same day evening)
    pub night_start_hour: u32,
    /// Hour the night window closes (exclusive, next morning)
    pub night_end_hour: u32,
}

/// Rate configuration rejected by [`RateConfig::validate`]
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("extension unit length must be positive, got {0}")]
    NonPositiveUnit(i64),

    #[error("extension unit fee must be non-negative, got {0}")]
    NegativeFee(i64),

    #[error("rate must be non-negative and finite, got {0}")]
    InvalidRate(f64),

    #[error("hour must be in 0..24, got {0}")]
    HourOutOfRange(u32),
}

impl RateConfig {
    /// Check that the configured values are usable for billing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension_unit_seconds <= 0 {
            return Err(ConfigError::NonPositiveUnit(self.extension_unit_seconds));
        }
        if self.extension_unit_fee_excl < 0 {
            return Err(ConfigError::NegativeFee(self.extension_unit_fee_excl));
        }
        for rate in [self.night_rate, self.tax_rate] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidRate(rate));
            }
        }
        for hour in [self.night_start_hour, self.night_end_hour] {
            if hour >= 24 {
                return Err(ConfigError::HourOutOfRange(hour));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates_are_valid() {
        assert!(RateConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut rates = RateConfig::default();
        rates.extension_unit_seconds = 0;
        assert_eq!(rates.validate(), Err(ConfigError::NonPositiveUnit(0)));

        let mut rates = RateConfig::default();
        rates.extension_unit_fee_excl = -100;
        assert_eq!(rates.validate(), Err(ConfigError::NegativeFee(-100)));

        let mut rates = RateConfig::default();
        rates.night_rate = -0.15;
        assert_eq!(rates.validate(), Err(ConfigError::InvalidRate(-0.15)));

        let mut rates = RateConfig::default();
        rates.night_end_hour = 24;
        assert_eq!(rates.validate(), Err(ConfigError::HourOutOfRange(24)));
    }

    #[test]
    fn test_partial_toml_override_keeps_defaults() {
        let rates: RateConfig = toml::from_str("night_rate = 0.2\n").unwrap();
        assert_eq!(rates.night_rate, 0.2);
        assert_eq!(rates.extension_unit_seconds, 600);
        assert_eq!(rates.tax_rate, 0.10);
        assert_eq!(rates.night_start_hour, 22);
    }
}
