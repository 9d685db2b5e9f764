use super::types::RateConfig;

pub const DEFAULT_RATES: RateConfig = RateConfig {
    extension_unit_seconds: 600,  // 10-minute extension units
    extension_unit_fee_excl: 100, // 100 yen per unit, tax-exclusive
    night_rate: 0.15,             // +15% on night-eligible units
    tax_rate: 0.10,               // 10% consumption tax
    night_start_hour: 22,         // night window opens 22:00
    night_end_hour: 5,            // and closes 05:00 next morning
};

impl Default for RateConfig {
    fn default() -> Self {
        DEFAULT_RATES
    }
}
