use chrono::{Duration, NaiveDateTime};
use log::debug;

use super::block::{count_night_blocks, extension_block_count};
use super::types::{Bill, Pack, StayInterval};
use crate::config::RateConfig;
use crate::error::FeeResult;

/// Fee calculation engine.
///
/// Holds the billing rates; [`FeeEngine::calculate`] is a pure function of
/// its inputs and allocates nothing shared, so one engine can serve any
/// number of callers.
#[derive(Debug, Clone, Default)]
pub struct FeeEngine {
    rates: RateConfig,
}

impl FeeEngine {
    pub fn new(rates: RateConfig) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Calculate the itemized bill for a stay.
    ///
    /// Fails with [`crate::FeeError::InvalidInterval`] when `leave` is not
    /// strictly after `enter`; every other input produces a bill.
    pub fn calculate(
        &self,
        enter: NaiveDateTime,
        leave: NaiveDateTime,
        pack: &Pack,
    ) -> FeeResult<Bill> {
        let stay = StayInterval::new(enter, leave)?;

        let base_excl = pack.fee_excl;
        let over_seconds = (stay.elapsed_seconds() - pack.duration_seconds).max(0);

        // Without overage there is nothing to quantize and the night window
        // cannot matter: aggregate the pack fee alone.
        if over_seconds == 0 {
            return Ok(self.aggregate(base_excl, 0, 0));
        }

        let ext_blocks = extension_block_count(over_seconds, self.rates.extension_unit_seconds);
        let extension_excl = ext_blocks * self.rates.extension_unit_fee_excl;

        let ext_start = stay.enter() + Duration::seconds(pack.duration_seconds);
        let night_blocks = count_night_blocks(ext_start, stay.leave(), ext_blocks, &self.rates);

        // Rounded once on the aggregate; per-block rounding can drift by ±1.
        let night_surcharge_excl = round_yen(
            night_blocks as f64 * self.rates.extension_unit_fee_excl as f64 * self.rates.night_rate,
        );

        debug!(
            "over={}s ext_blocks={} night_blocks={}",
            over_seconds, ext_blocks, night_blocks
        );

        Ok(self.aggregate(base_excl, extension_excl, night_surcharge_excl))
    }

    fn aggregate(&self, base_excl: i64, extension_excl: i64, night_surcharge_excl: i64) -> Bill {
        let total_excl = base_excl + extension_excl + night_surcharge_excl;
        let tax = round_yen(total_excl as f64 * self.rates.tax_rate);

        Bill {
            base_excl,
            extension_excl,
            night_surcharge_excl,
            total_excl,
            tax,
            total_incl: total_excl + tax,
        }
    }
}

/// Round to whole yen, half away from zero; amounts here are never negative.
fn round_yen(amount: f64) -> i64 {
    amount.round() as i64
}
