use chrono::{Duration, NaiveDateTime};

use crate::config::RateConfig;

/// Number of whole extension units needed to cover `over_seconds`.
///
/// Rounds up: any positive overage, even a single second, fills a unit.
pub(crate) fn extension_block_count(over_seconds: i64, unit_seconds: i64) -> i64 {
    if over_seconds <= 0 {
        return 0;
    }
    (over_seconds + unit_seconds - 1) / unit_seconds
}

/// Count the extension blocks whose billed interval touches the night window.
///
/// The `i`-th block nominally covers `[ext_start + i*unit, +unit)`; the last
/// block is clipped to the actual exit time before the overlap test.
pub(crate) fn count_night_blocks(
    ext_start: NaiveDateTime,
    leave: NaiveDateTime,
    block_count: i64,
    rates: &RateConfig,
) -> i64 {
    let mut night_blocks = 0;

    for i in 0..block_count {
        let block_start = ext_start + Duration::seconds(i * rates.extension_unit_seconds);
        let mut block_end = block_start + Duration::seconds(rates.extension_unit_seconds);

        // A block starting at or after the exit is never billed as night.
        if block_start >= leave {
            break;
        }
        if block_end > leave {
            block_end = leave;
        }
        if block_end <= block_start {
            continue;
        }

        if block_touches_night(block_start, block_end, rates) {
            night_blocks += 1;
        }
    }

    night_blocks
}

/// Whether `[start, end)` overlaps the night window on any day it touches.
///
/// The scan runs from the day before `start` through the day after `end`:
/// a window opening the previous evening still covers the small hours of
/// the block's first day. The exclusive upper bound keeps each physical
/// window from being derived twice from adjacent days.
fn block_touches_night(start: NaiveDateTime, end: NaiveDateTime, rates: &RateConfig) -> bool {
    if end <= start {
        return false;
    }

    let mut day = start.date() - Duration::days(1);
    let scan_end = end.date() + Duration::days(1);

    while day < scan_end {
        let next_midnight = (day + Duration::days(1)).and_hms_opt(0, 0, 0).unwrap();

        // Evening part: [D night_start, D+1 00:00)
        let evening_start = day.and_hms_opt(rates.night_start_hour, 0, 0).unwrap();
        // Early-morning part: [D+1 00:00, D+1 night_end)
        let morning_end = next_midnight + Duration::hours(rates.night_end_hour as i64);

        if overlaps(start, end, evening_start, next_midnight)
            || overlaps(start, end, next_midnight, morning_end)
        {
            return true;
        }

        day += Duration::days(1);
    }

    false
}

/// Half-open interval overlap: `[a0, a1)` meets `[b0, b1)`
fn overlaps(
    a0: NaiveDateTime,
    a1: NaiveDateTime,
    b0: NaiveDateTime,
    b1: NaiveDateTime,
) -> bool {
    a0 < b1 && b0 < a1
}
