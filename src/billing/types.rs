use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FeeError, FeeResult};

/// The purchasable pack sizes offered by the venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackKind {
    Hours1,
    Hours3,
    Hours5,
    Hours8,
}

impl PackKind {
    /// Short name used for CLI selection and display
    pub fn label(self) -> &'static str {
        match self {
            PackKind::Hours1 => "1h",
            PackKind::Hours3 => "3h",
            PackKind::Hours5 => "5h",
            PackKind::Hours8 => "8h",
        }
    }
}

impl fmt::Display for PackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A purchased block of stay time with a fixed duration and pre-tax fee.
///
/// Catalog packs come from [`super::pricing`]; the engine itself treats the
/// duration and fee as arbitrary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    pub kind: PackKind,
    /// Pack length in seconds (positive)
    pub duration_seconds: i64,
    /// Pack fee in yen, tax-exclusive (non-negative)
    pub fee_excl: i64,
}

/// Validated entry/exit pair; `leave` is strictly after `enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StayInterval {
    enter: NaiveDateTime,
    leave: NaiveDateTime,
}

impl StayInterval {
    pub fn new(enter: NaiveDateTime, leave: NaiveDateTime) -> FeeResult<Self> {
        if leave <= enter {
            return Err(FeeError::InvalidInterval { enter, leave });
        }
        Ok(Self { enter, leave })
    }

    pub fn enter(&self) -> NaiveDateTime {
        self.enter
    }

    pub fn leave(&self) -> NaiveDateTime {
        self.leave
    }

    /// Stay length in whole seconds
    pub fn elapsed_seconds(&self) -> i64 {
        (self.leave - self.enter).num_seconds()
    }
}

/// Itemized billing result. All amounts are integer yen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bill {
    /// Pack fee, tax-exclusive
    pub base_excl: i64,
    /// Extension units total, tax-exclusive
    pub extension_excl: i64,
    /// Night surcharge on extension units, tax-exclusive
    pub night_surcharge_excl: i64,
    /// Sum of the three pre-tax items
    pub total_excl: i64,
    /// Consumption tax, rounded half away from zero
    pub tax: i64,
    /// Final amount due
    pub total_incl: i64,
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "base (excl. tax)            : {}", self.base_excl)?;
        writeln!(f, "extension total (excl. tax) : {}", self.extension_excl)?;
        writeln!(f, "night surcharge (excl. tax) : {}", self.night_surcharge_excl)?;
        writeln!(f, "subtotal (excl. tax)        : {}", self.total_excl)?;
        writeln!(f, "consumption tax (rounded)   : {}", self.tax)?;
        write!(f, "total (incl. tax)           : {}", self.total_incl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_stay_interval_valid() {
        let stay = StayInterval::new(dt("2025-11-02 10:00:00"), dt("2025-11-02 11:30:00")).unwrap();
        assert_eq!(stay.elapsed_seconds(), 5400);
    }

    #[test]
    fn test_stay_interval_rejects_inverted() {
        let enter = dt("2025-11-02 10:00:00");
        let leave = dt("2025-11-02 09:59:59");
        assert_eq!(
            StayInterval::new(enter, leave),
            Err(FeeError::InvalidInterval { enter, leave })
        );
    }

    #[test]
    fn test_stay_interval_rejects_equal() {
        let at = dt("2025-11-02 10:00:00");
        assert_eq!(
            StayInterval::new(at, at),
            Err(FeeError::InvalidInterval {
                enter: at,
                leave: at
            })
        );
    }

    #[test]
    fn test_pack_kind_labels() {
        assert_eq!(PackKind::Hours1.label(), "1h");
        assert_eq!(PackKind::Hours8.to_string(), "8h");
    }

    #[test]
    fn test_bill_display_lists_all_items() {
        let bill = Bill {
            base_excl: 500,
            extension_excl: 100,
            night_surcharge_excl: 15,
            total_excl: 615,
            tax: 62,
            total_incl: 677,
        };
        let rendered = bill.to_string();
        assert!(rendered.contains("subtotal (excl. tax)        : 615"));
        assert!(rendered.ends_with("total (incl. tax)           : 677"));
    }
}
