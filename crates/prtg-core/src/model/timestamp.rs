// ── PRTG fractional-day timestamps ──

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Days between the PRTG epoch (1899-12-30) and the Unix epoch.
const UNIX_EPOCH_DAYS: f64 = 25_569.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A point in time (or a duration) in PRTG's native numeric format:
/// fractional days since 1899-12-30T00:00:00Z.
///
/// The value is kept exactly as the server sent it. Convert with
/// [`to_datetime`](Self::to_datetime) when a calendar time is needed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrtgDate(f64);

impl PrtgDate {
    pub const fn from_days(days: f64) -> Self {
        Self(days)
    }

    /// The raw day count.
    pub const fn days(self) -> f64 {
        self.0
    }

    /// Calendar time in UTC, rounded to the millisecond.
    ///
    /// Returns `None` for values outside chrono's representable range.
    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let millis = ((self.0 - UNIX_EPOCH_DAYS) * MILLIS_PER_DAY).round();
        if !millis.is_finite() || millis.abs() >= 9.0e15 {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }

    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_DAYS)
    }
}

impl FromStr for PrtgDate {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for PrtgDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(at) => write!(f, "{}", at.format("%Y-%m-%d %H:%M:%S UTC")),
            None => write!(f, "{}", self.0),
        }
    }
}
