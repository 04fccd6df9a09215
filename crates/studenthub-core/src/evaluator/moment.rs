//! The parts of "now" the filters care about.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use serde::Serialize;

use crate::clock::{DayOfWeek, WallClock};
use crate::error::ValidationError;

/// Calendar keys and clock time for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    pub today: NaiveDate,
    /// Local date 24 hours after now. Near a DST change this may not be the
    /// calendar day after `today`.
    pub tomorrow: NaiveDate,
    pub weekday: DayOfWeek,
    pub minute_of_day: u16,
}

impl Moment {
    /// Derive from an instant in any zone; dates and clock time are read in
    /// that zone.
    pub fn from_datetime<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let later = now.clone() + Duration::hours(24);
        Self {
            today: now.date_naive(),
            tomorrow: later.date_naive(),
            weekday: now.weekday().into(),
            minute_of_day: (now.hour() * 60 + now.minute()) as u16,
        }
    }

    /// The current local moment.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Clock time as a [`WallClock`].
    pub fn time(&self) -> WallClock {
        WallClock::from_minutes(self.minute_of_day)
    }
}

/// Parse a pinned "now": either RFC 3339 or a local `YYYY-MM-DDTHH:MM[:SS]`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInstant`] if the value matches neither
/// form or names a local time skipped or repeated by a DST change.
pub fn parse_instant(value: &str) -> Result<DateTime<Local>, ValidationError> {
    let invalid = |message: &str| ValidationError::InvalidInstant {
        value: value.to_string(),
        message: message.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| invalid("expected RFC 3339 or YYYY-MM-DDTHH:MM"))?;

    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| invalid("ambiguous or nonexistent local time"))
}
