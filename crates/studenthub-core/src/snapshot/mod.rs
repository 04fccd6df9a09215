//! Snapshot types: assignments, class sessions and campus services.
//!
//! A [`Snapshot`] is decoded once from a JSON document and never mutated.
//! Field names follow the document's camelCase keys.

mod source;

pub use source::SnapshotSource;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::{DayOfWeek, WallClock};

/// A piece of coursework with a due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i64,
    pub course: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub due_time: WallClock,
}

/// A weekly class meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: i64,
    pub course: String,
    pub start_time: WallClock,
    pub end_time: WallClock,
    pub room: String,
    pub day_of_week: DayOfWeek,
}

/// A campus service with same-day opening hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub open_time: WallClock,
    pub close_time: WallClock,
}

/// Broad kind of a service, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Dining,
    Fitness,
    Tutoring,
    Other,
}

impl Service {
    /// Classify by name, ignoring case. Unknown names are [`ServiceCategory::Other`].
    pub fn category(&self) -> ServiceCategory {
        match self.name.to_lowercase().as_str() {
            "dining hall" => ServiceCategory::Dining,
            "gym" => ServiceCategory::Fitness,
            "tutoring center" => ServiceCategory::Tutoring,
            _ => ServiceCategory::Other,
        }
    }
}

/// Everything the dashboard shows, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub classes: Vec<ClassSession>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Snapshot {
    /// Decode a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or any entry has
    /// a malformed date, time or weekday.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
