use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::DayOfWeek;

/// Diagnostic record of an intermediate evaluation result.
/// Emitted through a [`crate::trace::TraceSink`]; nothing is printed unless a
/// sink is installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TraceEvent {
    SnapshotLoaded {
        assignments: usize,
        classes: usize,
        services: usize,
    },
    /// Date keys derived from "now".
    DateInfo {
        today: NaiveDate,
        tomorrow: NaiveDate,
        weekday: DayOfWeek,
    },
    /// Assignment ids per window, in snapshot order.
    AssignmentsFiltered {
        due_today: Vec<i64>,
        due_tomorrow: Vec<i64>,
        next: Option<i64>,
    },
    /// Class ids for today and the ones not yet started.
    ClassesFiltered {
        minute_of_day: u16,
        today: Vec<i64>,
        remaining: Vec<i64>,
        next: Option<i64>,
    },
}

impl TraceEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SnapshotLoaded { .. } => "snapshot_loaded",
            Self::DateInfo { .. } => "date_info",
            Self::AssignmentsFiltered { .. } => "assignments_filtered",
            Self::ClassesFiltered { .. } => "classes_filtered",
        }
    }
}
