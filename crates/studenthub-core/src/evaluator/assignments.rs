//! Assignment window filter.
//!
//! Splits assignments into "due today" and "due tomorrow" and picks the most
//! urgent one. Today's items always outrank tomorrow's; within a day the
//! snapshot order decides. The due time is not used for ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::snapshot::Assignment;

/// How soon an assignment is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Urgency {
    DueToday,
    DueTomorrow,
}

impl Urgency {
    /// Badge text, e.g. `Due Today`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DueToday => "Due Today",
            Self::DueTomorrow => "Due Tomorrow",
        }
    }
}

/// Result of [`filter_assignments`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentWindow<'a> {
    pub due_today: Vec<&'a Assignment>,
    pub due_tomorrow: Vec<&'a Assignment>,
    pub next_assignment: Option<&'a Assignment>,
    #[serde(skip)]
    today: NaiveDate,
    #[serde(skip)]
    tomorrow: NaiveDate,
}

impl<'a> AssignmentWindow<'a> {
    /// Which window an assignment falls in, if any.
    pub fn urgency(&self, assignment: &Assignment) -> Option<Urgency> {
        if assignment.due_date == self.today {
            Some(Urgency::DueToday)
        } else if assignment.due_date == self.tomorrow {
            Some(Urgency::DueTomorrow)
        } else {
            None
        }
    }

    /// The next assignment together with its urgency.
    pub fn next_with_urgency(&self) -> Option<(&'a Assignment, Urgency)> {
        let next = self.next_assignment?;
        self.urgency(next).map(|u| (next, u))
    }

    pub fn is_empty(&self) -> bool {
        self.due_today.is_empty() && self.due_tomorrow.is_empty()
    }
}

/// Partition `assignments` by due date.
///
/// When `tomorrow == today` the tomorrow window stays empty so that no
/// assignment is reported twice.
pub fn filter_assignments(
    assignments: &[Assignment],
    today: NaiveDate,
    tomorrow: NaiveDate,
) -> AssignmentWindow<'_> {
    let due_today: Vec<&Assignment> = assignments.iter().filter(|a| a.due_date == today).collect();
    let due_tomorrow: Vec<&Assignment> = if tomorrow == today {
        Vec::new()
    } else {
        assignments.iter().filter(|a| a.due_date == tomorrow).collect()
    };
    let next_assignment = due_today.iter().chain(due_tomorrow.iter()).next().copied();

    AssignmentWindow {
        due_today,
        due_tomorrow,
        next_assignment,
        today,
        tomorrow,
    }
}
