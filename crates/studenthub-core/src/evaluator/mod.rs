//! Schedule status evaluator.
//!
//! Three independent, stateless filters run over the same
//! `(snapshot, moment)` pair:
//!
//! - [`filter_assignments`]: due today / due tomorrow / next assignment
//! - [`filter_classes`]: today's classes / not yet started / next class
//! - [`resolve_service`]: open or closed, and the boundary time to show
//!
//! [`evaluate`] runs all three and reports intermediate results to a
//! [`TraceSink`]. Evaluating the same inputs twice yields the same
//! [`Dashboard`].

mod assignments;
mod classes;
mod moment;
mod services;

pub use assignments::{filter_assignments, AssignmentWindow, Urgency};
pub use classes::{filter_classes, ClassWindow};
pub use moment::{parse_instant, Moment};
pub use services::{resolve_service, Boundary, ServiceStatus};

use serde::Serialize;

use crate::events::TraceEvent;
use crate::snapshot::{Assignment, ClassSession, Snapshot};
use crate::trace::TraceSink;

/// Everything the presentation layer needs for one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard<'a> {
    pub moment: Moment,
    #[serde(flatten)]
    pub assignments: AssignmentWindow<'a>,
    #[serde(flatten)]
    pub classes: ClassWindow<'a>,
    pub services: Vec<ServiceStatus<'a>>,
}

/// The next assignment with its badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAssignment<'a> {
    #[serde(flatten)]
    pub assignment: &'a Assignment,
    pub urgency: Urgency,
}

/// Reduced view: only the next assignment and the next class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusView<'a> {
    pub next_assignment: Option<NextAssignment<'a>>,
    pub next_class: Option<&'a ClassSession>,
}

impl FocusView<'_> {
    /// Nothing due and no class left today.
    pub fn is_all_caught_up(&self) -> bool {
        self.next_assignment.is_none() && self.next_class.is_none()
    }
}

impl<'a> Dashboard<'a> {
    pub fn focus(&self) -> FocusView<'a> {
        FocusView {
            next_assignment: self
                .assignments
                .next_with_urgency()
                .map(|(assignment, urgency)| NextAssignment { assignment, urgency }),
            next_class: self.classes.next_class,
        }
    }
}

/// Run every filter for `moment`.
pub fn evaluate<'a>(snapshot: &'a Snapshot, moment: Moment, trace: &dyn TraceSink) -> Dashboard<'a> {
    trace.record(&TraceEvent::DateInfo {
        today: moment.today,
        tomorrow: moment.tomorrow,
        weekday: moment.weekday,
    });

    let assignments = filter_assignments(&snapshot.assignments, moment.today, moment.tomorrow);
    trace.record(&TraceEvent::AssignmentsFiltered {
        due_today: assignments.due_today.iter().map(|a| a.id).collect(),
        due_tomorrow: assignments.due_tomorrow.iter().map(|a| a.id).collect(),
        next: assignments.next_assignment.map(|a| a.id),
    });

    let classes = filter_classes(&snapshot.classes, moment.weekday, moment.minute_of_day);
    trace.record(&TraceEvent::ClassesFiltered {
        minute_of_day: moment.minute_of_day,
        today: classes.today_classes.iter().map(|c| c.id).collect(),
        remaining: classes.remaining_classes.iter().map(|c| c.id).collect(),
        next: classes.next_class.map(|c| c.id),
    });

    let services = snapshot
        .services
        .iter()
        .map(|s| resolve_service(s, moment.minute_of_day))
        .collect();

    Dashboard {
        moment,
        assignments,
        classes,
        services,
    }
}
