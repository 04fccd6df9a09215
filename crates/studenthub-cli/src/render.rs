//! Plain-text rendering of the dashboard.

use std::fmt;

use studenthub_core::{Dashboard, FocusView, ServiceCategory, ServiceStatus, Snapshot};

/// Full dashboard: assignments, classes and services.
pub struct DashboardText<'a> {
    pub dashboard: &'a Dashboard<'a>,
    pub snapshot: &'a Snapshot,
    /// List everything when a window is empty.
    pub list_all_when_empty: bool,
}

/// Focus mode: next assignment and next class only.
pub struct FocusText<'a> {
    pub view: FocusView<'a>,
}

/// Terminal "cannot load" state.
pub struct LoadErrorText<'a> {
    pub error: &'a dyn fmt::Display,
}

fn category_tag(category: ServiceCategory) -> &'static str {
    match category {
        ServiceCategory::Fitness => "[gym]",
        ServiceCategory::Tutoring => "[tutoring]",
        ServiceCategory::Dining | ServiceCategory::Other => "[dining]",
    }
}

fn write_service(f: &mut fmt::Formatter<'_>, status: &ServiceStatus<'_>) -> fmt::Result {
    writeln!(
        f,
        "  {} {}: {} ({})",
        category_tag(status.category),
        status.service.name,
        status.label(),
        status.boundary
    )
}

impl fmt::Display for DashboardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dash = self.dashboard;
        writeln!(f, "Today's Student Hub")?;
        writeln!(f, "{}", dash.moment.today.format("%A, %B %-d, %Y"))?;

        writeln!(f)?;
        writeln!(f, "== Assignments Due ==")?;
        for a in dash.assignments.due_today.iter().chain(&dash.assignments.due_tomorrow) {
            let badge = dash
                .assignments
                .urgency(a)
                .map(|u| u.label())
                .unwrap_or_default();
            writeln!(f, "  [{badge}] {}", a.course)?;
            writeln!(f, "    {}", a.title)?;
            writeln!(f, "    Due {}", a.due_time)?;
        }
        if dash.assignments.is_empty() {
            writeln!(f, "  No assignments due today or tomorrow")?;
            writeln!(f, "  You're all caught up!")?;
            if self.list_all_when_empty {
                writeln!(f, "  All assignments:")?;
                for a in &self.snapshot.assignments {
                    writeln!(f, "    {}: {} (Due: {})", a.course, a.title, a.due_date)?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "== Today's Classes ==")?;
        for (index, c) in dash.classes.remaining_classes.iter().enumerate() {
            if index == 0 {
                writeln!(f, "  {}  [Next Class]", c.course)?;
            } else {
                writeln!(f, "  {}", c.course)?;
            }
            writeln!(f, "    {} - {}", c.start_time.to_12h(), c.end_time.to_12h())?;
            writeln!(f, "    Room: {}", c.room)?;
        }
        if dash.classes.remaining_classes.is_empty() {
            writeln!(f, "  No more classes today")?;
            writeln!(f, "  Time to focus on assignments or relax!")?;
            if self.list_all_when_empty {
                writeln!(f, "  All classes:")?;
                for c in &self.snapshot.classes {
                    writeln!(
                        f,
                        "    {}: {}-{} ({})",
                        c.course, c.start_time, c.end_time, c.day_of_week
                    )?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "== Campus Services ==")?;
        for status in &dash.services {
            write_service(f, status)?;
        }
        Ok(())
    }
}

impl fmt::Display for FocusText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Focus Mode")?;
        writeln!(f, "Your next priorities")?;

        if let Some(next) = self.view.next_assignment {
            writeln!(f)?;
            writeln!(f, "== Next Due Assignment ==")?;
            writeln!(f, "  {}  [{}]", next.assignment.course, next.urgency.label())?;
            writeln!(f, "  {}", next.assignment.title)?;
            writeln!(f, "  Due {}", next.assignment.due_time)?;
        }

        if let Some(class) = self.view.next_class {
            writeln!(f)?;
            writeln!(f, "== Next Class ==")?;
            writeln!(f, "  {}", class.course)?;
            writeln!(
                f,
                "  {} - {}",
                class.start_time.to_12h(),
                class.end_time.to_12h()
            )?;
            writeln!(f, "  Room: {}", class.room)?;
        }

        if self.view.is_all_caught_up() {
            writeln!(f)?;
            writeln!(f, "All caught up!")?;
            writeln!(f, "No urgent assignments or classes right now.")?;
        }
        Ok(())
    }
}

impl fmt::Display for LoadErrorText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error loading student data")?;
        writeln!(f, "{}", self.error)
    }
}
