//! Class window filter.
//!
//! A class counts as remaining only if it has not started yet: a class in
//! progress is already past. Snapshot order is kept as-is; the data is
//! expected to be listed by start time.

use serde::Serialize;

use crate::clock::DayOfWeek;
use crate::snapshot::ClassSession;

/// Result of [`filter_classes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassWindow<'a> {
    pub today_classes: Vec<&'a ClassSession>,
    pub remaining_classes: Vec<&'a ClassSession>,
    pub next_class: Option<&'a ClassSession>,
}

/// Select today's classes and those starting strictly after `minute_of_day`.
pub fn filter_classes(
    classes: &[ClassSession],
    weekday: DayOfWeek,
    minute_of_day: u16,
) -> ClassWindow<'_> {
    let today_classes: Vec<&ClassSession> =
        classes.iter().filter(|c| c.day_of_week == weekday).collect();
    let remaining_classes: Vec<&ClassSession> = today_classes
        .iter()
        .copied()
        .filter(|c| c.start_time.minutes() > minute_of_day)
        .collect();
    let next_class = remaining_classes.first().copied();

    ClassWindow {
        today_classes,
        remaining_classes,
        next_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(id: i64, day: DayOfWeek, start: &str, end: &str) -> ClassSession {
        ClassSession {
            id,
            course: format!("C{id}"),
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            room: format!("Room {id}"),
            day_of_week: day,
        }
    }

    fn ids(list: &[&ClassSession]) -> Vec<i64> {
        list.iter().map(|c| c.id).collect()
    }

    #[test]
    fn started_class_is_not_remaining() {
        let all = vec![
            class(1, DayOfWeek::Monday, "09:00", "10:15"),
            class(2, DayOfWeek::Monday, "13:00", "14:15"),
        ];
        let w = filter_classes(&all, DayOfWeek::Monday, 10 * 60);
        assert_eq!(ids(&w.today_classes), vec![1, 2]);
        assert_eq!(ids(&w.remaining_classes), vec![2]);
        assert_eq!(w.next_class.map(|c| c.id), Some(2));
    }

    #[test]
    fn start_equal_to_now_is_excluded() {
        let all = vec![class(1, DayOfWeek::Monday, "09:00", "10:00")];
        assert!(filter_classes(&all, DayOfWeek::Monday, 540)
            .remaining_classes
            .is_empty());
        assert_eq!(
            filter_classes(&all, DayOfWeek::Monday, 539).next_class.map(|c| c.id),
            Some(1)
        );
    }

    #[test]
    fn other_weekdays_are_ignored() {
        let all = vec![
            class(1, DayOfWeek::Tuesday, "09:00", "10:00"),
            class(2, DayOfWeek::Monday, "11:00", "12:00"),
        ];
        let w = filter_classes(&all, DayOfWeek::Monday, 0);
        assert_eq!(ids(&w.today_classes), vec![2]);
    }

    #[test]
    fn keeps_snapshot_order_without_sorting() {
        let all = vec![
            class(1, DayOfWeek::Friday, "15:00", "16:00"),
            class(2, DayOfWeek::Friday, "11:00", "12:00"),
        ];
        let w = filter_classes(&all, DayOfWeek::Friday, 8 * 60);
        assert_eq!(w.next_class.map(|c| c.id), Some(1));
    }

    #[test]
    fn no_classes_left() {
        let all = vec![class(1, DayOfWeek::Monday, "09:00", "10:00")];
        let w = filter_classes(&all, DayOfWeek::Monday, 23 * 60);
        assert_eq!(w.today_classes.len(), 1);
        assert!(w.remaining_classes.is_empty());
        assert!(w.next_class.is_none());
    }
}
