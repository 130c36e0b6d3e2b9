//! Weekly Schedule State
//!
//! Sparse day -> slot-list mapping behind the timetable grid.

use std::collections::HashMap;

use crate::ids;
use crate::models::{ClassSlot, SubjectColor};

/// One week of class assignments, keyed by weekday label.
///
/// Within a day the list is sparse and unordered; cell resolution is a
/// linear scan on the `time` label, which is bounded by the nine grid rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekSchedule {
    days: HashMap<String, Vec<ClassSlot>>,
}

impl WeekSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo week matching the shipped seed data.
    pub fn seed() -> Self {
        let mut schedule = Self::new();
        let seed: &[(&str, &str, &str, &str, &str, SubjectColor)] = &[
            ("Monday", "Mathematics", "Ms. Johnson", "A101", "09:00", SubjectColor::Math),
            ("Monday", "Science", "Dr. Smith", "Lab B", "10:00", SubjectColor::Science),
            ("Monday", "Art", "Ms. Creative", "Art Studio", "14:00", SubjectColor::Art),
            ("Tuesday", "English", "Mr. Words", "A102", "09:00", SubjectColor::English),
            ("Tuesday", "PE", "Coach Strong", "Gym", "11:00", SubjectColor::Pe),
            ("Tuesday", "Science", "Dr. Smith", "Lab B", "15:00", SubjectColor::Science),
            ("Wednesday", "Mathematics", "Ms. Johnson", "A101", "08:00", SubjectColor::Math),
            ("Wednesday", "Art", "Ms. Creative", "Art Studio", "13:00", SubjectColor::Art),
            ("Thursday", "English", "Mr. Words", "A102", "10:00", SubjectColor::English),
            ("Thursday", "PE", "Coach Strong", "Gym", "14:00", SubjectColor::Pe),
            ("Friday", "Science", "Dr. Smith", "Lab B", "09:00", SubjectColor::Science),
            ("Friday", "Mathematics", "Ms. Johnson", "A101", "11:00", SubjectColor::Math),
        ];
        for (day, subject, teacher, room, time, color) in seed {
            schedule.commit(
                day,
                time,
                Some(ClassSlot {
                    id: ids::next(),
                    subject: (*subject).to_string(),
                    teacher: (*teacher).to_string(),
                    room: (*room).to_string(),
                    time: (*time).to_string(),
                    color: *color,
                }),
            );
        }
        schedule
    }

    /// Resolve the slot occupying `(day, time)`, if any.
    pub fn slot_at(&self, day: &str, time: &str) -> Option<&ClassSlot> {
        self.days.get(day)?.iter().find(|slot| slot.time == time)
    }

    /// Replace whatever occupies `(day, time)`.
    ///
    /// Rebuilds the day's list: any entry at `time` is dropped, then the
    /// new slot (when present) is appended. A full rebuild rather than an
    /// in-place patch, so duplicate times never survive a commit.
    pub fn commit(&mut self, day: &str, time: &str, slot: Option<ClassSlot>) {
        let entries = self.days.entry(day.to_string()).or_default();
        entries.retain(|existing| existing.time != time);
        if let Some(slot) = slot {
            entries.push(slot);
        }
    }

    /// Slots assigned on `day`, in insertion order.
    pub fn day(&self, day: &str) -> &[ClassSlot] {
        self.days.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total occupied cells across the week.
    pub fn occupied(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(subject: &str, time: &str) -> ClassSlot {
        ClassSlot {
            id: ids::next(),
            subject: subject.to_string(),
            teacher: "Ms. Johnson".to_string(),
            room: "A101".to_string(),
            time: time.to_string(),
            color: SubjectColor::Math,
        }
    }

    #[test]
    fn commit_then_lookup_agrees() {
        let mut schedule = WeekSchedule::new();
        let math = slot("Mathematics", "09:00");
        schedule.commit("Monday", "09:00", Some(math.clone()));
        assert_eq!(schedule.slot_at("Monday", "09:00"), Some(&math));

        schedule.commit("Monday", "09:00", None);
        assert_eq!(schedule.slot_at("Monday", "09:00"), None);
    }

    #[test]
    fn commit_is_idempotent() {
        let mut schedule = WeekSchedule::new();
        let art = slot("Art", "14:00");
        schedule.commit("Friday", "14:00", Some(art.clone()));
        let once = schedule.clone();
        schedule.commit("Friday", "14:00", Some(art));
        assert_eq!(schedule, once);
    }

    #[test]
    fn replace_removes_the_previous_occupant() {
        let mut schedule = WeekSchedule::seed();
        let science = slot("Science", "09:00");
        schedule.commit("Monday", "09:00", Some(science.clone()));

        assert_eq!(schedule.slot_at("Monday", "09:00"), Some(&science));
        let mondays_at_nine = schedule
            .day("Monday")
            .iter()
            .filter(|s| s.time == "09:00")
            .count();
        assert_eq!(mondays_at_nine, 1);
        assert!(schedule.day("Monday").iter().all(|s| s.subject != "Mathematics" || s.time != "09:00"));
    }

    #[test]
    fn at_most_one_slot_per_coordinate() {
        let mut schedule = WeekSchedule::new();
        for subject in ["Mathematics", "Science", "English", "Art"] {
            schedule.commit("Wednesday", "10:00", Some(slot(subject, "10:00")));
        }
        assert_eq!(schedule.day("Wednesday").len(), 1);
        assert_eq!(
            schedule.slot_at("Wednesday", "10:00").map(|s| s.subject.as_str()),
            Some("Art")
        );
    }

    #[test]
    fn clearing_an_empty_cell_is_a_no_op() {
        let mut schedule = WeekSchedule::seed();
        let before = schedule.clone();
        schedule.commit("Monday", "12:00", None);
        assert_eq!(schedule.slot_at("Monday", "12:00"), None);
        assert_eq!(schedule.occupied(), before.occupied());
    }

    #[test]
    fn seed_matches_demo_week() {
        let schedule = WeekSchedule::seed();
        assert_eq!(schedule.occupied(), 12);
        let monday_math = schedule.slot_at("Monday", "09:00").expect("seeded");
        assert_eq!(monday_math.subject, "Mathematics");
        assert_eq!(monday_math.teacher, "Ms. Johnson");
        assert_eq!(monday_math.room, "A101");
    }
}
