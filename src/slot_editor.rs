//! Slot Editor Buffer
//!
//! Edit state behind the modal: a draft of the target cell plus an
//! explicit record of how the subject was chosen.

use crate::ids::{self, Id};
use crate::models::{ClassSlot, Subject, SubjectColor};

/// How the draft's subject fields were last populated.
///
/// Kept as an explicit three-way state instead of inferring it from the
/// field contents, so "Free Period selected but text still typed" is a
/// representable (and legal) configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectChoice {
    /// Free Period row selected. Does not clear typed text.
    Free,
    /// A catalog entry was picked; fields are a snapshot of it.
    Catalog(Id),
    /// The subject name was typed by hand.
    Custom,
}

/// Edit buffer for one grid coordinate while the modal is open.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDraft {
    pub id: Id,
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub time: String,
    pub color: SubjectColor,
    pub choice: SubjectChoice,
}

impl SlotDraft {
    /// Seed a blank draft for an unoccupied cell: fresh id, target time.
    pub fn empty(time: &str) -> Self {
        Self {
            id: ids::next(),
            subject: String::new(),
            teacher: String::new(),
            room: String::new(),
            time: time.to_string(),
            color: SubjectColor::default(),
            choice: SubjectChoice::Free,
        }
    }

    /// Seed from the slot currently occupying the cell.
    pub fn for_slot(slot: &ClassSlot) -> Self {
        Self {
            id: slot.id,
            subject: slot.subject.clone(),
            teacher: slot.teacher.clone(),
            room: slot.room.clone(),
            time: slot.time.clone(),
            color: slot.color,
            choice: SubjectChoice::Custom,
        }
    }

    /// Copy name/teacher/room/color from a catalog entry in one update.
    pub fn pick(&mut self, subject: &Subject) {
        self.subject = subject.name.clone();
        self.teacher = subject.teacher.clone();
        self.room = subject.room.clone();
        self.color = subject.color;
        self.choice = SubjectChoice::Catalog(subject.id);
    }

    /// Select the Free Period row. Typed text is intentionally kept.
    pub fn choose_free(&mut self) {
        self.choice = SubjectChoice::Free;
    }

    /// Typing a subject name switches the draft to custom mode.
    pub fn set_subject(&mut self, value: String) {
        self.subject = value;
        self.choice = SubjectChoice::Custom;
    }

    pub fn set_teacher(&mut self, value: String) {
        self.teacher = value;
    }

    pub fn set_room(&mut self, value: String) {
        self.room = value;
    }

    /// Turn the buffer into a commit for the grid.
    ///
    /// `Some` only when subject, teacher and room are all filled in;
    /// an incomplete buffer saves as a clear, same as Mark Free.
    pub fn into_commit(self) -> Option<ClassSlot> {
        if self.subject.is_empty() || self.teacher.is_empty() || self.room.is_empty() {
            return None;
        }
        Some(ClassSlot {
            id: self.id,
            subject: self.subject,
            teacher: self.teacher,
            room: self.room,
            time: self.time,
            color: self.color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SubjectCatalog;
    use crate::schedule::WeekSchedule;

    #[test]
    fn empty_draft_prefills_time_and_fresh_id() {
        let a = SlotDraft::empty("12:00");
        let b = SlotDraft::empty("12:00");
        assert_eq!(a.time, "12:00");
        assert_ne!(a.id, b.id);
        assert_eq!(a.choice, SubjectChoice::Free);
    }

    #[test]
    fn draft_for_slot_copies_all_fields() {
        let schedule = WeekSchedule::seed();
        let math = schedule.slot_at("Monday", "09:00").expect("seeded");
        let draft = SlotDraft::for_slot(math);
        assert_eq!(draft.subject, "Mathematics");
        assert_eq!(draft.teacher, "Ms. Johnson");
        assert_eq!(draft.room, "A101");
        assert_eq!(draft.id, math.id);
    }

    #[test]
    fn catalog_pick_overrides_free_form_text() {
        let catalog = SubjectCatalog::seed();
        let science = &catalog.subjects()[1];

        let mut draft = SlotDraft::empty("10:00");
        draft.set_subject("Chess Club".to_string());
        draft.set_teacher("Mr. Knight".to_string());
        draft.set_room("C3".to_string());
        assert_eq!(draft.choice, SubjectChoice::Custom);

        draft.pick(science);
        assert_eq!(draft.subject, "Science");
        assert_eq!(draft.teacher, "Dr. Smith");
        assert_eq!(draft.room, "Lab B");
        assert_eq!(draft.color, SubjectColor::Science);
        assert_eq!(draft.choice, SubjectChoice::Catalog(science.id));
    }

    #[test]
    fn free_period_keeps_typed_text() {
        let mut draft = SlotDraft::empty("08:00");
        draft.set_subject("Band".to_string());
        draft.choose_free();
        assert_eq!(draft.choice, SubjectChoice::Free);
        assert_eq!(draft.subject, "Band");
    }

    #[test]
    fn incomplete_buffer_commits_as_clear() {
        let mut draft = SlotDraft::empty("11:00");
        draft.set_subject("History".to_string());
        // teacher and room still blank
        assert!(draft.into_commit().is_none());
    }

    #[test]
    fn complete_buffer_commits_as_slot() {
        let mut draft = SlotDraft::empty("11:00");
        draft.set_subject("History".to_string());
        draft.set_teacher("Mr. Past".to_string());
        draft.set_room("A103".to_string());
        let slot = draft.clone().into_commit().expect("complete");
        assert_eq!(slot.time, "11:00");
        assert_eq!(slot.subject, "History");
        assert_eq!(slot.id, draft.id);
    }

    #[test]
    fn reassigning_a_cell_replaces_the_old_subject() {
        let mut schedule = WeekSchedule::seed();
        let catalog = SubjectCatalog::seed();

        let existing = schedule.slot_at("Monday", "09:00").expect("seeded").clone();
        let mut draft = SlotDraft::for_slot(&existing);
        draft.pick(&catalog.subjects()[1]);

        schedule.commit("Monday", "09:00", draft.into_commit());

        let now = schedule.slot_at("Monday", "09:00").expect("occupied");
        assert_eq!(now.subject, "Science");
        assert_eq!(now.teacher, "Dr. Smith");
        assert_eq!(now.room, "Lab B");
        assert!(!schedule
            .day("Monday")
            .iter()
            .any(|s| s.time == "09:00" && s.subject == "Mathematics"));
    }

    #[test]
    fn deleting_a_catalog_subject_leaves_placed_slots_alone() {
        let mut schedule = WeekSchedule::new();
        let mut catalog = SubjectCatalog::seed();
        let art = catalog.subjects()[3].clone();

        let mut draft = SlotDraft::empty("14:00");
        draft.pick(&art);
        schedule.commit("Monday", "14:00", draft.into_commit());

        catalog.remove(art.id);

        let placed = schedule.slot_at("Monday", "14:00").expect("still occupied");
        assert_eq!(placed.subject, "Art");
        assert_eq!(placed.teacher, "Ms. Creative");
        assert_eq!(placed.room, "Art Studio");
    }
}
