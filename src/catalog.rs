//! Subject Catalog State
//!
//! Reusable subject templates offered by the slot editor's quick-pick list.

use crate::ids::{self, Id};
use crate::models::{Subject, SubjectColor};

/// Editable fields of a subject, used for both the add form and inline edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectDraft {
    pub name: String,
    pub teacher: String,
    pub room: String,
    pub duration: String,
    pub color: SubjectColor,
    pub emoji: String,
}

impl SubjectDraft {
    pub fn from_subject(subject: &Subject) -> Self {
        Self {
            name: subject.name.clone(),
            teacher: subject.teacher.clone(),
            room: subject.room.clone(),
            duration: subject.duration.clone(),
            color: subject.color,
            emoji: subject.emoji.clone(),
        }
    }
}

/// The set of subject templates. Slots copy from it by value; deleting or
/// editing a template never touches already-placed slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl SubjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five shipped subjects.
    pub fn seed() -> Self {
        let seed: &[(&str, &str, &str, &str, SubjectColor, &str)] = &[
            ("Mathematics", "Ms. Johnson", "A101", "60 min", SubjectColor::Math, "🔢"),
            ("Science", "Dr. Smith", "Lab B", "90 min", SubjectColor::Science, "🔬"),
            ("English", "Mr. Words", "A102", "45 min", SubjectColor::English, "📖"),
            ("Art", "Ms. Creative", "Art Studio", "75 min", SubjectColor::Art, "🎨"),
            ("Physical Education", "Coach Strong", "Gymnasium", "60 min", SubjectColor::Pe, "⚽"),
        ];
        let subjects = seed
            .iter()
            .map(|(name, teacher, room, duration, color, emoji)| Subject {
                id: ids::next(),
                name: (*name).to_string(),
                teacher: (*teacher).to_string(),
                room: (*room).to_string(),
                duration: (*duration).to_string(),
                color: *color,
                emoji: (*emoji).to_string(),
            })
            .collect();
        Self { subjects }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn get(&self, id: Id) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Append a new subject. Requires a non-empty name; unset optional
    /// fields fall back to defaults. Returns the created entry.
    pub fn add(&mut self, draft: SubjectDraft) -> Option<Subject> {
        if draft.name.is_empty() {
            return None;
        }
        let subject = Subject {
            id: ids::next(),
            name: draft.name,
            teacher: draft.teacher,
            room: draft.room,
            duration: if draft.duration.is_empty() {
                "60 min".to_string()
            } else {
                draft.duration
            },
            color: draft.color,
            emoji: if draft.emoji.is_empty() {
                "📚".to_string()
            } else {
                draft.emoji
            },
        };
        self.subjects.push(subject.clone());
        Some(subject)
    }

    /// Replace the non-id fields of the matching entry. Unknown ids are
    /// a no-op; other entries are untouched.
    pub fn edit(&mut self, id: Id, draft: SubjectDraft) {
        if let Some(subject) = self.subjects.iter_mut().find(|s| s.id == id) {
            subject.name = draft.name;
            subject.teacher = draft.teacher;
            subject.room = draft.room;
            subject.duration = draft.duration;
            subject.color = draft.color;
            subject.emoji = draft.emoji;
        }
    }

    pub fn remove(&mut self, id: Id) {
        self.subjects.retain(|s| s.id != id);
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_subjects() {
        let catalog = SubjectCatalog::seed();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.subjects()[0].name, "Mathematics");
        assert_eq!(catalog.subjects()[4].room, "Gymnasium");
    }

    #[test]
    fn add_rejects_empty_name() {
        let mut catalog = SubjectCatalog::new();
        assert!(catalog.add(SubjectDraft::default()).is_none());
        assert!(catalog.is_empty());
    }

    #[test]
    fn add_fills_defaults() {
        let mut catalog = SubjectCatalog::new();
        let music = catalog
            .add(SubjectDraft {
                name: "Music".to_string(),
                teacher: "Ms. Melody".to_string(),
                room: "Music Room".to_string(),
                ..Default::default()
            })
            .expect("name is non-empty");
        assert_eq!(music.duration, "60 min");
        assert_eq!(music.emoji, "📚");
        assert_eq!(music.color, SubjectColor::Math);
    }

    #[test]
    fn edit_replaces_only_the_matching_entry() {
        let mut catalog = SubjectCatalog::seed();
        let science_id = catalog.subjects()[1].id;
        let mut draft = SubjectDraft::from_subject(&catalog.subjects()[1]);
        draft.teacher = "Dr. Curie".to_string();
        draft.room = "Lab A".to_string();
        catalog.edit(science_id, draft);

        let science = catalog.get(science_id).expect("still present");
        assert_eq!(science.teacher, "Dr. Curie");
        assert_eq!(science.room, "Lab A");
        assert_eq!(catalog.subjects()[0].teacher, "Ms. Johnson");
    }

    #[test]
    fn edit_unknown_id_is_a_no_op() {
        let mut catalog = SubjectCatalog::seed();
        let before = catalog.clone();
        catalog.edit(u64::MAX, SubjectDraft::default());
        assert_eq!(catalog, before);
    }

    #[test]
    fn remove_drops_exactly_one() {
        let mut catalog = SubjectCatalog::seed();
        let art_id = catalog.subjects()[3].id;
        catalog.remove(art_id);
        assert_eq!(catalog.len(), 4);
        assert!(catalog.get(art_id).is_none());
    }
}
