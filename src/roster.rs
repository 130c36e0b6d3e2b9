//! Student Roster State
//!
//! Independent student list with validated add and unconditional delete.

use thiserror::Error;

use crate::ids::{self, Id};
use crate::models::{Gender, Grade, Student};

/// Why a roster add was rejected. Surfaced to the user as a toast; the
/// roster is never partially mutated on failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Please fill in all fields to add a student.")]
    Incomplete,
    #[error("Age must be a positive whole number.")]
    InvalidAge,
}

/// Raw form input for a new student. `age` stays a string until validation
/// so the form can round-trip whatever was typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub age: String,
    pub class: Option<Grade>,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three shipped students.
    pub fn seed() -> Self {
        let seed: &[(&str, u32, Grade, Gender)] = &[
            ("Emma Johnson", 8, Grade::Third, Gender::Female),
            ("Liam Smith", 9, Grade::Fourth, Gender::Male),
            ("Sophia Davis", 7, Grade::Second, Gender::Female),
        ];
        let students = seed
            .iter()
            .map(|(name, age, class, gender)| Student {
                id: ids::next(),
                name: (*name).to_string(),
                age: *age,
                class: *class,
                gender: *gender,
            })
            .collect();
        Self { students }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Validate the draft and append a student.
    ///
    /// Every field is required; the age text must parse to a positive
    /// integer (the legacy UI silently coerced it, we reject instead).
    /// On error nothing is written.
    pub fn add(&mut self, draft: &StudentDraft) -> Result<Student, RosterError> {
        if draft.name.is_empty() || draft.age.is_empty() {
            return Err(RosterError::Incomplete);
        }
        let (class, gender) = match (draft.class, draft.gender) {
            (Some(class), Some(gender)) => (class, gender),
            _ => return Err(RosterError::Incomplete),
        };
        let age: u32 = draft.age.trim().parse().map_err(|_| RosterError::InvalidAge)?;
        if age == 0 {
            return Err(RosterError::InvalidAge);
        }

        let student = Student {
            id: ids::next(),
            name: draft.name.clone(),
            age,
            class,
            gender,
        };
        self.students.push(student.clone());
        Ok(student)
    }

    /// Remove by id, returning the removed student for the notification.
    pub fn remove(&mut self, id: Id) -> Option<Student> {
        let index = self.students.iter().position(|s| s.id == id)?;
        Some(self.students.remove(index))
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> StudentDraft {
        StudentDraft {
            name: "Noah Brown".to_string(),
            age: "10".to_string(),
            class: Some(Grade::Fifth),
            gender: Some(Gender::Male),
        }
    }

    #[test]
    fn add_appends_exactly_one() {
        let mut roster = Roster::seed();
        let student = roster.add(&full_draft()).expect("valid draft");
        assert_eq!(roster.len(), 4);
        assert_eq!(student.name, "Noah Brown");
        assert_eq!(student.age, 10);
        assert_eq!(student.class, Grade::Fifth);
        assert_eq!(student.gender, Gender::Male);
    }

    #[test]
    fn missing_fields_reject_without_mutation() {
        let mut roster = Roster::seed();
        let before = roster.clone();

        for draft in [
            StudentDraft { name: String::new(), ..full_draft() },
            StudentDraft { age: String::new(), ..full_draft() },
            StudentDraft { class: None, ..full_draft() },
            StudentDraft { gender: None, ..full_draft() },
        ] {
            assert_eq!(roster.add(&draft), Err(RosterError::Incomplete));
            assert_eq!(roster, before);
        }
    }

    #[test]
    fn bad_age_is_rejected_not_coerced() {
        let mut roster = Roster::new();
        for age in ["seven", "-3", "0", "4.5"] {
            let draft = StudentDraft { age: age.to_string(), ..full_draft() };
            assert_eq!(roster.add(&draft), Err(RosterError::InvalidAge));
        }
        assert!(roster.is_empty());
    }

    #[test]
    fn remove_returns_the_student() {
        let mut roster = Roster::seed();
        let emma = roster.students()[0].clone();
        let removed = roster.remove(emma.id).expect("present");
        assert_eq!(removed.name, "Emma Johnson");
        assert_eq!(roster.len(), 2);
        assert!(roster.remove(emma.id).is_none());
    }
}
