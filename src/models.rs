//! Domain Models
//!
//! Data structures shared by the timetable, catalog and roster pages.

use serde::{Deserialize, Serialize};

use crate::ids::Id;

/// Fixed weekday columns of the timetable grid.
pub const WEEKDAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Fixed hourly time rows, 08:00 through 16:00.
pub const TIME_SLOTS: &[&str] = &[
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
];

/// Color tag for a subject, one of the five fixed palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectColor {
    Math,
    Science,
    English,
    Art,
    Pe,
}

impl SubjectColor {
    pub const ALL: &'static [SubjectColor] = &[
        SubjectColor::Math,
        SubjectColor::Science,
        SubjectColor::English,
        SubjectColor::Art,
        SubjectColor::Pe,
    ];

    /// CSS class rendered on occupied cells and subject cards.
    pub fn css_class(self) -> &'static str {
        match self {
            SubjectColor::Math => "subject-math",
            SubjectColor::Science => "subject-science",
            SubjectColor::English => "subject-english",
            SubjectColor::Art => "subject-art",
            SubjectColor::Pe => "subject-pe",
        }
    }

    /// Human label shown in the color picker.
    pub fn label(self) -> &'static str {
        match self {
            SubjectColor::Math => "Math Blue",
            SubjectColor::Science => "Science Green",
            SubjectColor::English => "English Pink",
            SubjectColor::Art => "Art Orange",
            SubjectColor::Pe => "PE Purple",
        }
    }
}

impl Default for SubjectColor {
    fn default() -> Self {
        SubjectColor::Math
    }
}

/// Reusable subject template in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: Id,
    pub name: String,
    pub teacher: String,
    pub room: String,
    pub duration: String,
    pub color: SubjectColor,
    pub emoji: String,
}

/// One occupied cell of the weekly grid. Fields are copied from the
/// catalog at assignment time; later catalog edits do not propagate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSlot {
    pub id: Id,
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub time: String,
    pub color: SubjectColor,
}

/// Grade label for a student, one of five fixed classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Grade {
    pub const ALL: &'static [Grade] = &[
        Grade::First,
        Grade::Second,
        Grade::Third,
        Grade::Fourth,
        Grade::Fifth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::First => "1st Grade",
            Grade::Second => "2nd Grade",
            Grade::Third => "3rd Grade",
            Grade::Fourth => "4th Grade",
            Grade::Fifth => "5th Grade",
        }
    }

    pub fn from_str(value: &str) -> Option<Grade> {
        Grade::ALL.iter().copied().find(|g| g.as_str() == value)
    }

    /// Gradient class for the roster card header.
    pub fn gradient_class(self) -> &'static str {
        match self {
            Grade::First => "grade-gradient-pink",
            Grade::Second => "grade-gradient-orange",
            Grade::Third => "grade-gradient-green",
            Grade::Fourth => "grade-gradient-primary",
            Grade::Fifth => "grade-gradient-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: &'static [Gender] = &[Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_str(value: &str) -> Option<Gender> {
        Gender::ALL.iter().copied().find(|g| g.as_str() == value)
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Gender::Male => "👦",
            Gender::Female => "👧",
            Gender::Other => "🧒",
        }
    }
}

/// Student entry in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: Id,
    pub name: String,
    pub age: u32,
    pub class: Grade,
    pub gender: Gender,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids;

    #[test]
    fn grid_dimensions_are_fixed() {
        assert_eq!(WEEKDAYS.len(), 5);
        assert_eq!(TIME_SLOTS.len(), 9);
        assert_eq!(TIME_SLOTS[0], "08:00");
        assert_eq!(TIME_SLOTS[8], "16:00");
    }

    #[test]
    fn grade_labels_round_trip() {
        for grade in Grade::ALL {
            assert_eq!(Grade::from_str(grade.as_str()), Some(*grade));
        }
        assert_eq!(Grade::from_str("6th Grade"), None);
    }

    #[test]
    fn class_slot_serializes() {
        let slot = ClassSlot {
            id: ids::next(),
            subject: "Mathematics".to_string(),
            teacher: "Ms. Johnson".to_string(),
            room: "A101".to_string(),
            time: "09:00".to_string(),
            color: SubjectColor::Math,
        };
        let json = serde_json::to_string(&slot).expect("serialize");
        let back: ClassSlot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, slot);
    }
}
