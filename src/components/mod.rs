//! UI Components
//!
//! Leptos components for each page plus shared chrome.

mod dashboard;
mod edit_slot_modal;
mod navigation;
mod student_manager;
mod subject_manager;
mod timetable;
mod toast;

pub use dashboard::Dashboard;
pub use edit_slot_modal::EditSlotModal;
pub use navigation::Navigation;
pub use student_manager::StudentManager;
pub use subject_manager::SubjectManager;
pub use timetable::Timetable;
pub use toast::ToastHost;
