//! Student Manager Component
//!
//! Roster page: add dialog with required-field validation, card grid,
//! per-card delete. Failures and successes surface as toasts.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{Gender, Grade, Student};
use crate::roster::{Roster, RosterError, StudentDraft};

#[component]
pub fn StudentManager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (roster, set_roster) = signal(Roster::seed());
    let (add_open, set_add_open) = signal(false);
    let (draft, set_draft) = signal(StudentDraft::default());

    let add_student = move |_| {
        let mut outcome: Option<Result<Student, RosterError>> = None;
        set_roster.update(|r| outcome = Some(r.add(&draft.get_untracked())));
        match outcome {
            Some(Ok(student)) => {
                set_draft.set(StudentDraft::default());
                set_add_open.set(false);
                ctx.notify(
                    "Student Added! 🎉",
                    &format!("{} has been added to the class.", student.name),
                );
            }
            Some(Err(err)) => {
                ctx.notify_error("Missing Information", &err.to_string());
            }
            None => {}
        }
    };

    view! {
        <div class="page students">
            <div class="page-header">
                <h1 class="gradient-text">"👥 Student Manager"</h1>
                <p>"Everyone in your class, at a glance."</p>
            </div>

            <div class="add-student-row">
                <button class="btn-playful" on:click=move |_| set_add_open.set(true)>
                    "➕ Add New Student"
                </button>
            </div>

            <Show when=move || add_open.get()>
                <div class="modal-overlay">
                    <div class="modal-backdrop" on:click=move |_| set_add_open.set(false)></div>
                    <div class="modal add-student">
                        <div class="modal-header">
                            <h2 class="gradient-text">"Add New Student"</h2>
                            <button class="modal-close" on:click=move |_| set_add_open.set(false)>"✕"</button>
                        </div>

                        <label class="field-label">"Student Name"</label>
                        <input
                            type="text"
                            placeholder="Enter student name"
                            prop:value=move || draft.get().name
                            on:input=move |ev| set_draft.update(|d| d.name = event_target_value(&ev))
                        />

                        <label class="field-label">"Age"</label>
                        <input
                            type="number"
                            placeholder="Enter age"
                            prop:value=move || draft.get().age
                            on:input=move |ev| set_draft.update(|d| d.age = event_target_value(&ev))
                        />

                        <label class="field-label">"Class"</label>
                        <select on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.class = Grade::from_str(&value));
                        }>
                            <option value="" selected=move || draft.get().class.is_none()>
                                "Select class"
                            </option>
                            {Grade::ALL.iter().map(|grade| {
                                let grade = *grade;
                                view! {
                                    <option
                                        value=grade.as_str()
                                        selected=move || draft.get().class == Some(grade)
                                    >
                                        {grade.as_str()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>

                        <label class="field-label">"Gender"</label>
                        <select on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.gender = Gender::from_str(&value));
                        }>
                            <option value="" selected=move || draft.get().gender.is_none()>
                                "Select gender"
                            </option>
                            {Gender::ALL.iter().map(|gender| {
                                let gender = *gender;
                                view! {
                                    <option
                                        value=gender.as_str()
                                        selected=move || draft.get().gender == Some(gender)
                                    >
                                        {gender.as_str()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>

                        <button class="btn-warm" on:click=add_student>"Add Student"</button>
                    </div>
                </div>
            </Show>

            <div class="student-grid">
                <For
                    each=move || roster.get().students().to_vec()
                    key=|student| student.id
                    children=move |student: Student| {
                        let id = student.id;
                        let delete = move |_| {
                            let mut removed = None;
                            set_roster.update(|r| removed = r.remove(id));
                            if let Some(removed) = removed {
                                ctx.notify(
                                    "Student Removed",
                                    &format!("{} has been removed from the class.", removed.name),
                                );
                            }
                        };
                        view! {
                            <div class="student-card">
                                <div class=format!("student-card-header {}", student.class.gradient_class())>
                                    <span class="student-emoji">{student.gender.emoji()}</span>
                                    <h3>{student.name.clone()}</h3>
                                </div>
                                <div class="student-card-body">
                                    <p>"Age: " {student.age}</p>
                                    <p>"Class: " {student.class.as_str()}</p>
                                    <p>"Gender: " {student.gender.as_str()}</p>
                                </div>
                                <button class="btn-delete" on:click=delete>"🗑 Remove"</button>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || roster.get().is_empty()>
                <div class="empty-state">
                    <span class="empty-icon">"👤"</span>
                    <h3>"No students yet"</h3>
                    <p>"Click \"Add New Student\" to get started!"</p>
                </div>
            </Show>
        </div>
    }
}
