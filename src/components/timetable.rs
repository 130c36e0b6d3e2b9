//! Timetable Component
//!
//! The weekly grid: 9 time rows by 5 weekday columns, every cell
//! clickable, edited through the slot modal.

use leptos::prelude::*;

use crate::catalog::{SubjectCatalog, SubjectDraft};
use crate::components::EditSlotModal;
use crate::models::{ClassSlot, Subject, SubjectColor, TIME_SLOTS, WEEKDAYS};
use crate::schedule::WeekSchedule;

/// Coordinate being edited while the modal is open.
#[derive(Clone)]
struct EditTarget {
    day: &'static str,
    time: &'static str,
    existing: Option<ClassSlot>,
}

/// Quick-pick list offered by the modal. The timetable owns its own copy;
/// the subject page's catalog is an independent list.
fn quick_picks() -> Vec<Subject> {
    let mut catalog = SubjectCatalog::seed();
    catalog.add(SubjectDraft {
        name: "Music".to_string(),
        teacher: "Ms. Melody".to_string(),
        room: "Music Room".to_string(),
        emoji: "🎵".to_string(),
        ..Default::default()
    });
    catalog.add(SubjectDraft {
        name: "History".to_string(),
        teacher: "Mr. Past".to_string(),
        room: "A103".to_string(),
        color: SubjectColor::English,
        ..Default::default()
    });
    catalog.subjects().to_vec()
}

const LEGEND: &[(&str, SubjectColor)] = &[
    ("Mathematics", SubjectColor::Math),
    ("Science", SubjectColor::Science),
    ("English", SubjectColor::English),
    ("Art", SubjectColor::Art),
    ("Physical Education", SubjectColor::Pe),
];

#[component]
pub fn Timetable() -> impl IntoView {
    let (schedule, set_schedule) = signal(WeekSchedule::seed());
    let (current_week, set_current_week) = signal(0i32);
    let (editing, set_editing) = signal::<Option<EditTarget>>(None);

    let subjects = quick_picks();

    view! {
        <div class="page timetable">
            <div class="page-header">
                <h1 class="gradient-text">"📅 Weekly Timetable"</h1>
                <p>"Your magical learning schedule awaits! ✨"</p>
            </div>

            <div class="edit-hint">
                "✨ Click any time slot to customize your schedule! Add subjects or mark as free time."
            </div>

            <div class="week-nav">
                <button class="week-btn" on:click=move |_| set_current_week.update(|w| *w -= 1)>
                    "‹ Previous"
                </button>
                <h2>{move || format!("Week {} - March 2024", current_week.get().abs() + 1)}</h2>
                <button class="week-btn" on:click=move |_| set_current_week.update(|w| *w += 1)>
                    "Next ›"
                </button>
            </div>

            <div class="timetable-grid">
                <div class="grid-header">"🕐 Time"</div>
                {WEEKDAYS.iter().map(|day| view! {
                    <div class="grid-header day">{*day}</div>
                }).collect_view()}

                {TIME_SLOTS.iter().map(|time| {
                    let time = *time;
                    view! {
                        <div class="time-label">{time}</div>
                        {WEEKDAYS.iter().map(|day| {
                            let day = *day;
                            let cell = move || schedule.get().slot_at(day, time).cloned();
                            let cell_class = move || match cell() {
                                Some(slot) => format!("time-slot occupied {}", slot.color.css_class()),
                                None => "time-slot available".to_string(),
                            };
                            let open_editor = move |_| {
                                let existing = schedule.get_untracked().slot_at(day, time).cloned();
                                set_editing.set(Some(EditTarget { day, time, existing }));
                            };
                            view! {
                                <div class=cell_class on:click=open_editor>
                                    {move || match cell() {
                                        Some(slot) => view! {
                                            <div class="slot-card">
                                                <h4>{slot.subject.clone()}</h4>
                                                <div class="slot-detail">"👤 " {slot.teacher.clone()}</div>
                                                <div class="slot-detail">"📍 " {slot.room.clone()}</div>
                                            </div>
                                        }.into_any(),
                                        None => view! {
                                            <span class="slot-empty">"Click to add"</span>
                                        }.into_any(),
                                    }}
                                </div>
                            }
                        }).collect_view()}
                    }
                }).collect_view()}
            </div>

            {move || editing.get().map(|target| {
                let day = target.day;
                let time = target.time;
                let on_save = Callback::new(move |slot: Option<ClassSlot>| {
                    set_schedule.update(|s| s.commit(day, time, slot));
                    set_editing.set(None);
                });
                let on_close = Callback::new(move |_| set_editing.set(None));
                view! {
                    <EditSlotModal
                        day=day
                        time=time
                        existing=target.existing
                        subjects=subjects.clone()
                        on_save=on_save
                        on_close=on_close
                    />
                }
            })}

            <div class="legend">
                <h3>"Subject Colors"</h3>
                <div class="legend-items">
                    {LEGEND.iter().map(|(name, color)| view! {
                        <div class=format!("legend-chip {}", color.css_class())>
                            <span class="legend-dot"></span>
                            {*name}
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
