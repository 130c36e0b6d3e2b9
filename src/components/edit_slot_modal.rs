//! Edit Slot Modal Component
//!
//! Application-modal editor for one grid coordinate. Pick a catalog
//! subject, type a custom one, or mark the cell free.

use leptos::prelude::*;

use crate::models::{ClassSlot, Subject};
use crate::slot_editor::{SlotDraft, SubjectChoice};

#[component]
pub fn EditSlotModal(
    #[prop(into)] day: String,
    #[prop(into)] time: String,
    existing: Option<ClassSlot>,
    subjects: Vec<Subject>,
    #[prop(into)] on_save: Callback<Option<ClassSlot>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    // Fresh buffer per open: seeded from the occupant, or blank with the
    // target time pre-filled.
    let initial = match &existing {
        Some(existing) => {
            let mut draft = SlotDraft::for_slot(existing);
            // Highlight the matching pick-list row when the occupant came
            // from the catalog.
            if let Some(matched) = subjects.iter().find(|s| s.name == existing.subject) {
                draft.choice = SubjectChoice::Catalog(matched.id);
            }
            draft
        }
        None => SlotDraft::empty(&time),
    };
    let (draft, set_draft) = signal(initial);

    let header = format!("{day} at {time}");

    view! {
        <div class="modal-overlay">
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>

            <div class="modal slot-editor">
                <div class="modal-header">
                    <h2 class="gradient-text">"Edit Time Slot"</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"✕"</button>
                </div>

                <div class="slot-coordinate">
                    <span class="coordinate-icon">"🕐"</span>
                    {header}
                </div>

                <label class="field-label">"Choose Subject"</label>
                <div class="subject-pick-list">
                    <button
                        class=move || {
                            if draft.get().choice == SubjectChoice::Free {
                                "pick-row selected"
                            } else {
                                "pick-row"
                            }
                        }
                        on:click=move |_| set_draft.update(|d| d.choose_free())
                    >
                        <span class="pick-name">"🕐 Free Period"</span>
                        <p class="pick-detail">"No class scheduled"</p>
                    </button>

                    <For
                        each=move || subjects.clone()
                        key=|subject| subject.id
                        children=move |subject| {
                            let id = subject.id;
                            let row = subject.clone();
                            let is_selected = move || draft.get().choice == SubjectChoice::Catalog(id);
                            view! {
                                <button
                                    class=move || if is_selected() { "pick-row selected" } else { "pick-row" }
                                    on:click=move |_| set_draft.update(|d| d.pick(&subject))
                                >
                                    <span class="pick-emoji">{row.emoji.clone()}</span>
                                    <span class="pick-name">{row.name.clone()}</span>
                                    <p class="pick-detail">{format!("{} • {}", row.teacher, row.room)}</p>
                                </button>
                            }
                        }
                    />
                </div>

                <label class="field-label">"Or Create Custom"</label>
                <div class="custom-fields">
                    <input
                        type="text"
                        placeholder="Subject Name"
                        prop:value=move || draft.get().subject
                        on:input=move |ev| set_draft.update(|d| d.set_subject(event_target_value(&ev)))
                    />
                    <input
                        type="text"
                        placeholder="Teacher Name"
                        prop:value=move || draft.get().teacher
                        on:input=move |ev| set_draft.update(|d| d.set_teacher(event_target_value(&ev)))
                    />
                    <input
                        type="text"
                        placeholder="Room/Location"
                        prop:value=move || draft.get().room
                        on:input=move |ev| set_draft.update(|d| d.set_room(event_target_value(&ev)))
                    />
                </div>

                <div class="modal-actions">
                    <button
                        class="btn-playful"
                        on:click=move |_| on_save.run(draft.get_untracked().into_commit())
                    >
                        "💾 Save Changes"
                    </button>
                    <button
                        class="btn-destructive"
                        on:click=move |_| on_save.run(None)
                    >
                        "🗑 Mark Free"
                    </button>
                </div>
            </div>
        </div>
    }
}
