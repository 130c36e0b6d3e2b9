//! Subject Manager Component
//!
//! Catalog page: a card per subject with inline edit, an add form, and
//! delete buttons. Edits never touch slots already placed on the grid.

use leptos::prelude::*;

use crate::catalog::{SubjectCatalog, SubjectDraft};
use crate::ids::Id;
use crate::models::{Subject, SubjectColor};

#[component]
pub fn SubjectManager() -> impl IntoView {
    let (catalog, set_catalog) = signal(SubjectCatalog::seed());
    let (editing, set_editing) = signal::<Option<Id>>(None);
    let (show_add_form, set_show_add_form) = signal(false);
    let (form, set_form) = signal(SubjectDraft::default());

    let cancel = move |_| {
        set_editing.set(None);
        set_show_add_form.set(false);
        set_form.set(SubjectDraft::default());
    };

    let save = move |_| {
        if let Some(id) = editing.get() {
            set_catalog.update(|c| c.edit(id, form.get()));
        } else if show_add_form.get() {
            set_catalog.update(|c| {
                c.add(form.get());
            });
        }
        set_editing.set(None);
        set_show_add_form.set(false);
        set_form.set(SubjectDraft::default());
    };

    view! {
        <div class="page subjects">
            <div class="page-header">
                <h1 class="gradient-text">"📚 Subject Manager"</h1>
                <p>"Set up the classes your week is built from."</p>
            </div>

            <div class="add-subject-row">
                <button
                    class="btn-playful"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_form.set(SubjectDraft::default());
                        set_show_add_form.set(true);
                    }
                >
                    "➕ Add Subject"
                </button>
            </div>

            <Show when=move || show_add_form.get()>
                <div class="subject-card add-form">
                    <h3>"New Subject"</h3>
                    <SubjectForm form=form set_form=set_form full=true />
                    <div class="card-actions">
                        <button class="btn-save" on:click=save>"💾 Save"</button>
                        <button class="btn-cancel" on:click=cancel>"✕ Cancel"</button>
                    </div>
                </div>
            </Show>

            <div class="subject-grid">
                <For
                    each=move || catalog.get().subjects().to_vec()
                    key=|subject| subject.id
                    children=move |subject: Subject| {
                        let id = subject.id;
                        let card_color = subject.color.css_class();
                        let is_editing = move || editing.get() == Some(id);
                        let begin_edit = {
                            let subject = subject.clone();
                            move |_| {
                                set_show_add_form.set(false);
                                set_form.set(SubjectDraft::from_subject(&subject));
                                set_editing.set(Some(id));
                            }
                        };
                        view! {
                            <div class=format!("subject-card {card_color}")>
                                <Show when=move || !is_editing()>
                                    <div class="card-body">
                                        <span class="card-emoji">{subject.emoji.clone()}</span>
                                        <h3>{subject.name.clone()}</h3>
                                        <p>"👤 " {subject.teacher.clone()}</p>
                                        <p>"📍 " {subject.room.clone()}</p>
                                        <p>"🕐 " {subject.duration.clone()}</p>
                                    </div>
                                    <div class="card-actions">
                                        <button class="btn-edit" on:click=begin_edit.clone()>"✏️ Edit"</button>
                                        <button
                                            class="btn-delete"
                                            on:click=move |_| set_catalog.update(|c| c.remove(id))
                                        >
                                            "🗑 Delete"
                                        </button>
                                    </div>
                                </Show>
                                <Show when=is_editing>
                                    <SubjectForm form=form set_form=set_form full=false />
                                    <div class="card-actions">
                                        <button class="btn-save" on:click=save>"💾 Save"</button>
                                        <button class="btn-cancel" on:click=cancel>"✕ Cancel"</button>
                                    </div>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

/// Shared field set for the add form and inline edit. The add form also
/// exposes duration, emoji and the color picker.
#[component]
fn SubjectForm(
    form: ReadSignal<SubjectDraft>,
    set_form: WriteSignal<SubjectDraft>,
    full: bool,
) -> impl IntoView {
    view! {
        <div class="subject-form">
            <input
                type="text"
                placeholder="Subject Name"
                prop:value=move || form.get().name
                on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Teacher Name"
                prop:value=move || form.get().teacher
                on:input=move |ev| set_form.update(|f| f.teacher = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Room"
                prop:value=move || form.get().room
                on:input=move |ev| set_form.update(|f| f.room = event_target_value(&ev))
            />
            <Show when=move || full>
                <input
                    type="text"
                    placeholder="Duration (e.g. 60 min)"
                    prop:value=move || form.get().duration
                    on:input=move |ev| set_form.update(|f| f.duration = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Emoji"
                    prop:value=move || form.get().emoji
                    on:input=move |ev| set_form.update(|f| f.emoji = event_target_value(&ev))
                />
            </Show>
            <div class="color-picker">
                {SubjectColor::ALL.iter().map(|color| {
                    let color = *color;
                    let is_selected = move || form.get().color == color;
                    view! {
                        <button
                            class=move || {
                                let base = color.css_class();
                                if is_selected() {
                                    format!("color-swatch {base} selected")
                                } else {
                                    format!("color-swatch {base}")
                                }
                            }
                            title=color.label()
                            on:click=move |_| set_form.update(|f| f.color = color)
                        ></button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
