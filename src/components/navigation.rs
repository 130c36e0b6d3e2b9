//! Navigation Bar Component
//!
//! Fixed top bar with page buttons and the theme toggle.

use leptos::prelude::*;

use crate::app::Page;
use crate::theme::{self, Theme};

const NAV_ITEMS: &[(Page, &str, &str)] = &[
    (Page::Dashboard, "🏠", "Dashboard"),
    (Page::Timetable, "📅", "Timetable"),
    (Page::Subjects, "📚", "Subjects"),
    (Page::Students, "👥", "Students"),
    (Page::Settings, "⚙️", "Settings"),
];

#[component]
pub fn Navigation(
    current_page: ReadSignal<Page>,
    set_current_page: WriteSignal<Page>,
    theme_pref: ReadSignal<Theme>,
    set_theme_pref: WriteSignal<Theme>,
) -> impl IntoView {
    let toggle_theme = move |_| {
        let next = theme_pref.get().toggled();
        set_theme_pref.set(next);
        theme::store(next);
        theme::apply(next);
    };

    view! {
        <nav class="top-nav">
            <div class="nav-items">
                {NAV_ITEMS.iter().map(|(page, icon, label)| {
                    let page = *page;
                    let is_active = move || current_page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| set_current_page.set(page)
                        >
                            <span class="nav-icon">{*icon}</span>
                            <span class="nav-label">{*label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>

            <button
                class="theme-toggle"
                title=move || match theme_pref.get() {
                    Theme::Light => "Switch to dark mode",
                    Theme::Dark => "Switch to light mode",
                }
                on:click=toggle_theme
            >
                {move || match theme_pref.get() {
                    Theme::Light => "🌙",
                    Theme::Dark => "☀️",
                }}
            </button>
        </nav>
    }
}
