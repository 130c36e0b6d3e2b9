//! Application Shell
//!
//! Page routing plus the shared chrome: navigation, toast host, theme.

use leptos::prelude::*;

use crate::components::{Dashboard, Navigation, StudentManager, SubjectManager, Timetable, ToastHost};
use crate::context::AppContext;
use crate::theme;

/// The five pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Timetable,
    Subjects,
    Students,
    Settings,
}

#[component]
pub fn App() -> impl IntoView {
    let (current_page, set_current_page) = signal(Page::Dashboard);

    // The theme preference is the only state surviving a reload.
    let initial_theme = theme::load();
    theme::apply(initial_theme);
    let (theme_pref, set_theme_pref) = signal(initial_theme);
    web_sys::console::log_1(
        &format!("[APP] loaded theme preference: {}", initial_theme.as_str()).into(),
    );

    provide_context(AppContext::new());

    view! {
        <div class="app-layout">
            <Navigation
                current_page=current_page
                set_current_page=set_current_page
                theme_pref=theme_pref
                set_theme_pref=set_theme_pref
            />

            {move || match current_page.get() {
                Page::Dashboard => view! { <Dashboard /> }.into_any(),
                Page::Timetable => view! { <Timetable /> }.into_any(),
                Page::Subjects => view! { <SubjectManager /> }.into_any(),
                Page::Students => view! { <StudentManager /> }.into_any(),
                Page::Settings => view! {
                    <div class="page placeholder">
                        <h1 class="gradient-text">"⚙️ Settings"</h1>
                        <p>"Coming soon! Customization options."</p>
                    </div>
                }.into_any(),
            }}

            <ToastHost />
        </div>
    }
}
