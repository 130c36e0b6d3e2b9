//! Dashboard Component
//!
//! Static landing page: hero text plus stat cards.

use leptos::prelude::*;

#[component]
fn StatCard(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] color: String,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {color}")>
            <span class="stat-icon">{icon}</span>
            <h3 class="stat-value">{value}</h3>
            <p class="stat-title">{title}</p>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="page dashboard">
            <div class="hero">
                <h1 class="gradient-text">"Smart Classroom"</h1>
                <p class="hero-tagline">
                    "Welcome to your magical learning adventure! 🌟 Let's make education fun and organized!"
                </p>
            </div>

            <div class="stats-grid">
                <StatCard icon="📚" title="Active Classes" value="12" color="subject-math" />
                <StatCard icon="👥" title="Students" value="156" color="subject-science" />
                <StatCard icon="🕐" title="Hours This Week" value="32" color="subject-english" />
                <StatCard icon="⭐" title="Achievements" value="48" color="subject-art" />
            </div>

            <div class="dashboard-footer">
                <h2>"🏆 Keep up the great work!"</h2>
                <p>"Head to the timetable to plan your week, or the subject page to set up your classes."</p>
            </div>
        </div>
    }
}
