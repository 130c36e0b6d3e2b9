//! Smart Classroom Entry Point

mod app;
mod catalog;
mod components;
mod context;
mod ids;
mod models;
mod roster;
mod schedule;
mod slot_editor;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
