//! Toast Host Component
//!
//! Renders the transient notification queue from `AppContext`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, ToastKind};

const AUTO_DISMISS_MS: u32 = 4_000;

/// Stacked notifications in the corner; click or wait to dismiss.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-host">
            <For
                each=move || ctx.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    spawn_local(async move {
                        TimeoutFuture::new(AUTO_DISMISS_MS).await;
                        ctx.dismiss(id);
                    });

                    let toast_class = match toast.kind {
                        ToastKind::Info => "toast",
                        ToastKind::Error => "toast destructive",
                    };
                    view! {
                        <div class=toast_class on:click=move |_| ctx.dismiss(id)>
                            <span class="toast-title">{toast.title.clone()}</span>
                            <p class="toast-body">{toast.body.clone()}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
