//! Application Context
//!
//! Shared state provided via Leptos Context API. Only cross-cutting UI
//! concerns live here; page data stays local to its component.

use leptos::prelude::*;

use crate::ids::{self, Id};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Id,
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    toasts: RwSignal<Vec<Toast>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    /// Queue an informational toast; returns its id for auto-dismiss.
    pub fn notify(&self, title: &str, body: &str) -> Id {
        self.push(ToastKind::Info, title, body)
    }

    /// Queue a destructive (validation failure) toast.
    pub fn notify_error(&self, title: &str, body: &str) -> Id {
        self.push(ToastKind::Error, title, body)
    }

    pub fn dismiss(&self, id: Id) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, title: &str, body: &str) -> Id {
        let id = ids::next();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                title: title.to_string(),
                body: body.to_string(),
            });
        });
        id
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
