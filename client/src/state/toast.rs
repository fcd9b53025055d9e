//! Transient notification state.
//!
//! DESIGN
//! ======
//! A single toast slot: showing a new message replaces the visible one. Each
//! toast carries a sequence id so a stale auto-dismiss timer cannot hide a
//! newer message.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast, replacing any visible one. Returns its id for dismissal.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Toast { id, kind, message: message.into() });
        id
    }

    /// Hide the toast with `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

/// Class list for the toast container: hidden off-screen unless a toast is set.
pub fn toast_class(state: &ToastState) -> String {
    match &state.current {
        Some(toast) => format!("toast toast--visible {}", toast.kind.css_modifier()),
        None => "toast".to_owned(),
    }
}
