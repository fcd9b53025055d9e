//! Toast notification area.

use leptos::prelude::*;

use crate::state::toast::{ToastState, toast_class};

/// Fixed-position toast that slides in while a message is set.
#[component]
pub fn ToastView() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class=move || toast_class(&toast.get()) role="status" aria-live="polite">
            <span class="toast__message">
                {move || toast.get().current.map(|t| t.message).unwrap_or_default()}
            </span>
        </div>
    }
}
