//! Fixed-position stack of toast notifications.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Renders the shared `ToastState`. Clicking a toast dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let is_error = toast.kind == ToastKind::Error;
                        view! {
                            <div
                                class="toaster__toast"
                                class:toaster__toast--error=is_error
                                class:toaster__toast--success=!is_error
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
