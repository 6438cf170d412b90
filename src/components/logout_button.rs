//! Button that signs the user out and returns to the sign-in route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::sign_out::sign_out;
use crate::actions::{HttpActions, RouterControl, ToastNotifier};
use crate::config::UiConfig;
use crate::state::toast::ToastState;

/// Log-out trigger. Disabled while the sign-out call is in flight.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let pending = RwSignal::new(false);

    let on_activate = move |_| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);

        let session = HttpActions::new(&config.api_base);
        let notifier = ToastNotifier::new(toasts, config.toast_ttl_ms);
        let view = RouterControl::new(navigate.clone(), None);
        let sign_in_path = config.sign_in_path.clone();
        leptos::task::spawn_local(async move {
            sign_out(&session, &notifier, &view, &sign_in_path).await;
            let _ = pending.try_set(false);
        });
    };

    view! {
        <button
            class="btn logout-button"
            on:click=on_activate
            disabled=move || pending.get()
            title="Log out"
        >
            <span class="logout-button__icon" aria-hidden="true">"⎋"</span>
            <span>"Log Out"</span>
        </button>
    }
}
