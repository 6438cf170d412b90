//! Context menu on an interview card with a delete confirmation.
//!
//! DESIGN
//! ======
//! View state lives in `CardMenuState`; this component only renders the
//! current `MenuView` and forwards clicks. Every click handler stops
//! propagation so the containing card link never navigates. While the menu
//! is open a document `mousedown` listener closes it on presses outside the
//! menu root; the listener is held by a `DismissGuard` and detached on close
//! or unmount.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::delete::confirm_delete;
use crate::actions::{HttpActions, RouterControl, ToastNotifier};
use crate::config::UiConfig;
use crate::net::types::InterviewId;
use crate::state::card_menu::{CardMenuState, MenuView};
use crate::state::interviews::InterviewsState;
use crate::state::toast::ToastState;

fn swallow(ev: &MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Dropdown with a single destructive action for one interview.
#[component]
pub fn InterviewCardMenu(#[prop(into)] interview_id: InterviewId) -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let interviews = use_context::<RwSignal<InterviewsState>>();
    let navigate = use_navigate();

    let menu = RwSignal::new(CardMenuState::default());
    let menu_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    install_outside_dismiss(menu, menu_ref);

    let on_toggle = Callback::new(move |ev: MouseEvent| {
        swallow(&ev);
        menu.update(CardMenuState::toggle);
    });

    let on_delete_click = Callback::new(move |ev: MouseEvent| {
        swallow(&ev);
        menu.update(|m| {
            m.request_delete();
        });
    });

    let on_cancel = Callback::new(move |ev: MouseEvent| {
        swallow(&ev);
        menu.update(CardMenuState::cancel);
    });

    let on_confirm = Callback::new(move |ev: MouseEvent| {
        swallow(&ev);
        if !menu.try_update(CardMenuState::begin_delete).unwrap_or(false) {
            return;
        }

        let id = interview_id.clone();
        let actions = HttpActions::new(&config.api_base);
        let notifier = ToastNotifier::new(toasts, config.toast_ttl_ms);
        let view = RouterControl::new(navigate.clone(), interviews);
        leptos::task::spawn_local(async move {
            confirm_delete(&actions, &notifier, &view, &id, move || {
                let _ = menu.try_update(CardMenuState::settle);
            })
            .await;
        });
    });

    view! {
        <div class="card-menu" node_ref=menu_ref>
            <button
                class="card-menu__trigger"
                on:click=move |ev| on_toggle.run(ev)
                title="Interview actions"
                aria-label="Interview actions"
                aria-haspopup="menu"
                aria-expanded=move || menu.get().is_open().to_string()
            >
                "⋮"
            </button>

            {move || match menu.get().view() {
                MenuView::Closed => ().into_any(),
                MenuView::OptionList => {
                    view! {
                        <div class="card-menu__list" role="menu" on:click=|ev: MouseEvent| ev.stop_propagation()>
                            <button
                                class="card-menu__item card-menu__item--danger"
                                role="menuitem"
                                on:click=move |ev| on_delete_click.run(ev)
                            >
                                <span aria-hidden="true">"🗑"</span>
                                <span>"Delete"</span>
                            </button>
                        </div>
                    }
                        .into_any()
                }
                MenuView::ConfirmPending => {
                    view! {
                        <div class="card-menu__confirm" role="alertdialog" on:click=|ev: MouseEvent| ev.stop_propagation()>
                            <p class="card-menu__prompt">"Are you sure you want to delete this interview?"</p>
                            <div class="card-menu__actions">
                                <button class="btn card-menu__cancel" on:click=move |ev| on_cancel.run(ev)>
                                    "✕ Cancel"
                                </button>
                                <button
                                    class="btn btn--danger card-menu__confirm-button"
                                    on:click=move |ev| on_confirm.run(ev)
                                    disabled=move || menu.get().is_deleting()
                                >
                                    {move || if menu.get().is_deleting() { "Deleting..." } else { "✓ Confirm" }}
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn install_outside_dismiss(menu: RwSignal<CardMenuState>, menu_ref: NodeRef<leptos::html::Div>) {
    use wasm_bindgen::JsCast as _;

    use crate::util::dismiss::DismissGuard;
    use crate::util::document_listener::DocumentListener;

    let guard = StoredValue::new_local(DismissGuard::<DocumentListener>::default());

    Effect::new(move || {
        let open = menu.with(CardMenuState::is_open);
        guard.update_value(|g| {
            g.sync(open, || {
                DocumentListener::attach("mousedown", move |ev: web_sys::Event| {
                    let Some(root) = menu_ref.get_untracked() else {
                        return;
                    };
                    let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                    if !root.contains(target.as_ref()) {
                        let _ = menu.try_update(CardMenuState::dismiss_outside);
                    }
                })
            });
        });
    });

    on_cleanup(move || {
        let _ = guard.try_update_value(DismissGuard::release);
    });
}
