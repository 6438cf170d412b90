//! Dashboard page listing the user's interviews.
//!
//! SYSTEM CONTEXT
//! ==============
//! The interview list is a resource keyed on `InterviewsState.revision`, so a
//! card menu that deletes an interview refreshes this page by bumping the
//! revision.

use leptos::prelude::*;

use crate::components::interview_card::InterviewCard;
use crate::components::logout_button::LogoutButton;
use crate::config::UiConfig;
use crate::state::interviews::InterviewsState;

/// Dashboard page with the interview grid and the logout button.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let interviews = expect_context::<RwSignal<InterviewsState>>();

    let list = LocalResource::new(move || {
        let _revision = interviews.with(|s| s.revision);
        let api_base = config.api_base.clone();
        async move {
            let result = crate::net::api::fetch_interviews(&api_base).await;
            if let Err(err) = &result {
                log::warn!("interview list fetch failed: {err}");
            }
            result
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Your Interviews"</span>
                <span class="toolbar__spacer"></span>
                <LogoutButton/>
            </header>

            <Suspense fallback=move || view! { <p>"Loading interviews..."</p> }>
                {move || {
                    list.get()
                        .map(|result| match result {
                            Ok(items) if items.is_empty() => {
                                view! {
                                    <p class="dashboard-page__empty">"You haven't taken any interviews yet."</p>
                                }
                                    .into_any()
                            }
                            Ok(items) => {
                                view! {
                                    <div class="dashboard-page__cards">
                                        {items
                                            .into_iter()
                                            .map(|interview| view! { <InterviewCard interview=interview/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <p class="dashboard-page__error">{format!("Could not load interviews: {err}")}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
