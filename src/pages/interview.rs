//! Detail route an interview card links to.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn InterviewPage() -> impl IntoView {
    let params = use_params_map();
    let interview_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="interview-page">
            <a href="/" class="interview-page__back" title="Back to dashboard">
                "←"
            </a>
            <h1>"Interview " {interview_id}</h1>
        </div>
    }
}
