//! Sign-in landing page shown after logout.

use leptos::prelude::*;

/// Sign-in page. Authentication itself is handled by the host.
#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <div class="sign-in-page">
            <h1>"Interview Prep"</h1>
            <p>"You are signed out."</p>
            <a href="/" class="btn btn--primary">
                "Sign in"
            </a>
        </div>
    }
}
