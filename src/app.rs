//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::config::UiConfig;
use crate::pages::{dashboard::DashboardPage, interview::InterviewPage, sign_in::SignInPage};
use crate::state::{interviews::InterviewsState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, the toast stack, and the interview-list refresh signal,
/// then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(UiConfig::default());
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RwSignal::new(InterviewsState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/interview-ui.css"/>
        <Title text="Interview Prep"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("sign-in") view=SignInPage/>
                <Route path=(StaticSegment("interview"), ParamSegment("id")) view=InterviewPage/>
            </Routes>
        </Router>

        <Toaster/>
    }
}
