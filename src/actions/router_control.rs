//! `ViewControl` backed by the Leptos router.

#[cfg(test)]
#[path = "router_control_test.rs"]
mod router_control_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::ViewControl;
use crate::state::interviews::InterviewsState;

/// Navigates with a `use_navigate` handle and refreshes by bumping the
/// interview list revision, when the current view has one.
#[derive(Clone)]
pub struct RouterControl<F> {
    navigate: F,
    interviews: Option<RwSignal<InterviewsState>>,
}

impl<F> RouterControl<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F, interviews: Option<RwSignal<InterviewsState>>) -> Self {
        Self { navigate, interviews }
    }
}

impl<F> ViewControl for RouterControl<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn refresh_current_view(&self) {
        if let Some(interviews) = self.interviews {
            let _ = interviews.try_update(InterviewsState::refresh);
        }
    }

    fn navigate_to(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}
