//! Action flows behind the card menu and the logout button.
//!
//! ARCHITECTURE
//! ============
//! Each widget's async behavior is a free function generic over the
//! collaborators it talks to:
//!
//! - `InterviewActions` / `SessionActions` reach the host's action endpoints.
//! - `Notifier` surfaces success and error toasts.
//! - `ViewControl` refreshes the current view or navigates away.
//!
//! Components wire in the browser implementations (`HttpActions`,
//! `ToastNotifier`, `RouterControl`); tests wire in recorders.

pub mod delete;
pub mod http;
pub mod router_control;
pub mod sign_out;
pub mod toast_notifier;

#[cfg(test)]
mod test_support;

use std::future::Future;

use crate::error::ActionError;
use crate::net::types::{ActionOutcome, InterviewId};

pub use http::HttpActions;
pub use router_control::RouterControl;
pub use toast_notifier::ToastNotifier;

/// Interview mutations exposed by the host.
pub trait InterviewActions {
    fn delete_interview(&self, id: &InterviewId) -> impl Future<Output = Result<ActionOutcome, ActionError>>;
}

/// Session operations exposed by the host.
pub trait SessionActions {
    fn sign_out(&self) -> impl Future<Output = Result<(), ActionError>>;
}

/// Sink for user-visible notifications.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Navigation and refresh of the view the widget lives in.
pub trait ViewControl {
    fn refresh_current_view(&self);
    fn navigate_to(&self, path: &str);
}
