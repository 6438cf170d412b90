//! Sign-out flow for the logout button.

#[cfg(test)]
#[path = "sign_out_test.rs"]
mod sign_out_test;

use super::{Notifier, SessionActions, ViewControl};

pub const SIGN_OUT_SUCCESS_MESSAGE: &str = "Logged out successfully";
pub const SIGN_OUT_ERROR_MESSAGE: &str = "Failed to log out. Please try again.";

/// Sign out, then toast and navigate to `sign_in_path`.
///
/// The success toast is raised before navigation. On error nothing
/// navigates. Returns whether the sign-out succeeded.
pub async fn sign_out<S, N, V>(session: &S, notifier: &N, view: &V, sign_in_path: &str) -> bool
where
    S: SessionActions,
    N: Notifier,
    V: ViewControl,
{
    match session.sign_out().await {
        Ok(()) => {
            notifier.success(SIGN_OUT_SUCCESS_MESSAGE);
            view.navigate_to(sign_in_path);
            true
        }
        Err(err) => {
            log::error!("logout error: {err}");
            notifier.error(SIGN_OUT_ERROR_MESSAGE);
            false
        }
    }
}
