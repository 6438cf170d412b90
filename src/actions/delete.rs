//! Confirmed-delete flow for the interview card menu.
//!
//! ERROR HANDLING
//! ==============
//! A rejected delete (`success: false`) and a failed call both end in an
//! error toast; only the failed call is logged at error level. The menu is
//! settled by a drop guard, so it returns to rest on every path, including
//! when the future is dropped mid-flight.

#[cfg(test)]
#[path = "delete_test.rs"]
mod delete_test;

use super::{InterviewActions, Notifier, ViewControl};
use crate::net::types::InterviewId;

pub const DELETE_SUCCESS_MESSAGE: &str = "Interview deleted successfully";
pub const DELETE_FAILURE_MESSAGE: &str = "Failed to delete interview";
pub const DELETE_ERROR_MESSAGE: &str = "An error occurred while deleting the interview";

/// How a confirmed delete ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteResolution {
    Deleted,
    Rejected,
    Failed,
}

/// Runs a closure once, when dropped.
struct SettleOnDrop<F: FnOnce()> {
    settle: Option<F>,
}

impl<F: FnOnce()> SettleOnDrop<F> {
    fn new(settle: F) -> Self {
        Self { settle: Some(settle) }
    }
}

impl<F: FnOnce()> Drop for SettleOnDrop<F> {
    fn drop(&mut self) {
        if let Some(settle) = self.settle.take() {
            settle();
        }
    }
}

/// Delete `id`, report the outcome, and call `settle` on the way out.
pub async fn confirm_delete<A, N, V, F>(
    actions: &A,
    notifier: &N,
    view: &V,
    id: &InterviewId,
    settle: F,
) -> DeleteResolution
where
    A: InterviewActions,
    N: Notifier,
    V: ViewControl,
    F: FnOnce(),
{
    let _settle = SettleOnDrop::new(settle);

    match actions.delete_interview(id).await {
        Ok(outcome) if outcome.success => {
            notifier.success(outcome.message_or(DELETE_SUCCESS_MESSAGE));
            view.refresh_current_view();
            DeleteResolution::Deleted
        }
        Ok(outcome) => {
            log::warn!("delete rejected: interview={id} message={:?}", outcome.message);
            notifier.error(outcome.message_or(DELETE_FAILURE_MESSAGE));
            DeleteResolution::Rejected
        }
        Err(err) => {
            log::error!("error deleting interview {id}: {err}");
            notifier.error(DELETE_ERROR_MESSAGE);
            DeleteResolution::Failed
        }
    }
}
