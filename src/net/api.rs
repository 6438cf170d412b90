//! REST API helpers for the interview and session actions.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ActionError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ActionError>` so widget flows can tell a
//! reported failure (`success: false`) apart from a call that never
//! completed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ActionOutcome, InterviewId, InterviewSummary};
use crate::error::ActionError;

#[cfg(any(test, feature = "hydrate"))]
fn interviews_endpoint(api_base: &str) -> String {
    format!("{api_base}/interviews")
}

#[cfg(any(test, feature = "hydrate"))]
fn interview_endpoint(api_base: &str, id: &InterviewId) -> String {
    format!("{api_base}/interviews/{}", id.path_segment())
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_out_endpoint(api_base: &str) -> String {
    format!("{api_base}/auth/sign-out")
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> ActionError {
    ActionError::Transport(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(err: impl std::fmt::Display) -> ActionError {
    ActionError::Decode(err.to_string())
}

/// Delete an interview via `DELETE {api_base}/interviews/{id}`.
///
/// A non-2xx response that still carries an `ActionOutcome` body is returned
/// as that outcome so the server's message reaches the user.
///
/// # Errors
///
/// Returns an error if the request fails, or if a non-2xx response has no
/// decodable outcome body.
pub async fn delete_interview(api_base: &str, id: &InterviewId) -> Result<ActionOutcome, ActionError> {
    #[cfg(feature = "hydrate")]
    {
        let url = interview_endpoint(api_base, id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            let status = resp.status();
            return resp
                .json::<ActionOutcome>()
                .await
                .map_err(|_| ActionError::Status { status });
        }
        resp.json::<ActionOutcome>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, id);
        Err(ActionError::Unavailable)
    }
}

/// Sign the current user out via `POST {api_base}/auth/sign-out`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-OK status.
pub async fn sign_out(api_base: &str) -> Result<(), ActionError> {
    #[cfg(feature = "hydrate")]
    {
        let url = sign_out_endpoint(api_base);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(ActionError::Status { status: resp.status() });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
        Err(ActionError::Unavailable)
    }
}

/// Fetch the current user's interviews from `GET {api_base}/interviews`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is non-OK, or the body
/// is not a list of interviews.
pub async fn fetch_interviews(api_base: &str) -> Result<Vec<InterviewSummary>, ActionError> {
    #[cfg(feature = "hydrate")]
    {
        let url = interviews_endpoint(api_base);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(ActionError::Status { status: resp.status() });
        }
        resp.json::<Vec<InterviewSummary>>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
        Err(ActionError::Unavailable)
    }
}
