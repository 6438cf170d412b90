//! Browser implementation of the host actions over `net::api`.

use super::{InterviewActions, SessionActions};
use crate::error::ActionError;
use crate::net::api;
use crate::net::types::{ActionOutcome, InterviewId};

#[derive(Clone, Debug)]
pub struct HttpActions {
    api_base: String,
}

impl HttpActions {
    pub fn new(api_base: &str) -> Self {
        Self { api_base: api_base.to_owned() }
    }
}

impl InterviewActions for HttpActions {
    async fn delete_interview(&self, id: &InterviewId) -> Result<ActionOutcome, ActionError> {
        api::delete_interview(&self.api_base, id).await
    }
}

impl SessionActions for HttpActions {
    async fn sign_out(&self) -> Result<(), ActionError> {
        api::sign_out(&self.api_base).await
    }
}
