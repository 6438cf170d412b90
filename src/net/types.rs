//! Wire types for interview actions.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of an interview record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterviewId(String);

impl InterviewId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id percent-encoded for use as a single URL path segment.
    pub fn path_segment(&self) -> Cow<'_, str> {
        urlencoding::encode(self.as_str())
    }
}

impl From<String> for InterviewId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for InterviewId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for InterviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result reported by an action endpoint that completed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()) }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }

    /// The server-provided message, or `fallback` when missing or empty.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => fallback,
        }
    }
}

/// A row in the dashboard interview list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub id: InterviewId,
    pub role: String,
    #[serde(rename = "type", default)]
    pub interview_type: String,
    #[serde(default)]
    pub techstack: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}
