//! Networking modules for the interview and session REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared
//! with the host's action endpoints.

pub mod api;
pub mod types;
