//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`card_menu`, `interviews`, `toast`) so each
//! widget depends on a small focused model that is testable without a
//! browser.

pub mod card_menu;
pub mod interviews;
pub mod toast;
