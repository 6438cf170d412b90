//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the interview dashboard chrome and read/write shared
//! state from Leptos context providers.

pub mod interview_card;
pub mod interview_card_menu;
pub mod logout_button;
pub mod toaster;
