//! Notifier that feeds the shared toast stack.

#[cfg(test)]
#[path = "toast_notifier_test.rs"]
mod toast_notifier_test;

use leptos::prelude::*;

use super::Notifier;
use crate::state::toast::{ToastKind, ToastState};

#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    ttl_ms: u32,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>, ttl_ms: u32) -> Self {
        Self { toasts, ttl_ms }
    }

    fn push(&self, kind: ToastKind, message: &str) {
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
        let Some(id) = self.toasts.try_update(|t| t.push(kind, message)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            let ttl = std::time::Duration::from_millis(u64::from(self.ttl_ms));
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(ttl).await;
                let _ = toasts.try_update(|t| t.dismiss(id));
            });
        }
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}
