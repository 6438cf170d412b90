//! Scoped outside-dismiss subscription.
//!
//! DESIGN
//! ======
//! A menu listens for pointer presses outside itself only while it is open.
//! `DismissGuard` owns at most one subscription handle: `sync` acquires it
//! when the menu opens and drops it when the menu closes, and dropping the
//! guard itself (component unmount) drops the handle too. Handles detach
//! their listener in `Drop`.

#[cfg(test)]
#[path = "dismiss_test.rs"]
mod dismiss_test;

#[derive(Debug)]
pub struct DismissGuard<H> {
    handle: Option<H>,
}

impl<H> Default for DismissGuard<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> DismissGuard<H> {
    /// Bring the subscription in line with the menu's open state.
    ///
    /// `acquire` runs only on a closed-to-open edge. It may return `None`
    /// when no document is available, in which case the next open edge
    /// tries again.
    pub fn sync(&mut self, open: bool, acquire: impl FnOnce() -> Option<H>) {
        match (open, self.handle.is_some()) {
            (true, false) => self.handle = acquire(),
            (false, true) => self.handle = None,
            _ => {}
        }
    }

    /// Drop the subscription unconditionally.
    pub fn release(&mut self) {
        self.handle = None;
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}
