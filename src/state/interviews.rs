//! Interview-list state for the dashboard.
//!
//! DESIGN
//! ======
//! The list itself is fetched by a resource that tracks `revision`; bumping
//! the revision is how widgets ask the current view to re-fetch.

#[cfg(test)]
#[path = "interviews_test.rs"]
mod interviews_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterviewsState {
    pub revision: u64,
}

impl InterviewsState {
    pub fn refresh(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
