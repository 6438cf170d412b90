//! Recording collaborators and log capture for action-flow tests.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::sync::Once;

use super::{InterviewActions, Notifier, SessionActions, ViewControl};
use crate::error::ActionError;
use crate::net::types::{ActionOutcome, InterviewId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Delete(String),
    SignOut,
    Success(String),
    Error(String),
    Refresh,
    Navigate(String),
    Settled,
}

/// Shared, ordered record of everything the collaborators saw.
#[derive(Clone, Default)]
pub(crate) struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    pub(crate) fn record(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub(crate) fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.0.borrow().iter().filter(|&e| pred(e)).count()
    }
}

/// Host stand-in returning canned results.
pub(crate) struct FakeHost {
    pub journal: Journal,
    pub delete: Result<ActionOutcome, ActionError>,
    pub sign_out: Result<(), ActionError>,
}

impl FakeHost {
    pub(crate) fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            delete: Ok(ActionOutcome { success: true, message: None }),
            sign_out: Ok(()),
        }
    }
}

impl InterviewActions for FakeHost {
    fn delete_interview(&self, id: &InterviewId) -> impl Future<Output = Result<ActionOutcome, ActionError>> {
        self.journal.record(Event::Delete(id.to_string()));
        let result = self.delete.clone();
        async move { result }
    }
}

impl SessionActions for FakeHost {
    fn sign_out(&self) -> impl Future<Output = Result<(), ActionError>> {
        self.journal.record(Event::SignOut);
        let result = self.sign_out.clone();
        async move { result }
    }
}

pub(crate) struct RecordingNotifier(pub Journal);

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.0.record(Event::Success(message.to_owned()));
    }

    fn error(&self, message: &str) {
        self.0.record(Event::Error(message.to_owned()));
    }
}

pub(crate) struct RecordingView(pub Journal);

impl ViewControl for RecordingView {
    fn refresh_current_view(&self) {
        self.0.record(Event::Refresh);
    }

    fn navigate_to(&self, path: &str) {
        self.0.record(Event::Navigate(path.to_owned()));
    }
}

// =============================================================
// Log capture
// =============================================================

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Install the capturing logger (once per process) and clear this thread's
/// records.
pub(crate) fn capture_logs() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// Messages logged on this thread at exactly `level`.
pub(crate) fn logged(level: log::Level) -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}
