use std::path::PathBuf;
use std::sync::Mutex;

/// One planned or performed side effect of a flatten run. A dry run reports
/// the complete plan through these before any filesystem mutation would
/// happen; a verbose run reports each copy as it is made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    PlannedCreateDir { dir: PathBuf },
    PlannedCopy { from: PathBuf, to: PathBuf, public_name: String },
    PerformedCopy { from: PathBuf, to: PathBuf, public_name: String },
    PlannedManifestWrite { path: PathBuf, json: String },
}

/// Sink for flatten progress events. The core decides when an event is
/// emitted; the sink decides how (or whether) it is displayed.
pub trait Notify {
    fn notify(&self, event: Notification);
}

/// Sink that drops every event. Useful for quiet runs and tests.
pub struct NoopNotify;

impl Notify for NoopNotify {
    fn notify(&self, _event: Notification) {}
}

/// Sink that records events in emission order, for asserting on a run's plan.
#[derive(Default)]
pub struct RecordingNotify {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotify {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.events.lock().expect("notify lock"))
    }
}

impl Notify for RecordingNotify {
    fn notify(&self, event: Notification) {
        self.events.lock().expect("notify lock").push(event);
    }
}
