// ============================================================================
// Event Handler Interface
// Defines the contract for observing multiplication lifecycle events
// ============================================================================

use crate::domain::JobId;
use crate::engine::StatsSnapshot;
use crate::numeric::ArithmeticError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Events emitted by the multiplier's public entry points.
///
/// The recursive core never emits events; one multiplication produces
/// `Started` followed by exactly one of `Completed` or `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum MultiplicationEvent {
    /// Multiplication accepted, recursion about to start
    Started {
        job_id: JobId,
        left_digits: usize,
        right_digits: usize,
        timestamp: DateTime<Utc>,
    },

    /// Product computed
    Completed {
        job_id: JobId,
        product_digits: usize,
        stats: StatsSnapshot,
        timestamp: DateTime<Utc>,
    },

    /// Multiplication aborted
    Failed {
        job_id: JobId,
        error: ArithmeticError,
        timestamp: DateTime<Utc>,
    },
}

impl MultiplicationEvent {
    /// Job the event belongs to
    pub fn job_id(&self) -> JobId {
        match self {
            MultiplicationEvent::Started { job_id, .. }
            | MultiplicationEvent::Completed { job_id, .. }
            | MultiplicationEvent::Failed { job_id, .. } => *job_id,
        }
    }
}

/// Event handler trait for processing multiplication events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a multiplication event
    fn on_event(&self, event: MultiplicationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<MultiplicationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: MultiplicationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: MultiplicationEvent) {
        match &event {
            MultiplicationEvent::Failed { job_id, error, .. } => {
                tracing::warn!(%job_id, %error, "Multiplication failed");
            },
            _ => tracing::debug!("Multiplier event: {:?}", event),
        }
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<MultiplicationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events received so far
    pub fn events(&self) -> Vec<MultiplicationEvent> {
        self.events.lock().clone()
    }

    /// Drain recorded events
    pub fn take(&self) -> Vec<MultiplicationEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: MultiplicationEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<MultiplicationEvent>) {
        self.events.lock().extend(events);
    }
}
