//! Optional observability hook for the evaluator.
//!
//! Evaluation reports its intermediate results to a [`TraceSink`]. The
//! default sink drops them; [`TracingSink`] forwards them to `tracing` under
//! the `studenthub::trace` target, and any `Fn(&TraceEvent)` closure works
//! as a sink for tests or custom collectors.

use crate::events::TraceEvent;
use crate::snapshot::Snapshot;

/// `tracing` target used by [`TracingSink`].
pub const TRACE_TARGET: &str = "studenthub::trace";

/// Receives trace events during evaluation.
pub trait TraceSink {
    fn record(&self, event: &TraceEvent);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&self, _event: &TraceEvent) {}
}

/// Sink that emits each event as a `tracing` debug record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, event: &TraceEvent) {
        let payload = serde_json::to_string(event).unwrap_or_default();
        tracing::debug!(target: TRACE_TARGET, kind = event.kind(), %payload);
    }
}

impl<F> TraceSink for F
where
    F: Fn(&TraceEvent),
{
    fn record(&self, event: &TraceEvent) {
        self(event)
    }
}

/// Record the size of a freshly loaded snapshot.
pub fn snapshot_loaded(sink: &dyn TraceSink, snapshot: &Snapshot) {
    sink.record(&TraceEvent::SnapshotLoaded {
        assignments: snapshot.assignments.len(),
        classes: snapshot.classes.len(),
        services: snapshot.services.len(),
    });
}
