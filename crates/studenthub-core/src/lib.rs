//! # Student Hub Core Library
//!
//! This library provides the logic behind the Student Hub dashboard: which
//! assignments are due, which classes are still ahead today, and which
//! campus services are open right now. It follows a CLI-first design; the
//! `studenthub` binary is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Snapshot**: one immutable JSON document (assignments, classes,
//!   services) loaded from a file or URL
//! - **Evaluator**: pure filters recomputed for every `(snapshot, moment)`
//! - **Ticker**: an owned, cancellable refresh handle that re-samples "now"
//! - **Trace**: optional hook receiving intermediate evaluation results
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`evaluate`]: runs every filter and returns a [`Dashboard`]
//! - [`Moment`]: today / tomorrow / weekday / minute of day
//! - [`RefreshTicker`]: periodic clock sampling
//! - [`Config`]: application configuration management

pub mod clock;
pub mod error;
pub mod evaluator;
pub mod events;
pub mod snapshot;
pub mod storage;
pub mod ticker;
pub mod trace;

pub use clock::{format_12h, DayOfWeek, WallClock};
pub use error::{ConfigError, CoreError, Result, SnapshotError, ValidationError};
pub use evaluator::{
    evaluate, filter_assignments, filter_classes, parse_instant, resolve_service,
    AssignmentWindow, Boundary, ClassWindow, Dashboard, FocusView, Moment, NextAssignment,
    ServiceStatus, Urgency,
};
pub use events::TraceEvent;
pub use snapshot::{Assignment, ClassSession, Service, ServiceCategory, Snapshot, SnapshotSource};
pub use storage::Config;
pub use ticker::{RefreshTicker, MAX_INTERVAL_SECS};
pub use trace::{NoTrace, TraceSink, TracingSink};
