//! Refresh ticker.
//!
//! Re-samples a clock on a fixed interval so the dashboard windows stay
//! current. The ticker is an owned handle: it starts when created and stops
//! on [`RefreshTicker::cancel`] or drop, so no recurring task outlives the
//! view that started it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut ticker = RefreshTicker::start(Duration::from_secs(60), Local::now)?;
//! while let Some(now) = ticker.next().await {
//!     render(Moment::from_datetime(&now));
//! }
//! ```

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::error::{Result, ValidationError};

/// Default refresh period.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Longest accepted refresh period, in seconds (one day).
pub const MAX_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Check a refresh period in whole seconds.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInterval`] unless `1 <= secs <= MAX_INTERVAL_SECS`.
pub fn check_interval_secs(secs: u64) -> Result<(), ValidationError> {
    if secs == 0 || secs > MAX_INTERVAL_SECS {
        return Err(ValidationError::InvalidInterval(secs));
    }
    Ok(())
}

/// Handle to a running refresh task.
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct RefreshTicker<T> {
    rx: watch::Receiver<T>,
    task: Option<JoinHandle<()>>,
}

impl<T> RefreshTicker<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Sample `clock` now and then every `period`. The first refresh fires
    /// one full period after start.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `period` is shorter than a second,
    /// longer than [`MAX_INTERVAL_SECS`], or cannot be scheduled.
    pub fn start<F>(period: Duration, clock: F) -> Result<Self>
    where
        F: Fn() -> T + Send + 'static,
    {
        if period < Duration::from_secs(1) {
            return Err(ValidationError::InvalidInterval(0).into());
        }
        check_interval_secs(period.as_secs())?;
        let first = Instant::now()
            .checked_add(period)
            .ok_or(ValidationError::InvalidInterval(period.as_secs()))?;

        let (tx, rx) = watch::channel(clock());
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(clock()).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(period_secs = period.as_secs(), "refresh ticker started");

        Ok(Self {
            rx,
            task: Some(task),
        })
    }

    /// Latest sampled value without waiting.
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Wait for the next refresh. Returns `None` once the ticker is stopped,
    /// either by [`cancel`](Self::cancel) or because the task died; tell the
    /// two apart with [`is_cancelled`](Self::is_cancelled).
    pub async fn next(&mut self) -> Option<T> {
        if self.task.is_none() {
            return None;
        }
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

impl<T> RefreshTicker<T> {
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Whether [`cancel`](Self::cancel) has been called (or the handle is dropping).
    pub fn is_cancelled(&self) -> bool {
        self.task.is_none()
    }

    /// Stop the recurring task. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("refresh ticker cancelled");
        }
    }
}

impl<T> Drop for RefreshTicker<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
