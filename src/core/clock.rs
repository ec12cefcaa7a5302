//! Time source and delay for the submission pipeline

use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::sync::Mutex;
use std::time::Duration;

/// Provides the current time and the pause before the mail handoff
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Wait for `duration`; not cancellable
    async fn delay(&self, duration: Duration);

    /// Timestamp recorded on a new order request
    fn now(&self) -> DateTime<Local>;
}

/// Real clock backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Fixed clock whose delays complete immediately
///
/// Records every requested delay so tests can assert on them.
#[derive(Debug)]
pub struct ImmediateScheduler {
    now: DateTime<Local>,
    delays: Mutex<Vec<Duration>>,
}

impl ImmediateScheduler {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now,
            delays: Mutex::new(Vec::new()),
        }
    }

    /// Delays requested so far, oldest first
    pub fn delays(&self) -> Vec<Duration> {
        self.delays
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Scheduler for ImmediateScheduler {
    async fn delay(&self, duration: Duration) {
        if let Ok(mut delays) = self.delays.lock() {
            delays.push(duration);
        }
    }

    fn now(&self) -> DateTime<Local> {
        self.now
    }
}
