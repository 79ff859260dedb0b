//! # Time Source
//!
//! Baking is the only place the engine touches elapsed time, and it does so only
//! through [`TimeSource`]. Production code uses [`TokioTimer`]; tests inject
//! [`TimerMock`](mock::TimerMock) or [`InstantTimer`] so nothing waits on a real clock.

pub mod mock;

use async_trait::async_trait;
use std::time::Duration;

/// Capability to wait for a duration.
#[async_trait]
pub trait TimeSource: Send + Sync {
    /// Suspends the caller for about `duration`.
    async fn wait(&self, duration: Duration);
}

/// Waits on the tokio timer wheel.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioTimer;

#[async_trait]
impl TimeSource for TokioTimer {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately, whatever the duration.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantTimer;

#[async_trait]
impl TimeSource for InstantTimer {
    async fn wait(&self, _duration: Duration) {}
}
