//! # Recording Time Source
//!
//! [`TimerMock`] returns immediately from every wait and records the duration. Tests
//! declare how often each duration should be waited and check it with
//! [`TimerMock::verify`] once the code under test is done.
//!
//! ```rust
//! use pizzeria::timer::TimeSource;
//! use pizzeria::timer::mock::TimerMock;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let timer = TimerMock::new();
//!     timer.expect_wait(Duration::from_secs(60)).times(1);
//!
//!     timer.wait(Duration::from_secs(60)).await;
//!
//!     timer.verify();
//!     assert_eq!(timer.calls(), vec![Duration::from_secs(60)]);
//! }
//! ```

use super::TimeSource;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug, Default)]
struct TimerState {
    expected: Vec<(Duration, usize)>,
    calls: Vec<Duration>,
}

/// Strict, non-blocking [`TimeSource`] double.
#[derive(Debug, Default)]
pub struct TimerMock {
    state: Mutex<TimerState>,
}

impl TimerMock {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, TimerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Expects waits of exactly `duration`.
    pub fn expect_wait(&self, duration: Duration) -> WaitExpectationBuilder<'_> {
        WaitExpectationBuilder {
            timer: self,
            duration,
        }
    }

    /// Every recorded wait, in call order.
    pub fn calls(&self) -> Vec<Duration> {
        self.lock().calls.clone()
    }

    /// Sum of all recorded waits.
    pub fn total_waited(&self) -> Duration {
        self.lock().calls.iter().sum()
    }

    /// Verifies that each expected duration was waited exactly as often as declared and
    /// that nothing else was waited.
    pub fn verify(&self) {
        let state = self.lock();
        for (duration, times) in &state.expected {
            let actual = state.calls.iter().filter(|call| *call == duration).count();
            if actual != *times {
                panic!(
                    "Expected wait({:?}) {} time(s), got {}",
                    duration, times, actual
                );
            }
        }
        let unexpected: Vec<&Duration> = state
            .calls
            .iter()
            .filter(|call| !state.expected.iter().any(|(duration, _)| duration == *call))
            .collect();
        if !unexpected.is_empty() {
            panic!("Unexpected waits: {:?}", unexpected);
        }
    }
}

#[async_trait]
impl TimeSource for TimerMock {
    async fn wait(&self, duration: Duration) {
        self.lock().calls.push(duration);
    }
}

/// Builder for a wait expectation.
pub struct WaitExpectationBuilder<'a> {
    timer: &'a TimerMock,
    duration: Duration,
}

impl WaitExpectationBuilder<'_> {
    /// Expects the duration to be waited `times` times in total.
    pub fn times(self, times: usize) {
        let mut state = self.timer.lock();
        let existing = state
            .expected
            .iter()
            .position(|(duration, _)| *duration == self.duration);
        match existing {
            Some(index) => state.expected[index].1 += times,
            None => state.expected.push((self.duration, times)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let timer = TimerMock::new();
        timer.expect_wait(Duration::from_secs(120)).times(1);
        timer.expect_wait(Duration::from_secs(60)).times(2);

        timer.wait(Duration::from_secs(60)).await;
        timer.wait(Duration::from_secs(120)).await;
        timer.wait(Duration::from_secs(60)).await;

        timer.verify();
        assert_eq!(
            timer.calls(),
            vec![
                Duration::from_secs(60),
                Duration::from_secs(120),
                Duration::from_secs(60)
            ]
        );
        assert_eq!(timer.total_waited(), Duration::from_secs(240));
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected waits")]
    async fn test_unexpected_wait_fails_verify() {
        let timer = TimerMock::new();
        timer.wait(Duration::from_secs(1)).await;
        timer.verify();
    }

    #[test]
    #[should_panic(expected = "got 0")]
    fn test_missing_wait_fails_verify() {
        let timer = TimerMock::new();
        timer.expect_wait(Duration::ZERO).times(1);
        timer.verify();
    }
}
