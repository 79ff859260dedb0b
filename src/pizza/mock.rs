//! # Pizza Test Doubles
//!
//! | Double | Behaviour | Use Case |
//! |--------|-----------|----------|
//! | [`PizzaDummy`] | Free, bakes instantly | Filling an order when values don't matter |
//! | [`PizzaStub`] | Named, free, bakes in [`STUB_BAKING_TIME`] | Canned values |
//! | [`PizzaMock`] | Answers from queued expectations | Verifying accessor calls |
//!
//! Accessors run on the order actor's task, so [`PizzaMock`] never panics inside an
//! accessor. Mismatches are recorded and reported by [`PizzaMock::verify`].
//!
//! ```rust
//! use pizzeria::pizza::Pizza;
//! use pizzeria::pizza::mock::PizzaMock;
//!
//! let mock = PizzaMock::strict();
//! mock.expect_price().return_once(40.0);
//!
//! assert_eq!(mock.price(), 40.0);
//! mock.verify();
//! ```

use super::Pizza;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Oven time for every [`PizzaStub`].
pub const STUB_BAKING_TIME: Duration = Duration::from_secs(60);

/// Placeholder item: free and needs no oven time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PizzaDummy;

impl Pizza for PizzaDummy {
    fn name(&self) -> String {
        "dummy".to_string()
    }

    fn price(&self) -> f64 {
        0.0
    }

    fn baking_time(&self) -> Duration {
        Duration::ZERO
    }
}

/// Item with canned values: the given name, no price, [`STUB_BAKING_TIME`] in the oven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PizzaStub {
    name: String,
}

impl PizzaStub {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Pizza for PizzaStub {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn price(&self) -> f64 {
        0.0
    }

    fn baking_time(&self) -> Duration {
        STUB_BAKING_TIME
    }
}

/// How many times each accessor of a [`PizzaMock`] was called.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccessorCalls {
    pub name: usize,
    pub price: usize,
    pub baking_time: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strictness {
    Nice,
    Strict,
}

#[derive(Debug, Default)]
struct MockState {
    names: VecDeque<String>,
    prices: VecDeque<f64>,
    baking_times: VecDeque<Duration>,
    calls: AccessorCalls,
    unexpected: Vec<&'static str>,
}

/// Expectation-driven [`Pizza`].
///
/// Each accessor call consumes the next value queued for it. When nothing is queued the
/// mock answers a default (`""`, `0.0`, zero); a strict mock also records the call as
/// unexpected.
#[derive(Debug)]
pub struct PizzaMock {
    strictness: Strictness,
    state: Mutex<MockState>,
}

impl PizzaMock {
    /// A mock that flags every call it was not told to expect.
    pub fn strict() -> Self {
        Self::with_strictness(Strictness::Strict)
    }

    /// A mock that answers defaults for calls it was not told to expect.
    pub fn nice() -> Self {
        Self::with_strictness(Strictness::Nice)
    }

    fn with_strictness(strictness: Strictness) -> Self {
        Self {
            strictness,
            state: Mutex::new(MockState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Expects a `name` call.
    pub fn expect_name(&self) -> ReturnBuilder<'_, String> {
        ReturnBuilder {
            mock: self,
            push: |state, value| state.names.push_back(value),
        }
    }

    /// Expects a `price` call.
    pub fn expect_price(&self) -> ReturnBuilder<'_, f64> {
        ReturnBuilder {
            mock: self,
            push: |state, value| state.prices.push_back(value),
        }
    }

    /// Expects a `baking_time` call.
    pub fn expect_baking_time(&self) -> ReturnBuilder<'_, Duration> {
        ReturnBuilder {
            mock: self,
            push: |state, value| state.baking_times.push_back(value),
        }
    }

    pub fn calls(&self) -> AccessorCalls {
        self.lock().calls
    }

    /// Verifies that all expectations were met and, for a strict mock, that nothing
    /// else was called.
    pub fn verify(&self) {
        let state = self.lock();
        let remaining = state.names.len() + state.prices.len() + state.baking_times.len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
        if !state.unexpected.is_empty() {
            panic!("Unexpected calls on strict mock: {:?}", state.unexpected);
        }
    }

    fn answer<T: Default>(
        &self,
        accessor: &'static str,
        take: impl FnOnce(&mut MockState) -> Option<T>,
    ) -> T {
        let mut state = self.lock();
        match take(&mut state) {
            Some(value) => value,
            None => {
                if self.strictness == Strictness::Strict {
                    state.unexpected.push(accessor);
                }
                T::default()
            }
        }
    }
}

impl Pizza for PizzaMock {
    fn name(&self) -> String {
        self.answer("name", |state| {
            state.calls.name += 1;
            state.names.pop_front()
        })
    }

    fn price(&self) -> f64 {
        self.answer("price", |state| {
            state.calls.price += 1;
            state.prices.pop_front()
        })
    }

    fn baking_time(&self) -> Duration {
        self.answer("baking_time", |state| {
            state.calls.baking_time += 1;
            state.baking_times.pop_front()
        })
    }
}

/// Builder for a single queued answer.
pub struct ReturnBuilder<'a, T> {
    mock: &'a PizzaMock,
    push: fn(&mut MockState, T),
}

impl<T> ReturnBuilder<'_, T> {
    /// Answers the next matching call with `value`.
    pub fn return_once(self, value: T) {
        let mut state = self.mock.lock();
        (self.push)(&mut state, value);
    }
}
