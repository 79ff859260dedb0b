//! # Pizza Abstraction
//!
//! Anything that can go into an order implements [`Pizza`]. The order engine only reads
//! through the trait, so real menu items and test doubles are interchangeable.
//!
//! - [`variants`] - menu items ([`Margherita`], [`Funghi`])
//! - [`mock`] - doubles for tests ([`PizzaDummy`](mock::PizzaDummy),
//!   [`PizzaStub`](mock::PizzaStub), [`PizzaMock`](mock::PizzaMock))

pub mod mock;
pub mod variants;

pub use variants::*;

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

/// A single orderable item.
///
/// Accessors are total and free of side effects on the item's observable values.
pub trait Pizza: Send + Sync + Debug {
    fn name(&self) -> String;

    /// Non-negative price of this item.
    fn price(&self) -> f64;

    /// How long the oven needs for this item.
    fn baking_time(&self) -> Duration;
}

/// The items of one order, in submission order.
///
/// Items are shared: the caller may keep its own handle to an item it submitted.
pub type Pizzas = Vec<Arc<dyn Pizza>>;
