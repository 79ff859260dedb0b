//! # Order Actor
//!
//! Order storage and lifecycle, built on the generic
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`PizzeriaError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`] for price, bake and complete
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use pizzeria::model::OrderCreate;
//! use pizzeria::order_actor::{self, OrderAction, OrderActionResult};
//! use pizzeria::pizza::{Margherita, Pizzas};
//! use pizzeria::timer::{InstantTimer, TimeSource};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = order_actor::new(8);
//!     let timer: Arc<dyn TimeSource> = Arc::new(InstantTimer);
//!     tokio::spawn(actor.run(timer));
//!
//!     let pizzas: Pizzas = vec![Arc::new(Margherita::new(8.5))];
//!     let id = client.create(OrderCreate { pizzas }).await.unwrap();
//!     let price = client.perform_action(id, OrderAction::CalculatePrice).await.unwrap();
//!     assert_eq!(price, OrderActionResult::CalculatePrice(8.5));
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
