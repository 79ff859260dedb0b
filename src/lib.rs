//! # Pizzeria
//!
//! > **An order lifecycle engine for a small pizzeria.**
//!
//! Orders are made of pizzas, priced by summing their items, baked by waiting out each
//! pizza's oven time one after another, and finally completed.
//!
//! ## 🏗️ Design
//!
//! ### Orders live in an actor
//! Every order is stored by a single [`ResourceActor`](framework::ResourceActor) task that
//! handles one request at a time. Nothing else touches the order store, so there are no
//! locks, and baking one order naturally holds back the next request.
//!
//! ### Collaborators are traits
//! - [`Pizza`](pizza::Pizza) is anything with a name, a price and a baking time.
//! - [`TimeSource`](timer::TimeSource) is the only way the engine waits.
//!
//! Both are supplied by the caller, so tests swap in the doubles from [`pizza::mock`] and
//! [`timer::mock`] and run without a real clock.
//!
//! ### Order lifecycle
//!
//! ```text
//! Created --bake_pizzas--> Baked --complete_order--> Completed
//!    \_______________complete_order_______________/
//! ```
//!
//! `Completed` is terminal. Prices can be read in every state.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - the generic actor: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor), [`ResourceClient`](framework::ResourceClient)
//! - [`model`] - [`Order`](model::Order), [`OrderId`](model::OrderId), [`OrderState`](model::OrderState)
//! - [`order_actor`] - how an order reacts to price, bake and complete
//! - [`pizza`] - the pizza trait, menu items and test doubles
//! - [`timer`] - the time source trait, real and instant timers, and a recording mock
//! - [`lifecycle`] - [`Pizzeria`](lifecycle::Pizzeria), configuration and tracing setup
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Bake without waiting, with per-pizza logs
//! PIZZERIA_TIMER=instant RUST_LOG=debug cargo run
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pizza;
pub mod timer;
