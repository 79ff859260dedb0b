//! # Pizzeria Lifecycle & Orchestration
//!
//! This module starts, wires and stops the order actor, and carries the ambient pieces
//! every run needs.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - [`Pizzeria`] spawns the order actor and owns its client
//! 2. **Dependency Injection** - the caller's time source becomes the actor's context
//! 3. **Graceful Shutdown** - [`Pizzeria::shutdown`] closes the channel and awaits the task
//! 4. **Configuration** - [`PizzeriaConfig`] read from `PIZZERIA_*` variables
//! 5. **Observability Setup** - [`setup_tracing`] for structured logs
//!
//! ## Dependency Injection via Context
//!
//! The time source is handed to `run()`, not to `ResourceActor::new()`:
//!
//! ```rust,ignore
//! let (actor, orders) = order_actor::new(capacity);
//! let handle = tokio::spawn(actor.run(time_source));
//! ```
//!
//! The caller keeps its own `Arc` to the time source, so it outlives the pizzeria.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - a panicked actor surfaces as [`PizzeriaError::Shutdown`](crate::order_actor::PizzeriaError::Shutdown)

pub mod config;
pub mod pizzeria;
pub mod tracing;

pub use self::config::*;
pub use self::pizzeria::*;
pub use self::tracing::setup_tracing;
