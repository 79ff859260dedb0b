//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by the
//! `RUST_LOG` environment variable. Module paths are hidden; the actor tags its events
//! with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with the final store size
//! - **Requests**: `Created`, `Get`, `Action`, `Action ok`, `Not found`
//! - **Baking**: one `Baking` event per pizza with its name and oven time (debug), then
//!   `Baked` with the resulting state
//! - **Pizzeria calls**: every public operation runs in a span carrying the pizzeria name
//!
//! ## Usage Examples
//!
//! ```bash
//! # Order lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Per-pizza baking and full request payloads
//! RUST_LOG=debug cargo run
//!
//! # Debug just the actor plumbing
//! RUST_LOG=pizzeria::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` an order of two pizzas reads roughly:
//!
//! ```text
//! INFO order_processing:make_order: Created entity_type="Order" id=order_1 size=1
//! DEBUG order_processing:bake_pizzas: Baking order_id=order_1 pizza=Margherita baking_time=90s
//! DEBUG order_processing:bake_pizzas: Baking order_id=order_1 pizza=Funghi baking_time=120s
//! INFO order_processing:bake_pizzas: Baked order_id=order_1 state=baked
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
