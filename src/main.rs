//! # Pizzeria Demo
//!
//! Opens a pizzeria from `PIZZERIA_*` configuration, takes one order of a Margherita and a
//! Funghi, bakes it, completes it and closes.

use pizzeria::lifecycle::{setup_tracing, Pizzeria, PizzeriaConfig};
use pizzeria::order_actor::PizzeriaError;
use pizzeria::pizza::{Funghi, Margherita, Pizzas};
use std::sync::Arc;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = PizzeriaConfig::from_env()?;
    info!(?config, "Starting pizzeria");

    let pizzeria = Pizzeria::from_config(&config, config.timer.build());

    let pizzas: Pizzas = vec![Arc::new(Margherita::new(25.0)), Arc::new(Funghi::new(30.0))];

    let span = tracing::info_span!("order_processing");
    async {
        let order_id = pizzeria.make_order(pizzas).await?;
        let price = pizzeria.calculate_price(order_id).await?;
        info!(%order_id, price, "Order placed");

        pizzeria.bake_pizzas(order_id).await?;
        pizzeria.complete_order(order_id).await?;

        let state = pizzeria.order_state(order_id).await?;
        info!(%order_id, %state, "Order finished");
        Ok::<_, PizzeriaError>(())
    }
    .instrument(span)
    .await?;

    pizzeria.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
