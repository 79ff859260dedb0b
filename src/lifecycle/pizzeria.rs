use crate::framework::{FrameworkError, ResourceClient};
use crate::lifecycle::config::{PizzeriaConfig, DEFAULT_CHANNEL_CAPACITY};
use crate::model::{Order, OrderCreate, OrderId, OrderState};
use crate::order_actor::{OrderAction, OrderActionResult, PizzeriaError};
use crate::pizza::Pizzas;
use crate::timer::TimeSource;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

/// The order lifecycle engine.
///
/// `Pizzeria` is responsible for:
/// - **Lifecycle Management**: starting the order actor and stopping it on [`shutdown`](Self::shutdown)
/// - **Dependency Wiring**: injecting the caller's [`TimeSource`] as the actor's context
/// - **Order Operations**: make, price, bake and complete orders by [`OrderId`]
///
/// All orders live in one actor task, so requests are handled one at a time in
/// arrival order. Baking holds the actor until every pizza is out of the oven.
///
/// Must be created inside a tokio runtime.
///
/// # Example
///
/// ```rust
/// use pizzeria::lifecycle::Pizzeria;
/// use pizzeria::model::OrderState;
/// use pizzeria::pizza::{Funghi, Margherita, Pizzas};
/// use pizzeria::timer::InstantTimer;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), pizzeria::order_actor::PizzeriaError> {
///     let pizzeria = Pizzeria::new("Da Michele", Arc::new(InstantTimer));
///
///     let pizzas: Pizzas = vec![Arc::new(Margherita::new(25.0)), Arc::new(Funghi::new(30.0))];
///     let id = pizzeria.make_order(pizzas).await?;
///
///     assert_eq!(pizzeria.calculate_price(id).await?, 55.0);
///     pizzeria.bake_pizzas(id).await?;
///     pizzeria.complete_order(id).await?;
///     assert_eq!(pizzeria.order_state(id).await?, OrderState::Completed);
///
///     pizzeria.shutdown().await
/// }
/// ```
pub struct Pizzeria {
    name: String,

    /// Client for the order actor
    orders: ResourceClient<Order>,

    /// Task handle of the order actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl Pizzeria {
    /// Opens a pizzeria that bakes with `time_source`.
    pub fn new(name: impl Into<String>, time_source: Arc<dyn TimeSource>) -> Self {
        Self::start(name.into(), DEFAULT_CHANNEL_CAPACITY, time_source)
    }

    /// Opens a pizzeria with the configured name and channel capacity.
    pub fn from_config(config: &PizzeriaConfig, time_source: Arc<dyn TimeSource>) -> Self {
        Self::start(config.name.clone(), config.channel_capacity, time_source)
    }

    fn start(name: String, channel_capacity: usize, time_source: Arc<dyn TimeSource>) -> Self {
        let (actor, orders) = crate::order_actor::new(channel_capacity);
        let handle = tokio::spawn(actor.run(time_source));
        info!(pizzeria = %name, channel_capacity, "Pizzeria open");

        Self {
            name,
            orders,
            handle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepts an order for `pizzas`, kept in the given order.
    ///
    /// Touches neither the time source nor any pizza.
    #[instrument(skip(self, pizzas), fields(pizzeria = %self.name, pizzas = pizzas.len()))]
    pub async fn make_order(&self, pizzas: Pizzas) -> Result<OrderId, PizzeriaError> {
        debug!("make_order called");
        let id = self
            .orders
            .create(OrderCreate { pizzas })
            .await
            .map_err(|e| PizzeriaError::ActorCommunicationError(e.to_string()))?;
        info!(order_id = %id, "Order accepted");
        Ok(id)
    }

    /// Sum of the prices of the order's pizzas.
    #[instrument(skip(self), fields(pizzeria = %self.name))]
    pub async fn calculate_price(&self, id: OrderId) -> Result<f64, PizzeriaError> {
        match self.action(id, OrderAction::CalculatePrice).await? {
            OrderActionResult::CalculatePrice(price) => {
                debug!(price, "Price calculated");
                Ok(price)
            }
            _ => unreachable!("CalculatePrice action must return CalculatePrice result"),
        }
    }

    /// Bakes the order's pizzas one after another, then marks the order baked.
    ///
    /// Total time spent equals the sum of the pizzas' baking times.
    #[instrument(skip(self), fields(pizzeria = %self.name))]
    pub async fn bake_pizzas(&self, id: OrderId) -> Result<(), PizzeriaError> {
        match self.action(id, OrderAction::Bake).await? {
            OrderActionResult::Bake(()) => Ok(()),
            _ => unreachable!("Bake action must return Bake result"),
        }
    }

    /// Marks the order completed, whether or not it was baked.
    #[instrument(skip(self), fields(pizzeria = %self.name))]
    pub async fn complete_order(&self, id: OrderId) -> Result<(), PizzeriaError> {
        match self.action(id, OrderAction::Complete).await? {
            OrderActionResult::Complete(()) => {
                info!(order_id = %id, "Order completed");
                Ok(())
            }
            _ => unreachable!("Complete action must return Complete result"),
        }
    }

    /// Current lifecycle state of the order.
    pub async fn order_state(&self, id: OrderId) -> Result<OrderState, PizzeriaError> {
        self.order(id).await.map(|order| order.state)
    }

    /// Snapshot of the order.
    #[instrument(skip(self), fields(pizzeria = %self.name))]
    pub async fn order(&self, id: OrderId) -> Result<Order, PizzeriaError> {
        self.orders
            .get(id)
            .await
            .map_err(|e| Self::map_error(id, e))?
            .ok_or(PizzeriaError::NotFound(id))
    }

    /// Closes the order actor and waits for it to stop.
    pub async fn shutdown(self) -> Result<(), PizzeriaError> {
        info!(pizzeria = %self.name, "Shutting down pizzeria...");

        // Dropping the only client closes the channel; the actor then leaves its loop
        let Self {
            name,
            orders,
            handle,
        } = self;
        drop(orders);

        if let Err(e) = handle.await {
            error!(pizzeria = %name, "Order actor failed: {:?}", e);
            return Err(PizzeriaError::Shutdown(e.to_string()));
        }

        info!(pizzeria = %name, "Pizzeria closed");
        Ok(())
    }

    async fn action(
        &self,
        id: OrderId,
        action: OrderAction,
    ) -> Result<OrderActionResult, PizzeriaError> {
        self.orders
            .perform_action(id, action)
            .await
            .map_err(|e| Self::map_error(id, e))
    }

    fn map_error(id: OrderId, e: FrameworkError) -> PizzeriaError {
        match e {
            FrameworkError::NotFound(_) => PizzeriaError::NotFound(id),
            FrameworkError::EntityError(err) => match err.downcast::<PizzeriaError>() {
                Ok(err) => *err,
                Err(other) => PizzeriaError::ActorCommunicationError(other.to_string()),
            },
            other => PizzeriaError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::config::TimerKind;
    use crate::pizza::mock::PizzaDummy;
    use crate::timer::mock::TimerMock;

    fn dummy_order() -> Pizzas {
        vec![Arc::new(PizzaDummy)]
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let pizzeria = Pizzeria::new("ids", Arc::new(TimerMock::new()));

        let first = pizzeria.make_order(dummy_order()).await.unwrap();
        let second = pizzeria.make_order(dummy_order()).await.unwrap();

        assert_eq!(first, OrderId(1));
        assert_eq!(second, OrderId(2));
    }

    #[tokio::test]
    async fn test_from_config_uses_configured_name() {
        let config = PizzeriaConfig {
            name: "Sorbillo".to_string(),
            channel_capacity: 1,
            timer: TimerKind::Instant,
        };
        let pizzeria = Pizzeria::from_config(&config, config.timer.build());
        assert_eq!(pizzeria.name(), "Sorbillo");

        // A single-slot channel still serves sequential requests
        let id = pizzeria.make_order(dummy_order()).await.unwrap();
        pizzeria.bake_pizzas(id).await.unwrap();
        assert_eq!(pizzeria.order_state(id).await.unwrap(), OrderState::Baked);

        pizzeria.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_order_snapshot_keeps_submitted_items() {
        let pizzeria = Pizzeria::new("snapshot", Arc::new(TimerMock::new()));
        let dummy: Arc<PizzaDummy> = Arc::new(PizzaDummy);
        let pizzas: Pizzas = vec![dummy.clone(), dummy.clone(), dummy];

        let id = pizzeria.make_order(pizzas).await.unwrap();
        let order = pizzeria.order(id).await.unwrap();

        assert_eq!(order.id, id);
        assert_eq!(order.pizzas.len(), 3);
        assert_eq!(order.state, OrderState::Created);
    }

    #[test]
    fn test_map_error() {
        let id = OrderId(9);
        assert_eq!(
            Pizzeria::map_error(id, FrameworkError::NotFound("order_9".into())),
            PizzeriaError::NotFound(id)
        );
        assert_eq!(
            Pizzeria::map_error(id, FrameworkError::ActorClosed),
            PizzeriaError::ActorCommunicationError("Actor closed".into())
        );
    }

    #[test]
    fn test_map_error_unwraps_order_errors() {
        let id = OrderId(9);
        let inner = PizzeriaError::NotFound(OrderId(3));
        let wrapped = FrameworkError::EntityError(Box::new(inner.clone()));
        assert_eq!(Pizzeria::map_error(id, wrapped), inner);

        let foreign = FrameworkError::EntityError(Box::new(std::fmt::Error));
        assert!(matches!(
            Pizzeria::map_error(id, foreign),
            PizzeriaError::ActorCommunicationError(_)
        ));
    }
}
