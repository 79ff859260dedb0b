//! Entity trait implementation for the Order domain type.
//!
//! The time source is the actor's context, so baking awaits it from inside the actor
//! loop and no other order request is served until the oven is done.

use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::{OrderAction, OrderActionResult, PizzeriaError};
use crate::timer::TimeSource;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = Arc<dyn TimeSource>;
    type Error = PizzeriaError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Self {
        Self::new(id, params.pizzas)
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        timer: &Self::Context,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::CalculatePrice => {
                Ok(OrderActionResult::CalculatePrice(self.total_price()))
            }
            OrderAction::Bake => {
                for pizza in &self.pizzas {
                    let name = pizza.name();
                    let baking_time = pizza.baking_time();
                    debug!(order_id = %self.id, pizza = %name, ?baking_time, "Baking");
                    timer.wait(baking_time).await;
                }
                self.mark_baked();
                info!(order_id = %self.id, state = %self.state, "Baked");
                Ok(OrderActionResult::Bake(()))
            }
            OrderAction::Complete => {
                self.complete();
                Ok(OrderActionResult::Complete(()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderState;
    use crate::pizza::mock::{PizzaDummy, PizzaStub};
    use crate::pizza::Margherita;
    use crate::timer::mock::TimerMock;
    use std::time::Duration;

    #[tokio::test]
    async fn test_bake_waits_per_pizza_in_order() {
        let timer = Arc::new(TimerMock::new());
        let ctx: Arc<dyn TimeSource> = timer.clone();
        let mut order = Order::new(
            OrderId(1),
            vec![
                Arc::new(Margherita::new(9.5)),
                Arc::new(PizzaDummy),
                Arc::new(PizzaStub::new("stub")),
            ],
        );

        let result = order.handle_action(OrderAction::Bake, &ctx).await.unwrap();

        assert_eq!(result, OrderActionResult::Bake(()));
        assert_eq!(order.state, OrderState::Baked);
        assert_eq!(
            timer.calls(),
            vec![
                Duration::from_secs(90),
                Duration::ZERO,
                Duration::from_secs(60)
            ]
        );
    }

    #[tokio::test]
    async fn test_price_and_complete_do_not_wait() {
        let timer = Arc::new(TimerMock::new());
        let ctx: Arc<dyn TimeSource> = timer.clone();
        let mut order = Order::new(OrderId(2), vec![Arc::new(Margherita::new(12.0))]);

        let price = order
            .handle_action(OrderAction::CalculatePrice, &ctx)
            .await
            .unwrap();
        order
            .handle_action(OrderAction::Complete, &ctx)
            .await
            .unwrap();

        assert_eq!(price, OrderActionResult::CalculatePrice(12.0));
        assert_eq!(order.state, OrderState::Completed);
        timer.verify();
    }

    #[tokio::test]
    async fn test_rebake_completed_order_keeps_it_completed() {
        let timer = Arc::new(TimerMock::new());
        let ctx: Arc<dyn TimeSource> = timer.clone();
        let mut order = Order::new(OrderId(3), vec![Arc::new(PizzaStub::new("stub"))]);

        order
            .handle_action(OrderAction::Complete, &ctx)
            .await
            .unwrap();
        order.handle_action(OrderAction::Bake, &ctx).await.unwrap();

        assert_eq!(order.state, OrderState::Completed);
        assert_eq!(timer.calls(), vec![Duration::from_secs(60)]);
    }
}
