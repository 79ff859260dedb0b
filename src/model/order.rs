use crate::pizza::Pizzas;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle of an order. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Created,
    Baked,
    Completed,
}

impl Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderState::Created => "created",
            OrderState::Baked => "baked",
            OrderState::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// A customer order: the submitted pizzas and where the order is in its lifecycle.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Lifecycle actions ([`OrderAction`](crate::order_actor::OrderAction))
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub pizzas: Pizzas,
    pub state: OrderState,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub pizzas: Pizzas,
}

impl Order {
    /// Creates a new order in [`OrderState::Created`].
    pub fn new(id: OrderId, pizzas: Pizzas) -> Self {
        Self {
            id,
            pizzas,
            state: OrderState::Created,
        }
    }

    /// Plain sum of the item prices, in submission order.
    pub fn total_price(&self) -> f64 {
        self.pizzas.iter().map(|pizza| pizza.price()).sum()
    }

    /// Records that the oven is done. A completed order stays completed.
    pub fn mark_baked(&mut self) {
        if self.state == OrderState::Created {
            self.state = OrderState::Baked;
        }
    }

    /// Completes the order from any state; baking is not required first.
    pub fn complete(&mut self) {
        self.state = OrderState::Completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza::mock::PizzaDummy;
    use crate::pizza::{Funghi, Margherita};
    use std::sync::Arc;

    #[test]
    fn test_total_price_sums_items() {
        let order = Order::new(
            OrderId(1),
            vec![Arc::new(Margherita::new(25.0)), Arc::new(Funghi::new(30.0))],
        );
        assert_eq!(order.total_price(), 55.0);
    }

    #[test]
    fn test_forward_only_state() {
        let mut order = Order::new(OrderId(1), vec![Arc::new(PizzaDummy)]);
        assert_eq!(order.state, OrderState::Created);

        order.mark_baked();
        assert_eq!(order.state, OrderState::Baked);

        order.complete();
        order.mark_baked();
        assert_eq!(order.state, OrderState::Completed);
    }

    #[test]
    fn test_complete_without_baking() {
        let mut order = Order::new(OrderId(7), vec![Arc::new(PizzaDummy)]);
        order.complete();
        assert_eq!(order.state, OrderState::Completed);
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderId(3).to_string(), "order_3");
        assert_eq!(OrderState::Baked.to_string(), "baked");
    }
}
