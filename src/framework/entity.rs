//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource must satisfy to be managed by the
//! generic [`ResourceActor`](crate::framework::ResourceActor). It names the identifier,
//! the creation payload, the resource-specific actions and the runtime context that is
//! injected into every action.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Actions are `#[async_trait]` so an action may await collaborators (the order actor awaits
/// its time source while baking). The `Context` type is handed to `run()` rather than
/// `new()`, so dependencies are bound when the actor starts.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
