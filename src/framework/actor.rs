//! # Generic Actor Server
//!
//! The `ResourceActor` owns the entity store and processes requests strictly one at a
//! time, so the store needs no locking.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half of the pair returned by [`ResourceActor::new`]. It owns the
/// `store` and the receiving end of the channel. A request is fully handled, including
/// any awaits inside [`ActorEntity::handle_action`], before the next one is received.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the future returned by `run` on the runtime.
///
/// IDs come from a `u32` counter starting at 1 and are never reused. Once `u32::MAX` is
/// handed out, further creates fail with [`FrameworkError::IdsExhausted`].
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    /// `None` once every id has been issued
    next_id: Option<u32>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait for space
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        // Keep just the type name ("Order" rather than "pizzeria::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(raw_id) = self.next_id else {
                        warn!(entity_type, "Ids exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    self.next_id = raw_id.checked_add(1);

                    let id = T::Id::from(raw_id);
                    let item = T::from_create_params(id.clone(), params);
                    self.store.insert(id.clone(), item);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: u32,
        label: String,
        count: u32,
    }

    #[derive(Debug)]
    struct TallyCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TallyAction {
        Bump,
        Reject,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tally rejected: {0}")]
    struct TallyError(String);

    #[async_trait]
    impl ActorEntity for Tally {
        type Id = u32;
        type Create = TallyCreate;
        type Action = TallyAction;
        type ActionResult = u32;
        // Counts every bump across all tallies
        type Context = Arc<AtomicU32>;
        type Error = TallyError;

        fn from_create_params(id: u32, params: TallyCreate) -> Self {
            Self {
                id,
                label: params.label,
                count: 0,
            }
        }

        async fn handle_action(
            &mut self,
            action: TallyAction,
            ctx: &Self::Context,
        ) -> Result<u32, Self::Error> {
            match action {
                TallyAction::Bump => {
                    self.count += 1;
                    ctx.fetch_add(1, Ordering::SeqCst);
                    Ok(self.count)
                }
                TallyAction::Reject => Err(TallyError(self.label.clone())),
            }
        }
    }

    fn tally(label: &str) -> TallyCreate {
        TallyCreate {
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_from_one() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(Arc::new(AtomicU32::new(0))));

        let first = client.create(tally("a")).await.unwrap();
        let second = client.create(tally("b")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_actions_mutate_stored_entity_and_see_context() {
        let bumps = Arc::new(AtomicU32::new(0));
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(bumps.clone()));

        let id = client.create(tally("oven")).await.unwrap();
        let first = client.perform_action(id, TallyAction::Bump).await;
        let second = client.perform_action(id, TallyAction::Bump).await;
        assert_eq!(first.unwrap(), 1);
        assert_eq!(second.unwrap(), 2);

        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.count, 2);
        assert_eq!(stored.label, "oven");
        assert_eq!(bumps.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_action_carries_entity_error() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(Arc::new(AtomicU32::new(0))));

        let id = client.create(tally("burnt")).await.unwrap();
        let result = client.perform_action(id, TallyAction::Reject).await;

        let Err(FrameworkError::EntityError(err)) = result else {
            panic!("expected an entity error");
        };
        assert_eq!(err.to_string(), "tally rejected: burnt");
        assert!(err.downcast_ref::<TallyError>().is_some());
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(Arc::new(AtomicU32::new(0))));

        assert!(client.get(42).await.unwrap().is_none());
        let result = client.perform_action(42, TallyAction::Bump).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_exhaustion() {
        let (mut actor, client) = ResourceActor::<Tally>::new(10);
        actor.next_id = Some(u32::MAX);
        tokio::spawn(actor.run(Arc::new(AtomicU32::new(0))));

        let last = client.create(tally("last")).await.unwrap();
        assert_eq!(last, u32::MAX);

        let result = client.create(tally("overflow")).await;
        assert!(matches!(result, Err(FrameworkError::IdsExhausted)));
        let stored = client.get(last).await.unwrap().unwrap();
        assert_eq!(stored.label, "last");
    }

    #[tokio::test]
    async fn test_run_returns_when_clients_drop() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        let handle = tokio::spawn(actor.run(Arc::new(AtomicU32::new(0))));

        client.create(tally("x")).await.unwrap();
        drop(client);

        handle.await.unwrap();
    }
}
