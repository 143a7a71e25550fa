use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Shelf {
    id: u32,
    label: String,
    capacity: u32,
    locked: bool,
}

#[derive(Debug)]
struct ShelfCreate {
    label: String,
    capacity: u32,
}

#[derive(Debug)]
struct ShelfUpdate {
    capacity: u32,
}

#[derive(Debug)]
enum ShelfAction {
    ToggleLock,
}

#[derive(Debug, thiserror::Error)]
enum ShelfError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("capacity must be positive")]
    ZeroCapacity,
}

#[async_trait]
impl ActorEntity for Shelf {
    type Id = u32;
    type Create = ShelfCreate;
    type Update = ShelfUpdate;
    type Action = ShelfAction;
    type ActionResult = bool;
    type Context = ();
    type Error = ShelfError;

    fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
        if params.label.is_empty() {
            return Err(ShelfError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            capacity: params.capacity,
            locked: false,
        })
    }

    async fn on_update(
        &mut self,
        update: ShelfUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        // Mutates before validating.
        self.capacity = update.capacity;
        if update.capacity == 0 {
            return Err(ShelfError::ZeroCapacity);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ShelfAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            ShelfAction::ToggleLock => {
                self.locked = !self.locked;
                Ok(self.locked)
            }
        }
    }
}

fn shelf(label: &str, capacity: u32) -> ShelfCreate {
    ShelfCreate {
        label: label.to_string(),
        capacity,
    }
}

#[tokio::test]
async fn test_list_returns_entities_in_creation_order() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    for label in ["Lighting", "Furniture", "Garden", "Kitchen", "Office"] {
        client.create(shelf(label, 4)).await.unwrap();
    }
    client.delete(3).await.unwrap();

    let labels: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(labels, vec!["Lighting", "Furniture", "Kitchen", "Office"]);
}

#[tokio::test]
async fn test_crud_and_action_round() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(shelf("Lighting", 10)).await.unwrap();
    assert_eq!(id, 1);

    assert!(client.perform_action(id, ShelfAction::ToggleLock).await.unwrap());
    assert!(!client.perform_action(id, ShelfAction::ToggleLock).await.unwrap());

    let updated = client.update(id, ShelfUpdate { capacity: 12 }).await.unwrap();
    assert_eq!(updated.capacity, 12);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_update_is_not_committed() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(shelf("Garden", 5)).await.unwrap();

    let result = client.update(id, ShelfUpdate { capacity: 0 }).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.capacity, 5);
}

#[tokio::test]
async fn test_rejected_create_and_unknown_ids() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let rejected = client.create(shelf("", 1)).await;
    match rejected {
        Err(FrameworkError::EntityError(e)) => assert_eq!(e.to_string(), "label must not be empty"),
        other => panic!("expected entity error, got {:?}", other.map(|_| ())),
    }

    assert!(matches!(
        client.delete(42).await,
        Err(FrameworkError::NotFound(id)) if id == "42"
    ));
    assert!(matches!(
        client.perform_action(42, ShelfAction::ToggleLock).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_closed_actor_reports_transport_error() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
    assert!(result.unwrap_err().is_transport());
}
