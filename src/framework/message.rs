//! # Request Messages
//!
//! The message types exchanged between a [`ResourceClient`](crate::framework::ResourceClient)
//! and its [`ResourceActor`](crate::framework::ResourceActor). Each request
//! carries a oneshot sender the actor answers on.

use crate::framework::entity::Entity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the lifecycle the store supports: entities are
/// created, fetched by id, listed by their secondary key, and updated in
/// place. There is no delete request; records are never removed once written.
///
/// The enum is generic over `T: Entity` and uses the trait's associated types,
/// so a request for one resource type cannot be addressed to another.
#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    /// Create a new entity. Answers with the fully populated entity, so the
    /// caller sees every derived field exactly as stored.
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    /// Fetch an entity by id. Answers `None` when the id is unknown.
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Collect all entities whose [`Entity::key`] matches, in store iteration
    /// order. Answers an empty vector when none match.
    ListBy {
        key: T::Key,
        respond_to: Response<Vec<T>>,
    },
    /// Apply an update to an existing entity. Answers with the updated state.
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
}
