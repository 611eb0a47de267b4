//! # Entity Trait
//!
//! The `Entity` trait defines the contract a resource type must implement to be
//! managed by the generic [`ResourceActor`](crate::framework::ResourceActor).
//! It specifies associated types for the identifier, the secondary lookup key,
//! the Create/Update DTOs, and the error type, plus the lifecycle hooks the
//! actor invokes while processing requests.
//!
//! # Architecture Note
//! The actor loop is written once against this contract and works for any
//! resource type. Associated types keep the whole pipeline strongly typed: a
//! `Delivery` actor only ever accepts a `DeliveryCreate`, and the compiler
//! rejects anything else.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a
/// `ResourceActor`.
///
/// # Async Hooks
/// The trait is `#[async_trait]` so that hooks may perform asynchronous work.
/// `from_create_params` stays synchronous: it only builds the entity from the
/// generated id and the creation payload.
#[async_trait]
pub trait Entity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity. Assigned exactly once by the
    /// actor's id generator and never changed afterwards.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Secondary lookup key used by `ListBy` requests (e.g. the id of an
    /// owning aggregate). Several entities may share the same key.
    type Key: PartialEq + Clone + Send + Sync + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// A single per-entity error enum covers every operation. The union type
    /// costs a little precision per call site but keeps client-side pattern
    /// matching to one error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the generated id and the payload.
    /// Validation of the payload belongs here; a failure aborts the create
    /// and nothing is stored.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The value `ListBy` requests filter on.
    fn key(&self) -> Self::Key;

    /// Called when an update request is received. The entity mutates its own
    /// state; the actor persists whatever state the hook leaves behind.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
