//! # Delivery Client
//!
//! Typed wrapper around `ResourceClient<Delivery>`. This is the narrow
//! interface outer layers (HTTP resources, the queue listener, admin tooling)
//! call into; framework-level channel errors are translated to
//! [`DeliveryError`] here so callers only ever see domain errors.

use crate::delivery_actor::DeliveryError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Delivery, DeliveryCreate, DeliveryId, DeliveryUpdate};
use tracing::{debug, instrument};

/// Client for interacting with the Delivery actor.
#[derive(Clone)]
pub struct DeliveryClient {
    inner: ResourceClient<Delivery>,
}

impl DeliveryClient {
    pub fn new(inner: ResourceClient<Delivery>) -> Self {
        Self { inner }
    }

    /// Creates a delivery record and returns it with every derived field
    /// populated.
    #[instrument(skip(self))]
    pub async fn create_delivery(&self, params: DeliveryCreate) -> Result<Delivery, DeliveryError> {
        debug!("Sending create to delivery actor");
        self.inner.create(params).await.map_err(map_framework_error)
    }

    /// Fetches a delivery by id. A missing id is an error, never a partial
    /// record.
    #[instrument(skip(self))]
    pub async fn get_delivery(&self, id: DeliveryId) -> Result<Delivery, DeliveryError> {
        debug!("Sending get to delivery actor");
        self.inner
            .get(id.clone())
            .await
            .map_err(map_framework_error)?
            .ok_or_else(|| DeliveryError::NotFound(id.to_string()))
    }

    /// Lists every delivery attempt recorded for an order. An order with no
    /// deliveries yields an empty vector, not an error.
    #[instrument(skip(self))]
    pub async fn list_by_order(&self, order_id: i64) -> Result<Vec<Delivery>, DeliveryError> {
        debug!("Sending list_by to delivery actor");
        self.inner
            .list_by(order_id)
            .await
            .map_err(map_framework_error)
    }

    /// Applies a partial update and returns the delivery's new state.
    #[instrument(skip(self))]
    pub async fn update_delivery(
        &self,
        id: DeliveryId,
        update: DeliveryUpdate,
    ) -> Result<Delivery, DeliveryError> {
        debug!("Sending update to delivery actor");
        self.inner
            .update(id, update)
            .await
            .map_err(map_framework_error)
    }
}

/// Maps framework errors back into the domain.
///
/// Entity errors are carried boxed through the actor channel and recovered by
/// downcast; channel failures mean the store could not complete the write.
fn map_framework_error(error: FrameworkError) -> DeliveryError {
    match error {
        FrameworkError::NotFound(id) => DeliveryError::NotFound(id),
        FrameworkError::EntityError(inner) => match inner.downcast::<DeliveryError>() {
            Ok(domain) => *domain,
            Err(other) => DeliveryError::Persist(other.to_string()),
        },
        other => DeliveryError::Persist(other.to_string()),
    }
}
