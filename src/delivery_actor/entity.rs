//! [`Entity`] implementation for [`Delivery`].
//!
//! This is where the lifecycle invariants live: defaults are applied, the
//! estimated delivery time is locked in from the creation timestamp, and
//! updates touch only the mutable fields.

use crate::delivery_actor::DeliveryError;
use crate::framework::Entity;
use crate::model::{estimated_delivery_time, Delivery, DeliveryCreate, DeliveryId, DeliveryUpdate};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl Entity for Delivery {
    type Id = DeliveryId;
    type Key = i64;
    type Create = DeliveryCreate;
    type Update = DeliveryUpdate;
    type Error = DeliveryError;

    /// Builds a delivery from creation parameters.
    ///
    /// `created_at`, `updated_at`, and `estimated_delivery_time` are all
    /// stamped from the same instant, so the estimate is exactly
    /// `created_at` plus the method's offset.
    fn from_create_params(id: DeliveryId, params: DeliveryCreate) -> Result<Self, DeliveryError> {
        if params.order_id <= 0 {
            return Err(DeliveryError::Validation(format!(
                "order_id must be a positive integer, got {}",
                params.order_id
            )));
        }
        if params.delivery_provider.trim().is_empty() {
            return Err(DeliveryError::Validation(
                "delivery_provider must not be empty".to_string(),
            ));
        }

        let created_at = Utc::now();
        let delivery_method = params.delivery_method.unwrap_or_default();

        Ok(Self {
            id,
            order_id: params.order_id,
            delivery_provider: params.delivery_provider,
            status: params.status.unwrap_or_default(),
            current_location: params.current_location,
            estimated_delivery_time: estimated_delivery_time(delivery_method, created_at),
            delivery_method,
            created_at,
            updated_at: created_at,
        })
    }

    /// Deliveries are listed per order.
    fn key(&self) -> i64 {
        self.order_id
    }

    /// Applies status and location changes. `updated_at` is refreshed on
    /// every successful update; the estimate stays as computed at creation.
    async fn on_update(&mut self, update: DeliveryUpdate) -> Result<(), DeliveryError> {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(location) = update.current_location {
            self.current_location = Some(location);
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}
