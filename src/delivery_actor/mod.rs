//! # Delivery Actor
//!
//! Wires the [`Delivery`] entity into the generic [`ResourceActor`]: one task
//! owns every delivery record and serves create, get, list-by-order, and
//! update requests sequentially. Both the HTTP-facing client and the queue
//! listener talk to the same actor, so concurrent ingestion and API traffic
//! serialize on this single store without locks.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DeliveryClient;
use crate::framework::ResourceActor;
use crate::model::{Delivery, DeliveryId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Delivery actor and its client.
pub fn new() -> (ResourceActor<Delivery>, DeliveryClient) {
    let delivery_id_counter = Arc::new(AtomicU64::new(1));
    let next_delivery_id = move || {
        let id = delivery_id_counter.fetch_add(1, Ordering::SeqCst);
        DeliveryId(format!("delivery_{}", id))
    };

    let (actor, generic_client) = ResourceActor::new(32, next_delivery_id);
    let client = DeliveryClient::new(generic_client);

    (actor, client)
}
