//! # Queue Ingestion Listener
//!
//! Consumes order events from the delivery queue and materializes them into
//! delivery records. The listener owns its consumer handle outright and runs
//! as one dedicated task: receive a message, decode it, persist the delivery,
//! acknowledge. One message is in flight at a time; the next receive does not
//! happen until the current message is acknowledged.
//!
//! # Failure Policy
//! A decode or persist failure is logged and the message is acknowledged
//! anyway. The queue must never block on a poison message, so failed events
//! are dropped rather than redelivered (at-most-once ingestion). The trade is
//! deliberate: a malformed event redelivered forever would stall every event
//! behind it.

pub mod envelope;
pub mod queue;

pub use queue::{
    queue, AckReceipt, AckToken, QueueClosed, QueueConsumer, QueueMessage, QueuePublisher,
};

use crate::clients::DeliveryClient;
use crate::config::ListenerConfig;
use crate::delivery_actor::DeliveryError;
use crate::model::Delivery;
use tracing::{debug, error, info};

/// The queue ingestion worker.
///
/// Constructed with its consumer handle, the delivery client it persists
/// through, and its configuration. Runs until the queue closes.
pub struct QueueListener {
    consumer: QueueConsumer,
    client: DeliveryClient,
    config: ListenerConfig,
}

impl QueueListener {
    pub fn new(consumer: QueueConsumer, client: DeliveryClient, config: ListenerConfig) -> Self {
        Self {
            consumer,
            client,
            config,
        }
    }

    /// Runs the consume loop until every publisher is dropped.
    pub async fn run(mut self) {
        info!(
            queue = %self.config.queue_name,
            broker = %self.config.broker_url,
            "Listener started"
        );

        while let Some(message) = self.consumer.recv().await {
            let (body, ack) = message.into_parts();
            debug!(queue = %self.config.queue_name, bytes = body.len(), "Message received");

            match self.process(&body).await {
                Ok(delivery) => {
                    info!(
                        queue = %self.config.queue_name,
                        delivery_id = %delivery.id,
                        order_id = delivery.order_id,
                        "Delivery created"
                    );
                }
                Err(e) => {
                    // Failed events are dropped, not redelivered.
                    error!(
                        queue = %self.config.queue_name,
                        error = %e,
                        "Failed to process order event"
                    );
                }
            }

            ack.ack();
        }

        info!(queue = %self.config.queue_name, "Listener shutdown");
    }

    /// Decode one message body and persist the resulting delivery.
    async fn process(&self, body: &[u8]) -> Result<Delivery, DeliveryError> {
        let params = envelope::decode(body)?.into_delivery_create()?;
        self.client.create_delivery(params).await
    }
}
