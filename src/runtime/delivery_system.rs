//! # Delivery System Orchestration
//!
//! Starting the delivery tracker means wiring three pieces together in the
//! right order: the delivery actor (the store), the message queue, and the
//! listener that bridges them. [`DeliverySystem`] is the conductor that
//! creates all of them, spawns their tasks, and coordinates shutdown.

use crate::clients::DeliveryClient;
use crate::config::ListenerConfig;
use crate::delivery_actor;
use crate::listener::{queue, QueueListener, QueuePublisher};
use tracing::{error, info};

/// The running delivery tracking system.
///
/// Holds the client for direct lifecycle operations, the publisher for
/// feeding order events into the queue, and the task handles needed for a
/// clean shutdown.
pub struct DeliverySystem {
    /// Client for creating, reading, and updating deliveries directly.
    pub delivery_client: DeliveryClient,

    /// Producer handle for the order event queue.
    pub publisher: QueuePublisher,

    /// Task handles for the actor and listener, joined on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DeliverySystem {
    /// Creates and starts the whole system.
    ///
    /// The delivery actor starts first so the listener has a live client
    /// from its first message onward.
    pub fn new(config: ListenerConfig) -> Self {
        let (actor, delivery_client) = delivery_actor::new();
        let actor_handle = tokio::spawn(actor.run());

        let (publisher, consumer) = queue(config.capacity);
        let listener = QueueListener::new(consumer, delivery_client.clone(), config);
        let listener_handle = tokio::spawn(listener.run());

        Self {
            delivery_client,
            publisher,
            handles: vec![actor_handle, listener_handle],
        }
    }

    /// Gracefully shuts the system down.
    ///
    /// Dropping the publisher closes the queue, which ends the listener; the
    /// listener's client clone drops with it, and once our own client is
    /// dropped too the actor's channel closes and its loop exits. Joining
    /// the handles then waits for both tasks to finish draining.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down delivery system");

        drop(self.publisher);
        drop(self.delivery_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed during shutdown: {:?}", e);
                return Err(format!("Task failed during shutdown: {:?}", e));
            }
        }

        info!("Delivery system shutdown complete");
        Ok(())
    }
}
