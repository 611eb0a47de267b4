//! # Bounded Message Queue
//!
//! An in-process stand-in for the broker channel the listener consumes from.
//! Messages travel over a bounded mpsc channel; each one carries an
//! [`AckToken`] whose paired [`AckReceipt`] lets the producer await the
//! acknowledgement.
//!
//! # Acknowledgement Discipline
//! `AckToken::ack` consumes the token, so a message can be acknowledged at
//! most once. The receipt resolves when the token is acked and reports
//! failure if the token is dropped unacked, which makes "acked exactly once
//! per message" observable from tests.
//!
//! # Shutdown
//! Dropping every publisher closes the channel; the consumer's `recv`
//! returns `None` and the listener's loop ends. No separate stop signal is
//! needed.

use tokio::sync::{mpsc, oneshot};

/// A raw message taken off the queue: an opaque body plus the token the
/// consumer must spend to acknowledge it.
#[derive(Debug)]
pub struct QueueMessage {
    body: Vec<u8>,
    ack: AckToken,
}

impl QueueMessage {
    /// Splits the message into its body and acknowledgement token.
    pub fn into_parts(self) -> (Vec<u8>, AckToken) {
        (self.body, self.ack)
    }
}

/// Single-use acknowledgement token. Consuming it is the only way to ack.
#[derive(Debug)]
pub struct AckToken {
    tx: oneshot::Sender<()>,
}

impl AckToken {
    /// Acknowledges the message. The publisher's [`AckReceipt`] resolves.
    pub fn ack(self) {
        let _ = self.tx.send(());
    }
}

/// The producer side's handle on one message's acknowledgement.
#[derive(Debug)]
pub struct AckReceipt {
    rx: oneshot::Receiver<()>,
}

impl AckReceipt {
    /// Waits for the message to be acknowledged. Returns `false` if the
    /// consumer dropped the token without acking (e.g. the queue shut down
    /// mid-flight).
    pub async fn acknowledged(self) -> bool {
        self.rx.await.is_ok()
    }
}

/// Error returned when publishing to a queue whose consumer is gone.
#[derive(Debug, thiserror::Error)]
#[error("Queue closed")]
pub struct QueueClosed;

/// Sender half of the queue. Cheap to clone; dropping every clone closes the
/// queue.
#[derive(Clone)]
pub struct QueuePublisher {
    sender: mpsc::Sender<QueueMessage>,
}

impl QueuePublisher {
    /// Publishes a raw message body, waiting for channel capacity if the
    /// queue is full. Returns the receipt for this message's
    /// acknowledgement.
    pub async fn publish(&self, body: impl Into<Vec<u8>>) -> Result<AckReceipt, QueueClosed> {
        let (tx, rx) = oneshot::channel();
        let message = QueueMessage {
            body: body.into(),
            ack: AckToken { tx },
        };
        self.sender.send(message).await.map_err(|_| QueueClosed)?;
        Ok(AckReceipt { rx })
    }
}

/// Receiver half of the queue. Owned exclusively by the listener.
pub struct QueueConsumer {
    receiver: mpsc::Receiver<QueueMessage>,
}

impl QueueConsumer {
    /// Receives the next message, or `None` once every publisher is dropped
    /// and the channel drains.
    pub async fn recv(&mut self) -> Option<QueueMessage> {
        self.receiver.recv().await
    }
}

/// Creates a bounded queue with the given capacity.
pub fn queue(capacity: usize) -> (QueuePublisher, QueueConsumer) {
    let (sender, receiver) = mpsc::channel(capacity);
    (QueuePublisher { sender }, QueueConsumer { receiver })
}
