//! System lifecycle and observability.

pub mod delivery_system;
pub mod tracing;

pub use delivery_system::DeliverySystem;
pub use self::tracing::setup_tracing;
