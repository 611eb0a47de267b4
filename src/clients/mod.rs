//! Typed client wrappers over the generic resource clients.

pub mod delivery_client;

pub use delivery_client::DeliveryClient;
