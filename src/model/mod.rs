//! Pure domain data for the delivery tracker.
//!
//! The types here carry no actor or channel machinery; the entity wiring
//! lives in [`crate::delivery_actor`].

pub mod delivery;
pub mod estimate;

pub use delivery::{
    Delivery, DeliveryCreate, DeliveryId, DeliveryMethod, DeliveryStatus, DeliveryUpdate,
};
pub use estimate::{delivery_offset, estimated_delivery_time};
