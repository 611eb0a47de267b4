//! # Delivery Tracker
//!
//! Tracks delivery records for orders: creation, status and location
//! updates, and lookup by delivery id or by order. A queue listener ingests
//! order events from the delivery queue and materializes them into records;
//! a typed client exposes the same lifecycle operations to direct callers.
//!
//! ## Core Components
//!
//! - **[framework]**: generic resource-actor machinery (store-owning task,
//!   typed client, request messages, mock client for tests).
//! - **[model]**: pure domain data ([`Delivery`](model::Delivery), its
//!   enums and DTOs) and the estimated-time calculator.
//! - **[delivery_actor]**: the [`Entity`](framework::Entity) implementation
//!   carrying the lifecycle invariants, plus the actor factory.
//! - **[clients]**: [`DeliveryClient`](clients::DeliveryClient), the narrow
//!   interface outer layers call into.
//! - **[listener]**: the bounded queue abstraction, the order event wire
//!   schema, and the ingestion worker.
//! - **[runtime]**: [`DeliverySystem`](runtime::DeliverySystem) orchestration
//!   and tracing setup.

pub mod clients;
pub mod config;
pub mod delivery_actor;
pub mod framework;
pub mod listener;
pub mod model;
pub mod runtime;
