//! # Resource Actor Framework
//!
//! Generic building blocks for managing stateful resources with the actor
//! model: each resource type gets one actor that owns its store outright and
//! processes requests sequentially from a bounded channel, while cloneable
//! clients provide a typed async API from anywhere in the process.
//!
//! The layers:
//!
//! 1. **Entity** ([`Entity`]) - the resource's data, validation, and update
//!    logic
//! 2. **Runtime** ([`ResourceActor`]) - the sequential message loop owning
//!    the store
//! 3. **Interface** ([`ResourceClient`]) - typed request/response
//!    communication
//!
//! Because every request flows through one task, single-record reads and
//! writes are atomic without any locking. The [`mock`] module provides a
//! drop-in client double for tests.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::Entity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
