//! `uniinv-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory,
//! staff and assignment crates (no IO, no terminal concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AssetId, StaffId};
pub use value_object::ValueObject;
