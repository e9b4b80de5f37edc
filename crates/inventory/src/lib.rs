//! Inventory domain module.
//!
//! Equipment records and the insertion-ordered store that owns them,
//! implemented as plain in-memory domain logic (no IO, no terminal).

pub mod item;
pub mod store;

pub use item::{Category, CategoryBucket, Equipment, ItemKind, NewEquipment};
pub use store::InventoryStore;
