//! `uniinv-cli`: the interactive shell around the inventory core.
//!
//! Menu rendering and prompts only; every rule lives in the domain crates.

pub mod config;
pub mod menu;
pub mod render;
pub mod service;

pub use config::{AppConfig, ReportFormat};
pub use menu::Menu;
pub use service::InventorySystem;
