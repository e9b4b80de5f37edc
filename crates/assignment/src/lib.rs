//! Assignment engine.
//!
//! Validates and executes the moves of equipment between "available" and
//! "assigned to a staff member", and prices overdue maintenance.

pub mod engine;
pub mod fee;

pub use engine::{assign, return_equipment, validate_assignment};
pub use fee::{calculate_maintenance_fee, daily_rate};
