//! Reporting and query layer.
//!
//! Read-only aggregation over a snapshot of the inventory store and the staff
//! directory. No business rules live here.

pub mod rows;
pub mod view;

pub use rows::{
    AssignedItem, AvailabilityStatus, CategoryUtilization, DepartmentAssignments, InventoryLine,
    MaintenanceSlot, StaffAssignments,
};
pub use view::ReportView;
