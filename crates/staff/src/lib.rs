//! Staff domain module.
//!
//! Staff members, their bounded set of current assignments, and the directory
//! they are registered in.

pub mod directory;
pub mod member;

pub use directory::StaffDirectory;
pub use member::{Assignment, Department, MAX_ASSIGNMENTS, NewStaffMember, StaffMember};
