use uniinv_core::{DomainError, DomainResult, StaffId};

use crate::member::StaffMember;

/// Registered staff members, in registration order.
#[derive(Debug, Default, Clone)]
pub struct StaffDirectory {
    members: Vec<StaffMember>,
}

impl StaffDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a staff member. A staff id can only be registered once.
    pub fn register(&mut self, member: StaffMember) -> DomainResult<&StaffMember> {
        if self.find(member.staff_id()).is_some() {
            tracing::warn!(staff_id = %member.staff_id(), "duplicate staff id rejected");
            return Err(DomainError::conflict(format!(
                "staff ID already registered: {}",
                member.staff_id()
            )));
        }

        tracing::debug!(staff_id = %member.staff_id(), "staff member registered");
        let index = self.members.len();
        self.members.push(member);
        Ok(&self.members[index])
    }

    pub fn find(&self, staff_id: StaffId) -> Option<&StaffMember> {
        self.members.iter().find(|m| m.staff_id() == staff_id)
    }

    pub fn find_mut(&mut self, staff_id: StaffId) -> Option<&mut StaffMember> {
        self.members.iter_mut().find(|m| m.staff_id() == staff_id)
    }

    /// Snapshot of every member in registration order.
    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
