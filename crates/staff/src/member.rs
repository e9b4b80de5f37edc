use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use uniinv_core::{AssetId, DomainError, DomainResult, Entity, StaffId, ValueObject};

/// Most items a single staff member may hold at once.
pub const MAX_ASSIGNMENTS: usize = 5;

/// Department a staff member belongs to.
///
/// Blank input becomes the `"Unknown"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Department(String);

impl ValueObject for Department {}

impl Department {
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn new(raw: impl AsRef<str>) -> Self {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            Self(Self::UNKNOWN.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Department {
    fn default() -> Self {
        Self(Self::UNKNOWN.to_string())
    }
}

impl core::fmt::Display for Department {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One item currently checked out to a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub asset_id: AssetId,
    pub assigned_at: DateTime<Utc>,
}

/// Input for registering a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewStaffMember {
    pub staff_id: u32,
    pub name: String,
    pub email: String,
    /// Blank means "Unknown".
    pub department: String,
}

/// A registered staff member and the equipment they currently hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffMember {
    staff_id: StaffId,
    name: String,
    email: String,
    department: Department,
    assignments: Vec<Assignment>,
}

impl StaffMember {
    pub fn register(input: NewStaffMember) -> DomainResult<Self> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            staff_id: StaffId::new(input.staff_id),
            name: name.to_string(),
            email: input.email.trim().to_string(),
            department: Department::new(&input.department),
            assignments: Vec::with_capacity(MAX_ASSIGNMENTS),
        })
    }

    pub fn staff_id(&self) -> StaffId {
        self.staff_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn department(&self) -> &Department {
        &self.department
    }

    /// Current assignments, oldest first.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_at_limit(&self) -> bool {
        self.assignments.len() >= MAX_ASSIGNMENTS
    }

    pub fn holds(&self, asset_id: &str) -> bool {
        self.assignments.iter().any(|a| a.asset_id.as_str() == asset_id)
    }

    /// Record an assignment.
    ///
    /// Returns `Ok(false)` when the asset is already held (nothing changes) and
    /// fails once the set is full.
    pub fn add_assignment(
        &mut self,
        asset_id: AssetId,
        assigned_at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        if self.holds(asset_id.as_str()) {
            return Ok(false);
        }
        if self.is_at_limit() {
            return Err(DomainError::limit_exceeded(MAX_ASSIGNMENTS));
        }
        self.assignments.push(Assignment {
            asset_id,
            assigned_at,
        });
        Ok(true)
    }

    /// Drop an assignment, keeping the rest in order.
    pub fn remove_assignment(&mut self, asset_id: &str) -> Option<Assignment> {
        let index = self
            .assignments
            .iter()
            .position(|a| a.asset_id.as_str() == asset_id)?;
        Some(self.assignments.remove(index))
    }
}

impl Entity for StaffMember {
    type Id = StaffId;

    fn id(&self) -> &Self::Id {
        &self.staff_id
    }
}
