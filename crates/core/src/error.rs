//! Domain error model.

use thiserror::Error;

use crate::id::StaffId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: callers report the message and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No registered staff member could be resolved.
    #[error("staff member not found{}", staff_suffix(.0))]
    StaffNotFound(Option<StaffId>),

    /// No equipment with the given asset id exists in the inventory.
    #[error("equipment not found: {0}")]
    EquipmentNotFound(String),

    /// The equipment is currently assigned to someone.
    #[error("equipment is not available: {0}")]
    EquipmentUnavailable(String),

    /// The staff member already holds the maximum number of items.
    #[error("assignment limit exceeded: at most {limit} items per staff member")]
    AssignmentLimitExceeded { limit: usize },

    /// A required value was blank or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A registration clashed with an existing record.
    #[error("conflict: {0}")]
    Conflict(String),
}

fn staff_suffix(id: &Option<StaffId>) -> String {
    match id {
        Some(id) => format!(": {id}"),
        None => String::new(),
    }
}

impl DomainError {
    pub fn staff_not_found(id: StaffId) -> Self {
        Self::StaffNotFound(Some(id))
    }

    pub fn equipment_not_found(asset_id: impl Into<String>) -> Self {
        Self::EquipmentNotFound(asset_id.into())
    }

    pub fn unavailable(asset_id: impl Into<String>) -> Self {
        Self::EquipmentUnavailable(asset_id.into())
    }

    pub fn limit_exceeded(limit: usize) -> Self {
        Self::AssignmentLimitExceeded { limit }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
