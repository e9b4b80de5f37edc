//! Read models produced by the reports.

use chrono::{DateTime, Utc};
use serde::Serialize;

use uniinv_core::{AssetId, StaffId};
use uniinv_inventory::{Category, CategoryBucket, ItemKind};
use uniinv_staff::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AvailabilityStatus {
    Available,
    Assigned,
}

impl AvailabilityStatus {
    pub fn from_available(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Assigned
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Assigned => "ASSIGNED",
        }
    }
}

/// One line of the full inventory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryLine {
    pub kind: ItemKind,
    pub asset_id: AssetId,
    pub name: String,
    pub status: AvailabilityStatus,
}

/// Equipment held by one staff member, as shown in the department report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignedItem {
    pub asset_id: AssetId,
    /// `None` when the store has no record for the asset.
    pub name: Option<String>,
    pub category: Option<Category>,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffAssignments {
    pub staff_id: StaffId,
    pub name: String,
    pub equipment: Vec<AssignedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentAssignments {
    pub department: Department,
    pub staff: Vec<StaffAssignments>,
}

/// Assigned versus total equipment in one category bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryUtilization {
    pub bucket: CategoryBucket,
    pub assigned: usize,
    pub total: usize,
}

impl CategoryUtilization {
    /// Percentage assigned, or `None` when the bucket is empty.
    pub fn rate(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.assigned as f64 * 100.0 / self.total as f64)
    }
}

impl core::fmt::Display for CategoryUtilization {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.rate() {
            None => write!(f, "{}: No items", self.bucket),
            Some(rate) => write!(
                f,
                "{}: {}/{} assigned ({rate:.2}%)",
                self.bucket, self.assigned, self.total
            ),
        }
    }
}

/// A day in the maintenance schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceSlot {
    /// 1-based.
    pub day: usize,
    pub asset_id: AssetId,
    pub name: String,
    pub category: Category,
    pub warranty_months: u32,
}

impl core::fmt::Display for MaintenanceSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Day {}: {} | {} | category={} | warranty={}",
            self.day, self.asset_id, self.name, self.category, self.warranty_months
        )
    }
}
