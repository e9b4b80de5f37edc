use uniinv_inventory::{CategoryBucket, Equipment};
use uniinv_staff::StaffMember;

use crate::rows::{
    AssignedItem, AvailabilityStatus, CategoryUtilization, DepartmentAssignments, InventoryLine,
    MaintenanceSlot, StaffAssignments,
};

/// Read-only snapshot of the inventory and the staff directory.
///
/// Reports only iterate and aggregate; nothing here can mutate an entity.
#[derive(Debug, Clone, Copy)]
pub struct ReportView<'a> {
    items: &'a [Equipment],
    staff: &'a [StaffMember],
}

impl<'a> ReportView<'a> {
    pub fn new(items: &'a [Equipment], staff: &'a [StaffMember]) -> Self {
        Self { items, staff }
    }

    /// Every item in store order with its availability.
    pub fn inventory_listing(&self) -> Vec<InventoryLine> {
        self.items
            .iter()
            .map(|e| InventoryLine {
                kind: e.kind(),
                asset_id: e.asset_id().clone(),
                name: e.name().to_string(),
                status: AvailabilityStatus::from_available(e.is_available()),
            })
            .collect()
    }

    /// Items whose warranty is down to zero months.
    pub fn expired_warranties(&self) -> Vec<&'a Equipment> {
        self.items.iter().filter(|e| e.warranty_expired()).collect()
    }

    /// Staff grouped by department (first-seen order) with what each holds.
    pub fn assignments_by_department(&self) -> Vec<DepartmentAssignments> {
        let mut groups: Vec<DepartmentAssignments> = Vec::new();

        for member in self.staff {
            let entry = StaffAssignments {
                staff_id: member.staff_id(),
                name: member.name().to_string(),
                equipment: member
                    .assignments()
                    .iter()
                    .map(|a| {
                        let record = self.find(a.asset_id.as_str());
                        AssignedItem {
                            asset_id: a.asset_id.clone(),
                            name: record.map(|e| e.name().to_string()),
                            category: record.map(|e| e.category().clone()),
                            assigned_at: a.assigned_at,
                        }
                    })
                    .collect(),
            };

            match groups.iter_mut().find(|g| &g.department == member.department()) {
                Some(group) => group.staff.push(entry),
                None => groups.push(DepartmentAssignments {
                    department: member.department().clone(),
                    staff: vec![entry],
                }),
            }
        }

        groups
    }

    /// Assigned/total per category bucket, in `IT, LAB, AV, OTHER` order.
    pub fn utilization_by_category(&self) -> Vec<CategoryUtilization> {
        CategoryBucket::ALL
            .iter()
            .map(|&bucket| {
                let (assigned, total) = self
                    .items
                    .iter()
                    .filter(|e| e.category().bucket() == bucket)
                    .fold((0, 0), |(assigned, total), e| {
                        (assigned + usize::from(!e.is_available()), total + 1)
                    });
                CategoryUtilization {
                    bucket,
                    assigned,
                    total,
                }
            })
            .collect()
    }

    /// Items due for maintenance, numbered by day in store order: expired
    /// warranties and anything in the `LAB` category.
    pub fn maintenance_schedule(&self) -> Vec<MaintenanceSlot> {
        self.items
            .iter()
            .filter(|e| e.warranty_expired() || e.category().bucket() == CategoryBucket::Lab)
            .enumerate()
            .map(|(i, e)| MaintenanceSlot {
                day: i + 1,
                asset_id: e.asset_id().clone(),
                name: e.name().to_string(),
                category: e.category().clone(),
                warranty_months: e.warranty_months(),
            })
            .collect()
    }

    fn find(&self, asset_id: &str) -> Option<&'a Equipment> {
        self.items.iter().find(|e| e.asset_id().as_str() == asset_id)
    }
}
