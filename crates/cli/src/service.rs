//! Application facade: the single entry point the menu talks to.

use chrono::Utc;

use uniinv_assignment::{assign, calculate_maintenance_fee, return_equipment};
use uniinv_core::{DomainError, DomainResult, StaffId};
use uniinv_inventory::{Equipment, InventoryStore, ItemKind, NewEquipment};
use uniinv_reports::ReportView;
use uniinv_staff::{NewStaffMember, StaffDirectory, StaffMember};

/// In-memory inventory plus staff directory, owned by one caller.
///
/// Mutating operations take `&mut self`, so only one transition can be in
/// flight at a time.
#[derive(Debug, Default)]
pub struct InventorySystem {
    inventory: InventoryStore,
    staff: StaffDirectory,
}

impl InventorySystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// A system preloaded with one piece of furniture and one lab instrument.
    pub fn with_demo_data() -> DomainResult<Self> {
        let mut system = Self::new();
        system.add_equipment(NewEquipment {
            asset_id: "F-001".to_string(),
            name: "Office Chair".to_string(),
            brand: "B12".to_string(),
            warranty_months: 0,
            category: "OTHER".to_string(),
            kind: ItemKind::Furniture,
        })?;
        system.add_equipment(NewEquipment {
            asset_id: "L-001".to_string(),
            name: "Microscope".to_string(),
            brand: "Chem Lab".to_string(),
            warranty_months: 0,
            category: "LAB".to_string(),
            kind: ItemKind::LabEquipment,
        })?;
        Ok(system)
    }

    pub fn add_equipment(&mut self, input: NewEquipment) -> DomainResult<&Equipment> {
        let equipment = Equipment::register(input)?;
        self.inventory.add(equipment)
    }

    pub fn register_staff(&mut self, input: NewStaffMember) -> DomainResult<&StaffMember> {
        let member = StaffMember::register(input)?;
        self.staff.register(member)
    }

    /// Check `asset_id` out to `staff_id`.
    pub fn assign(&mut self, staff_id: StaffId, asset_id: &str) -> DomainResult<()> {
        let staff = self
            .staff
            .find_mut(staff_id)
            .ok_or_else(|| DomainError::staff_not_found(staff_id))?;

        let asset_id = asset_id.trim();
        if asset_id.is_empty() {
            return Err(DomainError::validation("asset ID required"));
        }
        let equipment = self
            .inventory
            .find_by_asset_id_mut(asset_id)
            .ok_or_else(|| DomainError::equipment_not_found(asset_id))?;

        assign(Some(staff), Some(equipment), Utc::now())
    }

    /// Take `asset_id` back from `staff_id`.
    pub fn return_item(&mut self, staff_id: StaffId, asset_id: &str) -> DomainResult<()> {
        let staff = self
            .staff
            .find_mut(staff_id)
            .ok_or_else(|| DomainError::staff_not_found(staff_id))?;

        return_equipment(Some(staff), asset_id, &mut self.inventory)
    }

    pub fn search_by_name(&self, keyword: &str) -> Vec<&Equipment> {
        self.inventory.search_by_name(keyword)
    }

    pub fn search_by_category(&self, keyword: &str, available_only: bool) -> Vec<&Equipment> {
        self.inventory.search_by_category(keyword, available_only)
    }

    pub fn search_by_warranty_range(&self, min: i64, max: i64) -> Vec<&Equipment> {
        self.inventory.search_by_warranty_range(min, max)
    }

    /// Overdue fee quote for a registered asset.
    pub fn maintenance_fee(&self, asset_id: &str, days_overdue: i64) -> DomainResult<f64> {
        let asset_id = asset_id.trim();
        if asset_id.is_empty() {
            return Err(DomainError::validation("asset ID required"));
        }
        let equipment = self
            .inventory
            .find_by_asset_id(asset_id)
            .ok_or_else(|| DomainError::equipment_not_found(asset_id))?;
        Ok(calculate_maintenance_fee(Some(equipment), days_overdue))
    }

    pub fn find_staff(&self, staff_id: StaffId) -> Option<&StaffMember> {
        self.staff.find(staff_id)
    }

    pub fn find_equipment(&self, asset_id: &str) -> Option<&Equipment> {
        self.inventory.find_by_asset_id(asset_id)
    }

    /// Read-only snapshot for reporting.
    pub fn reports(&self) -> ReportView<'_> {
        ReportView::new(self.inventory.items(), self.staff.members())
    }
}
