use uniinv_core::{DomainError, DomainResult};

use crate::item::Equipment;

/// Authoritative, insertion-ordered collection of equipment.
///
/// Searches are linear scans in store order; none of them fail, an empty
/// result is a valid answer.
#[derive(Debug, Default, Clone)]
pub struct InventoryStore {
    items: Vec<Equipment>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicate asset ids are rejected and leave the store untouched.
    pub fn add(&mut self, equipment: Equipment) -> DomainResult<&Equipment> {
        if self.find_by_asset_id(equipment.asset_id().as_str()).is_some() {
            tracing::warn!(asset_id = %equipment.asset_id(), "duplicate asset id rejected");
            return Err(DomainError::conflict(format!(
                "asset ID already registered: {}",
                equipment.asset_id()
            )));
        }

        tracing::debug!(asset_id = %equipment.asset_id(), "equipment added");
        let index = self.items.len();
        self.items.push(equipment);
        Ok(&self.items[index])
    }

    /// Exact match on the asset id (leading/trailing whitespace ignored).
    pub fn find_by_asset_id(&self, asset_id: &str) -> Option<&Equipment> {
        let asset_id = asset_id.trim();
        self.items.iter().find(|e| e.asset_id().as_str() == asset_id)
    }

    pub fn find_by_asset_id_mut(&mut self, asset_id: &str) -> Option<&mut Equipment> {
        let asset_id = asset_id.trim();
        self.items
            .iter_mut()
            .find(|e| e.asset_id().as_str() == asset_id)
    }

    /// Case-insensitive substring match on the name; a blank keyword matches everything.
    pub fn search_by_name(&self, keyword: &str) -> Vec<&Equipment> {
        let needle = keyword.trim().to_lowercase();
        self.items
            .iter()
            .filter(|e| e.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Case-insensitive substring match on the category, optionally restricted
    /// to items that are currently available.
    pub fn search_by_category(&self, keyword: &str, available_only: bool) -> Vec<&Equipment> {
        let needle = keyword.trim().to_lowercase();
        self.items
            .iter()
            .filter(|e| e.category().contains_lowercase(&needle))
            .filter(|e| !available_only || e.is_available())
            .collect()
    }

    /// Inclusive warranty range. `min > max` simply matches nothing.
    pub fn search_by_warranty_range(&self, min: i64, max: i64) -> Vec<&Equipment> {
        self.items
            .iter()
            .filter(|e| {
                let months = i64::from(e.warranty_months());
                months >= min && months <= max
            })
            .collect()
    }

    /// Snapshot of every record in store order.
    pub fn items(&self) -> &[Equipment] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
