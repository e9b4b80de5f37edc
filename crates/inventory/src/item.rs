use serde::{Deserialize, Serialize};

use uniinv_core::{AssetId, DomainError, DomainResult, Entity, ValueObject};

/// What sort of inventory item a record describes.
///
/// Every kind shares the same record shape; the tag only drives display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Equipment,
    Furniture,
    LabEquipment,
}

impl ItemKind {
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Equipment => "Equipment",
            ItemKind::Furniture => "Furniture",
            ItemKind::LabEquipment => "LabEquipment",
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// The well-known category buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryBucket {
    It,
    Lab,
    Av,
    Other,
}

impl CategoryBucket {
    /// All buckets in reporting order.
    pub const ALL: [CategoryBucket; 4] = [
        CategoryBucket::It,
        CategoryBucket::Lab,
        CategoryBucket::Av,
        CategoryBucket::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryBucket::It => "IT",
            CategoryBucket::Lab => "LAB",
            CategoryBucket::Av => "AV",
            CategoryBucket::Other => "OTHER",
        }
    }
}

impl core::fmt::Display for CategoryBucket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text equipment category (e.g. "IT", "lab", "Chem Lab").
///
/// Stored trimmed. Blank is allowed and lands in the `OTHER` bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl ValueObject for Category {}

impl Category {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-insensitive bucket match.
    pub fn bucket(&self) -> CategoryBucket {
        match self.0.to_ascii_uppercase().as_str() {
            "IT" => CategoryBucket::It,
            "LAB" => CategoryBucket::Lab,
            "AV" => CategoryBucket::Av,
            _ => CategoryBucket::Other,
        }
    }

    /// Case-insensitive substring match against an already-lowercased needle.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(needle)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input for registering a new piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewEquipment {
    pub asset_id: String,
    pub name: String,
    pub brand: String,
    /// 0 means the warranty has expired.
    pub warranty_months: u32,
    pub category: String,
    pub kind: ItemKind,
}

/// An inventory item that can be assigned to staff.
///
/// Equality and hashing look at the asset id only.
#[derive(Debug, Clone, Serialize)]
pub struct Equipment {
    asset_id: AssetId,
    kind: ItemKind,
    name: String,
    brand: String,
    warranty_months: u32,
    category: Category,
    available: bool,
}

impl Equipment {
    /// Build a new, available record. Asset id and name are required.
    pub fn register(input: NewEquipment) -> DomainResult<Self> {
        let asset_id = AssetId::parse(&input.asset_id)?;
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            asset_id,
            kind: input.kind,
            name: name.to_string(),
            brand: input.brand.trim().to_string(),
            warranty_months: input.warranty_months,
            category: Category::new(&input.category),
            available: true,
        })
    }

    pub fn asset_id(&self) -> &AssetId {
        &self.asset_id
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }

    pub fn warranty_expired(&self) -> bool {
        self.warranty_months == 0
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Flip to assigned. Only the assignment engine should call this, and only
    /// after it has validated the whole transition.
    pub fn mark_assigned(&mut self) {
        self.available = false;
    }

    /// Flip back to available. Same caveat as [`Equipment::mark_assigned`].
    pub fn mark_available(&mut self) {
        self.available = true;
    }
}

impl Entity for Equipment {
    type Id = AssetId;

    fn id(&self) -> &Self::Id {
        &self.asset_id
    }
}

impl PartialEq for Equipment {
    fn eq(&self, other: &Self) -> bool {
        self.asset_id == other.asset_id
    }
}

impl Eq for Equipment {}

impl core::hash::Hash for Equipment {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.asset_id.hash(state);
    }
}

impl core::fmt::Display for Equipment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {} | {} | brand={} | category={} | warranty={}m | {}",
            self.kind,
            self.asset_id,
            self.name,
            self.brand,
            self.category,
            self.warranty_months,
            if self.available { "available" } else { "assigned" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn microscope() -> NewEquipment {
        NewEquipment {
            asset_id: "L-001".to_string(),
            name: "Microscope".to_string(),
            brand: "Chem Lab".to_string(),
            warranty_months: 0,
            category: "LAB".to_string(),
            kind: ItemKind::LabEquipment,
        }
    }

    #[test]
    fn register_creates_available_equipment() {
        let eq = Equipment::register(microscope()).unwrap();
        assert_eq!(eq.asset_id().as_str(), "L-001");
        assert_eq!(eq.id(), eq.asset_id());
        assert!(eq.is_available());
        assert!(eq.warranty_expired());
        assert_eq!(eq.kind().label(), "LabEquipment");
    }

    #[test]
    fn register_rejects_blank_name() {
        let input = NewEquipment {
            name: "  ".to_string(),
            ..microscope()
        };
        let err = Equipment::register(input).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("name") => {}
            _ => panic!("Expected validation error for blank name"),
        }
    }

    #[test]
    fn register_rejects_blank_asset_id() {
        let input = NewEquipment {
            asset_id: String::new(),
            ..microscope()
        };
        assert!(matches!(
            Equipment::register(input),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn equality_is_by_asset_id_only() {
        let a = Equipment::register(microscope()).unwrap();
        let mut b = Equipment::register(NewEquipment {
            name: "Other name".to_string(),
            category: "IT".to_string(),
            ..microscope()
        })
        .unwrap();
        b.mark_assigned();
        assert_eq!(a, b);
    }

    #[test]
    fn category_bucket_is_exact_and_case_insensitive() {
        assert_eq!(Category::new(" lab ").bucket(), CategoryBucket::Lab);
        assert_eq!(Category::new("It").bucket(), CategoryBucket::It);
        assert_eq!(Category::new("av").bucket(), CategoryBucket::Av);
        assert_eq!(Category::new("Chem Lab").bucket(), CategoryBucket::Other);
        assert_eq!(Category::new("").bucket(), CategoryBucket::Other);
    }

    #[test]
    fn category_substring_match_is_case_insensitive() {
        let cat = Category::new("Chem LAB");
        assert!(cat.contains_lowercase("lab"));
        assert!(cat.contains_lowercase(""));
        assert!(!cat.contains_lowercase("av"));
    }

    #[test]
    fn serializes_with_flat_fields() {
        let eq = Equipment::register(microscope()).unwrap();
        let json = serde_json::to_value(&eq).unwrap();
        assert_eq!(json["asset_id"], "L-001");
        assert_eq!(json["category"], "LAB");
        assert_eq!(json["kind"], "lab_equipment");
        assert_eq!(json["available"], true);
    }
}
