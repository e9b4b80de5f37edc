//! Overdue maintenance fees.

use uniinv_inventory::{CategoryBucket, Equipment};

/// Daily overdue rate for a category bucket.
pub fn daily_rate(bucket: CategoryBucket) -> f64 {
    match bucket {
        CategoryBucket::It => 5.0,
        CategoryBucket::Lab => 12.0,
        CategoryBucket::Av => 8.0,
        CategoryBucket::Other => 3.0,
    }
}

/// Fee owed for keeping `equipment` `days_overdue` days past its due date.
///
/// The rate is picked by exact (trimmed, case-insensitive) category, unlike
/// search which matches substrings. No equipment or no overdue days costs nothing.
pub fn calculate_maintenance_fee(equipment: Option<&Equipment>, days_overdue: i64) -> f64 {
    let Some(equipment) = equipment else {
        return 0.0;
    };
    if days_overdue <= 0 {
        return 0.0;
    }

    daily_rate(equipment.category().bucket()) * days_overdue as f64
}
