//! Text and JSON rendering of search results and reports.

use serde::Serialize;

use uniinv_inventory::Equipment;
use uniinv_reports::{CategoryUtilization, DepartmentAssignments, InventoryLine, MaintenanceSlot};

use crate::config::ReportFormat;

fn render<T: Serialize + ?Sized>(
    format: ReportFormat,
    value: &T,
    text: impl FnOnce() -> Vec<String>,
) -> serde_json::Result<String> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(value),
        ReportFormat::Text => Ok(text().join("\n")),
    }
}

pub fn search_results(format: ReportFormat, results: &[&Equipment]) -> serde_json::Result<String> {
    render(format, results, || {
        if results.is_empty() {
            return vec!["No results found.".to_string()];
        }
        let mut lines = vec!["Results:".to_string()];
        lines.extend(results.iter().map(|e| e.to_string()));
        lines
    })
}

pub fn inventory(format: ReportFormat, rows: &[InventoryLine]) -> serde_json::Result<String> {
    render(format, rows, || {
        let mut lines = vec!["--- INVENTORY REPORT ---".to_string()];
        if rows.is_empty() {
            lines.push("Inventory is empty.".to_string());
        }
        lines.extend(rows.iter().map(|r| {
            format!("{} | {} | {} | {}", r.kind, r.asset_id, r.name, r.status.label())
        }));
        lines
    })
}

pub fn expired_warranties(
    format: ReportFormat,
    items: &[&Equipment],
) -> serde_json::Result<String> {
    render(format, items, || {
        let mut lines = vec!["--- EXPIRED WARRANTIES (warranty months == 0) ---".to_string()];
        if items.is_empty() {
            lines.push("No expired warranties found.".to_string());
        }
        lines.extend(items.iter().map(|e| e.to_string()));
        lines
    })
}

pub fn assignments_by_department(
    format: ReportFormat,
    groups: &[DepartmentAssignments],
) -> serde_json::Result<String> {
    render(format, groups, || {
        let mut lines = vec!["--- ASSIGNMENTS BY DEPARTMENT ---".to_string()];
        if groups.is_empty() {
            lines.push("No staff registered.".to_string());
        }
        for group in groups {
            lines.push(format!("Department: {}", group.department));
            for member in &group.staff {
                lines.push(format!("  Staff: {} ({})", member.name, member.staff_id));
                if member.equipment.is_empty() {
                    lines.push("    (no equipment assigned)".to_string());
                }
                for item in &member.equipment {
                    lines.push(format!(
                        "    - {} | {} | {} | since {}",
                        item.asset_id,
                        item.name.as_deref().unwrap_or("?"),
                        item.category.as_ref().map(|c| c.as_str()).unwrap_or("?"),
                        item.assigned_at.format("%Y-%m-%d %H:%M"),
                    ));
                }
            }
        }
        lines
    })
}

pub fn utilization(
    format: ReportFormat,
    rows: &[CategoryUtilization],
) -> serde_json::Result<String> {
    render(format, rows, || {
        let mut lines = vec!["--- UTILISATION RATE (by category) ---".to_string()];
        lines.extend(rows.iter().map(ToString::to_string));
        lines
    })
}

pub fn maintenance_schedule(
    format: ReportFormat,
    slots: &[MaintenanceSlot],
) -> serde_json::Result<String> {
    render(format, slots, || {
        let mut lines = vec!["--- MAINTENANCE SCHEDULE ---".to_string()];
        if slots.is_empty() {
            lines.push("No maintenance items scheduled.".to_string());
        }
        lines.extend(slots.iter().map(ToString::to_string));
        lines
    })
}
