//! Assignment and return transitions between staff members and equipment.
//!
//! Each transition writes two places: the `available` flag on the equipment
//! record and the staff member's assignment set. Every check and lookup runs
//! before the first write, so a rejected transition leaves both untouched.

use chrono::{DateTime, Utc};

use uniinv_core::{DomainError, DomainResult};
use uniinv_inventory::{Equipment, InventoryStore};
use uniinv_staff::{MAX_ASSIGNMENTS, StaffMember};

/// Check whether `equipment` may be assigned to `staff`.
///
/// Checks run in order and the first failure wins:
/// 1. staff resolved, else `StaffNotFound`
/// 2. equipment given, else a validation failure
/// 3. equipment available, else `EquipmentUnavailable`
/// 4. staff below the limit, else `AssignmentLimitExceeded`
pub fn validate_assignment(
    staff: Option<&StaffMember>,
    equipment: Option<&Equipment>,
) -> DomainResult<()> {
    let staff = staff.ok_or_else(|| DomainError::StaffNotFound(None))?;
    let equipment = equipment.ok_or_else(|| DomainError::validation("equipment required"))?;
    check_assignable(staff, equipment)
}

fn check_assignable(staff: &StaffMember, equipment: &Equipment) -> DomainResult<()> {
    if !equipment.is_available() {
        tracing::debug!(
            staff_id = %staff.staff_id(),
            asset_id = %equipment.asset_id(),
            "assignment rejected: equipment unavailable"
        );
        return Err(DomainError::unavailable(equipment.asset_id().as_str()));
    }

    if staff.assignment_count() >= MAX_ASSIGNMENTS {
        tracing::debug!(
            staff_id = %staff.staff_id(),
            held = staff.assignment_count(),
            "assignment rejected: limit reached"
        );
        return Err(DomainError::limit_exceeded(MAX_ASSIGNMENTS));
    }

    Ok(())
}

/// Assign `equipment` to `staff`.
///
/// Re-assigning an asset the staff member already holds does not create a
/// second entry.
pub fn assign(
    staff: Option<&mut StaffMember>,
    equipment: Option<&mut Equipment>,
    occurred_at: DateTime<Utc>,
) -> DomainResult<()> {
    let staff = staff.ok_or_else(|| DomainError::StaffNotFound(None))?;
    let equipment = equipment.ok_or_else(|| DomainError::validation("equipment required"))?;
    check_assignable(staff, equipment)?;

    staff.add_assignment(equipment.asset_id().clone(), occurred_at)?;
    equipment.mark_assigned();

    tracing::info!(
        staff_id = %staff.staff_id(),
        asset_id = %equipment.asset_id(),
        "equipment assigned"
    );
    Ok(())
}

/// Take `asset_id` back from `staff` and make it available again.
///
/// The staff member's own assignment entry decides whether the return is
/// legal; the store record with that id is the one flipped back to available.
pub fn return_equipment(
    staff: Option<&mut StaffMember>,
    asset_id: &str,
    inventory: &mut InventoryStore,
) -> DomainResult<()> {
    let staff = staff.ok_or_else(|| DomainError::StaffNotFound(None))?;

    let asset_id = asset_id.trim();
    if asset_id.is_empty() {
        return Err(DomainError::validation("asset ID required"));
    }

    if !staff.holds(asset_id) {
        tracing::debug!(
            staff_id = %staff.staff_id(),
            asset_id,
            "return rejected: not held"
        );
        return Err(DomainError::validation(format!(
            "asset {asset_id} is not assigned to staff member {}",
            staff.staff_id()
        )));
    }

    let equipment = inventory
        .find_by_asset_id_mut(asset_id)
        .ok_or_else(|| DomainError::equipment_not_found(asset_id))?;

    staff.remove_assignment(asset_id);
    equipment.mark_available();

    tracing::info!(staff_id = %staff.staff_id(), asset_id, "equipment returned");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniinv_core::StaffId;
    use uniinv_inventory::{ItemKind, NewEquipment};
    use uniinv_staff::{NewStaffMember, StaffDirectory};

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn equipment(asset_id: &str, category: &str) -> Equipment {
        Equipment::register(NewEquipment {
            asset_id: asset_id.to_string(),
            name: format!("Item {asset_id}"),
            brand: "Acme".to_string(),
            warranty_months: 12,
            category: category.to_string(),
            kind: ItemKind::Equipment,
        })
        .unwrap()
    }

    fn staff(id: u32) -> StaffMember {
        StaffMember::register(NewStaffMember {
            staff_id: id,
            name: format!("Staff {id}"),
            email: format!("staff{id}@uni.edu"),
            department: "Physics".to_string(),
        })
        .unwrap()
    }

    fn store_with(ids: &[&str]) -> InventoryStore {
        let mut store = InventoryStore::new();
        for id in ids {
            store.add(equipment(id, "IT")).unwrap();
        }
        store
    }

    fn held(staff: &StaffMember) -> Vec<&str> {
        staff.assignments().iter().map(|a| a.asset_id.as_str()).collect()
    }

    #[test]
    fn validation_reports_missing_staff_first() {
        let err = validate_assignment(None, None).unwrap_err();
        assert_eq!(err, DomainError::StaffNotFound(None));
    }

    #[test]
    fn validation_requires_equipment() {
        let ana = staff(1);
        let err = validate_assignment(Some(&ana), None).unwrap_err();
        assert_eq!(err, DomainError::validation("equipment required"));
    }

    #[test]
    fn unavailability_is_checked_before_the_limit() {
        let mut ana = staff(1);
        for i in 0..MAX_ASSIGNMENTS {
            let held = equipment(&format!("X-{i}"), "IT");
            ana.add_assignment(held.asset_id().clone(), test_time()).unwrap();
        }
        let mut taken = equipment("IT-1", "IT");
        taken.mark_assigned();

        let err = validate_assignment(Some(&ana), Some(&taken)).unwrap_err();
        assert!(matches!(err, DomainError::EquipmentUnavailable(_)));
    }

    #[test]
    fn assign_marks_equipment_and_records_it_on_staff() {
        let mut ana = staff(1);
        let mut laptop = equipment("IT-1", "IT");

        assign(Some(&mut ana), Some(&mut laptop), test_time()).unwrap();

        assert!(!laptop.is_available());
        assert_eq!(held(&ana), vec!["IT-1"]);
    }

    #[test]
    fn assigning_unavailable_equipment_changes_nothing() {
        let mut ana = staff(1);
        let mut ben = staff(2);
        let mut laptop = equipment("IT-1", "IT");
        assign(Some(&mut ana), Some(&mut laptop), test_time()).unwrap();

        let err = assign(Some(&mut ben), Some(&mut laptop), test_time()).unwrap_err();

        assert_eq!(err, DomainError::unavailable("IT-1"));
        assert!(ben.assignments().is_empty());
        assert_eq!(held(&ana), vec!["IT-1"]);
        assert!(!laptop.is_available());
    }

    #[test]
    fn sixth_assignment_fails_and_keeps_existing_five() {
        let mut ana = staff(1);
        let mut items: Vec<Equipment> = (0..6)
            .map(|i| equipment(&format!("IT-{i}"), "IT"))
            .collect();

        for item in items.iter_mut().take(MAX_ASSIGNMENTS) {
            assign(Some(&mut ana), Some(item), test_time()).unwrap();
        }
        let err = assign(Some(&mut ana), Some(&mut items[5]), test_time()).unwrap_err();

        assert_eq!(err, DomainError::limit_exceeded(MAX_ASSIGNMENTS));
        assert_eq!(held(&ana), vec!["IT-0", "IT-1", "IT-2", "IT-3", "IT-4"]);
        assert!(items[5].is_available());
    }

    #[test]
    fn return_restores_availability_without_gaps() {
        let mut store = store_with(&["A", "B", "C"]);
        let mut ana = staff(1);
        for id in ["A", "B", "C"] {
            assign(Some(&mut ana), store.find_by_asset_id_mut(id), test_time()).unwrap();
        }

        return_equipment(Some(&mut ana), "B", &mut store).unwrap();

        assert_eq!(held(&ana), vec!["A", "C"]);
        assert!(store.find_by_asset_id("B").unwrap().is_available());
        assert!(!store.find_by_asset_id("A").unwrap().is_available());
    }

    #[test]
    fn return_requires_staff() {
        let mut store = store_with(&["A"]);
        let err = return_equipment(None, "A", &mut store).unwrap_err();
        assert!(matches!(err, DomainError::StaffNotFound(None)));
    }

    #[test]
    fn return_requires_asset_id() {
        let mut store = store_with(&["A"]);
        let mut ana = staff(1);
        let err = return_equipment(Some(&mut ana), "  ", &mut store).unwrap_err();
        assert_eq!(err, DomainError::validation("asset ID required"));
    }

    #[test]
    fn returning_an_asset_held_by_someone_else_changes_nothing() {
        let mut store = store_with(&["A"]);
        let mut ana = staff(1);
        let mut ben = staff(2);
        assign(Some(&mut ana), store.find_by_asset_id_mut("A"), test_time()).unwrap();

        let err = return_equipment(Some(&mut ben), "A", &mut store).unwrap_err();

        match err {
            DomainError::Validation(msg) if msg.contains("not assigned") => {}
            other => panic!("Expected not-assigned validation error, got {other:?}"),
        }
        assert_eq!(held(&ana), vec!["A"]);
        assert!(!store.find_by_asset_id("A").unwrap().is_available());
    }

    #[test]
    fn return_fails_cleanly_when_store_lost_the_record() {
        let mut store = InventoryStore::new();
        let mut ana = staff(1);
        ana.add_assignment(equipment("GHOST", "IT").asset_id().clone(), test_time())
            .unwrap();

        let err = return_equipment(Some(&mut ana), "GHOST", &mut store).unwrap_err();

        assert_eq!(err, DomainError::equipment_not_found("GHOST"));
        assert_eq!(held(&ana), vec!["GHOST"]);
    }

    #[test]
    fn assign_then_return_round_trip() {
        let mut store = store_with(&["L-001"]);
        let mut directory = StaffDirectory::new();
        directory.register(staff(1)).unwrap();
        let id = StaffId::new(1);

        assign(directory.find_mut(id), store.find_by_asset_id_mut("L-001"), test_time()).unwrap();
        return_equipment(directory.find_mut(id), "L-001", &mut store).unwrap();

        assert!(store.find_by_asset_id("L-001").unwrap().is_available());
        assert!(directory.find(id).unwrap().assignments().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const ITEMS: usize = 8;
        const STAFF: u32 = 3;

        #[derive(Debug, Clone)]
        enum Op {
            Assign(u32, usize),
            Return(u32, usize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (1..=STAFF, 0..ITEMS).prop_map(|(s, i)| Op::Assign(s, i)),
                (1..=STAFF, 0..ITEMS).prop_map(|(s, i)| Op::Return(s, i)),
            ]
        }

        fn asset_name(i: usize) -> String {
            format!("A-{i}")
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: after any sequence of assign/return calls, equipment is
            /// unavailable exactly when one staff member holds it, and nobody
            /// holds more than the limit.
            #[test]
            fn availability_agrees_with_assignment_sets(ops in prop::collection::vec(op(), 0..60)) {
                let mut store = InventoryStore::new();
                for i in 0..ITEMS {
                    store.add(equipment(&asset_name(i), "IT")).unwrap();
                }
                let mut directory = StaffDirectory::new();
                for s in 1..=STAFF {
                    directory.register(staff(s)).unwrap();
                }

                for op in ops {
                    // Rejections are expected; only the invariant matters here.
                    let _ = match op {
                        Op::Assign(s, i) => assign(
                            directory.find_mut(StaffId::new(s)),
                            store.find_by_asset_id_mut(&asset_name(i)),
                            test_time(),
                        ),
                        Op::Return(s, i) => return_equipment(
                            directory.find_mut(StaffId::new(s)),
                            &asset_name(i),
                            &mut store,
                        ),
                    };

                    for member in directory.members() {
                        prop_assert!(member.assignment_count() <= MAX_ASSIGNMENTS);
                    }
                    for item in store.items() {
                        let holders = directory
                            .members()
                            .iter()
                            .filter(|m| m.holds(item.asset_id().as_str()))
                            .count();
                        if item.is_available() {
                            prop_assert_eq!(holders, 0);
                        } else {
                            prop_assert_eq!(holders, 1);
                        }
                    }
                }
            }
        }
    }
}
