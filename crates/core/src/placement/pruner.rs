//! Stale reference pruning for slot assignments that point at categories.
//!
//! Runs when the category set changes. Assignments whose category is gone
//! are deleted and the survivors are compacted to slots `1..=n`, keeping
//! their relative order. Only slot indices of the pruned scope change.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{DbId, Order};

use super::{
    CategoryRef, GatewayError, PlacementError, PlacementGateway, PlacementPatch, PlacementStep,
    Scope,
};

/// A slot index mapped to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotAssignment {
    pub id: DbId,
    pub slot_index: Order,
    pub category_id: DbId,
}

impl SlotAssignment {
    pub fn of<E: CategoryRef>(entity: &E) -> Self {
        Self {
            id: entity.id(),
            slot_index: entity.order(),
            category_id: entity.category_id(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotMove {
    pub id: DbId,
    pub from: Order,
    pub to: Order,
}

/// Mutations needed to bring a set of assignments back in line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrunePlan {
    /// Assignments referencing a missing category.
    pub removed: Vec<DbId>,
    /// Survivors whose slot index changes, ascending by current index.
    pub moves: Vec<SlotMove>,
}

impl PrunePlan {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.moves.is_empty()
    }
}

/// Compute removals and compaction moves for `assignments`.
pub fn plan_prune(
    assignments: &[SlotAssignment],
    valid_category_ids: &HashSet<DbId>,
) -> PrunePlan {
    let (mut kept, dropped): (Vec<&SlotAssignment>, Vec<&SlotAssignment>) = assignments
        .iter()
        .partition(|a| valid_category_ids.contains(&a.category_id));

    kept.sort_by_key(|a| (a.slot_index, a.id));

    let moves = kept
        .iter()
        .zip(1..)
        .filter(|(a, target)| a.slot_index != *target)
        .map(|(a, target)| SlotMove {
            id: a.id,
            from: a.slot_index,
            to: target,
        })
        .collect();

    PrunePlan {
        removed: dropped.iter().map(|a| a.id).collect(),
        moves,
    }
}

/// Load `scope`, then delete dangling assignments and compact the rest.
///
/// Moves are applied in ascending order so each target slot is already
/// vacant when written. Running it twice without a category change makes no
/// further writes.
pub async fn prune<G>(
    gateway: &G,
    scope: &Scope,
    valid_category_ids: &HashSet<DbId>,
) -> Result<PrunePlan, PlacementError>
where
    G: PlacementGateway,
    G::Entity: CategoryRef,
{
    let entities = gateway
        .list(scope)
        .await
        .map_err(PlacementError::io(PlacementStep::LoadScope))?;
    let assignments: Vec<SlotAssignment> = entities.iter().map(SlotAssignment::of).collect();
    let plan = plan_prune(&assignments, valid_category_ids);

    if plan.is_empty() {
        tracing::debug!(scope = %scope, "Nothing to prune");
        return Ok(plan);
    }

    for id in &plan.removed {
        match gateway.delete(*id).await {
            Ok(()) => {}
            Err(GatewayError::NotFound { .. }) => {
                tracing::debug!(scope = %scope, id, "Stale assignment already gone");
            }
            Err(source) => return Err(PlacementError::io(PlacementStep::Prune)(source)),
        }
    }

    for mv in &plan.moves {
        gateway
            .update(mv.id, PlacementPatch::order_only(mv.to))
            .await
            .map_err(PlacementError::io(PlacementStep::Prune))?;
    }

    tracing::info!(
        scope = %scope,
        removed = plan.removed.len(),
        moved = plan.moves.len(),
        "Pruned stale slot assignments"
    );
    Ok(plan)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::memory::{Item, MemoryGateway};

    fn assignment(id: DbId, slot_index: Order, category_id: DbId) -> SlotAssignment {
        SlotAssignment {
            id,
            slot_index,
            category_id,
        }
    }

    fn ids(v: &[DbId]) -> HashSet<DbId> {
        v.iter().copied().collect()
    }

    // -- plan_prune ----------------------------------------------------------

    #[test]
    fn nothing_to_do_when_all_valid_and_contiguous() {
        let a = [assignment(1, 1, 10), assignment(2, 2, 20)];
        assert!(plan_prune(&a, &ids(&[10, 20])).is_empty());
    }

    #[test]
    fn removes_dangling_and_compacts() {
        let a = [
            assignment(1, 1, 10),
            assignment(2, 2, 99),
            assignment(3, 3, 30),
            assignment(4, 5, 99),
            assignment(5, 6, 50),
        ];
        let plan = plan_prune(&a, &ids(&[10, 30, 50]));

        assert_eq!(plan.removed, vec![2, 4]);
        assert_eq!(
            plan.moves,
            vec![
                SlotMove { id: 3, from: 3, to: 2 },
                SlotMove { id: 5, from: 6, to: 3 },
            ]
        );
    }

    #[test]
    fn compacts_sparse_grid_without_removals() {
        let a = [assignment(7, 4, 1), assignment(8, 2, 2)];
        let plan = plan_prune(&a, &ids(&[1, 2]));
        assert!(plan.removed.is_empty());
        assert_eq!(
            plan.moves,
            vec![
                SlotMove { id: 8, from: 2, to: 1 },
                SlotMove { id: 7, from: 4, to: 2 },
            ]
        );
    }

    #[test]
    fn empty_category_set_removes_everything() {
        let a = [assignment(1, 1, 10), assignment(2, 2, 20)];
        let plan = plan_prune(&a, &HashSet::new());
        assert_eq!(plan.removed, vec![1, 2]);
        assert!(plan.moves.is_empty());
    }

    // -- prune ---------------------------------------------------------------

    fn slot(id: DbId, order: Order, category_id: DbId) -> Item {
        Item {
            id,
            order,
            label: format!("category #{category_id}"),
            category_id,
        }
    }

    #[tokio::test]
    async fn pruning_shared_category_removes_both_and_is_idempotent() {
        let scope = Scope::homepage_slots();
        let gw = MemoryGateway::new();
        gw.seed_item(scope, slot(1, 1, 10));
        gw.seed_item(scope, slot(2, 2, 20));
        gw.seed_item(scope, slot(3, 3, 10));
        gw.seed_item(scope, slot(4, 4, 40));

        let valid = ids(&[20, 40]);
        let plan = prune(&gw, &scope, &valid).await.unwrap();
        assert_eq!(plan.removed, vec![1, 3]);
        assert_eq!(
            gw.snapshot(scope),
            vec![
                ("category #20".to_string(), 1),
                ("category #40".to_string(), 2),
            ]
        );

        let writes = gw.write_count();
        let again = prune(&gw, &scope, &valid).await.unwrap();
        assert!(again.is_empty());
        assert_eq!(gw.write_count(), writes);
    }

    #[tokio::test]
    async fn pruning_leaves_other_scopes_alone() {
        let slots = Scope::homepage_slots();
        let heroes = Scope::hero_slides();
        let gw = MemoryGateway::new();
        gw.seed_item(slots, slot(1, 1, 10));
        gw.seed(heroes, 2, 5, "Hero");

        prune(&gw, &slots, &HashSet::new()).await.unwrap();

        assert!(gw.snapshot(slots).is_empty());
        assert_eq!(gw.snapshot(heroes), vec![("Hero".to_string(), 5)]);
    }

    #[tokio::test]
    async fn assignment_deleted_concurrently_does_not_fail_prune() {
        let scope = Scope::homepage_slots();
        let gw = MemoryGateway::new();
        gw.seed_item(scope, slot(1, 1, 10));
        gw.seed_item(scope, slot(2, 2, 20));
        gw.seed_item(scope, slot(3, 3, 30));
        gw.remove_after_next_list(1);

        let plan = prune(&gw, &scope, &ids(&[20, 30])).await.unwrap();

        assert_eq!(plan.removed, vec![1]);
        assert_eq!(
            gw.snapshot(scope),
            vec![
                ("category #20".to_string(), 1),
                ("category #30".to_string(), 2),
            ]
        );
    }

    #[tokio::test]
    async fn load_failure_is_reported() {
        let scope = Scope::homepage_slots();
        let gw = MemoryGateway::new();
        gw.fail_lists_after(0);
        let err = prune(&gw, &scope, &HashSet::new()).await.unwrap_err();
        assert!(matches!(
            err,
            PlacementError::Io {
                step: PlacementStep::LoadScope,
                ..
            }
        ));
    }
}
