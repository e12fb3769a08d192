//! Conflict resolution: placing an entity and displacing whoever held its
//! order.
//!
//! The displacement sequence is two independent writes with no transaction
//! around them. If the second write fails, the returned
//! [`PlacementError::Io`] carries a [`ResumePoint`] and
//! [`Placer::resume_displacement`] finishes the job from persisted state.

use serde::Serialize;
use validator::Validate;

use crate::types::{DbId, Order};

use super::assigner::{assign_order, first_free_order, next_order};
use super::detector::{find_conflict, ConflictDescriptor};
use super::scope::{ScopeKind, MENU_LINK_LIMIT};
use super::{
    PlacementError, PlacementGateway, PlacementPatch, PlacementStep, ResumePoint, Scope, Slotted,
};

/// An operator request to create or update an entity at a position.
#[derive(Debug, Clone)]
pub struct PlacementRequest<D> {
    /// Set when updating an existing entity.
    pub id: Option<DbId>,
    /// Explicit order chosen by the operator. `None` means auto-assign on
    /// create and keep the current order on update.
    pub order: Option<Order>,
    pub draft: D,
}

impl<D> PlacementRequest<D> {
    pub fn create(order: Option<Order>, draft: D) -> Self {
        Self {
            id: None,
            order,
            draft,
        }
    }

    pub fn update(id: DbId, order: Option<Order>, draft: D) -> Self {
        Self {
            id: Some(id),
            order,
            draft,
        }
    }
}

/// A previous occupant that was moved out of the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Displacement {
    pub occupant_id: DbId,
    pub from_order: Order,
    pub to_order: Order,
}

/// Result of [`Placer::place`].
#[derive(Debug, Clone)]
pub enum PlaceOutcome<E> {
    /// The entity was written. `displaced` is set when an occupant moved.
    Placed {
        entity: E,
        displaced: Option<Displacement>,
    },
    /// The desired order is taken and the operator has not confirmed the
    /// displacement. Nothing was written.
    Conflict(ConflictDescriptor),
}

/// Placement operations over one gateway.
pub struct Placer<'g, G> {
    gateway: &'g G,
}

impl<'g, G: PlacementGateway> Placer<'g, G> {
    pub fn new(gateway: &'g G) -> Self {
        Self { gateway }
    }

    /// Entities in `scope` sorted by order, then id.
    pub async fn list(&self, scope: &Scope) -> Result<Vec<G::Entity>, PlacementError> {
        let mut entities = self.load(scope, PlacementStep::LoadScope).await?;
        entities.sort_by_key(|e| (e.order(), e.id()));
        Ok(entities)
    }

    /// `max(order) + 1` over the persisted scope, or `1` when empty.
    pub async fn next_order(&self, scope: &Scope) -> Result<Order, PlacementError> {
        let existing = self.load(scope, PlacementStep::LoadScope).await?;
        Ok(next_order(&existing))
    }

    /// Describe the entity occupying `desired_order`, ignoring `exclude_id`.
    pub async fn find_conflict(
        &self,
        scope: &Scope,
        desired_order: Order,
        exclude_id: Option<DbId>,
    ) -> Result<Option<ConflictDescriptor>, PlacementError> {
        let existing = self.load(scope, PlacementStep::LoadScope).await?;
        Ok(find_conflict(&existing, desired_order, exclude_id)
            .map(|occupant| ConflictDescriptor::new(*scope, desired_order, occupant)))
    }

    /// Create or update an entity at its desired order.
    ///
    /// Validation and bounds are checked before any write. A conflicting
    /// explicit order returns [`PlaceOutcome::Conflict`] unless `confirmed`,
    /// in which case the incoming entity is written first and the occupant
    /// is then moved to the smallest free order.
    pub async fn place(
        &self,
        scope: &Scope,
        request: &PlacementRequest<G::Draft>,
        confirmed: bool,
    ) -> Result<PlaceOutcome<G::Entity>, PlacementError> {
        request.draft.validate()?;
        if let Some(order) = request.order {
            check_order(scope, order)?;
        }

        let existing = self.load(scope, PlacementStep::LoadScope).await?;

        let current_order = match request.id {
            Some(id) => Some(
                existing
                    .iter()
                    .find(|e| e.id() == id)
                    .map(Slotted::order)
                    .ok_or(PlacementError::NotFound { scope: *scope, id })?,
            ),
            None => {
                check_capacity(scope, existing.len())?;
                None
            }
        };

        let desired = match (request.order, current_order) {
            (Some(order), _) => order,
            (None, Some(order)) => order,
            (None, None) => assign_order(scope, &existing),
        };

        // Auto-assigned and unchanged orders cannot collide.
        if request.order.is_some() {
            if let Some(occupant) = find_conflict(&existing, desired, request.id) {
                let descriptor = ConflictDescriptor::new(*scope, desired, occupant);
                if !confirmed {
                    tracing::debug!(
                        scope = %scope,
                        order = desired,
                        occupant_id = descriptor.occupant_id,
                        "Placement conflict awaiting confirmation"
                    );
                    return Ok(PlaceOutcome::Conflict(descriptor));
                }
                return self
                    .displace(scope, request, desired, descriptor.occupant_id)
                    .await;
            }
        }

        let entity = self
            .write(scope, request, desired)
            .await
            .map_err(PlacementError::io(PlacementStep::WriteIncoming))?;
        tracing::info!(scope = %scope, id = entity.id(), order = desired, "Placed entity");
        Ok(PlaceOutcome::Placed {
            entity,
            displaced: None,
        })
    }

    /// Finish an interrupted displacement.
    ///
    /// Reloads the scope; if `occupant_id` shares its order with another
    /// entity it is moved to the smallest free order. Running it again once
    /// the scope is consistent changes nothing.
    pub async fn resume_displacement(
        &self,
        scope: &Scope,
        occupant_id: DbId,
    ) -> Result<Option<Displacement>, PlacementError> {
        let existing = self.load(scope, PlacementStep::LoadScope).await?;
        let occupant = existing
            .iter()
            .find(|e| e.id() == occupant_id)
            .ok_or(PlacementError::NotFound {
                scope: *scope,
                id: occupant_id,
            })?;

        let from_order = occupant.order();
        if find_conflict(&existing, from_order, Some(occupant_id)).is_none() {
            return Ok(None);
        }

        let to_order = first_free_order(existing.iter().map(Slotted::order));
        self.gateway
            .update(occupant_id, PlacementPatch::order_only(to_order))
            .await
            .map_err(PlacementError::io(PlacementStep::RelocateOccupant))?;
        tracing::info!(
            scope = %scope,
            occupant_id,
            from_order,
            to_order,
            "Resumed displacement"
        );
        Ok(Some(Displacement {
            occupant_id,
            from_order,
            to_order,
        }))
    }

    /// Delete an entity, freeing its order.
    pub async fn remove(&self, scope: &Scope, id: DbId) -> Result<G::Entity, PlacementError> {
        let existing = self.load(scope, PlacementStep::LoadScope).await?;
        let entity = existing
            .into_iter()
            .find(|e| e.id() == id)
            .ok_or(PlacementError::NotFound { scope: *scope, id })?;
        self.gateway
            .delete(id)
            .await
            .map_err(PlacementError::io(PlacementStep::Remove))?;
        tracing::info!(scope = %scope, id, order = entity.order(), "Removed entity");
        Ok(entity)
    }

    // -- internals ----------------------------------------------------------

    async fn load(
        &self,
        scope: &Scope,
        step: PlacementStep,
    ) -> Result<Vec<G::Entity>, PlacementError> {
        self.gateway
            .list(scope)
            .await
            .map_err(PlacementError::io(step))
    }

    async fn write(
        &self,
        scope: &Scope,
        request: &PlacementRequest<G::Draft>,
        order: Order,
    ) -> Result<G::Entity, super::GatewayError> {
        match request.id {
            Some(id) => {
                let patch = PlacementPatch {
                    order: Some(order),
                    draft: Some(&request.draft),
                };
                self.gateway.update(id, patch).await
            }
            None => self.gateway.create(scope, order, &request.draft).await,
        }
    }

    async fn displace(
        &self,
        scope: &Scope,
        request: &PlacementRequest<G::Draft>,
        desired: Order,
        occupant_id: DbId,
    ) -> Result<PlaceOutcome<G::Entity>, PlacementError> {
        let entity = self
            .write(scope, request, desired)
            .await
            .map_err(PlacementError::io(PlacementStep::WriteIncoming))?;

        let resume = ResumePoint {
            scope: *scope,
            placed_id: entity.id(),
            occupant_id,
        };

        let occupied = self
            .gateway
            .list(scope)
            .await
            .map_err(|source| PlacementError::Io {
                step: PlacementStep::ReloadScope,
                resume: Some(resume),
                source,
            })?;

        let still_there = occupied
            .iter()
            .any(|e| e.id() == occupant_id && e.order() == desired);
        if !still_there {
            tracing::warn!(
                scope = %scope,
                occupant_id,
                order = desired,
                "Displaced occupant already moved, skipping relocation"
            );
            return Ok(PlaceOutcome::Placed {
                entity,
                displaced: None,
            });
        }

        let to_order = first_free_order(occupied.iter().map(Slotted::order));
        self.gateway
            .update(occupant_id, PlacementPatch::order_only(to_order))
            .await
            .map_err(|source| {
                tracing::error!(
                    scope = %scope,
                    placed_id = resume.placed_id,
                    occupant_id,
                    error = %source,
                    "Relocating displaced occupant failed"
                );
                PlacementError::Io {
                    step: PlacementStep::RelocateOccupant,
                    resume: Some(resume),
                    source,
                }
            })?;

        tracing::info!(
            scope = %scope,
            id = entity.id(),
            order = desired,
            occupant_id,
            to_order,
            "Placed entity and displaced occupant"
        );
        Ok(PlaceOutcome::Placed {
            entity,
            displaced: Some(Displacement {
                occupant_id,
                from_order: desired,
                to_order,
            }),
        })
    }
}

// ---------------------------------------------------------------------------
// Pre-write checks
// ---------------------------------------------------------------------------

fn check_order(scope: &Scope, order: Order) -> Result<(), PlacementError> {
    if order < 1 {
        return Err(PlacementError::Validation(format!(
            "order must be >= 1, got {order}"
        )));
    }
    if let Some(max) = scope.max_slots() {
        if i64::from(order) > i64::from(max) {
            return Err(PlacementError::OutOfBounds {
                scope: *scope,
                reason: format!("order {order} exceeds the {max} available slots"),
            });
        }
    }
    Ok(())
}

fn check_capacity(scope: &Scope, count: usize) -> Result<(), PlacementError> {
    if scope.kind() == ScopeKind::MenuLink && count >= MENU_LINK_LIMIT as usize {
        return Err(PlacementError::OutOfBounds {
            scope: *scope,
            reason: format!("a menu section holds at most {MENU_LINK_LIMIT} links"),
        });
    }
    if let Some(max) = scope.max_slots() {
        if count >= max as usize {
            return Err(PlacementError::OutOfBounds {
                scope: *scope,
                reason: format!("all {max} slots are in use"),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;

    use super::*;
    use crate::placement::memory::{draft, Item, MemoryGateway};
    use crate::placement::Variant;

    fn labels(gw: &MemoryGateway, scope: Scope) -> Vec<(String, Order)> {
        gw.snapshot(scope)
    }

    fn pairs(expected: &[(&str, Order)]) -> Vec<(String, Order)> {
        expected.iter().map(|(l, o)| (l.to_string(), *o)).collect()
    }

    fn hero_ab() -> (MemoryGateway, Scope) {
        let scope = Scope::hero_slides();
        let gw = MemoryGateway::new();
        gw.seed(scope, 1, 1, "A");
        gw.seed(scope, 2, 2, "B");
        (gw, scope)
    }

    // -- no conflict --------------------------------------------------------

    #[tokio::test]
    async fn auto_assigns_after_current_max() {
        let (gw, scope) = hero_ab();
        let placer = Placer::new(&gw);

        let outcome = placer
            .place(&scope, &PlacementRequest::create(None, draft("C")), false)
            .await
            .unwrap();

        assert_matches!(outcome, PlaceOutcome::Placed { entity, displaced: None } => {
            assert_eq!(entity.order, 3);
        });
    }

    #[tokio::test]
    async fn explicit_free_order_is_written_directly() {
        let (gw, scope) = hero_ab();
        let outcome = Placer::new(&gw)
            .place(&scope, &PlacementRequest::create(Some(5), draft("C")), false)
            .await
            .unwrap();

        assert_matches!(outcome, PlaceOutcome::Placed { displaced: None, .. });
        assert_eq!(labels(&gw, scope), pairs(&[("A", 1), ("B", 2), ("C", 5)]));
    }

    #[tokio::test]
    async fn first_entity_in_empty_scope_gets_order_one() {
        let gw = MemoryGateway::new();
        let scope = Scope::menu_sections();
        let outcome = Placer::new(&gw)
            .place(&scope, &PlacementRequest::create(None, draft("Shop")), false)
            .await
            .unwrap();
        assert_matches!(outcome, PlaceOutcome::Placed { entity, .. } => assert_eq!(entity.order, 1));
    }

    // -- conflicts ----------------------------------------------------------

    #[tokio::test]
    async fn unconfirmed_conflict_writes_nothing() {
        let (gw, scope) = hero_ab();
        let outcome = Placer::new(&gw)
            .place(&scope, &PlacementRequest::create(Some(2), draft("C")), false)
            .await
            .unwrap();

        assert_matches!(outcome, PlaceOutcome::Conflict(d) => {
            assert_eq!(d.occupant_id, 2);
            assert_eq!(d.occupant_label, "B");
            assert_eq!(d.desired_order, 2);
            assert_eq!(d.scope, scope);
        });
        assert_eq!(gw.write_count(), 0);
        assert_eq!(labels(&gw, scope), pairs(&[("A", 1), ("B", 2)]));
    }

    #[tokio::test]
    async fn confirmed_conflict_moves_occupant_to_first_free_order() {
        let (gw, scope) = hero_ab();
        let placer = Placer::new(&gw);
        let request = PlacementRequest::create(Some(2), draft("C"));

        assert_matches!(
            placer.place(&scope, &request, false).await.unwrap(),
            PlaceOutcome::Conflict(_)
        );
        let outcome = placer.place(&scope, &request, true).await.unwrap();

        assert_matches!(outcome, PlaceOutcome::Placed { entity, displaced: Some(d) } => {
            assert_eq!(entity.order, 2);
            assert_eq!(d, Displacement { occupant_id: 2, from_order: 2, to_order: 3 });
        });
        assert_eq!(labels(&gw, scope), pairs(&[("A", 1), ("C", 2), ("B", 3)]));
    }

    #[tokio::test]
    async fn displaced_occupant_fills_lowest_gap() {
        let scope = Scope::hero_slides();
        let gw = MemoryGateway::new();
        gw.seed(scope, 2, 2, "B");
        gw.seed(scope, 3, 3, "C");

        Placer::new(&gw)
            .place(&scope, &PlacementRequest::create(Some(2), draft("A")), true)
            .await
            .unwrap();

        assert_eq!(labels(&gw, scope), pairs(&[("B", 1), ("A", 2), ("C", 3)]));
    }

    #[tokio::test]
    async fn moving_onto_occupied_order_swaps_into_vacated_slot() {
        let (gw, scope) = hero_ab();
        gw.seed(scope, 3, 3, "C");

        let outcome = Placer::new(&gw)
            .place(&scope, &PlacementRequest::update(3, Some(1), draft("C")), true)
            .await
            .unwrap();

        assert_matches!(outcome, PlaceOutcome::Placed { displaced: Some(d), .. } => {
            assert_eq!(d.occupant_id, 1);
            assert_eq!(d.to_order, 3);
        });
        assert_eq!(labels(&gw, scope), pairs(&[("C", 1), ("B", 2), ("A", 3)]));
    }

    #[tokio::test]
    async fn resaving_at_own_order_is_not_a_conflict() {
        let (gw, scope) = hero_ab();
        let outcome = Placer::new(&gw)
            .place(&scope, &PlacementRequest::update(2, Some(2), draft("B2")), false)
            .await
            .unwrap();

        assert_matches!(outcome, PlaceOutcome::Placed { entity, displaced: None } => {
            assert_eq!(entity.label, "B2");
            assert_eq!(entity.order, 2);
        });
    }

    #[tokio::test]
    async fn update_without_order_keeps_position() {
        let (gw, scope) = hero_ab();
        Placer::new(&gw)
            .place(&scope, &PlacementRequest::update(1, None, draft("A2")), false)
            .await
            .unwrap();
        assert_eq!(labels(&gw, scope), pairs(&[("A2", 1), ("B", 2)]));
    }

    #[tokio::test]
    async fn featured_variants_do_not_conflict_with_each_other() {
        let feature = Scope::featured(Variant::Feature).unwrap();
        let tile = Scope::featured(Variant::Tile).unwrap();
        let gw = MemoryGateway::new();
        gw.seed(feature, 1, 1, "Big");

        let outcome = Placer::new(&gw)
            .place(&tile, &PlacementRequest::create(Some(1), draft("Small")), false)
            .await
            .unwrap();

        assert_matches!(outcome, PlaceOutcome::Placed { displaced: None, .. });
    }

    // -- validation and bounds ---------------------------------------------

    #[tokio::test]
    async fn rejects_non_positive_order_before_loading() {
        let (gw, scope) = hero_ab();
        gw.fail_lists_after(0);
        let err = Placer::new(&gw)
            .place(&scope, &PlacementRequest::create(Some(0), draft("C")), true)
            .await
            .unwrap_err();
        assert_matches!(err, PlacementError::Validation(_));
    }

    #[tokio::test]
    async fn rejects_invalid_draft() {
        let (gw, scope) = hero_ab();
        let err = Placer::new(&gw)
            .place(&scope, &PlacementRequest::create(None, draft("")), false)
            .await
            .unwrap_err();
        assert_matches!(err, PlacementError::Validation(_));
        assert_eq!(gw.write_count(), 0);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (gw, scope) = hero_ab();
        let err = Placer::new(&gw)
            .place(&scope, &PlacementRequest::update(99, Some(1), draft("X")), true)
            .await
            .unwrap_err();
        assert_matches!(err, PlacementError::NotFound { id: 99, .. });
    }

    #[tokio::test]
    async fn full_bounded_scope_rejects_new_entity_regardless_of_order() {
        let scope = Scope::homepage_slots();
        let gw = MemoryGateway::new();
        for i in 1..=crate::placement::HOMEPAGE_CATEGORY_SLOTS as i64 {
            gw.seed(scope, i, i as Order, "cat");
        }
        let placer = Placer::new(&gw);

        for order in [None, Some(1), Some(8)] {
            let err = placer
                .place(&scope, &PlacementRequest::create(order, draft("new")), true)
                .await
                .unwrap_err();
            assert_matches!(err, PlacementError::OutOfBounds { .. });
        }
        assert_eq!(gw.write_count(), 0);
    }

    #[tokio::test]
    async fn full_bounded_scope_still_allows_reordering() {
        let scope = Scope::menu_links(7);
        let gw = MemoryGateway::new();
        gw.seed(scope, 1, 1, "a");
        gw.seed(scope, 2, 2, "b");
        gw.seed(scope, 3, 3, "c");

        Placer::new(&gw)
            .place(&scope, &PlacementRequest::update(3, Some(1), draft("c")), true)
            .await
            .unwrap();
        assert_eq!(labels(&gw, scope), pairs(&[("c", 1), ("b", 2), ("a", 3)]));
    }

    #[tokio::test]
    async fn fourth_menu_link_rejected_even_with_free_order() {
        let scope = Scope::menu_links(7);
        let gw = MemoryGateway::new();
        gw.seed(scope, 1, 1, "a");
        gw.seed(scope, 2, 2, "b");
        gw.seed(scope, 3, 5, "c");

        let err = Placer::new(&gw)
            .place(&scope, &PlacementRequest::create(Some(3), draft("d")), false)
            .await
            .unwrap_err();
        assert_matches!(err, PlacementError::OutOfBounds { reason, .. } => {
            assert!(reason.contains("at most 3 links"));
        });
    }

    #[tokio::test]
    async fn menu_link_limit_is_per_section() {
        let gw = MemoryGateway::new();
        for id in 1..=3 {
            gw.seed(Scope::menu_links(1), id, id as Order, "x");
        }
        let outcome = Placer::new(&gw)
            .place(&Scope::menu_links(2), &PlacementRequest::create(None, draft("y")), false)
            .await
            .unwrap();
        assert_matches!(outcome, PlaceOutcome::Placed { .. });
    }

    #[tokio::test]
    async fn bounded_scope_rejects_order_past_limit() {
        let gw = MemoryGateway::new();
        let err = Placer::new(&gw)
            .place(
                &Scope::homepage_slots(),
                &PlacementRequest::create(Some(9), draft("x")),
                false,
            )
            .await
            .unwrap_err();
        assert_matches!(err, PlacementError::OutOfBounds { .. });
    }

    // -- partial failure and resume ----------------------------------------

    #[tokio::test]
    async fn relocation_failure_reports_resume_point() {
        let (gw, scope) = hero_ab();
        gw.fail_updates_of(2);

        let err = Placer::new(&gw)
            .place(&scope, &PlacementRequest::create(Some(2), draft("C")), true)
            .await
            .unwrap_err();

        assert_matches!(
            err,
            PlacementError::Io { step: PlacementStep::RelocateOccupant, resume: Some(r), .. } => {
                assert_eq!(r.occupant_id, 2);
                assert_eq!(r.placed_id, 3);
            }
        );
        // Incoming entity is written, occupant still shares order 2.
        assert_eq!(labels(&gw, scope), pairs(&[("A", 1), ("B", 2), ("C", 2)]));
    }

    #[tokio::test]
    async fn reload_failure_reports_resume_point() {
        let (gw, scope) = hero_ab();
        gw.fail_lists_after(1);

        let err = Placer::new(&gw)
            .place(&scope, &PlacementRequest::create(Some(2), draft("C")), true)
            .await
            .unwrap_err();

        assert_matches!(
            err,
            PlacementError::Io { step: PlacementStep::ReloadScope, resume: Some(_), .. }
        );
    }

    #[tokio::test]
    async fn resume_completes_interrupted_displacement_and_is_idempotent() {
        let (gw, scope) = hero_ab();
        gw.fail_updates_of(2);
        let placer = Placer::new(&gw);
        let _ = placer
            .place(&scope, &PlacementRequest::create(Some(2), draft("C")), true)
            .await;
        gw.clear_failures();

        let moved = placer.resume_displacement(&scope, 2).await.unwrap();
        assert_eq!(
            moved,
            Some(Displacement { occupant_id: 2, from_order: 2, to_order: 3 })
        );
        assert_eq!(labels(&gw, scope), pairs(&[("A", 1), ("C", 2), ("B", 3)]));

        let again = placer.resume_displacement(&scope, 2).await.unwrap();
        assert_eq!(again, None);
        assert_eq!(labels(&gw, scope), pairs(&[("A", 1), ("C", 2), ("B", 3)]));
    }

    #[tokio::test]
    async fn occupant_moved_before_reload_is_left_where_it_went() {
        let (gw, scope) = hero_ab();
        gw.move_after_next_write(2, 5);

        let outcome = Placer::new(&gw)
            .place(&scope, &PlacementRequest::create(Some(2), draft("C")), true)
            .await
            .unwrap();

        assert_matches!(outcome, PlaceOutcome::Placed { entity, displaced: None } => {
            assert_eq!(entity.order, 2);
        });
        // Only the incoming write happened; no relocation of B.
        assert_eq!(gw.write_count(), 1);
        assert_eq!(labels(&gw, scope), pairs(&[("A", 1), ("C", 2), ("B", 5)]));
    }

    #[tokio::test]
    async fn occupant_deleted_before_reload_is_not_relocated() {
        let (gw, scope) = hero_ab();
        gw.fail_updates_of(2);
        gw.remove_after_next_list(2);

        // B vanishes after the initial load; the conflict was already seen.
        let outcome = Placer::new(&gw)
            .place(&scope, &PlacementRequest::create(Some(2), draft("C")), true)
            .await
            .unwrap();

        assert_matches!(outcome, PlaceOutcome::Placed { displaced: None, .. });
        assert_eq!(labels(&gw, scope), pairs(&[("A", 1), ("C", 2)]));
    }

    #[tokio::test]
    async fn detection_after_partial_failure_surfaces_same_conflict() {
        let (gw, scope) = hero_ab();
        gw.fail_updates_of(2);
        let placer = Placer::new(&gw);
        let _ = placer
            .place(&scope, &PlacementRequest::create(Some(2), draft("C")), true)
            .await;

        let conflict = placer.find_conflict(&scope, 2, Some(3)).await.unwrap();
        assert_matches!(conflict, Some(d) => assert_eq!(d.occupant_id, 2));
    }

    // -- removal ------------------------------------------------------------

    #[tokio::test]
    async fn removal_frees_order_for_reuse() {
        let (gw, scope) = hero_ab();
        let placer = Placer::new(&gw);
        placer.remove(&scope, 2).await.unwrap();

        assert_eq!(placer.next_order(&scope).await.unwrap(), 2);
        assert!(placer.find_conflict(&scope, 2, None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remove_unknown_is_not_found() {
        let (gw, scope) = hero_ab();
        let err = Placer::new(&gw).remove(&scope, 42).await.unwrap_err();
        assert_matches!(err, PlacementError::NotFound { id: 42, .. });
    }

    // -- invariants ---------------------------------------------------------

    #[tokio::test]
    async fn orders_stay_unique_across_a_sequence_of_placements() {
        let scope = Scope::hero_slides();
        let gw = MemoryGateway::new();
        let placer = Placer::new(&gw);

        let script: &[(Option<DbId>, Option<Order>, bool)] = &[
            (None, None, false),
            (None, None, false),
            (None, Some(1), true),
            (None, Some(2), false),
            (None, Some(2), true),
            (Some(1), Some(4), true),
            (None, Some(1), true),
            (Some(2), Some(1), false),
            (Some(2), Some(1), true),
            (None, None, true),
        ];
        for (i, (id, order, confirmed)) in script.iter().enumerate() {
            let request = PlacementRequest {
                id: *id,
                order: *order,
                draft: draft(&format!("e{i}")),
            };
            placer.place(&scope, &request, *confirmed).await.unwrap();

            let entities: Vec<Item> = placer.list(&scope).await.unwrap();
            let orders: HashSet<Order> = entities.iter().map(|e| e.order).collect();
            assert_eq!(orders.len(), entities.len(), "duplicate order after step {i}");
            assert!(orders.iter().all(|o| *o >= 1));
        }
    }
}
