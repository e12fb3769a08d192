//! Slot assignment: picking an order value when the operator gives none.

use std::collections::BTreeSet;

use crate::types::Order;

use super::{Scope, Slotted};

/// `max(order) + 1` over `existing`, or `1` for an empty scope.
///
/// Never fills gaps: `{1, 2, 4}` yields `5`. The result may exceed a bounded
/// scope's `max_slots`; [`assign_order`] decides what to do about that.
pub fn next_order<E: Slotted>(existing: &[E]) -> Order {
    existing
        .iter()
        .map(Slotted::order)
        .max()
        .map_or(1, |max| max + 1)
}

/// Smallest positive order not present in `occupied`.
pub fn first_free_order<I>(occupied: I) -> Order
where
    I: IntoIterator<Item = Order>,
{
    let taken: BTreeSet<Order> = occupied.into_iter().filter(|o| *o >= 1).collect();
    let mut candidate = 1;
    for order in taken {
        if order != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

/// Order for an auto-assigned placement in `scope`.
///
/// Uses [`next_order`]; in a bounded scope whose next order would pass
/// `max_slots`, wraps around to the first free gap. Auto-assigned values
/// never collide with an existing entity.
pub fn assign_order<E: Slotted>(scope: &Scope, existing: &[E]) -> Order {
    let next = next_order(existing);
    match scope.max_slots() {
        Some(max) if i64::from(next) > i64::from(max) => {
            first_free_order(existing.iter().map(Slotted::order))
        }
        _ => next,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
