//! In-memory gateway for exercising the placement engine without storage.

use std::sync::Mutex;

use validator::Validate;

use crate::types::{DbId, Order};

use super::{CategoryRef, GatewayError, PlacementGateway, PlacementPatch, Scope, Slotted};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: DbId,
    pub order: Order,
    pub label: String,
    pub category_id: DbId,
}

impl Item {
    pub fn new(id: DbId, order: Order, label: &str) -> Self {
        Self {
            id,
            order,
            label: label.to_string(),
            category_id: 0,
        }
    }
}

impl Slotted for Item {
    fn id(&self) -> DbId {
        self.id
    }

    fn order(&self) -> Order {
        self.order
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

impl CategoryRef for Item {
    fn category_id(&self) -> DbId {
        self.category_id
    }
}

#[derive(Debug, Clone, Validate)]
pub struct ItemDraft {
    #[validate(length(min = 1, max = 40))]
    pub label: String,
    pub category_id: DbId,
}

pub fn draft(label: &str) -> ItemDraft {
    ItemDraft {
        label: label.to_string(),
        category_id: 0,
    }
}

#[derive(Default)]
struct State {
    rows: Vec<(Scope, Item)>,
    next_id: DbId,
    fail_updates_of: Option<DbId>,
    fail_lists_after: Option<usize>,
    move_after_write: Option<(DbId, Order)>,
    remove_after_list: Option<DbId>,
    writes: usize,
}

impl State {
    /// Apply a pending concurrent move once a write went through.
    fn after_write(&mut self) {
        self.writes += 1;
        if let Some((id, order)) = self.move_after_write.take() {
            if let Some((_, item)) = self.rows.iter_mut().find(|(_, i)| i.id == id) {
                item.order = order;
            }
        }
    }
}

#[derive(Default)]
pub struct MemoryGateway {
    state: Mutex<State>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, scope: Scope, id: DbId, order: Order, label: &str) {
        self.seed_item(scope, Item::new(id, order, label));
    }

    pub fn seed_item(&self, scope: Scope, item: Item) {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(item.id);
        state.rows.push((scope, item));
    }

    /// `(label, order)` pairs in `scope`, sorted by order then label.
    pub fn snapshot(&self, scope: Scope) -> Vec<(String, Order)> {
        let state = self.state.lock().unwrap();
        let mut out: Vec<_> = state
            .rows
            .iter()
            .filter(|(s, _)| *s == scope)
            .map(|(_, i)| (i.label.clone(), i.order))
            .collect();
        out.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        out
    }

    pub fn fail_updates_of(&self, id: DbId) {
        self.state.lock().unwrap().fail_updates_of = Some(id);
    }

    /// Let `n` more `list` calls succeed, then fail every later one.
    pub fn fail_lists_after(&self, n: usize) {
        self.state.lock().unwrap().fail_lists_after = Some(n);
    }

    /// Simulate another writer moving `id` to `order` right after the next
    /// successful create or update.
    pub fn move_after_next_write(&self, id: DbId, order: Order) {
        self.state.lock().unwrap().move_after_write = Some((id, order));
    }

    /// Simulate another writer deleting `id` right after the next `list`.
    pub fn remove_after_next_list(&self, id: DbId) {
        self.state.lock().unwrap().remove_after_list = Some(id);
    }

    pub fn clear_failures(&self) {
        let mut state = self.state.lock().unwrap();
        state.fail_updates_of = None;
        state.fail_lists_after = None;
    }

    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes
    }
}

fn injected() -> GatewayError {
    GatewayError::backend(std::io::Error::other("injected failure"))
}

impl PlacementGateway for MemoryGateway {
    type Entity = Item;
    type Draft = ItemDraft;

    async fn list(&self, scope: &Scope) -> Result<Vec<Item>, GatewayError> {
        let mut state = self.state.lock().unwrap();
        if let Some(remaining) = state.fail_lists_after.as_mut() {
            if *remaining == 0 {
                return Err(injected());
            }
            *remaining -= 1;
        }
        let listed: Vec<Item> = state
            .rows
            .iter()
            .filter(|(s, _)| s == scope)
            .map(|(_, i)| i.clone())
            .collect();
        if let Some(id) = state.remove_after_list.take() {
            state.rows.retain(|(_, i)| i.id != id);
        }
        Ok(listed)
    }

    async fn create(
        &self,
        scope: &Scope,
        order: Order,
        draft: &ItemDraft,
    ) -> Result<Item, GatewayError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let item = Item {
            id: state.next_id,
            order,
            label: draft.label.clone(),
            category_id: draft.category_id,
        };
        state.rows.push((*scope, item.clone()));
        state.after_write();
        Ok(item)
    }

    async fn update(
        &self,
        id: DbId,
        patch: PlacementPatch<'_, ItemDraft>,
    ) -> Result<Item, GatewayError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_updates_of == Some(id) {
            return Err(injected());
        }
        let item = state
            .rows
            .iter_mut()
            .map(|(_, i)| i)
            .find(|i| i.id == id)
            .ok_or(GatewayError::NotFound { entity: "Item", id })?;
        if let Some(order) = patch.order {
            item.order = order;
        }
        if let Some(draft) = patch.draft {
            item.label = draft.label.clone();
            item.category_id = draft.category_id;
        }
        let updated = item.clone();
        state.after_write();
        Ok(updated)
    }

    async fn delete(&self, id: DbId) -> Result<(), GatewayError> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|(_, i)| i.id != id);
        if state.rows.len() == before {
            return Err(GatewayError::NotFound { entity: "Item", id });
        }
        state.writes += 1;
        Ok(())
    }
}
