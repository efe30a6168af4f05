// src/modules/project/application/domain/relation_sync.rs
//
// Reconciles a parent's child collection against a caller-supplied target
// list. Planning is pure; storing payloads and writing rows happen in the
// services that own the relation.

use std::collections::HashSet;

use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Child / target contracts
// ──────────────────────────────────────────────────────────
//

/// A persisted child row owned by a parent.
pub trait SyncChild {
    type Kind: Copy + Eq + Ord;

    fn id(&self) -> Uuid;
    fn kind(&self) -> Self::Kind;
    fn order(&self) -> Option<i32>;
    fn set_order(&mut self, order: i32);
}

/// One entry of the desired state: a reference to an existing child (`id`
/// set) or a new child to create (`id` empty).
pub trait SyncTarget {
    type Kind: Copy + Eq + Ord;

    fn id(&self) -> Option<Uuid>;
    fn kind(&self) -> Self::Kind;
    fn order(&self) -> Option<i32>;
}

//
// ──────────────────────────────────────────────────────────
// Plan
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct SyncPlan<C, T> {
    /// Rows to remove, including single-occupancy evictions.
    pub to_delete: Vec<C>,
    /// Surviving rows, orders already applied.
    pub to_keep: Vec<C>,
    /// Targets that become new rows, in request order.
    pub to_create: Vec<T>,
    /// `(id, new_order)` for kept rows whose order actually changed.
    pub reordered: Vec<(Uuid, i32)>,
}

impl<C, T> SyncPlan<C, T> {
    pub fn is_noop(&self) -> bool {
        self.to_delete.is_empty() && self.to_create.is_empty() && self.reordered.is_empty()
    }
}

/// Computes the create/keep/delete diff between `current` and `targets`.
///
/// - current rows not referenced by any target id are deleted
/// - targets without id are created
/// - a kept row takes the order of the first target that references it
///   and carries one
/// - creating a child whose kind is single-occupancy evicts every other
///   child of that kind, kept rows and earlier pending creations alike
///   (last write wins inside one call)
/// - target ids that match no current row are ignored
pub fn plan_sync<C, T, F>(current: Vec<C>, targets: Vec<T>, is_single: F) -> SyncPlan<C, T>
where
    C: SyncChild,
    T: SyncTarget<Kind = C::Kind>,
    F: Fn(C::Kind) -> bool,
{
    let target_ids: HashSet<Uuid> = targets.iter().filter_map(|t| t.id()).collect();

    let (mut to_keep, mut to_delete): (Vec<C>, Vec<C>) = current
        .into_iter()
        .partition(|c| target_ids.contains(&c.id()));

    let mut reordered = Vec::new();
    for child in to_keep.iter_mut() {
        let requested = targets
            .iter()
            .filter(|t| t.id() == Some(child.id()))
            .find_map(|t| t.order());

        if let Some(order) = requested {
            if child.order() != Some(order) {
                child.set_order(order);
                reordered.push((child.id(), order));
            }
        }
    }

    let mut to_create: Vec<T> = Vec::new();
    for target in targets.into_iter().filter(|t| t.id().is_none()) {
        let kind = target.kind();
        if is_single(kind) {
            let (evicted, survivors): (Vec<C>, Vec<C>) =
                to_keep.into_iter().partition(|c| c.kind() == kind);
            to_keep = survivors;

            for child in evicted {
                reordered.retain(|(id, _)| *id != child.id());
                to_delete.push(child);
            }

            to_create.retain(|pending| pending.kind() != kind);
        }
        to_create.push(target);
    }

    SyncPlan {
        to_delete,
        to_keep,
        to_create,
        reordered,
    }
}

/// Presentation order for a reconciled collection: kind, then
/// `order` (missing counts as 0), then id. Ids are time-ordered so the last
/// key falls back to insertion order.
pub fn sort_children<C: SyncChild>(children: &mut [C]) {
    children.sort_by(|a, b| {
        a.kind()
            .cmp(&b.kind())
            .then(a.order().unwrap_or(0).cmp(&b.order().unwrap_or(0)))
            .then(a.id().cmp(&b.id()))
    });
}

//
// ──────────────────────────────────────────────────────────
// Persisted form of a plan
// ──────────────────────────────────────────────────────────
//

/// What a repository must write for one relation, inside the aggregate's
/// transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationChanges<C> {
    pub delete_ids: Vec<Uuid>,
    pub create: Vec<C>,
    pub reorder: Vec<(Uuid, i32)>,
}

impl<C> Default for RelationChanges<C> {
    fn default() -> Self {
        Self {
            delete_ids: Vec::new(),
            create: Vec::new(),
            reorder: Vec::new(),
        }
    }
}

impl<C> RelationChanges<C> {
    pub fn is_empty(&self) -> bool {
        self.delete_ids.is_empty() && self.create.is_empty() && self.reorder.is_empty()
    }
}
