//! Keeps the group list from reshuffling between refreshes

use std::collections::{HashMap, HashSet};
use tracing::warn;

use super::types::{Group, GroupId};

/// Result of one aggregation cycle as exposed to the view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountGroups {
    pub groups_by_key: HashMap<GroupId, Group>,
    /// Remembered order, filtered to the groups of this cycle
    pub order: Vec<GroupId>,
    /// Ranker order of this cycle
    pub ranked_order: Vec<GroupId>,
}

impl AccountGroups {
    pub fn get(&self, id: &str) -> Option<&Group> {
        self.groups_by_key.get(id)
    }

    pub fn len(&self) -> usize {
        self.groups_by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups_by_key.is_empty()
    }

    /// Display order.
    ///
    /// Slots the ranker gave to remembered groups are refilled in remembered order;
    /// groups the cache does not track keep the slot the ranker gave them.
    pub fn ordered_ids(&self) -> Vec<GroupId> {
        let tracked: HashSet<&GroupId> = self.order.iter().collect();
        let mut remembered = self.order.iter();
        let mut seen: HashSet<&GroupId> = HashSet::new();

        let mut ids = Vec::with_capacity(self.ranked_order.len());
        for id in &self.ranked_order {
            if !seen.insert(id) {
                continue;
            }
            if tracked.contains(id) {
                if let Some(next) = remembered.next() {
                    ids.push(next.clone());
                }
            } else {
                ids.push(id.clone());
            }
        }
        ids
    }

    pub fn ordered(&self) -> Vec<&Group> {
        self.ordered_ids()
            .iter()
            .filter_map(|id| self.groups_by_key.get(id))
            .collect()
    }
}

/// Remembered group order. Single writer: the aggregation engine.
#[derive(Clone, Debug, Default)]
pub struct StableOrderCache {
    previous_order: Vec<GroupId>,
    has_initialized: bool,
}

impl StableOrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(&self) -> &[GroupId] {
        &self.previous_order
    }

    pub fn is_initialized(&self) -> bool {
        self.has_initialized
    }

    /// Fold one cycle's ranked groups into the cache.
    ///
    /// The first non-empty cycle seeds the order. Afterwards the order is only
    /// filtered to the groups still present; groups first seen later are not
    /// added to it. Groups sharing an id are merged into the first one so the
    /// mapping and the orders hold each id once.
    pub fn absorb(&mut self, ranked: Vec<Group>) -> AccountGroups {
        let mut ranked_order: Vec<GroupId> = Vec::with_capacity(ranked.len());
        let mut groups_by_key: HashMap<GroupId, Group> = HashMap::with_capacity(ranked.len());
        for group in ranked {
            let id = group.id();
            match groups_by_key.get_mut(&id) {
                Some(existing) => {
                    warn!(group = %id, "duplicate group id, merging members");
                    existing.members.extend(group.members);
                }
                None => {
                    ranked_order.push(id.clone());
                    groups_by_key.insert(id, group);
                }
            }
        }

        if !self.has_initialized && !ranked_order.is_empty() {
            self.previous_order = ranked_order.clone();
            self.has_initialized = true;
        }

        self.previous_order.retain(|id| groups_by_key.contains_key(id));

        AccountGroups {
            groups_by_key,
            order: self.previous_order.clone(),
            ranked_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{Account, KeyringType};

    fn group(label: &str) -> Group {
        Group::from_members(vec![
            Account::new("0x1", KeyringType::Other(label.to_string())),
        ])
        .unwrap()
    }

    fn names(groups: &[&Group]) -> Vec<String> {
        groups.iter().map(|g| g.name.clone()).collect()
    }

    #[test]
    fn test_first_cycle_seeds_order() {
        let mut cache = StableOrderCache::new();
        let result = cache.absorb(Vec::new());
        assert!(!cache.is_initialized());
        assert!(result.is_empty());

        let result = cache.absorb(vec![group("g1"), group("g2")]);
        assert!(cache.is_initialized());
        assert_eq!(result.order, vec![group("g1").id(), group("g2").id()]);
        assert_eq!(names(&result.ordered()), vec!["g1", "g2"]);
    }

    #[test]
    fn test_remembered_groups_keep_relative_order() {
        let mut cache = StableOrderCache::new();
        cache.absorb(vec![group("g1"), group("g2"), group("g3")]);

        // g2 gone, g4 new, ranker now puts g3 ahead of g1
        let result = cache.absorb(vec![group("g3"), group("g4"), group("g1")]);
        assert_eq!(result.order, vec![group("g1").id(), group("g3").id()]);
        assert_eq!(names(&result.ordered()), vec!["g1", "g4", "g3"]);
        assert_eq!(cache.order().len(), 2);
    }

    #[test]
    fn test_new_groups_are_not_tracked() {
        let mut cache = StableOrderCache::new();
        cache.absorb(vec![group("g1")]);
        cache.absorb(vec![group("g1"), group("g2")]);
        let result = cache.absorb(vec![group("g2"), group("g1")]);

        assert_eq!(cache.order(), &[group("g1").id()]);
        assert_eq!(names(&result.ordered()), vec!["g2", "g1"]);
    }

    #[test]
    fn test_empty_cycle_after_init_clears_but_stays_initialized() {
        let mut cache = StableOrderCache::new();
        cache.absorb(vec![group("g1"), group("g2")]);
        let result = cache.absorb(Vec::new());
        assert!(result.order.is_empty());
        assert!(cache.is_initialized());

        let result = cache.absorb(vec![group("g2"), group("g1")]);
        assert!(result.order.is_empty());
        assert_eq!(names(&result.ordered()), vec!["g2", "g1"]);
    }

    #[test]
    fn test_colliding_ids_collapse_to_one_slot() {
        let mut cache = StableOrderCache::new();
        let mut late = group("g1");
        late.members[0].address = "0x2".to_string();
        let result = cache.absorb(vec![group("g1"), group("g2"), late, group("g3")]);

        let ids = result.ordered_ids();
        let unique: HashSet<&GroupId> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids.len(), result.groups_by_key.len());
        assert_eq!(cache.order().len(), 3);
        assert_eq!(names(&result.ordered()), vec!["g1", "g2", "g3"]);
        assert_eq!(result.get(&group("g1").id()).unwrap().len(), 2);
    }
}
