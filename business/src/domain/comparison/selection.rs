use std::collections::HashSet;

use uuid::Uuid;

/// How many products a comparison needs before it is worth rendering.
pub const COMPARE_MINIMUM: usize = 2;

/// The products a visitor picked for side-by-side comparison, in the order
/// they were picked. A companion hash set keeps membership checks O(1).
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    order: Vec<Uuid>,
    members: HashSet<Uuid>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a selection from stored ids. Duplicates keep their first
    /// position only.
    pub fn from_ids(ids: impl IntoIterator<Item = Uuid>) -> Self {
        let mut selection = Self::new();
        for id in ids {
            if selection.members.insert(id) {
                selection.order.push(id);
            }
        }
        selection
    }

    /// Removes the id when present, appends it otherwise. Returns whether
    /// the id is selected after the toggle.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        if self.members.remove(&id) {
            self.order.retain(|existing| *existing != id);
            false
        } else {
            self.members.insert(id);
            self.order.push(id);
            true
        }
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.members.contains(&id)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> &[Uuid] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The comparison call-to-action only shows once two or more products
    /// are selected.
    pub fn compare_available(&self) -> bool {
        self.order.len() >= COMPARE_MINIMUM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_append_on_first_toggle() {
        let mut selection = SelectionSet::new();
        let id = Uuid::new_v4();

        assert!(selection.toggle(id));
        assert!(selection.contains(id));
        assert_eq!(selection.ids(), &[id]);
    }

    #[test]
    fn should_remove_on_second_toggle() {
        let mut selection = SelectionSet::new();
        let id = Uuid::new_v4();

        selection.toggle(id);
        assert!(!selection.toggle(id));
        assert!(!selection.contains(id));
        assert!(selection.is_empty());
    }

    #[test]
    fn should_keep_insertion_order() {
        let mut selection = SelectionSet::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let third = Uuid::new_v4();

        selection.toggle(first);
        selection.toggle(second);
        selection.toggle(third);
        selection.toggle(second);

        assert_eq!(selection.ids(), &[first, third]);
    }

    #[test]
    fn should_deduplicate_when_rebuilding_from_ids() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        let selection = SelectionSet::from_ids(vec![first, second, first]);

        assert_eq!(selection.ids(), &[first, second]);
    }

    #[test]
    fn should_gate_comparison_on_two_selected() {
        let mut selection = SelectionSet::new();
        assert!(!selection.compare_available());

        selection.toggle(Uuid::new_v4());
        assert!(!selection.compare_available());

        selection.toggle(Uuid::new_v4());
        assert!(selection.compare_available());
    }

    #[test]
    fn should_clear_everything() {
        let mut selection = SelectionSet::from_ids(vec![Uuid::new_v4(), Uuid::new_v4()]);

        selection.clear();

        assert!(selection.is_empty());
        assert!(!selection.compare_available());
    }

    proptest! {
        // Double-toggling restores membership. Position is not part of the
        // law: a re-added id lands at the end of the order.
        #[test]
        fn toggle_twice_restores_membership(
            seeds in proptest::collection::vec(0u128..1000, 0..6),
            candidate in 0u128..1000
        ) {
            let ids: Vec<Uuid> = seeds.into_iter().map(Uuid::from_u128).collect();
            let mut selection = SelectionSet::from_ids(ids);
            let id = Uuid::from_u128(candidate);
            let mut before = selection.ids().to_vec();
            before.sort();

            selection.toggle(id);
            selection.toggle(id);

            let mut after = selection.ids().to_vec();
            after.sort();
            prop_assert_eq!(before, after);
        }
    }
}
