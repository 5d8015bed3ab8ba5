//! Ordered item storage.

use crate::error::{ChecklistError, ConfigIssue, Result};
use crate::item::{Item, ItemRole};

/// Owns the items of a check list and their checked state.
///
/// The store validates its items once, on construction. Roles never change
/// afterwards, so the sentinel and unique positions are cached.
#[derive(Debug, Clone)]
pub struct ItemStore<V> {
    items: Vec<Item<V>>,
    sentinel: Option<usize>,
    unique: Option<usize>,
}

impl<V> ItemStore<V> {
    /// Validate and take ownership of `items`.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistError::InvalidConfig`] for an empty list, for more
    /// than one sentinel or unique item, or for a list mixing both roles.
    pub fn new(items: Vec<Item<V>>) -> Result<Self> {
        if items.is_empty() {
            return Err(ConfigIssue::Empty.into());
        }

        let mut sentinel = None;
        let mut unique = None;
        for (index, item) in items.iter().enumerate() {
            match item.role {
                ItemRole::Regular => {}
                ItemRole::AllSentinel => {
                    if let Some(first) = sentinel {
                        return Err(ConfigIssue::MultipleSentinels {
                            first,
                            second: index,
                        }
                        .into());
                    }
                    sentinel = Some(index);
                }
                ItemRole::Unique => {
                    if let Some(first) = unique {
                        return Err(ConfigIssue::MultipleUnique {
                            first,
                            second: index,
                        }
                        .into());
                    }
                    unique = Some(index);
                }
            }
        }

        if let (Some(sentinel), Some(unique)) = (sentinel, unique) {
            return Err(ConfigIssue::ConflictingRoles { sentinel, unique }.into());
        }

        Ok(Self {
            items,
            sentinel,
            unique,
        })
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store holds no items (never true once validated).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item<V>> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item<V>] {
        &self.items
    }

    /// Set the checked state of one item.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistError::IndexOutOfRange`] if `index` is not an item.
    pub fn set_state(&mut self, index: usize, state: bool) -> Result<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(ChecklistError::IndexOutOfRange { index, len })?;
        item.state = state;
        Ok(())
    }

    /// Overwrite every checked state at once.
    ///
    /// `states` must have one entry per item; extra entries are ignored and
    /// missing ones leave the item untouched.
    pub(crate) fn apply_states(&mut self, states: &[bool]) {
        for (item, &state) in self.items.iter_mut().zip(states) {
            item.state = state;
        }
    }

    pub fn index_of_sentinel(&self) -> Option<usize> {
        self.sentinel
    }

    pub fn index_of_unique(&self) -> Option<usize> {
        self.unique
    }

    /// Snapshot of every checked state, in item order.
    pub fn states(&self) -> Vec<bool> {
        self.items.iter().map(|item| item.state).collect()
    }

    /// Indices of checked items in ascending order.
    ///
    /// The iterator is lazy and `Clone`, so it can be restarted.
    pub fn marked_indices(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.state)
            .map(|(index, _)| index)
    }

    /// Checked items in list order.
    pub fn marked_items(&self) -> Vec<&Item<V>> {
        self.items.iter().filter(|item| item.state).collect()
    }

    /// Number of items other than the sentinel or unique entry.
    ///
    /// This is the count shown in the modal header.
    pub fn selectable_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_exclusive()).count()
    }
}
