//! Checkable list items.

use serde::{Deserialize, Serialize};

/// Stable identifier of a list item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Special meaning an item carries inside its list.
///
/// A role is fixed when the list is built. The store rejects lists with more
/// than one `AllSentinel`, more than one `Unique`, or one of each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemRole {
    /// Ordinary checkable entry.
    #[default]
    Regular,
    /// "All" entry whose selection excludes every other item.
    AllSentinel,
    /// Exclusive entry that stands alone and is restored once every other
    /// item ends up selected.
    Unique,
}

/// A single checkable entry of a check list.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<V> {
    pub id: ItemId,
    pub title: String,
    pub value: V,
    /// Checked state.
    pub state: bool,
    pub role: ItemRole,
}

impl<V> Item<V> {
    /// Create an unchecked regular item.
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, value: V) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            value,
            state: false,
            role: ItemRole::Regular,
        }
    }

    /// Set the initial checked state.
    pub fn checked(mut self, state: bool) -> Self {
        self.state = state;
        self
    }

    /// Mark this item as the "All" sentinel.
    pub fn all_sentinel(mut self) -> Self {
        self.role = ItemRole::AllSentinel;
        self
    }

    /// Mark this item as the unique (exclusive) entry.
    pub fn unique(mut self) -> Self {
        self.role = ItemRole::Unique;
        self
    }

    pub fn is_all_sentinel(&self) -> bool {
        self.role == ItemRole::AllSentinel
    }

    pub fn is_unique(&self) -> bool {
        self.role == ItemRole::Unique
    }

    /// Whether this item stands for "no filter" when it is the whole selection.
    pub fn is_exclusive(&self) -> bool {
        self.role != ItemRole::Regular
    }
}

/// Public view of a marked item, as carried by change notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkedItem<V> {
    pub id: ItemId,
    pub title: String,
    pub value: V,
}

impl<V: Clone> From<&Item<V>> for MarkedItem<V> {
    fn from(item: &Item<V>) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            value: item.value.clone(),
        }
    }
}
