//! Check-list configuration.
//!
//! Follows the JSON shape hosts already use for check-list modals, with one
//! addition: the selection policy comes from an explicit `role` on an item
//! (`"allSentinel"` or `"unique"`). A config without roles, including one
//! written for older hosts that treated the first item as "all", loads with
//! independent checkboxes.
//!
//! ```json
//! {
//!     "title": "sort",
//!     "labelIcon": "theme-icon-filter",
//!     "list": {
//!         "size": 2,
//!         "data": [
//!             {"state": true, "title": "All content", "value": 1, "role": "allSentinel"},
//!             {"state": false, "title": "Music", "value": 2},
//!             {"state": false, "title": "Video", "value": 3}
//!         ]
//!     }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;
use crate::item::{Item, ItemId, ItemRole};
use crate::viewport::DEFAULT_WINDOW_SIZE;

/// Top-level check-list modal config.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistConfig {
    /// Modal title.
    #[serde(default)]
    pub title: Option<String>,
    /// Icon shown before the summary label.
    #[serde(default)]
    pub label_icon: Option<String>,
    pub list: ListConfig,
}

/// The list part of a check-list config.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConfig {
    /// Rows rendered at once.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Row focused after the first render.
    #[serde(default)]
    pub focus_index: Option<usize>,
    pub data: Vec<ItemConfig>,
}

/// One entry of `list.data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemConfig {
    /// Defaults to the item's position.
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub state: bool,
    #[serde(default)]
    pub role: ItemRole,
}

fn default_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

impl ChecklistConfig {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] for malformed JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded check-list config from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Build the list items described by this config.
    pub fn items(&self) -> Vec<Item<Value>> {
        self.list
            .data
            .iter()
            .enumerate()
            .map(|(index, entry)| Item {
                id: entry
                    .id
                    .clone()
                    .map_or_else(|| ItemId::new(index.to_string()), ItemId::from),
                title: entry.title.clone(),
                value: entry.value.clone(),
                state: entry.state,
                role: entry.role,
            })
            .collect()
    }
}
