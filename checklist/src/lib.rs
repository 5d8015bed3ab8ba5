//! Selection core for check-list modals.
//!
//! A check list is an ordered set of checkable items, optionally with an
//! "All" sentinel or a unique (exclusive) entry, rendered through a
//! virtualized window. [`ChecklistController`] resolves toggles with the
//! active [`SelectionPolicy`], tells a [`Renderer`] the smallest refresh that
//! shows the result, and summarizes the selection for the list entry label.

pub mod config;
pub mod controller;
pub mod error;
pub mod item;
pub mod reconcile;
pub mod render;
pub mod store;
pub mod summary;
pub mod viewport;

pub use config::{ChecklistConfig, ItemConfig, ListConfig};
pub use controller::{ChecklistController, SelectionChanged};
pub use error::{ChecklistError, ConfigError, ConfigIssue};
pub use item::{Item, ItemId, ItemRole, MarkedItem};
pub use reconcile::{Reconciliation, RenderDirective, SelectionPolicy, ToggleOutcome, reconcile};
pub use render::{NullRenderer, Renderer};
pub use store::ItemStore;
pub use summary::{CharBudget, Summary, SummaryFormatter, Unbounded, WidthMeasurer};
pub use viewport::{DEFAULT_WINDOW_SIZE, Viewport};

pub mod prelude {
    pub use crate::controller::{ChecklistController, SelectionChanged};
    pub use crate::error::{ChecklistError, ConfigError};
    pub use crate::item::{Item, ItemRole};
    pub use crate::reconcile::{RenderDirective, SelectionPolicy};
    pub use crate::render::Renderer;
    pub use crate::summary::{Summary, WidthMeasurer};
    pub use crate::viewport::Viewport;
}
