//! Check-list selection controller.

use serde::Serialize;
use serde_json::Value;

use crate::config::ChecklistConfig;
use crate::error::{ConfigError, Result};
use crate::item::{Item, MarkedItem};
use crate::reconcile::{RenderDirective, SelectionPolicy, reconcile};
use crate::render::Renderer;
use crate::store::ItemStore;
use crate::summary::{Summary, SummaryFormatter, Unbounded, WidthMeasurer};
use crate::viewport::Viewport;

/// Notification emitted after every state-affecting operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionChanged<V> {
    pub marked: Vec<MarkedItem<V>>,
    pub text: String,
    pub overflow_count: usize,
}

type Listener<V> = Box<dyn FnMut(&SelectionChanged<V>)>;

/// Owns a check list's items and drives toggles through the reconciler.
///
/// The controller is single-threaded: every operation runs to completion and
/// either fully applies or leaves the state untouched.
///
/// # Example
///
/// ```
/// use checklist::{ChecklistController, Item, NullRenderer};
///
/// let items = vec![
///     Item::new("all", "All content", 1).checked(true).all_sentinel(),
///     Item::new("music", "Music", 2),
///     Item::new("video", "Video", 3),
/// ];
/// let mut checklist = ChecklistController::new(items, 5, NullRenderer).unwrap();
///
/// let changed = checklist.toggle(1).unwrap();
/// assert_eq!(changed.text, "Music");
/// assert_eq!(checklist.store().states(), vec![false, true, false]);
/// ```
pub struct ChecklistController<V, R> {
    store: ItemStore<V>,
    policy: SelectionPolicy,
    viewport: Viewport,
    renderer: R,
    measurer: Box<dyn WidthMeasurer>,
    focus_index: Option<usize>,
    summary: Summary,
    listeners: Vec<Listener<V>>,
}

impl<V: Clone, R: Renderer<V>> ChecklistController<V, R> {
    /// Build a controller over `items` with a window of `window_size` rows.
    ///
    /// Item states are kept as supplied. A state that breaks the policy is
    /// resolved by the next toggle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChecklistError::InvalidConfig`] if `items` cannot back
    /// a check list.
    pub fn new(items: Vec<Item<V>>, window_size: usize, renderer: R) -> Result<Self> {
        let store = ItemStore::new(items)?;
        let policy = SelectionPolicy::detect(&store);
        let viewport = Viewport::new(store.len(), window_size);
        log::debug!(
            "Check list created: {} items, policy {:?}, window {}",
            store.len(),
            policy,
            viewport.window_size()
        );

        let mut controller = Self {
            store,
            policy,
            viewport,
            renderer,
            measurer: Box::new(Unbounded),
            focus_index: None,
            summary: Summary::default(),
            listeners: Vec::new(),
        };
        controller.summary = controller.compute_summary();
        Ok(controller)
    }

    /// Use `measurer` to decide when the two-title label is too wide.
    pub fn with_measurer(mut self, measurer: impl WidthMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self.summary = self.compute_summary();
        self
    }

    /// Register a `selection-changed` listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&SelectionChanged<V>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn store(&self) -> &ItemStore<V> {
        &self.store
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus_index
    }

    /// Current label summary.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn marked_items(&self) -> Vec<MarkedItem<V>> {
        self.store
            .marked_items()
            .into_iter()
            .map(MarkedItem::from)
            .collect()
    }

    /// Count shown in the modal header: items other than the sentinel or
    /// unique entry.
    pub fn header_count(&self) -> usize {
        self.store.selectable_count()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Toggle the item at `index` and reconcile the selection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChecklistError::IndexOutOfRange`] if `index` is not an
    /// item. Nothing is mutated in that case.
    pub fn toggle(&mut self, index: usize) -> Result<SelectionChanged<V>> {
        let result = reconcile(self.policy, &self.store, &self.viewport, index)?;
        log::debug!(
            "Toggle {}: {:?}, marked {:?}",
            index,
            result.outcome,
            result.marked
        );

        self.store.apply_states(&result.states);
        self.focus_index = Some(index);
        self.execute(&result.directive);
        Ok(self.publish())
    }

    /// Replace every item and re-apply the policy's canonical form.
    ///
    /// The policy is detected again from the new items.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChecklistError::InvalidConfig`] if `items` cannot back
    /// a check list. The previous data stays in place.
    pub fn reset_data(&mut self, items: Vec<Item<V>>) -> Result<SelectionChanged<V>> {
        let mut store = ItemStore::new(items)?;
        let policy = SelectionPolicy::detect(&store);

        let mut states = store.states();
        if policy.normalize(&mut states) {
            log::debug!("Reset data normalized to {:?}", states);
            store.apply_states(&states);
        }

        self.store = store;
        self.policy = policy;
        self.viewport.set_len(self.store.len());
        self.focus_index = self.focus_index.filter(|&focus| focus < self.store.len());
        log::debug!(
            "Check list reset: {} items, policy {:?}",
            self.store.len(),
            self.policy
        );

        self.execute(&RenderDirective::FullRerender);
        Ok(self.publish())
    }

    /// Uncheck everything except the item the policy keeps selected.
    ///
    /// `focus_index` moves keyboard focus when it names an item.
    pub fn clear_checked(&mut self, focus_index: Option<usize>) -> SelectionChanged<V> {
        let keep = self.policy.default_index();
        let states: Vec<bool> = (0..self.store.len())
            .map(|index| Some(index) == keep)
            .collect();
        self.store.apply_states(&states);

        match focus_index {
            Some(focus) if focus < self.store.len() => self.focus_index = Some(focus),
            Some(focus) => log::warn!("Ignoring focus index {} outside the list", focus),
            None => {}
        }
        log::debug!("Cleared checked items, keeping {:?}", keep);

        self.execute(&RenderDirective::FullRerender);
        self.publish()
    }

    /// Move or resize the rendered window. Called by the host on scroll.
    pub fn resize_viewport(&mut self, offset: usize, window_size: usize) {
        self.viewport.resize(offset, window_size);
        log::trace!("Viewport now {:?}", self.viewport.visible_range());
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn execute(&mut self, directive: &RenderDirective) {
        if let RenderDirective::PatchNodes(indices) = directive {
            let targets: Option<Vec<_>> = indices
                .iter()
                .map(|&index| Some((self.viewport.slot_of(index)?, self.store.get(index)?)))
                .collect();
            if let Some(targets) = targets {
                for (slot, item) in targets {
                    self.renderer.patch_node(slot, item);
                }
                return;
            }
            log::warn!("Patch target left the window, re-rendering instead");
        }
        self.renderer
            .rerender_all(self.store.items(), self.focus_index);
    }

    fn compute_summary(&self) -> Summary {
        let fallback = self
            .policy
            .default_index()
            .and_then(|index| self.store.get(index))
            .map_or("", |item| item.title.as_str());
        SummaryFormatter::format(&self.store.marked_items(), fallback, self.measurer.as_ref())
    }

    fn publish(&mut self) -> SelectionChanged<V> {
        self.summary = self.compute_summary();
        let event = SelectionChanged {
            marked: self.marked_items(),
            text: self.summary.text.clone(),
            overflow_count: self.summary.overflow_count,
        };
        for listener in &mut self.listeners {
            listener(&event);
        }
        event
    }
}

impl<R: Renderer<Value>> ChecklistController<Value, R> {
    /// Build a controller from a parsed config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configured items cannot back a
    /// check list.
    pub fn from_config(
        config: &ChecklistConfig,
        renderer: R,
    ) -> std::result::Result<Self, ConfigError> {
        let mut controller = Self::new(config.items(), config.list.size, renderer)?;
        controller.focus_index = config
            .list
            .focus_index
            .filter(|&focus| focus < controller.store.len());
        Ok(controller)
    }
}

impl<V: std::fmt::Debug, R> std::fmt::Debug for ChecklistController<V, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChecklistController")
            .field("store", &self.store)
            .field("policy", &self.policy)
            .field("viewport", &self.viewport)
            .field("focus_index", &self.focus_index)
            .field("summary", &self.summary)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
