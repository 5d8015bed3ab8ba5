//! Rendering collaborator.

use crate::item::Item;

/// Visual side of a check list.
///
/// The controller never draws anything itself; it tells the renderer which
/// rows changed once a transition is decided.
pub trait Renderer<V> {
    /// Repaint the already-materialized row in `slot` to show `item`.
    fn patch_node(&mut self, slot: usize, item: &Item<V>);

    /// Rebuild the visible window from `items`, keeping keyboard focus on
    /// `focus_index` when given.
    fn rerender_all(&mut self, items: &[Item<V>], focus_index: Option<usize>);
}

/// Renderer for headless use. Drops every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl<V> Renderer<V> for NullRenderer {
    fn patch_node(&mut self, _slot: usize, _item: &Item<V>) {}

    fn rerender_all(&mut self, _items: &[Item<V>], _focus_index: Option<usize>) {}
}

impl<V, R: Renderer<V> + ?Sized> Renderer<V> for &mut R {
    fn patch_node(&mut self, slot: usize, item: &Item<V>) {
        (**self).patch_node(slot, item);
    }

    fn rerender_all(&mut self, items: &[Item<V>], focus_index: Option<usize>) {
        (**self).rerender_all(items, focus_index);
    }
}
