//! Virtualization window over the logical item sequence.
//!
//! The host list only materializes rows inside the window. A row outside it
//! has no visual node, so changes to it can only show up through a full
//! re-render of the window.

use std::ops::Range;

/// Rows rendered when the config does not specify a window size.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Rendered window of a virtualized list.
///
/// # Example
///
/// ```
/// use checklist::Viewport;
///
/// let mut viewport = Viewport::new(10, 3);
/// viewport.resize(4, 3);
/// assert!(viewport.is_rendered(5));
/// assert_eq!(viewport.slot_of(5), Some(1));
/// assert_eq!(viewport.slot_of(7), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Index of the first rendered item.
    offset: usize,
    /// Number of rows the window can hold.
    window_size: usize,
    /// Total number of logical items.
    len: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: 0,
            window_size: DEFAULT_WINDOW_SIZE,
            len: 0,
        }
    }
}

impl Viewport {
    /// Create a window at offset 0 over `len` items.
    pub fn new(len: usize, window_size: usize) -> Self {
        Self {
            offset: 0,
            window_size: clamp_window(window_size),
            len,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move and/or resize the window. Called by the host on scroll.
    pub fn resize(&mut self, offset: usize, window_size: usize) {
        self.offset = offset;
        self.window_size = clamp_window(window_size);
    }

    /// Set the number of logical items (after the data was replaced).
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Logical indices currently materialized, clamped to the item count.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.len);
        let end = self.offset.saturating_add(self.window_size).min(self.len);
        start..end
    }

    pub fn is_rendered(&self, index: usize) -> bool {
        self.visible_range().contains(&index)
    }

    /// Rendered slot of `index`, or `None` when it is off-screen.
    pub fn slot_of(&self, index: usize) -> Option<usize> {
        self.is_rendered(index).then(|| index - self.offset)
    }

    /// Logical index shown in `slot`, if that slot holds an item.
    pub fn index_of_slot(&self, slot: usize) -> Option<usize> {
        let index = self.offset.checked_add(slot)?;
        (slot < self.window_size && index < self.len).then_some(index)
    }

    /// Whether the content exceeds the window (a scrollbar is needed).
    pub fn can_scroll(&self) -> bool {
        self.len > self.window_size
    }

    /// Move the window the least distance that makes `index` visible.
    ///
    /// Returns the new offset; the window stays put when `index` is already
    /// rendered.
    pub fn scroll_into_view(&mut self, index: usize) -> usize {
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset.saturating_add(self.window_size) {
            self.offset = index + 1 - self.window_size;
        }
        self.offset
    }
}

fn clamp_window(window_size: usize) -> usize {
    if window_size == 0 {
        log::warn!("Viewport window size 0 requested, using 1");
        1
    } else {
        window_size
    }
}
