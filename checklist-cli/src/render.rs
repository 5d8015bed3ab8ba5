//! Plain-text renderer printing check-list rows.

use std::io::Write;

use checklist::{Item, Renderer};

/// Writes every render request as text rows.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_row<V>(&mut self, prefix: &str, item: &Item<V>) {
        let mark = if item.state { "[x]" } else { "[ ]" };
        if let Err(e) = writeln!(self.out, "{prefix}{mark} {}", item.title) {
            log::warn!("Failed to write row: {}", e);
        }
    }
}

impl<V, W: Write> Renderer<V> for TextRenderer<W> {
    fn patch_node(&mut self, slot: usize, item: &Item<V>) {
        self.write_row(&format!("  slot {slot}: "), item);
    }

    fn rerender_all(&mut self, items: &[Item<V>], focus_index: Option<usize>) {
        for (index, item) in items.iter().enumerate() {
            let prefix = if Some(index) == focus_index { "  > " } else { "    " };
            self.write_row(prefix, item);
        }
    }
}
