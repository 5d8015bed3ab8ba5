#![allow(dead_code)]

use checklist::{Item, Renderer};

/// A render request captured by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Patch { slot: usize, title: String, state: bool },
    Rerender { states: Vec<bool>, focus: Option<usize> },
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl<V> Renderer<V> for RecordingRenderer {
    fn patch_node(&mut self, slot: usize, item: &Item<V>) {
        self.calls.push(RenderCall::Patch {
            slot,
            title: item.title.clone(),
            state: item.state,
        });
    }

    fn rerender_all(&mut self, items: &[Item<V>], focus_index: Option<usize>) {
        self.calls.push(RenderCall::Rerender {
            states: items.iter().map(|item| item.state).collect(),
            focus: focus_index,
        });
    }
}

/// "All" sentinel at index 0 followed by `titles`.
pub fn sentinel_list(states: &[bool], titles: &[&str]) -> Vec<Item<u32>> {
    let mut items = vec![Item::new("all", "All", 0).all_sentinel()];
    items.extend(
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| Item::new(title.to_lowercase(), *title, i as u32 + 1)),
    );
    for (item, &state) in items.iter_mut().zip(states) {
        item.state = state;
    }
    items
}

/// Regular items `titles`, followed by a unique "Any" entry.
pub fn unique_list(states: &[bool], titles: &[&str]) -> Vec<Item<u32>> {
    let mut items: Vec<Item<u32>> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| Item::new(title.to_lowercase(), *title, i as u32))
        .collect();
    items.push(Item::new("any", "Any", 99).unique());
    for (item, &state) in items.iter_mut().zip(states) {
        item.state = state;
    }
    items
}

pub fn plain_list(count: usize) -> Vec<Item<u32>> {
    (0..count)
        .map(|i| Item::new(format!("item-{i}"), format!("Item {i}"), i as u32))
        .collect()
}
