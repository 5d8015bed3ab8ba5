//! Selection reconciliation.
//!
//! [`reconcile`] is a pure transition: it reads the store, the active
//! [`SelectionPolicy`] and the [`Viewport`], and describes the states that
//! follow a toggle together with the cheapest render step that shows them.
//! Nothing is mutated here; the controller applies the result.

use crate::error::{ChecklistError, Result};
use crate::store::ItemStore;
use crate::viewport::Viewport;

/// How a check list resolves toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Independent checkboxes.
    Plain,
    /// The item at `sentinel` means "everything" and excludes all others.
    AllSentinel { sentinel: usize },
    /// The item at `unique` stands alone and replaces a full selection.
    Unique { unique: usize },
}

impl SelectionPolicy {
    /// Pick the policy that matches the roles present in `store`.
    pub fn detect<V>(store: &ItemStore<V>) -> Self {
        match (store.index_of_sentinel(), store.index_of_unique()) {
            (Some(sentinel), _) => Self::AllSentinel { sentinel },
            (None, Some(unique)) => Self::Unique { unique },
            (None, None) => Self::Plain,
        }
    }

    /// Index of the item selected when the policy forbids an empty selection.
    pub fn default_index(&self) -> Option<usize> {
        match *self {
            Self::Plain => None,
            Self::AllSentinel { sentinel } => Some(sentinel),
            Self::Unique { unique } => Some(unique),
        }
    }

    /// Rewrite `states` into the canonical form required by the policy.
    ///
    /// Returns true if anything changed.
    pub fn normalize(&self, states: &mut [bool]) -> bool {
        let Some(keep) = self.default_index().filter(|&keep| keep < states.len()) else {
            return false;
        };
        let others = states
            .iter()
            .enumerate()
            .filter(|&(index, &state)| index != keep && state)
            .count();
        let all_others = others + 1 == states.len();

        let collapse = if states[keep] {
            others > 0
        } else {
            others == 0 || all_others
        };
        if collapse {
            collapse_to(states, keep);
        }
        collapse
    }
}

/// Minimal refresh needed to show a reconciled state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDirective {
    /// Repaint these already-rendered rows in place (logical indices).
    PatchNodes(Vec<usize>),
    /// Rebuild the whole visible window.
    FullRerender,
}

impl RenderDirective {
    fn patch_or_rerender(viewport: &Viewport, index: usize) -> Self {
        if viewport.is_rendered(index) {
            Self::PatchNodes(vec![index])
        } else {
            Self::FullRerender
        }
    }

    pub fn is_full_rerender(&self) -> bool {
        matches!(self, Self::FullRerender)
    }
}

/// Which rule resolved a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A single item was flipped.
    Flipped,
    /// The selection collapsed to the sentinel or unique item alone.
    Collapsed,
    /// The sentinel was released in favour of the toggled item.
    SentinelReleased,
    /// The unique item was released in favour of the toggled item.
    UniqueReleased,
    /// The unique item was selected and everything else cleared.
    UniqueSelected,
    /// The unique item is the whole selection and cannot be cleared.
    Pinned,
}

/// Result of reconciling one toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Checked state of every item after the toggle.
    pub states: Vec<bool>,
    pub directive: RenderDirective,
    /// Checked indices after the toggle, ascending.
    pub marked: Vec<usize>,
    pub outcome: ToggleOutcome,
}

impl Reconciliation {
    fn new(states: Vec<bool>, directive: RenderDirective, outcome: ToggleOutcome) -> Self {
        let marked = marked_of(&states);
        Self {
            states,
            directive,
            marked,
            outcome,
        }
    }

    fn collapsed(mut states: Vec<bool>, keep: usize) -> Self {
        collapse_to(&mut states, keep);
        Self::new(states, RenderDirective::FullRerender, ToggleOutcome::Collapsed)
    }
}

/// Compute the effect of toggling `toggled`.
///
/// # Errors
///
/// Returns [`ChecklistError::IndexOutOfRange`] if `toggled` is not an item.
pub fn reconcile<V>(
    policy: SelectionPolicy,
    store: &ItemStore<V>,
    viewport: &Viewport,
    toggled: usize,
) -> Result<Reconciliation> {
    let len = store.len();
    if toggled >= len {
        return Err(ChecklistError::IndexOutOfRange {
            index: toggled,
            len,
        });
    }

    let states = store.states();
    let result = match policy {
        SelectionPolicy::Plain => plain(states, viewport, toggled),
        SelectionPolicy::AllSentinel { sentinel } => {
            all_sentinel(states, viewport, sentinel, toggled)
        }
        SelectionPolicy::Unique { unique } => unique_flag(states, viewport, unique, toggled),
    };

    log::trace!(
        "reconcile {:?} toggled={} -> {:?} {:?}",
        policy,
        toggled,
        result.outcome,
        result.directive
    );
    Ok(result)
}

fn plain(mut states: Vec<bool>, viewport: &Viewport, toggled: usize) -> Reconciliation {
    states[toggled] = !states[toggled];
    Reconciliation::new(
        states,
        RenderDirective::patch_or_rerender(viewport, toggled),
        ToggleOutcome::Flipped,
    )
}

fn all_sentinel(
    mut states: Vec<bool>,
    viewport: &Viewport,
    sentinel: usize,
    toggled: usize,
) -> Reconciliation {
    let len = states.len();
    let inherited_full = !states[sentinel] && count_except(&states, sentinel) + 1 == len;

    states[toggled] = !states[toggled];
    let marked = count_marked(&states);
    let sentinel_marked = states[sentinel];

    // Collapse always wins over a partial update.
    let collapse = inherited_full
        || marked == 0
        || (sentinel_marked && marked > 1 && toggled == sentinel)
        || (!sentinel_marked && marked + 1 == len);
    if collapse {
        return Reconciliation::collapsed(states, sentinel);
    }

    if sentinel_marked && marked > 1 {
        states[sentinel] = false;
        if count_marked(&states) + 1 == len {
            return Reconciliation::collapsed(states, sentinel);
        }
        let directive = if viewport.is_rendered(sentinel) {
            RenderDirective::FullRerender
        } else {
            RenderDirective::patch_or_rerender(viewport, toggled)
        };
        return Reconciliation::new(states, directive, ToggleOutcome::SentinelReleased);
    }

    Reconciliation::new(
        states,
        RenderDirective::patch_or_rerender(viewport, toggled),
        ToggleOutcome::Flipped,
    )
}

fn unique_flag(
    mut states: Vec<bool>,
    viewport: &Viewport,
    unique: usize,
    toggled: usize,
) -> Reconciliation {
    let len = states.len();

    if !states[unique] && count_except(&states, unique) + 1 == len {
        return Reconciliation::collapsed(states, unique);
    }

    if toggled == unique {
        if !states[unique] {
            collapse_to(&mut states, unique);
            return Reconciliation::new(
                states,
                RenderDirective::FullRerender,
                ToggleOutcome::UniqueSelected,
            );
        }
        if count_except(&states, unique) == 0 {
            return Reconciliation::new(
                states,
                RenderDirective::patch_or_rerender(viewport, unique),
                ToggleOutcome::Pinned,
            );
        }
        states[unique] = false;
        if count_except(&states, unique) + 1 == len {
            return Reconciliation::collapsed(states, unique);
        }
        return Reconciliation::new(
            states,
            RenderDirective::patch_or_rerender(viewport, unique),
            ToggleOutcome::Flipped,
        );
    }

    let released = states[unique];
    states[unique] = false;
    states[toggled] = !states[toggled];

    let others = count_except(&states, unique);
    if others == 0 || others + 1 == len {
        return Reconciliation::collapsed(states, unique);
    }

    if !released {
        return Reconciliation::new(
            states,
            RenderDirective::patch_or_rerender(viewport, toggled),
            ToggleOutcome::Flipped,
        );
    }

    let directive = if viewport.is_rendered(toggled) {
        let mut patched = Vec::with_capacity(2);
        if viewport.is_rendered(unique) {
            patched.push(unique);
        }
        patched.push(toggled);
        RenderDirective::PatchNodes(patched)
    } else {
        RenderDirective::FullRerender
    };
    Reconciliation::new(states, directive, ToggleOutcome::UniqueReleased)
}

fn collapse_to(states: &mut [bool], keep: usize) {
    for (index, state) in states.iter_mut().enumerate() {
        *state = index == keep;
    }
}

fn count_marked(states: &[bool]) -> usize {
    states.iter().filter(|&&state| state).count()
}

fn count_except(states: &[bool], skip: usize) -> usize {
    states
        .iter()
        .enumerate()
        .filter(|&(index, &state)| index != skip && state)
        .count()
}

fn marked_of(states: &[bool]) -> Vec<usize> {
    states
        .iter()
        .enumerate()
        .filter_map(|(index, &state)| state.then_some(index))
        .collect()
}
