//! Selection summary shown next to the list entry point.
//!
//! The label names at most two marked items and counts the rest. The
//! overflow count is always the number of marked items that the text does
//! not name, so `"A, B"` for three items is `+1` and `"A"` for three is `+2`.

use unicode_width::UnicodeWidthStr;

use crate::item::Item;

/// Separator between the two titles of a summary.
pub const TITLE_SEPARATOR: &str = ", ";

/// Decides whether a candidate label fits the space available for it.
pub trait WidthMeasurer {
    /// True if rendering `candidate` would overflow the label area.
    fn would_overflow(&self, candidate: &str) -> bool;
}

impl<F> WidthMeasurer for F
where
    F: Fn(&str) -> bool,
{
    fn would_overflow(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// Measurer for labels without a width constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl WidthMeasurer for Unbounded {
    fn would_overflow(&self, _candidate: &str) -> bool {
        false
    }
}

/// Measurer for a label area `columns` terminal cells wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharBudget(pub usize);

impl WidthMeasurer for CharBudget {
    fn would_overflow(&self, candidate: &str) -> bool {
        candidate.width() > self.0
    }
}

/// Display summary of a selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub text: String,
    /// Marked items not named in `text`.
    pub overflow_count: usize,
    /// Whether the selection narrows the list (not empty, not the
    /// sentinel or unique item alone).
    pub active: bool,
}

impl Summary {
    /// Counter badge text, e.g. `"+3"`. `None` when nothing overflows.
    pub fn counter_label(&self) -> Option<String> {
        (self.overflow_count > 0).then(|| format!("+{}", self.overflow_count))
    }
}

/// Builds [`Summary`] values from marked items.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Summarize `marked`.
    ///
    /// `fallback_title` is shown when nothing is marked, typically the
    /// title of the sentinel or unique item.
    pub fn format<V>(
        marked: &[&Item<V>],
        fallback_title: &str,
        measurer: &dyn WidthMeasurer,
    ) -> Summary {
        match marked {
            [] => Summary {
                text: fallback_title.to_string(),
                overflow_count: 0,
                active: false,
            },
            [only] => Summary {
                text: only.title.clone(),
                overflow_count: 0,
                active: !only.is_exclusive(),
            },
            [first, second, ..] => {
                let both = format!("{}{}{}", first.title, TITLE_SEPARATOR, second.title);
                if measurer.would_overflow(&both) {
                    Summary {
                        text: first.title.clone(),
                        overflow_count: marked.len() - 1,
                        active: true,
                    }
                } else {
                    Summary {
                        text: both,
                        overflow_count: marked.len() - 2,
                        active: true,
                    }
                }
            }
        }
    }
}
