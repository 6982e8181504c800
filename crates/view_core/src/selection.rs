//! Default selection per configuration mode.
//!
//! Accordion selection is keyed by section id; tabs selection is an index into
//! the order-sorted sequence. Unknown chosen ids degrade silently: empty for
//! the accordion, index 0 for tabs.

use std::{collections::BTreeMap, fmt};

use shared::domain::{AccordionDefaultExpanded, Section, SectionId, TabsDefaultActive};
use tracing::debug;

use crate::store::position_of;

pub trait SelectionPolicy: Copy + Eq + fmt::Debug {
    type Selection: Clone + PartialEq + fmt::Debug;

    /// Selection to use right after mount or a configuration/membership change.
    fn initial(self, sorted: &[Section], chosen: Option<&SectionId>) -> Self::Selection;

    /// Keeps a live selection usable after a pure reorder or no-op update.
    fn revalidate(selection: Self::Selection, sorted: &[Section]) -> Self::Selection;
}

/// Expanded flags by section id. Absent means collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSections(BTreeMap<SectionId, bool>);

impl ExpandedSections {
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a SectionId>) -> Self {
        Self(ids.into_iter().map(|id| (id.clone(), true)).collect())
    }

    pub fn is_expanded(&self, id: &SectionId) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Flips one section; others are left alone.
    pub fn toggle(&mut self, id: &SectionId) -> bool {
        let next = !self.is_expanded(id);
        self.0.insert(id.clone(), next);
        next
    }

    pub fn expanded_ids(&self) -> Vec<&SectionId> {
        self.0
            .iter()
            .filter_map(|(id, expanded)| expanded.then_some(id))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded_ids().is_empty()
    }
}

impl SelectionPolicy for AccordionDefaultExpanded {
    type Selection = ExpandedSections;

    fn initial(self, sorted: &[Section], chosen: Option<&SectionId>) -> ExpandedSections {
        match self {
            Self::None => ExpandedSections::default(),
            Self::First => ExpandedSections::from_ids(sorted.first().map(|s| &s.id)),
            Self::All => ExpandedSections::from_ids(sorted.iter().map(|s| &s.id)),
            Self::Chosen => match chosen.filter(|id| position_of(sorted, id).is_some()) {
                Some(id) => ExpandedSections::from_ids([id]),
                None => {
                    debug!(chosen = ?chosen, "chosen accordion section not found; nothing expanded");
                    ExpandedSections::default()
                }
            },
        }
    }

    fn revalidate(selection: ExpandedSections, _sorted: &[Section]) -> ExpandedSections {
        selection
    }
}

impl SelectionPolicy for TabsDefaultActive {
    type Selection = usize;

    fn initial(self, sorted: &[Section], chosen: Option<&SectionId>) -> usize {
        if sorted.is_empty() {
            return 0;
        }
        match self {
            Self::First => 0,
            Self::Last => sorted.len() - 1,
            Self::Chosen => match chosen.and_then(|id| position_of(sorted, id)) {
                Some(index) => index,
                None => {
                    debug!(chosen = ?chosen, "chosen tab not found; falling back to first");
                    0
                }
            },
        }
    }

    fn revalidate(selection: usize, sorted: &[Section]) -> usize {
        clamp_active_index(selection, sorted.len())
    }
}

/// 0 for an empty sequence, otherwise the index capped at the last tab.
pub fn clamp_active_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index >= len {
        debug!(index, len, "clamping active tab to last index");
        len - 1
    } else {
        index
    }
}
