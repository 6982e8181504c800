//! Section collection owned by the host, plus the whole-collection edits the
//! views hand back to it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shared::domain::{Section, SectionId};
use tracing::{debug, warn};

/// Ordered collection of sections as persisted by the host.
///
/// Physical order is whatever the host stored; readers sort by `order`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionStore {
    sections: Vec<Section>,
}

impl SectionStore {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn snapshot(&self) -> &[Section] {
        &self.sections
    }

    pub fn sorted(&self) -> Vec<Section> {
        sort_sections(&self.sections)
    }

    /// Atomically swaps in a new collection. This is the only mutation.
    pub fn replace_all(&mut self, sections: Vec<Section>) {
        debug!(
            previous = self.sections.len(),
            next = sections.len(),
            "replacing section collection"
        );
        self.sections = sections;
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }
}

/// Stable ascending sort by `order`.
pub fn sort_sections(sections: &[Section]) -> Vec<Section> {
    let mut sorted = sections.to_vec();
    sorted.sort_by_key(|s| s.order);
    sorted
}

pub fn identity_set(sections: &[Section]) -> BTreeSet<&SectionId> {
    sections.iter().map(|s| &s.id).collect()
}

pub fn position_of(sorted: &[Section], id: &SectionId) -> Option<usize> {
    sorted.iter().position(|s| &s.id == id)
}

/// Order key for a newly appended section.
pub fn next_order(sections: &[Section]) -> i64 {
    sections.iter().map(|s| s.order).max().map_or(0, |max| max + 1)
}

pub fn without_section(sections: &[Section], id: &SectionId) -> Vec<Section> {
    sections.iter().filter(|s| &s.id != id).cloned().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Insert,
    Update,
}

/// A section produced by the editor, waiting to be merged into whatever
/// collection is current when the save lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSection {
    pub section: Section,
    pub kind: SaveKind,
}

impl SavedSection {
    /// Merges into `sections`. Inserts are appended after the current
    /// maximum order; updates replace title and content of the entry with
    /// the same id. An update whose section has since been deleted is dropped.
    pub fn apply_to(&self, sections: &[Section]) -> Option<Vec<Section>> {
        match self.kind {
            SaveKind::Insert => {
                let mut section = self.section.clone();
                section.order = next_order(sections);
                let mut updated = sections.to_vec();
                updated.push(section);
                Some(updated)
            }
            SaveKind::Update => {
                if position_of(sections, &self.section.id).is_none() {
                    warn!(
                        section_id = %self.section.id,
                        "dropping save for a section that no longer exists"
                    );
                    return None;
                }
                Some(
                    sections
                        .iter()
                        .map(|s| {
                            if s.id == self.section.id {
                                // a reorder may have landed since the editor opened
                                Section {
                                    order: s.order,
                                    ..self.section.clone()
                                }
                            } else {
                                s.clone()
                            }
                        })
                        .collect(),
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitReason {
    Added,
    Edited,
    Deleted,
    Reordered,
}

/// Full replacement collection handed to the host. The view keeps no copy:
/// it sees the result again only when the host feeds it back in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub sections: Vec<Section>,
    pub reason: CommitReason,
}

impl Commit {
    pub fn new(sections: Vec<Section>, reason: CommitReason) -> Self {
        Self { sections, reason }
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }
}
