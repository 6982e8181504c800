//! Accordion layout: any number of sections expanded at once.

use shared::{
    domain::{AccordionDefaultExpanded, Direction, Section, SectionId},
    strings,
};
use tracing::debug;

use crate::{
    controller::{UpdateKind, ViewController, ViewInput},
    editing::SectionEditing,
    error::EditError,
    reorder::move_section,
    selection::ExpandedSections,
    store::{Commit, CommitReason, SavedSection},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAction {
    Edit,
    MoveUp,
    MoveDown,
    Delete,
}

impl SectionAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => strings::EDIT_SECTION_BUTTON,
            Self::MoveUp => strings::MOVE_UP_BUTTON,
            Self::MoveDown => strings::MOVE_DOWN_BUTTON,
            Self::Delete => strings::DELETE_SECTION_BUTTON,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    Content(String),
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    pub id: SectionId,
    pub title: String,
    pub expanded: bool,
    /// Present only while expanded.
    pub body: Option<PanelBody>,
    pub actions: Vec<SectionAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccordionRender {
    Empty(&'static str),
    Panels {
        items: Vec<AccordionItem>,
        show_add: bool,
    },
}

pub(crate) fn body_for(section: &Section) -> PanelBody {
    if section.content.is_empty() {
        PanelBody::Placeholder(strings::NO_CONTENT_AVAILABLE)
    } else {
        PanelBody::Content(section.content.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccordionView {
    controller: ViewController<AccordionDefaultExpanded>,
    edit_mode: bool,
    editing: SectionEditing,
}

impl AccordionView {
    pub fn new(edit_mode: bool) -> Self {
        Self {
            edit_mode,
            ..Self::default()
        }
    }

    pub fn update(&mut self, input: ViewInput<AccordionDefaultExpanded>) -> UpdateKind {
        self.controller.update(input)
    }

    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.edit_mode = edit_mode;
        if !edit_mode {
            self.editing = SectionEditing::default();
        }
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn expanded(&self) -> ExpandedSections {
        self.controller.selection().cloned().unwrap_or_default()
    }

    pub fn is_expanded(&self, id: &SectionId) -> bool {
        self.controller
            .selection()
            .is_some_and(|expanded| expanded.is_expanded(id))
    }

    /// Flips one panel without collapsing the others.
    pub fn toggle(&mut self, id: &SectionId) {
        self.controller.select_with(|expanded| {
            let now = expanded.toggle(id);
            debug!(section_id = %id, expanded = now, "accordion panel toggled");
        });
    }

    /// Move up (`Earlier`) or down (`Later`). Expanded flags are keyed by id
    /// and need no remapping.
    pub fn move_section(&mut self, id: &SectionId, direction: Direction) -> Option<Commit> {
        if !self.edit_mode {
            return None;
        }
        let outcome = move_section(self.controller.sections(), id, direction)?;
        Some(Commit::new(outcome.sections, CommitReason::Reordered))
    }

    pub fn editing(&self) -> &SectionEditing {
        &self.editing
    }

    pub fn editing_mut(&mut self) -> &mut SectionEditing {
        &mut self.editing
    }

    pub fn open_new_section(&mut self) -> Result<(), EditError> {
        self.ensure_edit_mode()?;
        self.editing.open_new();
        Ok(())
    }

    pub fn open_section(&mut self, id: &SectionId) -> Result<bool, EditError> {
        self.ensure_edit_mode()?;
        Ok(self.editing.open_existing(self.controller.sections(), id))
    }

    pub fn submit_editor(&mut self) -> Result<SavedSection, EditError> {
        self.ensure_edit_mode()?;
        self.editing.submit()
    }

    pub fn complete_save(&mut self, saved: &SavedSection) -> Option<Commit> {
        self.editing.complete_save(saved, self.controller.sections())
    }

    pub fn request_delete(&mut self, id: &SectionId) -> bool {
        self.edit_mode && self.editing.request_delete(self.controller.sections(), id)
    }

    pub fn confirm_delete(&mut self) -> Option<Commit> {
        self.editing.confirm_delete(self.controller.sections())
    }

    fn ensure_edit_mode(&self) -> Result<(), EditError> {
        if self.edit_mode {
            Ok(())
        } else {
            Err(EditError::ReadOnly)
        }
    }

    pub fn render(&self) -> AccordionRender {
        let sorted = self.controller.sorted_sections();
        if sorted.is_empty() && !self.edit_mode {
            return AccordionRender::Empty(strings::NO_SECTIONS_CONFIGURED);
        }

        let last = sorted.len().saturating_sub(1);
        let items = sorted
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let expanded = self.is_expanded(&section.id);
                let mut actions = Vec::new();
                if self.edit_mode {
                    actions.push(SectionAction::Edit);
                    if index > 0 {
                        actions.push(SectionAction::MoveUp);
                    }
                    if index < last {
                        actions.push(SectionAction::MoveDown);
                    }
                    actions.push(SectionAction::Delete);
                }
                AccordionItem {
                    id: section.id.clone(),
                    title: section.title.clone(),
                    expanded,
                    body: expanded.then(|| body_for(section)),
                    actions,
                }
            })
            .collect();

        AccordionRender::Panels {
            items,
            show_add: self.edit_mode,
        }
    }
}
