//! Add/edit/delete flow shared by both views: the open editor and the
//! delete awaiting confirmation.

use shared::domain::{Section, SectionId};
use tracing::{debug, info};

use crate::{
    editor::SectionEditor,
    error::EditError,
    store::{position_of, without_section, Commit, CommitReason, SaveKind, SavedSection},
};

#[derive(Debug, Clone, Default)]
pub struct SectionEditing {
    editor: Option<SectionEditor>,
    pending_delete: Option<SectionId>,
}

impl SectionEditing {
    pub fn editor(&self) -> Option<&SectionEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut SectionEditor> {
        self.editor.as_mut()
    }

    pub fn open_new(&mut self) {
        self.editor = Some(SectionEditor::open(None));
    }

    /// Opens the editor on an existing section. Unknown ids leave it closed.
    pub fn open_existing(&mut self, sections: &[Section], id: &SectionId) -> bool {
        let Some(section) = sections.iter().find(|s| &s.id == id) else {
            debug!(section_id = %id, "cannot edit unknown section");
            return false;
        };
        self.editor = Some(SectionEditor::open(Some(section)));
        true
    }

    /// Closes the editor and discards the draft. The section is untouched.
    pub fn cancel_editor(&mut self) {
        if self.editor.take().is_some() {
            debug!("section editor closed without saving");
        }
    }

    pub fn submit(&mut self) -> Result<SavedSection, EditError> {
        let editor = self.editor.as_mut().ok_or(EditError::NotEditing)?;
        if editor.is_saving() {
            return Err(EditError::AlreadySaving);
        }
        Ok(editor.prepare_save()?)
    }

    /// Merges a landed save into `sections` and closes the editor that
    /// produced it.
    pub fn complete_save(&mut self, saved: &SavedSection, sections: &[Section]) -> Option<Commit> {
        let produced_by_open_editor = self.editor.as_ref().is_some_and(|editor| {
            editor.is_saving()
                && match saved.kind {
                    SaveKind::Insert => editor.is_new(),
                    SaveKind::Update => editor.section_id() == Some(&saved.section.id),
                }
        });
        if produced_by_open_editor {
            self.editor = None;
        }

        let updated = saved.apply_to(sections)?;
        let reason = match saved.kind {
            SaveKind::Insert => CommitReason::Added,
            SaveKind::Update => CommitReason::Edited,
        };
        info!(section_id = %saved.section.id, ?reason, "section saved");
        Some(Commit::new(updated, reason))
    }

    pub fn pending_delete(&self) -> Option<&SectionId> {
        self.pending_delete.as_ref()
    }

    pub fn request_delete(&mut self, sections: &[Section], id: &SectionId) -> bool {
        if position_of(sections, id).is_none() {
            return false;
        }
        self.pending_delete = Some(id.clone());
        true
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self, sections: &[Section]) -> Option<Commit> {
        let id = self.pending_delete.take()?;
        if position_of(sections, &id).is_none() {
            return None;
        }
        info!(section_id = %id, "section deleted");
        Some(Commit::new(without_section(sections, &id), CommitReason::Deleted))
    }
}
