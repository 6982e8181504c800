//! Tabs layout: exactly one active tab, tracked as an index into the sorted
//! sections.

use shared::{
    domain::{Direction, Section, SectionId, TabsDefaultActive},
    strings,
};
use tracing::debug;

use crate::{
    accordion::{body_for, PanelBody},
    controller::{UpdateKind, ViewController, ViewInput},
    editing::SectionEditing,
    error::EditError,
    reorder::{follow_identity, move_section},
    store::{position_of, Commit, CommitReason, SavedSection},
};

/// Horizontal travel needed before a drag turns into a move.
pub const DRAG_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Edit,
    MoveLeft,
    MoveRight,
    Delete,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => strings::EDIT_MENU_ITEM,
            Self::MoveLeft => strings::MOVE_LEFT_BUTTON,
            Self::MoveRight => strings::MOVE_RIGHT_BUTTON,
            Self::Delete => strings::DELETE_MENU_ITEM,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct DragGesture {
    section_id: SectionId,
    start_x: f64,
    start_y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabHeader {
    pub id: SectionId,
    pub title: String,
    pub active: bool,
    pub has_menu: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabsRender {
    Empty(&'static str),
    Tabs {
        headers: Vec<TabHeader>,
        pane: PanelBody,
        show_add: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct TabsView {
    controller: ViewController<TabsDefaultActive>,
    edit_mode: bool,
    editing: SectionEditing,
    menu_for: Option<SectionId>,
    drag: Option<DragGesture>,
}

impl TabsView {
    pub fn new(edit_mode: bool) -> Self {
        Self {
            edit_mode,
            ..Self::default()
        }
    }

    pub fn update(&mut self, input: ViewInput<TabsDefaultActive>) -> UpdateKind {
        let kind = self.controller.update(input);
        if let Some(id) = &self.menu_for {
            if position_of(self.controller.sections(), id).is_none() {
                self.menu_for = None;
            }
        }
        kind
    }

    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.edit_mode = edit_mode;
        if !edit_mode {
            self.editing = SectionEditing::default();
            self.menu_for = None;
            self.drag = None;
        }
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn active_index(&self) -> usize {
        self.controller.selection().copied().unwrap_or(0)
    }

    pub fn active_section(&self) -> Option<Section> {
        self.controller
            .sorted_sections()
            .into_iter()
            .nth(self.active_index())
    }

    /// Tab click. Indices past the end fall back to the first tab.
    pub fn select(&mut self, index: usize) {
        let len = self.controller.sections().len();
        let index = if index < len { index } else { 0 };
        self.controller.select_with(|active| *active = index);
    }

    /// Move left (`Earlier`) or right (`Later`); the active tab keeps
    /// pointing at the same section.
    pub fn move_section(&mut self, id: &SectionId, direction: Direction) -> Option<Commit> {
        if !self.edit_mode {
            return None;
        }
        let before = self.controller.sorted_sections();
        let outcome = move_section(&before, id, direction)?;
        let active = self.active_index();
        if let Some(followed) = follow_identity(&before, active, &outcome.sections) {
            if followed != active {
                debug!(from = active, to = followed, "active tab follows moved section");
            }
            self.controller.select_with(|index| *index = followed);
        }
        Some(Commit::new(outcome.sections, CommitReason::Reordered))
    }

    pub fn open_menu(&mut self, id: &SectionId) -> Vec<MenuAction> {
        if !self.edit_mode || position_of(self.controller.sections(), id).is_none() {
            return Vec::new();
        }
        self.menu_for = Some(id.clone());
        self.menu_items()
    }

    pub fn close_menu(&mut self) {
        self.menu_for = None;
    }

    pub fn menu_items(&self) -> Vec<MenuAction> {
        let Some(id) = &self.menu_for else {
            return Vec::new();
        };
        let sorted = self.controller.sorted_sections();
        let Some(index) = position_of(&sorted, id) else {
            return Vec::new();
        };
        let mut items = vec![MenuAction::Edit];
        if index > 0 {
            items.push(MenuAction::MoveLeft);
        }
        if index + 1 < sorted.len() {
            items.push(MenuAction::MoveRight);
        }
        items.push(MenuAction::Delete);
        items
    }

    /// Runs a menu entry for the tab the menu was opened on, then closes the
    /// menu. Delete only stages the deletion; it still needs confirming.
    pub fn invoke_menu(&mut self, action: MenuAction) -> Option<Commit> {
        let id = self.menu_for.take()?;
        match action {
            MenuAction::Edit => {
                self.editing.open_existing(self.controller.sections(), &id);
                None
            }
            MenuAction::MoveLeft => self.move_section(&id, Direction::Earlier),
            MenuAction::MoveRight => self.move_section(&id, Direction::Later),
            MenuAction::Delete => {
                self.editing.request_delete(self.controller.sections(), &id);
                None
            }
        }
    }

    pub fn begin_drag(&mut self, id: &SectionId, x: f64, y: f64) {
        if !self.edit_mode {
            return;
        }
        self.drag = Some(DragGesture {
            section_id: id.clone(),
            start_x: x,
            start_y: y,
        });
    }

    /// Pointer moved during a drag. Past the threshold the tab moves one step
    /// toward the pointer and the gesture ends.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<Commit> {
        let drag = self.drag.as_ref()?;
        let delta_x = x - drag.start_x;
        debug!(delta_x, delta_y = y - drag.start_y, "tab drag");
        if delta_x.abs() <= DRAG_THRESHOLD {
            return None;
        }
        let direction = if delta_x > 0.0 {
            Direction::Later
        } else {
            Direction::Earlier
        };
        let id = drag.section_id.clone();
        self.drag = None;
        self.move_section(&id, direction)
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
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

    pub fn render(&self) -> TabsRender {
        let sorted = self.controller.sorted_sections();
        if sorted.is_empty() && !self.edit_mode {
            return TabsRender::Empty(strings::NO_SECTIONS_CONFIGURED);
        }

        let active = self.active_index();
        let headers = sorted
            .iter()
            .enumerate()
            .map(|(index, section)| TabHeader {
                id: section.id.clone(),
                title: section.title.clone(),
                active: index == active,
                has_menu: self.edit_mode,
            })
            .collect();
        let pane = match sorted.get(active) {
            Some(section) => body_for(section),
            None if self.edit_mode => PanelBody::Placeholder(strings::ADD_SECTION_TO_START),
            None => PanelBody::Placeholder(strings::NO_CONTENT_AVAILABLE),
        };

        TabsRender::Tabs {
            headers,
            pane,
            show_add: self.edit_mode,
        }
    }
}
