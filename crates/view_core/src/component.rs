//! Top-level web part view: picks the accordion or tabs layout from the
//! property bag and routes host snapshots and user actions to it.

use shared::domain::{DisplayMode, Direction, SectionId, ViewType};
use tracing::info;

use crate::{
    accordion::{AccordionRender, AccordionView},
    controller::UpdateKind,
    editing::SectionEditing,
    error::EditError,
    properties::WebPartProperties,
    store::{Commit, SavedSection},
    tabs::{TabsRender, TabsView},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebPartRender {
    Accordion(AccordionRender),
    Tabs(TabsRender),
}

#[derive(Debug, Clone)]
pub enum WebPartView {
    Accordion(AccordionView),
    Tabs(TabsView),
}

impl WebPartView {
    pub fn mount(properties: &WebPartProperties, display_mode: DisplayMode) -> Self {
        let edit_mode = properties.is_editable(display_mode);
        match properties.view_type {
            ViewType::Accordion => {
                let mut view = AccordionView::new(edit_mode);
                view.update(properties.accordion_input());
                Self::Accordion(view)
            }
            ViewType::Tabs => {
                let mut view = TabsView::new(edit_mode);
                view.update(properties.tabs_input());
                Self::Tabs(view)
            }
        }
    }

    pub fn view_type(&self) -> ViewType {
        match self {
            Self::Accordion(_) => ViewType::Accordion,
            Self::Tabs(_) => ViewType::Tabs,
        }
    }

    /// Pushes the host's latest snapshot. Switching layout remounts, which
    /// counts as an initial update.
    pub fn refresh(&mut self, properties: &WebPartProperties, display_mode: DisplayMode) -> UpdateKind {
        if self.view_type() != properties.view_type {
            info!(view_type = ?properties.view_type, "switching layout");
            *self = Self::mount(properties, display_mode);
            return UpdateKind::Initial;
        }
        let edit_mode = properties.is_editable(display_mode);
        match self {
            Self::Accordion(view) => {
                if view.edit_mode() != edit_mode {
                    view.set_edit_mode(edit_mode);
                }
                view.update(properties.accordion_input())
            }
            Self::Tabs(view) => {
                if view.edit_mode() != edit_mode {
                    view.set_edit_mode(edit_mode);
                }
                view.update(properties.tabs_input())
            }
        }
    }

    pub fn move_section(&mut self, id: &SectionId, direction: Direction) -> Option<Commit> {
        match self {
            Self::Accordion(view) => view.move_section(id, direction),
            Self::Tabs(view) => view.move_section(id, direction),
        }
    }

    pub fn editing(&self) -> &SectionEditing {
        match self {
            Self::Accordion(view) => view.editing(),
            Self::Tabs(view) => view.editing(),
        }
    }

    pub fn editing_mut(&mut self) -> &mut SectionEditing {
        match self {
            Self::Accordion(view) => view.editing_mut(),
            Self::Tabs(view) => view.editing_mut(),
        }
    }

    pub fn open_new_section(&mut self) -> Result<(), EditError> {
        match self {
            Self::Accordion(view) => view.open_new_section(),
            Self::Tabs(view) => view.open_new_section(),
        }
    }

    pub fn open_section(&mut self, id: &SectionId) -> Result<bool, EditError> {
        match self {
            Self::Accordion(view) => view.open_section(id),
            Self::Tabs(view) => view.open_section(id),
        }
    }

    pub fn submit_editor(&mut self) -> Result<SavedSection, EditError> {
        match self {
            Self::Accordion(view) => view.submit_editor(),
            Self::Tabs(view) => view.submit_editor(),
        }
    }

    pub fn complete_save(&mut self, saved: &SavedSection) -> Option<Commit> {
        match self {
            Self::Accordion(view) => view.complete_save(saved),
            Self::Tabs(view) => view.complete_save(saved),
        }
    }

    pub fn request_delete(&mut self, id: &SectionId) -> bool {
        match self {
            Self::Accordion(view) => view.request_delete(id),
            Self::Tabs(view) => view.request_delete(id),
        }
    }

    pub fn confirm_delete(&mut self) -> Option<Commit> {
        match self {
            Self::Accordion(view) => view.confirm_delete(),
            Self::Tabs(view) => view.confirm_delete(),
        }
    }

    pub fn render(&self) -> WebPartRender {
        match self {
            Self::Accordion(view) => WebPartRender::Accordion(view.render()),
            Self::Tabs(view) => WebPartRender::Tabs(view.render()),
        }
    }
}
