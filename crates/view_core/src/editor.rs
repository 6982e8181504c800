//! Section editor draft and the rich-text editing seam.

use chrono::Utc;
use shared::{
    domain::{Section, SectionId},
    error::{validate_title, ValidationError},
    strings,
};
use tracing::debug;
use uuid::Uuid;

use crate::store::{SaveKind, SavedSection};

/// Opaque rich-text widget: holds a value and is told when it changes.
/// Markup passes through untouched.
pub trait RichTextEditor {
    fn current_value(&self) -> &str;
    fn on_change(&mut self, new_value: String);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainTextEditor {
    value: String,
}

impl PlainTextEditor {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl RichTextEditor for PlainTextEditor {
    fn current_value(&self) -> &str {
        &self.value
    }

    fn on_change(&mut self, new_value: String) {
        self.value = new_value;
    }
}

/// In-progress add or edit of one section.
#[derive(Debug, Clone)]
pub struct SectionEditor<E: RichTextEditor = PlainTextEditor> {
    original: Option<Section>,
    title: String,
    content: E,
    has_changes: bool,
    is_saving: bool,
}

impl SectionEditor<PlainTextEditor> {
    pub fn open(section: Option<&Section>) -> Self {
        Self::with_editor(section, PlainTextEditor::default())
    }
}

impl<E: RichTextEditor> SectionEditor<E> {
    pub fn with_editor(section: Option<&Section>, mut content: E) -> Self {
        content.on_change(section.map(|s| s.content.clone()).unwrap_or_default());
        Self {
            original: section.cloned(),
            title: section.map(|s| s.title.clone()).unwrap_or_default(),
            content,
            has_changes: false,
            is_saving: false,
        }
    }

    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }

    pub fn section_id(&self) -> Option<&SectionId> {
        self.original.as_ref().map(|s| &s.id)
    }

    pub fn heading(&self) -> &'static str {
        if self.is_new() {
            strings::EDITOR_TITLE_NEW
        } else {
            strings::EDITOR_TITLE_EDIT
        }
    }

    pub fn save_label(&self) -> &'static str {
        if self.is_new() {
            strings::EDITOR_SAVE_NEW
        } else {
            strings::EDITOR_SAVE_EDIT
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        self.content.current_value()
    }

    pub fn widget(&self) -> &E {
        &self.content
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn can_save(&self) -> bool {
        !self.is_saving && !self.title.trim().is_empty()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.has_changes = true;
    }

    pub fn edit_content(&mut self, content: impl Into<String>) {
        self.content.on_change(content.into());
        self.has_changes = true;
    }

    /// Drops unsaved changes.
    pub fn cancel(&mut self) {
        self.title = self
            .original
            .as_ref()
            .map(|s| s.title.clone())
            .unwrap_or_default();
        self.content.on_change(
            self.original
                .as_ref()
                .map(|s| s.content.clone())
                .unwrap_or_default(),
        );
        self.has_changes = false;
    }

    /// Validates and builds the section to save, marking the draft as saving.
    /// Nothing is dispatched when validation fails.
    pub fn prepare_save(&mut self) -> Result<SavedSection, ValidationError> {
        let title = validate_title(&self.title)?.to_string();
        let (id, order, kind) = match &self.original {
            Some(section) => (section.id.clone(), section.order, SaveKind::Update),
            None => (generate_section_id(), 0, SaveKind::Insert),
        };
        self.is_saving = true;
        debug!(section_id = %id, ?kind, "section save prepared");
        Ok(SavedSection {
            section: Section {
                id,
                title,
                content: self.content.current_value().to_string(),
                order,
            },
            kind,
        })
    }
}

/// `section-<unix millis>-<9 random chars>`.
pub fn generate_section_id() -> SectionId {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();
    SectionId(format!(
        "section-{}-{suffix}",
        Utc::now().timestamp_millis()
    ))
}
