//! Web part property bag as the host persists it, and the property pane
//! description built from it.

use serde::{Deserialize, Serialize};
use shared::{
    domain::{AccordionDefaultExpanded, DisplayMode, SectionId, TabsDefaultActive, ViewType},
    strings,
};
use thiserror::Error;

use crate::{controller::ViewInput, store::SectionStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebPartProperties {
    pub view_type: ViewType,
    pub sections: SectionStore,
    pub allow_edit: bool,
    pub accordion_default_expanded: AccordionDefaultExpanded,
    /// Empty means no chosen section.
    pub accordion_chosen_section: String,
    pub tabs_default_active: TabsDefaultActive,
    pub tabs_chosen_tab: String,
}

impl Default for WebPartProperties {
    fn default() -> Self {
        Self {
            view_type: ViewType::default(),
            sections: SectionStore::default(),
            allow_edit: true,
            accordion_default_expanded: AccordionDefaultExpanded::default(),
            accordion_chosen_section: String::new(),
            tabs_default_active: TabsDefaultActive::default(),
            tabs_chosen_tab: String::new(),
        }
    }
}

fn chosen_id(raw: &str) -> Option<SectionId> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| SectionId::new(raw))
}

impl WebPartProperties {
    /// Mutation controls exist only in edit mode and only if the author
    /// allowed editing.
    pub fn is_editable(&self, display_mode: DisplayMode) -> bool {
        display_mode.is_edit() && self.allow_edit
    }

    pub fn accordion_input(&self) -> ViewInput<AccordionDefaultExpanded> {
        ViewInput::new(
            self.sections.snapshot().to_vec(),
            self.accordion_default_expanded,
            chosen_id(&self.accordion_chosen_section),
        )
    }

    pub fn tabs_input(&self) -> ViewInput<TabsDefaultActive> {
        ViewInput::new(
            self.sections.snapshot().to_vec(),
            self.tabs_default_active,
            chosen_id(&self.tabs_chosen_tab),
        )
    }

    /// Applies one property pane field change, keyed by the camelCase
    /// property name.
    pub fn apply_change(&mut self, property: &str, value: &str) -> Result<(), PropertyError> {
        let invalid = || PropertyError::InvalidValue {
            property: property.to_string(),
            value: value.to_string(),
        };
        match property {
            "viewType" => self.view_type = parse_choice(value).ok_or_else(invalid)?,
            "allowEdit" => self.allow_edit = value.parse().map_err(|_| invalid())?,
            "accordionDefaultExpanded" => {
                self.accordion_default_expanded = parse_choice(value).ok_or_else(invalid)?
            }
            "accordionChosenSection" => self.accordion_chosen_section = value.to_string(),
            "tabsDefaultActive" => {
                self.tabs_default_active = parse_choice(value).ok_or_else(invalid)?
            }
            "tabsChosenTab" => self.tabs_chosen_tab = value.to_string(),
            other => return Err(PropertyError::UnknownProperty(other.to_string())),
        }
        Ok(())
    }

    pub fn property_pane(&self) -> PropertyPane {
        let section_options: Vec<PaneOption> = self
            .sections
            .sorted()
            .into_iter()
            .map(|s| PaneOption::new(s.id.as_str(), s.title))
            .collect();

        let mut view_fields = vec![PaneField {
            property: "viewType",
            label: strings::VIEW_TYPE_LABEL,
            options: vec![
                PaneOption::new("accordion", strings::VIEW_TYPE_ACCORDION),
                PaneOption::new("tabs", strings::VIEW_TYPE_TABS),
            ],
        }];

        match self.view_type {
            ViewType::Accordion => {
                view_fields.push(PaneField {
                    property: "accordionDefaultExpanded",
                    label: strings::ACCORDION_DEFAULT_EXPANDED_LABEL,
                    options: vec![
                        PaneOption::new("none", strings::MODE_NONE),
                        PaneOption::new("first", strings::MODE_FIRST),
                        PaneOption::new("all", strings::MODE_ALL),
                        PaneOption::new("chosen", strings::MODE_CHOSEN),
                    ],
                });
                if self.accordion_default_expanded == AccordionDefaultExpanded::Chosen {
                    view_fields.push(PaneField {
                        property: "accordionChosenSection",
                        label: strings::ACCORDION_CHOSEN_SECTION_LABEL,
                        options: section_options,
                    });
                }
            }
            ViewType::Tabs => {
                view_fields.push(PaneField {
                    property: "tabsDefaultActive",
                    label: strings::TABS_DEFAULT_ACTIVE_LABEL,
                    options: vec![
                        PaneOption::new("first", strings::MODE_FIRST),
                        PaneOption::new("last", strings::MODE_LAST),
                        PaneOption::new("chosen", strings::MODE_CHOSEN),
                    ],
                });
                if self.tabs_default_active == TabsDefaultActive::Chosen {
                    view_fields.push(PaneField {
                        property: "tabsChosenTab",
                        label: strings::TABS_CHOSEN_TAB_LABEL,
                        options: section_options,
                    });
                }
            }
        }

        PropertyPane {
            description: strings::PROPERTY_PANE_DESCRIPTION,
            groups: vec![PaneGroup {
                name: strings::VIEW_CONFIGURATION_GROUP_NAME,
                fields: view_fields,
            }],
        }
    }
}

fn parse_choice<T: for<'de> Deserialize<'de>>(value: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_ascii_lowercase())).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("unknown web part property '{0}'")]
    UnknownProperty(String),
    #[error("invalid value '{value}' for property '{property}'")]
    InvalidValue { property: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneOption {
    pub key: String,
    pub text: String,
}

impl PaneOption {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneField {
    pub property: &'static str,
    pub label: &'static str,
    pub options: Vec<PaneOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneGroup {
    pub name: &'static str,
    pub fields: Vec<PaneField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPane {
    pub description: &'static str,
    pub groups: Vec<PaneGroup>,
}
