//! English UI strings for the web part (property pane labels, view chrome).

pub const PROPERTY_PANE_DESCRIPTION: &str = "Configure your accordion/tabs web part";
pub const VIEW_CONFIGURATION_GROUP_NAME: &str = "Display Settings";
pub const VIEW_TYPE_LABEL: &str = "View Type";
pub const VIEW_TYPE_ACCORDION: &str = "Accordion View";
pub const VIEW_TYPE_TABS: &str = "Tabs View";

pub const ACCORDION_DEFAULT_EXPANDED_LABEL: &str = "Default Expanded Section";
pub const ACCORDION_CHOSEN_SECTION_LABEL: &str = "Section to Expand";
pub const TABS_DEFAULT_ACTIVE_LABEL: &str = "Default Active Tab";
pub const TABS_CHOSEN_TAB_LABEL: &str = "Tab to Activate";

pub const MODE_NONE: &str = "None";
pub const MODE_FIRST: &str = "First";
pub const MODE_LAST: &str = "Last";
pub const MODE_ALL: &str = "All";
pub const MODE_CHOSEN: &str = "Chosen";

pub const ADD_SECTION_BUTTON: &str = "Add Section";
pub const EDIT_SECTION_BUTTON: &str = "Edit Section";
pub const DELETE_SECTION_BUTTON: &str = "Delete Section";
pub const MOVE_UP_BUTTON: &str = "Move Up";
pub const MOVE_DOWN_BUTTON: &str = "Move Down";
pub const MOVE_LEFT_BUTTON: &str = "Move Left";
pub const MOVE_RIGHT_BUTTON: &str = "Move Right";
pub const EDIT_MENU_ITEM: &str = "Edit";
pub const DELETE_MENU_ITEM: &str = "Delete";

pub const EDITOR_TITLE_NEW: &str = "Add New Section";
pub const EDITOR_TITLE_EDIT: &str = "Edit Section";
pub const EDITOR_SAVE_NEW: &str = "Add Section";
pub const EDITOR_SAVE_EDIT: &str = "Update Section";
pub const SECTION_TITLE_REQUIRED_ERROR: &str = "Section title is required";
pub const SECTION_TITLE_LENGTH_ERROR: &str = "Section title must be 100 characters or less";

pub const NO_SECTIONS_CONFIGURED: &str = "No sections configured";
pub const NO_CONTENT_AVAILABLE: &str = "No content available";
pub const ADD_SECTION_TO_START: &str = "Add a section to get started";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this section?";
