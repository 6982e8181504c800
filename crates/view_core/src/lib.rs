//! Section ordering and default-selection core for the accordion/tabs web part.
//!
//! The host owns the section collection and feeds snapshots into a view; a
//! view answers user actions with a [`Commit`] carrying the full replacement
//! collection, which the host persists and feeds back.

pub mod accordion;
pub mod component;
pub mod controller;
pub mod editing;
pub mod editor;
pub mod error;
pub mod properties;
pub mod reorder;
pub mod save;
pub mod selection;
pub mod store;
pub mod tabs;

pub use accordion::{AccordionItem, AccordionRender, AccordionView, PanelBody, SectionAction};
pub use component::{WebPartRender, WebPartView};
pub use controller::{
    classify, transition, UpdateKind, ViewConfig, ViewController, ViewInput, ViewState,
};
pub use editor::{PlainTextEditor, RichTextEditor, SectionEditor};
pub use error::{EditError, SaveQueueError};
pub use properties::{PropertyError, PropertyPane, WebPartProperties};
pub use reorder::{move_section, MoveOutcome};
pub use save::{SaveQueue, DEFAULT_SAVE_DELAY};
pub use selection::{ExpandedSections, SelectionPolicy};
pub use store::{Commit, CommitReason, SaveKind, SavedSection, SectionStore};
pub use tabs::{MenuAction, TabHeader, TabsRender, TabsView};

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod store_tests;

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod selection_tests;

#[cfg(test)]
#[path = "tests/reorder_tests.rs"]
mod reorder_tests;

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod controller_tests;

#[cfg(test)]
#[path = "tests/accordion_tests.rs"]
mod accordion_tests;

#[cfg(test)]
#[path = "tests/tabs_tests.rs"]
mod tabs_tests;

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod editor_tests;

#[cfg(test)]
#[path = "tests/save_tests.rs"]
mod save_tests;

#[cfg(test)]
#[path = "tests/properties_tests.rs"]
mod properties_tests;

#[cfg(test)]
#[path = "tests/component_tests.rs"]
mod component_tests;
