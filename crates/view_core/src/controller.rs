//! Selection state machine shared by the accordion and tabs views.
//!
//! Each host update is classified against the previous input. A config or
//! membership change re-runs the selection policy; anything else keeps the
//! live selection and only revalidates it.

use shared::domain::{Section, SectionId};
use tracing::debug;

use crate::{
    selection::SelectionPolicy,
    store::{identity_set, sort_sections},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig<P> {
    pub mode: P,
    pub chosen: Option<SectionId>,
}

impl<P> ViewConfig<P> {
    pub fn new(mode: P, chosen: Option<SectionId>) -> Self {
        Self { mode, chosen }
    }
}

/// Snapshot the host pushes into a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewInput<P> {
    pub sections: Vec<Section>,
    pub config: ViewConfig<P>,
}

impl<P> ViewInput<P> {
    pub fn new(sections: Vec<Section>, mode: P, chosen: Option<SectionId>) -> Self {
        Self {
            sections,
            config: ViewConfig::new(mode, chosen),
        }
    }

    pub fn sorted(&self) -> Vec<Section> {
        sort_sections(&self.sections)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    Initial,
    ConfigChanged,
    MembershipChanged,
    /// Same config and same id set: a reorder, an edit, or nothing.
    Unchanged,
}

pub fn classify<P: PartialEq>(prev: Option<&ViewInput<P>>, next: &ViewInput<P>) -> UpdateKind {
    let Some(prev) = prev else {
        return UpdateKind::Initial;
    };
    if prev.config != next.config {
        UpdateKind::ConfigChanged
    } else if identity_set(&prev.sections) != identity_set(&next.sections) {
        UpdateKind::MembershipChanged
    } else {
        UpdateKind::Unchanged
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<S> {
    Uninitialized,
    Initialized(S),
}

impl<S> ViewState<S> {
    pub fn selection(&self) -> Option<&S> {
        match self {
            Self::Uninitialized => None,
            Self::Initialized(selection) => Some(selection),
        }
    }
}

/// Pure transition: `(state, previous input, new input) -> state`.
pub fn transition<P: SelectionPolicy>(
    state: ViewState<P::Selection>,
    prev: Option<&ViewInput<P>>,
    next: &ViewInput<P>,
) -> ViewState<P::Selection> {
    let kind = classify(prev, next);
    let sorted = next.sorted();
    match (state, kind) {
        (ViewState::Initialized(selection), UpdateKind::Unchanged) => {
            ViewState::Initialized(P::revalidate(selection, &sorted))
        }
        _ => {
            debug!(?kind, mode = ?next.config.mode, "running selection policy");
            ViewState::Initialized(next.config.mode.initial(&sorted, next.config.chosen.as_ref()))
        }
    }
}

/// Holds the latest host snapshot and the selection derived from it.
#[derive(Debug, Clone)]
pub struct ViewController<P: SelectionPolicy> {
    input: Option<ViewInput<P>>,
    state: ViewState<P::Selection>,
}

impl<P: SelectionPolicy> Default for ViewController<P> {
    fn default() -> Self {
        Self {
            input: None,
            state: ViewState::Uninitialized,
        }
    }
}

impl<P: SelectionPolicy> ViewController<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a new snapshot from the host. The first call is the mount.
    pub fn update(&mut self, input: ViewInput<P>) -> UpdateKind {
        let kind = classify(self.input.as_ref(), &input);
        let state = std::mem::replace(&mut self.state, ViewState::Uninitialized);
        self.state = transition(state, self.input.as_ref(), &input);
        self.input = Some(input);
        kind
    }

    pub fn state(&self) -> &ViewState<P::Selection> {
        &self.state
    }

    pub fn selection(&self) -> Option<&P::Selection> {
        self.state.selection()
    }

    /// User-driven change that bypasses the policy. Ignored before mount.
    pub fn select_with(&mut self, f: impl FnOnce(&mut P::Selection)) {
        if let ViewState::Initialized(selection) = &mut self.state {
            f(selection);
        }
    }

    pub fn input(&self) -> Option<&ViewInput<P>> {
        self.input.as_ref()
    }

    pub fn sections(&self) -> &[Section] {
        self.input
            .as_ref()
            .map(|input| input.sections.as_slice())
            .unwrap_or_default()
    }

    pub fn sorted_sections(&self) -> Vec<Section> {
        sort_sections(self.sections())
    }
}
