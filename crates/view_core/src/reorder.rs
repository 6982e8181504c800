//! One-step moves within the sorted sequence.

use shared::domain::{Direction, Section, SectionId};
use tracing::debug;

use crate::store::{position_of, sort_sections};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Every section, sorted by the new order values.
    pub sections: Vec<Section>,
    pub from: usize,
    pub to: usize,
}

/// Swaps the `order` values of `id` and its neighbour in `direction`.
///
/// Only those two values change; gaps in the order keys survive. Returns
/// `None` for an unknown id, a move past either end, or a neighbour with the
/// same order value, since swapping equal keys changes nothing.
pub fn move_section(
    sections: &[Section],
    id: &SectionId,
    direction: Direction,
) -> Option<MoveOutcome> {
    let mut sorted = sort_sections(sections);
    let from = position_of(&sorted, id)?;
    let to = match direction {
        Direction::Earlier => from.checked_sub(1)?,
        Direction::Later => from + 1,
    };
    if to >= sorted.len() {
        debug!(section_id = %id, ?direction, "move past the end ignored");
        return None;
    }

    let from_order = sorted[from].order;
    if from_order == sorted[to].order {
        debug!(section_id = %id, ?direction, "neighbour shares the order value; nothing to swap");
        return None;
    }
    sorted[from].order = sorted[to].order;
    sorted[to].order = from_order;

    debug!(section_id = %id, from, to, "swapped section order");
    Some(MoveOutcome {
        sections: sort_sections(&sorted),
        from,
        to,
    })
}

/// Index of the section that sat at `index` in `before`, looked up in
/// `after`. Selection follows identity, not position.
pub fn follow_identity(before: &[Section], index: usize, after: &[Section]) -> Option<usize> {
    let id = &before.get(index)?.id;
    position_of(after, id)
}
