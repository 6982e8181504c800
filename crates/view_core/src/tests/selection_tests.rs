use shared::domain::{AccordionDefaultExpanded, Section, SectionId, TabsDefaultActive};

use crate::selection::{clamp_active_index, ExpandedSections, SelectionPolicy};
use crate::store::sort_sections;

fn section(id: &str, order: i64) -> Section {
    Section::new(id, id, "", order)
}

fn sorted_abc() -> Vec<Section> {
    sort_sections(&[section("c", 2), section("a", 0), section("b", 1)])
}

fn expanded(selection: &ExpandedSections) -> Vec<&str> {
    selection.expanded_ids().into_iter().map(|id| id.as_str()).collect()
}

#[test]
fn accordion_first_uses_sorted_order_not_raw_order() {
    let selection = AccordionDefaultExpanded::First.initial(&sorted_abc(), None);
    assert_eq!(expanded(&selection), vec!["a"]);
}

#[test]
fn accordion_none_and_all() {
    let sorted = sorted_abc();
    assert!(AccordionDefaultExpanded::None.initial(&sorted, None).is_empty());
    assert_eq!(
        expanded(&AccordionDefaultExpanded::All.initial(&sorted, None)),
        vec!["a", "b", "c"]
    );
}

#[test]
fn accordion_chosen_expands_only_that_section() {
    let chosen = SectionId::new("b");
    let selection = AccordionDefaultExpanded::Chosen.initial(&sorted_abc(), Some(&chosen));
    assert_eq!(expanded(&selection), vec!["b"]);
}

#[test]
fn accordion_chosen_missing_expands_nothing_rather_than_first() {
    let missing = SectionId::new("x");
    let selection = AccordionDefaultExpanded::Chosen.initial(&sorted_abc(), Some(&missing));
    assert!(selection.is_empty());

    let unset = AccordionDefaultExpanded::Chosen.initial(&sorted_abc(), None);
    assert!(unset.is_empty());
}

#[test]
fn accordion_empty_sequence_is_empty_for_every_mode() {
    for mode in [
        AccordionDefaultExpanded::None,
        AccordionDefaultExpanded::First,
        AccordionDefaultExpanded::All,
        AccordionDefaultExpanded::Chosen,
    ] {
        assert!(mode.initial(&[], Some(&SectionId::new("a"))).is_empty());
    }
}

#[test]
fn tabs_modes_pick_indices_in_sorted_order() {
    let sorted = sorted_abc();
    assert_eq!(TabsDefaultActive::First.initial(&sorted, None), 0);
    assert_eq!(TabsDefaultActive::Last.initial(&sorted, None), 2);
    assert_eq!(
        TabsDefaultActive::Chosen.initial(&sorted, Some(&SectionId::new("c"))),
        2
    );
}

#[test]
fn tabs_chosen_missing_falls_back_to_first() {
    let sorted = sorted_abc();
    assert_eq!(
        TabsDefaultActive::Chosen.initial(&sorted, Some(&SectionId::new("x"))),
        0
    );
    assert_eq!(TabsDefaultActive::Chosen.initial(&sorted, None), 0);
}

#[test]
fn tabs_empty_sequence_uses_zero_sentinel() {
    assert_eq!(TabsDefaultActive::Last.initial(&[], None), 0);
    assert_eq!(TabsDefaultActive::First.initial(&[], None), 0);
}

#[test]
fn toggle_is_independent_per_section() {
    let a = SectionId::new("a");
    let b = SectionId::new("b");
    let mut selection = ExpandedSections::from_ids([&a]);

    assert!(selection.toggle(&b));
    assert!(selection.is_expanded(&a));
    assert!(selection.is_expanded(&b));

    assert!(!selection.toggle(&a));
    assert_eq!(expanded(&selection), vec!["b"]);
}

#[test]
fn clamp_keeps_valid_index_and_caps_overflow() {
    assert_eq!(clamp_active_index(1, 3), 1);
    assert_eq!(clamp_active_index(5, 3), 2);
    assert_eq!(clamp_active_index(4, 0), 0);
}
