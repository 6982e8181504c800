use shared::domain::{
    AccordionDefaultExpanded, DisplayMode, Section, SectionId, TabsDefaultActive, ViewType,
};

use crate::{
    properties::{PropertyError, WebPartProperties},
    store::SectionStore,
};

#[test]
fn missing_fields_take_defaults() {
    let props: WebPartProperties = serde_json::from_str(r#"{"viewType":"tabs"}"#).expect("json");
    assert_eq!(props.view_type, ViewType::Tabs);
    assert!(props.allow_edit);
    assert!(props.sections.is_empty());
    assert_eq!(props.tabs_default_active, TabsDefaultActive::First);
}

#[test]
fn serializes_in_host_property_bag_shape() {
    let props = WebPartProperties {
        sections: SectionStore::new(vec![Section::new("a", "A", "<p/>", 0)]),
        accordion_default_expanded: AccordionDefaultExpanded::Chosen,
        accordion_chosen_section: "a".to_string(),
        ..WebPartProperties::default()
    };
    let json = serde_json::to_value(&props).expect("json");

    assert_eq!(json["viewType"], "accordion");
    assert_eq!(json["accordionDefaultExpanded"], "chosen");
    assert_eq!(json["accordionChosenSection"], "a");
    assert_eq!(json["sections"][0]["id"], "a");
}

#[test]
fn blank_chosen_id_means_none() {
    let props = WebPartProperties {
        tabs_chosen_tab: "  ".to_string(),
        accordion_chosen_section: "b".to_string(),
        ..WebPartProperties::default()
    };
    assert_eq!(props.tabs_input().config.chosen, None);
    assert_eq!(
        props.accordion_input().config.chosen,
        Some(SectionId::new("b"))
    );
}

#[test]
fn editing_requires_edit_mode_and_permission() {
    let mut props = WebPartProperties::default();
    assert!(props.is_editable(DisplayMode::Edit));
    assert!(!props.is_editable(DisplayMode::Read));
    props.allow_edit = false;
    assert!(!props.is_editable(DisplayMode::Edit));
}

#[test]
fn apply_change_parses_choices() {
    let mut props = WebPartProperties::default();
    props.apply_change("viewType", "Tabs").expect("valid");
    props.apply_change("tabsDefaultActive", "last").expect("valid");
    props.apply_change("allowEdit", "false").expect("valid");

    assert_eq!(props.view_type, ViewType::Tabs);
    assert_eq!(props.tabs_default_active, TabsDefaultActive::Last);
    assert!(!props.allow_edit);

    assert_eq!(
        props.apply_change("tabsDefaultActive", "all"),
        Err(PropertyError::InvalidValue {
            property: "tabsDefaultActive".to_string(),
            value: "all".to_string()
        })
    );
    assert_eq!(
        props.apply_change("colour", "red"),
        Err(PropertyError::UnknownProperty("colour".to_string()))
    );
}

#[test]
fn chosen_dropdown_appears_only_in_chosen_mode() {
    let mut props = WebPartProperties {
        sections: SectionStore::new(vec![
            Section::new("b", "Beta", "", 2),
            Section::new("a", "Alpha", "", 1),
        ]),
        ..WebPartProperties::default()
    };
    let fields = |props: &WebPartProperties| {
        props.property_pane().groups[0]
            .fields
            .iter()
            .map(|f| f.property)
            .collect::<Vec<_>>()
    };
    assert_eq!(fields(&props), vec!["viewType", "accordionDefaultExpanded"]);

    props.accordion_default_expanded = AccordionDefaultExpanded::Chosen;
    let pane = props.property_pane();
    let chosen = &pane.groups[0].fields[2];
    assert_eq!(chosen.property, "accordionChosenSection");
    assert_eq!(
        chosen.options.iter().map(|o| o.text.as_str()).collect::<Vec<_>>(),
        vec!["Alpha", "Beta"]
    );

    props.view_type = ViewType::Tabs;
    assert_eq!(fields(&props), vec!["viewType", "tabsDefaultActive"]);
}
