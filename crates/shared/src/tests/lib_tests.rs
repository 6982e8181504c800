use crate::{
    domain::{AccordionDefaultExpanded, DisplayMode, Section, SectionId, TabsDefaultActive, ViewType},
    error::{validate_title, ValidationError, MAX_TITLE_LEN},
    strings,
};

#[test]
fn section_id_serializes_as_bare_string() {
    let section = Section::new("a", "Alpha", "<p>hi</p>", 3);
    let json = serde_json::to_value(&section).expect("serialize");
    assert_eq!(json["id"], "a");
    assert_eq!(json["order"], 3);

    let back: Section = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back.id, SectionId::new("a"));
}

#[test]
fn mode_enums_use_lowercase_wire_names() {
    assert_eq!(
        serde_json::to_string(&AccordionDefaultExpanded::Chosen).expect("json"),
        "\"chosen\""
    );
    assert_eq!(
        serde_json::from_str::<TabsDefaultActive>("\"last\"").expect("json"),
        TabsDefaultActive::Last
    );
    assert_eq!(
        serde_json::from_str::<ViewType>("\"tabs\"").expect("json"),
        ViewType::Tabs
    );
}

#[test]
fn defaults_match_a_freshly_added_web_part() {
    assert_eq!(ViewType::default(), ViewType::Accordion);
    assert_eq!(AccordionDefaultExpanded::default(), AccordionDefaultExpanded::First);
    assert_eq!(TabsDefaultActive::default(), TabsDefaultActive::First);
    assert!(!DisplayMode::default().is_edit());
}

#[test]
fn title_validation_trims_and_bounds_length() {
    assert_eq!(validate_title("  Intro  "), Ok("Intro"));
    assert_eq!(validate_title("   "), Err(ValidationError::EmptyTitle));

    let long = "x".repeat(MAX_TITLE_LEN + 1);
    let err = validate_title(&long).expect_err("too long");
    assert_eq!(
        err,
        ValidationError::TitleTooLong {
            max: MAX_TITLE_LEN,
            actual: MAX_TITLE_LEN + 1
        }
    );

    let exact = "y".repeat(MAX_TITLE_LEN);
    assert!(validate_title(&exact).is_ok());
}

#[test]
fn validation_messages_come_from_the_string_table() {
    assert_eq!(
        ValidationError::EmptyTitle.to_string(),
        strings::SECTION_TITLE_REQUIRED_ERROR
    );
    let err = ValidationError::TitleTooLong {
        max: MAX_TITLE_LEN,
        actual: 120,
    };
    assert_eq!(
        err.to_string(),
        format!("{} (got 120)", strings::SECTION_TITLE_LENGTH_ERROR)
    );
}
