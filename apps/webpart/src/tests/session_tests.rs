use super::{parse_command, Flow, Session, SessionCommand};

use std::time::Duration;

use shared::domain::{Direction, DisplayMode, Section, SectionId, ViewType};
use view_core::{Commit, CommitReason, MenuAction, SaveQueue, WebPartView};

use crate::host::WebPartHost;

fn seeded_host(dir: &tempfile::TempDir, mode: DisplayMode, sections: Vec<Section>) -> WebPartHost {
    let mut host = WebPartHost::load(dir.path().join("props.json"), mode).expect("load");
    if !sections.is_empty() {
        host.commit(Commit::new(sections, CommitReason::Added))
            .expect("seed");
    }
    host
}

fn two_sections() -> Vec<Section> {
    vec![
        Section::new("a", "Alpha", "first", 0),
        Section::new("b", "Beta", "", 1),
    ]
}

fn ids(host: &WebPartHost) -> Vec<String> {
    host.properties()
        .sections
        .sorted()
        .into_iter()
        .map(|s| s.id.to_string())
        .collect()
}

fn message(flow: Flow) -> String {
    match flow {
        Flow::Continue(message) => message,
        Flow::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn parses_commands_and_arguments() {
    assert_eq!(parse_command("").expect("blank"), SessionCommand::Show);
    assert_eq!(
        parse_command("move a left").expect("move"),
        SessionCommand::Move(SectionId::from("a"), Direction::Earlier)
    );
    assert_eq!(
        parse_command("add  Intro | <p>Hello</p> ").expect("add"),
        SessionCommand::Add {
            title: "Intro".into(),
            content: "<p>Hello</p>".into()
        }
    );
    assert_eq!(
        parse_command("edit s1 New title").expect("edit"),
        SessionCommand::Edit {
            id: SectionId::from("s1"),
            title: "New title".into(),
            content: String::new()
        }
    );
    assert_eq!(
        parse_command("pick right").expect("pick"),
        SessionCommand::Pick(MenuAction::MoveRight)
    );
    assert_eq!(
        parse_command("set tabsDefaultActive last").expect("set"),
        SessionCommand::Set {
            property: "tabsDefaultActive".into(),
            value: "last".into()
        }
    );
}

#[test]
fn rejects_malformed_commands() {
    assert!(parse_command("move a sideways").is_err());
    assert!(parse_command("select two").is_err());
    assert!(parse_command("drag a").is_err());
    assert!(parse_command("frobnicate").is_err());
}

#[tokio::test(start_paused = true)]
async fn added_section_lands_after_the_save_delay() {
    let dir = tempfile::tempdir().expect("tempdir");
    let host = seeded_host(&dir, DisplayMode::Edit, Vec::new());
    let (queue, mut done) = SaveQueue::spawn(Duration::from_millis(500));
    let mut session = Session::new(host, queue);

    let reply = message(
        session
            .handle(parse_command("add Alpha | hello").expect("parse"))
            .expect("add"),
    );
    assert!(reply.starts_with("saving section-"));
    assert!(session.host.properties().sections.is_empty());

    let saved = done.recv().await.expect("save released");
    let reply = session.land(saved).expect("land");

    let sections = session.host.properties().sections.sorted();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Alpha");
    assert_eq!(sections[0].order, 0);
    assert!(reply.contains("v Alpha"));
    assert!(reply.contains("hello"));
    assert!(session.view.editing().editor().is_none());
}

#[tokio::test(start_paused = true)]
async fn read_mode_refuses_edits() {
    let dir = tempfile::tempdir().expect("tempdir");
    let host = seeded_host(&dir, DisplayMode::Read, two_sections());
    let (queue, _done) = SaveQueue::spawn(Duration::from_millis(500));
    let mut session = Session::new(host, queue);

    assert!(session
        .handle(SessionCommand::Add {
            title: "Gamma".into(),
            content: String::new()
        })
        .is_err());
    let reply = message(
        session
            .handle(SessionCommand::Move(SectionId::from("a"), Direction::Later))
            .expect("move"),
    );
    assert_eq!(reply, "nothing to move");
    assert_eq!(ids(&session.host), vec!["a", "b"]);
}

#[tokio::test(start_paused = true)]
async fn invalid_title_closes_the_editor_without_queueing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let host = seeded_host(&dir, DisplayMode::Edit, two_sections());
    let (queue, _done) = SaveQueue::spawn(Duration::from_millis(500));
    let mut session = Session::new(host, queue);

    let err = session
        .handle(SessionCommand::Edit {
            id: SectionId::from("a"),
            title: "   ".into(),
            content: "x".into(),
        })
        .expect_err("blank title");
    assert!(format!("{err}").to_lowercase().contains("title"));
    assert!(session.view.editing().editor().is_none());
}

#[tokio::test(start_paused = true)]
async fn delete_needs_confirmation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let host = seeded_host(&dir, DisplayMode::Edit, two_sections());
    let (queue, _done) = SaveQueue::spawn(Duration::from_millis(500));
    let mut session = Session::new(host, queue);

    session
        .handle(SessionCommand::Delete(SectionId::from("a")))
        .expect("request");
    session.handle(SessionCommand::Keep).expect("keep");
    assert_eq!(ids(&session.host), vec!["a", "b"]);

    session
        .handle(SessionCommand::Delete(SectionId::from("a")))
        .expect("request");
    session.handle(SessionCommand::Confirm).expect("confirm");
    assert_eq!(ids(&session.host), vec!["b"]);
}

#[tokio::test(start_paused = true)]
async fn tab_drag_reorders_and_active_tab_follows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let host = seeded_host(&dir, DisplayMode::Edit, two_sections());
    let (queue, _done) = SaveQueue::spawn(Duration::from_millis(500));
    let mut session = Session::new(host, queue);

    session
        .handle(SessionCommand::Set {
            property: "viewType".into(),
            value: "tabs".into(),
        })
        .expect("switch layout");
    assert_eq!(session.view.view_type(), ViewType::Tabs);

    let short = message(
        session
            .handle(SessionCommand::Drag(SectionId::from("a"), 30.0))
            .expect("short drag"),
    );
    assert_eq!(short, "drag too short");

    session
        .handle(SessionCommand::Drag(SectionId::from("a"), 80.0))
        .expect("drag");
    assert_eq!(ids(&session.host), vec!["b", "a"]);
    let WebPartView::Tabs(view) = &session.view else {
        panic!("tabs layout expected");
    };
    assert_eq!(view.active_index(), 1);

    let reloaded = WebPartHost::load(dir.path().join("props.json"), DisplayMode::Read).expect("reload");
    assert_eq!(ids(&reloaded), vec!["b", "a"]);
}

#[tokio::test(start_paused = true)]
async fn layout_specific_commands_are_rejected_elsewhere() {
    let dir = tempfile::tempdir().expect("tempdir");
    let host = seeded_host(&dir, DisplayMode::Edit, two_sections());
    let (queue, _done) = SaveQueue::spawn(Duration::from_millis(500));
    let mut session = Session::new(host, queue);

    assert!(session.handle(SessionCommand::Select(1)).is_err());
    assert!(session
        .handle(SessionCommand::Menu(SectionId::from("a")))
        .is_err());
    assert!(session
        .handle(SessionCommand::Toggle(SectionId::from("b")))
        .is_ok());
}

#[tokio::test(start_paused = true)]
async fn finish_lands_saves_still_in_flight() {
    let dir = tempfile::tempdir().expect("tempdir");
    let host = seeded_host(&dir, DisplayMode::Edit, two_sections());
    let (queue, done) = SaveQueue::spawn(Duration::from_millis(500));
    let mut session = Session::new(host, queue);

    session
        .handle(SessionCommand::Edit {
            id: SectionId::from("b"),
            title: "Beta two".into(),
            content: "body".into(),
        })
        .expect("edit");
    session
        .handle(SessionCommand::Add {
            title: "Gamma".into(),
            content: String::new(),
        })
        .expect("add");
    assert_eq!(
        session.handle(SessionCommand::Quit).expect("quit"),
        Flow::Quit
    );

    let host = session.finish(done).await.expect("finish");
    let sections = host.properties().sections.sorted();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[1].title, "Beta two");
    assert_eq!(sections[1].order, 1);
    assert_eq!(sections[2].title, "Gamma");
    assert_eq!(sections[2].order, 2);

    let reloaded = WebPartHost::load(dir.path().join("props.json"), DisplayMode::Read).expect("reload");
    assert_eq!(reloaded.properties().sections.len(), 3);
}
