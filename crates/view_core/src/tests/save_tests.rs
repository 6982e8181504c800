use std::time::Duration;

use shared::domain::Section;

use crate::{
    save::SaveQueue,
    store::{SaveKind, SavedSection},
};

fn update(id: &str, title: &str) -> SavedSection {
    SavedSection {
        section: Section::new(id, title, "", 0),
        kind: SaveKind::Update,
    }
}

#[tokio::test(start_paused = true)]
async fn saves_are_released_after_the_delay_in_submission_order() {
    let (queue, mut done) = SaveQueue::spawn(Duration::from_millis(500));

    queue.submit(update("a", "first")).expect("queued");
    queue.submit(update("a", "second")).expect("queued");

    let started = tokio::time::Instant::now();
    let first = done.recv().await.expect("first save");
    assert_eq!(first.section.title, "first");
    assert!(started.elapsed() >= Duration::from_millis(500));

    let second = done.recv().await.expect("second save");
    assert_eq!(second.section.title, "second");
    assert!(started.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn shutdown_drains_queued_saves() {
    let (queue, mut done) = SaveQueue::spawn(Duration::from_millis(10));
    queue.submit(update("a", "only")).expect("queued");
    queue.shutdown().await;

    assert_eq!(done.recv().await.map(|s| s.section.title), Some("only".to_string()));
    assert!(done.recv().await.is_none());
}
