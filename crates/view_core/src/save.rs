//! Delayed, serialized section saves.
//!
//! One worker drains the queue in submission order, waiting the configured
//! delay before releasing each save. Completed saves are merged against the
//! collection current at completion time, so overlapping edits cannot undo
//! each other.

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, info};

use crate::{error::SaveQueueError, store::SavedSection};

pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(500);

pub struct SaveQueue {
    tx: mpsc::UnboundedSender<SavedSection>,
    worker: JoinHandle<()>,
}

impl SaveQueue {
    /// Starts the worker on the current tokio runtime. Completed saves arrive
    /// on the returned receiver in the order they were submitted.
    pub fn spawn(delay: Duration) -> (Self, mpsc::UnboundedReceiver<SavedSection>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<SavedSection>();
        let (done_tx, done_rx) = mpsc::unbounded_channel();

        let worker = tokio::spawn(async move {
            while let Some(saved) = rx.recv().await {
                tokio::time::sleep(delay).await;
                debug!(section_id = %saved.section.id, "save delay elapsed");
                if done_tx.send(saved).is_err() {
                    break;
                }
            }
        });

        (Self { tx, worker }, done_rx)
    }

    pub fn submit(&self, saved: SavedSection) -> Result<(), SaveQueueError> {
        info!(section_id = %saved.section.id, kind = ?saved.kind, "queued section save");
        self.tx.send(saved).map_err(|_| SaveQueueError::Closed)
    }

    /// Stops accepting saves and waits for queued ones to be released.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.worker.await;
    }
}
