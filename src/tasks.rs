//! Background task management for the dataset fetch.
//!
//! The fetch runs on a tokio task so the UI keeps rendering (and the loading
//! spinner keeps turning) while the request is in flight. The result comes
//! back to the main loop over an unbounded channel, which polls it with
//! `try_recv()` on every iteration.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{Project, ProjectSource};

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// The dataset fetch finished.
    ProjectsFetched(Result<Vec<Project>, String>),
}

/// Spawns background tasks for async operations.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>) -> Self {
        Self { tx }
    }

    /// Spawn the dataset fetch.
    ///
    /// The task is not cancellable. If the receiver is gone by the time it
    /// finishes, the result is dropped.
    pub fn spawn_fetch_projects<S>(&self, source: S)
    where
        S: ProjectSource + Send + Sync + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_projects().await.map_err(|e| e.to_string());
            debug!(ok = result.is_ok(), "Dataset fetch task finished");
            if tx.send(ApiMessage::ProjectsFetched(result)).is_err() {
                warn!("Dataset fetch finished after the receiver was closed");
            }
        });
    }
}
