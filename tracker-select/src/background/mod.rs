pub mod data_loader;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Tracks background tasks for remote requests
///
/// Requests are never deduplicated: every spawn gets its own entry, even
/// when an identical request is already running.
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
    next_id: u64,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            next_id: 0,
        }
    }

    /// Spawn a background task
    pub fn spawn_task<F>(&mut self, name: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|_, handle| !handle.is_finished());

        let task_id = format!("{}#{}", name, self.next_id);
        self.next_id += 1;
        tracing::debug!("Spawning task {}", task_id);

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
    }

    pub fn running(&self) -> usize {
        self.tasks.values().filter(|handle| !handle.is_finished()).count()
    }

    /// Wait until every spawned task has completed
    pub async fn wait_idle(&mut self) {
        for (task_id, handle) in self.tasks.drain() {
            if let Err(e) = handle.await {
                tracing::error!("Task {} failed: {}", task_id, e);
            }
        }
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
