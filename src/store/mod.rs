// store/mod.rs — Task repository seam and the in-memory variant.

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::task::{full_date, Task};

/// Outcome of a store operation that targets a task by id.
///
/// Found/NotFound is a value, not an error: callers branch on it
/// deterministically, and only genuine store failures surface as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome<T> {
    Found(T),
    NotFound,
}

/// Capability set of a task store: list/add/toggle/remove.
///
/// The in-memory variant below is the only implementation today; a
/// persistent variant can implement the same trait without touching the
/// service or the REST layer.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks in insertion order.
    async fn list(&self) -> Result<Vec<Task>>;
    /// Append a task. Errors only if the id is already present — callers
    /// are expected to supply a fresh id.
    async fn add(&self, task: Task) -> Result<Task>;
    /// Flip `state` and refresh `updated_at` for the task with this id.
    async fn toggle_state(&self, id: &str) -> Result<StoreOutcome<Task>>;
    /// Remove the task with this id.
    async fn remove(&self, id: &str) -> Result<StoreOutcome<()>>;
}

/// Process-local task collection, empty at startup, gone at process exit.
///
/// The write lock is held across each whole mutation so toggle and remove
/// stay atomic read-modify-write under the multi-threaded runtime.
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn add(&self, task: Task) -> Result<Task> {
        let mut tasks = self.tasks.write().await;
        if tasks.iter().any(|t| t.id == task.id) {
            bail!("duplicate task id: {}", task.id);
        }
        tasks.push(task.clone());
        Ok(task)
    }

    async fn toggle_state(&self, id: &str) -> Result<StoreOutcome<Task>> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.id == id) {
            Some(found) => {
                found.state = !found.state;
                found.updated_at = full_date();
                Ok(StoreOutcome::Found(found.clone()))
            }
            None => Ok(StoreOutcome::NotFound),
        }
    }

    async fn remove(&self, id: &str) -> Result<StoreOutcome<()>> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                tasks.remove(index);
                Ok(StoreOutcome::Found(()))
            }
            None => Ok(StoreOutcome::NotFound),
        }
    }
}
