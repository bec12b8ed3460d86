// service/mod.rs — id and timestamp policy on top of the store.

use std::sync::Arc;

use anyhow::Result;
use uuid::Uuid;

use crate::store::{StoreOutcome, TaskRepository};
use crate::task::{full_date, Task};

/// Translates client intent into store operations, supplying the identity
/// and timestamp policy the store does not know about. Holds no task state
/// of its own.
#[derive(Clone)]
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<Task>> {
        self.repo.list().await
    }

    /// Create a task with a fresh UUID v4 id, `state = false`, and
    /// `created_at == updated_at`.
    ///
    /// UUIDs rather than a counter: ids stay collision-resistant if a
    /// second instance or a restart is ever introduced, and they leak no
    /// insertion order.
    pub async fn create(&self, title: &str) -> Result<Task> {
        let now = full_date();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            state: false,
            created_at: now.clone(),
            updated_at: now,
        };
        self.repo.add(task).await
    }

    pub async fn toggle(&self, id: &str) -> Result<StoreOutcome<Task>> {
        self.repo.toggle_state(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<StoreOutcome<()>> {
        self.repo.remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryTaskStore;

    fn make_service() -> TaskService {
        TaskService::new(Arc::new(InMemoryTaskStore::new()))
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let service = make_service();
        let task = service.create("Learn Docker").await.unwrap();

        assert_eq!(task.title, "Learn Docker");
        assert!(!task.state);
        assert_eq!(task.created_at, task.updated_at);
        assert!(Uuid::parse_str(&task.id).is_ok());
    }

    #[tokio::test]
    async fn create_then_list_contains_exactly_that_task() {
        let service = make_service();
        let created = service.create("X").await.unwrap();

        let tasks = service.list_all().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, created.id);
        assert_eq!(tasks[0].title, "X");
        assert!(!tasks[0].state);
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let service = make_service();
        let mut ids = std::collections::HashSet::new();
        for i in 0..100 {
            let task = service.create(&format!("task {i}")).await.unwrap();
            assert!(ids.insert(task.id), "duplicate id minted");
        }
    }

    #[tokio::test]
    async fn toggle_twice_restores_original_state() {
        let service = make_service();
        let created = service.create("X").await.unwrap();

        let once = match service.toggle(&created.id).await.unwrap() {
            StoreOutcome::Found(t) => t,
            StoreOutcome::NotFound => panic!("task should exist"),
        };
        assert!(once.state);
        assert!(once.created_at <= once.updated_at);

        let twice = match service.toggle(&created.id).await.unwrap() {
            StoreOutcome::Found(t) => t,
            StoreOutcome::NotFound => panic!("task should exist"),
        };
        assert!(!twice.state);
    }

    #[tokio::test]
    async fn toggle_and_delete_unknown_ids_are_not_found() {
        let service = make_service();
        service.create("X").await.unwrap();
        let unknown = Uuid::new_v4().to_string();

        assert_eq!(
            service.toggle(&unknown).await.unwrap(),
            StoreOutcome::NotFound
        );
        assert_eq!(
            service.delete(&unknown).await.unwrap(),
            StoreOutcome::NotFound
        );
        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_task_from_listing() {
        let service = make_service();
        let created = service.create("X").await.unwrap();

        assert_eq!(
            service.delete(&created.id).await.unwrap(),
            StoreOutcome::Found(())
        );
        assert!(service.list_all().await.unwrap().is_empty());
        assert_eq!(
            service.delete(&created.id).await.unwrap(),
            StoreOutcome::NotFound
        );
    }
}
