pub mod config;
pub mod rest;
pub mod service;
pub mod store;
pub mod task;

use std::sync::Arc;

use config::TaskdConfig;
use service::TaskService;
use store::InMemoryTaskStore;

/// Shared application state passed to every REST handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<TaskdConfig>,
    /// Task service over the process-local in-memory store.
    pub tasks: TaskService,
}

impl AppContext {
    /// Wire up the store → service chain for a fresh (empty) process.
    pub fn new(config: TaskdConfig) -> Self {
        let store = Arc::new(InMemoryTaskStore::new());
        Self {
            config: Arc::new(config),
            tasks: TaskService::new(store),
        }
    }
}
