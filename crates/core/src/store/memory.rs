use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::{
    error::StoreError,
    store::Store,
    types::{Build, Project},
};

/// In-memory store. Not durable; records come back in insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    projects: Vec<Project>,
    builds: Vec<Build>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_project(&self, project: Project) {
        self.lock().projects.push(project);
    }

    pub fn add_build(&self, build: Build) {
        self.lock().builds.push(build);
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn get_builds(&self) -> Result<Vec<Build>, StoreError> {
        Ok(self.lock().builds.clone())
    }

    async fn get_project(&self, name: &str) -> Result<Project, StoreError> {
        self.lock()
            .projects
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    async fn get_project_builds(&self, project: &Project) -> Result<Vec<Build>, StoreError> {
        Ok(self
            .lock()
            .builds
            .iter()
            .filter(|b| b.project_id == project.id)
            .cloned()
            .collect())
    }
}
