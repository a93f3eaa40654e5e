pub mod memory;
pub use memory::InMemoryStore;

use async_trait::async_trait;

use crate::{
    error::StoreError,
    types::{Build, Project},
};

/// Read access to the persisted builds and projects of an orchestrator.
#[async_trait]
pub trait Store: Send + Sync {
    /// All builds, any project, in the order the store keeps them.
    async fn get_builds(&self) -> Result<Vec<Build>, StoreError>;

    /// Looks up a project by name. Fails with [`StoreError::NotFound`] if absent.
    async fn get_project(&self, name: &str) -> Result<Project, StoreError>;

    async fn get_project_builds(&self, project: &Project) -> Result<Vec<Build>, StoreError>;
}
