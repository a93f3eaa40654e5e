use tracing::debug;

use crate::{error::StoreError, store::Store, types::Build};

/// Fetches the builds to report on.
///
/// An empty `project` selects every build in the store. Otherwise the name is
/// first resolved to a project and only that project's builds are returned.
/// Store errors are passed through untouched and no partial result is produced.
pub async fn fetch_builds<S>(store: &S, project: &str) -> Result<Vec<Build>, StoreError>
where
    S: Store + ?Sized,
{
    if project.is_empty() {
        debug!("Fetching builds for all projects");
        return store.get_builds().await;
    }

    let project = store.get_project(project).await?;
    debug!(project_id = %project.id, project_name = %project.name, "Fetching project builds");
    store.get_project_builds(&project).await
}
