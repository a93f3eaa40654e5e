use anyhow::{Context, Result};
use async_trait::async_trait;
use bosun_core::{Build, Project, Store, StoreError};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Store backed by the agent's HTTP API.
pub struct HttpStore {
    client: reqwest::Client,
    base: Url,
}

impl HttpStore {
    pub fn new(agent_url: impl AsRef<str>) -> Result<Self> {
        let agent_url = agent_url.as_ref();
        let base = Url::parse(agent_url)
            .with_context(|| format!("Invalid agent URL: {agent_url}"))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("Invalid agent URL: {agent_url}");
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, StoreError> {
        debug!(url = %url, "Querying agent");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::Unavailable(format!("{url} returned HTTP {status}")));
        }

        response
            .json()
            .await
            .map(Some)
            .map_err(|e| StoreError::Malformed(e.to_string()))
    }

    async fn get_builds_at(&self, url: Url) -> Result<Vec<Build>, StoreError> {
        let endpoint = url.to_string();
        self.get(url)
            .await?
            .ok_or_else(|| StoreError::Unavailable(format!("{endpoint} returned HTTP 404")))
    }
}

#[async_trait]
impl Store for HttpStore {
    async fn get_builds(&self) -> Result<Vec<Build>, StoreError> {
        self.get_builds_at(self.url(&["builds"])).await
    }

    async fn get_project(&self, name: &str) -> Result<Project, StoreError> {
        self.get(self.url(&["projects", name]))
            .await?
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    async fn get_project_builds(&self, project: &Project) -> Result<Vec<Build>, StoreError> {
        self.get_builds_at(self.url(&["projects", &project.id, "builds"]))
            .await
    }
}
