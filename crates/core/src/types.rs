use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named grouping that owns zero or more builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Identifier assigned by the store. Builds refer to their project by this value.
    pub id: String,
    pub name: String,
}

/// One recorded unit of orchestrated work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub id: String,
    /// The kind of event that triggered the build (e.g. `push`).
    #[serde(rename = "type")]
    pub build_type: String,
    /// The external service the build originated from (e.g. `github`).
    pub provider: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    /// Point-in-time snapshot of the executing worker. `None` until the build
    /// has been scheduled.
    #[serde(default)]
    pub worker: Option<Worker>,
}

/// The execution record of a build's run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    #[serde(default)]
    pub id: String,
    pub status: WorkerStatus,
    #[serde(default)]
    pub start_time: DateTime<Utc>,
    // Holds the zero timestamp until the worker has stopped.
    #[serde(default)]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub exit_code: i32,
}

// Decoding goes through `FromStr`, so agents may send any letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WorkerStatus {
    Unknown,
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl WorkerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerStatus::Unknown => "unknown",
            WorkerStatus::Pending => "pending",
            WorkerStatus::Running => "running",
            WorkerStatus::Succeeded => "succeeded",
            WorkerStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(WorkerStatus::Unknown),
            "pending" => Ok(WorkerStatus::Pending),
            "running" => Ok(WorkerStatus::Running),
            "succeeded" => Ok(WorkerStatus::Succeeded),
            "failed" => Ok(WorkerStatus::Failed),
            _ => Err(format!("Unknown worker status: {s}")),
        }
    }
}

impl TryFrom<String> for WorkerStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
