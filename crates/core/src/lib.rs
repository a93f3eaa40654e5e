//! Build listing: fetch build records from an orchestrator store and render
//! their status as a table.

pub mod config;
pub mod error;
pub mod fetch;
pub mod report;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use fetch::fetch_builds;
pub use report::{render_table, write_table};
pub use store::{InMemoryStore, Store};
pub use types::{Build, Project, Worker, WorkerStatus};
