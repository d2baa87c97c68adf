//! Application services for the lifecycle core.

mod orchestrator;

pub use orchestrator::{LifecycleError, LifecycleResult, ListQuery, ResourceLifecycleService};
