//! Command-line facing layer: input resolution and the release workflow.

pub mod inputs;
pub mod orchestration;

pub use inputs::{pull_request_from, VersionSource};
pub use orchestration::{build_release_draft, run_release_workflow, ReleaseRequest, WorkflowResult};
