//! Deploy pipeline for podship.
//!
//! ```text
//! podship [skip]
//!   1. Precheck ── git status --porcelain, git branch --show-current (bypassed by `skip`)
//!   2. Build    ── podman build --platform <platform> --no-cache -t <name>:<tag> <context>
//!   3. Tag      ── podman tag <name>:<tag> <registry>/<name>:<tag>
//!   4. Push     ── podman push <registry>/<name>:<tag>
//! ```
//!
//! Every stage gates the next; the first failure aborts the run.

pub mod executor;
pub mod git;
pub mod podman;
pub mod report;
pub mod runner;
pub mod tool;

pub use executor::{RealExecutor, ToolExecutor};
pub use git::GitClient;
pub use podman::PodmanClient;
pub use report::Reporter;
pub use runner::{DeployError, DeployOutcome, DeployRunner, PrecheckMode, SKIP_ARG, Stage};
pub use tool::ToolError;

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}
