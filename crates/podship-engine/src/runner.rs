use std::fmt;

use podship_core::{ImageRef, PodshipConfig};

use crate::executor::{RealExecutor, ToolExecutor};
use crate::git::GitClient;
use crate::podman::PodmanClient;
use crate::report::Reporter;
use crate::tool::ToolError;

/// The literal argument that bypasses the git precheck.
pub const SKIP_ARG: &str = "skip";

/// Whether the git precheck runs before the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecheckMode {
    Run,
    Skip,
}

impl PrecheckMode {
    /// Only the exact literal `skip` disables the precheck.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(SKIP_ARG) => Self::Skip,
            _ => Self::Run,
        }
    }
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Precheck,
    Build,
    Tag,
    Push,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Precheck => "precheck",
            Self::Build => "build",
            Self::Tag => "tag",
            Self::Push => "push",
        })
    }
}

/// Result of a successful deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub image: ImageRef,
    pub prechecked: bool,
}

/// Runs precheck → build → tag → push, stopping at the first failure.
///
/// Nothing is rolled back: a failed push leaves the built and tagged image
/// in the local store.
pub struct DeployRunner<E: ToolExecutor = RealExecutor> {
    executor: E,
    config: PodshipConfig,
}

impl DeployRunner<RealExecutor> {
    pub fn new(config: PodshipConfig) -> Self {
        Self {
            executor: RealExecutor,
            config,
        }
    }
}

impl<E: ToolExecutor> DeployRunner<E> {
    pub fn with_executor(executor: E, config: PodshipConfig) -> Self {
        Self { executor, config }
    }

    /// Refuse to deploy from a dirty tree or from any branch but the configured one.
    pub async fn precheck(&self) -> Result<(), DeployError> {
        let git = GitClient::new(&self.executor);

        if git
            .is_dirty()
            .await
            .map_err(|e| DeployError::Git { source: e })?
        {
            return Err(DeployError::UncommittedChanges);
        }

        let branch = git
            .current_branch()
            .await
            .map_err(|e| DeployError::Git { source: e })?;
        if branch != self.config.git.branch {
            return Err(DeployError::WrongBranch {
                expected: self.config.git.branch.clone(),
                actual: branch,
            });
        }

        Ok(())
    }

    pub async fn build(&self, image: &ImageRef) -> Result<(), DeployError> {
        self.engine()
            .build(image, &self.config.image.platform, &self.config.image.context)
            .await
            .map_err(|e| DeployError::Build {
                image: image.local(),
                source: e,
            })
    }

    pub async fn tag(&self, image: &ImageRef) -> Result<(), DeployError> {
        self.engine()
            .tag(image)
            .await
            .map_err(|e| DeployError::Tag {
                local: image.local(),
                remote: image.qualified(),
                source: e,
            })
    }

    pub async fn push(&self, image: &ImageRef) -> Result<(), DeployError> {
        self.engine()
            .push(image)
            .await
            .map_err(|e| DeployError::Push {
                remote: image.qualified(),
                source: e,
            })
    }

    /// Execute the full pipeline, reporting each stage as it starts and finishes.
    pub async fn run(
        &self,
        mode: PrecheckMode,
        reporter: &impl Reporter,
    ) -> Result<DeployOutcome, DeployError> {
        let image = self.config.image_ref();

        match mode {
            PrecheckMode::Run => {
                reporter.info("Checking git working tree...");
                self.precheck().await?;
                reporter.success(&format!(
                    "Working tree clean on branch '{}'",
                    self.config.git.branch
                ));
            }
            PrecheckMode::Skip => {
                reporter.warn("Skipping git precheck");
            }
        }

        reporter.info(&format!(
            "Building {} for {} (no cache)...",
            image.local(),
            self.config.image.platform
        ));
        self.build(&image).await?;
        reporter.success(&format!("Built {}", image.local()));

        reporter.info(&format!("Tagging {}...", image.qualified()));
        self.tag(&image).await?;
        reporter.success(&format!("Tagged {}", image.qualified()));

        reporter.info(&format!("Pushing to {}...", image.registry));
        self.push(&image).await?;
        reporter.success(&format!("Deployed {}", image.qualified()));

        Ok(DeployOutcome {
            image,
            prechecked: mode == PrecheckMode::Run,
        })
    }

    fn engine(&self) -> PodmanClient<'_, E> {
        PodmanClient::new(&self.executor, &self.config.engine.program)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("uncommitted changes detected; commit them, or pass `skip` to deploy anyway")]
    UncommittedChanges,

    #[error("current branch is '{actual}', deploys must run from '{expected}'")]
    WrongBranch { expected: String, actual: String },

    #[error("git precheck failed")]
    Git { source: ToolError },

    #[error("image build failed for {image}")]
    Build { image: String, source: ToolError },

    #[error("failed to tag {local} as {remote}")]
    Tag {
        local: String,
        remote: String,
        source: ToolError,
    },

    #[error("failed to push {remote}")]
    Push { remote: String, source: ToolError },
}

impl DeployError {
    /// The stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::UncommittedChanges | Self::WrongBranch { .. } | Self::Git { .. } => {
                Stage::Precheck
            }
            Self::Build { .. } => Stage::Build,
            Self::Tag { .. } => Stage::Tag,
            Self::Push { .. } => Stage::Push,
        }
    }
}
