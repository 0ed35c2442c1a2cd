use crate::args;
use crate::executor::ToolExecutor;
use crate::tool::ToolError;

const GIT: &str = "git";

/// Read-only queries against the git working tree.
pub struct GitClient<'a, E: ToolExecutor> {
    executor: &'a E,
}

impl<'a, E: ToolExecutor> GitClient<'a, E> {
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// Checks whether the git working tree has uncommitted changes.
    ///
    /// Untracked files that are not ignored count as changes.
    pub async fn is_dirty(&self) -> Result<bool, ToolError> {
        let output = self
            .executor
            .exec(GIT, &args(["status", "--porcelain"]))
            .await?;

        Ok(!output.trim().is_empty())
    }

    /// Name of the checked-out branch; empty on a detached HEAD.
    pub async fn current_branch(&self) -> Result<String, ToolError> {
        let output = self
            .executor
            .exec(GIT, &args(["branch", "--show-current"]))
            .await?;

        Ok(output.trim().to_owned())
    }
}
