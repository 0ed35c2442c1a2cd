use podship_core::ImageRef;

use crate::args;
use crate::executor::ToolExecutor;
use crate::tool::ToolError;

/// Container engine operations. The program defaults to `podman` but any
/// CLI with the same `build`/`tag`/`push` surface works.
pub struct PodmanClient<'a, E: ToolExecutor> {
    executor: &'a E,
    program: &'a str,
}

impl<'a, E: ToolExecutor> PodmanClient<'a, E> {
    pub fn new(executor: &'a E, program: &'a str) -> Self {
        Self { executor, program }
    }

    /// Build `image` from `context` for `platform`, bypassing the layer cache.
    pub async fn build(
        &self,
        image: &ImageRef,
        platform: &str,
        context: &str,
    ) -> Result<(), ToolError> {
        let local = image.local();
        self.executor
            .exec_streaming(
                self.program,
                &args([
                    "build",
                    "--platform",
                    platform,
                    "--no-cache",
                    "-t",
                    &local,
                    context,
                ]),
            )
            .await
    }

    /// Apply the fully-qualified registry reference to the local image.
    pub async fn tag(&self, image: &ImageRef) -> Result<(), ToolError> {
        self.executor
            .exec(self.program, &args(["tag", &image.local(), &image.qualified()]))
            .await?;

        Ok(())
    }

    pub async fn push(&self, image: &ImageRef) -> Result<(), ToolError> {
        self.executor
            .exec_streaming(self.program, &args(["push", &image.qualified()]))
            .await
    }
}
