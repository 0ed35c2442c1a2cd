use crate::tool::ToolError;

/// Abstraction over external CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait ToolExecutor: Send + Sync {
    /// Execute a command and capture stdout.
    async fn exec(&self, program: &str, args: &[String]) -> Result<String, ToolError>;

    /// Execute a command, streaming output to the terminal.
    async fn exec_streaming(&self, program: &str, args: &[String]) -> Result<(), ToolError>;
}

/// Runs commands as child processes of the current working directory.
pub struct RealExecutor;

impl ToolExecutor for RealExecutor {
    async fn exec(&self, program: &str, args: &[String]) -> Result<String, ToolError> {
        use std::process::Stdio;

        tracing::debug!(program, ?args, "exec");

        let output = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ToolError::NotFound {
                program: program.to_owned(),
                source: e,
            })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| ToolError::InvalidUtf8 {
                program: program.to_owned(),
                source: e,
            })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            Err(ToolError::CommandFailed {
                program: program.to_owned(),
                args: args.to_vec(),
                stderr,
            })
        }
    }

    async fn exec_streaming(&self, program: &str, args: &[String]) -> Result<(), ToolError> {
        use std::process::Stdio;

        tracing::debug!(program, ?args, "exec (streaming)");

        let status = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ToolError::NotFound {
                program: program.to_owned(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::CommandFailed {
                program: program.to_owned(),
                args: args.to_vec(),
                stderr: status.to_string(),
            })
        }
    }
}
