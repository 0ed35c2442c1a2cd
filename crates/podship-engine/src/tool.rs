#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("`{program}` could not be started; is it installed and on PATH?")]
    NotFound {
        program: String,
        source: std::io::Error,
    },

    #[error("`{program} {}` failed: {stderr}", args.join(" "))]
    CommandFailed {
        program: String,
        args: Vec<String>,
        stderr: String,
    },

    #[error("`{program}` output was not valid UTF-8")]
    InvalidUtf8 {
        program: String,
        source: std::string::FromUtf8Error,
    },
}
