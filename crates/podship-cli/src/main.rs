mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use output::Console;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "podship",
    about = "Build, tag, and push a container image to a private registry"
)]
#[command(version)]
struct Cli {
    /// Pass `skip` to bypass the git working-tree and branch checks
    #[arg(value_name = "MODE", allow_hyphen_values = true)]
    mode: Option<String>,

    /// Ignored
    #[arg(
        value_name = "EXTRA",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    extra: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                // arch-lint: allow(no-silent-result-drop) reason="unset or invalid RUST_LOG falls back to the default log filter"
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let console = Console::new();

    match commands::deploy(cli.mode.as_deref(), &cli.extra, &console).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
