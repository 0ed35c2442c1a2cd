use anyhow::Context as _;
use podship_core::PodshipConfig;
use podship_engine::{DeployRunner, PrecheckMode, Reporter, SKIP_ARG};
use std::path::Path;

use crate::output::Console;

/// Execute the full deploy pipeline from the current directory.
///
/// Only `mode_arg == Some("skip")` bypasses the precheck; anything else,
/// including surplus arguments, is reported and ignored.
pub async fn deploy(
    mode_arg: Option<&str>,
    extra: &[String],
    console: &Console,
) -> anyhow::Result<()> {
    let mode = PrecheckMode::from_arg(mode_arg);
    if let (PrecheckMode::Run, Some(other)) = (mode, mode_arg) {
        console.warn(&format!(
            "Ignoring argument '{other}'; only `{SKIP_ARG}` bypasses the git precheck"
        ));
    }
    if !extra.is_empty() {
        console.warn(&format!("Ignoring extra arguments: {}", extra.join(" ")));
    }

    let config = PodshipConfig::load(Path::new(".")).context("invalid configuration")?;
    let runner = DeployRunner::new(config);

    let outcome = runner.run(mode, console).await.map_err(|e| {
        let stage = e.stage();
        anyhow::Error::new(e).context(format!("{stage} stage failed"))
    })?;

    tracing::debug!(
        image = %outcome.image,
        prechecked = outcome.prechecked,
        "deploy finished"
    );

    Ok(())
}
