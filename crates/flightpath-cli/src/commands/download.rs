//! Download command handler for fetching the airport reference file.

use anyhow::{Context, Result};

use flightpath_lib::{download_airports_dataset, ensure_airports_dataset, resolve_dataset_path};

use super::DataOptions;
use flightpath_cli::output::OutputFormat;

/// Handle the download subcommand.
///
/// With `force` the file is fetched again even when a copy already exists.
pub fn handle_download(options: &DataOptions, force: bool, format: OutputFormat) -> Result<()> {
    let target = options.dataset_target();
    let path = if force {
        let path = resolve_dataset_path(target)
            .context("failed to resolve the airport dataset location")?;
        download_airports_dataset(&path)
            .with_context(|| format!("failed to download airport dataset to {}", path.display()))?;
        path
    } else {
        ensure_airports_dataset(target)
            .context("failed to locate or download the airport dataset")?
    };

    format.render_download(&path)?;
    Ok(())
}
