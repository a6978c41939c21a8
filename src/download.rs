use crate::config::RemoteFile;
use crate::library::logger::interface::Logger;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// No deadline on the whole request: model files are large and links slow.
fn client() -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(None)
        .build()
}

/// Returns the cached copy of `remote` under `cache_dir`, downloading it
/// first when absent.
pub fn fetch_cached(
    remote: &RemoteFile,
    cache_dir: &Path,
    logger: &Arc<dyn Logger + Send + Sync>,
) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    let path = cache_dir.join(&remote.file_name);

    if path.exists() {
        logger.info(&format!("Using cached {}", path.display()))?;
        return Ok(path);
    }

    fs::create_dir_all(cache_dir)?;

    logger.info(&format!("Downloading {}", remote.url))?;

    let response = client()?.get(&remote.url).send()?.error_for_status()?;
    let bytes = response.bytes()?;

    // Write beside the target so a partial download never looks cached.
    let partial = path.with_extension("part");
    let mut file = fs::File::create(&partial)?;
    file.write_all(&bytes)?;
    file.sync_all()?;
    fs::rename(&partial, &path)?;

    logger.info(&format!(
        "Saved {} bytes to {}",
        bytes.len(),
        path.display()
    ))?;

    Ok(path)
}
