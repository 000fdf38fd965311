//! Command module structure for the airaware CLI

use anyhow::Result;
use std::path::{Path, PathBuf};

use airaware::auth;
use airaware::config::Config;
use airaware::repository::FileRepository;

pub mod aqi;
pub mod init;
pub mod reading;
pub mod station;
pub mod ui;

use ui::Output;

/// Everything a data command needs: storage and output.
pub struct Context {
    pub repo: FileRepository,
    pub output: Output,
}

impl Context {
    /// Check the API key and open the repository.
    ///
    /// Fails if the data directory does not exist yet.
    pub fn open(
        config: &Config,
        data_dir: Option<PathBuf>,
        api_key: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        config.auth.validate()?;
        auth::authorize(&config.auth, api_key)?;

        let data_dir = data_dir.unwrap_or_else(|| config.storage.data_dir_path());
        ensure_initialized(&data_dir)?;

        Ok(Self {
            repo: FileRepository::new(data_dir),
            output,
        })
    }

    /// Whether human output should be colored.
    pub fn color(&self) -> bool {
        self.output.is_tty()
    }
}

/// Ensure airaware is initialized at `data_dir`.
///
/// This checks for the existence of the data directory and returns an error
/// if `airaware init` has not been run.
pub fn ensure_initialized(data_dir: &Path) -> Result<()> {
    if !data_dir.exists() {
        anyhow::bail!(
            "AirAware not initialized ({} does not exist). Run `airaware init` first.",
            data_dir.display()
        );
    }
    Ok(())
}
