//! `airaware init`: write the project config and create the data directory.

use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};

use airaware::config::Config;
use airaware::paths;
use airaware::repository::FileRepository;

use super::ui::Output;

pub fn cmd_init(force: bool, data_dir: Option<PathBuf>, output: &Output) -> Result<()> {
    init_in(Path::new("."), force, data_dir, output)
}

/// Initialize under `root`. Split out so tests can use a temp directory.
fn init_in(root: &Path, force: bool, data_dir: Option<PathBuf>, output: &Output) -> Result<()> {
    let config_path = root.join(paths::CONFIG_FILE);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            config_path.display()
        );
    }

    fs::create_dir_all(root.join(paths::AIRAWARE_DIR))
        .with_context(|| format!("Failed to create {}", paths::AIRAWARE_DIR))?;

    let mut config = Config::default();
    if let Some(dir) = &data_dir {
        config.storage.data_dir = dir.to_string_lossy().to_string();
    }
    fs::write(&config_path, config.to_yaml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let data_path = match data_dir {
        Some(dir) => dir,
        None => root.join(config.storage.data_dir_path()),
    };
    let repo = FileRepository::new(data_path);
    repo.init()?;
    tracing::info!(data_dir = %repo.data_dir().display(), "initialized");

    output.success(&format!("Initialized airaware in {}", root.join(paths::AIRAWARE_DIR).display()));
    output.detail(&format!("config: {}", config_path.display()));
    output.detail(&format!("data: {}", repo.data_dir().display()));
    output.value(&serde_json::json!({
        "config": config_path,
        "data_dir": repo.data_dir(),
    }))?;

    Ok(())
}
