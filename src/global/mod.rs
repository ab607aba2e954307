use anyhow::{Context, Result};
use std::path::PathBuf;

const HOST_DIR: &str = "plover";
const CONFIG_FILE_NAME: &str = "q_and_a.json";

/// The host application's config directory, where the plugin's file lives.
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(HOST_DIR))
        .context("Unable to determine config directory")
}

pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}
