use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn recur_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".recur"))
}

pub fn ensure_recur_home() -> Result<PathBuf> {
    let dir = recur_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(recur_home()?.join("config.toml"))
}
