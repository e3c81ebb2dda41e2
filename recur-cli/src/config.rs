use anyhow::{Context, Result};
use recur_bills::{SortBy, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::state::{config_path, ensure_recur_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listing: ListingSection,
    pub profile: ProfileSection,
    pub source: SourceSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSection {
    /// Page size when --limit is not given
    pub default_limit: usize,
    pub default_sort: SortBy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    /// IANA timezone used to decide what "today" is
    pub timezone: String,
    /// Used when --user is omitted
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Bill file (.csv/.json) or http(s) URL serving a JSON array
    pub location: String,
}

impl Default for ListingSection {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            default_sort: SortBy::Latest,
        }
    }
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            timezone: "America/Chicago".to_string(),
            user_id: None,
        }
    }
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            location: "bills.csv".to_string(),
        }
    }
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    ensure_recur_home()?;
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
