// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Spendwise", "spendwise"));

pub const API_URL_ENV: &str = "SPENDWISE_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:8000/";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Label printed after amounts.
    pub currency: String,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: DEFAULT_API_URL.to_string(),
            currency: "Ft".to_string(),
            timeout_secs: 15,
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific project dirs")
}

pub fn config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

pub fn data_dir() -> Result<PathBuf> {
    let proj = project_dirs()?;
    let dir = proj.data_dir();
    fs::create_dir_all(dir).context("Failed to create data dir")?;
    Ok(dir.to_path_buf())
}

/// Reads the config file when it exists, then applies the URL override.
pub fn load_from(path: &Path, api_url_override: Option<String>) -> Result<AppConfig> {
    let mut cfg = if path.exists() {
        debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str::<AppConfig>(&contents)
            .with_context(|| format!("Failed to parse TOML from {}", path.display()))?
    } else {
        debug!("no config file at {}, using defaults", path.display());
        AppConfig::default()
    };

    if let Some(url) = api_url_override.filter(|u| !u.trim().is_empty()) {
        cfg.api_base_url = url.trim().to_string();
    }
    if !cfg.api_base_url.ends_with('/') {
        cfg.api_base_url.push('/');
    }
    Ok(cfg)
}

pub fn load() -> Result<AppConfig> {
    load_from(&config_path()?, std::env::var(API_URL_ENV).ok())
}
