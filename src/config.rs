// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_POLYGON_BASE_URL: &str = "https://api.polygon.io";

/// Supplies the Polygon API key to whoever builds a client.
pub trait ApiKeyProvider {
    fn api_key(&self) -> anyhow::Result<String>;
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub polygon_api_key: Option<String>,
    #[serde(default = "default_polygon_base_url")]
    pub polygon_base_url: String,
}

fn default_polygon_base_url() -> String {
    DEFAULT_POLYGON_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            polygon_api_key: None,
            polygon_base_url: default_polygon_base_url(),
        }
    }
}

impl Config {
    /// Overrides file values with `POLYGON_API_KEY` and `POLYGON_BASE_URL`
    /// when `var` returns them.
    pub fn with_env_overrides<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = var("POLYGON_API_KEY") {
            self.polygon_api_key = Some(key);
        }
        if let Some(url) = var("POLYGON_BASE_URL") {
            self.polygon_base_url = url;
        }
        self
    }
}

impl ApiKeyProvider for Config {
    fn api_key(&self) -> anyhow::Result<String> {
        match self.polygon_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => anyhow::bail!("POLYGON_API_KEY must be set"),
        }
    }
}

fn get_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}

/// Loads the configuration, then applies environment overrides.
///
/// An explicit `path` must exist. Without one, `config.toml` in the working
/// directory is read if present.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => read_config(path)?,
        None => {
            let default_path = get_config_path();
            if default_path.exists() {
                read_config(&default_path)?
            } else {
                Config::default()
            }
        }
    };
    Ok(config.with_env_overrides(|name| std::env::var(name).ok()))
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}
