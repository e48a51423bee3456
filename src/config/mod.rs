mod api;
mod defaults;
mod env;

use crate::cli::Args;
use crate::session::FileSessionStore;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env as std_env;
use std::fs;
use std::path::PathBuf;

pub use api::ApiConfig;
pub use env::{expand_env_var_in_string, parse_bool};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

/// Effective settings after layering CLI args > env vars > config file > defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Option<u64>,
    pub session_file: PathBuf,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let file_config = FileConfig::load()?;
        Self::resolve(args, file_config)
    }

    pub fn resolve(args: &Args, file_config: FileConfig) -> Result<Self> {
        // Base URL: CLI args > env var > config file > default
        let base_url = args
            .api_url
            .clone()
            .or_else(|| std_env::var("FOLIO_API_URL").ok())
            .or(file_config.api.base_url)
            .map(|url| expand_env_var_in_string(&url))
            .unwrap_or_else(defaults::default_base_url);
        let base_url = base_url.trim_end_matches('/').to_string();

        // Timeout: CLI args > env var > config file; unset means none
        let timeout = args
            .timeout
            .or_else(|| {
                std_env::var("FOLIO_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
            })
            .or(file_config.api.timeout)
            .filter(|secs| *secs > 0);

        let session_file = args
            .session_file
            .clone()
            .or_else(|| std_env::var("FOLIO_SESSION_FILE").ok().map(PathBuf::from))
            .or_else(|| {
                file_config
                    .session
                    .file
                    .map(|f| PathBuf::from(expand_env_var_in_string(&f)))
            })
            .or_else(FileSessionStore::default_path)
            .ok_or_else(|| anyhow!("Cannot determine session file location; pass --session-file"))?;

        let verbose = args.verbose
            || std_env::var("FOLIO_VERBOSE")
                .ok()
                .and_then(|v| parse_bool(&v))
                .or(file_config.log.verbose)
                .unwrap_or(false);

        Ok(Config {
            base_url,
            timeout,
            session_file,
            verbose,
        })
    }
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        // No config file found, return default
        Ok(FileConfig::default())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
        };
        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (highest priority - local override)
        paths.push(PathBuf::from(".folio-admin.yaml"));
        paths.push(PathBuf::from(".folio-admin.yml"));
        paths.push(PathBuf::from(".folio-admin.json"));

        // 2. User's config directory (global config)
        if let Some(config_dir) = Self::user_config_dir() {
            paths.push(config_dir.join("folio-admin.yaml"));
            paths.push(config_dir.join("folio-admin.yml"));
            paths.push(config_dir.join("folio-admin.json"));
        }

        paths
    }

    pub fn user_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("folio-admin"))
    }

    /// Example file written by `folio config-init`.
    pub fn example_yaml() -> &'static str {
        defaults::EXAMPLE_CONFIG
    }
}
