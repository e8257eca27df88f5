use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lightbnb_db::pool::DEFAULT_MAX_CONNECTIONS;
use lightbnb_db::Limit;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Load environment variables from .env files
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.lightbnb/.env
///
/// dotenvy never overwrites a variable that is already set, so loading the
/// current directory first gives it precedence over the global file.
pub fn load_dotenv() -> Result<()> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(format!("current directory ({})", path.display()));
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(_) => loaded_from.push(format!("~/.lightbnb/.env ({})", env_file.display())),
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    if loaded_from.is_empty() {
        debug!("No .env files found (current dir or ~/.lightbnb)");
    } else {
        info!("Loaded environment from: {}", loaded_from.join(", "));
    }

    Ok(())
}

/// Get the lightbnb config directory path (~/.lightbnb)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lightbnb"))
}

// ============================================================================
// TOML Configuration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightbnbConfig {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Fallback when neither --database-url nor DATABASE_URL is given
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_limit")]
    pub default_limit: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

fn default_limit() -> i64 {
    Limit::default().get()
}

impl LightbnbConfig {
    /// Load config from TOML files
    ///
    /// Priority order (highest to lowest):
    /// 1. ./lightbnb.toml (project-specific)
    /// 2. ~/.lightbnb/config.toml (user defaults)
    /// 3. Built-in defaults
    pub fn load() -> Self {
        let global = config_dir().map(|dir| dir.join("config.toml"));
        Self::load_from(global.as_deref(), Path::new("lightbnb.toml"))
    }

    /// Load from explicit paths; a missing or unparsable file is skipped.
    pub fn load_from(global: Option<&Path>, local: &Path) -> Self {
        // Whole-file override: the local file replaces the global one
        [Some(local), global]
            .into_iter()
            .flatten()
            .find_map(read_config)
            .unwrap_or_default()
    }

    /// Resolve the database URL: command line / DATABASE_URL first, then config.
    pub fn database_url(&self, from_cli: Option<String>) -> Result<String> {
        from_cli.or_else(|| self.database.url.clone()).context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, \
             ~/.lightbnb/.env, or [database] url in lightbnb.toml",
        )
    }

    /// Resolve the row limit: `--limit` first, then `[search] default_limit`.
    pub fn limit(&self, from_cli: Option<i64>) -> Result<Limit> {
        Limit::new(from_cli.unwrap_or(self.search.default_limit))
            .context("Invalid --limit or [search] default_limit")
    }
}

fn read_config(path: &Path) -> Option<LightbnbConfig> {
    if !path.exists() {
        return None;
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}
