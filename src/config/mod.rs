//! Process-wide configuration: where the cache lives and behavioral toggles.
//!
//! Sources, highest precedence first:
//!
//! 1. `--cache` on the command line
//! 2. `LCD_CACHE` environment variable
//! 3. `~/.lcd/config.json`
//! 4. built-in defaults (`~/.lcd/cache`, menu on, strict completion)
//!
//! The config file is optional; every key in it is optional too.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::matcher::CompletionOptions;

/// Environment variable overriding the cache location
pub const CACHE_ENV_VAR: &str = "LCD_CACHE";

const LCD_DIR_NAME: &str = ".lcd";
const CACHE_FILE_NAME: &str = "cache";
const CONFIG_FILE_NAME: &str = "config.json";

/// Contents of `~/.lcd/config.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub cache: Option<PathBuf>,
    pub menu: Option<bool>,
    pub complete_empty_fragment: Option<bool>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cache_path: PathBuf,
    /// Open the interactive menu for ambiguous matches when possible
    pub menu: bool,
    pub completion: CompletionOptions,
}

/// Get the lcd directory path (~/.lcd)
pub fn get_lcd_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(LCD_DIR_NAME))
}

/// Read the optional config file; a missing file means defaults
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let file = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config file");
    Ok(file)
}

impl Config {
    /// Resolve configuration from the environment and `~/.lcd`
    ///
    /// Without a home directory the config file is skipped; that is only an
    /// error when nothing else names the cache.
    pub fn load(cache_override: Option<PathBuf>) -> Result<Self> {
        let lcd_dir = get_lcd_dir().ok();
        let file = match &lcd_dir {
            Some(dir) => load_config_file(&dir.join(CONFIG_FILE_NAME))?,
            None => {
                debug!("home directory unavailable, skipping config file");
                ConfigFile::default()
            }
        };
        let env_cache = env::var_os(CACHE_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self::resolve(lcd_dir.as_deref(), file, env_cache, cache_override)
    }

    /// Merge every source by precedence (pure, for testing)
    pub fn resolve(
        lcd_dir: Option<&Path>,
        file: ConfigFile,
        env_cache: Option<PathBuf>,
        cache_override: Option<PathBuf>,
    ) -> Result<Self> {
        let cache_path = match cache_override.or(env_cache).or(file.cache) {
            Some(path) => path,
            None => lcd_dir.context("Could not determine home directory")?.join(CACHE_FILE_NAME),
        };

        Ok(Self {
            cache_path,
            menu: file.menu.unwrap_or(true),
            completion: CompletionOptions {
                allow_empty_fragment: file.complete_empty_fragment.unwrap_or(false),
            },
        })
    }
}
