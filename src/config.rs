use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::CONFIG_PATH_ENV;
use crate::error::AppError;
use crate::utils::debug_log;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) fallback_image: Option<String>,
    #[serde(default)]
    pub(crate) branch_env: Option<String>,
    #[serde(default)]
    pub(crate) commit_env: Option<String>,
    #[serde(default)]
    pub(crate) context: Option<String>,
    #[serde(default)]
    pub(crate) git: Option<String>,
    #[serde(default)]
    pub(crate) docker: Option<String>,
}

impl Config {
    /// Load `$BUILDHOOK_CONFIG` if set, otherwise the first parseable default path
    ///
    /// A file named by `$BUILDHOOK_CONFIG` must exist and parse; default
    /// locations are skipped when missing or broken.
    pub(crate) fn load() -> Result<Self, AppError> {
        match Self::explicit_path(std::env::var_os(CONFIG_PATH_ENV)) {
            Some(path) => Self::load_explicit(&path),
            None => Ok(Self::load_default_paths(Self::get_config_paths())),
        }
    }

    fn explicit_path(value: Option<OsString>) -> Option<PathBuf> {
        value.filter(|p| !p.is_empty()).map(PathBuf::from)
    }

    fn load_explicit(path: &Path) -> Result<Self, AppError> {
        let config_error = |message: String| AppError::Config {
            path: path.display().to_string(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        let config = Self::parse(&content).map_err(config_error)?;
        debug_log(format!("Loaded config from {}", path.display()));
        Ok(config)
    }

    fn load_default_paths(config_paths: Vec<PathBuf>) -> Self {
        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        debug_log(format!("Loaded config from {}", path.display()));
                        return config;
                    }
                    Err(e) => {
                        debug_log(format!(
                            "Warning: Failed to parse {}: {}",
                            path.display(),
                            e
                        ));
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str::<Config>(content).map_err(|e| e.to_string())
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/buildhook/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("buildhook").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/buildhook/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("buildhook").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.buildhook.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".buildhook.toml"));
        }

        paths
    }
}
