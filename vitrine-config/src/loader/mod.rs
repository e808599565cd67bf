//! Resolves the showcase configuration from files and the environment.
//!
//! Evaluation order:
//! 1. an explicit path handed to [`ConfigLoader::with_config_path`],
//! 2. `$VITRINE_CONFIG_PATH` (TOML or JSON file),
//! 3. `$VITRINE_CONFIG_JSON` (inline JSON),
//! 4. the first of [`DEFAULT_CONFIG_LOCATIONS`] that exists under the search
//!    root,
//! 5. built-in defaults.
//!
//! Whatever wins is run through the guard rails before it is returned.

pub mod error;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use self::error::ConfigLoadError;
use super::{
    models::ShowcaseConfig,
    validation::{self, ConfigWarnings},
};

pub const CONFIG_PATH_ENV: &str = "VITRINE_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "VITRINE_CONFIG_JSON";

pub const DEFAULT_CONFIG_LOCATIONS: &[&str] =
    &["vitrine.toml", "vitrine.json", "config/vitrine.toml"];

/// Source that produced the showcase configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::EnvPath(path) | Self::File(path) => {
                Some(path)
            }
            Self::Default | Self::EnvInline => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Default => "built-in defaults".to_string(),
            Self::Explicit(path) => format!("{}", path.display()),
            Self::EnvPath(path) => {
                format!("{} (from ${CONFIG_PATH_ENV})", path.display())
            }
            Self::EnvInline => format!("${CONFIG_JSON_ENV}"),
            Self::File(path) => format!("{} (discovered)", path.display()),
        }
    }
}

/// Environment variables the loader consults. Captured once so tests can
/// build one by hand instead of mutating the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
}

impl EnvOverrides {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var(CONFIG_PATH_ENV).map(PathBuf::from),
            config_json: non_empty_var(CONFIG_JSON_ENV),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub search_root: Option<PathBuf>,
    pub env: Option<EnvOverrides>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

/// A validated configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ShowcaseConfig,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    /// Directory the default candidate files are resolved against. Defaults
    /// to the working directory.
    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.search_root = Some(root.into());
        self
    }

    /// Use these overrides instead of reading the process environment.
    pub fn with_env(mut self, env: EnvOverrides) -> Self {
        self.options.env = Some(env);
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env = self
            .options
            .env
            .clone()
            .unwrap_or_else(EnvOverrides::gather);

        let (config, source) = self.resolve(&env)?;
        let warnings = validation::apply_guard_rails(&config)?;

        debug!(
            source = %source.describe(),
            warnings = warnings.items.len(),
            "showcase configuration resolved"
        );

        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }

    fn resolve(
        &self,
        env: &EnvOverrides,
    ) -> Result<(ShowcaseConfig, ConfigSource), ConfigLoadError> {
        if let Some(explicit) = &self.options.config_path {
            if !explicit.exists() {
                return Err(ConfigLoadError::MissingConfig {
                    path: explicit.clone(),
                });
            }
            let config = load_from_file(explicit)?;
            return Ok((config, ConfigSource::Explicit(explicit.clone())));
        }

        if let Some(path) = &env.config_path {
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig { path: path.clone() });
            }
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let config = parse_json(raw, CONFIG_JSON_ENV)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        debug!("no showcase config found; using defaults");
        Ok((ShowcaseConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let root = self
            .options
            .search_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.is_file())
    }
}

/// Read a config file, choosing the format from its extension. Files with an
/// unknown extension are tried as TOML, then JSON.
pub fn load_from_file(path: &Path) -> Result<ShowcaseConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                origin,
                message: err.to_string(),
            })
        }
        _ => parse_from_str(&contents, &origin),
    }
}

pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<ShowcaseConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Parse {
                origin: origin.to_string(),
                message: format!(
                    "toml error: {toml_err}; json error: {json_err}"
                ),
            }
        })
    })
}

pub fn parse_json(
    raw: &str,
    origin: &str,
) -> Result<ShowcaseConfig, ConfigLoadError> {
    serde_json::from_str(raw).map_err(|err| ConfigLoadError::Parse {
        origin: origin.to_string(),
        message: err.to_string(),
    })
}
