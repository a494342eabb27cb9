//! Application settings loaded from environment-specific files.
//!
//! The `ENV` process variable selects `.env.<ENV>` (default
//! `.env.development`). Values are resolved per field with the process
//! environment taking precedence over the file, and keys are matched
//! case-insensitively. A missing file is not an error.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::SettingsError;

/// Variable selecting which environment file is read.
pub const ENV_SELECTOR: &str = "ENV";

/// Environment used when `ENV` is unset.
pub const DEFAULT_ENV: &str = "development";

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Process-wide application settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub env: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &"[REDACTED]")
            .field("env", &self.env)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment and the selected file
    /// in the working directory.
    pub fn load() -> Result<Self, SettingsError> {
        SettingsLoader::from_process_env().load()
    }
}

/// Initialize the process-wide settings from the process environment.
pub fn init() -> Result<&'static Settings, SettingsError> {
    SETTINGS.get_or_try_init(Settings::load)
}

/// Initialize the process-wide settings with an explicit loader.
///
/// Once settings have been stored, later calls return them unchanged and
/// `loader` is ignored.
pub fn init_with(loader: &SettingsLoader) -> Result<&'static Settings, SettingsError> {
    SETTINGS.get_or_try_init(|| loader.load())
}

/// Get the process-wide settings, if they have been initialized.
pub fn get() -> Option<&'static Settings> {
    SETTINGS.get()
}

/// Resolves [`Settings`] from a variable snapshot and an environment file.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    base_dir: PathBuf,
    selector: Option<String>,
    vars: HashMap<String, String>,
}

impl SettingsLoader {
    /// Snapshot the process environment; files resolve against the
    /// working directory.
    pub fn from_process_env() -> Self {
        Self::new(".", env::vars())
    }

    pub fn new<I, K, V>(base_dir: impl Into<PathBuf>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut selector = None;
        let vars = fold_keys(vars.into_iter().map(|(k, v)| {
            let (key, value): (String, String) = (k.into(), v.into());
            if key == ENV_SELECTOR {
                selector = Some(value.clone());
            }
            (key, value)
        }));

        Self {
            base_dir: base_dir.into(),
            selector,
            vars,
        }
    }

    /// Name of the active environment, taken from `ENV` (exact case).
    pub fn env_name(&self) -> &str {
        self.selector
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_ENV)
    }

    /// Path of the environment file for the active environment.
    pub fn env_file(&self) -> PathBuf {
        self.base_dir.join(format!(".env.{}", self.env_name()))
    }

    pub fn load(&self) -> Result<Settings, SettingsError> {
        let env_file = self.env_file();
        let file_vars = read_env_file(&env_file)?;

        let resolve = |field: &str| {
            self.vars
                .get(field)
                .or_else(|| file_vars.get(field))
                .cloned()
        };

        let database_url = resolve("database_url").ok_or_else(|| SettingsError::Missing {
            field: "database_url",
            env_file: env_file.clone(),
        })?;
        let env = resolve("env").unwrap_or_else(|| DEFAULT_ENV.to_string());

        debug!(env_file = %env_file.display(), env = %env, "Settings resolved");

        Ok(Settings { database_url, env })
    }
}

/// Read `path` as a dotenv file without touching the process environment.
fn read_env_file(path: &Path) -> Result<HashMap<String, String>, SettingsError> {
    if !path.is_file() {
        debug!(env_file = %path.display(), "Environment file not found, skipping");
        return Ok(HashMap::new());
    }

    let to_error = |source| SettingsError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let entries = dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_error)?;

    Ok(fold_keys(entries))
}

/// Lowercase keys in order; a later spelling of the same key wins.
fn fold_keys<I>(entries: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut folded = HashMap::new();
    for (key, value) in entries {
        folded.insert(key.to_ascii_lowercase(), value);
    }
    folded
}
