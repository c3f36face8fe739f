//! Configuration loaded from `.todo/config.toml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use todo_core::FilterMode;
use todo_store::{DARK_THEME_KEY, FileStore, TODO_LIST_KEY};

const CONFIG_DIR: &str = ".todo";
const CONFIG_FILE: &str = "config.toml";
const DATA_SUBDIR: &str = "todo";

/// Top-level configuration loaded from `.todo/config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Where and under which keys snapshots are kept.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Initial view settings.
    #[serde(default)]
    pub view: ViewConfig,
}

impl AppConfig {
    /// Load configuration from a working directory. A missing file yields defaults.
    ///
    /// A relative `storage.dir` is resolved against `workdir`.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed or validated.
    pub fn from_workdir(workdir: impl AsRef<Path>) -> Result<Self> {
        let workdir = workdir.as_ref();
        let config_path = workdir.join(CONFIG_DIR).join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        config.validate()?;
        if let Some(dir) = config.storage.dir.as_mut()
            && dir.is_relative()
        {
            *dir = workdir.join(&*dir);
        }
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.storage.ensure_distinct_keys()
    }

    /// Open the file-backed store described by [`StorageConfig`].
    ///
    /// # Errors
    /// Returns an error if no data directory can be resolved, the directory
    /// cannot be created, or a configured key is not usable as a file name.
    pub fn open_file_store(&self) -> Result<FileStore> {
        let dir = self.storage.resolve_dir()?;
        let store = FileStore::open(&dir)
            .with_context(|| format!("failed to open snapshot store at {}", dir.display()))?;
        for key in [&self.storage.list_key, &self.storage.theme_key] {
            store
                .path_for(key)
                .with_context(|| format!("storage key {key:?} cannot be used as a file name"))?;
        }
        Ok(store)
    }
}

/// Snapshot storage block.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory for snapshot files; defaults to the platform data directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Key for the task list snapshot.
    #[serde(default = "default_list_key")]
    pub list_key: String,
    /// Key for the theme flag snapshot.
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            list_key: default_list_key(),
            theme_key: default_theme_key(),
        }
    }
}

fn default_list_key() -> String {
    TODO_LIST_KEY.to_owned()
}

fn default_theme_key() -> String {
    DARK_THEME_KEY.to_owned()
}

impl StorageConfig {
    /// Configured directory, or `<data_dir>/todo`.
    ///
    /// # Errors
    /// Returns an error when no directory is configured and the platform has
    /// no data directory.
    pub fn resolve_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|base| base.join(DATA_SUBDIR))
            .ok_or_else(|| anyhow!("failed to resolve a data directory; set storage.dir"))
    }

    fn ensure_distinct_keys(&self) -> Result<()> {
        if self.list_key.trim().is_empty() {
            bail!("storage.list_key must not be empty");
        }
        if self.theme_key.trim().is_empty() {
            bail!("storage.theme_key must not be empty");
        }
        if self.list_key == self.theme_key {
            bail!(
                "storage.list_key and storage.theme_key must differ (both are '{}')",
                self.list_key
            );
        }
        Ok(())
    }
}

/// Initial view block.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Filter applied when a session opens.
    #[serde(default)]
    pub default_filter: FilterMode,
    /// Seed the starter list when no snapshot exists.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_filter: FilterMode::All,
            seed: true,
        }
    }
}

const fn default_true() -> bool {
    true
}
