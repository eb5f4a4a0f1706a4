use crate::error::Result;
use crate::io;
use crate::paths;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Format used for every date written into ledgers and scaffold files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Values offered when a prompt has no answer from the command line.
///
/// Every field can be overridden from `.ai/wrinkl.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_project_type")]
    pub project_type: String,
    #[serde(default = "default_stack")]
    pub stack: String,
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_true")]
    pub create_cursor_rules: bool,
    #[serde(default)]
    pub create_augment: bool,
    #[serde(default)]
    pub create_copilot: bool,
}

fn default_project_type() -> String {
    "web app".to_string()
}

fn default_stack() -> String {
    "TypeScript, Node.js".to_string()
}

fn default_owner() -> String {
    "Human".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_type: default_project_type(),
            stack: default_stack(),
            owner: default_owner(),
            create_cursor_rules: default_true(),
            create_augment: false,
            create_copilot: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    defaults: Defaults,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Process-wide settings, built once in `main` and passed down by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub defaults: Defaults,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            defaults: Defaults::default(),
        }
    }

    /// Build a config for `root`, applying `.ai/wrinkl.yaml` when present.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let mut config = Self::new(root);
        let path = paths::config_path(&config.root);
        if let Some(data) = io::read_if_exists(&path)? {
            let file: ConfigFile = if data.trim().is_empty() {
                ConfigFile::default()
            } else {
                serde_yaml::from_str(&data)?
            };
            tracing::debug!(path = %path.display(), "loaded config overrides");
            config.defaults = file.defaults;
        }
        Ok(config)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        self.ai_dir().is_dir()
    }

    pub fn ai_dir(&self) -> PathBuf {
        paths::ai_dir(&self.root)
    }

    pub fn ledgers_dir(&self) -> PathBuf {
        paths::ledgers_dir(&self.root)
    }

    pub fn archived_dir(&self) -> PathBuf {
        paths::archived_dir(&self.root)
    }

    pub fn active_file(&self) -> PathBuf {
        paths::active_path(&self.root)
    }

    pub fn template_file(&self) -> PathBuf {
        paths::template_path(&self.root)
    }

    pub fn project_file(&self) -> PathBuf {
        paths::project_path(&self.root)
    }

    pub fn ledger_path(&self, id: &str) -> PathBuf {
        paths::ledger_path(&self.root, id)
    }

    pub fn archived_path(&self, id: &str) -> PathBuf {
        paths::archived_path(&self.root, id)
    }
}

/// Today's local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
