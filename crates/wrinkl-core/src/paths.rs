use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const AI_DIR: &str = ".ai";
pub const LEDGERS_DIR: &str = ".ai/ledgers";
pub const ARCHIVED_DIR: &str = ".ai/ledgers/archived";

pub const README_FILE: &str = ".ai/README.md";
pub const PROJECT_FILE: &str = ".ai/project.md";
pub const PATTERNS_FILE: &str = ".ai/patterns.md";
pub const ARCHITECTURE_FILE: &str = ".ai/architecture.md";
pub const CONTEXT_RULES_FILE: &str = ".ai/context-rules.md";
pub const CONFIG_FILE: &str = ".ai/wrinkl.yaml";

pub const ACTIVE_FILE: &str = ".ai/ledgers/_active.md";
pub const TEMPLATE_FILE: &str = ".ai/ledgers/_template.md";

pub const CURSORRULES_FILE: &str = ".cursorrules";
pub const AUGMENT_FILE: &str = "augment.md";
pub const COPILOT_FILE: &str = ".github/copilot-instructions.md";

/// Extension of every ledger file.
pub const LEDGER_EXT: &str = "md";

/// Ledger-directory entries starting with this are internal files, not features.
pub const RESERVED_PREFIX: char = '_';

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn ai_dir(root: &Path) -> PathBuf {
    root.join(AI_DIR)
}

pub fn ledgers_dir(root: &Path) -> PathBuf {
    root.join(LEDGERS_DIR)
}

pub fn archived_dir(root: &Path) -> PathBuf {
    root.join(ARCHIVED_DIR)
}

pub fn ledger_file_name(id: &str) -> String {
    format!("{id}.{LEDGER_EXT}")
}

pub fn ledger_path(root: &Path, id: &str) -> PathBuf {
    ledgers_dir(root).join(ledger_file_name(id))
}

pub fn archived_path(root: &Path, id: &str) -> PathBuf {
    archived_dir(root).join(ledger_file_name(id))
}

pub fn active_path(root: &Path) -> PathBuf {
    root.join(ACTIVE_FILE)
}

pub fn template_path(root: &Path) -> PathBuf {
    root.join(TEMPLATE_FILE)
}

pub fn project_path(root: &Path) -> PathBuf {
    root.join(PROJECT_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
