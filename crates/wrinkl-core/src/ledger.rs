use crate::board::{self, BoardUpdate};
use crate::config::Config;
use crate::error::{Result, WrinklError};
use crate::io;
use crate::markdown;
use crate::name;
use crate::paths::{self, LEDGER_EXT, RESERVED_PREFIX};
use crate::template::{self, LedgerFields};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const NO_SUMMARY: &str = "No summary available";
pub const UNKNOWN_STATUS: &str = "Unknown";
pub const ARCHIVE_NOTES_HEADING: &str = "## Archive Notes";

// ---------------------------------------------------------------------------
// Storage scanning
// ---------------------------------------------------------------------------

/// Ids of every `*.md` file in `dir`, sorted by file name.
fn markdown_ids(dir: &Path) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        // Follows symlinks, matching the `is_file` lookups used elsewhere.
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(LEDGER_EXT) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            ids.push(stem.to_string());
        }
    }
    ids.sort();
    Ok(ids)
}

/// Ledger ids stored in `dir`, skipping reserved `_` files.
///
/// A missing directory yields no ids.
pub fn scan_ids(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let ids: Vec<String> = markdown_ids(dir)?
        .into_iter()
        .filter(|id| !id.starts_with(RESERVED_PREFIX))
        .collect();
    tracing::debug!(dir = %dir.display(), count = ids.len(), "scanned ledgers");
    Ok(ids)
}

// ---------------------------------------------------------------------------
// LedgerSummary
// ---------------------------------------------------------------------------

/// What `list` shows for one ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub id: String,
    pub file: String,
    pub title: String,
    pub summary: String,
    pub status: String,
}

impl LedgerSummary {
    pub fn parse(id: &str, file: impl Into<String>, content: &str) -> Self {
        Self {
            id: id.to_string(),
            file: file.into(),
            title: markdown::title(content).unwrap_or_else(|| id.to_string()),
            summary: markdown::summary(content).unwrap_or_else(|| NO_SUMMARY.to_string()),
            status: markdown::status(content).unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
        }
    }
}

fn summarize_dir(dir: &Path, ids: Vec<String>, file_prefix: &str) -> Result<Vec<LedgerSummary>> {
    ids.into_iter()
        .map(|id| {
            let file_name = paths::ledger_file_name(&id);
            let content = io::read_lossy(&dir.join(&file_name))?;
            Ok(LedgerSummary::parse(&id, format!("{file_prefix}{file_name}"), &content))
        })
        .collect()
}

/// Active ledgers, or `None` when the ledgers directory does not exist.
pub fn list_active(config: &Config) -> Result<Option<Vec<LedgerSummary>>> {
    let dir = config.ledgers_dir();
    if !dir.is_dir() {
        return Ok(None);
    }
    let ids = scan_ids(&dir)?;
    summarize_dir(&dir, ids, "").map(Some)
}

/// Archived ledgers; a missing archive directory is an empty archive.
pub fn list_archived(config: &Config) -> Result<Vec<LedgerSummary>> {
    let dir = config.archived_dir();
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let ids = markdown_ids(&dir)?;
    summarize_dir(&dir, ids, "archived/")
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

fn ensure_initialized(config: &Config) -> Result<()> {
    if !config.is_initialized() {
        return Err(WrinklError::NotInitialized);
    }
    Ok(())
}

/// Validate a raw feature name and return the id a new ledger would use.
///
/// Fails if the name is invalid or a ledger with that id already exists.
pub fn new_ledger_id(config: &Config, raw_name: &str) -> Result<String> {
    ensure_initialized(config)?;
    if let Some(err) = name::validate(raw_name) {
        return Err(err.into());
    }
    let id = name::normalize(raw_name);
    if id.is_empty() {
        return Err(WrinklError::EmptyId(raw_name.to_string()));
    }
    if config.ledger_path(&id).exists() {
        return Err(WrinklError::LedgerExists(id));
    }
    Ok(id)
}

#[derive(Debug, Clone)]
pub struct NewLedger<'a> {
    pub name: &'a str,
    pub summary: &'a str,
    pub owner: &'a str,
    pub date: &'a str,
}

#[derive(Debug, Clone)]
pub struct Created {
    pub id: String,
    pub path: PathBuf,
    pub board: BoardUpdate,
}

/// Write a new ledger from `_template.md` and list it on the board.
pub fn create(config: &Config, new: &NewLedger<'_>) -> Result<Created> {
    let id = new_ledger_id(config, new.name)?;

    let template_path = config.template_file();
    let Some(template) = io::read_if_exists(&template_path)? else {
        return Err(WrinklError::TemplateMissing(template_path));
    };

    let content = template::render_ledger(
        &template,
        &LedgerFields {
            name: new.name,
            id: &id,
            summary: new.summary,
            owner: new.owner,
            date: new.date,
        },
    );
    let path = config.ledger_path(&id);
    io::atomic_write(&path, content.as_bytes())?;
    tracing::debug!(id = %id, "created ledger");

    let board = board::add_entry(&config.active_file(), &id, new.summary)?;
    if board != BoardUpdate::Updated {
        tracing::debug!(id = %id, ?board, "ledger not added to _active.md");
    }

    Ok(Created { id, path, board })
}

// ---------------------------------------------------------------------------
// Archival
// ---------------------------------------------------------------------------

/// Resolve a raw name to an active ledger that can be archived.
///
/// The name is normalized but not validated.
pub fn resolve_for_archive(config: &Config, raw_name: &str) -> Result<String> {
    ensure_initialized(config)?;
    let id = name::normalize(raw_name);
    if id.is_empty() || !config.ledger_path(&id).is_file() {
        return Err(WrinklError::LedgerNotFound(id));
    }
    if config.archived_path(&id).exists() {
        return Err(WrinklError::AlreadyArchived(id));
    }
    Ok(id)
}

/// Stamp a ledger's content as archived on `date`.
pub fn mark_archived(content: &str, date: &str) -> String {
    let mut out = markdown::replace_status(content, &format!("Archived ({date})"));
    if !out.contains(ARCHIVE_NOTES_HEADING) {
        out.push_str(&format!("\n\n{ARCHIVE_NOTES_HEADING}\n\nArchived on {date}.\n"));
    }
    out
}

#[derive(Debug, Clone)]
pub struct Archived {
    pub id: String,
    pub path: PathBuf,
    /// Board outcome, or the error text if the board could not be updated.
    pub board: std::result::Result<BoardUpdate, String>,
}

/// Move an active ledger into the archive and drop it from the board.
pub fn archive(config: &Config, raw_name: &str, date: &str) -> Result<Archived> {
    let id = resolve_for_archive(config, raw_name)?;
    let source = config.ledger_path(&id);
    let content = io::read_lossy(&source)?;

    let dest = config.archived_path(&id);
    io::ensure_dir(&config.archived_dir())?;
    io::atomic_write(&dest, mark_archived(&content, date).as_bytes())?;
    std::fs::remove_file(&source)?;
    tracing::debug!(id = %id, "archived ledger");

    let board = board::remove_entry(&config.active_file(), &id).map_err(|e| {
        tracing::debug!(id = %id, error = %e, "could not update _active.md");
        e.to_string()
    });

    Ok(Archived {
        id,
        path: dest,
        board,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
