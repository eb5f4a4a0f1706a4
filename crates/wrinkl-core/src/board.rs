//! Maintenance of the `_active.md` priority board.

use crate::error::Result;
use crate::io;
use crate::template::UP_NEXT_HEADING;
use std::path::Path;

/// What happened to the board file during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardUpdate {
    Updated,
    Unchanged,
    MissingFile,
    MissingSection,
}

/// The board line for a ledger.
pub fn entry_line(id: &str, summary: &str) -> String {
    format!("1. **[{id}]({id}.md)** - {summary}")
}

/// Insert `line` directly below the "Up Next" heading.
pub fn insert_up_next(content: &str, line: &str) -> Option<String> {
    let heading = content.find(UP_NEXT_HEADING)?;
    let after_heading = heading + UP_NEXT_HEADING.len();

    let mut out = String::with_capacity(content.len() + line.len() + 2);
    match content[after_heading..].find('\n') {
        Some(offset) => {
            let split = after_heading + offset + 1;
            out.push_str(&content[..split]);
            out.push_str(line);
            out.push('\n');
            out.push_str(&content[split..]);
        }
        None => {
            out.push_str(content);
            out.push('\n');
            out.push_str(line);
            out.push('\n');
        }
    }
    Some(out)
}

/// Drop every line that links to ledger `id`.
///
/// Returns `None` when no line referenced it.
pub fn remove_entries(content: &str, id: &str) -> Option<String> {
    let link_text = format!("[{id}]");
    let link_target = format!("({id}.md)");
    let lines: Vec<&str> = content.split('\n').collect();
    let kept: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| !line.contains(&link_text) && !line.contains(&link_target))
        .collect();
    if kept.len() == lines.len() {
        return None;
    }
    Some(kept.join("\n"))
}

/// Add a ledger to the board file at `path`.
pub fn add_entry(path: &Path, id: &str, summary: &str) -> Result<BoardUpdate> {
    let Some(content) = io::read_if_exists(path)? else {
        return Ok(BoardUpdate::MissingFile);
    };
    let Some(updated) = insert_up_next(&content, &entry_line(id, summary)) else {
        return Ok(BoardUpdate::MissingSection);
    };
    io::atomic_write(path, updated.as_bytes())?;
    Ok(BoardUpdate::Updated)
}

/// Remove a ledger from the board file at `path`.
pub fn remove_entry(path: &Path, id: &str) -> Result<BoardUpdate> {
    let Some(content) = io::read_if_exists(path)? else {
        return Ok(BoardUpdate::MissingFile);
    };
    let Some(updated) = remove_entries(&content, id) else {
        return Ok(BoardUpdate::Unchanged);
    };
    io::atomic_write(path, updated.as_bytes())?;
    Ok(BoardUpdate::Updated)
}
