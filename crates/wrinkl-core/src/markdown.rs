//! Header extraction from ledger and project markdown.

use regex::Regex;
use std::sync::OnceLock;

static TITLE_RE: OnceLock<Regex> = OnceLock::new();
static SUMMARY_RE: OnceLock<Regex> = OnceLock::new();
static STATUS_RE: OnceLock<Regex> = OnceLock::new();
static TYPE_RE: OnceLock<Regex> = OnceLock::new();
static STACK_RE: OnceLock<Regex> = OnceLock::new();

fn title_re() -> &'static Regex {
    TITLE_RE.get_or_init(|| Regex::new(r"(?m)^#[ \t]+([^\r\n]+)").unwrap())
}

fn summary_re() -> &'static Regex {
    SUMMARY_RE.get_or_init(|| Regex::new(r"\*\*Summary:\*\* ([^\r\n]+)").unwrap())
}

fn status_re() -> &'static Regex {
    STATUS_RE.get_or_init(|| Regex::new(r"\*\*Status:\*\* ([^\r\n]+)").unwrap())
}

fn type_re() -> &'static Regex {
    TYPE_RE.get_or_init(|| Regex::new(r"\*\*Type:\*\* ([^\r\n]+)").unwrap())
}

fn stack_re() -> &'static Regex {
    STACK_RE.get_or_init(|| Regex::new(r"\*\*Stack:\*\* ([^\r\n]+)").unwrap())
}

/// The first level-one heading.
pub fn title(content: &str) -> Option<String> {
    capture(title_re(), content)
}

/// The `**Summary:**` line of a ledger.
pub fn summary(content: &str) -> Option<String> {
    capture(summary_re(), content)
}

pub fn status(content: &str) -> Option<String> {
    capture(status_re(), content)
}

/// The `**Type:**` line of `project.md`.
pub fn project_type(content: &str) -> Option<String> {
    capture(type_re(), content)
}

pub fn stack(content: &str) -> Option<String> {
    capture(stack_re(), content)
}

/// Rewrite the first `**Status:**` line to `replacement`.
///
/// Returns the content unchanged when there is no status line.
pub fn replace_status(content: &str, replacement: &str) -> String {
    let line = format!("**Status:** {replacement}");
    status_re()
        .replace(content, regex::NoExpand(&line))
        .into_owned()
}

fn capture(re: &Regex, content: &str) -> Option<String> {
    re.captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_end().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEDGER: &str = "# User Authentication\n\n**Summary:** Implement user login\n**Status:** In Progress\n**Branch:** feat/user-auth\n\n## Description\nJWT.\n";

    #[test]
    fn extracts_headers() {
        assert_eq!(title(LEDGER).as_deref(), Some("User Authentication"));
        assert_eq!(summary(LEDGER).as_deref(), Some("Implement user login"));
        assert_eq!(status(LEDGER).as_deref(), Some("In Progress"));
    }

    #[test]
    fn missing_headers_are_none() {
        let content = "no headers here\n## Only a subsection\n";
        assert_eq!(title(content), None);
        assert_eq!(summary(content), None);
        assert_eq!(project_type(content), None);
        assert_eq!(status(content), None);
    }

    #[test]
    fn title_skips_subsections() {
        assert_eq!(title("## Notes\n# Real Title\n").as_deref(), Some("Real Title"));
    }

    #[test]
    fn crlf_is_trimmed() {
        let content = "# Windows Title\r\n**Status:** Complete\r\n";
        assert_eq!(title(content).as_deref(), Some("Windows Title"));
        assert_eq!(status(content).as_deref(), Some("Complete"));
    }

    #[test]
    fn project_fields() {
        let content = "# Shop\n\n**Type:** web app\n**Stack:** Rust, Axum\n";
        assert_eq!(project_type(content).as_deref(), Some("web app"));
        assert_eq!(stack(content).as_deref(), Some("Rust, Axum"));
        assert_eq!(summary(content), None);
    }

    #[test]
    fn replace_status_only_first() {
        let content = "**Status:** Complete\nlater **Status:** Other\n";
        let out = replace_status(content, "Archived (2024-02-01)");
        assert_eq!(out, "**Status:** Archived (2024-02-01)\nlater **Status:** Other\n");
    }

    #[test]
    fn replace_status_without_line_is_noop() {
        assert_eq!(replace_status("# Title\n", "Archived"), "# Title\n");
    }

    #[test]
    fn replace_status_is_literal() {
        let out = replace_status("**Status:** Draft\n", "Archived ($1)");
        assert_eq!(out, "**Status:** Archived ($1)\n");
    }
}
