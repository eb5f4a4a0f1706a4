//! Embedded scaffold templates and placeholder substitution.
//!
//! Scaffold files use `[KEY]` placeholders filled by [`render`]. The ledger
//! template has its own fixed markers, filled by [`render_ledger`].

// ---------------------------------------------------------------------------
// Placeholder substitution
// ---------------------------------------------------------------------------

/// Replace every `[KEY]` in `template` with its value.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("[{key}]"), value);
    }
    out
}

pub const LEDGER_NAME_MARKER: &str = "[Feature Name]";
pub const LEDGER_BRANCH_MARKER: &str = "feat/feature-name";
pub const LEDGER_SUMMARY_MARKER: &str = "[1-2 sentences: what this does and why it's needed]";
pub const LEDGER_OWNER_MARKER: &str = "[Human | AI | Pair]";
pub const LEDGER_DATE_MARKER: &str = "YYYY-MM-DD";

/// Values written into a new ledger.
#[derive(Debug, Clone)]
pub struct LedgerFields<'a> {
    /// The raw name as the user typed it; used as the heading.
    pub name: &'a str,
    pub id: &'a str,
    pub summary: &'a str,
    pub owner: &'a str,
    pub date: &'a str,
}

/// Fill the ledger template.
///
/// The name, owner and date markers are replaced everywhere; the branch and
/// summary markers only at their first occurrence.
pub fn render_ledger(template: &str, fields: &LedgerFields<'_>) -> String {
    template
        .replace(LEDGER_NAME_MARKER, fields.name)
        .replacen(LEDGER_BRANCH_MARKER, &format!("feat/{}", fields.id), 1)
        .replacen(LEDGER_SUMMARY_MARKER, fields.summary, 1)
        .replace(LEDGER_OWNER_MARKER, fields.owner)
        .replace(LEDGER_DATE_MARKER, fields.date)
}

// ---------------------------------------------------------------------------
// Scaffold templates
// ---------------------------------------------------------------------------

pub const AI_README: &str = r#"# .ai

Context for AI coding assistants working in this repository.

| File | Purpose |
|------|---------|
| `project.md` | What this project is, its stack, and its constraints |
| `patterns.md` | Code patterns to follow (and ones to avoid) |
| `architecture.md` | How the system fits together |
| `context-rules.md` | Which files to load for which kind of task |
| `ledgers/_active.md` | What is being worked on right now |
| `ledgers/<feature>.md` | One ledger per feature |
| `ledgers/archived/` | Finished feature ledgers |

## Working with ledgers

- `wrinkl feature "<name>"` creates a ledger from `ledgers/_template.md`.
- `wrinkl list` shows active ledgers; `wrinkl list --all` includes archived ones.
- `wrinkl archive <name>` moves a finished ledger into `ledgers/archived/`.

Keep ledgers short. Update them as decisions are made, not after the fact.
"#;

pub const AI_PROJECT: &str = r#"# [PROJECT_NAME]

**Type:** [PROJECT_TYPE]
**Stack:** [STACK]
**Created:** [DATE]

## Overview

What this project does and who it is for.

## Goals

- Primary goal
- Secondary goal

## Constraints

- Performance, compatibility, or compliance requirements

## Key Decisions

| Date | Decision | Why |
|------|----------|-----|
| [DATE] | Project initialized | |
"#;

pub const AI_PATTERNS: &str = r#"# Patterns

Conventions an assistant should follow when writing code here.

## Do

- Follow the existing module layout
- Match the error handling style of surrounding code
- Add tests next to the code they cover

## Avoid

- New dependencies without discussion
- Large refactors mixed into feature work

## Examples

Add short, real snippets from this codebase that show the preferred style.
"#;

pub const AI_ARCHITECTURE: &str = r#"# Architecture

## Components

Describe the major components and what each owns.

## Data Flow

Describe how a request or job moves through the system.

## Boundaries

- External services
- Storage
- Interfaces other teams depend on
"#;

pub const AI_CONTEXT_RULES: &str = r#"# Context Rules

Which context to load for which kind of task.

| Task | Load |
|------|------|
| New feature | `project.md`, `patterns.md`, the feature ledger |
| Bug fix | `architecture.md`, the relevant ledger |
| Refactor | `patterns.md`, `architecture.md` |
| Review | `patterns.md`, `ledgers/_active.md` |

Always read `ledgers/_active.md` first to see what is in flight.
"#;

pub const LEDGER_TEMPLATE: &str = r#"# [Feature Name]

**Summary:** [1-2 sentences: what this does and why it's needed]
**Status:** Planning
**Owner:** [Human | AI | Pair]
**Branch:** feat/feature-name
**Created:** YYYY-MM-DD
**Updated:** YYYY-MM-DD

## Context

Why this feature exists and what it touches.

## Tasks

- [ ] Task 1
- [ ] Task 2

## Decisions

| Date | Decision | Why |
|------|----------|-----|
| YYYY-MM-DD | | |

## Notes

Development notes, open questions, and gotchas.
"#;

pub const UP_NEXT_HEADING: &str = "## 🔴 Up Next (Priority Order)";

pub const ACTIVE_BOARD: &str = r#"# Active Features

**Last Updated:** [DATE]

## 🟢 In Progress

## 🔴 Up Next (Priority Order)

## 🟡 Blocked

## 🔵 Under Review

## 📋 Backlog
"#;

pub const CURSORRULES: &str = r#"# Cursor Rules

Before making changes:
1. Read `.ai/project.md` and `.ai/patterns.md`.
2. Check `.ai/ledgers/_active.md` for work in progress.
3. If working on a feature, read its ledger in `.ai/ledgers/`.

While working:
- Follow the patterns in `.ai/patterns.md`.
- Record decisions in the feature ledger.
- Keep changes scoped to the current feature.
"#;

pub const AUGMENT: &str = r#"# Augment Guidelines

Use the `.ai/` directory as the source of truth for project context.

- Start with `.ai/project.md` for goals and stack.
- Use `.ai/context-rules.md` to decide what else to load.
- Update the relevant ledger in `.ai/ledgers/` when you finish a task.
"#;

pub const COPILOT_INSTRUCTIONS: &str = r#"# Copilot Instructions

This repository keeps assistant context in `.ai/`.

- Project overview: `.ai/project.md`
- Coding patterns: `.ai/patterns.md`
- Architecture: `.ai/architecture.md`
- Work in progress: `.ai/ledgers/_active.md`

Prefer the conventions in `.ai/patterns.md` over general defaults.
"#;
