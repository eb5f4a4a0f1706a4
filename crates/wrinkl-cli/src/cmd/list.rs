use crate::output::{print_json, warn};
use anyhow::Context;
use wrinkl_core::{
    config::Config,
    ledger::{self, LedgerSummary},
    project::ProjectInfo,
    WrinklError,
};

pub fn run(config: &Config, all: bool, json: bool) -> anyhow::Result<()> {
    if !config.is_initialized() {
        return Err(WrinklError::NotInitialized.into());
    }

    let project = ProjectInfo::load(config).context("failed to read .ai/project.md")?;
    let active = ledger::list_active(config).context("failed to list features")?;
    let archived = if all {
        Some(ledger::list_archived(config).context("failed to list archived features")?)
    } else {
        None
    };

    if json {
        return print_json(&serde_json::json!({
            "project": project,
            "active": active.unwrap_or_default(),
            "archived": archived,
        }));
    }

    if let Some(header) = project.as_ref().and_then(project_header) {
        println!("{header}\n");
    }

    match active {
        None => warn("No ledgers directory found."),
        Some(features) if features.is_empty() => {
            println!("No active feature ledgers found.");
            println!("Create your first feature with: wrinkl feature my-feature");
        }
        Some(features) => {
            println!("Active Features:");
            for f in &features {
                print_feature(f, true);
            }
        }
    }

    if let Some(archived) = archived {
        println!();
        if archived.is_empty() {
            println!("No archived features found.");
        } else {
            println!("Archived Features:");
            for f in &archived {
                print_feature(f, false);
            }
        }
    }

    Ok(())
}

fn project_header(info: &ProjectInfo) -> Option<String> {
    let name = info.name.as_deref()?;
    let details: Vec<&str> = [info.project_type.as_deref(), info.stack.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if details.is_empty() {
        Some(format!("Project: {name}"))
    } else {
        Some(format!("Project: {name} ({})", details.join(" / ")))
    }
}

fn print_feature(f: &LedgerSummary, with_status: bool) {
    println!("\n• {}", f.title);
    println!("  File:    {}", f.file);
    println!("  Summary: {}", f.summary);
    if with_status {
        println!("  Status:  {}", f.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_includes_known_details() {
        let info = ProjectInfo {
            name: Some("Shop".into()),
            project_type: Some("web app".into()),
            stack: Some("Rust".into()),
        };
        assert_eq!(project_header(&info).as_deref(), Some("Project: Shop (web app / Rust)"));

        let bare = ProjectInfo {
            name: Some("Shop".into()),
            project_type: None,
            stack: None,
        };
        assert_eq!(project_header(&bare).as_deref(), Some("Project: Shop"));
    }

    #[test]
    fn header_needs_a_name() {
        let info = ProjectInfo {
            name: None,
            project_type: Some("api".into()),
            stack: None,
        };
        assert!(project_header(&info).is_none());
    }
}
