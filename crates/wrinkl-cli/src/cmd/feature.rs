use crate::output::{display_path, print_json, print_steps, warn};
use crate::prompt::{ask_required, Prompter};
use anyhow::Context;
use wrinkl_core::{
    board::BoardUpdate,
    config::{format_date, today, Config},
    ledger::{self, NewLedger},
};

pub fn run(
    config: &Config,
    name: &str,
    summary: Option<String>,
    owner: Option<String>,
    prompter: &mut dyn Prompter,
    json: bool,
) -> anyhow::Result<()> {
    // Reject bad names and duplicates before asking anything.
    let id = ledger::new_ledger_id(config, name)?;

    let summary = match summary {
        Some(s) if s.trim().is_empty() => anyhow::bail!("Summary is required"),
        Some(s) => s.trim().to_string(),
        None => match ask_required(
            prompter,
            "Feature summary (1-2 sentences)",
            None,
            "Summary is required",
        )? {
            Some(s) => s,
            None => {
                println!("Feature creation cancelled.");
                return Ok(());
            }
        },
    };

    let owner = match owner {
        Some(o) => o,
        None => match prompter.ask_text("Owner", Some(config.defaults.owner.as_str()))? {
            Some(o) => o,
            None => {
                println!("Feature creation cancelled.");
                return Ok(());
            }
        },
    };

    let date = format_date(today());
    let created = ledger::create(
        config,
        &NewLedger {
            name,
            summary: &summary,
            owner: &owner,
            date: &date,
        },
    )
    .with_context(|| format!("failed to create feature ledger '{id}'"))?;

    let path = display_path(config.root(), &created.path);

    if json {
        return print_json(&serde_json::json!({
            "id": created.id,
            "path": path,
            "added_to_active": created.board == BoardUpdate::Updated,
        }));
    }

    match created.board {
        BoardUpdate::Updated => println!("Added feature to _active.md"),
        BoardUpdate::MissingFile => warn(
            "_active.md file not found. Feature created but not added to active list.",
        ),
        BoardUpdate::MissingSection => warn(
            "Could not find \"Up Next\" section in _active.md. Feature created but not added to active list.",
        ),
        BoardUpdate::Unchanged => {}
    }

    println!("Created feature ledger: {path}");
    let reference = format!(
        "Reference it in your AI prompts: \"Working on {} feature\"",
        created.id
    );
    print_steps(
        "To start working on this feature:",
        &[
            "Move it to \"In Progress\" in .ai/ledgers/_active.md",
            &reference,
        ],
    );
    Ok(())
}
