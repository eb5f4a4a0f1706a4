use crate::output::{display_path, print_json, warn};
use crate::prompt::Prompter;
use wrinkl_core::{
    board::BoardUpdate,
    config::{format_date, today, Config},
    ledger,
    suggest::suggest,
    WrinklError,
};

pub fn run(
    config: &Config,
    name: &str,
    prompter: &mut dyn Prompter,
    json: bool,
) -> anyhow::Result<()> {
    let id = match ledger::resolve_for_archive(config, name) {
        Ok(id) => id,
        Err(WrinklError::LedgerNotFound(id)) => {
            // Listing failures only cost the hint, never the real error.
            let ids = ledger::scan_ids(&config.ledgers_dir()).unwrap_or_default();
            anyhow::bail!("{}", not_found_message(&id, &ids));
        }
        Err(e) => return Err(e.into()),
    };

    let confirmed = prompter.ask_confirm(&format!("Archive feature \"{id}\"?"), true)?;
    if confirmed != Some(true) {
        println!("Archive cancelled.");
        return Ok(());
    }

    let archived = ledger::archive(config, &id, &format_date(today()))?;
    let path = display_path(config.root(), &archived.path);

    if json {
        return print_json(&serde_json::json!({
            "id": archived.id,
            "archived": true,
            "path": path,
        }));
    }

    match &archived.board {
        Ok(BoardUpdate::Updated) => println!("Removed feature from _active.md"),
        Ok(_) => {}
        Err(e) => warn(&format!("Could not update _active.md: {e}")),
    }
    println!("Feature \"{}\" archived successfully.", archived.id);
    println!("Moved to: {path}");
    Ok(())
}

/// The not-found error followed by the suggestion hint.
fn not_found_message(id: &str, ids: &[String]) -> String {
    format!(
        "{}\n{}",
        WrinklError::LedgerNotFound(id.to_string()),
        suggestion_hint(id, ids)
    )
}

/// What to tell the user when `id` matches no active ledger.
fn suggestion_hint(id: &str, ids: &[String]) -> String {
    if ids.is_empty() {
        return "No feature ledgers found.".to_string();
    }
    let close = suggest(id, ids);
    let (heading, names) = if close.is_empty() {
        ("Available features:", ids.to_vec())
    } else {
        ("Did you mean one of these?", close)
    };
    let mut out = heading.to_string();
    for name in names {
        out.push_str(&format!("\n  • {name}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn hint_without_ledgers() {
        assert_eq!(suggestion_hint("auth", &[]), "No feature ledgers found.");
    }

    #[test]
    fn hint_suggests_close_names() {
        let hint = suggestion_hint("user-auth", &ids(&["payment-system", "user-authentication"]));
        assert_eq!(hint, "Did you mean one of these?\n  • user-authentication");
    }

    #[test]
    fn hint_falls_back_to_everything() {
        let hint = suggestion_hint("zzzzzzzz", &ids(&["alpha", "beta"]));
        assert_eq!(hint, "Available features:\n  • alpha\n  • beta");
    }

    #[test]
    fn not_found_error_comes_before_hint() {
        let msg = not_found_message("user-auth", &ids(&["user-authentication"]));
        assert_eq!(
            msg,
            "feature ledger \"user-auth\" not found\nDid you mean one of these?\n  • user-authentication"
        );
    }
}
