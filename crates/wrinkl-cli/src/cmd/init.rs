use crate::output::{print_json, print_steps, warn};
use crate::prompt::{ask_required, Prompter};
use anyhow::Context;
use wrinkl_core::{
    config::{format_date, today, Config},
    io, paths,
    template::{self, render},
};

/// Flags given to `wrinkl init`; `None` means "ask".
#[derive(Debug, Default)]
pub struct InitOptions {
    pub name: Option<String>,
    pub project_type: Option<String>,
    pub stack: Option<String>,
    pub cursor: Option<bool>,
    pub with_augment: bool,
    pub with_copilot: bool,
    pub yes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Answers {
    project_name: String,
    project_type: String,
    stack: String,
    cursorrules: bool,
    augment: bool,
    copilot: bool,
}

pub fn run(
    config: &Config,
    opts: InitOptions,
    prompter: &mut dyn Prompter,
    json: bool,
) -> anyhow::Result<()> {
    if config.is_initialized() && !opts.yes {
        warn("AI context system is already initialized in this directory.");
        let overwrite =
            prompter.ask_confirm("Do you want to overwrite the existing configuration?", false)?;
        if overwrite != Some(true) {
            println!("Initialization cancelled.");
            return Ok(());
        }
    }

    let Some(answers) = gather_answers(config, opts, prompter)? else {
        println!("Initialization cancelled.");
        return Ok(());
    };

    let date = format_date(today());
    let archived = config.archived_dir();
    io::ensure_dir(&archived).with_context(|| format!("failed to create {}", archived.display()))?;

    let files = scaffold_files(&answers, &date);
    for (rel, content) in &files {
        let path = config.root().join(rel);
        io::atomic_write(&path, content.as_bytes())
            .with_context(|| format!("failed to write {rel}"))?;
        if !json {
            println!("  wrote:   {rel}");
        }
    }

    if json {
        let written: Vec<&str> = files.iter().map(|(rel, _)| *rel).collect();
        return print_json(&serde_json::json!({
            "root": config.root().display().to_string(),
            "project": answers.project_name,
            "files": written,
        }));
    }

    println!("\nAI context system initialized!");
    print_steps(
        "Next steps:",
        &[
            "Review and customize .ai/project.md",
            "Add project-specific patterns to .ai/patterns.md",
            "Create your first feature ledger: wrinkl feature my-first-feature",
            "Start coding with AI assistance!",
        ],
    );
    Ok(())
}

/// Fill in every answer not given as a flag. `None` if a prompt was cancelled.
fn gather_answers(
    config: &Config,
    opts: InitOptions,
    prompter: &mut dyn Prompter,
) -> anyhow::Result<Option<Answers>> {
    let defaults = &config.defaults;

    let project_name = match opts.name {
        Some(name) => name,
        None => {
            let dir_name = config
                .root()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "project".to_string());
            match ask_required(prompter, "Project name", Some(dir_name.as_str()), "Project name is required")? {
                Some(name) => name,
                None => return Ok(None),
            }
        }
    };

    let project_type = match opts.project_type {
        Some(t) => t,
        None => match prompter.ask_text("Project type", Some(defaults.project_type.as_str()))? {
            Some(t) => t,
            None => return Ok(None),
        },
    };

    let stack = match opts.stack {
        Some(s) => s,
        None => match prompter.ask_text("Technology stack", Some(defaults.stack.as_str()))? {
            Some(s) => s,
            None => return Ok(None),
        },
    };

    let cursorrules = match opts.cursor {
        Some(c) => c,
        None => match prompter.ask_confirm("Create .cursorrules file?", defaults.create_cursor_rules)? {
            Some(c) => c,
            None => return Ok(None),
        },
    };

    let augment = opts.with_augment
        || match prompter.ask_confirm("Create augment.md file?", defaults.create_augment)? {
            Some(a) => a,
            None => return Ok(None),
        };

    let copilot = opts.with_copilot
        || match prompter.ask_confirm("Create GitHub Copilot instructions?", defaults.create_copilot)? {
            Some(c) => c,
            None => return Ok(None),
        };

    Ok(Some(Answers {
        project_name,
        project_type,
        stack,
        cursorrules,
        augment,
        copilot,
    }))
}

/// Every file `init` writes, as (path relative to the root, content).
fn scaffold_files(answers: &Answers, date: &str) -> Vec<(&'static str, String)> {
    let project_vars = [
        ("PROJECT_NAME", answers.project_name.as_str()),
        ("PROJECT_TYPE", answers.project_type.as_str()),
        ("STACK", answers.stack.as_str()),
        ("DATE", date),
    ];

    let mut files = vec![
        (paths::README_FILE, template::AI_README.to_string()),
        (paths::PROJECT_FILE, render(template::AI_PROJECT, &project_vars)),
        (paths::PATTERNS_FILE, template::AI_PATTERNS.to_string()),
        (paths::ARCHITECTURE_FILE, template::AI_ARCHITECTURE.to_string()),
        (paths::CONTEXT_RULES_FILE, template::AI_CONTEXT_RULES.to_string()),
        (paths::TEMPLATE_FILE, template::LEDGER_TEMPLATE.to_string()),
        (paths::ACTIVE_FILE, render(template::ACTIVE_BOARD, &[("DATE", date)])),
    ];
    if answers.cursorrules {
        files.push((paths::CURSORRULES_FILE, template::CURSORRULES.to_string()));
    }
    if answers.augment {
        files.push((paths::AUGMENT_FILE, template::AUGMENT.to_string()));
    }
    if answers.copilot {
        files.push((paths::COPILOT_FILE, template::COPILOT_INSTRUCTIONS.to_string()));
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{AcceptDefaults, LinePrompter};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn scripted(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn flags_skip_their_prompts() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path());
        let opts = InitOptions {
            name: Some("custom-project".into()),
            project_type: Some("api".into()),
            stack: Some("Python, FastAPI".into()),
            ..Default::default()
        };
        // Remaining questions: cursorrules, augment, copilot.
        let mut p = scripted("n\ny\n\n");
        let answers = gather_answers(&config, opts, &mut p).unwrap().unwrap();
        assert_eq!(
            answers,
            Answers {
                project_name: "custom-project".into(),
                project_type: "api".into(),
                stack: "Python, FastAPI".into(),
                cursorrules: false,
                augment: true,
                copilot: false,
            }
        );
    }

    #[test]
    fn defaults_come_from_config() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new(dir.path().join("shop"));
        config.defaults.stack = "Rust".into();
        let answers = gather_answers(&config, InitOptions::default(), &mut AcceptDefaults)
            .unwrap()
            .unwrap();
        assert_eq!(answers.project_name, "shop");
        assert_eq!(answers.project_type, "web app");
        assert_eq!(answers.stack, "Rust");
        assert!(answers.cursorrules);
        assert!(!answers.augment);
        assert!(!answers.copilot);
    }

    #[test]
    fn cancelled_prompt_gathers_nothing() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path());
        let mut p = scripted("My Project\n");
        assert!(gather_answers(&config, InitOptions::default(), &mut p)
            .unwrap()
            .is_none());
    }

    #[test]
    fn scaffold_includes_optional_files_when_selected() {
        let mut answers = Answers {
            project_name: "P".into(),
            project_type: "cli".into(),
            stack: "Rust".into(),
            cursorrules: false,
            augment: false,
            copilot: false,
        };
        let base: Vec<_> = scaffold_files(&answers, "2024-01-15")
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert_eq!(
            base,
            vec![
                paths::README_FILE,
                paths::PROJECT_FILE,
                paths::PATTERNS_FILE,
                paths::ARCHITECTURE_FILE,
                paths::CONTEXT_RULES_FILE,
                paths::TEMPLATE_FILE,
                paths::ACTIVE_FILE,
            ]
        );
        assert!(!base.contains(&".cursorrules"));

        answers.cursorrules = true;
        answers.augment = true;
        answers.copilot = true;
        let all: Vec<_> = scaffold_files(&answers, "2024-01-15")
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert!(all.contains(&".cursorrules"));
        assert!(all.contains(&"augment.md"));
        assert!(all.contains(&".github/copilot-instructions.md"));
    }

    #[test]
    fn run_declined_overwrite_keeps_existing_files() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".ai")).unwrap();
        std::fs::write(dir.path().join(".ai/existing.md"), "existing content").unwrap();
        let config = Config::new(dir.path());

        run(&config, InitOptions::default(), &mut scripted("n\n"), false).unwrap();
        assert!(!dir.path().join(".ai/project.md").exists());
        assert_eq!(
            std::fs::read_to_string(dir.path().join(".ai/existing.md")).unwrap(),
            "existing content"
        );
    }

    #[test]
    fn run_writes_project_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path());
        let opts = InitOptions {
            name: Some("My Test Project".into()),
            project_type: Some("mobile app".into()),
            stack: Some("React Native, Node.js".into()),
            yes: true,
            ..Default::default()
        };
        run(&config, opts, &mut AcceptDefaults, false).unwrap();

        let project = std::fs::read_to_string(dir.path().join(".ai/project.md")).unwrap();
        assert!(project.contains("My Test Project"));
        assert!(project.contains("mobile app"));
        assert!(project.contains("React Native, Node.js"));
        assert!(dir.path().join(".ai/ledgers/archived").is_dir());
        assert!(dir.path().join(".cursorrules").exists());
        assert!(!dir.path().join("augment.md").exists());
    }
}
