mod cmd;
mod output;
mod prompt;
mod root;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cmd::init::InitOptions;
use prompt::{AcceptDefaults, LinePrompter, Prompter};
use std::path::PathBuf;
use wrinkl_core::config::Config;

#[derive(Parser)]
#[command(
    name = "wrinkl",
    about = "AI context management system with ledger-based feature tracking",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .ai/ or .git/)
    #[arg(long, global = true, env = "WRINKL_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log file operations to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize AI context system in the project root
    Init {
        /// Project name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Project type
        #[arg(short = 't', long = "type")]
        project_type: Option<String>,

        /// Technology stack
        #[arg(short = 's', long)]
        stack: Option<String>,

        /// Create the .cursorrules file without asking
        #[arg(long)]
        cursor: bool,

        /// Skip the .cursorrules file
        #[arg(long = "no-cursor", conflicts_with = "cursor")]
        no_cursor: bool,

        /// Include augment.md
        #[arg(long)]
        with_augment: bool,

        /// Include GitHub Copilot instructions
        #[arg(long)]
        with_copilot: bool,

        /// Accept defaults for anything not given and overwrite an existing setup
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Create a new feature ledger
    #[command(visible_alias = "f")]
    Feature {
        /// Feature name, e.g. "User Authentication"
        name: String,

        /// One or two sentences on what the feature does and why
        #[arg(long)]
        summary: Option<String>,

        /// Who owns the work (Human, AI, Pair)
        #[arg(long)]
        owner: Option<String>,
    },

    /// List active features
    #[command(visible_alias = "ls")]
    List {
        /// Include archived features
        #[arg(short = 'a', long)]
        all: bool,
    },

    /// Archive a completed feature
    Archive {
        /// Feature name or ledger id
        name: String,

        /// Archive without asking for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn prompter(assume_defaults: bool) -> Box<dyn Prompter> {
    if assume_defaults {
        Box::new(AcceptDefaults)
    } else {
        Box::new(LinePrompter::stdio())
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = Config::load(&root)
        .context("failed to load .ai/wrinkl.yaml")
        .and_then(|config| match cli.command {
            Commands::Init {
                name,
                project_type,
                stack,
                cursor,
                no_cursor,
                with_augment,
                with_copilot,
                yes,
            } => {
                let opts = InitOptions {
                    name,
                    project_type,
                    stack,
                    cursor: match (cursor, no_cursor) {
                        (_, true) => Some(false),
                        (true, false) => Some(true),
                        (false, false) => None,
                    },
                    with_augment,
                    with_copilot,
                    yes,
                };
                cmd::init::run(&config, opts, prompter(yes).as_mut(), cli.json)
            }
            Commands::Feature {
                name,
                summary,
                owner,
            } => cmd::feature::run(
                &config,
                &name,
                summary,
                owner,
                prompter(false).as_mut(),
                cli.json,
            ),
            Commands::List { all } => cmd::list::run(&config, all, cli.json),
            Commands::Archive { name, yes } => {
                cmd::archive::run(&config, &name, prompter(yes).as_mut(), cli.json)
            }
        });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
