use crate::name::NameError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WrinklError {
    #[error("no .ai directory found: run 'wrinkl init' first")]
    NotInitialized,

    #[error(transparent)]
    InvalidName(#[from] NameError),

    #[error("feature name '{0}' does not produce a usable ledger id")]
    EmptyId(String),

    #[error("feature ledger \"{0}\" not found")]
    LedgerNotFound(String),

    #[error("feature ledger \"{0}\" already exists")]
    LedgerExists(String),

    #[error("feature \"{0}\" is already archived")]
    AlreadyArchived(String),

    #[error("template file not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, WrinklError>;
