use crate::config::Config;
use crate::error::Result;
use crate::io;
use crate::markdown;
use serde::Serialize;

/// The header block of `.ai/project.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub stack: Option<String>,
}

impl ProjectInfo {
    pub fn parse(content: &str) -> Self {
        Self {
            name: markdown::title(content),
            project_type: markdown::project_type(content),
            stack: markdown::stack(content),
        }
    }

    /// Read `.ai/project.md`, or `None` if it has not been written.
    pub fn load(config: &Config) -> Result<Option<Self>> {
        Ok(io::read_if_exists(&config.project_file())?.map(|c| Self::parse(&c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{render, AI_PROJECT};
    use tempfile::TempDir;

    #[test]
    fn parses_rendered_project() {
        let content = render(
            AI_PROJECT,
            &[
                ("PROJECT_NAME", "custom-project"),
                ("PROJECT_TYPE", "api"),
                ("STACK", "Python, FastAPI"),
                ("DATE", "2024-01-15"),
            ],
        );
        let info = ProjectInfo::parse(&content);
        assert_eq!(info.name.as_deref(), Some("custom-project"));
        assert_eq!(info.project_type.as_deref(), Some("api"));
        assert_eq!(info.stack.as_deref(), Some("Python, FastAPI"));
    }

    #[test]
    fn load_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path());
        assert!(ProjectInfo::load(&config).unwrap().is_none());
    }
}
