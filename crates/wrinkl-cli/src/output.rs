use serde::Serialize;
use std::path::Path;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn warn(message: &str) {
    eprintln!("warning: {message}");
}

/// `path` relative to `root` when it lives under it.
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Print numbered next-step hints.
pub fn print_steps(heading: &str, steps: &[&str]) {
    println!("\n{heading}");
    for (i, step) in steps.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_strips_root() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            display_path(root, Path::new("/tmp/proj/.ai/ledgers/x.md")),
            ".ai/ledgers/x.md"
        );
        assert_eq!(display_path(root, Path::new("/elsewhere/x.md")), "/elsewhere/x.md");
    }
}
