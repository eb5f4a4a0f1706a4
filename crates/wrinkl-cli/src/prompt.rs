//! Interactive questions.
//!
//! Every prompt answers `Ok(None)` when the user cancels (end of input), so
//! commands can stop cleanly without writing anything.

use anyhow::Context;
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Ask for a line of text. An empty answer yields `default` when given.
    fn ask_text(&mut self, message: &str, default: Option<&str>) -> anyhow::Result<Option<String>>;

    /// Ask a yes/no question. An empty answer yields `default`.
    fn ask_confirm(&mut self, message: &str, default: bool) -> anyhow::Result<Option<bool>>;
}

/// Ask until a non-empty answer is given; `None` on cancellation.
pub fn ask_required(
    prompter: &mut dyn Prompter,
    message: &str,
    default: Option<&str>,
    required: &str,
) -> anyhow::Result<Option<String>> {
    loop {
        match prompter.ask_text(message, default)? {
            None => return Ok(None),
            Some(answer) if answer.is_empty() => eprintln!("{required}"),
            Some(answer) => return Ok(Some(answer)),
        }
    }
}

// ---------------------------------------------------------------------------
// LinePrompter
// ---------------------------------------------------------------------------

/// Line-based prompts over any reader/writer pair.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<io::StdinLock<'static>, io::Stderr> {
    /// Questions go to stderr so `--json` output on stdout stays parseable.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self, question: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{question}").context("write prompt")?;
        self.output.flush().context("flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("read user input")?;
        if read == 0 {
            writeln!(self.output).context("write prompt")?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask_text(&mut self, message: &str, default: Option<&str>) -> anyhow::Result<Option<String>> {
        let question = match default {
            Some(d) => format!("{message} ({d}): "),
            None => format!("{message}: "),
        };
        Ok(self.read_answer(&question)?.map(|answer| {
            match default {
                Some(d) if answer.is_empty() => d.to_string(),
                _ => answer,
            }
        }))
    }

    fn ask_confirm(&mut self, message: &str, default: bool) -> anyhow::Result<Option<bool>> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let question = format!("{message} {hint} ");
        loop {
            let Some(answer) = self.read_answer(&question)? else {
                return Ok(None);
            };
            match answer.to_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.output, "Please answer y or n.").context("write prompt")?,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// AcceptDefaults
// ---------------------------------------------------------------------------

/// Answers every question with its default, without reading input.
///
/// A text question without a default counts as cancelled.
pub struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn ask_text(&mut self, _message: &str, default: Option<&str>) -> anyhow::Result<Option<String>> {
        Ok(default.map(str::to_string))
    }

    fn ask_confirm(&mut self, _message: &str, default: bool) -> anyhow::Result<Option<bool>> {
        Ok(Some(default))
    }
}
