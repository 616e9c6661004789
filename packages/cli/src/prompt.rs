//! Line input for the interactive session.

use std::collections::VecDeque;

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::error::CliError;

/// Source of user input lines.
pub trait Prompt {
    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` once input is closed (end of input or interrupt).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

/// Prompt backed by a rustyline editor with in-memory history.
pub struct RustylinePrompt {
    editor: DefaultEditor,
}

impl RustylinePrompt {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompt for RustylinePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(e) = self.editor.add_history_entry(line.as_str())
                {
                    tracing::debug!("Failed to record history entry: {}", e);
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Prompt fed from a fixed list of lines, for scripted sessions.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    /// Prompts shown so far, in order
    pub shown: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            shown: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        self.shown.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}
