//! Terminal input handling for the game loop.
//!
//! Uses a rustyline editor when stdin is a terminal and falls back to plain stdin reads
//! otherwise. Anything that yields lines can drive the game through [`LineSource`].

use std::collections::VecDeque;
use std::io::{self, IsTerminal, Write};

use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Outcome of reading a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// A source of player input lines.
pub trait LineSource {
    /// Show `prompt` (if the source is interactive) and read the next line.
    ///
    /// # Errors
    /// - if the underlying reader fails
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

/// Reads player input from the terminal.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match DefaultEditor::new() {
                Ok(editor) => {
                    info!("using rustyline-backed input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::Plain
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::Plain
        };
        Self { backend }
    }
}

impl LineSource for InputManager {
    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to plain stdin and retry once.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) if self.backend.is_rustyline() => {
                warn!("rustyline input failed: {err} -- switching to basic stdin");
                self.backend = Backend::Plain;
                self.backend.read_line(prompt)
            },
            Err(err) => Err(err),
        }
    }
}

enum Backend {
    Rustyline(DefaultEditor),
    Plain,
}

impl Backend {
    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty()
                        && let Err(err) = editor.add_history_entry(line.as_str())
                    {
                        warn!("failed to append to history: {err}");
                    }
                    Ok(InputEvent::Line(line))
                },
                Err(err) => convert_readline_error(err),
            },
            Backend::Plain => read_stdin_line(prompt),
        }
    }
}

fn read_stdin_line(prompt: &str) -> io::Result<InputEvent> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buffer = String::new();
    let bytes = io::stdin().read_line(&mut buffer)?;
    if bytes == 0 {
        return Ok(InputEvent::Eof);
    }
    Ok(InputEvent::Line(trim_line_ending(buffer)))
}

fn trim_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

/// Pre-recorded input, one entry per prompt. Reports `Eof` once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts_seen: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts_seen: 0,
        }
    }

    /// How many times input was requested.
    pub fn prompts_seen(&self) -> usize {
        self.prompts_seen
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<InputEvent> {
        self.prompts_seen += 1;
        Ok(self.lines.pop_front().map_or(InputEvent::Eof, InputEvent::Line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert_eq!(result, InputEvent::Interrupted);
        let result = convert_readline_error(ReadlineError::Eof).unwrap();
        assert_eq!(result, InputEvent::Eof);
    }

    #[test]
    fn trims_unix_and_windows_line_endings() {
        assert_eq!(trim_line_ending("e\n".into()), "e");
        assert_eq!(trim_line_ending("e\r\n".into()), "e");
        assert_eq!(trim_line_ending("e".into()), "e");
    }

    #[test]
    fn scripted_input_ends_with_eof() {
        let mut input = ScriptedInput::new(["n", "a"]);
        assert_eq!(input.read_line(">> ").unwrap(), InputEvent::Line("n".into()));
        assert_eq!(input.read_line(">> ").unwrap(), InputEvent::Line("a".into()));
        assert_eq!(input.read_line(">> ").unwrap(), InputEvent::Eof);
        assert_eq!(input.prompts_seen(), 3);
        assert_eq!(input.remaining(), 0);
    }
}
