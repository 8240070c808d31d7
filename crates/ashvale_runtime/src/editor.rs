//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`]; [`RustylineEditor`] is the terminal
//! implementation, with history hints and completion of verbs, directions,
//! and meta commands.

use ashvale_engine::Verb;
use ashvale_foundation::{Direction, Error, ErrorKind, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Highlighter, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set available completions.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

/// Words offered for completion: verbs, directions, and meta commands.
#[must_use]
pub fn default_keywords() -> Vec<String> {
    let verbs = Verb::ALL.iter().map(|verb| verb.as_str());
    let directions = Direction::ALL.iter().map(|direction| direction.as_str());
    let meta = [":quit", ":state", ":view", ":save", ":load", ":restart", ":help"];
    let mut words: Vec<String> = verbs.chain(directions).chain(meta).map(str::to_string).collect();
    words.sort();
    words.dedup();
    words
}

#[derive(Helper, Completer, Hinter, Highlighter, Validator)]
struct AshvaleHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

/// Completes the word under the cursor from a fixed list.
struct WordCompleter {
    keywords: Vec<String>,
}

impl WordCompleter {
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos].rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let word = line[start..pos].to_lowercase();
        let candidates = self
            .keywords
            .iter()
            .filter(|keyword| keyword.starts_with(&word))
            .map(|keyword| Pair {
                display: keyword.clone(),
                replacement: keyword.clone(),
            })
            .collect();
        (start, candidates)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<AshvaleHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = AshvaleHelper {
            completer: WordCompleter {
                keywords: default_keywords(),
            },
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::IoError(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }
}

/// An editor that replays scripted lines, then reports EOF.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    lines: std::collections::VecDeque<String>,
    history: Vec<String>,
}

impl ScriptedEditor {
    /// An editor that will return `lines` in order.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            history: Vec::new(),
        }
    }

    /// Lines added to history so far.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop_front().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}
