//! The interactive game loop.

use std::path::Path;

use ashvale_foundation::{Result, SessionId};

use crate::editor::{LineEditor, ReadResult, RustylineEditor, default_keywords};
use crate::processor::{CommandProcessor, CommandRequest, CommandResponse};
use crate::serialize::{load_from_file, save_to_file, to_json_pretty};

const META_HELP: &str = "\
Meta commands:
  :state         Print the raw game state as JSON
  :view          Print the client view as JSON
  :save <path>   Save the game to a file
  :load <path>   Load a game from a file
  :restart       Start this session over
  :help          Show this message
  :quit          Leave the game";

/// What one line of input produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the player.
    Output(String),
    /// Nothing to show.
    Silent,
    /// The player asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Runs commands.
    processor: CommandProcessor,

    /// The session being played.
    session: SessionId,

    /// Text awaiting a yes or no.
    pending: Option<String>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(processor: CommandProcessor, session: SessionId) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, processor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(mut editor: E, processor: CommandProcessor, session: SessionId) -> Self {
        editor.set_keywords(default_keywords());
        Self {
            editor,
            processor,
            session,
            pending: None,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The session being played.
    #[must_use]
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// The command processor.
    #[must_use]
    pub fn processor(&self) -> &CommandProcessor {
        &self.processor
    }

    /// The line editor.
    #[must_use]
    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    match self.eval(&line) {
                        Ok(Outcome::Output(text)) => println!("{text}"),
                        Ok(Outcome::Silent) => {}
                        Ok(Outcome::Quit) => break,
                        Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
                    }
                }
                ReadResult::Interrupted => println!(),
                ReadResult::Eof => break,
            }
        }

        println!("\nThe embers dim. Farewell.");
        Ok(())
    }

    /// Evaluates one line: a meta command, an answer to a pending
    /// confirmation, or game input.
    ///
    /// # Errors
    ///
    /// Returns processor, file, or serialization errors.
    pub fn eval(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Outcome::Silent);
        }
        if let Some(meta) = line.strip_prefix(':') {
            self.pending = None;
            return self.eval_meta(meta);
        }

        if let Some(pending) = self.pending.take() {
            match line.to_lowercase().as_str() {
                "y" | "yes" => {
                    let response = self
                        .processor
                        .execute(&self.session, &CommandRequest::text(pending).confirmed())?;
                    return Ok(Outcome::Output(self.render(response)));
                }
                "n" | "no" => return Ok(Outcome::Output("Never mind.".to_string())),
                _ => {}
            }
        }

        let response = self.processor.execute(&self.session, &CommandRequest::text(line))?;
        if response.needs_confirm {
            self.pending = Some(line.to_string());
        }
        Ok(Outcome::Output(self.render(response)))
    }

    fn eval_meta(&mut self, meta: &str) -> Result<Outcome> {
        let (name, argument) = match meta.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (meta, ""),
        };
        match name {
            "q" | "quit" | "exit" => Ok(Outcome::Quit),
            "state" => {
                let state = self.processor.sessions().ensure(&self.session);
                Ok(Outcome::Output(to_json_pretty(&state)?))
            }
            "view" => {
                let _ = self.processor.sessions().ensure(&self.session);
                let view = self.processor.client_view(&self.session)?;
                Ok(Outcome::Output(to_json_pretty(&view)?))
            }
            "save" if !argument.is_empty() => {
                let state = self.processor.sessions().ensure(&self.session);
                save_to_file(&state, Path::new(argument))?;
                Ok(Outcome::Output(format!("Saved to {argument}.")))
            }
            "load" if !argument.is_empty() => {
                let state = load_from_file(Path::new(argument))?;
                self.session = self.processor.sessions().restore(state);
                Ok(Outcome::Output(format!("Loaded session {}.", self.session)))
            }
            "save" | "load" => Ok(Outcome::Output(format!(":{name} needs a file path."))),
            "restart" => {
                let _ = self.processor.sessions().restart(&self.session);
                Ok(Outcome::Output("The bell tolls, and you wake once more in the square.".to_string()))
            }
            "help" | "h" => Ok(Outcome::Output(META_HELP.to_string())),
            other => Ok(Outcome::Output(format!("Unknown meta command :{other}. Try :help."))),
        }
    }

    #[allow(clippy::unused_self)]
    fn render(&self, response: CommandResponse) -> String {
        if let Some(error) = response.error {
            return error;
        }
        if response.needs_confirm {
            return match response.nlu {
                Some(nlu) => format!("Did you mean \"{}\"? (yes/no)", nlu.canonical),
                None => "Please confirm. (yes/no)".to_string(),
            };
        }
        let mut text = response.result_text.unwrap_or_default();
        if response.state.as_ref().is_some_and(ashvale_engine::GameState::is_fallen) {
            text.push_str("\n(Type :restart to begin again.)");
        }
        text
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1mThe Ashen Vale\x1b[0m");
        println!("Night has fallen over Graysong. Type \"help\" for commands, \":help\" for meta commands.");
        println!();
    }
}
