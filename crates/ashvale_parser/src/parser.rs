//! Turning free text into a canonical [`Command`].

use std::fmt;

use ashvale_engine::{Command, Verb, VisibleContext};
use ashvale_foundation::Result;

use crate::tokenizer::InputTokenizer;
use crate::vocabulary::{Phrase, Vocabulary};

/// Confidence for a bare direction or a `go` with a direction.
pub const DIRECTION_CONFIDENCE: f64 = 0.95;
/// Confidence for a recognised verb phrase.
pub const PHRASE_CONFIDENCE: f64 = 0.92;
/// Confidence when the first word is itself a verb.
pub const LEADING_VERB_CONFIDENCE: f64 = 0.9;
/// Confidence of the help fallback.
pub const FALLBACK_CONFIDENCE: f64 = 0.2;

/// Which parser produced a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParserKind {
    /// The keyword rules in this crate.
    Rule,
    /// An external language model.
    Model,
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParserKind::Rule => "rule",
            ParserKind::Model => "model",
        })
    }
}

/// Everything a parser may look at.
#[derive(Clone, Copy, Debug)]
pub struct ParseInput<'a> {
    /// Raw player text.
    pub text: &'a str,
    /// What the player can currently see.
    pub visible: &'a VisibleContext,
    /// Verbs with a registered handler.
    pub allowed_verbs: &'a [Verb],
    /// Milliseconds since the epoch, for cache expiry.
    pub now_ms: u64,
}

impl<'a> ParseInput<'a> {
    /// Creates an input stamped at time zero.
    #[must_use]
    pub fn new(text: &'a str, visible: &'a VisibleContext, allowed_verbs: &'a [Verb]) -> Self {
        Self {
            text,
            visible,
            allowed_verbs,
            now_ms: 0,
        }
    }

    /// Sets the current time.
    #[must_use]
    pub fn at(mut self, now_ms: u64) -> Self {
        self.now_ms = now_ms;
        self
    }
}

/// A command together with how sure the parser is of it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedCommand {
    /// The canonical command.
    pub command: Command,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// The parser that produced it.
    pub parser: ParserKind,
    /// Why the parser settled on this command.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub rationale: Option<String>,
}

impl ParsedCommand {
    /// Creates a parsed command.
    #[must_use]
    pub fn new(command: Command, confidence: f64, parser: ParserKind) -> Self {
        Self {
            command,
            confidence: confidence.clamp(0.0, 1.0),
            parser,
            rationale: None,
        }
    }

    /// Sets the rationale.
    #[must_use]
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    /// Replaces the command with `help`, capping confidence at 0.3.
    #[must_use]
    pub fn into_help(self, rationale: impl Into<String>) -> Self {
        Self {
            command: Command::new(Verb::Help),
            confidence: self.confidence.min(0.3),
            parser: self.parser,
            rationale: Some(rationale.into()),
        }
    }
}

/// Anything that can turn text into a command.
pub trait CommandParser: Send + Sync {
    /// Parses one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser could not produce an answer at all.
    /// Text the parser does not understand is not an error; it becomes a
    /// low-confidence `help`.
    fn parse(&self, input: &ParseInput<'_>) -> Result<ParsedCommand>;

    /// Which kind of parser this is.
    fn kind(&self) -> ParserKind;
}

/// Keyword-based parser.
///
/// Never fails: unrecognised input becomes `help` with confidence 0.2.
#[derive(Clone, Debug)]
pub struct RuleParser {
    vocabulary: Vocabulary,
}

impl Default for RuleParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleParser {
    /// A parser with the standard vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::standard())
    }

    /// A parser with a custom vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary in use.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parses text against the visible context.
    #[must_use]
    pub fn parse_text(&self, text: &str, visible: &VisibleContext) -> ParsedCommand {
        let words = InputTokenizer::tokenize(text);
        let rationale = format!("Rule-based parse for \"{}\"", text.trim());

        if let [only] = words.as_slice() {
            if let Some(direction) = self.vocabulary.direction(only) {
                return ParsedCommand::new(
                    Command::new(Verb::Go).with_object(direction.as_str()),
                    DIRECTION_CONFIDENCE,
                    ParserKind::Rule,
                )
                .with_rationale(rationale);
            }
        }

        if let Some(found) = self.vocabulary.match_verb(&words) {
            if found.verb == Verb::Go {
                let direction = self.vocabulary.first_direction(&words);
                let mut command = Command::new(Verb::Go);
                if let Some(direction) = direction {
                    command = command.with_object(direction.as_str());
                }
                let confidence = if direction.is_some() {
                    DIRECTION_CONFIDENCE
                } else {
                    PHRASE_CONFIDENCE
                };
                return ParsedCommand::new(command, confidence, ParserKind::Rule)
                    .with_rationale(rationale);
            }
            let rest: Vec<String> = words[..found.start]
                .iter()
                .chain(&words[found.start + found.len..])
                .cloned()
                .collect();
            return ParsedCommand::new(
                self.shape(found.verb, &words, &rest, visible),
                PHRASE_CONFIDENCE,
                ParserKind::Rule,
            )
            .with_rationale(rationale);
        }

        if let Some(verb) = words.first().and_then(|word| Verb::parse(word)) {
            return ParsedCommand::new(
                self.shape(verb, &words, &words[1..], visible),
                LEADING_VERB_CONFIDENCE,
                ParserKind::Rule,
            )
            .with_rationale(rationale);
        }

        ParsedCommand::new(Command::new(Verb::Help), FALLBACK_CONFIDENCE, ParserKind::Rule)
            .with_rationale("Fallback help command")
    }

    /// Builds a command from the words left after the verb.
    ///
    /// A visible item or actor mentioned anywhere in the input becomes the
    /// object verbatim. Otherwise the remaining words are split at the first
    /// preposition into object and target.
    fn shape(&self, verb: Verb, all: &[String], rest: &[String], visible: &VisibleContext) -> Command {
        let command = Command::new(verb);
        if let Some(id) = mentioned_id(all, visible) {
            return command.with_object(id);
        }

        let vocab = &self.vocabulary;
        let rest: Vec<&str> = rest
            .iter()
            .map(String::as_str)
            .skip_while(|word| vocab.is_filler(word) || vocab.is_preposition(word))
            .collect();
        let split = rest.iter().position(|word| vocab.is_preposition(word));
        let (object, tail) = match split {
            Some(at) => (&rest[..at], Some((rest[at], &rest[at + 1..]))),
            None => (&rest[..], None),
        };

        let mut command = command;
        let object = join_content(object, vocab);
        if !object.is_empty() {
            command = command.with_object(object);
        }
        if let Some((preposition, target)) = tail {
            let target = join_content(target, vocab);
            if !target.is_empty() {
                command = command.with_preposition(preposition).with_target(target);
            }
        }
        command
    }
}

impl CommandParser for RuleParser {
    fn parse(&self, input: &ParseInput<'_>) -> Result<ParsedCommand> {
        Ok(self.parse_text(input.text, input.visible))
    }

    fn kind(&self) -> ParserKind {
        ParserKind::Rule
    }
}

fn join_content(words: &[&str], vocab: &Vocabulary) -> String {
    words
        .iter()
        .filter(|word| !vocab.is_filler(word))
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A visible item id, then an actor id, named somewhere in `words`.
///
/// Ids match in their spaced form (`ward-candle-1` as `ward candle 1`);
/// actors also match without a numeric suffix (`husk-1` as `husk`).
fn mentioned_id(words: &[String], visible: &VisibleContext) -> Option<String> {
    let names = |id: &str| {
        let spaced = id.to_lowercase().replace(['-', '_'], " ");
        Phrase::new(&spaced).find_in(words).is_some()
    };

    if let Some(item) = visible.items.iter().find(|item| names(item.as_str())) {
        return Some(item.to_string());
    }
    visible
        .actors
        .iter()
        .find(|actor| names(actor.as_str()) || names(strip_numeric_suffix(actor.as_str())))
        .map(ToString::to_string)
}

fn strip_numeric_suffix(id: &str) -> &str {
    let trimmed = id.trim_end_matches(|c: char| c.is_ascii_digit());
    if trimmed.len() == id.len() {
        return id;
    }
    match trimmed.strip_suffix(['-', '_']) {
        Some(stem) if !stem.is_empty() => stem,
        _ => id,
    }
}
