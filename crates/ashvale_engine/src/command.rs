//! Canonical commands and handler results.

use std::fmt;

use crate::event::Event;

/// The closed verb set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Verb {
    /// Describe the current room.
    Look,
    /// Walk through an exit.
    Go,
    /// Pick up a room item.
    Take,
    /// Consume an item, or fuse the shards.
    Use,
    /// Fuse the shards.
    Combine,
    /// Speak with a villager.
    Talk,
    /// Fight a visible enemy.
    Attack,
    /// List carried items.
    Inventory,
    /// List verbs and exits.
    Help,
    /// Pray once per room for healing.
    Pray,
    /// Wear or wield an item.
    Equip,
    /// Empty a slot.
    Unequip,
    /// Show effective stats.
    Stats,
    /// Show the neighbouring rooms.
    Map,
}

impl Verb {
    /// Every verb.
    pub const ALL: [Verb; 14] = [
        Verb::Look,
        Verb::Go,
        Verb::Take,
        Verb::Use,
        Verb::Combine,
        Verb::Talk,
        Verb::Attack,
        Verb::Inventory,
        Verb::Help,
        Verb::Pray,
        Verb::Equip,
        Verb::Unequip,
        Verb::Stats,
        Verb::Map,
    ];

    /// The lowercase verb word.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Verb::Look => "look",
            Verb::Go => "go",
            Verb::Take => "take",
            Verb::Use => "use",
            Verb::Combine => "combine",
            Verb::Talk => "talk",
            Verb::Attack => "attack",
            Verb::Inventory => "inventory",
            Verb::Help => "help",
            Verb::Pray => "pray",
            Verb::Equip => "equip",
            Verb::Unequip => "unequip",
            Verb::Stats => "stats",
            Verb::Map => "map",
        }
    }

    /// Parses an exact verb word, ignoring case.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        let word = word.trim().to_ascii_lowercase();
        Verb::ALL.into_iter().find(|verb| verb.as_str() == word)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorts verbs by their word and joins them with commas.
#[must_use]
pub fn verb_listing(verbs: &[Verb]) -> String {
    let mut words: Vec<&str> = verbs.iter().map(|verb| verb.as_str()).collect();
    words.sort_unstable();
    words.join(", ")
}

/// A parsed or structured command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    /// The action.
    pub verb: Verb,
    /// Direct object text, as typed.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub object: Option<String>,
    /// Preposition such as `with` or `on`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub preposition: Option<String>,
    /// Indirect object text.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub target: Option<String>,
}

impl Command {
    /// A bare verb.
    #[must_use]
    pub fn new(verb: Verb) -> Self {
        Self {
            verb,
            object: None,
            preposition: None,
            target: None,
        }
    }

    /// Sets the direct object.
    #[must_use]
    pub fn with_object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Sets the preposition.
    #[must_use]
    pub fn with_preposition(mut self, preposition: impl Into<String>) -> Self {
        self.preposition = Some(preposition.into());
        self
    }

    /// Sets the indirect object.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// The trimmed direct object, if non-empty.
    #[must_use]
    pub fn object(&self) -> Option<&str> {
        self.object
            .as_deref()
            .map(str::trim)
            .filter(|object| !object.is_empty())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb)?;
        for part in [&self.object, &self.preposition, &self.target]
            .into_iter()
            .flatten()
        {
            write!(f, " {part}")?;
        }
        Ok(())
    }
}

/// What a handler hands back: the events to apply and the text to show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandResult {
    /// Events in application order.
    pub events: Vec<Event>,
    /// Player-facing text.
    pub text: String,
}

impl CommandResult {
    /// A result with text and no events.
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            events: Vec::new(),
            text: text.into(),
        }
    }

    /// A result with text and events.
    #[must_use]
    pub fn new(text: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            events,
            text: text.into(),
        }
    }

    /// A result whose text is also appended to the log.
    #[must_use]
    pub fn logged(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            events: vec![Event::log(text.clone())],
            text,
        }
    }

    /// Returns true if nothing would change.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}
