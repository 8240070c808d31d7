//! Verb phrases, prepositions, and filler words.
//!
//! Verbs are recognised by phrases: one or more consecutive words, optionally
//! required at the start of the input. Entries are tried in registration
//! order and the first verb with a matching phrase wins, so `take a look`
//! is a `take` and `look around` is a `look`.

use ashvale_engine::Verb;
use ashvale_foundation::Direction;

/// A run of words that names a verb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phrase {
    words: Vec<String>,
    anchored: bool,
}

impl Phrase {
    /// A phrase that may appear anywhere in the input.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
            anchored: false,
        }
    }

    /// A phrase that must open the input.
    #[must_use]
    pub fn leading(text: &str) -> Self {
        Self {
            anchored: true,
            ..Self::new(text)
        }
    }

    /// Number of words in the phrase.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true for a phrase with no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Index of the first occurrence in `words`.
    #[must_use]
    pub fn find_in(&self, words: &[String]) -> Option<usize> {
        if self.words.is_empty() || words.len() < self.words.len() {
            return None;
        }
        let last = if self.anchored { 0 } else { words.len() - self.words.len() };
        (0..=last).find(|&start| {
            words[start..start + self.words.len()]
                .iter()
                .zip(&self.words)
                .all(|(word, expected)| word == expected)
        })
    }
}

/// Where a verb phrase matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerbMatch {
    /// The matched verb.
    pub verb: Verb,
    /// Index of the phrase's first word.
    pub start: usize,
    /// Number of words in the phrase.
    pub len: usize,
}

/// The verb phrases, prepositions, and filler words the parser knows.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    verbs: Vec<(Verb, Vec<Phrase>)>,
    prepositions: Vec<String>,
    fillers: Vec<String>,
}

impl Vocabulary {
    /// An empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard English vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        let mut vocab = Self::new();
        vocab.add_verb(Verb::Look, vec![
            Phrase::leading("look"),
            Phrase::new("look around"),
            Phrase::new("study"),
            Phrase::new("examine"),
        ]);
        vocab.add_synonyms(Verb::Inventory, &["inventory", "bag", "satchel"]);
        vocab.add_synonyms(Verb::Attack, &["attack", "hit", "strike", "swing", "fight"]);
        vocab.add_synonyms(Verb::Take, &["take", "grab", "pick up", "pickup", "get", "scoop"]);
        vocab.add_synonyms(Verb::Use, &["use", "light", "ignite", "consume", "drink"]);
        vocab.add_synonyms(Verb::Combine, &[
            "combine",
            "assemble",
            "forge",
            "join",
            "put together",
            "piece together",
            "reforge",
        ]);
        vocab.add_synonyms(Verb::Equip, &["equip", "wear", "don", "wield"]);
        vocab.add_synonyms(Verb::Unequip, &["unequip", "remove", "doff", "unwear"]);
        vocab.add_synonyms(Verb::Stats, &["stat", "stats", "status", "health"]);
        vocab.add_synonyms(Verb::Pray, &["pray", "kneel", "beseech"]);
        vocab.add_synonyms(Verb::Go, &["go", "walk", "run", "head"]);
        vocab.add_synonyms(Verb::Map, &["map", "world map", "show map"]);

        vocab.prepositions = ["on", "with", "at", "to", "into", "in", "from"]
            .into_iter()
            .map(str::to_string)
            .collect();
        vocab.fillers = ["the", "a", "an", "my", "some"]
            .into_iter()
            .map(str::to_string)
            .collect();
        vocab
    }

    /// Adds phrases for a verb, after any already registered.
    pub fn add_verb(&mut self, verb: Verb, phrases: Vec<Phrase>) {
        match self.verbs.iter_mut().find(|(existing, _)| *existing == verb) {
            Some((_, existing)) => existing.extend(phrases),
            None => self.verbs.push((verb, phrases)),
        }
    }

    /// Adds unanchored phrases for a verb.
    pub fn add_synonyms(&mut self, verb: Verb, phrases: &[&str]) {
        self.add_verb(verb, phrases.iter().map(|text| Phrase::new(text)).collect());
    }

    /// Finds the first verb with a phrase in `words`.
    #[must_use]
    pub fn match_verb(&self, words: &[String]) -> Option<VerbMatch> {
        self.verbs.iter().find_map(|(verb, phrases)| {
            phrases.iter().find_map(|phrase| {
                phrase.find_in(words).map(|start| VerbMatch {
                    verb: *verb,
                    start,
                    len: phrase.len(),
                })
            })
        })
    }

    /// Resolves a direction word or alias.
    #[must_use]
    pub fn direction(&self, word: &str) -> Option<Direction> {
        Direction::parse(word)
    }

    /// First direction word in `words`.
    #[must_use]
    pub fn first_direction(&self, words: &[String]) -> Option<Direction> {
        words.iter().find_map(|word| self.direction(word))
    }

    /// Returns true if the word is a known preposition.
    #[must_use]
    pub fn is_preposition(&self, word: &str) -> bool {
        self.prepositions.iter().any(|p| p == word)
    }

    /// Returns true if the word is an article or similar filler.
    #[must_use]
    pub fn is_filler(&self, word: &str) -> bool {
        self.fillers.iter().any(|f| f == word)
    }
}
