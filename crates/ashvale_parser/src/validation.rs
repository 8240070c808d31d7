//! Checking a parse against what the player can actually do.
//!
//! A parse that names a forbidden verb, or an object that is not here, is
//! downgraded to `help` with confidence at most 0.3 so it is never executed
//! on the player's behalf.

use std::sync::Arc;

use ashvale_engine::{Verb, VisibleContext};
use ashvale_foundation::{Direction, ItemId};
use ashvale_world::Catalog;

use crate::parser::ParsedCommand;

/// Rationale when the verb has no handler.
pub const VERB_NOT_ALLOWED: &str = "Verb not allowed in current context";
/// Rationale when the object is not present.
pub const OBJECT_NOT_PRESENT: &str = "Referenced object not present";

/// Validates parsed commands against the visible context.
#[derive(Clone, Debug)]
pub struct Validator {
    catalog: Arc<Catalog>,
}

impl Validator {
    /// Creates a validator that resolves item names through `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Returns the parse unchanged, or downgraded to `help`.
    #[must_use]
    pub fn validate(
        &self,
        parsed: ParsedCommand,
        visible: &VisibleContext,
        allowed_verbs: &[Verb],
    ) -> ParsedCommand {
        if !allowed_verbs.contains(&parsed.command.verb) {
            return parsed.into_help(VERB_NOT_ALLOWED);
        }
        if !self.object_present(&parsed, visible) {
            return parsed.into_help(OBJECT_NOT_PRESENT);
        }
        parsed
    }

    fn object_present(&self, parsed: &ParsedCommand, visible: &VisibleContext) -> bool {
        let object = parsed.command.object().map(normalize);
        match parsed.command.verb {
            Verb::Go => object
                .and_then(|word| Direction::parse(&word))
                .is_some_and(|direction| visible.exits.contains(&direction)),
            Verb::Attack => match object {
                Some(query) => visible
                    .actors
                    .iter()
                    .any(|actor| normalize(actor.as_str()).contains(&query)),
                None => !visible.actors.is_empty(),
            },
            Verb::Take | Verb::Use | Verb::Equip => object.is_some_and(|query| {
                visible
                    .items
                    .iter()
                    .chain(visible.inventory.iter())
                    .any(|item| self.names_item(item, &query))
            }),
            _ => true,
        }
    }

    fn names_item(&self, item: &ItemId, query: &str) -> bool {
        let id = normalize(item.as_str());
        if id.contains(query) || query.contains(&id) {
            return true;
        }
        self.catalog.item(item.as_str()).is_some_and(|entry| {
            let name = normalize(&entry.name);
            name.contains(query) || query.contains(&name)
        })
    }
}

/// Lowercases and treats hyphens and underscores as spaces.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
