//! The parsing front door: cache, parser chain, then validation.

use std::fmt;
use std::sync::Arc;

use ashvale_world::Catalog;
use tracing::{debug, warn};

use crate::cache::{CacheKey, DEFAULT_TTL_MS, ParseCache};
use crate::parser::{CommandParser, ParseInput, ParsedCommand, RuleParser};
use crate::validation::Validator;

/// Parses player text into validated commands.
///
/// An optional primary parser is tried first; if it fails, the rule parser
/// answers instead. Raw parses are cached, and validation always runs
/// against the current context.
pub struct ParseService {
    primary: Option<Box<dyn CommandParser>>,
    rules: RuleParser,
    validator: Validator,
    cache: ParseCache,
}

impl fmt::Debug for ParseService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseService")
            .field("primary", &self.primary.as_ref().map(|p| p.kind()))
            .field("cache_ttl_ms", &self.cache.ttl_ms())
            .finish_non_exhaustive()
    }
}

impl ParseService {
    /// A rules-only service with the default cache lifetime.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            primary: None,
            rules: RuleParser::new(),
            validator: Validator::new(catalog),
            cache: ParseCache::new(DEFAULT_TTL_MS),
        }
    }

    /// Tries `parser` before the rules.
    #[must_use]
    pub fn with_primary(mut self, parser: Box<dyn CommandParser>) -> Self {
        self.primary = Some(parser);
        self
    }

    /// Replaces the rule parser.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleParser) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the cache entry lifetime.
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl_ms: u64) -> Self {
        self.cache = ParseCache::new(ttl_ms);
        self
    }

    /// The parse cache.
    #[must_use]
    pub fn cache(&self) -> &ParseCache {
        &self.cache
    }

    /// Parses and validates one line of input.
    #[must_use]
    pub fn parse(&self, input: &ParseInput<'_>) -> ParsedCommand {
        let key = CacheKey::new(input.text, input.visible);
        let raw = if let Some(hit) = self.cache.get(&key, input.now_ms) {
            debug!(text = input.text, "parse cache hit");
            hit
        } else {
            let fresh = self.parse_uncached(input);
            self.cache.insert(key, fresh.clone(), input.now_ms);
            fresh
        };

        let checked = self
            .validator
            .validate(raw, input.visible, input.allowed_verbs);
        debug!(
            text = input.text,
            verb = %checked.command.verb,
            confidence = checked.confidence,
            parser = %checked.parser,
            "parsed command"
        );
        checked
    }

    fn parse_uncached(&self, input: &ParseInput<'_>) -> ParsedCommand {
        if let Some(primary) = &self.primary {
            match primary.parse(input) {
                Ok(parsed) => return parsed,
                Err(err) => warn!(error = %err, "primary parser failed; falling back to rules"),
            }
        }
        self.rules.parse_text(input.text, input.visible)
    }
}
