//! Verb-to-handler registry.
//!
//! Each verb may be claimed once. A second claim is a configuration fault
//! reported at startup, never at dispatch time.

use std::collections::BTreeMap;
use std::fmt;

use ashvale_foundation::{Error, ErrorKind, Result};

use crate::command::{Command, CommandResult, Verb};
use crate::dispatcher::CommandContext;
use crate::handlers;
use crate::state::GameState;

/// A verb handler. Pure: reads state, returns events.
pub type HandlerFn = fn(&GameState, &Command, &mut CommandContext<'_>) -> CommandResult;

/// The module a handler belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Module {
    /// Movement and room description.
    Map,
    /// Inventory and equipment.
    Items,
    /// Fighting and stats.
    Combat,
    /// Talk, prayer, and help.
    Core,
}

impl Module {
    /// The lowercase module name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Module::Map => "map",
            Module::Items => "items",
            Module::Combat => "combat",
            Module::Core => "core",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy)]
struct Registration {
    module: Module,
    handler: HandlerFn,
}

/// Maps verbs to handlers.
#[derive(Clone, Default)]
pub struct Registry {
    handlers: BTreeMap<Verb, Registration>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.handlers.iter().map(|(verb, reg)| (verb, reg.module)))
            .finish()
    }
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every module registered and checked for completeness.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateVerb` or `MissingVerbs` if the built-in modules
    /// disagree about who owns which verb.
    pub fn standard() -> Result<Self> {
        let mut registry = Self::new();
        handlers::register_all(&mut registry)?;
        registry.validate_complete()?;
        Ok(registry)
    }

    /// Claims a verb for a module.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateVerb` if the verb is already claimed.
    pub fn register(&mut self, module: Module, verb: Verb, handler: HandlerFn) -> Result<()> {
        if let Some(existing) = self.handlers.get(&verb) {
            return Err(Error::new(ErrorKind::DuplicateVerb {
                verb: verb.to_string(),
                existing: existing.module.to_string(),
            }));
        }
        self.handlers.insert(verb, Registration { module, handler });
        Ok(())
    }

    /// Handler for a verb.
    #[must_use]
    pub fn get(&self, verb: Verb) -> Option<HandlerFn> {
        self.handlers.get(&verb).map(|reg| reg.handler)
    }

    /// Module owning a verb.
    #[must_use]
    pub fn module_of(&self, verb: Verb) -> Option<Module> {
        self.handlers.get(&verb).map(|reg| reg.module)
    }

    /// Returns true if the verb has a handler.
    #[must_use]
    pub fn contains(&self, verb: Verb) -> bool {
        self.handlers.contains_key(&verb)
    }

    /// Registered verbs, sorted by word.
    #[must_use]
    pub fn verbs(&self) -> Vec<Verb> {
        let mut verbs: Vec<Verb> = self.handlers.keys().copied().collect();
        verbs.sort_by_key(|verb| verb.as_str());
        verbs
    }

    /// Number of registered verbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Checks that every verb has a handler.
    ///
    /// # Errors
    ///
    /// Returns `MissingVerbs` naming the unclaimed verbs.
    pub fn validate_complete(&self) -> Result<()> {
        let missing: Vec<String> = Verb::ALL
            .iter()
            .filter(|verb| !self.contains(**verb))
            .map(ToString::to_string)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::new(ErrorKind::MissingVerbs(missing)))
        }
    }
}
