//! Integration tests for the verb registry and dispatcher fallbacks

use ashvale_engine::{Command, CommandContext, CommandResult, GameState, Module, Registry, Verb};
use ashvale_foundation::ErrorKind;

fn silent(_: &GameState, _: &Command, _: &mut CommandContext<'_>) -> CommandResult {
    CommandResult::message("")
}

#[test]
fn standard_registry_covers_every_verb() {
    let registry = Registry::standard().unwrap();
    assert_eq!(registry.len(), Verb::ALL.len());
    for verb in Verb::ALL {
        assert!(registry.contains(verb), "{verb} unregistered");
    }
    assert_eq!(registry.module_of(Verb::Go), Some(Module::Map));
    assert_eq!(registry.module_of(Verb::Attack), Some(Module::Combat));
    assert_eq!(registry.module_of(Verb::Equip), Some(Module::Items));
    assert_eq!(registry.module_of(Verb::Talk), Some(Module::Core));
}

#[test]
fn verbs_are_listed_alphabetically() {
    let verbs = Registry::standard().unwrap().verbs();
    let words: Vec<&str> = verbs.iter().map(|verb| verb.as_str()).collect();
    let mut sorted = words.clone();
    sorted.sort_unstable();
    assert_eq!(words, sorted);
}

#[test]
fn second_claim_on_a_verb_fails() {
    let mut registry = Registry::standard().unwrap();
    let err = registry
        .register(Module::Core, Verb::Look, silent)
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::DuplicateVerb { ref verb, ref existing } if verb == "look" && existing == "map"
    ));
}

#[test]
fn incomplete_registry_names_missing_verbs() {
    let mut registry = Registry::new();
    for verb in Verb::ALL.into_iter().filter(|verb| *verb != Verb::Pray) {
        registry.register(Module::Core, verb, silent).unwrap();
    }
    let err = registry.validate_complete().unwrap_err();
    assert_eq!(err.to_string(), "no handler registered for verbs: pray");
}
