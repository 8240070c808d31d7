//! Integration tests for the parse service: rules, validation, and caching

use ashvale_engine::{Command, Verb};
use ashvale_foundation::Direction;
use ashvale_parser::validation::{OBJECT_NOT_PRESENT, VERB_NOT_ALLOWED};
use ashvale_parser::{ParseInput, ParseService};

use crate::support::Scene;

fn closed_exit(scene: &Scene) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|direction| !scene.visible.exits.contains(direction))
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn open_exit_passes_validation() {
    let scene = Scene::hub();
    let service = ParseService::new(scene.catalog());
    let exit = scene.visible.exits[0];
    let text = format!("go {exit}");
    let parsed = service.parse(&ParseInput::new(&text, &scene.visible, &scene.verbs));
    assert_eq!(parsed.command, Command::new(Verb::Go).with_object(exit.as_str()));
    assert!(parsed.confidence > 0.9);
}

#[test]
fn closed_exit_becomes_help() {
    let scene = Scene::hub();
    let Some(closed) = closed_exit(&scene) else {
        return;
    };
    let service = ParseService::new(scene.catalog());
    let text = closed.as_str().to_string();
    let parsed = service.parse(&ParseInput::new(&text, &scene.visible, &scene.verbs));
    assert_eq!(parsed.command.verb, Verb::Help);
    assert_eq!(parsed.rationale.as_deref(), Some(OBJECT_NOT_PRESENT));
    assert!(parsed.confidence <= 0.3);
}

#[test]
fn items_are_matched_by_catalog_name() {
    let scene = Scene::hub();
    let service = ParseService::new(scene.catalog());
    let parsed = service.parse(&ParseInput::new("grab the loose ember", &scene.visible, &scene.verbs));
    assert_eq!(parsed.command, Command::new(Verb::Take).with_object("loose ember"));

    let missing = service.parse(&ParseInput::new("grab the sword", &scene.visible, &scene.verbs));
    assert_eq!(missing.command.verb, Verb::Help);
    assert_eq!(missing.rationale.as_deref(), Some(OBJECT_NOT_PRESENT));
}

#[test]
fn attacking_an_absent_enemy_is_rejected() {
    let scene = Scene::at("mill-yard");
    let service = ParseService::new(scene.catalog());
    let parsed = service.parse(&ParseInput::new("attack the wraith", &scene.visible, &scene.verbs));
    assert_eq!(parsed.command.verb, Verb::Help);
}

#[test]
fn disallowed_verbs_become_help() {
    let scene = Scene::hub();
    let service = ParseService::new(scene.catalog());
    let allowed = [Verb::Look, Verb::Help];
    let parsed = service.parse(&ParseInput::new("pray", &scene.visible, &allowed));
    assert_eq!(parsed.command.verb, Verb::Help);
    assert_eq!(parsed.rationale.as_deref(), Some(VERB_NOT_ALLOWED));
}

// =============================================================================
// Caching
// =============================================================================

#[test]
fn cache_is_keyed_by_room() {
    let hub = Scene::hub();
    let crypt = Scene::at("ember-chapel-crypt");
    let service = ParseService::new(hub.catalog());

    let _ = service.parse(&ParseInput::new("look", &hub.visible, &hub.verbs));
    let _ = service.parse(&ParseInput::new("  LOOK ", &hub.visible, &hub.verbs));
    assert_eq!(service.cache().len(), 1);

    let _ = service.parse(&ParseInput::new("look", &crypt.visible, &crypt.verbs));
    assert_eq!(service.cache().len(), 2);
}

#[test]
fn cached_parses_are_revalidated() {
    let scene = Scene::hub();
    let service = ParseService::new(scene.catalog());
    let first = service.parse(&ParseInput::new("pray", &scene.visible, &scene.verbs));
    assert_eq!(first.command.verb, Verb::Pray);

    let narrowed = service.parse(&ParseInput::new("pray", &scene.visible, &[Verb::Help]));
    assert_eq!(narrowed.command.verb, Verb::Help);
    assert_eq!(service.cache().len(), 1);
}
