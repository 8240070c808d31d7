//! Integration tests for the keyword parser

use ashvale_engine::{Command, Verb};
use ashvale_foundation::Direction;
use ashvale_parser::{ParserKind, RuleParser};

use crate::support::Scene;

// =============================================================================
// Movement
// =============================================================================

#[test]
fn bare_direction_is_a_confident_go() {
    let scene = Scene::hub();
    let parsed = RuleParser::new().parse_text("N", &scene.visible);
    assert_eq!(parsed.command, Command::new(Verb::Go).with_object("north"));
    assert!((parsed.confidence - 0.95).abs() < f64::EPSILON);
    assert_eq!(parsed.parser, ParserKind::Rule);
    assert_eq!(parsed.rationale.as_deref(), Some("Rule-based parse for \"N\""));
}

#[test]
fn movement_phrases_find_the_direction() {
    let scene = Scene::hub();
    let parser = RuleParser::new();
    for text in ["go west", "walk to the west", "head west please"] {
        let parsed = parser.parse_text(text, &scene.visible);
        assert_eq!(parsed.command, Command::new(Verb::Go).with_object(Direction::West.as_str()), "{text}");
        assert!((parsed.confidence - 0.95).abs() < f64::EPSILON);
    }
}

#[test]
fn go_without_direction_is_less_certain() {
    let scene = Scene::hub();
    let parsed = RuleParser::new().parse_text("go somewhere", &scene.visible);
    assert_eq!(parsed.command, Command::new(Verb::Go));
    assert!((parsed.confidence - 0.92).abs() < f64::EPSILON);
}

// =============================================================================
// Objects
// =============================================================================

#[test]
fn fillers_are_dropped_from_objects() {
    let scene = Scene::hub();
    let parsed = RuleParser::new().parse_text("pick up the loose ember", &scene.visible);
    assert_eq!(parsed.command, Command::new(Verb::Take).with_object("loose ember"));
}

#[test]
fn visible_ids_win_over_free_text() {
    let scene = Scene::at("ember-chapel-crypt");
    let parsed = RuleParser::new().parse_text("strike the husk!", &scene.visible);
    assert_eq!(parsed.command, Command::new(Verb::Attack).with_object("husk-1"));
}

#[test]
fn prepositions_split_object_and_target() {
    let scene = Scene::hub();
    let parsed = RuleParser::new().parse_text("use the candle on my knife", &scene.visible);
    assert_eq!(
        parsed.command,
        Command::new(Verb::Use)
            .with_object("candle")
            .with_preposition("on")
            .with_target("knife")
    );
}

#[test]
fn leading_verb_word_is_recognised() {
    let scene = Scene::hub();
    let parsed = RuleParser::new().parse_text("talk to ida", &scene.visible);
    assert_eq!(parsed.command, Command::new(Verb::Talk).with_object("ida"));
    assert!((parsed.confidence - 0.9).abs() < f64::EPSILON);
}

#[test]
fn gibberish_falls_back_to_help() {
    let scene = Scene::hub();
    let parsed = RuleParser::new().parse_text("xyzzy plugh", &scene.visible);
    assert_eq!(parsed.command.verb, Verb::Help);
    assert!((parsed.confidence - 0.2).abs() < f64::EPSILON);
    assert_eq!(parsed.rationale.as_deref(), Some("Fallback help command"));
}
