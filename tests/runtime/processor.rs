//! Integration tests for text and structured command processing

use ashvale_engine::{Command, Verb};
use ashvale_foundation::{ItemSlot, ScriptedRandom, SessionId};
use ashvale_parser::ParserKind;
use ashvale_runtime::{AshvaleConfig, CommandProcessor, CommandRequest, Disposition};

fn processor() -> CommandProcessor {
    CommandProcessor::from_config(&AshvaleConfig::default())
        .unwrap()
        .with_random(Box::new(ScriptedRandom::constant(0.0)))
}

// =============================================================================
// Text Requests
// =============================================================================

#[test]
fn confident_text_runs_immediately() {
    let processor = processor();
    let session = processor.sessions().create();
    let response = processor
        .execute(&session, &CommandRequest::text("pick up the loose ember"))
        .unwrap();

    assert!(!response.needs_confirm);
    assert_eq!(response.result_text.as_deref(), Some("You take the Loose Ember."));
    let nlu = response.nlu.unwrap();
    assert_eq!(nlu.canonical, Command::new(Verb::Take).with_object("loose ember"));
    assert_eq!(nlu.parser, ParserKind::Rule);
    assert_eq!(nlu.raw_text, "pick up the loose ember");

    let client = response.client.unwrap();
    assert_eq!(client.inventory_groups.len(), 1);
    assert_eq!(client.inventory_groups[0].name, "Loose Ember");
    assert_eq!(client.inventory_groups[0].quantity, 1);
}

#[test]
fn unsure_text_asks_then_runs_when_confirmed() {
    let processor = processor();
    let session = processor.sessions().create();

    let question = processor
        .execute(&session, &CommandRequest::text("hum a tune"))
        .unwrap();
    assert!(question.needs_confirm);
    assert!(question.result_text.is_none());
    assert!(question.state.is_none());
    let nlu = question.nlu.unwrap();
    assert_eq!(nlu.canonical.verb, Verb::Help);
    assert!(nlu.confidence < 0.5);

    let answer = processor
        .execute(&session, &CommandRequest::text("hum a tune").confirmed())
        .unwrap();
    assert!(!answer.needs_confirm);
    assert!(answer.result_text.unwrap().starts_with("Available commands:"));
}

#[test]
fn structured_commands_skip_the_parser() {
    let processor = processor();
    let session = processor.sessions().create();
    let response = processor.run(&session, Command::new(Verb::Stats)).unwrap();
    assert!(response.nlu.is_none());
    assert!(processor.parser().cache().is_empty());
    assert!(response.result_text.unwrap().contains("Power: 3"));
}

#[test]
fn structured_command_wins_over_text() {
    let processor = processor();
    let session = processor.sessions().create();
    let request = CommandRequest {
        text: Some("attack everything".to_string()),
        command: Some(Command::new(Verb::Look)),
        confirm: false,
    };
    let response = processor.execute(&session, &request).unwrap();
    let nlu = response.nlu.unwrap();
    assert_eq!(nlu.canonical, Command::new(Verb::Look));
    assert!((nlu.confidence - 1.0).abs() < f64::EPSILON);
    assert!(response.result_text.unwrap().starts_with("Graysong Square."));
}

#[test]
fn empty_request_reports_an_error_field() {
    let processor = processor();
    let response = processor
        .execute(&SessionId::new("quiet"), &CommandRequest::default())
        .unwrap();
    assert_eq!(response.error.as_deref(), Some("Provide text or command payload"));
    assert!(processor.sessions().get(&SessionId::new("quiet")).is_none());
}

// =============================================================================
// Client View
// =============================================================================

#[test]
fn hub_view_lists_villager_and_empty_slots() {
    let processor = processor();
    let session = processor.sessions().create();
    let view = processor.client_view(&session).unwrap();

    assert_eq!(view.location_name, "Graysong Square");
    assert!(!view.exits.is_empty());
    assert_eq!(view.equipment.len(), ItemSlot::ALL.len());
    assert!(view.equipment.iter().all(|slot| slot.item_id.is_none()));
    assert_eq!(view.visible_actors.len(), 1);
    assert_eq!(view.visible_actors[0].disposition, Disposition::Friendly);
    assert_eq!(view.room_graph.hub().as_str(), "graysong-square");
}

#[test]
fn view_serializes_in_camel_case() {
    let processor = processor();
    let session = processor.sessions().create();
    let view = processor.client_view(&session).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert!(json.get("inventoryGroups").is_some());
    assert!(json.get("effectiveStats").is_some());
    assert!(json.get("locationName").is_some());
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn concurrent_requests_on_one_session_all_land() {
    let processor = processor();
    let session = processor.sessions().create();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..5 {
                    let response = processor
                        .execute(&session, &CommandRequest::command(Command::new(Verb::Look)))
                        .unwrap();
                    assert!(response.error.is_none());
                }
            });
        }
    });

    let state = processor.sessions().get(&session).unwrap();
    assert_eq!(state.log.len(), 40);
}
