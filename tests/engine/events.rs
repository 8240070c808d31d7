//! Integration tests for event wire format and reducer invariants

use ashvale_engine::{EncounterPatch, EncounterStatus, Event, Fact, GameState, apply_events};
use ashvale_foundation::{ActorId, ItemId, ItemSlot, RoomId, SessionId, StatsDelta};
use proptest::prelude::*;
use serde_json::json;

fn state() -> GameState {
    GameState::new(SessionId::new("events"), RoomId::new("graysong-square"))
}

// =============================================================================
// Wire Format
// =============================================================================

#[test]
fn events_are_tagged_by_kind() {
    let event = Event::GiveItem {
        item: ItemId::new("ember-1"),
    };
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({ "kind": "giveItem", "payload": { "item": "ember-1" } })
    );

    let flag = Event::flag(Fact::ItemTaken(ItemId::new("ember-1")), true);
    assert_eq!(
        serde_json::to_value(&flag).unwrap(),
        json!({ "kind": "setFlag", "payload": { "fact": "item:taken:ember-1", "value": true } })
    );
}

#[test]
fn event_log_survives_json() {
    let events = vec![
        Event::Move {
            from: RoomId::new("graysong-square"),
            to: RoomId::new("old-road"),
        },
        Event::Equip {
            slot: ItemSlot::Hand,
            item: ItemId::new("embersteel-knife"),
        },
        Event::AdjustStats(StatsDelta::hp(-2)),
        Event::encounter(
            EncounterPatch::new()
                .with_enemy(ActorId::new("husk-1"))
                .with_status(EncounterStatus::Active),
        ),
        Event::UpdateEncounter(None),
        Event::PlayerDefeated,
        Event::log("The Night deepens."),
    ];
    let text = serde_json::to_string(&events).unwrap();
    let back: Vec<Event> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, events);
    assert_eq!(apply_events(&state(), &back), apply_events(&state(), &events));
}

#[test]
fn kind_names_match_the_wire() {
    let event = Event::PlayerHeal { amount: 2 };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["kind"], event.kind());
}

#[test]
fn newer_kinds_read_back_as_unknown() {
    let event: Event =
        serde_json::from_str(r#"{"kind":"teleport","payload":{"to":"nowhere","cost":3}}"#).unwrap();
    assert_eq!(event, Event::Unknown);

    let bare: Event = serde_json::from_str(r#"{"kind":"shimmer"}"#).unwrap();
    assert_eq!(bare, Event::Unknown);

    let listed: Event = serde_json::from_str(r#"{"kind":"chant","payload":["low","slow"]}"#).unwrap();
    assert_eq!(listed, Event::Unknown);
}

#[test]
fn a_stream_with_newer_kinds_still_replays() {
    let stream = json!([
        { "kind": "giveItem", "payload": { "item": "ember-1" } },
        { "kind": "teleport", "payload": { "to": "nowhere" } },
        { "kind": "playerDamage", "payload": { "amount": 3 } },
        { "kind": "unknown" },
    ]);
    let events: Vec<Event> = serde_json::from_value(stream).unwrap();
    assert_eq!(events[1], Event::Unknown);
    assert_eq!(events[3], Event::Unknown);

    let end = apply_events(&state(), &events);
    assert_eq!(end.inventory.len(), 1);
    assert_eq!(end.stats.hp, 7);
}

#[test]
fn malformed_known_kind_is_rejected() {
    let result = serde_json::from_str::<Event>(r#"{"kind":"giveItem","payload":{"amount":3}}"#);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("giveItem"), "{err}");
}

#[test]
fn unknown_survives_a_round_trip() {
    let text = serde_json::to_string(&Event::Unknown).unwrap();
    assert_eq!(serde_json::from_str::<Event>(&text).unwrap(), Event::Unknown);
}

// =============================================================================
// Reducer Invariants
// =============================================================================

fn arbitrary_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0i32..15).prop_map(|amount| Event::PlayerDamage { amount }),
        (0i32..15).prop_map(|amount| Event::PlayerHeal { amount }),
        (-5i32..5).prop_map(|hp| Event::AdjustStats(StatsDelta::hp(hp))),
        Just(Event::GiveItem { item: ItemId::new("ember-1") }),
        Just(Event::RemoveItem { item: ItemId::new("ember-1") }),
        Just(Event::Unknown),
        "[a-z ]{0,12}".prop_map(Event::log),
    ]
}

proptest! {
    #[test]
    fn reducer_never_mutates_its_input(events in prop::collection::vec(arbitrary_event(), 0..30)) {
        let start = state();
        let snapshot = start.clone();
        let _ = apply_events(&start, &events);
        prop_assert_eq!(start, snapshot);
    }

    #[test]
    fn health_stays_within_bounds(events in prop::collection::vec(arbitrary_event(), 0..30)) {
        let end = apply_events(&state(), &events);
        prop_assert!((0..=10).contains(&end.stats.hp));
    }
}
