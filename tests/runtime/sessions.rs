//! Integration tests for session lifecycle: creation, expiry, capacity, restart

use std::sync::Arc;

use ashvale_engine::{Command, Event, Verb};
use ashvale_foundation::{ErrorKind, ItemId, SessionId};
use ashvale_runtime::{AshvaleConfig, Clock, CommandProcessor, ManualClock, SessionStore, StoreConfig};

fn processor(store: StoreConfig) -> (CommandProcessor, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_000));
    let config = AshvaleConfig {
        store,
        ..AshvaleConfig::default()
    };
    let processor = CommandProcessor::from_config_with_clock(&config, clock.clone()).unwrap();
    (processor, clock)
}

// =============================================================================
// Creation
// =============================================================================

#[test]
fn new_sessions_start_in_the_hub() {
    let (processor, _) = processor(StoreConfig::default());
    let a = processor.sessions().create();
    let b = processor.sessions().create();
    assert_ne!(a, b);
    let state = processor.sessions().require(&a).unwrap();
    assert_eq!(state.room.as_str(), "graysong-square");
    assert!(state.inventory.is_empty());
}

#[test]
fn unknown_sessions_are_reported() {
    let (processor, _) = processor(StoreConfig::default());
    let err = processor.sessions().require(&SessionId::new("ghost")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownSession(ref id) if id.as_str() == "ghost"));
}

#[test]
fn executing_against_a_new_id_creates_it() {
    let (processor, _) = processor(StoreConfig::default());
    let session = SessionId::new("walk-in");
    let response = processor.run(&session, Command::new(Verb::Look)).unwrap();
    assert!(response.state.is_some());
    assert!(processor.sessions().get(&session).is_some());
}

// =============================================================================
// Expiry and Capacity
// =============================================================================

#[test]
fn idle_sessions_expire() {
    let (processor, clock) = processor(StoreConfig {
        ttl_secs: 60,
        ..StoreConfig::default()
    });
    let session = processor.sessions().create();
    processor.run(&session, Command::new(Verb::Look)).unwrap();
    assert!(processor.sessions().graphs().contains(&session));

    clock.advance(60_000);
    assert!(processor.sessions().prune(clock.now_ms()).is_empty());

    clock.advance(1);
    assert_eq!(processor.sessions().prune(clock.now_ms()), vec![session.clone()]);
    assert!(processor.sessions().get(&session).is_none());
    assert!(!processor.sessions().graphs().contains(&session));
}

#[test]
fn activity_refreshes_expiry() {
    let (processor, clock) = processor(StoreConfig {
        ttl_secs: 60,
        ..StoreConfig::default()
    });
    let session = processor.sessions().create();
    clock.advance(50_000);
    processor.run(&session, Command::new(Verb::Look)).unwrap();
    clock.advance(50_000);
    assert!(processor.sessions().prune(clock.now_ms()).is_empty());
}

#[test]
fn oldest_session_is_evicted_at_capacity() {
    let (processor, clock) = processor(StoreConfig {
        max_sessions: 2,
        ..StoreConfig::default()
    });
    let oldest = processor.sessions().create();
    clock.advance(10);
    let middle = processor.sessions().create();
    clock.advance(10);
    let newest = processor.sessions().create();

    assert!(processor.sessions().get(&oldest).is_none());
    assert!(processor.sessions().get(&middle).is_some());
    assert!(processor.sessions().get(&newest).is_some());
    assert_eq!(processor.sessions().store().len(), 2);
}

#[test]
fn stored_events_keep_only_the_tail() {
    let (processor, _) = processor(StoreConfig {
        max_events: 2,
        ..StoreConfig::default()
    });
    let session = processor.sessions().create();
    let state = processor.sessions().require(&session).unwrap();
    let events: Vec<Event> = (0..5).map(|i| Event::log(format!("line {i}"))).collect();
    let _ = processor.sessions().update(&session, &state, &events);

    let record = processor.sessions().store().get(&session).unwrap();
    assert_eq!(record.events, vec![Event::log("line 3"), Event::log("line 4")]);
    assert_eq!(record.state.log.len(), 5);
}

// =============================================================================
// Restart
// =============================================================================

#[test]
fn restart_clears_progress_but_keeps_the_map() {
    let (processor, _) = processor(StoreConfig::default());
    let session = processor.sessions().create();
    processor
        .run(&session, Command::new(Verb::Take).with_object("ember"))
        .unwrap();
    let graph = processor.sessions().graphs().get(&session).unwrap();

    let fresh = processor.sessions().restart(&session);
    assert!(!fresh.has_item(&ItemId::new("ember-1")));
    assert!(fresh.flags.is_empty());
    let after = processor.sessions().graphs().get(&session).unwrap();
    assert!(Arc::ptr_eq(&graph, &after));
}
