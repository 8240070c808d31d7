//! Integration tests for error types

use ashvale_foundation::{Error, ErrorContext, ErrorKind, RoomId, SessionId};

// =============================================================================
// Classification
// =============================================================================

#[test]
fn configuration_faults_stop_startup() {
    assert!(Error::config("bad threshold").is_configuration_fault());
    assert!(Error::invalid_world("dangling exit").is_configuration_fault());
    assert!(Error::new(ErrorKind::MissingVerbs(vec!["pray".into()])).is_configuration_fault());
}

#[test]
fn runtime_faults_are_not_configuration() {
    assert!(!Error::new(ErrorKind::UnknownSession(SessionId::new("gone"))).is_configuration_fault());
    assert!(!Error::new(ErrorKind::IoError("disk full".into())).is_configuration_fault());
    assert!(!Error::unknown_room(RoomId::new("void")).is_configuration_fault());
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn messages_name_the_offender() {
    let err = Error::new(ErrorKind::UnknownSession(SessionId::new("abc")));
    assert_eq!(err.to_string(), "unknown session \"abc\"");

    let err = Error::new(ErrorKind::MissingVerbs(vec!["pray".into(), "talk".into()]));
    assert_eq!(err.to_string(), "no handler registered for verbs: pray, talk");
}

#[test]
fn context_is_carried_alongside_kind() {
    let err = Error::unknown_room(RoomId::new("nowhere")).with_context(
        ErrorContext::new()
            .with_session(SessionId::new("abc"))
            .with_operation("visibility")
            .with_frame("dispatch"),
    );
    assert_eq!(err.to_string(), "unknown room id \"nowhere\"");
    let context = err.context.expect("context attached");
    let rendered = context.to_string();
    assert!(rendered.starts_with("during visibility for session abc"));
    assert!(rendered.contains("in dispatch"));
}
