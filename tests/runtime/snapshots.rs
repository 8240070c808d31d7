//! Integration tests for saving and restoring sessions

use std::path::PathBuf;

use ashvale_engine::{Command, Verb};
use ashvale_foundation::{ErrorKind, ItemId, ScriptedRandom};
use ashvale_runtime::serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
use ashvale_runtime::{AshvaleConfig, CommandProcessor};

fn processor() -> CommandProcessor {
    CommandProcessor::from_config(&AshvaleConfig::default())
        .unwrap()
        .with_random(Box::new(ScriptedRandom::constant(0.0)))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ashvale_{name}_{}.msgpack", std::process::id()))
}

#[test]
fn saved_session_resumes_in_another_process() {
    let first = processor();
    let session = first.sessions().create();
    first
        .run(&session, Command::new(Verb::Take).with_object("ember"))
        .unwrap();
    let state = first.sessions().require(&session).unwrap();
    let path = temp_path("resume");
    save_to_file(&state, &path).unwrap();

    let second = processor();
    let restored = second.sessions().restore(load_from_file(&path).unwrap());
    assert_eq!(restored, session);
    let resumed = second.sessions().require(&session).unwrap();
    assert_eq!(resumed, state);

    // The map regenerates identically from the id.
    assert_eq!(
        *first.sessions().graphs().get(&session).unwrap(),
        *second.sessions().graphs().get(&session).unwrap()
    );
    let again = second
        .run(&session, Command::new(Verb::Take).with_object("ember"))
        .unwrap();
    assert_eq!(again.result_text.as_deref(), Some("You already claimed that."));
    assert_eq!(again.state.unwrap().item_count(&ItemId::new("ember-1")), 1);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn bytes_round_trip() {
    let processor = processor();
    let session = processor.sessions().create();
    let state = processor.sessions().require(&session).unwrap();
    assert_eq!(from_bytes(&to_bytes(&state).unwrap()).unwrap(), state);
}

#[test]
fn corrupt_snapshot_is_a_serialization_error() {
    let err = from_bytes(&[0xc1, 0x00, 0xff]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
}

#[test]
fn missing_snapshot_is_an_io_error() {
    let err = load_from_file(temp_path("never-written")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}
