//! Victory, defeat, and starting over

use ashvale_engine::{Event, FALLEN_MESSAGE};
use ashvale_foundation::ItemId;
use ashvale_runtime::{Outcome, Repl, ScriptedEditor};

use crate::support::Player;

#[test]
fn reforging_the_clapper_wins() {
    let player = Player::new();
    let state = player.processor.sessions().require(&player.session).unwrap();
    let shards: Vec<Event> = ["bell-shard-one", "bell-shard-two", "bell-shard-three", "bell-shard-four"]
        .into_iter()
        .map(|id| Event::GiveItem { item: ItemId::new(id) })
        .collect();
    let _ = player.processor.sessions().update(&player.session, &state, &shards);

    let response = player.say("put together the shards");
    assert!(response.result_text.unwrap().contains("clapper is reforged"));
    let state = response.state.unwrap();
    assert!(state.is_victorious());
    assert!(state.has_item(&ItemId::new("bell-clapper")));
}

#[test]
fn fallen_player_restarts_from_the_repl() {
    let player = Player::new();
    let state = player.processor.sessions().require(&player.session).unwrap();
    let _ = player.processor.sessions().update(
        &player.session,
        &state,
        &[Event::PlayerDamage { amount: 10 }],
    );

    let mut repl = Repl::with_editor(ScriptedEditor::new(Vec::<String>::new()), player.processor, player.session)
        .without_banner();
    let Outcome::Output(locked) = repl.eval("look").unwrap() else {
        panic!("expected output");
    };
    assert_eq!(locked, format!("{FALLEN_MESSAGE}\n(Type :restart to begin again.)"));

    let _ = repl.eval(":restart").unwrap();
    let Outcome::Output(look) = repl.eval("look").unwrap() else {
        panic!("expected output");
    };
    assert!(look.starts_with("Graysong Square."));
}

#[test]
fn scripted_session_runs_to_quit() {
    let player = Player::new();
    let session = player.session.clone();
    let editor = ScriptedEditor::new(["look", "take the loose ember", ":quit", "pray"]);
    let mut repl = Repl::with_editor(editor, player.processor, session.clone()).without_banner();
    repl.run().unwrap();

    let state = repl.processor().sessions().require(&session).unwrap();
    assert!(state.has_item(&ItemId::new("ember-1")));
    assert_eq!(state.stats.hp, 10);
    assert_eq!(repl.editor().history().len(), 3);
}
