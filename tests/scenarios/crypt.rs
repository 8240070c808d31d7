//! Clearing the chapel crypt

use ashvale_engine::Fact;
use ashvale_foundation::{ActorId, ItemId};
use ashvale_runtime::Disposition;

use crate::support::Player;

#[test]
fn descend_fight_and_scavenge() {
    let player = Player::new();
    let taken = player.say("take the loose ember");
    assert_eq!(taken.result_text.as_deref(), Some("You take the Loose Ember."));

    player.walk_to("ember-chapel-crypt");
    let view = player.processor.client_view(&player.session).unwrap();
    assert_eq!(view.location_name, "Chapel Crypt");
    assert!(view
        .visible_actors
        .iter()
        .all(|actor| actor.disposition == Disposition::Hostile));

    let blocked = player.say("grab the crypt key");
    assert_eq!(
        blocked.result_text.as_deref(),
        Some("A hostile presence keeps you from scavenging.")
    );

    for husk in ["husk-1", "husk-2"] {
        let opening = player.say("attack the husk");
        assert!(opening.result_text.unwrap().starts_with("You engage Husk!"));
        let finish = player.say("hit husk");
        assert!(finish.result_text.unwrap().contains("Husk collapses into ash."));
        let state = finish.state.unwrap();
        assert!(state.flag(&Fact::EnemyDefeated(ActorId::new(husk))));
        assert_eq!(state.stats.hp, 10);
    }

    let key = player.say("grab the crypt key");
    assert_eq!(key.result_text.as_deref(), Some("You take the Crypt Key."));
    let state = key.state.unwrap();
    assert!(state.has_item(&ItemId::new("simple-key-crypt")));
    assert_eq!(state.item_count(&ItemId::new("ember-1")), 3);
    assert_eq!(state.item_count(&ItemId::new("embersteel-knife")), 2);
}

#[test]
fn knife_from_the_husks_sharpens_the_next_fight() {
    let player = Player::new();
    player.walk_to("ember-chapel-crypt");
    player.say("attack husk");
    player.say("attack husk");

    let equipped = player.say("wield the embersteel knife");
    let client = equipped.client.unwrap();
    assert_eq!(client.effective_stats.power, 5);
    assert_eq!(client.stat_delta.and_then(|delta| delta.power), Some(2));

    let strike = player.say("attack husk");
    assert!(strike.result_text.unwrap().contains("You strike Husk for 5 damage."));
}
