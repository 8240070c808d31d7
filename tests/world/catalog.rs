//! Integration tests for the standard catalog

use ashvale_foundation::{ActorId, ItemId, ItemSlot, LootTableId, RoomId, ScriptedRandom};
use ashvale_world::{ActorKind, Catalog, HUB_ROOM};

fn catalog() -> Catalog {
    Catalog::standard().unwrap()
}

// =============================================================================
// Consistency
// =============================================================================

#[test]
fn standard_catalog_validates() {
    catalog().validate().unwrap();
}

#[test]
fn hub_is_a_known_room() {
    let catalog = catalog();
    let hub = catalog.room(&RoomId::new(HUB_ROOM)).unwrap();
    assert_eq!(hub.name, "Graysong Square");
    assert_eq!(catalog.layout().hub, RoomId::new(HUB_ROOM));
}

#[test]
fn every_shard_has_a_boss_and_an_item() {
    let catalog = catalog();
    let layout = catalog.layout();
    assert_eq!(layout.bosses.len(), 4);
    for shard in layout.shards() {
        assert!(catalog.item(shard.as_str()).is_some(), "missing shard {shard}");
    }
    assert!(catalog.item(layout.relic.as_str()).is_some());
}

// =============================================================================
// Lookups
// =============================================================================

#[test]
fn actors_are_classified() {
    let catalog = catalog();
    assert_eq!(catalog.actor_kind(&ActorId::new("husk-1")), Some(ActorKind::Enemy));
    assert_eq!(catalog.actor_kind(&ActorId::new("villager-ida")), Some(ActorKind::Npc));
    assert_eq!(catalog.actor_kind(&ActorId::new("nobody")), None);
}

#[test]
fn names_fall_back_to_humanized_ids() {
    let catalog = catalog();
    assert_eq!(catalog.item_name(&ItemId::new("ember-1")), "Loose Ember");
    assert_eq!(catalog.actor_name(&ActorId::new("husk-2")), "Husk");
    assert_ne!(catalog.actor_name(&ActorId::new("stray-cat")), "");
}

#[test]
fn knife_is_a_hand_weapon() {
    let catalog = catalog();
    let knife = catalog.item("embersteel-knife").unwrap();
    assert_eq!(knife.slot, Some(ItemSlot::Hand));
    assert_eq!(knife.power_bonus(), 2);
    assert!(knife.is_equipable());
    assert!(!knife.is_consumable());
}

#[test]
fn husks_hit_softly() {
    let husk = catalog().enemy("husk-1").unwrap().clone();
    assert_eq!((husk.stats.hp, husk.stats.power, husk.stats.ward), (4, 1, 0));
}

// =============================================================================
// Loot
// =============================================================================

#[test]
fn boss_tables_always_drop_their_shard() {
    let catalog = catalog();
    for boss in &catalog.layout().bosses {
        let enemies: Vec<_> = catalog
            .room(&boss.room)
            .unwrap()
            .actors
            .iter()
            .filter_map(|actor| catalog.enemy(actor.as_str()))
            .collect();
        assert!(!enemies.is_empty(), "boss room {} has no enemy", boss.room);
        let table: &LootTableId = enemies[0].loot_table.as_ref().unwrap();
        for roll in [0.0, 0.5, 0.99] {
            let drops = catalog
                .loot_table(table)
                .unwrap()
                .roll(&mut ScriptedRandom::constant(roll));
            assert!(drops.contains(&boss.shard), "{table} missed {}", boss.shard);
        }
    }
}
