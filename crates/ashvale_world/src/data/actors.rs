//! Enemies, villagers, figures, and room prayers.

use ashvale_foundation::Stats;

use crate::actor::{Enemy, Figure, Npc};

pub(crate) fn enemies() -> Vec<Enemy> {
    vec![
        Enemy::new("husk-1", "Husk", Stats::new(4, 1, 0))
            .with_loot("shambler-basic")
            .with_description("A shambling villager hollowed by Night."),
        Enemy::new("husk-2", "Husk", Stats::new(4, 1, 0))
            .with_loot("shambler-basic")
            .with_description("Another husk dragging broken chains."),
        Enemy::new("shambler-1", "Shambler", Stats::new(6, 2, 0))
            .with_loot("shambler-basic")
            .with_description("A staggering corpse with a bell fragment in its chest."),
        Enemy::new("lantern-wisp-1", "Lantern Wisp", Stats::new(3, 1, 1))
            .with_loot("shambler-basic")
            .with_description("A hovering light that drains warmth."),
        Enemy::new("gloom-wolf-1", "Gloom Wolf", Stats::new(7, 3, 1))
            .with_loot("gloom-wolf")
            .with_description("A wolf wreathed in Night smoke."),
        Enemy::new("gloom-wolf-2", "Gloom Wolf", Stats::new(7, 3, 1))
            .with_loot("gloom-wolf")
            .with_description("A wolf with sap-stained jaws."),
        Enemy::new("bellwraith", "The Bellwraith", Stats::new(14, 4, 3))
            .with_loot("bellwraith")
            .with_description("A bound spirit wreathed in tolling light."),
        Enemy::new("well-mother", "The Well-Mother", Stats::new(16, 4, 2))
            .with_loot("well-mother")
            .with_description("Twisted caretaker of the flooded tunnels."),
        Enemy::new("prior-of-ash", "The Prior of Ash", Stats::new(18, 5, 3))
            .with_loot("prior-of-ash")
            .with_description("Once head of the monastery, now ash and embers."),
        Enemy::new("orchard-heart", "The Orchard Heart", Stats::new(20, 5, 4))
            .with_loot("orchard-heart")
            .with_description("A blight core pulsing beneath twisted roots."),
    ]
}

pub(crate) fn npcs() -> Vec<Npc> {
    vec![
        Npc::new("villager-ida", "Ida the Warden-Candle")
            .with_line(
                "Keep the embers close, Warden. Night-snakes lurk whenever the bell is silent.",
            )
            .with_line(
                "The bell cracked the night the Wardens fell. Bring back its voice and we all might sleep again.",
            ),
        Npc::new("villager-bryn", "Bryn the Miller")
            .with_line(
                "The millstones stopped when the river turned black. I hear whispers from the well at dusk.",
            )
            .with_line("Take this warning: the Orchard Heart roots itself deeper each night."),
    ]
}

pub(crate) fn figures() -> Vec<Figure> {
    vec![
        Figure::new(
            "chapel-guard-1",
            "Chapel Guard",
            "A hollow-eyed sentry who no longer remembers what he guards.",
        ),
        Figure::new(
            "bonebinder-1",
            "Bonebinder",
            "A robed shape knotting finger bones onto cord, deaf to the living.",
        ),
    ]
}

pub(crate) fn prayers() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "graysong-square",
            "You bow your head. The silent bell thirsts for its shards.",
        ),
        (
            "ember-chapel-nave",
            "The chapel hums. A whisper says: descend and face the Bellwraith.",
        ),
        (
            "witchwell-approach",
            "Cold water answers: cleanse the well and the shard will shine.",
        ),
        (
            "hollow-monastery-gate",
            "Ashy wind encircles you: light the cloister braziers before the Prior falls.",
        ),
        (
            "orchard-path",
            "Roots twist beneath your feet. Burn the knots to expose the Heart.",
        ),
    ]
}
