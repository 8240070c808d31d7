//! Built-in content for the Ashen Vale.

mod actors;
mod items;
mod rooms;

pub(crate) use actors::{enemies, figures, npcs, prayers};
pub(crate) use items::{items, loot_tables};
pub(crate) use rooms::room_templates;

use ashvale_foundation::Direction;

use crate::layout::{Chain, WorldLayout};
use crate::template::RoomChain;

/// Hub of the standard world.
pub const HUB_ROOM: &str = "graysong-square";

pub(crate) fn layout() -> WorldLayout {
    WorldLayout::new(HUB_ROOM, "bell-clapper")
        .with_chain(
            Chain::new(RoomChain::Chapel)
                .fixed("ember-chapel-nave", Direction::Up, "bell-tower")
                .fixed("ember-chapel-nave", Direction::Down, "ember-chapel-crypt")
                .fixed("ember-chapel-crypt", Direction::Down, "ember-chapel-depths"),
        )
        .with_chain(
            Chain::new(RoomChain::Well).fixed(
                "witchwell-approach",
                Direction::Down,
                "witchwell-pool",
            ),
        )
        .with_chain(
            Chain::new(RoomChain::Monastery)
                .horizontal("hollow-monastery-gate", "hollow-monastery-cloister")
                .horizontal("hollow-monastery-cloister", "hollow-monastery-reliquary"),
        )
        .with_chain(Chain::new(RoomChain::Orchard).horizontal("orchard-path", "orchard-heart"))
        .with_chain(Chain::new(RoomChain::Misc).fixed("mill-yard", Direction::Up, "mill-loft"))
        .with_zone_entry("ember-chapel-nave")
        .with_zone_entry("hollow-monastery-gate")
        .with_zone_entry("orchard-path")
        .with_zone_entry("old-road")
        .with_connector("old-road", "witchwell-approach")
        .with_boss("ember-chapel-depths", "ember-chapel-nave", "bell-shard-one")
        .with_boss("witchwell-pool", "witchwell-approach", "bell-shard-two")
        .with_boss(
            "hollow-monastery-reliquary",
            "hollow-monastery-gate",
            "bell-shard-three",
        )
        .with_boss("orchard-heart", "orchard-path", "bell-shard-four")
        .with_sealed("bell-tower")
}
