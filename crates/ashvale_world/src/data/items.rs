//! Items and loot tables.

use ashvale_foundation::ItemSlot;

use crate::item::{Item, ItemTag, ItemTier};
use crate::loot::LootTable;

pub(crate) fn items() -> Vec<Item> {
    vec![
        Item::new(
            "ember-1",
            "Loose Ember",
            "A palm-sized ember that glows with soft heat.",
        )
        .with_tag(ItemTag::Consumable)
        .with_ward(1),
        Item::new(
            "ember-2",
            "Warm Ember",
            "An ember taken from the chapel brazier.",
        )
        .with_tag(ItemTag::Consumable)
        .with_ward(1),
        Item::new(
            "ember-3",
            "Ashen Ember",
            "A spark salvaged from the monastery cloister.",
        )
        .with_tag(ItemTag::Consumable)
        .with_ward(1),
        Item::new(
            "ward-candle-1",
            "Ward Candle",
            "A beeswax candle infused with chapel ash.",
        )
        .with_tag(ItemTag::Consumable)
        .with_tag(ItemTag::Ward)
        .with_ward(2),
        Item::new(
            "ward-candle-2",
            "Ward Candle",
            "A candle recovered from the orchard shrine.",
        )
        .with_tag(ItemTag::Consumable)
        .with_tag(ItemTag::Ward)
        .with_ward(2),
        Item::new(
            "simple-key-crypt",
            "Crypt Key",
            "A simple iron key with bone-charm teeth.",
        )
        .with_tag(ItemTag::Key),
        Item::new(
            "embersteel-knife",
            "Embersteel Knife",
            "Short blade forged to hold heat against husks.",
        )
        .with_slot(ItemSlot::Hand)
        .with_power(2)
        .with_tag(ItemTag::Weapon),
        Item::new(
            "tempered-maul",
            "Tempered Maul",
            "Heavy hammer ringed with warding sigils.",
        )
        .with_slot(ItemSlot::Hand)
        .with_power(4)
        .with_tier(ItemTier::Tempered)
        .with_tag(ItemTag::Weapon),
        Item::new(
            "consecrated-visor",
            "Consecrated Visor",
            "Polished helm that glows faintly in darkness.",
        )
        .with_slot(ItemSlot::Head)
        .with_ward(5)
        .with_tier(ItemTier::Consecrated)
        .with_tag(ItemTag::Armor),
        Item::new(
            "reliquary-band",
            "Reliquary Band",
            "Silver band set with holy ash.",
        )
        .with_slot(ItemSlot::Trinket)
        .with_power(2)
        .with_ward(2)
        .with_tier(ItemTier::Relic)
        .with_tag(ItemTag::Trinket),
        shard("bell-shard-one", "Bell Shard I", "A cracked fragment of the Great Bell."),
        shard(
            "bell-shard-two",
            "Bell Shard II",
            "Another shard humming with distant tolls.",
        ),
        shard(
            "bell-shard-three",
            "Bell Shard III",
            "A shard etched with warding glyphs.",
        ),
        shard(
            "bell-shard-four",
            "Bell Shard IV",
            "The final shard, its edge warm with light.",
        ),
        shard(
            "bell-clapper",
            "Forged Bell Clapper",
            "Forged from four shards; pulses with slow light.",
        ),
    ]
}

fn shard(id: &str, name: &str, description: &str) -> Item {
    Item::new(id, name, description)
        .with_tier(ItemTier::Relic)
        .with_tag(ItemTag::Quest)
}

pub(crate) fn loot_tables() -> Vec<LootTable> {
    vec![
        LootTable::new("shambler-basic")
            .with_entry("embersteel-knife", 1)
            .with_guaranteed("ember-1", 2),
        LootTable::new("gloom-wolf")
            .with_guaranteed("ember-2", 1)
            .with_entry("ward-candle-2", 1),
        LootTable::new("bellwraith")
            .with_guaranteed("bell-shard-one", 1)
            .with_entry("tempered-maul", 1),
        LootTable::new("well-mother")
            .with_guaranteed("bell-shard-two", 1)
            .with_entry("consecrated-visor", 1),
        LootTable::new("prior-of-ash")
            .with_guaranteed("bell-shard-three", 1)
            .with_entry("reliquary-band", 1),
        LootTable::new("orchard-heart")
            .with_guaranteed("bell-shard-four", 1)
            .with_entry("ward-candle-1", 1),
    ]
}
